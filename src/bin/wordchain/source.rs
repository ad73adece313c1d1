//! Places text can be read from.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use reqwest::blocking::Client;
use wordchain::{Error, Result};

/// Where the text to build a chain from comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    File(PathBuf),
    Url(String),
}

impl TextSource {
    /// A file source. Relative paths are looked up in `data_dir` when one is given.
    pub fn file(path: &Path, data_dir: Option<&Path>) -> Self {
        match data_dir {
            Some(dir) if path.is_relative() => Self::File(dir.join(path)),
            _ => Self::File(path.to_path_buf()),
        }
    }

    /// Reads the whole text. Any failure is an [`Error::InvalidInput`].
    pub fn read(&self) -> Result<String> {
        info!("reading text from {self}");
        let text = match self {
            Self::File(path) => fs::read_to_string(path).map_err(|e| {
                Error::InvalidInput(format!("error reading file {}: {e}", path.display()))
            })?,
            Self::Url(url) => fetch(url)?,
        };
        debug!("read {} bytes from {self}", text.len());
        Ok(text)
    }
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Url(url) => write!(f, "url {url}"),
        }
    }
}

fn fetch(url: &str) -> Result<String> {
    Client::new()
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(|e| Error::InvalidInput(format!("error fetching {url}: {e}")))
}
