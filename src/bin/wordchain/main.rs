//! Reads text from a file or URL, builds a chain from it, and prints generated text.
//!
//! Usage: wordchain [OPTIONS] <file|url> <SOURCE>
//! Using `cargo run`: `cargo run -- file data/eggs.txt -n 50`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{debug, LevelFilter};
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use wordchain::{Chain, DEFAULT_NUM_WORDS};

mod source;

use source::TextSource;

/// Generate text by walking a word level Markov chain
#[derive(Debug, Parser)]
#[command(name = "wordchain", version, about)]
struct Cli {
    #[command(subcommand)]
    source: SourceCommand,

    /// Maximum number of words to generate
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = DEFAULT_NUM_WORDS,
        env = "WORDCHAIN_NUM_WORDS",
        global = true
    )]
    num_words: usize,

    /// Seed for reproducible output
    #[arg(long, value_name = "SEED", env = "WORDCHAIN_SEED", global = true)]
    seed: Option<u64>,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum SourceCommand {
    /// Read the text from a file
    File {
        path: PathBuf,

        /// Directory relative paths are looked up in
        #[arg(long, value_name = "DIR", env = "WORDCHAIN_DATA_DIR")]
        data_dir: Option<PathBuf>,
    },
    /// Fetch the text from a URL
    Url { url: String },
}

impl From<&SourceCommand> for TextSource {
    fn from(value: &SourceCommand) -> Self {
        match value {
            SourceCommand::File { path, data_dir } => TextSource::file(path, data_dir.as_deref()),
            SourceCommand::Url { url } => TextSource::Url(url.clone()),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = TextSource::from(&cli.source);
    let text = source
        .read()
        .with_context(|| format!("could not read text from {source}"))?;

    let chain = Chain::from_text(&text);
    debug!("generating up to {} words", cli.num_words);

    let generated = match cli.seed {
        Some(seed) => chain.generate(&mut StdRng::seed_from_u64(seed), cli.num_words),
        None => chain.generate(&mut thread_rng(), cli.num_words),
    }
    .with_context(|| format!("could not generate text from {source}"))?;

    println!("{generated}");
    Ok(())
}
