//! Dead simple text generation using markov chains.
//!
//! This generator uses first order Markov chains over words, that is, it looks at one word at a
//! time and then guesses what the next might be. A word is whatever sits between spaces, carriage
//! returns and line feeds in the source text; see [`token`].
//!
//! Every word remembers each word that ever followed it, duplicates included, plus a
//! [`Successor::End`] if it was the last word of the text. Picking uniformly among those makes
//! common transitions more likely, and drawing the end marker stops generation early. Generated
//! text is therefore at most as long as you ask for, but may be shorter.
//!
//! ```
//! use wordchain::{Chain, Successor};
//! use rand::thread_rng;
//!
//! let chain = Chain::from_text("the cat in the hat");
//! assert_eq!(
//!     chain.successors("the").unwrap(),
//!     [Successor::from("cat"), Successor::from("hat")]
//! );
//!
//! let text = chain.generate(&mut thread_rng(), 10).unwrap();
//! assert!((1..=10).contains(&text.split(' ').count()));
//! ```
//!
//! # Features
//!
//! `wordchain` comes with some features that you can disable (or enable) at will. They are:
//!
//! - `inline-more` - Enables the `inline-more` feature of
//! [`hashbrown`](https://crates.io/crates/hashbrown), which backs the internal chain. Enabled by
//! default.
//! - `cli` - Builds the `wordchain` binary, which reads text from a file or URL and prints
//! generated text. Pulls in `clap`, `anyhow`, `env_logger` and `reqwest`, so it is disabled by
//! default; use `cargo install wordchain --features cli` to get the binary.

pub mod chain;
pub mod distribution;
pub mod error;
pub mod token;

pub use chain::{Chain, ChainBuilder, DEFAULT_NUM_WORDS};
pub use error::{Error, Result};
pub use token::{Successor, Token};
