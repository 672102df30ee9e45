//! Error types for the tokenizer.
//!
//! Only two kinds of failure are visible to callers of a built tokenizer:
//! unsupported input shapes and resource loading problems. Lexicon and
//! pattern errors can only surface while a [`Tokenizer`](crate::Tokenizer)
//! is being constructed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the tokenizer
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// The input is not a string or a flat collection of scalars
    #[error("unsupported input: {0}")]
    InvalidInput(String),

    /// A dictionary or configuration file exists but cannot be read
    #[error("cannot read resource `{path}`: {source}")]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A fixed lexicon entry cannot be turned into a trie path
    #[error("malformed lexicon entry `{entry}` in {category}")]
    Lexicon {
        category: &'static str,
        entry: String,
    },

    /// A protection or tagging pattern failed to compile
    #[error("invalid pattern for {name}: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A configuration document could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TokenizerError>;
