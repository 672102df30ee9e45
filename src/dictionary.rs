//! Word dictionary for the DAG engine.
//!
//! A dictionary is a plain set of surface words, read from a line-delimited
//! file (one word per line). A copy of the default list is compiled into the
//! crate so a tokenizer can always be built.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};

use crate::error::{Result, TokenizerError};

/// The default word list shipped with the crate
const BUNDLED_WORDS: &str = include_str!("data/words.txt");

/// A set of known words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Dictionary::default()
    }

    /// Build from line-delimited text; blank lines are skipped and
    /// duplicates collapse
    pub fn from_lines(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// The dictionary compiled into the crate
    pub fn bundled() -> Self {
        Dictionary::from_lines(BUNDLED_WORDS)
    }

    /// Read a dictionary file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TokenizerError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Dictionary::from_lines(&content);
        info!("loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Read a dictionary file, falling back to the bundled list when the
    /// file does not exist
    ///
    /// Any other read failure is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let dict = Dictionary::from_lines(&content);
                info!("loaded {} words from {}", dict.len(), path.display());
                Ok(dict)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "dictionary {} not found, using the bundled word list",
                    path.display()
                );
                Ok(Dictionary::bundled())
            }
            Err(source) => Err(TokenizerError::Resource {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Add a word
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Check if a word is known
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
