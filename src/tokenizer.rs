//! The tokenizer facade.
//!
//! A [`Tokenizer`] owns everything built once at construction (lexicon tries,
//! protection patterns, normalization patterns and the dictionary) behind
//! `Arc`s, so cloning one to hand to another thread is cheap.
//!
//! Two engines are available. The rule engine runs every input span through
//! tagging, cleanup, merging and collapsing. The dictionary engine segments
//! syllable runs over a word DAG instead.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chunk::{Chunk, Span, Tag, FUNCTION_TAGS};
use crate::cleanup::{apply_cleanups, clean_punct_chunks};
use crate::collapse::{collapse, collapse_sentences};
use crate::dag::DagSegmenter;
use crate::dictionary::Dictionary;
use crate::error::{Result, TokenizerError};
use crate::merge::{merge_num_classifier, merge_predicate};
use crate::preprocess::{Preprocessor, SpaceRemoveMode};
use crate::protect::{Piece, Protected, Protector};
use crate::scanner::Lexicon;
use crate::sentence::{split_sentences, split_token_sentences};
use crate::syllable::syllabify;

/// Segmentation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    /// Lexicon tagging with structural merges
    #[default]
    Rule,
    /// Dictionary DAG with Viterbi search
    Dictionary,
}

impl std::str::FromStr for Engine {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rule" => Ok(Engine::Rule),
            "dictionary" | "dict" => Ok(Engine::Dictionary),
            other => Err(TokenizerError::InvalidInput(format!(
                "unknown engine `{}`",
                other
            ))),
        }
    }
}

/// Tokenizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Longest dictionary word tried, in syllables (clamped to 3..=12)
    pub max_word_len: usize,
    /// Add the bidirectional maximum-matching path to the DAG
    pub use_bimm_fallback: bool,
    /// Score of a dictionary word
    pub dict_weight: f64,
    /// Extra score of an edge on the maximum-matching path
    pub bimm_boost: f64,
    /// Run entity protection before segmentation
    pub protect_pattern: bool,
    pub space_remove_mode: SpaceRemoveMode,
    pub engine: Engine,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            max_word_len: 6,
            use_bimm_fallback: true,
            dict_weight: 10.0,
            bimm_boost: 150.0,
            protect_pattern: true,
            space_remove_mode: SpaceRemoveMode::default(),
            engine: Engine::default(),
        }
    }
}

impl TokenizerConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TokenizerError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

/// One text or an ordered batch of texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    Single(String),
    Batch(Vec<String>),
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        TextInput::Single(text.to_string())
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        TextInput::Single(text)
    }
}

impl From<Vec<String>> for TextInput {
    fn from(texts: Vec<String>) -> Self {
        TextInput::Batch(texts)
    }
}

/// String form of a scalar; compound values are rejected
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for TextInput {
    type Error = TokenizerError;

    /// Every element of a batch is checked before anything is returned, so
    /// one bad element fails the whole batch.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    scalar_text(item).ok_or_else(|| {
                        TokenizerError::InvalidInput(format!(
                            "batch element {} is {}",
                            i,
                            kind_of(item)
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(TextInput::Batch),
            other => scalar_text(&other)
                .map(TextInput::Single)
                .ok_or_else(|| TokenizerError::InvalidInput(kind_of(&other).to_string())),
        }
    }
}

/// Shape of word tokenization results
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One token list per text
    #[default]
    List,
    /// Tokens joined into one string per text
    Joined { separator: String },
}

/// Result of [`Tokenizer::tokenize_input`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenOutput {
    Tokens(Vec<String>),
    Joined(String),
    Batch(Vec<Vec<String>>),
    JoinedBatch(Vec<String>),
}

/// The Myanmar word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    config: TokenizerConfig,
    preprocessor: Arc<Preprocessor>,
    protector: Arc<Protector>,
    lexicon: Arc<Lexicon>,
    segmenter: DagSegmenter,
}

impl Tokenizer {
    /// Build a tokenizer; fails only if a fixed table cannot be compiled
    pub fn new(config: TokenizerConfig, dictionary: Dictionary) -> Result<Self> {
        Self::with_arc(config, Arc::new(dictionary))
    }

    /// Build a tokenizer around a shared dictionary
    pub fn with_arc(config: TokenizerConfig, dictionary: Arc<Dictionary>) -> Result<Self> {
        let segmenter = DagSegmenter::new(
            dictionary,
            config.max_word_len,
            config.use_bimm_fallback,
            config.dict_weight,
            config.bimm_boost,
        );
        info!(
            "tokenizer ready: {:?} engine, {} dictionary words",
            config.engine,
            segmenter.dictionary().len()
        );

        Ok(Tokenizer {
            config,
            preprocessor: Arc::new(Preprocessor::new()?),
            protector: Arc::new(Protector::new()?),
            lexicon: Arc::new(Lexicon::new()?),
            segmenter,
        })
    }

    /// Default configuration with the bundled dictionary
    pub fn with_defaults() -> Result<Self> {
        Self::new(TokenizerConfig::default(), Dictionary::bundled())
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Normalize and protect a text
    pub fn prepare(&self, text: &str) -> Protected {
        let normalized = self
            .preprocessor
            .normalize(text, self.config.space_remove_mode);
        if self.config.protect_pattern {
            self.protector.protect(&normalized)
        } else {
            Protected::unprotected(&normalized)
        }
    }

    /// Merged chunks for a whole text, protected entities as PROT chunks
    ///
    /// Text pieces are tagged one by one and spliced with the PROT chunks
    /// into a single stream; cleanups and merges then run once over it.
    /// Spans index one syllable sequence across all pieces; a protected
    /// entity counts as one syllable.
    pub fn rule_chunks(&self, text: &str) -> Vec<Chunk> {
        let protected = self.prepare(text);
        let mut tagged = Vec::new();
        let mut offset = 0;

        for piece in protected.pieces() {
            match piece {
                Piece::Text(span) => {
                    let cleaned = self.preprocessor.clean_span(span);
                    let syllables = syllabify(&cleaned);
                    tagged.extend(self.lexicon.tag(&syllables).iter().map(|c| c.shifted(offset)));
                    offset += syllables.len();
                }
                Piece::Protected(original) => {
                    tagged.push(Chunk::new(Span::new(offset, offset + 1), original, Tag::Prot));
                    offset += 1;
                }
            }
        }

        let chunks = apply_cleanups(&tagged);
        let chunks = merge_num_classifier(&chunks);
        let chunks = merge_predicate(&chunks);
        clean_punct_chunks(&chunks)
    }

    fn dictionary_tokens(&self, text: &str) -> Vec<String> {
        let protected = self.prepare(text);
        let mut words = Vec::new();

        for piece in protected.pieces() {
            match piece {
                Piece::Text(span) => {
                    let cleaned = self.preprocessor.clean_span(span);
                    self.segmenter
                        .extend_fragments(&mut words, &syllabify(&cleaned));
                }
                Piece::Protected(original) => words.push(original.to_string()),
            }
        }

        words
    }

    /// Split a text into words
    pub fn word_tokenize(&self, text: &str) -> Vec<String> {
        let tokens = match self.config.engine {
            Engine::Rule => collapse(&self.rule_chunks(text), FUNCTION_TAGS),
            Engine::Dictionary => self.dictionary_tokens(text),
        };
        debug!("{} chars -> {} tokens", text.chars().count(), tokens.len());
        tokens
    }

    /// Split every text of a batch into words, preserving order
    pub fn word_tokenize_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<String>> {
        texts.iter().map(|t| self.word_tokenize(t.as_ref())).collect()
    }

    /// Split a text into words joined by `separator`
    pub fn word_tokenize_joined(&self, text: &str, separator: &str) -> String {
        self.word_tokenize(text).join(separator)
    }

    /// Split a text into sentences of words
    pub fn sentence_tokenize(&self, text: &str) -> Vec<Vec<String>> {
        let sentences = match self.config.engine {
            Engine::Rule => {
                let chunks = self.rule_chunks(text);
                let sentences: Vec<Vec<Chunk>> = split_sentences(&chunks)
                    .into_iter()
                    .map(|s| s.chunks)
                    .collect();
                collapse_sentences(&sentences, FUNCTION_TAGS)
            }
            Engine::Dictionary => split_token_sentences(&self.dictionary_tokens(text)),
        };
        sentences.into_iter().filter(|s| !s.is_empty()).collect()
    }

    /// Split a text into syllables, whitespace dropped
    pub fn syllable_tokenize(&self, text: &str) -> Vec<String> {
        let normalized = self
            .preprocessor
            .normalize(text, self.config.space_remove_mode);
        syllabify(&normalized)
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect()
    }

    /// Word-tokenize a single text or a batch in the requested shape
    pub fn tokenize_input(&self, input: TextInput, mode: &OutputMode) -> TokenOutput {
        match (input, mode) {
            (TextInput::Single(text), OutputMode::List) => {
                TokenOutput::Tokens(self.word_tokenize(&text))
            }
            (TextInput::Single(text), OutputMode::Joined { separator }) => {
                TokenOutput::Joined(self.word_tokenize_joined(&text, separator))
            }
            (TextInput::Batch(texts), OutputMode::List) => {
                TokenOutput::Batch(self.word_tokenize_batch(&texts))
            }
            (TextInput::Batch(texts), OutputMode::Joined { separator }) => TokenOutput::JoinedBatch(
                texts
                    .iter()
                    .map(|t| self.word_tokenize_joined(t, separator))
                    .collect(),
            ),
        }
    }
}
