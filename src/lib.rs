//! # mmdt-tokenizer
//!
//! A rule-based Myanmar (Burmese) word tokenizer written in Rust.
//!
//! Myanmar is written without spaces between words. This crate breaks text
//! into syllables, tags syllable runs against fixed grammatical word lists,
//! fuses numbers with their classifiers and verbs with their particles, and
//! collapses the result into surface words. Numbers, dates, emails, URLs and
//! similar entities are protected up front so they come out whole.
//!
//! ## Quick Start
//!
//! ```rust
//! use mmdt_tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::with_defaults().unwrap();
//! let tokens = tokenizer.word_tokenize("သူသွားမယ်သို့မဟုတ်သူလာမယ်။");
//! assert_eq!(tokens, vec!["သူ", "သွားမယ်", "သို့မဟုတ်", "သူ", "လာမယ်။"]);
//! ```
//!
//! ## Dictionary Engine
//!
//! A second engine segments with a word dictionary, scoring candidate words
//! over a DAG with a Viterbi search:
//!
//! ```rust
//! use mmdt_tokenizer::{Dictionary, Engine, Tokenizer, TokenizerConfig};
//!
//! let config = TokenizerConfig {
//!     engine: Engine::Dictionary,
//!     ..Default::default()
//! };
//! let tokenizer = Tokenizer::new(config, Dictionary::bundled()).unwrap();
//! let tokens = tokenizer.word_tokenize("ကျောင်းသားစာအုပ်ဖတ်တယ်");
//! assert_eq!(tokens[0], "ကျောင်းသား");
//! ```

pub mod char_categories;
pub mod chunk;
pub mod cleanup;
pub mod collapse;
pub mod dag;
pub mod dictionary;
pub mod error;
pub mod export;
pub mod lexicon;
pub mod merge;
pub mod preprocess;
pub mod protect;
pub mod scanner;
pub mod sentence;
pub mod syllable;
pub mod tokenizer;
pub mod trie;

// Re-export main types for convenience
pub use char_categories::{get_char_category, CharCategory, MyString};
pub use chunk::{Chunk, Span, Tag, FUNCTION_TAGS};
pub use collapse::{collapse, collapse_sentences};
pub use dag::{backward_mm, bimm, forward_mm, viterbi, Dag, DagSegmenter, Segment};
pub use dictionary::Dictionary;
pub use error::{Result, TokenizerError};
pub use preprocess::{Preprocessor, SpaceRemoveMode};
pub use protect::{int_to_letters, EntityKind, Piece, PlaceholderMap, Protected, Protector};
pub use scanner::{scan_longest_at, Lexicon, PatternTable};
pub use sentence::{split_sentences, Sentence};
pub use syllable::{syllabify, Syllabifier};
pub use tokenizer::{Engine, OutputMode, TextInput, TokenOutput, Tokenizer, TokenizerConfig};
pub use trie::{Trie, TrieBuilder, TrieNode};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let tokenizer = Tokenizer::with_defaults().unwrap();
        let chunks = tokenizer.rule_chunks("မေလ ၁ ရက်နေ့မှာ စတင်မည်။");

        let tags: Vec<Tag> = chunks.iter().map(|c| c.tag).collect();
        assert_eq!(
            tags,
            vec![Tag::Month, Tag::NumCl, Tag::Postp, Tag::PVerb, Tag::Pred]
        );
        assert_eq!(
            collapse(&chunks, FUNCTION_TAGS),
            vec!["မေလ", "၁ရက်နေ့မှာ", "စတင်", "မည်။"]
        );
    }

    #[test]
    fn test_sentences() {
        let tokenizer = Tokenizer::with_defaults().unwrap();
        let sentences = tokenizer.sentence_tokenize("သူလာမယ်။ငါသွားမယ်။");
        assert_eq!(sentences, vec![vec!["သူ", "လာမယ်။"], vec!["ငါ", "သွားမယ်။"]]);
    }
}
