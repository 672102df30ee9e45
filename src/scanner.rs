//! Longest-match tagging of syllable sequences.
//!
//! A [`Lexicon`] owns one trie per category, in priority order, plus a small
//! table of regex matchers for closed forms (numbers, Latin words) that are
//! checked before any trie.

use log::trace;
use regex::Regex;

use crate::char_categories::is_separator_text;
use crate::chunk::{Chunk, Span, Tag};
use crate::error::{Result, TokenizerError};
use crate::lexicon::CATEGORIES;
use crate::trie::{Trie, TrieBuilder};

/// Ordered (tag, matcher) pairs; the first matching entry wins
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<(Tag, Regex)>,
}

impl PatternTable {
    /// Compile the default table: whole-fragment numbers, then Latin words
    pub fn new() -> Result<Self> {
        let specs: [(&'static str, Tag, &str); 2] = [
            ("NUM", Tag::Num, r"^[0-9၀-၉]+(?:[,.][0-9၀-၉]+)*$"),
            ("LATIN", Tag::Latin, r"^[A-Za-z]+$"),
        ];

        let mut entries = Vec::with_capacity(specs.len());
        for (name, tag, pattern) in specs {
            let re = Regex::new(pattern)
                .map_err(|source| TokenizerError::Pattern { name, source })?;
            entries.push((tag, re));
        }
        Ok(PatternTable { entries })
    }

    /// Tag of the first pattern matching `text`
    pub fn first_match(&self, text: &str) -> Option<Tag> {
        self.entries
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(tag, _)| *tag)
    }
}

/// Longest trie match starting at `tokens[i]` across the whole pipeline
///
/// Every trie is tried; the longest match wins and ties go to the trie
/// declared first.
pub fn scan_longest_at<S: AsRef<str>>(
    tokens: &[S],
    i: usize,
    pipeline: &[(Trie, Tag)],
) -> Option<Chunk> {
    let mut best: Option<(usize, Tag)> = None;

    for (trie, tag) in pipeline {
        if let Some(end) = trie.longest_match(tokens, i) {
            let longer = best.map_or(true, |(best_end, _)| end > best_end);
            if longer {
                best = Some((end, *tag));
            }
        }
    }

    let (end, tag) = best?;
    let text: String = tokens[i..end].iter().map(|t| t.as_ref()).collect();
    Some(Chunk::new(Span::new(i, end), text, tag))
}

/// The category tries and pattern table used for tagging
#[derive(Debug, Clone)]
pub struct Lexicon {
    pipeline: Vec<(Trie, Tag)>,
    patterns: PatternTable,
}

impl Lexicon {
    /// Build every category trie from the fixed word lists
    pub fn new() -> Result<Self> {
        let mut pipeline = Vec::with_capacity(CATEGORIES.len());
        for (name, tag, words) in CATEGORIES {
            let trie = TrieBuilder::from_words(*name, *words)?;
            trace!("{} trie: {} entries", name, trie.len());
            pipeline.push((trie, *tag));
        }

        Ok(Lexicon {
            pipeline,
            patterns: PatternTable::new()?,
        })
    }

    /// The priority-ordered trie pipeline
    pub fn pipeline(&self) -> &[(Trie, Tag)] {
        &self.pipeline
    }

    /// Tag a syllable sequence
    ///
    /// Produces contiguous chunks covering every fragment: PUNCT for
    /// whitespace and punctuation, the pattern table next, then the trie scan,
    /// and RAW for anything left.
    pub fn tag<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<Chunk> {
        let mut chunks = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            let text = tokens[i].as_ref();
            let single = |tag| Chunk::new(Span::new(i, i + 1), text, tag);

            let chunk = if is_separator_text(text) {
                single(Tag::Punct)
            } else if let Some(tag) = self.patterns.first_match(text) {
                single(tag)
            } else {
                scan_longest_at(tokens, i, &self.pipeline).unwrap_or_else(|| single(Tag::Raw))
            };

            i = chunk.span.end;
            chunks.push(chunk);
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::syllabify;

    fn tags(lexicon: &Lexicon, text: &str) -> Vec<(String, Tag)> {
        lexicon
            .tag(&syllabify(text))
            .into_iter()
            .map(|c| (c.text, c.tag))
            .collect()
    }

    #[test]
    fn test_pattern_table() {
        let table = PatternTable::new().unwrap();
        assert_eq!(table.first_match("၁၅,၀၀၀"), Some(Tag::Num));
        assert_eq!(table.first_match("2025"), Some(Tag::Num));
        assert_eq!(table.first_match("Yangon"), Some(Tag::Latin));
        assert_eq!(table.first_match("သူ"), None);
    }

    #[test]
    fn test_longest_wins_across_tries() {
        let mut short = Trie::new();
        short.add(&["သို့"]);
        let mut long = Trie::new();
        long.add(&["သို့", "မ", "ဟုတ်"]);
        let pipeline = vec![(short, Tag::Postp), (long, Tag::Conj)];

        let tokens = ["သို့", "မ", "ဟုတ်", "သူ"];
        let chunk = scan_longest_at(&tokens, 0, &pipeline).unwrap();
        assert_eq!(chunk.tag, Tag::Conj);
        assert_eq!(chunk.span, Span::new(0, 3));
        assert_eq!(chunk.text, "သို့မဟုတ်");
    }

    #[test]
    fn test_tie_goes_to_earlier_trie() {
        let mut first = Trie::new();
        first.add(&["ဦး"]);
        let mut second = Trie::new();
        second.add(&["ဦး"]);
        let pipeline = vec![(first, Tag::Title), (second, Tag::Cl)];

        let chunk = scan_longest_at(&["ဦး"], 0, &pipeline).unwrap();
        assert_eq!(chunk.tag, Tag::Title);
    }

    #[test]
    fn test_no_match() {
        let lexicon = Lexicon::new().unwrap();
        assert!(scan_longest_at(&["ဟ"], 0, lexicon.pipeline()).is_none());
    }

    #[test]
    fn test_tag_sentence() {
        let lexicon = Lexicon::new().unwrap();
        assert_eq!(
            tags(&lexicon, "သူသွားမယ်သို့မဟုတ်"),
            vec![
                ("သူ".to_string(), Tag::Prn),
                ("သွား".to_string(), Tag::Aux),
                ("မယ်".to_string(), Tag::Sfp),
                ("သို့မဟုတ်".to_string(), Tag::Conj),
            ]
        );
    }

    #[test]
    fn test_tag_mixed() {
        let lexicon = Lexicon::new().unwrap();
        assert_eq!(
            tags(&lexicon, "မေလ ၁ ရက်နေ့မှာ"),
            vec![
                ("မေလ".to_string(), Tag::Month),
                (" ".to_string(), Tag::Punct),
                ("၁".to_string(), Tag::Num),
                (" ".to_string(), Tag::Punct),
                ("ရက်နေ့".to_string(), Tag::Cl),
                ("မှာ".to_string(), Tag::Postp),
            ]
        );
    }

    #[test]
    fn test_chunks_are_contiguous() {
        let lexicon = Lexicon::new().unwrap();
        let tokens = syllabify("ကျွန်တော် Yangon ကို သွားမယ်။");
        let chunks = lexicon.tag(&tokens);
        let mut expected_start = 0;
        for chunk in &chunks {
            assert_eq!(chunk.span.start, expected_start);
            expected_start = chunk.span.end;
        }
        assert_eq!(expected_start, tokens.len());
    }
}
