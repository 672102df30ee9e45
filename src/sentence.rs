//! Sentence splitting.
//!
//! Myanmar marks the end of a sentence with the section sign ။. After
//! predicate fusion the sign usually sits at the end of a PRED chunk rather
//! than in a chunk of its own, so a boundary falls after any chunk (or token)
//! whose text ends with it.

use crate::char_categories::SECTION;
use crate::chunk::Chunk;

/// A sentence containing chunks and metadata
#[derive(Debug, Clone)]
pub struct Sentence {
    /// The chunks in this sentence
    pub chunks: Vec<Chunk>,
    /// Number of non-punctuation chunks
    pub word_count: usize,
    /// Start index in the original chunk list
    pub start_idx: usize,
    /// End index in the original chunk list (inclusive)
    pub end_idx: usize,
}

impl Sentence {
    /// Get the text of this sentence
    pub fn text(&self) -> String {
        self.chunks.iter().map(|c| c.text.as_str()).collect()
    }
}

/// Inclusive (start, end) ranges, cut after every item that passes `test`
fn find_boundaries<T, F>(items: &[T], test: F) -> Vec<(usize, usize)>
where
    F: Fn(&T) -> bool,
{
    let mut boundaries = Vec::new();
    let mut start = 0;

    for (i, item) in items.iter().enumerate() {
        if test(item) {
            boundaries.push((start, i));
            start = i + 1;
        }
    }

    // Add the last segment
    if start < items.len() {
        boundaries.push((start, items.len() - 1));
    }

    boundaries
}

fn ends_sentence(text: &str) -> bool {
    text.ends_with(SECTION)
}

/// Split a chunk list into sentences
pub fn split_sentences(chunks: &[Chunk]) -> Vec<Sentence> {
    find_boundaries(chunks, |c| ends_sentence(&c.text))
        .into_iter()
        .map(|(start, end)| {
            let sentence_chunks = chunks[start..=end].to_vec();
            let word_count = sentence_chunks.iter().filter(|c| !c.is_punct()).count();

            Sentence {
                chunks: sentence_chunks,
                word_count,
                start_idx: start,
                end_idx: end,
            }
        })
        .collect()
}

/// Split a token list into sentences
pub fn split_token_sentences(tokens: &[String]) -> Vec<Vec<String>> {
    find_boundaries(tokens, |t| ends_sentence(t))
        .into_iter()
        .map(|(start, end)| tokens[start..=end].to_vec())
        .collect()
}
