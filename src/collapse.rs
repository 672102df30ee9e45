//! Collapse merged chunks into surface tokens.
//!
//! Chunks whose tag is a function tag stand as their own token. Everything
//! else accumulates into a running word until the next boundary. Postpositions
//! attach to the word before them; the section mark ။ attaches to the last
//! token of its sentence and every other punctuation mark is dropped.

use crate::char_categories::SECTION;
use crate::chunk::{Chunk, Tag};

/// Token lists per sentence, split at end-of-sentence markers
fn collapse_grouped(chunks: &[Chunk], function_tags: &[Tag]) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut tokens: Vec<String> = Vec::new();
    let mut buffer = String::new();

    fn flush(buffer: &mut String, tokens: &mut Vec<String>) {
        if !buffer.is_empty() {
            tokens.push(std::mem::take(buffer));
        }
    }

    for chunk in chunks {
        match chunk.tag {
            Tag::Eos => {
                flush(&mut buffer, &mut tokens);
                groups.push(std::mem::take(&mut tokens));
            }
            Tag::Punct => {
                flush(&mut buffer, &mut tokens);
                if chunk.text.starts_with(SECTION) {
                    if let Some(last) = tokens.last_mut() {
                        last.push_str(&chunk.text);
                    }
                }
            }
            Tag::Postp if function_tags.contains(&Tag::Postp) => {
                if !buffer.is_empty() {
                    buffer.push_str(&chunk.text);
                    flush(&mut buffer, &mut tokens);
                } else if let Some(last) = tokens.last_mut() {
                    last.push_str(&chunk.text);
                } else {
                    tokens.push(chunk.text.clone());
                }
            }
            tag if function_tags.contains(&tag) => {
                flush(&mut buffer, &mut tokens);
                tokens.push(chunk.text.clone());
            }
            _ => buffer.push_str(&chunk.text),
        }
    }

    flush(&mut buffer, &mut tokens);
    groups.push(tokens);
    groups
}

/// Collapse one chunk sequence into tokens
pub fn collapse(chunks: &[Chunk], function_tags: &[Tag]) -> Vec<String> {
    collapse_grouped(chunks, function_tags)
        .into_iter()
        .flatten()
        .collect()
}

/// Collapse several sentences, one token list per sentence
///
/// The sentences are joined with end-of-sentence markers so that nothing
/// attaches across a sentence boundary.
pub fn collapse_sentences(sentences: &[Vec<Chunk>], function_tags: &[Tag]) -> Vec<Vec<String>> {
    if sentences.is_empty() {
        return Vec::new();
    }

    let mut joined = Vec::new();
    for (i, sentence) in sentences.iter().enumerate() {
        if i > 0 {
            joined.push(Chunk::end_marker());
        }
        joined.extend(sentence.iter().cloned());
    }

    collapse_grouped(&joined, function_tags)
}
