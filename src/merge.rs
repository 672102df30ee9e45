//! Structural merges over tagged chunks.
//!
//! [`merge_num_classifier`] fuses numbers with the classifier that follows
//! them. [`merge_predicate`] fuses verb material with its sentence-final
//! particles into predicate phrases. Numeral fusion must run first so that a
//! predicate never swallows part of a number-classifier unit.

use crate::chunk::{Chunk, Tag};
use crate::lexicon::{NEG_CLOSERS, NEG_MARKER, PERCENT, QUESTION_CLOSERS};

/// Longest look-ahead used to find the percent phrase split across chunks
const PERCENT_WINDOW: usize = 5;

/// End index of the percent phrase starting at `i`, if there is one
fn percent_at(chunks: &[Chunk], i: usize) -> Option<usize> {
    let mut joined = String::new();
    for (k, chunk) in chunks.iter().enumerate().skip(i).take(PERCENT_WINDOW) {
        joined.push_str(&chunk.text);
        if joined == PERCENT {
            return Some(k + 1);
        }
        if !PERCENT.starts_with(joined.as_str()) {
            return None;
        }
    }
    None
}

/// Fuse chunks and drop whitespace from the joined text
fn fuse_compact(chunks: &[Chunk], tag: Tag) -> Option<Chunk> {
    let mut fused = Chunk::fuse(chunks, tag)?;
    fused.text.retain(|c| !c.is_whitespace());
    Some(fused)
}

fn is_number(chunk: &Chunk) -> bool {
    matches!(chunk.tag, Tag::Num | Tag::WordNum)
}

/// Fuse number runs and their classifiers into NUMCL chunks.
///
/// A run of NUM/WORDNUM chunks, with whitespace allowed between them, is
/// joined into one chunk. When a classifier follows the run the classifier is
/// absorbed and the result is tagged NUMCL. The percent phrase becomes one
/// NUMCL on its own and is never absorbed by a preceding run.
pub fn merge_num_classifier(chunks: &[Chunk]) -> Vec<Chunk> {
    let mut out = Vec::with_capacity(chunks.len());
    let mut i = 0;

    while i < chunks.len() {
        if let Some(end) = percent_at(chunks, i) {
            out.extend(fuse_compact(&chunks[i..end], Tag::NumCl));
            i = end;
            continue;
        }

        if !is_number(&chunks[i]) {
            out.push(chunks[i].clone());
            i += 1;
            continue;
        }

        let mut last = i;
        let mut j = i + 1;
        while j < chunks.len() && percent_at(chunks, j).is_none() {
            if is_number(&chunks[j]) {
                last = j;
            } else if !chunks[j].is_space() {
                break;
            }
            j += 1;
        }

        let mut k = last + 1;
        while k < chunks.len() && chunks[k].is_space() {
            k += 1;
        }

        if k < chunks.len() && chunks[k].tag == Tag::Cl {
            out.extend(fuse_compact(&chunks[i..=k], Tag::NumCl));
            i = k + 1;
        } else if last > i {
            let run = &chunks[i..=last];
            let tag = if run.iter().any(|c| c.tag == Tag::Num) {
                Tag::Num
            } else {
                Tag::WordNum
            };
            out.extend(fuse_compact(run, tag));
            i = last + 1;
        } else {
            out.push(chunks[i].clone());
            i += 1;
        }
    }

    out
}

/// Chunks a predicate walk may absorb
fn absorbable(tag: Tag) -> bool {
    !tag.is_function() && !matches!(tag, Tag::Punct | Tag::Eos)
}

/// Split an absorbed run into an optional verb stem and the predicate
fn split_predicate(run: &[Chunk], terminal: &str) -> Vec<Chunk> {
    let neg = run.iter().position(|c| c.text == NEG_MARKER);
    let question = run.iter().position(|c| c.tag == Tag::Qw);

    let split = if let (Some(at), true) = (neg, NEG_CLOSERS.contains(&terminal)) {
        Some(at)
    } else if let (Some(at), true) = (question, QUESTION_CLOSERS.contains(&terminal)) {
        Some(at)
    } else {
        run.iter().position(|c| c.tag == Tag::Raw).map(|first| {
            first
                + run[first..]
                    .iter()
                    .take_while(|c| c.tag == Tag::Raw)
                    .count()
        })
    };

    let at = split.unwrap_or(0);
    Chunk::fuse(&run[..at], Tag::PVerb)
        .into_iter()
        .chain(Chunk::fuse(&run[at..], Tag::Pred))
        .collect()
}

/// Fuse predicates, anchored on sentence-final particles, scanning right to left.
///
/// From each SFP the walk absorbs every preceding chunk that is not a
/// function tag or punctuation. A section mark right after the SFP is folded
/// into the predicate. The run is then split by, in order: the negation
/// marker (with a negative closer), a question word (with a question closer),
/// or the end of the first RAW group.
pub fn merge_predicate(chunks: &[Chunk]) -> Vec<Chunk> {
    let mut reversed: Vec<Chunk> = Vec::with_capacity(chunks.len());
    let mut i = chunks.len();

    while i > 0 {
        i -= 1;
        let chunk = &chunks[i];

        let (anchor, trailing) = if chunk.is_section_end() && i > 0 && chunks[i - 1].tag == Tag::Sfp {
            (i - 1, Some(chunk))
        } else if chunk.tag == Tag::Sfp {
            (i, None)
        } else {
            reversed.push(chunk.clone());
            continue;
        };

        let mut start = anchor;
        while start > 0 && absorbable(chunks[start - 1].tag) {
            start -= 1;
        }

        let mut pieces = split_predicate(&chunks[start..=anchor], &chunks[anchor].text);
        if let (Some(mark), Some(pred)) = (trailing, pieces.last_mut()) {
            pred.text.push_str(&mark.text);
            pred.span = pred.span.join(&mark.span);
        }

        reversed.extend(pieces.into_iter().rev());
        i = start;
    }

    reversed.reverse();
    reversed
}
