//! Tag corrections applied to freshly tagged chunks.
//!
//! Each pass reads a chunk slice and returns a new list; nothing is modified
//! in place.

use crate::char_categories::get_char_category;
use crate::chunk::{Chunk, Tag};
use crate::lexicon::STRAY_PUNCT;

fn starts_with_separator(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|c| get_char_category(c).is_separator())
}

fn ends_with_separator(text: &str) -> bool {
    text.chars()
        .last()
        .is_some_and(|c| get_char_category(c).is_separator())
}

/// Downgrade postpositions that have nothing to attach to.
///
/// A POSTP becomes PAR when it opens the sequence, follows punctuation, a
/// protected entity or another postposition-like chunk, or starts with a
/// separator itself. Whitespace between the POSTP and its head is skipped.
pub fn clean_postp_tag(chunks: &[Chunk]) -> Vec<Chunk> {
    let mut out: Vec<Chunk> = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        if chunk.tag != Tag::Postp {
            out.push(chunk.clone());
            continue;
        }

        let detached = match out.iter().rev().find(|c| !c.is_space()) {
            None => true,
            Some(prev) => {
                matches!(prev.tag, Tag::Punct | Tag::Postp | Tag::Par | Tag::Prot)
                    || ends_with_separator(&prev.text)
            }
        } || starts_with_separator(&chunk.text);

        if detached {
            out.push(chunk.retagged(Tag::Par));
        } else {
            out.push(chunk.clone());
        }
    }

    out
}

/// Promote a clause-final conjunction or verb ending to a sentence-final particle
pub fn clean_sfp_chunks(chunks: &[Chunk]) -> Vec<Chunk> {
    let mut out = chunks.to_vec();
    if let Some(last) = out.iter_mut().rev().find(|c| !c.is_punct()) {
        if matches!(last.tag, Tag::Conj | Tag::Vep) {
            last.tag = Tag::Sfp;
        }
    }
    out
}

/// Drop stray punctuation and whitespace debris
pub fn clean_punct_chunks(chunks: &[Chunk]) -> Vec<Chunk> {
    chunks
        .iter()
        .filter(|c| !STRAY_PUNCT.contains(c.text.as_str()))
        .cloned()
        .collect()
}

/// Run the pre-merge corrections in order
pub fn apply_cleanups(chunks: &[Chunk]) -> Vec<Chunk> {
    clean_sfp_chunks(&clean_postp_tag(chunks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::Span;

    fn chunks(items: &[(&str, Tag)]) -> Vec<Chunk> {
        items
            .iter()
            .enumerate()
            .map(|(i, (text, tag))| Chunk::new(Span::new(i, i + 1), *text, *tag))
            .collect()
    }

    fn tags(chunks: &[Chunk]) -> Vec<Tag> {
        chunks.iter().map(|c| c.tag).collect()
    }

    #[test]
    fn test_postp_sentence_initial() {
        let input = chunks(&[("က", Tag::Postp), ("သူ", Tag::Prn), ("ကို", Tag::Postp)]);
        assert_eq!(
            tags(&clean_postp_tag(&input)),
            vec![Tag::Par, Tag::Prn, Tag::Postp]
        );
    }

    #[test]
    fn test_postp_after_punct_or_postp() {
        let input = chunks(&[
            ("သူ", Tag::Prn),
            ("၊", Tag::Punct),
            ("ကို", Tag::Postp),
            ("မှာ", Tag::Postp),
        ]);
        assert_eq!(
            tags(&clean_postp_tag(&input)),
            vec![Tag::Prn, Tag::Punct, Tag::Par, Tag::Par]
        );
    }

    #[test]
    fn test_postp_across_whitespace() {
        let input = chunks(&[("Yangon", Tag::Latin), (" ", Tag::Punct), ("မှာ", Tag::Postp)]);
        assert_eq!(
            tags(&clean_postp_tag(&input)),
            vec![Tag::Latin, Tag::Punct, Tag::Postp]
        );

        let input = chunks(&[("၂၀၂၅", Tag::Prot), (" ", Tag::Punct), ("မှာ", Tag::Postp)]);
        assert_eq!(
            tags(&clean_postp_tag(&input)),
            vec![Tag::Prot, Tag::Punct, Tag::Par]
        );
    }

    #[test]
    fn test_sfp_promotion() {
        let input = chunks(&[("သွား", Tag::Aux), ("ပြီး", Tag::Conj), ("။", Tag::Punct)]);
        assert_eq!(
            tags(&clean_sfp_chunks(&input)),
            vec![Tag::Aux, Tag::Sfp, Tag::Punct]
        );

        let input = chunks(&[("ပြီး", Tag::Conj), ("သွား", Tag::Aux)]);
        assert_eq!(tags(&clean_sfp_chunks(&input)), vec![Tag::Conj, Tag::Aux]);
    }

    #[test]
    fn test_punct_debris() {
        let input = chunks(&[
            ("သူ", Tag::Prn),
            (" ", Tag::Punct),
            ("?", Tag::Punct),
            ("။", Tag::Punct),
        ]);
        let cleaned = clean_punct_chunks(&input);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[1].text, "။");
    }

    #[test]
    fn test_empty() {
        assert!(apply_cleanups(&[]).is_empty());
        assert!(clean_punct_chunks(&[]).is_empty());
    }
}
