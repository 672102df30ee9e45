//! Dictionary segmentation over a word DAG.
//!
//! Candidate words are the dictionary spans of up to `max_word_len`
//! syllables, a single-syllable edge at every position, and, when enabled,
//! the path chosen by bidirectional maximum matching. A Viterbi pass picks
//! the highest-scoring path: each dictionary word earns `dict_weight` and
//! each edge on the maximum-matching path earns `bimm_boost`.

use std::sync::Arc;

use log::debug;

use crate::char_categories::{is_separator_text, SECTION};
use crate::dictionary::Dictionary;

/// Smallest accepted maximum word length, in syllables
pub const MIN_WORD_LEN: usize = 3;
/// Largest accepted maximum word length, in syllables
pub const MAX_WORD_LEN: usize = 12;

/// A word covering syllables `start..end`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub word: String,
}

fn join<S: AsRef<str>>(syllables: &[S]) -> String {
    syllables.iter().map(|s| s.as_ref()).collect()
}

/// Greedy longest dictionary match, left to right
///
/// A position with no dictionary word becomes a one-syllable segment.
pub fn forward_mm<S: AsRef<str>>(syllables: &[S], dict: &Dictionary, max_len: usize) -> Vec<Segment> {
    let n = syllables.len();
    let max_len = max_len.max(1);
    let mut segments = Vec::new();
    let mut i = 0;

    while i < n {
        let upper = n.min(i + max_len);
        let end = (i + 2..=upper)
            .rev()
            .find(|&j| dict.contains(&join(&syllables[i..j])))
            .unwrap_or(i + 1);
        segments.push(Segment {
            start: i,
            end,
            word: join(&syllables[i..end]),
        });
        i = end;
    }

    segments
}

/// Greedy longest dictionary match, right to left
pub fn backward_mm<S: AsRef<str>>(syllables: &[S], dict: &Dictionary, max_len: usize) -> Vec<Segment> {
    let max_len = max_len.max(1);
    let mut segments = Vec::new();
    let mut j = syllables.len();

    while j > 0 {
        let lower = j.saturating_sub(max_len);
        let start = (lower..j.saturating_sub(1))
            .find(|&i| dict.contains(&join(&syllables[i..j])))
            .unwrap_or(j - 1);
        segments.push(Segment {
            start,
            end: j,
            word: join(&syllables[start..j]),
        });
        j = start;
    }

    segments.reverse();
    segments
}

/// Forward or backward matching, whichever yields fewer segments
///
/// Ties go to forward matching.
pub fn bimm<S: AsRef<str>>(syllables: &[S], dict: &Dictionary, max_len: usize) -> Vec<Segment> {
    let forward = forward_mm(syllables, dict, max_len);
    let backward = backward_mm(syllables, dict, max_len);
    if backward.len() < forward.len() {
        backward
    } else {
        forward
    }
}

/// An edge of the word DAG
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Exclusive end index
    pub end: usize,
    /// Surface text of the edge
    pub word: String,
    /// Whether the word is in the dictionary
    pub in_dict: bool,
    /// Whether the edge lies on the maximum-matching path
    pub is_bimm: bool,
}

/// Candidate words keyed by start index
#[derive(Debug, Clone)]
pub struct Dag {
    syllables: Vec<String>,
    edges: Vec<Vec<Edge>>,
}

impl Dag {
    /// Build the DAG for a syllable sequence
    pub fn build<S: AsRef<str>>(
        syllables: &[S],
        dict: &Dictionary,
        max_len: usize,
        bimm_path: Option<&[Segment]>,
    ) -> Self {
        let n = syllables.len();
        let mut edges: Vec<Vec<Edge>> = vec![Vec::new(); n];

        for (i, out) in edges.iter_mut().enumerate() {
            for j in i + 1..=n.min(i + max_len.max(1)) {
                let word = join(&syllables[i..j]);
                let in_dict = dict.contains(&word);
                if in_dict || j == i + 1 {
                    out.push(Edge {
                        end: j,
                        word,
                        in_dict,
                        is_bimm: false,
                    });
                }
            }
        }

        for segment in bimm_path.unwrap_or_default() {
            if let Some(out) = edges.get_mut(segment.start) {
                out.push(Edge {
                    end: segment.end,
                    word: segment.word.clone(),
                    in_dict: dict.contains(&segment.word),
                    is_bimm: true,
                });
            }
        }

        Dag {
            syllables: syllables.iter().map(|s| s.as_ref().to_string()).collect(),
            edges,
        }
    }

    /// Number of syllables
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Edges leaving position `i`
    pub fn edges_from(&self, i: usize) -> &[Edge] {
        self.edges.get(i).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Highest-scoring path through the DAG
///
/// Edges are relaxed in index order and only a strictly better score
/// replaces a predecessor, so the first path found wins ties. A position
/// left without a predecessor is emitted as its raw syllable.
pub fn viterbi(dag: &Dag, dict_weight: f64, bimm_boost: f64) -> Vec<String> {
    let n = dag.len();
    let mut scores = vec![f64::NEG_INFINITY; n + 1];
    let mut back: Vec<Option<(usize, &str)>> = vec![None; n + 1];
    if let Some(first) = scores.first_mut() {
        *first = 0.0;
    }

    for i in 0..n {
        for edge in dag.edges_from(i) {
            let mut candidate = scores[i];
            if edge.in_dict {
                candidate += dict_weight;
            }
            if edge.is_bimm {
                candidate += bimm_boost;
            }
            if candidate > scores[edge.end] {
                scores[edge.end] = candidate;
                back[edge.end] = Some((i, edge.word.as_str()));
            }
        }
    }

    let mut words = Vec::new();
    let mut j = n;
    while j > 0 {
        match back[j] {
            Some((i, word)) => {
                words.push(word.to_string());
                j = i;
            }
            None => {
                words.push(dag.syllables[j - 1].clone());
                j -= 1;
            }
        }
    }

    words.reverse();
    words
}

/// Dictionary segmenter with its scoring parameters
#[derive(Debug, Clone)]
pub struct DagSegmenter {
    dictionary: Arc<Dictionary>,
    max_word_len: usize,
    use_bimm_fallback: bool,
    dict_weight: f64,
    bimm_boost: f64,
}

impl DagSegmenter {
    /// Create a segmenter; `max_word_len` is clamped to 3..=12
    pub fn new(
        dictionary: Arc<Dictionary>,
        max_word_len: usize,
        use_bimm_fallback: bool,
        dict_weight: f64,
        bimm_boost: f64,
    ) -> Self {
        DagSegmenter {
            dictionary,
            max_word_len: max_word_len.clamp(MIN_WORD_LEN, MAX_WORD_LEN),
            use_bimm_fallback,
            dict_weight,
            bimm_boost,
        }
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Segment one run of syllables
    pub fn segment<S: AsRef<str>>(&self, syllables: &[S]) -> Vec<String> {
        if syllables.is_empty() {
            return Vec::new();
        }

        let path = self
            .use_bimm_fallback
            .then(|| bimm(syllables, &self.dictionary, self.max_word_len));
        let dag = Dag::build(syllables, &self.dictionary, self.max_word_len, path.as_deref());
        let words = viterbi(&dag, self.dict_weight, self.bimm_boost);
        debug!("segmented {} syllables into {} words", syllables.len(), words.len());
        words
    }

    /// Segment a fragment sequence that may contain whitespace and punctuation
    ///
    /// Separator fragments split the sequence into runs. The section mark
    /// attaches to the preceding word; other separators are dropped.
    pub fn segment_fragments<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<String> {
        let mut words = Vec::new();
        self.extend_fragments(&mut words, fragments);
        words
    }

    /// Like [`segment_fragments`](Self::segment_fragments), appending to
    /// `words` so a leading section mark can attach to a word already there
    pub fn extend_fragments<S: AsRef<str>>(&self, words: &mut Vec<String>, fragments: &[S]) {
        let mut run: Vec<&str> = Vec::new();

        for fragment in fragments {
            let fragment = fragment.as_ref();
            if !is_separator_text(fragment) {
                run.push(fragment);
                continue;
            }

            words.extend(self.segment(&run));
            run.clear();
            if fragment.starts_with(SECTION) {
                if let Some(last) = words.last_mut() {
                    last.push_str(fragment);
                }
            }
        }

        words.extend(self.segment(&run));
    }
}
