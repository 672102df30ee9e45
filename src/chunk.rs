//! Tagged chunks over a syllable sequence.
//!
//! A [`Chunk`] is the unit threaded through tagging, cleanup, merging and
//! collapsing. Every pass takes a chunk slice and returns a new list.

use serde::{Deserialize, Serialize};

/// The closed tag vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tag {
    /// Punctuation or whitespace
    Punct,
    /// Untagged content
    #[default]
    Raw,
    /// Conjunction
    Conj,
    /// Postposition
    Postp,
    /// Particle (a postposition that cannot attach)
    Par,
    /// Sentence-final particle
    Sfp,
    /// Question word
    Qw,
    /// Verb-ending particle
    Vep,
    /// Auxiliary verb
    Aux,
    /// Negation prefix
    Neg,
    /// Negation clitic
    NegClitic,
    /// Month name
    Month,
    /// Day-of-week word
    Day,
    /// Classifier
    Cl,
    /// Number
    Num,
    /// Spelled-out number word
    #[serde(rename = "WORDNUM")]
    WordNum,
    /// Number fused with its classifier
    #[serde(rename = "NUMCL")]
    NumCl,
    /// Pronoun
    Prn,
    /// Region name
    Region,
    /// Common noun
    Noun,
    /// Title
    Title,
    /// Latin word
    Latin,
    /// Protected entity (number, email, URL and the like)
    Prot,
    /// Predicate phrase
    Pred,
    /// Verb stem split off a predicate
    #[serde(rename = "PVERB")]
    PVerb,
    /// Synthetic end-of-sentence marker
    Eos,
}

impl Tag {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Punct => "PUNCT",
            Tag::Raw => "RAW",
            Tag::Conj => "CONJ",
            Tag::Postp => "POSTP",
            Tag::Par => "PAR",
            Tag::Sfp => "SFP",
            Tag::Qw => "QW",
            Tag::Vep => "VEP",
            Tag::Aux => "AUX",
            Tag::Neg => "NEG",
            Tag::NegClitic => "NEG_CLITIC",
            Tag::Month => "MONTH",
            Tag::Day => "DAY",
            Tag::Cl => "CL",
            Tag::Num => "NUM",
            Tag::WordNum => "WORDNUM",
            Tag::NumCl => "NUMCL",
            Tag::Prn => "PRN",
            Tag::Region => "REGION",
            Tag::Noun => "NOUN",
            Tag::Title => "TITLE",
            Tag::Latin => "LATIN",
            Tag::Prot => "PROT",
            Tag::Pred => "PRED",
            Tag::PVerb => "PVERB",
            Tag::Eos => "EOS",
        }
    }

    /// Check if chunks with this tag stand as their own token
    pub fn is_function(&self) -> bool {
        FUNCTION_TAGS.contains(self)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags that delimit tokens when collapsing chunks into words
pub const FUNCTION_TAGS: &[Tag] = &[
    Tag::Conj,
    Tag::Postp,
    Tag::Par,
    Tag::Month,
    Tag::Day,
    Tag::Cl,
    Tag::Num,
    Tag::NumCl,
    Tag::Prn,
    Tag::Region,
    Tag::Noun,
    Tag::Title,
    Tag::Latin,
    Tag::Prot,
    Tag::Pred,
    Tag::PVerb,
];

/// Half-open interval over syllable indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Span of the synthetic end-of-sentence chunk
    pub const SENTINEL: Span = Span {
        start: usize::MAX,
        end: usize::MAX,
    };

    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Number of syllables covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Span::SENTINEL
    }

    /// Smallest span covering both
    pub fn join(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A tagged run of syllables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Syllable indices covered by this chunk
    pub span: Span,
    /// Concatenated surface text
    pub text: String,
    /// Category label
    pub tag: Tag,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(span: Span, text: impl Into<String>, tag: Tag) -> Self {
        Chunk {
            span,
            text: text.into(),
            tag,
        }
    }

    /// The synthetic chunk spliced between sentences
    pub fn end_marker() -> Self {
        Chunk::new(Span::SENTINEL, "", Tag::Eos)
    }

    /// Copy of this chunk with another tag
    pub fn retagged(&self, tag: Tag) -> Self {
        Chunk {
            tag,
            ..self.clone()
        }
    }

    /// Fuse consecutive chunks into one chunk with the given tag
    ///
    /// Returns `None` for an empty slice.
    pub fn fuse(chunks: &[Chunk], tag: Tag) -> Option<Chunk> {
        let first = chunks.first()?;
        let last = chunks.last()?;
        let text: String = chunks.iter().map(|c| c.text.as_str()).collect();
        Some(Chunk::new(first.span.join(&last.span), text, tag))
    }

    /// Check if this is punctuation
    pub fn is_punct(&self) -> bool {
        self.tag == Tag::Punct
    }

    /// Check if this is whitespace punctuation
    pub fn is_space(&self) -> bool {
        self.tag == Tag::Punct && self.text.chars().all(char::is_whitespace)
    }

    /// Copy of this chunk with its span moved right by `offset`
    pub fn shifted(&self, offset: usize) -> Self {
        if self.span.is_sentinel() {
            return self.clone();
        }
        Chunk {
            span: Span::new(self.span.start + offset, self.span.end + offset),
            ..self.clone()
        }
    }

    /// Check if this is the sentence-final section mark
    pub fn is_section_end(&self) -> bool {
        self.tag == Tag::Punct && self.text == "။"
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.text, self.tag)
    }
}
