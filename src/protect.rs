//! Protection of atomic entities before syllabification.
//!
//! Emails, URLs, numbers, dates and similar spans must reach the output as
//! single tokens. [`Protector::protect`] swaps each of them for a placeholder
//! key that cannot occur in real text, and [`Protected`] keeps the mapping
//! needed to put them back.
//!
//! Patterns run one after another over the whole text, each one seeing the
//! output of the previous substitution, so the order below decides which
//! pattern claims an ambiguous span.

use log::trace;
use regex::{Captures, Regex};

use crate::error::{Result, TokenizerError};

/// Opening delimiter of a placeholder key
pub const KEY_OPEN: char = '\u{2}';
/// Closing delimiter of a placeholder key
pub const KEY_CLOSE: char = '\u{3}';
/// Literal prefix inside a placeholder key
const KEY_PREFIX: &str = "PROT";

/// The kinds of protected entity, in matching order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Email,
    Url,
    Mention,
    LatinAbbreviation,
    Title,
    MyanmarAbbreviation,
    Date,
    Time,
    Decimal,
    Fraction,
    Phone,
    Thousands,
    Digits,
    Possessive,
}

impl EntityKind {
    /// Every kind, highest priority first
    pub const ALL: [EntityKind; 14] = [
        EntityKind::Email,
        EntityKind::Url,
        EntityKind::Mention,
        EntityKind::LatinAbbreviation,
        EntityKind::Title,
        EntityKind::MyanmarAbbreviation,
        EntityKind::Date,
        EntityKind::Time,
        EntityKind::Decimal,
        EntityKind::Fraction,
        EntityKind::Phone,
        EntityKind::Thousands,
        EntityKind::Digits,
        EntityKind::Possessive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Email => "email",
            EntityKind::Url => "url",
            EntityKind::Mention => "mention",
            EntityKind::LatinAbbreviation => "latin_abbreviation",
            EntityKind::Title => "title",
            EntityKind::MyanmarAbbreviation => "myanmar_abbreviation",
            EntityKind::Date => "date",
            EntityKind::Time => "time",
            EntityKind::Decimal => "decimal",
            EntityKind::Fraction => "fraction",
            EntityKind::Phone => "phone",
            EntityKind::Thousands => "thousands",
            EntityKind::Digits => "digits",
            EntityKind::Possessive => "possessive",
        }
    }

    /// Regex source; `{d}` stands for one ASCII or Myanmar digit
    fn pattern(&self) -> String {
        let source = match self {
            EntityKind::Email => {
                r"[A-Za-z0-9\x{1040}-\x{1049}._%+\-]+\s*@\s*[A-Za-z0-9.\-]+(?:\.[A-Za-z]{2,})?"
            }
            EntityKind::Url => r"https?://[^\s]+|www\.[^\s]+",
            EntityKind::Mention => r"@@?[A-Za-z0-9_]+",
            EntityKind::LatinAbbreviation => r"\b(?:[A-Za-z]\s*\.){2,}[A-Za-z]?\b",
            EntityKind::Title => r"\b(?:Ph\.D\.?|Dr\.|Mr\.|Mrs\.|Ms\.|Prof\.)",
            EntityKind::MyanmarAbbreviation => r"(?:[က-အ]\s*\.){2,}[က-အ]?",
            EntityKind::Date => r"{d}{1,2}[./-]{d}{1,2}[./-]{d}{2,4}",
            EntityKind::Time => r"{d}{1,2}:{d}{2}(?::{d}{2})?",
            EntityKind::Decimal => r"{d}+\.{d}+",
            EntityKind::Fraction => r"{d}+/{d}+",
            EntityKind::Phone => r"(?:\+?95|09|၀၉)[\s\-]?(?:{d}[\s\-]?){6,}",
            EntityKind::Thousands => r"{d}+(?:[,.]{d}+)+",
            EntityKind::Digits => r"{d}{2,}",
            EntityKind::Possessive => r"\b\w+'[a-zA-Z]+\b",
        };
        source.replace("{d}", r"[0-9\x{1040}-\x{1049}]")
    }
}

/// Convert a positive counter to bijective base-26 letters (1 -> A, 27 -> AA)
pub fn int_to_letters(mut n: usize) -> String {
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Placeholder keys and the text they stand for, in insertion order
#[derive(Debug, Clone, Default)]
pub struct PlaceholderMap {
    entries: Vec<(String, String)>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        PlaceholderMap::default()
    }

    /// Record `original` under a fresh key and return the key
    pub fn register(&mut self, original: &str) -> String {
        let key = format!(
            "{}{}{}{}",
            KEY_OPEN,
            KEY_PREFIX,
            int_to_letters(self.entries.len() + 1),
            KEY_CLOSE
        );
        self.entries.push((key.clone(), original.to_string()));
        key
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, original)| original.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A piece of protected text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Ordinary text to be segmented
    Text(&'a str),
    /// The original text of a protected entity
    Protected(&'a str),
}

/// Text with entities replaced by placeholder keys
#[derive(Debug, Clone)]
pub struct Protected {
    /// The substituted text
    pub text: String,
    /// Keys introduced into `text`
    pub map: PlaceholderMap,
}

impl Protected {
    /// Text with nothing protected
    pub fn unprotected(text: &str) -> Self {
        Protected {
            text: text.to_string(),
            map: PlaceholderMap::new(),
        }
    }

    /// Split into ordinary text and protected originals, in order
    ///
    /// Empty text pieces are skipped. A delimited run that is not a known
    /// key is left as text.
    pub fn pieces(&self) -> Vec<Piece<'_>> {
        let mut pieces = Vec::new();
        let mut rest = self.text.as_str();

        while let Some(open) = rest.find(KEY_OPEN) {
            let close = match rest[open..].find(KEY_CLOSE) {
                Some(offset) => open + offset,
                None => break,
            };
            let end = close + KEY_CLOSE.len_utf8();

            match self.map.get(&rest[open..end]) {
                Some(original) => {
                    if open > 0 {
                        pieces.push(Piece::Text(&rest[..open]));
                    }
                    pieces.push(Piece::Protected(original));
                }
                None => pieces.push(Piece::Text(&rest[..end])),
            }
            rest = &rest[end..];
        }

        if !rest.is_empty() {
            pieces.push(Piece::Text(rest));
        }
        pieces
    }

    /// Substitute every key back with its original text
    pub fn restore(&self) -> String {
        // Later originals may contain earlier keys
        self.map
            .entries
            .iter()
            .rev()
            .fold(self.text.clone(), |text, (key, original)| {
                text.replace(key.as_str(), original)
            })
    }
}

/// The ordered protection patterns
#[derive(Debug, Clone)]
pub struct Protector {
    patterns: Vec<(EntityKind, Regex)>,
}

impl Protector {
    /// Compile every pattern
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::with_capacity(EntityKind::ALL.len());
        for kind in EntityKind::ALL {
            let re = Regex::new(&kind.pattern()).map_err(|source| TokenizerError::Pattern {
                name: kind.name(),
                source,
            })?;
            patterns.push((kind, re));
        }
        Ok(Protector { patterns })
    }

    /// Replace every entity in `text` with a space-padded placeholder key
    pub fn protect(&self, text: &str) -> Protected {
        let mut map = PlaceholderMap::new();
        let mut current = text.to_string();

        for (kind, re) in &self.patterns {
            let replaced = re.replace_all(&current, |caps: &Captures| {
                let original = &caps[0];
                trace!("protect {}: {:?}", kind.name(), original);
                format!(" {} ", map.register(original))
            });
            current = replaced.into_owned();
        }

        Protected { text: current, map }
    }
}
