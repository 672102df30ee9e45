//! Text normalization applied before and after pattern protection.
//!
//! [`Preprocessor::normalize`] runs on the whole input: NFC, zero-width
//! removal, whitespace collapse, the configured [`SpaceRemoveMode`] and the
//! gluing of spaced-out numbers. [`Preprocessor::clean_span`] runs on each
//! unprotected span once protection has taken the entities out.

use std::borrow::Cow;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, TokenizerError};

/// Digits recognized inside numeric patterns
const DIGIT: &str = r"[0-9\x{1040}-\x{1049}]";
/// Myanmar script (including its digits)
const MYANMAR: &str = r"[\x{1000}-\x{109F}\x{AA60}-\x{AA7F}\x{A9E0}-\x{A9FF}]";
/// Myanmar script minus its digits
const MYANMAR_LETTER: &str =
    r"[[\x{1000}-\x{109F}\x{AA60}-\x{AA7F}\x{A9E0}-\x{A9FF}]--[\x{1040}-\x{1049}]]";
/// Stand-in for a space that must survive letter-letter space removal
const KEEP: &str = "☃";

/// How spaces between words are treated before syllabification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceRemoveMode {
    /// Remove every space
    All,
    /// Remove spaces between two Myanmar characters
    Myanmar,
    /// Remove spaces between Myanmar letters, keep the ones next to digits
    #[default]
    MyanmarNotNumeric,
}

impl std::str::FromStr for SpaceRemoveMode {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(SpaceRemoveMode::All),
            "myanmar" => Ok(SpaceRemoveMode::Myanmar),
            "myanmar_not_numeric" => Ok(SpaceRemoveMode::MyanmarNotNumeric),
            other => Err(TokenizerError::InvalidInput(format!(
                "unknown space mode `{}`",
                other
            ))),
        }
    }
}

/// Compiled normalization patterns
#[derive(Debug, Clone)]
pub struct Preprocessor {
    invisible: Regex,
    whitespace: Regex,
    myanmar_space: Regex,
    digit_digit: Regex,
    digit_letter: Regex,
    letter_digit: Regex,
    letter_letter: Regex,
    after_section: Regex,
    time: Regex,
    thousands: Regex,
    date: Regex,
    symbols: Regex,
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| TokenizerError::Pattern { name, source })
}

/// Apply `re` until the text stops changing
fn replace_fixpoint(re: &Regex, mut text: String, rep: &str) -> String {
    loop {
        let next = match re.replace_all(&text, rep) {
            Cow::Owned(next) => next,
            Cow::Borrowed(_) => break,
        };
        text = next;
    }
    text
}

impl Preprocessor {
    /// Compile every pattern
    pub fn new() -> Result<Self> {
        let pair = |left: &str, right: &str| format!(r"({})\s+({})", left, right);

        Ok(Preprocessor {
            // zero-width marks plus the placeholder key delimiters
            invisible: compile("invisible", r"[\x{2}\x{3}\x{200B}-\x{200D}\x{FEFF}]")?,
            whitespace: compile("whitespace", r"\s+")?,
            myanmar_space: compile("myanmar_space", &pair(MYANMAR, MYANMAR))?,
            digit_digit: compile("digit_digit", &pair(DIGIT, DIGIT))?,
            digit_letter: compile("digit_letter", &pair(DIGIT, MYANMAR_LETTER))?,
            letter_digit: compile("letter_digit", &pair(MYANMAR_LETTER, DIGIT))?,
            letter_letter: compile("letter_letter", &pair(MYANMAR_LETTER, MYANMAR_LETTER))?,
            after_section: compile("after_section", r"([။၊])\s+")?,
            time: compile("time", r"(\d{1,2})\s*:\s*(\d{2})(?:\s*:\s*(\d{2}))?")?,
            thousands: compile(
                "thousands",
                &format!(r"{d}{{1,3}}(?:\s*[,.]\s*{d}{{3}})+", d = DIGIT),
            )?,
            date: compile(
                "date",
                &format!(
                    r"{d}{{1,2}}\s*[./-]\s*{d}{{1,2}}\s*[./-]\s*{d}{{2,4}}",
                    d = DIGIT
                ),
            )?,
            symbols: compile(
                "symbols",
                r#"[~^*_+=<>\[\]{}|\\…“”‘’「」『』"'#()/:\-]+|\.\.+"#,
            )?,
        })
    }

    /// Normalize a whole input text
    pub fn normalize(&self, text: &str, mode: SpaceRemoveMode) -> String {
        let text: String = text.nfc().collect();
        let text = self.invisible.replace_all(&text, "");
        let text = self.collapse_whitespace(&text);
        let text = self.remove_spaces(text, mode);
        self.collapse_digit_spaces(&text)
    }

    /// Collapse whitespace runs to one space and trim
    pub fn collapse_whitespace(&self, text: &str) -> String {
        self.whitespace.replace_all(text, " ").trim().to_string()
    }

    /// Apply the space removal policy
    pub fn remove_spaces(&self, text: String, mode: SpaceRemoveMode) -> String {
        match mode {
            SpaceRemoveMode::All => self.whitespace.replace_all(&text, "").into_owned(),
            SpaceRemoveMode::Myanmar => replace_fixpoint(&self.myanmar_space, text, "${1}${2}"),
            SpaceRemoveMode::MyanmarNotNumeric => {
                let keep = format!("${{1}}{}${{2}}", KEEP);
                let text = replace_fixpoint(&self.digit_digit, text, &keep);
                let text = replace_fixpoint(&self.digit_letter, text, &keep);
                let text = replace_fixpoint(&self.letter_digit, text, &keep);
                let text = replace_fixpoint(&self.letter_letter, text, "${1}${2}");
                let text = text.replace(KEEP, " ");
                self.after_section.replace_all(&text, "${1}").into_owned()
            }
        }
    }

    /// Glue spaced-out times, thousands groups and dates back together
    pub fn collapse_digit_spaces(&self, text: &str) -> String {
        let text = self.time.replace_all(text, |caps: &Captures| {
            let mut out = format!("{}:{}", &caps[1], &caps[2]);
            if let Some(seconds) = caps.get(3) {
                out.push(':');
                out.push_str(seconds.as_str());
            }
            out
        });
        let strip = |caps: &Captures| -> String {
            caps[0].chars().filter(|c| !c.is_whitespace()).collect()
        };
        let text = self.thousands.replace_all(&text, strip);
        let text = self.date.replace_all(&text, strip);
        text.into_owned()
    }

    /// Replace stray symbols in an unprotected span with spaces
    pub fn clean_span(&self, text: &str) -> String {
        let text = self.symbols.replace_all(text, " ");
        self.collapse_whitespace(&text)
    }
}
