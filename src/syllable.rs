//! Syllable breaking for Myanmar text.
//!
//! A fragment is either one Myanmar orthographic syllable (an opening letter
//! with every mark attached to it) or one atomic run of non-Myanmar content.
//! Stacked consonants (after a virama) and consonants killed by an asat stay
//! inside the syllable they close.

use crate::char_categories::{CharCategory, MyString, ASAT, DOT_BELOW, VIRAMA};

/// Syllabifier for Myanmar text
pub struct Syllabifier {
    /// The analyzed string
    ms: MyString,
}

impl Syllabifier {
    /// Create a new syllabifier for the given string
    pub fn new(text: &str) -> Self {
        Syllabifier {
            ms: MyString::new(text),
        }
    }

    /// Get the original string
    pub fn string(&self) -> &str {
        &self.ms.string
    }

    /// Break the text into syllables and non-Myanmar runs, in order
    pub fn make_syllables(&self) -> Vec<String> {
        let mut fragments = Vec::new();
        let mut i = 0;

        while i < self.ms.len() {
            let cat = self.ms.categories[i];
            let next_i = match cat {
                CharCategory::Consonant
                | CharCategory::ExtendedConsonant
                | CharCategory::IndependentVowel => self.read_syllable(i),
                // A mark with nothing to attach to opens its own fragment
                _ if cat.is_combining() => self.read_syllable(i),
                CharCategory::Digit => self.read_run(i, CharCategory::Digit),
                CharCategory::Latin => self.read_run(i, CharCategory::Latin),
                CharCategory::Whitespace => self.read_run(i, CharCategory::Whitespace),
                _ => i + 1,
            };
            fragments.push(self.ms.chars[i..next_i].iter().collect());
            i = next_i;
        }

        fragments
    }

    /// Read a Myanmar syllable starting at position i, returning its end
    fn read_syllable(&self, start_i: usize) -> usize {
        let mut i = start_i + 1;

        while i < self.ms.len() {
            let cat = self.ms.categories[i];
            match cat {
                CharCategory::Consonant | CharCategory::ExtendedConsonant => {
                    if self.opens_syllable(i) {
                        break;
                    }
                    i += 1;
                }
                _ if cat.is_combining() => i += 1,
                _ => break,
            }
        }

        i
    }

    /// A consonant opens a new syllable unless it is stacked under a virama
    /// or closed by a following asat, virama or dot below
    fn opens_syllable(&self, i: usize) -> bool {
        if i > 0 && self.ms.get_char(i - 1) == Some(VIRAMA) {
            return false;
        }
        !matches!(
            self.ms.get_char(i + 1),
            Some(ASAT) | Some(VIRAMA) | Some(DOT_BELOW)
        )
    }

    /// Read a run of characters of one category
    fn read_run(&self, start_i: usize, cat: CharCategory) -> usize {
        let mut i = start_i;
        while i < self.ms.len() && self.ms.categories[i] == cat {
            i += 1;
        }
        i
    }
}

/// Split text into syllable fragments
pub fn syllabify(text: &str) -> Vec<String> {
    Syllabifier::new(text).make_syllables()
}
