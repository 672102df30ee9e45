//! Character classification for Myanmar Unicode characters.
//!
//! This module assigns every character of a string to the category the
//! syllabifier needs: syllable-opening letters, combining marks that attach to
//! the open syllable, and the non-Myanmar runs (digits, Latin, whitespace,
//! punctuation) that are kept as atomic fragments.

/// Character categories used in Myanmar text processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharCategory {
    /// Base consonant (U+1000..U+1021)
    Consonant,
    /// Consonant from the Mon/Shan/Karen extensions
    ExtendedConsonant,
    /// Independent vowel, great sa and the ၌ ၍ ၎ ၏ symbols
    IndependentVowel,
    /// Medial sign (ျ ြ ွ ှ)
    Medial,
    /// Dependent vowel sign
    VowelSign,
    /// Anusvara, dot below, visarga
    Tone,
    /// Asat / a-that (U+103A)
    Asat,
    /// Virama, introduces a stacked consonant (U+1039)
    Virama,
    /// Any other combining mark of the Myanmar blocks
    Sign,
    /// ASCII, Myanmar or Shan digit
    Digit,
    /// Myanmar section marks (၊ ။)
    MyanmarPunct,
    /// Latin letter
    Latin,
    /// Whitespace
    Whitespace,
    /// General punctuation and symbols
    Punct,
    /// Other/unknown character
    #[default]
    Other,
}

impl CharCategory {
    /// Check if this category attaches to the currently open syllable
    pub fn is_combining(&self) -> bool {
        matches!(
            self,
            CharCategory::Medial
                | CharCategory::VowelSign
                | CharCategory::Tone
                | CharCategory::Asat
                | CharCategory::Virama
                | CharCategory::Sign
        )
    }

    /// Check if this category can open a Myanmar syllable
    pub fn is_letter(&self) -> bool {
        matches!(
            self,
            CharCategory::Consonant
                | CharCategory::ExtendedConsonant
                | CharCategory::IndependentVowel
        )
    }

    /// Check if this is a Myanmar-script letter or mark
    pub fn is_myanmar(&self) -> bool {
        self.is_letter() || self.is_combining()
    }

    /// Check if this character separates words (whitespace or punctuation)
    pub fn is_separator(&self) -> bool {
        matches!(
            self,
            CharCategory::Whitespace | CharCategory::Punct | CharCategory::MyanmarPunct
        )
    }
}

/// Dot below (aukmyit)
pub const DOT_BELOW: char = '\u{1037}';
/// Asat (a-that)
pub const ASAT: char = '\u{103A}';
/// Virama (stacking)
pub const VIRAMA: char = '\u{1039}';
/// Sentence-final section mark
pub const SECTION: char = '။';
/// Phrase separator mark
pub const LITTLE_SECTION: char = '၊';

/// Get the category of a character
pub fn get_char_category(c: char) -> CharCategory {
    if c.is_whitespace() {
        return CharCategory::Whitespace;
    }

    match c {
        '\u{1000}'..='\u{1021}' => CharCategory::Consonant,
        '\u{1022}'..='\u{102A}' | '\u{103F}' | '\u{104C}'..='\u{104F}' => {
            CharCategory::IndependentVowel
        }
        '\u{102B}'..='\u{1032}' => CharCategory::VowelSign,
        '\u{1033}'..='\u{1035}' => CharCategory::Sign,
        '\u{1036}' | DOT_BELOW | '\u{1038}' => CharCategory::Tone,
        VIRAMA => CharCategory::Virama,
        ASAT => CharCategory::Asat,
        '\u{103B}'..='\u{103E}' => CharCategory::Medial,
        '\u{1040}'..='\u{1049}' | '\u{1090}'..='\u{1099}' | '\u{A9F0}'..='\u{A9F9}' => {
            CharCategory::Digit
        }
        SECTION | LITTLE_SECTION => CharCategory::MyanmarPunct,
        '\u{1050}'..='\u{1055}'
        | '\u{105A}'..='\u{105D}'
        | '\u{1061}'
        | '\u{1065}'..='\u{1066}'
        | '\u{106E}'..='\u{1070}'
        | '\u{1075}'..='\u{1081}'
        | '\u{108E}'
        | '\u{AA60}'..='\u{AA6F}'
        | '\u{AA71}'..='\u{AA76}'
        | '\u{AA7A}'
        | '\u{A9E0}'..='\u{A9E4}'
        | '\u{A9E7}'..='\u{A9EF}'
        | '\u{A9FA}'..='\u{A9FE}' => CharCategory::ExtendedConsonant,
        '\u{1000}'..='\u{109F}' | '\u{AA60}'..='\u{AA7F}' | '\u{A9E0}'..='\u{A9FF}' => {
            CharCategory::Sign
        }
        '0'..='9' => CharCategory::Digit,
        'a'..='z' | 'A'..='Z' => CharCategory::Latin,
        _ if c.is_ascii_punctuation() => CharCategory::Punct,
        '\u{2010}'..='\u{2027}' | '\u{3000}'..='\u{303F}' | '\u{FF01}'..='\u{FF0F}' => {
            CharCategory::Punct
        }
        '\u{00C0}'..='\u{024F}' => CharCategory::Latin,
        '\u{200B}'..='\u{200D}' | '\u{FEFF}' => CharCategory::Whitespace,
        _ => CharCategory::Other,
    }
}

/// A string with character category information for each character
#[derive(Debug, Clone)]
pub struct MyString {
    /// The original string
    pub string: String,
    /// The characters of the string
    pub chars: Vec<char>,
    /// Category for each character (by index)
    pub categories: Vec<CharCategory>,
}

impl MyString {
    /// Create a new MyString from a string
    pub fn new(s: &str) -> Self {
        let chars: Vec<char> = s.chars().collect();
        let categories = chars.iter().copied().map(get_char_category).collect();
        MyString {
            string: s.to_string(),
            chars,
            categories,
        }
    }

    /// Get the length (number of characters)
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Get the category at a specific index
    pub fn get_category(&self, idx: usize) -> Option<CharCategory> {
        self.categories.get(idx).copied()
    }

    /// Get the character at a specific index
    pub fn get_char(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }
}

/// Check whether every character of `text` is whitespace or punctuation
pub fn is_separator_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| get_char_category(c).is_separator())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_myanmar_consonants() {
        assert_eq!(get_char_category('က'), CharCategory::Consonant);
        assert_eq!(get_char_category('မ'), CharCategory::Consonant);
        assert_eq!(get_char_category('အ'), CharCategory::Consonant);
    }

    #[test]
    fn test_marks() {
        assert_eq!(get_char_category('ျ'), CharCategory::Medial);
        assert_eq!(get_char_category('ိ'), CharCategory::VowelSign);
        assert_eq!(get_char_category('့'), CharCategory::Tone);
        assert_eq!(get_char_category('်'), CharCategory::Asat);
        assert_eq!(get_char_category('္'), CharCategory::Virama);
        assert!(get_char_category('း').is_combining());
    }

    #[test]
    fn test_digits_and_punct() {
        assert_eq!(get_char_category('၅'), CharCategory::Digit);
        assert_eq!(get_char_category('7'), CharCategory::Digit);
        assert_eq!(get_char_category('။'), CharCategory::MyanmarPunct);
        assert_eq!(get_char_category(','), CharCategory::Punct);
    }

    #[test]
    fn test_independent_vowels() {
        assert_eq!(get_char_category('ဦ'), CharCategory::IndependentVowel);
        assert_eq!(get_char_category('၏'), CharCategory::IndependentVowel);
    }

    #[test]
    fn test_space_and_latin() {
        assert_eq!(get_char_category(' '), CharCategory::Whitespace);
        assert_eq!(get_char_category('\t'), CharCategory::Whitespace);
        assert_eq!(get_char_category('Y'), CharCategory::Latin);
    }

    #[test]
    fn test_my_string() {
        let ms = MyString::new("ကျွန်");
        assert_eq!(ms.len(), 5);
        assert_eq!(ms.get_category(0), Some(CharCategory::Consonant));
        assert_eq!(ms.get_category(1), Some(CharCategory::Medial));
        assert_eq!(ms.get_category(4), Some(CharCategory::Asat));
    }

    #[test]
    fn test_separator_text() {
        assert!(is_separator_text("။၊?"));
        assert!(is_separator_text(" "));
        assert!(!is_separator_text("က"));
        assert!(!is_separator_text(""));
    }
}
