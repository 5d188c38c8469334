//! Character classification for Tamil Unicode characters.
//!
//! This module assigns every code point a [`ScriptClass`] using plain range
//! checks against the Tamil block (U+0B80 to U+0BFF), plus the whitespace
//! and punctuation that delimit words and sentences.

/// Script classes used in Tamil text processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScriptClass {
    /// Independent vowel (அ ... ஔ)
    Vowel,
    /// Consonant (க ... ஹ)
    Consonant,
    /// Dependent vowel sign (matra), e.g. ா ி ொ
    VowelSign,
    /// Virama / pulli (்), the vowel-killing sign
    Virama,
    /// Aytham (ஃ), a spacing Tamil letter
    Aytham,
    /// Tamil digit or number sign (௦ ... ௯, ௰ ௱ ௲)
    Digit,
    /// Tamil symbol (௳ ... ௺, ௐ)
    Symbol,
    /// Unicode whitespace
    Whitespace,
    /// Sentence-final punctuation (. ! ? । ॥)
    SentenceTerminator,
    /// Other punctuation (ASCII and General Punctuation)
    Punctuation,
    /// Anything else: Latin letters, other scripts, unassigned points
    #[default]
    Other,
}

impl ScriptClass {
    /// Check if this class belongs to Tamil script (the word-forming classes)
    pub fn is_tamil(&self) -> bool {
        matches!(
            self,
            ScriptClass::Vowel
                | ScriptClass::Consonant
                | ScriptClass::VowelSign
                | ScriptClass::Virama
                | ScriptClass::Aytham
                | ScriptClass::Digit
                | ScriptClass::Symbol
        )
    }

    /// Check if this class only ever continues a cluster (vowel sign or virama)
    pub fn is_combining(&self) -> bool {
        matches!(self, ScriptClass::VowelSign | ScriptClass::Virama)
    }

    /// The virama is a vowel sign with the distinguished `is_virama` flag set
    pub fn is_vowel_sign_like(&self) -> bool {
        self.is_combining()
    }

    /// Check if this is the virama (pulli)
    pub fn is_virama(&self) -> bool {
        *self == ScriptClass::Virama
    }

    /// Check if this is punctuation, sentence terminators included
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            ScriptClass::Punctuation | ScriptClass::SentenceTerminator
        )
    }
}

/// Characters that end a sentence
const SENTENCE_TERMINATORS: &[char] = &[
    '.',        // FULL STOP
    '!',        // EXCLAMATION MARK
    '?',        // QUESTION MARK
    '\u{0964}', // DEVANAGARI DANDA
    '\u{0965}', // DEVANAGARI DOUBLE DANDA
];

fn is_tamil_vowel(cp: u32) -> bool {
    matches!(cp, 0x0B85..=0x0B8A | 0x0B8E..=0x0B90 | 0x0B92..=0x0B94)
}

fn is_tamil_consonant(cp: u32) -> bool {
    matches!(
        cp,
        0x0B95
            | 0x0B99
            | 0x0B9A
            | 0x0B9C
            | 0x0B9E
            | 0x0B9F
            | 0x0BA3
            | 0x0BA4
            | 0x0BA8..=0x0BAA
            | 0x0BAE..=0x0BB9
    )
}

fn is_tamil_vowel_sign(cp: u32) -> bool {
    // 0BD7 is the AU length mark, 0B82 the anusvara; both only combine.
    matches!(
        cp,
        0x0BBE..=0x0BC2 | 0x0BC6..=0x0BC8 | 0x0BCA..=0x0BCC | 0x0BD7 | 0x0B82
    )
}

/// Get the script class of a character
pub fn get_char_category(c: char) -> ScriptClass {
    let cp = c as u32;

    if (0x0B80..=0x0BFF).contains(&cp) {
        return match cp {
            _ if is_tamil_vowel(cp) => ScriptClass::Vowel,
            _ if is_tamil_consonant(cp) => ScriptClass::Consonant,
            _ if is_tamil_vowel_sign(cp) => ScriptClass::VowelSign,
            0x0BCD => ScriptClass::Virama,
            0x0B83 => ScriptClass::Aytham,
            0x0BE6..=0x0BF2 => ScriptClass::Digit,
            0x0BF3..=0x0BFA | 0x0BD0 => ScriptClass::Symbol,
            _ => ScriptClass::Other,
        };
    }

    if c.is_whitespace() {
        return ScriptClass::Whitespace;
    }

    if SENTENCE_TERMINATORS.contains(&c) {
        return ScriptClass::SentenceTerminator;
    }

    if c.is_ascii_punctuation()
        || ('\u{2010}'..='\u{2027}').contains(&c)
        || ('\u{2030}'..='\u{205E}').contains(&c)
    {
        return ScriptClass::Punctuation;
    }

    ScriptClass::Other
}

/// Alias of [`get_char_category`]
pub fn classify(c: char) -> ScriptClass {
    get_char_category(c)
}

/// Check if a character is Tamil script
pub fn is_tamil_char(c: char) -> bool {
    get_char_category(c).is_tamil()
}

/// A string with a script class and byte offset for each character
#[derive(Debug, Clone)]
pub struct TaString {
    /// The original string
    pub string: String,
    /// Class for each character (by index)
    pub categories: Vec<ScriptClass>,
    /// Byte offset of each character, plus the end offset
    pub byte_positions: Vec<usize>,
}

impl TaString {
    /// Create a new TaString from a string
    pub fn new(s: &str) -> Self {
        let categories = s.chars().map(get_char_category).collect();
        let mut byte_positions: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
        byte_positions.push(s.len());

        TaString {
            string: s.to_string(),
            categories,
            byte_positions,
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

    /// Get the class at a specific index
    pub fn get_category(&self, idx: usize) -> Option<ScriptClass> {
        self.categories.get(idx).copied()
    }

    /// Byte range `(start, len)` covering characters `from..to`
    pub fn byte_span(&self, from: usize, to: usize) -> (usize, usize) {
        let start = self.byte_positions[from];
        (start, self.byte_positions[to] - start)
    }

    /// The substring covering characters `from..to`
    pub fn slice(&self, from: usize, to: usize) -> &str {
        &self.string[self.byte_positions[from]..self.byte_positions[to]]
    }
}
