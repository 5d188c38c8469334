//! Token representation for Tamil text.
//!
//! A Token is a labeled span of the input: a word, a sentence, a single
//! character, a grapheme cluster or a syllable.

use serde::{Deserialize, Serialize};

/// The kind of unit a token holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A contiguous run of Tamil script
    #[default]
    Word,
    /// Text between sentence terminators
    Sentence,
    /// A single Tamil code point
    Character,
    /// A grapheme cluster
    Grapheme,
    /// A syllabic unit
    Syllable,
}

/// A single token from the tokenization process
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Token {
    /// The raw text of the token
    pub text: String,

    /// Starting byte offset in the original string
    pub start: usize,

    /// Length in bytes
    pub len: usize,

    /// The kind of this token
    pub kind: TokenKind,
}

impl Token {
    /// Create a token with text and position
    pub fn with_text(text: String, start: usize, len: usize, kind: TokenKind) -> Self {
        Token {
            text,
            start,
            len,
            kind,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
