//! Tamil syllable segmentation.
//!
//! Syllable boundaries follow the grapheme boundaries (see
//! [`crate::grapheme`]); each unit is then labeled with the consonant/vowel
//! pattern it carries.

use serde::{Deserialize, Serialize};

use crate::char_categories::{ScriptClass, TaString};
use crate::grapheme::{cluster_end, ConjunctMode};

/// The phonetic pattern of a syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyllableKind {
    /// Standalone vowel (அ, ஆ, ...)
    Vowel,
    /// Bare consonant carrying the inherent "a" (க)
    Consonant,
    /// Consonant with a vowel sign (கா, கி, ...)
    ConsonantVowel,
    /// Consonant with virama and nothing joined to it (க்)
    DeadConsonant,
    /// Consonant cluster joined by virama (க்ஷ, க்ஷா)
    Conjunct,
    /// Aytham (ஃ)
    Aytham,
    /// Non-syllabic material: digits, symbols, spaces, punctuation, other scripts
    Other,
}

/// A syllable and its position in the source string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    /// The syllable text
    pub text: String,
    /// Starting byte offset in the original string
    pub start: usize,
    /// Length in bytes
    pub len: usize,
    /// The pattern of this syllable
    pub kind: SyllableKind,
}

impl Syllable {
    /// Check if this is a Tamil syllable rather than surrounding material
    pub fn is_tamil(&self) -> bool {
        self.kind != SyllableKind::Other
    }
}

fn syllable_kind(categories: &[ScriptClass]) -> SyllableKind {
    match categories.first() {
        Some(ScriptClass::Vowel) => SyllableKind::Vowel,
        Some(ScriptClass::Aytham) => SyllableKind::Aytham,
        Some(ScriptClass::Consonant) => {
            let joined = categories
                .windows(2)
                .any(|w| w[0] == ScriptClass::Virama && w[1] == ScriptClass::Consonant);
            if joined {
                SyllableKind::Conjunct
            } else if categories.contains(&ScriptClass::VowelSign) {
                SyllableKind::ConsonantVowel
            } else if categories.last() == Some(&ScriptClass::Virama) {
                SyllableKind::DeadConsonant
            } else {
                SyllableKind::Consonant
            }
        }
        _ => SyllableKind::Other,
    }
}

/// Segment text into syllables with their byte positions and kinds
pub fn syllables(text: &str, mode: ConjunctMode) -> Vec<Syllable> {
    let ts = TaString::new(text);
    let mut syls = Vec::new();
    let mut i = 0;

    while i < ts.len() {
        let end = cluster_end(&ts, i, mode);
        let (start, len) = ts.byte_span(i, end);
        syls.push(Syllable {
            text: ts.slice(i, end).to_string(),
            start,
            len,
            kind: syllable_kind(&ts.categories[i..end]),
        });
        i = end;
    }

    tracing::trace!(syllables = syls.len(), "segmented syllables");
    syls
}

/// Segment text into syllable strings
pub fn syllable_strings(text: &str, mode: ConjunctMode) -> Vec<String> {
    syllables(text, mode).into_iter().map(|s| s.text).collect()
}
