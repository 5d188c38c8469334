//! Tokenizer configuration.

use serde::{Deserialize, Serialize};

use crate::grapheme::ConjunctMode;
use crate::tokenizer::Method;

/// Options shared by every [`crate::Tokenizer`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// How virama + consonant sequences are clustered.
    pub conjuncts: ConjunctMode,
    /// Whether `clean_default` strips punctuation.
    pub remove_punctuation: bool,
    /// Apply NFC composition before segmenting, so ெ + ா behaves like ொ.
    pub nfc: bool,
    /// Method used when none is given.
    pub default_method: Method,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            conjuncts: ConjunctMode::Join,
            remove_punctuation: false,
            nfc: false,
            default_method: Method::Words,
        }
    }
}

impl TokenizerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
