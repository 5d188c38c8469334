//! The tokenizer façade.
//!
//! [`Tokenizer`] validates its input and dispatches to the segmenters. It
//! holds nothing but a `Copy` configuration, so it can be shared freely
//! across threads. The free functions at the bottom of this module use the
//! default configuration.

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::analysis::{Statistics, WordStructure};
use crate::char_categories::is_tamil_char;
use crate::chunker::Chunker;
use crate::cleaning;
use crate::config::TokenizerConfig;
use crate::error::{Result, TokenizerError};
use crate::grapheme::graphemes;
use crate::sentence::sentence_tokenize;
use crate::syllable::syllables;
use crate::token::{Token, TokenKind};

/// Segmentation methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Tamil words
    #[default]
    Words,
    /// Sentences
    Sentences,
    /// Tamil code points
    Characters,
    /// Grapheme clusters
    Graphemes,
    /// Syllables
    Syllables,
}

impl Method {
    /// All methods, in display order
    pub const ALL: [Method; 5] = [
        Method::Words,
        Method::Sentences,
        Method::Characters,
        Method::Graphemes,
        Method::Syllables,
    ];

    /// The lowercase method name, as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Words => "words",
            Method::Sentences => "sentences",
            Method::Characters => "characters",
            Method::Graphemes => "graphemes",
            Method::Syllables => "syllables",
        }
    }

    fn token_kind(&self) -> TokenKind {
        match self {
            Method::Words => TokenKind::Word,
            Method::Sentences => TokenKind::Sentence,
            Method::Characters => TokenKind::Character,
            Method::Graphemes => TokenKind::Grapheme,
            Method::Syllables => TokenKind::Syllable,
        }
    }
}

impl FromStr for Method {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == lowered)
            .ok_or_else(|| {
                TokenizerError::Tokenization(format!("unknown tokenization method: {}", s))
            })
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a tokenizer with the default configuration
    pub fn new() -> Self {
        Tokenizer::default()
    }

    /// Create a tokenizer with the given configuration
    pub fn with_config(config: TokenizerConfig) -> Self {
        Tokenizer { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Validate and, when configured, NFC-compose the input
    fn prepare<'a>(&self, text: &'a str) -> Result<Cow<'a, str>> {
        let validated = cleaning::validate(text)?;
        if self.config.nfc {
            Ok(Cow::Owned(validated.nfc().collect()))
        } else {
            Ok(Cow::Borrowed(validated))
        }
    }

    /// Validate input text, returning it trimmed
    pub fn validate<'a>(&self, text: &'a str) -> Result<&'a str> {
        cleaning::validate(text)
    }

    /// Tokenize with the configured default method
    pub fn tokenize_default(&self, text: &str) -> Result<Vec<String>> {
        self.tokenize(text, self.config.default_method)
    }

    /// Tokenize text with the given method
    pub fn tokenize(&self, text: &str, method: Method) -> Result<Vec<String>> {
        Ok(self
            .tokenize_spans(text, method)?
            .into_iter()
            .map(|t| t.text)
            .collect())
    }

    /// Tokenize text into tokens with byte positions.
    ///
    /// Positions are offsets into the validated text: the input with its
    /// surrounding whitespace trimmed, NFC-composed when `nfc` is set.
    pub fn tokenize_spans(&self, text: &str, method: Method) -> Result<Vec<Token>> {
        let prepared = self.prepare(text)?;
        let text: &str = &prepared;
        let kind = method.token_kind();
        let mode = self.config.conjuncts;

        let tokens: Vec<Token> = match method {
            Method::Words => {
                let chunker = Chunker::new(text);
                chunker
                    .text_chunks()
                    .iter()
                    .map(|c| Token::with_text(chunker.text(c).to_string(), c.start, c.len, kind))
                    .collect()
            }
            Method::Sentences => sentence_tokenize(text)
                .into_iter()
                .map(|s| Token::with_text(s.text, s.start, s.len, kind))
                .collect(),
            Method::Characters => text
                .char_indices()
                .filter(|&(_, c)| is_tamil_char(c))
                .map(|(i, c)| Token::with_text(c.to_string(), i, c.len_utf8(), kind))
                .collect(),
            Method::Graphemes => graphemes(text, mode)
                .into_iter()
                .map(|g| Token::with_text(g.text, g.start, g.len, kind))
                .collect(),
            Method::Syllables => syllables(text, mode)
                .into_iter()
                .map(|s| Token::with_text(s.text, s.start, s.len, kind))
                .collect(),
        };

        tracing::debug!(method = method.as_str(), tokens = tokens.len(), "tokenized");
        Ok(tokens)
    }

    /// Split text into Tamil words
    pub fn segment_words(&self, text: &str) -> Result<Vec<String>> {
        self.tokenize(text, Method::Words)
    }

    /// Split text into sentences
    pub fn segment_sentences(&self, text: &str) -> Result<Vec<String>> {
        self.tokenize(text, Method::Sentences)
    }

    /// Split text into its Tamil code points
    pub fn segment_characters(&self, text: &str) -> Result<Vec<String>> {
        self.tokenize(text, Method::Characters)
    }

    /// Split text into grapheme clusters
    pub fn segment_graphemes(&self, text: &str) -> Result<Vec<String>> {
        self.tokenize(text, Method::Graphemes)
    }

    /// Split text into syllables
    pub fn segment_syllables(&self, text: &str) -> Result<Vec<String>> {
        self.tokenize(text, Method::Syllables)
    }

    /// Analyze the structure of a word
    pub fn analyze_word(&self, word: &str) -> Result<WordStructure> {
        let word = self.prepare(word)?;
        Ok(WordStructure::of(&word, self.config.conjuncts))
    }

    /// Compute statistics for a text
    pub fn get_statistics(&self, text: &str) -> Result<Statistics> {
        let text = self.prepare(text)?;
        let stats = Statistics::compute(&text, self.config.conjuncts);
        tracing::debug!(words = stats.words, sentences = stats.sentences, "computed statistics");
        Ok(stats)
    }

    /// Clean text, optionally removing punctuation
    pub fn clean(&self, text: &str, remove_punctuation: bool) -> Result<String> {
        let text = self.prepare(text)?;
        cleaning::clean(&text, remove_punctuation)
    }

    /// Clean text using the configured punctuation setting
    pub fn clean_default(&self, text: &str) -> Result<String> {
        self.clean(text, self.config.remove_punctuation)
    }

    /// Normalize text (clean without removing punctuation)
    pub fn normalize(&self, text: &str) -> Result<String> {
        self.clean(text, false)
    }
}

/// Split text into Tamil words
pub fn segment_words(text: &str) -> Result<Vec<String>> {
    Tokenizer::new().segment_words(text)
}

/// Split text into sentences
pub fn segment_sentences(text: &str) -> Result<Vec<String>> {
    Tokenizer::new().segment_sentences(text)
}

/// Split text into its Tamil code points
pub fn segment_characters(text: &str) -> Result<Vec<String>> {
    Tokenizer::new().segment_characters(text)
}

/// Split text into grapheme clusters
pub fn segment_graphemes(text: &str) -> Result<Vec<String>> {
    Tokenizer::new().segment_graphemes(text)
}

/// Split text into syllables
pub fn segment_syllables(text: &str) -> Result<Vec<String>> {
    Tokenizer::new().segment_syllables(text)
}

/// Analyze the structure of a word
pub fn analyze_word(word: &str) -> Result<WordStructure> {
    Tokenizer::new().analyze_word(word)
}

/// Compute statistics for a text
pub fn get_statistics(text: &str) -> Result<Statistics> {
    Tokenizer::new().get_statistics(text)
}

/// Tokenize text with the given method
pub fn tokenize(text: &str, method: Method) -> Result<Vec<String>> {
    Tokenizer::new().tokenize(text, method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grapheme::ConjunctMode;

    #[test]
    fn test_method_from_str() {
        assert_eq!("words".parse::<Method>().unwrap(), Method::Words);
        assert_eq!("Syllables".parse::<Method>().unwrap(), Method::Syllables);
        assert!(matches!(
            "invalid_method".parse::<Method>(),
            Err(TokenizerError::Tokenization(_))
        ));
        for m in Method::ALL {
            assert_eq!(m.to_string().parse::<Method>().unwrap(), m);
        }
    }

    #[test]
    fn test_tokenize_dispatch() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("தமிழ் மொழி", Method::Words).unwrap().len(), 2);
        assert_eq!(
            tokenizer.tokenize("வணக்கம். நலமா?", Method::Sentences).unwrap().len(),
            2
        );
        assert_eq!(
            tokenizer.tokenize("தமிழ்", Method::Characters).unwrap(),
            vec!["த", "ம", "ி", "ழ", "்"]
        );
        assert_eq!(tokenizer.tokenize_default("தமிழ்").unwrap(), vec!["தமிழ்"]);
    }

    #[test]
    fn test_spans_follow_trimmed_text() {
        let tokens = Tokenizer::new()
            .tokenize_spans("  தமிழ் மொழி", Method::Words)
            .unwrap();
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[1].start, 16);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Word));
    }

    #[test]
    fn test_characters_skip_non_tamil() {
        assert_eq!(segment_characters("த மி").unwrap(), vec!["த", "ம", "ி"]);
        assert_eq!(segment_characters("abc").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_nfc_config() {
        let decomposed = "ம\u{0BC6}\u{0BBE}ழி";
        let plain = Tokenizer::new();
        let nfc = Tokenizer::with_config(TokenizerConfig {
            nfc: true,
            ..Default::default()
        });
        assert_eq!(plain.segment_characters(decomposed).unwrap().len(), 5);
        assert_eq!(nfc.segment_characters(decomposed).unwrap(), vec!["ம", "\u{0BCA}", "ழ", "ி"]);
    }

    #[test]
    fn test_split_conjunct_config() {
        let tokenizer = Tokenizer::with_config(TokenizerConfig {
            conjuncts: ConjunctMode::Split,
            ..Default::default()
        });
        assert_eq!(tokenizer.segment_graphemes("க்ஷ").unwrap(), vec!["க்", "ஷ"]);
        assert_eq!(segment_graphemes("க்ஷ").unwrap(), vec!["க்ஷ"]);
    }

    #[test]
    fn test_invalid_input_propagates() {
        let tokenizer = Tokenizer::new();
        for method in Method::ALL {
            assert!(matches!(
                tokenizer.tokenize("   ", method),
                Err(TokenizerError::InvalidText(_))
            ));
        }
        assert!(matches!(get_statistics(""), Err(TokenizerError::InvalidText(_))));
        assert!(matches!(analyze_word(" "), Err(TokenizerError::InvalidText(_))));
        assert!(matches!(tokenizer.normalize(""), Err(TokenizerError::InvalidText(_))));
    }

    #[test]
    fn test_clean_default() {
        let tokenizer = Tokenizer::with_config(TokenizerConfig {
            remove_punctuation: true,
            ..Default::default()
        });
        assert_eq!(tokenizer.clean_default("தமிழ், மொழி!").unwrap(), "தமிழ் மொழி");
        assert_eq!(tokenizer.normalize("தமிழ், மொழி!").unwrap(), "தமிழ், மொழி!");
    }
}
