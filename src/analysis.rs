//! Word structure analysis and text statistics.
//!
//! Both records are computed fresh from the segmenter output on every call.

use serde::{Deserialize, Serialize};

use crate::char_categories::{get_char_category, ScriptClass};
use crate::chunker::Chunker;
use crate::grapheme::{graphemes, ConjunctMode};
use crate::sentence::sentence_tokenize;
use crate::syllable::syllables;

/// Structure of a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordStructure {
    /// Consonant code points, including consonants joined into conjuncts
    pub consonant_count: usize,
    /// Vowel signs, not counting the virama
    pub vowel_sign_count: usize,
    /// Virama (pulli) marks
    pub virama_count: usize,
    /// Grapheme clusters
    pub grapheme_count: usize,
    /// Whether any cluster joins consonants with a virama
    pub has_conjunct: bool,
    /// Tamil syllables
    pub syllable_count: usize,
}

impl WordStructure {
    /// Analyze a word
    pub fn of(word: &str, mode: ConjunctMode) -> Self {
        let clusters = graphemes(word, mode);
        let mut structure = WordStructure {
            grapheme_count: clusters.len(),
            has_conjunct: clusters.iter().any(|g| g.is_conjunct()),
            syllable_count: syllables(word, mode).iter().filter(|s| s.is_tamil()).count(),
            ..Default::default()
        };

        for class in word.chars().map(get_char_category) {
            match class {
                ScriptClass::Consonant => structure.consonant_count += 1,
                ScriptClass::VowelSign => structure.vowel_sign_count += 1,
                ScriptClass::Virama => structure.virama_count += 1,
                _ => {}
            }
        }

        structure
    }
}

/// Aggregate statistics for a text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    /// All code points
    pub total_characters: usize,
    /// Tamil-script code points
    pub tamil_characters: usize,
    /// Tamil words
    pub words: usize,
    /// Sentences
    pub sentences: usize,
    /// Mean grapheme count per word
    pub average_word_length: f64,
    /// Mean word count per sentence
    pub average_sentence_length: f64,
    /// Conjunct clusters inside words
    pub conjunct_count: usize,
    /// Vowel signs, not counting the virama
    pub vowel_sign_count: usize,
}

impl Statistics {
    /// Compute statistics for a text
    pub fn compute(text: &str, mode: ConjunctMode) -> Self {
        let chunker = Chunker::new(text);
        let words = chunker.text_chunks();
        let sentences = sentence_tokenize(text);

        let mut word_graphemes = 0;
        let mut conjunct_count = 0;
        for word in &words {
            let clusters = graphemes(chunker.text(word), mode);
            word_graphemes += clusters.len();
            conjunct_count += clusters.iter().filter(|g| g.is_conjunct()).count();
        }

        let average_word_length = if words.is_empty() {
            0.0
        } else {
            word_graphemes as f64 / words.len() as f64
        };

        let average_sentence_length = if sentences.is_empty() {
            0.0
        } else {
            let total: usize = sentences.iter().map(|s| s.word_count).sum();
            total as f64 / sentences.len() as f64
        };

        Statistics {
            total_characters: text.chars().count(),
            tamil_characters: words.iter().map(|w| w.char_len).sum(),
            words: words.len(),
            sentences: sentences.len(),
            average_word_length,
            average_sentence_length,
            conjunct_count,
            vowel_sign_count: text
                .chars()
                .filter(|&c| get_char_category(c) == ScriptClass::VowelSign)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_structure() {
        let s = WordStructure::of("தமிழ்", ConjunctMode::Join);
        assert_eq!(s.consonant_count, 3);
        assert_eq!(s.vowel_sign_count, 1);
        assert_eq!(s.virama_count, 1);
        assert_eq!(s.grapheme_count, 3);
        assert_eq!(s.syllable_count, 3);
        assert!(!s.has_conjunct);
    }

    #[test]
    fn test_word_structure_conjunct() {
        let s = WordStructure::of("வணக்கம்", ConjunctMode::Join);
        assert!(s.has_conjunct);
        assert_eq!(s.consonant_count, 5);
        assert_eq!(s.grapheme_count, 4);

        let split = WordStructure::of("வணக்கம்", ConjunctMode::Split);
        assert!(!split.has_conjunct);
        assert_eq!(split.grapheme_count, 5);
    }

    #[test]
    fn test_statistics() {
        let stats = Statistics::compute("தமிழ் மொழி அழகான மொழி.", ConjunctMode::Join);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.total_characters, 22);
        assert_eq!(stats.tamil_characters, 18);
        // 3 + 2 + 4 + 2 graphemes
        assert!((stats.average_word_length - 2.75).abs() < 1e-9);
        assert!((stats.average_sentence_length - 4.0).abs() < 1e-9);
        assert_eq!(stats.vowel_sign_count, 6);
        assert_eq!(stats.conjunct_count, 0);
    }

    #[test]
    fn test_sentence_length_matches_word_total() {
        let text = "வணக்கம். நீங்கள் எப்படி இருக்கிறீர்கள்?";
        let stats = Statistics::compute(text, ConjunctMode::Join);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.sentences, 2);
        assert!((stats.average_sentence_length - 2.0).abs() < 1e-9);
        assert!(
            (stats.average_sentence_length - stats.words as f64 / stats.sentences as f64).abs()
                < 1e-9
        );

        // Latin-only sentences count, but contribute no words
        let mixed = Statistics::compute("Hello. தமிழ் மொழி!", ConjunctMode::Join);
        assert_eq!(mixed.sentences, 2);
        assert!((mixed.average_sentence_length - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_statistics_without_tamil() {
        let stats = Statistics::compute("Hello World!", ConjunctMode::Join);
        assert_eq!(stats.tamil_characters, 0);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.average_word_length, 0.0);
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.average_sentence_length, 0.0);
    }
}
