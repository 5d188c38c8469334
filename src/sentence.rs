//! Sentence tokenization.
//!
//! Text is split at every sentence terminator (`.`, `!`, `?`, `।`, `॥`).
//! Each span is trimmed and the terminator itself is dropped; spans that
//! end up empty (trailing terminators, runs like `!!`) are discarded.

use crate::char_categories::{ScriptClass, TaString};
use crate::chunker::Chunker;

/// A sentence and its position in the source string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// The trimmed sentence text, without its terminator
    pub text: String,
    /// Starting byte offset in the original string
    pub start: usize,
    /// Length in bytes
    pub len: usize,
    /// Number of Tamil words in the sentence
    pub word_count: usize,
}

impl Sentence {
    fn from_span(span: &str, offset: usize) -> Option<Self> {
        let trimmed = span.trim();
        if trimmed.is_empty() {
            return None;
        }
        let lead = span.len() - span.trim_start().len();
        Some(Sentence {
            text: trimmed.to_string(),
            start: offset + lead,
            len: trimmed.len(),
            word_count: Chunker::new(trimmed).text_chunks().len(),
        })
    }
}

/// Split text into sentences
pub fn sentence_tokenize(text: &str) -> Vec<Sentence> {
    let ts = TaString::new(text);
    let mut sentences = Vec::new();
    let mut span_start = 0;

    for i in 0..ts.len() {
        if ts.categories[i] == ScriptClass::SentenceTerminator {
            let offset = ts.byte_positions[span_start];
            sentences.extend(Sentence::from_span(ts.slice(span_start, i), offset));
            span_start = i + 1;
        }
    }

    if span_start < ts.len() {
        let offset = ts.byte_positions[span_start];
        sentences.extend(Sentence::from_span(ts.slice(span_start, ts.len()), offset));
    }

    tracing::trace!(sentences = sentences.len(), "segmented sentences");
    sentences
}

/// Split text into sentence strings
pub fn sentence_strings(text: &str) -> Vec<String> {
    sentence_tokenize(text).into_iter().map(|s| s.text).collect()
}
