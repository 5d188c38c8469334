//! Error types for tamil-tokenizer.

use thiserror::Error;

/// Errors returned by the tokenizer entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// Input is missing, not text, or empty after trimming.
    #[error("invalid text: {0}")]
    InvalidText(String),

    /// Unexpected processing failure, e.g. an unknown method name.
    #[error("tokenization error: {0}")]
    Tokenization(String),
}

impl TokenizerError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        TokenizerError::InvalidText(reason.into())
    }
}

/// Result type for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
