//! Input validation and text cleaning.
//!
//! Every public entry point runs [`validate`] before doing any work, so
//! invalid input is rejected before a single segment is produced.

use crate::char_categories::{get_char_category, ScriptClass};
use crate::error::{Result, TokenizerError};

/// Validate input text, returning it with surrounding whitespace trimmed.
pub fn validate(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        let reason = if text.is_empty() {
            "text cannot be empty"
        } else {
            "text cannot be only whitespace"
        };
        tracing::debug!(len = text.len(), reason, "rejecting input");
        return Err(TokenizerError::invalid(reason));
    }
    Ok(trimmed)
}

/// Validate possibly absent input.
pub fn validate_input(text: Option<&str>) -> Result<&str> {
    match text {
        Some(t) => validate(t),
        None => {
            tracing::debug!("rejecting absent input");
            Err(TokenizerError::invalid("text cannot be None"))
        }
    }
}

/// Validate raw bytes, which must be UTF-8 text.
pub fn validate_bytes(bytes: &[u8]) -> Result<&str> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        tracing::debug!(error = %e, "rejecting non-UTF-8 input");
        TokenizerError::invalid(format!("text must be valid UTF-8: {}", e))
    })?;
    validate(text)
}

/// Clean text: optionally drop punctuation, collapse whitespace runs to a
/// single space and trim both ends.
///
/// Punctuation is dropped before whitespace is collapsed, so
/// `clean(clean(t, p), p) == clean(t, p)` whenever the first result is
/// non-empty.
pub fn clean(text: &str, remove_punctuation: bool) -> Result<String> {
    let text = validate(text)?;
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        match get_char_category(c) {
            ScriptClass::Whitespace => pending_space = true,
            class if remove_punctuation && class.is_punctuation() => {}
            _ => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
            }
        }
    }

    Ok(out)
}

/// Normalize text. This is `clean(text, false)`; punctuation is kept.
pub fn normalize(text: &str) -> Result<String> {
    clean(text, false)
}
