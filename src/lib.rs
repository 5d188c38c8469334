//! # tamil-tokenizer
//!
//! A Tamil script tokenizer written in Rust.
//!
//! Tamil is a combining script: one perceived letter can span up to three
//! code points (consonant + vowel sign, consonant + virama + consonant).
//! This crate segments text into words, sentences, code points, grapheme
//! clusters and syllables without breaking those units apart, and derives
//! word structure and text statistics from the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use tamil_tokenizer::{segment_graphemes, segment_words};
//!
//! let words = segment_words("தமிழ் மொழி அழகான மொழி").unwrap();
//! assert_eq!(words, vec!["தமிழ்", "மொழி", "அழகான", "மொழி"]);
//!
//! let clusters = segment_graphemes("தமிழ்").unwrap();
//! assert_eq!(clusters, vec!["த", "மி", "ழ்"]);
//! ```
//!
//! ## Configured Tokenizer
//!
//! ```rust
//! use tamil_tokenizer::{ConjunctMode, Method, Tokenizer, TokenizerConfig};
//!
//! let tokenizer = Tokenizer::with_config(TokenizerConfig {
//!     conjuncts: ConjunctMode::Split,
//!     ..Default::default()
//! });
//! let tokens = tokenizer.tokenize("க்ஷ", Method::Graphemes).unwrap();
//! assert_eq!(tokens, vec!["க்", "ஷ"]);
//! ```

pub mod analysis;
pub mod char_categories;
pub mod chunker;
pub mod cleaning;
pub mod config;
pub mod error;
pub mod grapheme;
pub mod sentence;
pub mod syllable;
pub mod token;
pub mod tokenizer;

// Re-export main types for convenience
pub use analysis::{Statistics, WordStructure};
pub use char_categories::{classify, get_char_category, is_tamil_char, ScriptClass, TaString};
pub use chunker::{Chunk, ChunkType, Chunker};
pub use cleaning::{clean, normalize, validate, validate_bytes, validate_input};
pub use config::TokenizerConfig;
pub use error::{Result, TokenizerError};
pub use grapheme::{ConjunctMode, Grapheme};
pub use sentence::Sentence;
pub use syllable::{Syllable, SyllableKind};
pub use token::{Token, TokenKind};
pub use tokenizer::{
    analyze_word, get_statistics, segment_characters, segment_graphemes, segment_sentences,
    segment_syllables, segment_words, tokenize, Method, Tokenizer,
};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
