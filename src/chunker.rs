//! Chunking of Tamil text into runs.
//!
//! This module splits text into maximal runs of Tamil script, whitespace,
//! punctuation and everything else. Word segmentation keeps the Tamil runs;
//! concatenating all chunks gives back the input.

use serde::{Deserialize, Serialize};

use crate::char_categories::{ScriptClass, TaString};

/// The type of a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChunkType {
    /// Tamil script (letters, signs, digits, symbols)
    #[default]
    Text,
    /// Whitespace
    Space,
    /// Punctuation, sentence terminators included
    Punct,
    /// Latin or any other non-Tamil text
    Other,
}

impl ChunkType {
    fn of(cat: ScriptClass) -> Self {
        match cat {
            c if c.is_tamil() => ChunkType::Text,
            ScriptClass::Whitespace => ChunkType::Space,
            c if c.is_punctuation() => ChunkType::Punct,
            _ => ChunkType::Other,
        }
    }
}

/// A chunk of text with its type and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The type of this chunk
    pub chunk_type: ChunkType,
    /// Starting byte offset in the original string
    pub start: usize,
    /// Length in bytes
    pub len: usize,
    /// Number of characters in the chunk
    pub char_len: usize,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(chunk_type: ChunkType, start: usize, len: usize, char_len: usize) -> Self {
        Chunk {
            chunk_type,
            start,
            len,
            char_len,
        }
    }
}

/// Chunker for Tamil text
pub struct Chunker {
    /// The analyzed string
    ts: TaString,
}

impl Chunker {
    /// Create a new chunker for the given string
    pub fn new(text: &str) -> Self {
        Chunker {
            ts: TaString::new(text),
        }
    }

    /// Get the text covered by a chunk
    pub fn text(&self, chunk: &Chunk) -> &str {
        &self.ts.string[chunk.start..chunk.start + chunk.len]
    }

    /// Chunk the text into runs
    pub fn make_chunks(&self) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut i = 0;

        while i < self.ts.len() {
            let (chunk, next_i) = self.read_run(i);
            chunks.push(chunk);
            i = next_i;
        }

        chunks
    }

    /// Tamil runs only
    pub fn text_chunks(&self) -> Vec<Chunk> {
        self.make_chunks()
            .into_iter()
            .filter(|c| c.chunk_type == ChunkType::Text)
            .collect()
    }

    /// Read a run of same-typed characters starting at position i
    fn read_run(&self, start_i: usize) -> (Chunk, usize) {
        let chunk_type = ChunkType::of(self.ts.categories[start_i]);
        let mut i = start_i + 1;

        while i < self.ts.len() && ChunkType::of(self.ts.categories[i]) == chunk_type {
            i += 1;
        }

        let (start, len) = self.ts.byte_span(start_i, i);
        (Chunk::new(chunk_type, start, len, i - start_i), i)
    }
}
