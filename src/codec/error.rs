// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Per-symbol failures reported by the codec.
//!
//! None of these abort an encode or decode. They are collected and handed
//! back alongside the output.

/// A character or token the codec had to skip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Input character has no path in the trie.
    #[error("No Morse code for character '{character}' at position {position}")]
    MissingMapping {
        /// The character that could not be encoded.
        character: char,
        /// Zero-based character offset in the input text.
        position: usize,
    },

    /// Token leaves the trie before it is fully consumed.
    #[error("Unknown Morse code '{token}' at token {position}")]
    UnknownCode {
        /// The token that could not be decoded.
        token: String,
        /// Zero-based index among the code tokens, word boundaries not counted.
        position: usize,
    },

    /// Token ends on an internal node that carries no letter.
    #[error("Morse code '{token}' at token {position} does not name a letter")]
    IncompleteCode {
        /// The token that could not be decoded.
        token: String,
        /// Zero-based index among the code tokens, word boundaries not counted.
        position: usize,
    },

    /// Options that would make the stream ambiguous.
    #[error("Invalid separator {0:?}: must not be '.', '-' or a line break")]
    InvalidSeparator(char),
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
