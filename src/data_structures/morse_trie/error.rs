// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Morse trie.
//!
//! This module defines the error types that can occur while building a Morse trie.

/// Errors that can occur in Morse trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorseTrieError {
    /// Error when an empty code is provided.
    #[error("Empty code not allowed")]
    EmptyCode,

    /// Error when a code contains something other than a dot or a dash.
    #[error("Invalid symbol '{symbol}' at position {position} (expected '.' or '-')")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based character offset inside the code.
        position: usize,
    },

    /// Error when a code exceeds the maximum depth allowed.
    #[error("Code '{code}' exceeds maximum trie depth of {max_depth}")]
    CodeTooLong {
        /// The code that was too long.
        code: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },
}
