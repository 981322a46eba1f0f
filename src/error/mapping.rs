// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Mapping source error module.
//!
//! This module defines error types that may occur while reading a letter to
//! code mapping and building a trie from it.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::morse_trie::MorseTrieError;

/// Errors that can occur while loading a mapping source.
#[derive(Error, Debug)]
pub enum MappingError {
    /// Error when the mapping file is missing.
    #[error("Mapping file not found: {0}")]
    NotFound(PathBuf),

    /// Error when the mapping source cannot be read.
    #[error("Failed to read mapping source: {0}")]
    Read(#[from] std::io::Error),

    /// Error when a line is too short to carry a letter, a separator and a code.
    #[error("Malformed mapping line {line}: {content:?}")]
    MalformedLine {
        /// One-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// Error when a line's code is rejected by the trie.
    #[error("Invalid code on mapping line {line}: {source}")]
    InvalidCode {
        /// One-based line number
        line: usize,
        /// Why the trie rejected the code
        #[source]
        source: MorseTrieError,
    },
}
