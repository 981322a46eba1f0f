// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Morse Trie Library
//!
//! A Morse code encoder and decoder built on a binary trie whose edges are
//! dots and dashes. The library is used by the `morse_trie` binary but has no
//! I/O of its own apart from loading mapping files.
//!
//! # Architecture
//!
//! - [`data_structures::morse_trie`]: the trie and its three algorithms
//! - [`codec`]: text to stream translation and the word-boundary rules
//! - [`mapping`]: mapping sources and trie construction
//! - [`config`] and [`error`]: the ambient configuration and error stack
//!
//! Encoding and decoding never stop on a bad symbol. Skipped characters and
//! tokens come back as a list so the caller can choose how to surface them.

pub mod codec;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod mapping;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use codec::{decode, encode, CodecError, CodecOptions, Decoded, Encoded, MorseCodec};
pub use data_structures::{CodeLookup, MorseTrie};

/// Version information for the Morse trie codec.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
