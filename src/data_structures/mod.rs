// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for the Morse trie codec.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Bounded traversals (depth is capped at build time)
//! - Read-only after construction

pub mod morse_trie;

// Re-export common data structures
pub use morse_trie::{CodeLookup, MorseTrie, MorseTrieError, MorseTrieResult};
