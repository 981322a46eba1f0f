// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Morse Trie Implementation
//!
//! This module provides a binary trie whose edges are labelled with Morse
//! symbols. Walking from the root along the dots and dashes of a code lands on
//! the node holding the letter for that code.
//!
//! # Example
//!
//! ```
//! use morse_trie_lib::data_structures::morse_trie::{CodeLookup, MorseTrie};
//!
//! let mut trie = MorseTrie::new();
//! trie.insert('e', ".").unwrap();
//! trie.insert('a', ".-").unwrap();
//!
//! assert_eq!(trie.code_for('a').as_deref(), Some(".-"));
//! assert_eq!(trie.letter_for("."), CodeLookup::Letter('e'));
//! assert_eq!(trie.letter_for("--"), CodeLookup::Unmapped);
//! ```
//!
//! # Performance Characteristics
//!
//! - `insert`: O(code length)
//! - `letter_for`: O(code length)
//! - `code_for`: O(tree size), depth-first with dots explored before dashes
//!
//! The trie is built once and only read afterwards. It holds no interior
//! mutability, so a built trie can be shared by reference across threads.

mod error;
mod node;

pub use error::MorseTrieError;
pub use node::{Symbol, TrieNode};

/// Result type for Morse trie operations
pub type MorseTrieResult<T> = Result<T, MorseTrieError>;

/// Configuration options for the Morse trie
#[derive(Debug, Clone)]
pub struct MorseTrieConfig {
    /// Maximum number of symbols in a code (bounds the depth of the trie)
    pub max_code_length: usize,
}

impl Default for MorseTrieConfig {
    fn default() -> Self {
        Self {
            max_code_length: 16,
        }
    }
}

/// Letter case used by the letters stored in a trie.
///
/// Lookups by letter are normalized to this case so that a lowercase mapping
/// still encodes uppercase input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterCase {
    /// No cased letter has been inserted yet
    #[default]
    Uncased,
    /// Every cased letter is lowercase
    Lower,
    /// Every cased letter is uppercase
    Upper,
    /// Both cases occur; no normalization is applied
    Mixed,
}

impl LetterCase {
    fn observe(self, letter: char) -> Self {
        let seen = if letter.is_lowercase() {
            LetterCase::Lower
        } else if letter.is_uppercase() {
            LetterCase::Upper
        } else {
            return self;
        };

        match self {
            LetterCase::Uncased => seen,
            current if current == seen => current,
            _ => LetterCase::Mixed,
        }
    }

    /// Maps `c` into this case when the mapping is single-valued.
    pub fn normalize(self, c: char) -> char {
        match self {
            LetterCase::Lower => single_char(c.to_lowercase()).unwrap_or(c),
            LetterCase::Upper => single_char(c.to_uppercase()).unwrap_or(c),
            LetterCase::Uncased | LetterCase::Mixed => c,
        }
    }
}

fn single_char(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Outcome of walking a code through the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLookup {
    /// The path ends on a node carrying a letter.
    Letter(char),
    /// The path exists but ends on an internal placeholder node.
    Interior,
    /// The path leaves the trie (or contains a non-Morse symbol).
    Unmapped,
}

impl CodeLookup {
    /// Whether the path exists in the trie, placeholder or not.
    pub fn is_found(&self) -> bool {
        !matches!(self, CodeLookup::Unmapped)
    }

    /// Returns the letter if the path ends on one.
    pub fn letter(&self) -> Option<char> {
        match self {
            CodeLookup::Letter(c) => Some(*c),
            _ => None,
        }
    }
}

/// A binary trie keyed by Morse symbols.
///
/// Key features:
/// * Exclusive parent to child ownership; dropping the trie frees every node
/// * Silent last-write-wins on re-used codes
/// * Case normalization derived from the inserted letters
#[derive(Debug, Default)]
pub struct MorseTrie {
    /// The root node of the trie, always a placeholder
    root: TrieNode,

    /// Configuration options
    config: MorseTrieConfig,

    /// Case of the letters inserted so far
    case: LetterCase,
}

impl MorseTrie {
    /// Creates a new empty `MorseTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(MorseTrieConfig::default())
    }

    /// Creates a new empty `MorseTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: MorseTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
            case: LetterCase::Uncased,
        }
    }

    /// Inserts `letter` at the path spelled by `code`.
    ///
    /// Missing nodes along the path are created as placeholders. If the path
    /// already carries a letter it is replaced without complaint.
    ///
    /// # Arguments
    ///
    /// * `letter` - The letter to store.
    /// * `code` - A non-empty string of `.` and `-`.
    ///
    /// # Returns
    ///
    /// * `Ok(Option<char>)` - The letter previously stored at that path, if any.
    /// * `Err(MorseTrieError)` - If the code is empty, too long, or not Morse.
    pub fn insert(&mut self, letter: char, code: &str) -> MorseTrieResult<Option<char>> {
        let symbols = self.parse_code(code)?;

        // Symbols are validated up front so a rejected code leaves no nodes behind
        let mut node = &mut self.root;
        for symbol in symbols {
            node = node.child_or_insert(symbol);
        }

        let previous = node.payload.replace(letter);
        match previous {
            Some(old) if old != letter => {
                tracing::debug!(code, old = %old, new = %letter, "Overwrote letter at existing code");
                // The replaced letter may have been the only one of its case
                self.case = self
                    .entries()
                    .into_iter()
                    .fold(LetterCase::Uncased, |case, (stored, _)| case.observe(stored));
            }
            _ => {
                tracing::trace!(code, letter = %letter, "Inserted letter");
                self.case = self.case.observe(letter);
            }
        }

        Ok(previous)
    }

    fn parse_code(&self, code: &str) -> MorseTrieResult<Vec<Symbol>> {
        if code.is_empty() {
            return Err(MorseTrieError::EmptyCode);
        }

        let symbols = code
            .chars()
            .enumerate()
            .map(|(position, c)| {
                Symbol::try_from(c).map_err(|_| MorseTrieError::InvalidSymbol {
                    symbol: c,
                    position,
                })
            })
            .collect::<MorseTrieResult<Vec<_>>>()?;

        if symbols.len() > self.config.max_code_length {
            return Err(MorseTrieError::CodeTooLong {
                code: code.to_string(),
                max_depth: self.config.max_code_length,
            });
        }

        Ok(symbols)
    }

    /// Finds the code for `letter`.
    ///
    /// The search is depth-first with the dot branch explored before the dash
    /// branch; if a letter appears at several paths the first one in that
    /// order wins. The letter is used as given; see [`MorseTrie::normalize`].
    ///
    /// # Returns
    ///
    /// The code as a string of `.` and `-`, or `None` if no node carries `letter`.
    pub fn code_for(&self, letter: char) -> Option<String> {
        let mut path = Vec::new();
        if Self::find_path(&self.root, letter, &mut path) {
            Some(path.into_iter().map(Symbol::as_char).collect())
        } else {
            None
        }
    }

    /// Helper for the depth-first letter search.
    fn find_path(node: &TrieNode, letter: char, path: &mut Vec<Symbol>) -> bool {
        if node.payload == Some(letter) {
            return true;
        }

        for symbol in [Symbol::Dot, Symbol::Dash] {
            if let Some(child) = node.child(symbol) {
                path.push(symbol);
                if Self::find_path(child, letter, path) {
                    return true;
                }
                path.pop();
            }
        }

        false
    }

    /// Walks `code` from the root and reports what it lands on.
    ///
    /// A path that exists but ends on a placeholder is reported as
    /// [`CodeLookup::Interior`] rather than as missing.
    pub fn letter_for(&self, code: &str) -> CodeLookup {
        let mut node = &self.root;
        for c in code.chars() {
            let next = Symbol::try_from(c).ok().and_then(|symbol| node.child(symbol));
            match next {
                Some(child) => node = child,
                None => return CodeLookup::Unmapped,
            }
        }

        match node.payload {
            Some(letter) => CodeLookup::Letter(letter),
            None => CodeLookup::Interior,
        }
    }

    /// Case of the letters stored in the trie.
    pub fn case(&self) -> LetterCase {
        self.case
    }

    /// Maps `c` into the case of the stored letters.
    pub fn normalize(&self, c: char) -> char {
        self.case.normalize(c)
    }

    /// Returns the number of letters stored in the trie.
    pub fn len(&self) -> usize {
        Self::count(&self.root, &|node| node.payload.is_some())
    }

    /// Checks if the trie holds no letters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes in the trie, root and placeholders included.
    pub fn node_count(&self) -> usize {
        Self::count(&self.root, &|_| true)
    }

    fn count(node: &TrieNode, include: &dyn Fn(&TrieNode) -> bool) -> usize {
        let own = usize::from(include(node));
        own + [Symbol::Dot, Symbol::Dash]
            .into_iter()
            .filter_map(|symbol| node.child(symbol))
            .map(|child| Self::count(child, include))
            .sum::<usize>()
    }

    /// Returns the length of the longest path from the root.
    pub fn depth(&self) -> usize {
        fn depth_of(node: &TrieNode) -> usize {
            [Symbol::Dot, Symbol::Dash]
                .into_iter()
                .filter_map(|symbol| node.child(symbol))
                .map(|child| 1 + depth_of(child))
                .max()
                .unwrap_or(0)
        }
        depth_of(&self.root)
    }

    /// Lists every stored `(letter, code)` pair in dot-first order.
    pub fn entries(&self) -> Vec<(char, String)> {
        let mut entries = Vec::new();
        let mut path = String::new();
        Self::collect_entries(&self.root, &mut path, &mut entries);
        entries
    }

    fn collect_entries(node: &TrieNode, path: &mut String, out: &mut Vec<(char, String)>) {
        if let Some(letter) = node.payload {
            out.push((letter, path.clone()));
        }

        for symbol in [Symbol::Dot, Symbol::Dash] {
            if let Some(child) = node.child(symbol) {
                path.push(symbol.as_char());
                Self::collect_entries(child, path, out);
                path.pop();
            }
        }
    }

}
