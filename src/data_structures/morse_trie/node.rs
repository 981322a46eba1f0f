// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node and symbol types for the Morse trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node owns at most
//! one dot child and one dash child, and may carry a letter.

use std::fmt;

use super::error::MorseTrieError;

/// One edge label of the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A short mark, written `.`
    Dot,
    /// A long mark, written `-`
    Dash,
}

impl Symbol {
    /// Returns the character used to write this symbol.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = MorseTrieError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(Symbol::Dot),
            '-' => Ok(Symbol::Dash),
            other => Err(MorseTrieError::InvalidSymbol {
                symbol: other,
                position: 0,
            }),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A node in the Morse trie.
///
/// A node with no payload is an internal placeholder: it exists only because a
/// longer code passes through it.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Letter stored at this path, if any
    pub payload: Option<char>,

    /// Child reached by a dot
    pub dot_child: Option<Box<TrieNode>>,

    /// Child reached by a dash
    pub dash_child: Option<Box<TrieNode>>,
}

impl TrieNode {
    /// Creates a new placeholder node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child for `symbol`, if it has been created.
    pub fn child(&self, symbol: Symbol) -> Option<&TrieNode> {
        match symbol {
            Symbol::Dot => self.dot_child.as_deref(),
            Symbol::Dash => self.dash_child.as_deref(),
        }
    }

    /// Returns the child for `symbol`, creating a placeholder if absent.
    pub fn child_or_insert(&mut self, symbol: Symbol) -> &mut TrieNode {
        let slot = match symbol {
            Symbol::Dot => &mut self.dot_child,
            Symbol::Dash => &mut self.dash_child,
        };
        slot.get_or_insert_with(Box::default)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.dot_child.is_none() && self.dash_child.is_none()
    }
}

impl fmt::Display for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload {
            Some(letter) => write!(f, "{letter}"),
            None => write!(f, "*"),
        }
    }
}
