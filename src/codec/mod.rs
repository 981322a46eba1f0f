// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Text to Morse stream codec.
//!
//! The stream format is flat: each letter's code is followed by one separator,
//! and a word boundary adds one more separator, so two separators in a row
//! mark a space between words.
//!
//! ```text
//! "hi yo"  <->  ".... ..  -.-- --- "
//! ```
//!
//! Unencodable characters and undecodable tokens are skipped and returned as
//! [`CodecError`] values; the caller decides what to do with them.
//!
//! # Example
//!
//! ```
//! use morse_trie_lib::codec::{decode, encode};
//! use morse_trie_lib::mapping::standard_trie;
//!
//! let trie = standard_trie();
//! let encoded = encode(&trie, "SOS");
//! assert_eq!(encoded.stream, "... --- ... ");
//!
//! let decoded = decode(&trie, &encoded.stream);
//! assert_eq!(decoded.text, "sos");
//! assert!(decoded.is_clean());
//! ```

mod error;

pub use error::{CodecError, CodecResult};

use crate::data_structures::morse_trie::{CodeLookup, MorseTrie};

/// Character that marks a word boundary in plain text.
const WORD_BREAK: char = ' ';

/// Options controlling the stream format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Character placed after every code
    pub separator: char,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self { separator: ' ' }
    }
}

impl CodecOptions {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator placed after every code.
    ///
    /// # Arguments
    ///
    /// * `value` - Any character other than `.`, `-`, `\n` or `\r`.
    ///
    /// # Returns
    ///
    /// Updated options object with the specified setting.
    pub fn separator(mut self, value: char) -> Self {
        self.separator = value;
        self
    }

    /// Checks that the separator cannot be confused with a code symbol.
    pub fn validate(&self) -> CodecResult<()> {
        match self.separator {
            '.' | '-' | '\n' | '\r' => Err(CodecError::InvalidSeparator(self.separator)),
            _ => Ok(()),
        }
    }
}

/// Output of an encode pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoded {
    /// The Morse stream
    pub stream: String,
    /// Characters that were skipped
    pub failures: Vec<CodecError>,
}

/// Output of a decode pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered text
    pub text: String,
    /// Tokens that were skipped
    pub failures: Vec<CodecError>,
}

macro_rules! impl_outcome {
    ($ty:ty) => {
        impl $ty {
            /// Whether every input unit was translated.
            pub fn is_clean(&self) -> bool {
                self.failures.is_empty()
            }

            /// The skipped input units, in input order.
            pub fn failures(&self) -> &[CodecError] {
                &self.failures
            }
        }
    };
}

impl_outcome!(Encoded);
impl_outcome!(Decoded);

/// A trie bound to a set of stream options.
#[derive(Debug, Clone)]
pub struct MorseCodec<'a> {
    trie: &'a MorseTrie,
    options: CodecOptions,
}

impl<'a> MorseCodec<'a> {
    /// Creates a codec over `trie` with the default stream format.
    pub fn new(trie: &'a MorseTrie) -> Self {
        Self {
            trie,
            options: CodecOptions::default(),
        }
    }

    /// Creates a codec over `trie` with custom options.
    ///
    /// # Returns
    ///
    /// * `Ok(MorseCodec)` - The codec.
    /// * `Err(CodecError::InvalidSeparator)` - If the separator is a code symbol.
    pub fn with_options(trie: &'a MorseTrie, options: CodecOptions) -> CodecResult<Self> {
        options.validate()?;
        Ok(Self { trie, options })
    }

    /// Encodes plain text into a Morse stream.
    ///
    /// Each character is normalized to the case of the trie's letters before
    /// lookup. A space emits one extra separator straight away, which together
    /// with the separator after the previous code forms the word boundary.
    pub fn encode(&self, message: &str) -> Encoded {
        let sep = self.options.separator;
        let mut encoded = Encoded::default();

        for (position, c) in message.chars().enumerate() {
            if c == WORD_BREAK {
                encoded.stream.push(sep);
                continue;
            }

            let normalized = self.trie.normalize(c);
            match self.trie.code_for(normalized) {
                Some(code) => {
                    tracing::trace!(character = %c, code = %code, "Encoded character");
                    encoded.stream.push_str(&code);
                    encoded.stream.push(sep);
                }
                None => {
                    tracing::debug!(character = %c, position, "No Morse code for character");
                    encoded.failures.push(CodecError::MissingMapping {
                        character: c,
                        position,
                    });
                }
            }
        }

        encoded
    }

    /// Decodes a Morse stream into plain text.
    ///
    /// The stream is split on the separator. Each empty token, produced by a
    /// separator following another separator, becomes one space. The empty
    /// token after the final trailing separator is dropped.
    pub fn decode(&self, stream: &str) -> Decoded {
        let mut decoded = Decoded::default();
        if stream.is_empty() {
            return decoded;
        }

        let mut tokens: Vec<&str> = stream.split(self.options.separator).collect();
        if stream.ends_with(self.options.separator) {
            tokens.pop();
        }

        // Counts code tokens only; word boundaries do not advance it
        let mut next_position = 0;
        for token in tokens {
            if token.is_empty() {
                decoded.text.push(WORD_BREAK);
                continue;
            }
            let position = next_position;
            next_position += 1;

            match self.trie.letter_for(token) {
                CodeLookup::Letter(letter) => {
                    tracing::trace!(token, letter = %letter, "Decoded token");
                    decoded.text.push(letter);
                }
                CodeLookup::Interior => {
                    tracing::debug!(token, position, "Token ends on an internal node");
                    decoded.failures.push(CodecError::IncompleteCode {
                        token: token.to_string(),
                        position,
                    });
                }
                CodeLookup::Unmapped => {
                    tracing::debug!(token, position, "Unknown Morse token");
                    decoded.failures.push(CodecError::UnknownCode {
                        token: token.to_string(),
                        position,
                    });
                }
            }
        }

        decoded
    }
}

/// Encodes `message` with the default stream format.
pub fn encode(trie: &MorseTrie, message: &str) -> Encoded {
    MorseCodec::new(trie).encode(message)
}

/// Decodes `stream` with the default stream format.
pub fn decode(trie: &MorseTrie, stream: &str) -> Decoded {
    MorseCodec::new(trie).decode(stream)
}
