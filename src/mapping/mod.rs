// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Mapping sources for building a Morse trie.
//!
//! A mapping is a list of lines of the form `<letter><sep><code>`: the first
//! character is the letter, the second is a single separator of any kind, and
//! the rest of the line is the code. Empty lines are skipped.
//!
//! ```text
//! a .-
//! b -...
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::mapping::MappingConfig;
use crate::data_structures::morse_trie::{MorseTrie, MorseTrieConfig};
pub use crate::error::mapping::MappingError;

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// The International Morse table for lowercase letters and digits.
pub const STANDARD_MAPPING: &str = include_str!("../../data/morse_code.txt");

/// Character offset at which the code starts on a mapping line.
const CODE_OFFSET: usize = 2;

/// One parsed line of a mapping source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// The letter being defined
    pub letter: char,
    /// Its code, as written in the source
    pub code: String,
    /// One-based line number in the source
    pub line: usize,
}

/// Parses a single mapping line.
///
/// # Returns
///
/// * `Ok(None)` - For an empty line.
/// * `Ok(Some(entry))` - For a well-formed line.
/// * `Err(MappingError::MalformedLine)` - If the line has no room for a code.
pub fn parse_line(line_no: usize, line: &str) -> MappingResult<Option<MappingEntry>> {
    if line.is_empty() {
        return Ok(None);
    }

    let mut chars = line.chars();
    let letter = chars.next();
    let code: String = chars.skip(CODE_OFFSET - 1).collect();

    match letter {
        Some(letter) if !code.is_empty() => Ok(Some(MappingEntry {
            letter,
            code,
            line: line_no,
        })),
        _ => Err(MappingError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        }),
    }
}

/// Reads every entry from a buffered mapping source.
pub fn read_mapping<R: BufRead>(reader: R) -> MappingResult<Vec<MappingEntry>> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(entry) = parse_line(index + 1, &line)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Parses an in-memory mapping source.
pub fn parse_mapping(source: &str) -> MappingResult<Vec<MappingEntry>> {
    read_mapping(source.as_bytes())
}

/// Builds a trie by inserting `entries` in order.
///
/// Entries that share a code overwrite each other; the last one wins.
pub fn build_trie<I>(entries: I, config: MorseTrieConfig) -> MappingResult<MorseTrie>
where
    I: IntoIterator<Item = MappingEntry>,
{
    let mut trie = MorseTrie::with_config(config);
    for entry in entries {
        tracing::debug!(letter = %entry.letter, code = %entry.code, line = entry.line, "Inserting mapping entry");
        trie.insert(entry.letter, &entry.code)
            .map_err(|source| MappingError::InvalidCode {
                line: entry.line,
                source,
            })?;
    }
    Ok(trie)
}

/// Loads a mapping file and builds a trie from it.
///
/// # Arguments
///
/// * `path` - Path to the mapping file.
/// * `config` - Configuration for the trie being built.
///
/// # Returns
///
/// * `Ok(MorseTrie)` - The built trie.
/// * `Err(MappingError)` - If the file is missing, unreadable, or malformed.
pub fn load_mapping_file<P: AsRef<Path>>(path: P, config: MorseTrieConfig) -> MappingResult<MorseTrie> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MappingError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let entries = read_mapping(BufReader::new(file))?;
    let trie = build_trie(entries, config)?;

    tracing::info!(path = %path.display(), letters = trie.len(), "Loaded Morse mapping");
    Ok(trie)
}

/// Returns a trie holding the International Morse table.
///
/// # Panics
///
/// Never in practice: the table is embedded at compile time and is checked by
/// this module's tests.
pub fn standard_trie() -> MorseTrie {
    parse_mapping(STANDARD_MAPPING)
        .and_then(|entries| build_trie(entries, MorseTrieConfig::default()))
        .expect("embedded standard mapping is well-formed")
}

/// Builds the trie described by a mapping configuration.
///
/// Uses the configured file when one is set, otherwise the standard table.
pub fn load_trie(config: &MappingConfig) -> MappingResult<MorseTrie> {
    let trie_config = MorseTrieConfig {
        max_code_length: config.max_code_length,
    };

    match &config.path {
        Some(path) => load_mapping_file(path, trie_config),
        None => {
            let entries = parse_mapping(STANDARD_MAPPING)?;
            build_trie(entries, trie_config)
        }
    }
}
