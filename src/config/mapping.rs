// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Mapping configuration module.
//!
//! Where the letter to code table comes from and how deep the trie may grow.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Longest code any configuration may allow.
const MAX_CODE_LENGTH_LIMIT: usize = 64;

/// Mapping configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MappingConfig {
    /// Mapping file to load (None for the built-in International table)
    pub path: Option<PathBuf>,

    /// Maximum number of symbols in a code
    pub max_code_length: usize,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_code_length: 16,
        }
    }
}

impl Validate for MappingConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_code_length == 0 || self.max_code_length > MAX_CODE_LENGTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "mapping.max_code_length".to_string(),
                message: format!("must be between 1 and {MAX_CODE_LENGTH_LIMIT}"),
            });
        }

        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "mapping.path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
