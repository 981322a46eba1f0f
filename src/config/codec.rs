// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Codec configuration module.

use super::{ConfigResult, Validate};
use crate::codec::CodecOptions;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Codec configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodecConfig {
    /// Separator placed after every code (a single character)
    pub separator: String,

    /// Whether any skipped character or token fails the command
    pub strict: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            strict: false,
        }
    }
}

impl CodecConfig {
    /// Converts this configuration into codec options.
    pub fn options(&self) -> ConfigResult<CodecOptions> {
        let mut chars = self.separator.chars();
        let separator = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "codec.separator must be exactly one character, got {:?}",
                    self.separator
                )))
            }
        };

        let options = CodecOptions::new().separator(separator);
        options
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        Ok(options)
    }
}

impl Validate for CodecConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.options().map(|_| ())
    }
}
