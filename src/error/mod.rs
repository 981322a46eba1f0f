// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for the Morse trie codec.
//!
//! Every component owns a `thiserror` enum; [`MorseError`] wraps them so the
//! binary can propagate anything with `?`. Non-fatal codec failures travel
//! through an [`ErrorReporter`] instead.

use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::codec::CodecError;
use crate::data_structures::morse_trie::MorseTrieError;

pub mod config;
pub mod mapping;

/// Result type alias used throughout the crate.
pub type MorseResult<T> = Result<T, MorseError>;

/// Core error enum for the Morse trie codec.
#[derive(Error, Debug)]
pub enum MorseError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors occurring while reading a mapping source.
    #[error("Mapping error: {0}")]
    Mapping(#[from] mapping::MappingError),

    /// Errors raised by the trie itself.
    #[error("Trie error: {0}")]
    Trie(#[from] MorseTrieError),

    /// Skipped characters or tokens, when the caller treats them as fatal.
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// IO errors that may occur during console or file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: MorseError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<E: Into<MorseError>, S: Into<String>>(error: E, component: S) -> Self {
        Self {
            error: error.into(),
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    fn report(&self, context: ErrorContext);
}

/// Reporter that logs each error as a `tracing` warning.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::warn!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Global error reporter accessor.
#[derive(Debug, Default, Clone)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Set the reporter used by this instance.
    pub fn set_reporter(&mut self, reporter: Arc<dyn ErrorReporter>) {
        self.reporter = Some(reporter);
    }

    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    pub fn report(&self, context: ErrorContext) {
        if let Some(reporter) = &self.reporter {
            reporter.report(context);
        } else {
            // No reporter configured
            eprintln!("Error: {context}");
        }
    }
}

/// Process-wide error reporting slot.
static ERROR_REPORTING: Lazy<RwLock<ErrorReporting>> = Lazy::new(Default::default);

/// Get a handle to the global error reporting instance.
pub fn get_error_reporting() -> ErrorReporting {
    ERROR_REPORTING
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .set_reporter(reporter);
}

/// Report every failure from an encode or decode pass through the global reporter.
///
/// # Arguments
///
/// * `failures` - The skipped characters or tokens
/// * `component` - Name of the pass, used as the report's component
pub fn report_codec_failures(failures: &[CodecError], component: &str) {
    let reporting = get_error_reporting();
    for failure in failures {
        reporting.report(ErrorContext::new(failure.clone(), component));
    }
}

/// Reports codec failures and decides whether they fail the operation.
///
/// Every failure goes to the global reporter. In strict mode the first one is
/// returned as an error; otherwise the run continues.
///
/// # Arguments
///
/// * `failures` - The skipped characters or tokens
/// * `component` - Name of the pass, used as the report's component
/// * `strict` - Whether any failure is fatal
pub fn check_codec_failures(failures: &[CodecError], component: &str, strict: bool) -> MorseResult<()> {
    report_codec_failures(failures, component);
    match failures.first() {
        Some(first) if strict => Err(MorseError::Codec(first.clone())),
        _ => Ok(()),
    }
}
