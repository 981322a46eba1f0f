// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::codec::CodecError;
use crate::data_structures::morse_trie::MorseTrieError;
use crate::error::mapping::MappingError;
use crate::error::{
    check_codec_failures, get_error_reporting, report_codec_failures, set_error_reporter,
    ErrorContext, ErrorReporter, MorseError, TracingErrorReporter,
};
use std::error::Error as _;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = CodecError::MissingMapping {
        character: '#',
        position: 4,
    };
    let context = ErrorContext::new(error, "encode").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("'#'"));
    assert!(display_string.contains("encode"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors keep their source chain.
#[test]
fn test_nested_errors() {
    let mapping_error = MappingError::InvalidCode {
        line: 3,
        source: MorseTrieError::EmptyCode,
    };
    assert!(mapping_error.source().is_some());

    let morse_error = MorseError::from(mapping_error);
    let error_string = format!("{morse_error}");
    assert!(error_string.contains("line 3"));
    assert!(error_string.contains("Empty code"));

    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let morse_error = MorseError::from(MappingError::from(io_error));
    assert!(format!("{morse_error}").contains("file not found"));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives codec failures.
///
/// Note: This test modifies global state.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    get_error_reporting().report(ErrorContext::new(
        MorseError::Custom("test error".to_string()),
        "test_component",
    ));

    let failures = vec![
        CodecError::UnknownCode {
            token: "......".to_string(),
            position: 0,
        },
        CodecError::IncompleteCode {
            token: "..".to_string(),
            position: 2,
        },
    ];
    report_codec_failures(&failures, "decode");
    assert_eq!(reporter.reported_count(), 3);

    // Lenient mode reports every failure and lets the run continue
    assert!(check_codec_failures(&failures, "decode", false).is_ok());
    assert_eq!(reporter.reported_count(), 5);

    // Strict mode reports too, then fails with the first failure
    match check_codec_failures(&failures, "decode", true) {
        Err(MorseError::Codec(first)) => assert_eq!(first, failures[0]),
        other => panic!("expected codec error, got {other:?}"),
    }
    assert_eq!(reporter.reported_count(), 7);

    // Nothing skipped is fine either way
    assert!(check_codec_failures(&[], "encode", true).is_ok());
    assert_eq!(reporter.reported_count(), 7);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(MorseError::Custom("test error".to_string()), "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
