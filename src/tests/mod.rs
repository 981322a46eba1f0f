// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for the Morse trie codec.
//!
//! This module contains the crate-internal test suites:
//! - Codec behavior over the standard table
//! - Property-based round-trip tests using proptest
//! - Configuration loading and validation
//! - Error types and reporting

pub mod codec_tests;
pub mod error_tests;
pub mod test_utils;

pub use test_utils::{message_strategy, TestFixture};
