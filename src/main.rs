// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Morse trie codec - console entrypoint.
//!
//! Loads configuration, builds the trie from the configured mapping, and runs
//! one encode/decode command. Codec output goes to stdout; logs and reported
//! failures go to stderr.

use clap::{Parser, Subcommand};
use morse_trie_lib::codec::MorseCodec;
use morse_trie_lib::config::{self, ConfigLoader, LogConfig, MorseConfig};
use morse_trie_lib::error::{
    check_codec_failures, set_error_reporter, MorseError, MorseResult, TracingErrorReporter,
};
use morse_trie_lib::mapping;
use serde::Serialize;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Message used when the console gives no input.
const DEFAULT_MESSAGE: &str = "HELLO WORLD";

/// Command line arguments for the Morse trie codec.
#[derive(Parser, Debug)]
#[clap(name = "morse_trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Mapping file to load instead of the configured one
    #[clap(short, long, value_parser)]
    mapping: Option<PathBuf>,

    /// Fail when any character or token is skipped
    #[clap(long)]
    strict: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Encode text and decode it back, printing both
    RoundTrip {
        /// Text to encode (prompted for when omitted)
        text: Option<String>,
    },

    /// Encode text into a Morse stream
    Encode {
        /// Text to encode (read from stdin when omitted)
        text: Option<String>,
    },

    /// Decode a Morse stream into text
    Decode {
        /// Stream to decode (read from stdin when omitted)
        stream: Option<String>,
    },

    /// Print the loaded mapping in dot-first order
    Table {
        /// Print as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration and mapping
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// One row of the `table` output.
#[derive(Debug, Serialize)]
struct TableRow {
    letter: char,
    code: String,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> MorseResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| MorseError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Reads one line from stdin, prompting when attached to a terminal.
fn read_line(prompt: &str) -> MorseResult<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        print!("{prompt}");
        io::stdout().flush()?;
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Main entry point for the application.
fn main() -> MorseResult<()> {
    let args = <Args as clap::Parser>::parse();

    if let Some(Command::GenConfig { output }) = &args.command {
        let toml = config::to_toml(&MorseConfig::default())?;
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output, toml)?;
        println!("Default configuration written to {}", output.display());
        return Ok(());
    }

    // Load configuration, then apply command-line overrides
    let mut config = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX).load()?;
    if let Some(path) = args.mapping {
        config.mapping.path = Some(path);
    }
    config.codec.strict |= args.strict;

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let trie = mapping::load_trie(&config.mapping)?;
    let codec = MorseCodec::with_options(&trie, config.codec.options()?)?;
    let strict = config.codec.strict;
    info!(letters = trie.len(), case = ?trie.case(), "Trie built");

    match args.command.unwrap_or(Command::RoundTrip { text: None }) {
        Command::RoundTrip { text } => {
            let text = match text {
                Some(text) => text,
                None => read_line("Enter a message: ")?,
            };
            let text = if text.is_empty() {
                DEFAULT_MESSAGE.to_string()
            } else {
                text
            };

            let encoded = codec.encode(&text);
            check_codec_failures(encoded.failures(), "encode", strict)?;
            println!("Encoded message: {}", encoded.stream);

            let decoded = codec.decode(&encoded.stream);
            check_codec_failures(decoded.failures(), "decode", strict)?;
            println!("Decoded message: {}", decoded.text);
        }
        Command::Encode { text } => {
            let text = match text {
                Some(text) => text,
                None => read_line("Text: ")?,
            };
            let encoded = codec.encode(&text);
            check_codec_failures(encoded.failures(), "encode", strict)?;
            println!("{}", encoded.stream);
        }
        Command::Decode { stream } => {
            let stream = match stream {
                Some(stream) => stream,
                None => read_line("Morse: ")?,
            };
            let decoded = codec.decode(&stream);
            check_codec_failures(decoded.failures(), "decode", strict)?;
            println!("{}", decoded.text);
        }
        Command::Table { json } => {
            let rows: Vec<TableRow> = trie
                .entries()
                .into_iter()
                .map(|(letter, code)| TableRow { letter, code })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!("{} {}", row.letter, row.code);
                }
            }
        }
        Command::Validate => {
            println!(
                "Configuration is valid; {} letters loaded ({} nodes, depth {})",
                trie.len(),
                trie.node_count(),
                trie.depth()
            );
        }
        Command::GenConfig { .. } => {}
    }

    Ok(())
}
