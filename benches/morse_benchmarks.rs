// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Morse Trie Benchmarks
//!
//! Benchmarks for trie construction and the two codec directions, using the
//! Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use morse_trie_lib::codec::{decode, encode};
use morse_trie_lib::data_structures::morse_trie::MorseTrieConfig;
use morse_trie_lib::mapping::{build_trie, parse_mapping, standard_trie, STANDARD_MAPPING};
use std::time::Duration;

const SAMPLE: &str = "the quick brown fox jumps over the lazy dog 0123456789 ";

/// Benchmark building the standard trie from its text form
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("morse_trie_build");
    group.measurement_time(Duration::from_secs(2));

    group.bench_function("standard_table", |b| {
        b.iter(|| {
            let entries = parse_mapping(black_box(STANDARD_MAPPING)).unwrap();
            build_trie(entries, MorseTrieConfig::default()).unwrap()
        });
    });

    group.finish();
}

/// Benchmark encode and decode over growing messages
fn bench_codec(c: &mut Criterion) {
    let trie = standard_trie();
    let mut group = c.benchmark_group("morse_codec");
    group.measurement_time(Duration::from_secs(2));

    for repeat in [1usize, 10, 100] {
        let message = SAMPLE.repeat(repeat);
        let stream = encode(&trie, &message).stream;
        group.throughput(Throughput::Bytes(message.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", repeat), &message, |b, message| {
            b.iter(|| encode(&trie, black_box(message)));
        });

        group.bench_with_input(BenchmarkId::new("decode", repeat), &stream, |b, stream| {
            b.iter(|| decode(&trie, black_box(stream)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_codec);
criterion_main!(benches);
