// Copyright (c) 2025 Morse Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Codec behavior over the standard International table.

use crate::codec::{decode, encode, CodecError};
use crate::data_structures::morse_trie::{CodeLookup, LetterCase, MorseTrie, MorseTrieConfig};
use crate::mapping::{build_trie, parse_mapping, standard_trie};
use test_case::test_case;

const HELLO_WORLD: &str = ".... . .-.. .-.. ---  .-- --- .-. .-.. -.. ";

#[test_case("HELLO WORLD" ; "upper case")]
#[test_case("hello world" ; "lower case")]
#[test_case("HeLLo WoRlD" ; "mixed case")]
fn test_encode_is_case_independent(message: &str) {
    let trie = standard_trie();
    let encoded = encode(&trie, message);
    assert_eq!(encoded.stream, HELLO_WORLD);
    assert!(encoded.is_clean());
}

#[test]
fn test_decode_double_separator_inserts_one_space() {
    let trie = standard_trie();
    let decoded = decode(&trie, ".... . .-.. .-.. ---  .-- --- .-. .-.. -..");
    assert_eq!(decoded.text, "hello world");
    assert!(decoded.is_clean());
}

#[test]
fn test_unmapped_character_does_not_abort() {
    let trie = standard_trie();
    let encoded = encode(&trie, "A#B");

    assert_eq!(encoded.stream, ".- -... ");
    assert_eq!(
        encoded.failures(),
        &[CodecError::MissingMapping {
            character: '#',
            position: 1
        }]
    );
}

#[test]
fn test_unknown_token_does_not_corrupt_later_tokens() {
    let trie = standard_trie();
    let decoded = decode(&trie, "... ...... ---  ...");

    assert_eq!(decoded.text, "so s");
    assert_eq!(
        decoded.failures(),
        &[CodecError::UnknownCode {
            token: "......".to_string(),
            position: 1
        }]
    );
}

#[test]
fn test_every_letter_round_trips() {
    let trie = standard_trie();
    for (letter, code) in trie.entries() {
        assert_eq!(trie.code_for(letter).as_deref(), Some(code.as_str()));
        assert_eq!(trie.letter_for(&code), CodeLookup::Letter(letter));

        let upper: String = letter.to_uppercase().collect();
        let encoded = encode(&trie, &upper);
        assert_eq!(decode(&trie, &encoded.stream).text, letter.to_string());
    }
}

#[test]
fn test_conflicting_codes_last_write_wins() {
    let mut trie = MorseTrie::new();
    trie.insert('x', ".-").unwrap();
    trie.insert('y', ".-").unwrap();

    assert_eq!(trie.code_for('y').as_deref(), Some(".-"));
    assert_eq!(trie.code_for('x'), None);

    let encoded = encode(&trie, "xy");
    assert_eq!(encoded.stream, ".- ");
    assert_eq!(encoded.failures().len(), 1);
}

#[test_case("A B", ".-  -... " ; "one space")]
#[test_case("A  B", ".-   -... " ; "two spaces")]
#[test_case(" A", " .- " ; "leading space")]
#[test_case("A ", ".-  " ; "trailing space")]
fn test_spaces_survive_round_trip(message: &str, stream: &str) {
    let trie = standard_trie();
    let encoded = encode(&trie, message);
    assert_eq!(encoded.stream, stream);
    assert_eq!(decode(&trie, stream).text, message.to_lowercase());
}

#[test]
fn test_upper_case_mapping_normalizes_input() {
    let mut trie = MorseTrie::new();
    trie.insert('S', "...").unwrap();
    trie.insert('O', "---").unwrap();

    assert_eq!(encode(&trie, "sos").stream, "... --- ... ");
    assert_eq!(decode(&trie, "... --- ...").text, "SOS");
}

#[test]
fn test_overwritten_letter_does_not_set_case() {
    let entries = parse_mapping("A .-\na .-\nb -...\n").unwrap();
    let trie = build_trie(entries, MorseTrieConfig::default()).unwrap();

    assert_eq!(trie.entries(), vec![('a', ".-".to_string()), ('b', "-...".to_string())]);
    assert_eq!(trie.case(), LetterCase::Lower);

    let encoded = encode(&trie, "AB");
    assert_eq!(encoded.stream, ".- -... ");
    assert!(encoded.is_clean());
}
