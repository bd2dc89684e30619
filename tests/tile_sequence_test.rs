// Tile sequence building: validation, case folding and word breaks

use tiles_wasm::models::{Letter, TileSymbol};
use tiles_wasm::parse::{build_sequence, TileError};

fn symbols(text: &str) -> Vec<TileSymbol> {
    build_sequence(text)
        .expect("sequence should build")
        .symbols()
        .to_vec()
}

fn letters(word: &str) -> Vec<TileSymbol> {
    word.chars()
        .map(|c| TileSymbol::Letter(Letter::new(c).unwrap()))
        .collect()
}

#[test]
fn test_empty_input_is_rejected() {
    assert_eq!(build_sequence(""), Err(TileError::EmptyInput));
}

#[test]
fn test_digit_is_rejected() {
    assert!(matches!(
        build_sequence("a1"),
        Err(TileError::InvalidCharacter { ch: '1', .. })
    ));
}

#[test]
fn test_punctuation_and_non_ascii_rejected() {
    for text in ["hello!", "café", "a-b", "new\nline"] {
        assert!(
            matches!(build_sequence(text), Err(TileError::InvalidCharacter { .. })),
            "{:?} should be rejected",
            text
        );
    }
}

#[test]
fn test_single_word() {
    assert_eq!(symbols("cat"), letters("CAT"));
}

#[test]
fn test_two_words() {
    let mut expected = letters("CAT");
    expected.push(TileSymbol::WordBreak);
    expected.extend(letters("DOG"));

    assert_eq!(symbols("cat dog"), expected);
    // Runs of spaces collapse to a single break
    assert_eq!(symbols("cat   dog"), expected);
}

#[test]
fn test_trailing_space_keeps_break() {
    let mut expected = letters("CAT");
    expected.push(TileSymbol::WordBreak);
    expected.extend(letters("DOG"));
    expected.push(TileSymbol::WordBreak);

    assert_eq!(symbols("cat dog "), expected);
}

#[test]
fn test_uppercasing_is_stable() {
    assert_eq!(build_sequence("CAT"), build_sequence("cat"));
}

#[test]
fn test_no_adjacent_breaks() {
    for text in ["a  b   c", "  lead", "x    ", "one two  three   four"] {
        let sequence = build_sequence(text).unwrap();
        let adjacent = sequence
            .symbols()
            .windows(2)
            .any(|pair| pair[0].is_word_break() && pair[1].is_word_break());
        assert!(!adjacent, "{:?} produced adjacent word breaks", text);
        assert!(!sequence.symbols()[0].is_word_break());
    }
}

#[test]
fn test_display_round_trip_of_words() {
    let sequence = build_sequence("hello   big world").unwrap();
    assert_eq!(sequence.to_string(), "HELLO BIG WORLD");
    assert_eq!(sequence.words().len(), 3);
    assert_eq!(sequence.letter_count(), 13);
}
