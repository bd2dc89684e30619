//! Tile symbols and sequences
//!
//! This module defines the letter/word-break vocabulary that a word or
//! phrase is converted into before any asset loading or layout happens.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Marker used on the JS side for a word break in a serialized sequence
pub const WORD_BREAK_MARKER: &str = "_SPACE_";

/// A single uppercase tile letter (A-Z)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Create a letter from any ASCII letter, uppercasing it
    ///
    /// Returns `None` for anything outside `[A-Za-z]`.
    pub fn new(ch: char) -> Option<Letter> {
        if ch.is_ascii_alphabetic() {
            Some(Letter(ch.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// The uppercase character for this letter
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Letter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Letter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Letter::new(ch)
                .ok_or_else(|| serde::de::Error::custom(format!("not a tile letter: '{}'", s))),
            _ => Err(serde::de::Error::custom(format!(
                "expected a single letter, got '{}'",
                s
            ))),
        }
    }
}

/// One entry of a tile sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileSymbol {
    Letter(Letter),
    WordBreak,
}

impl TileSymbol {
    pub fn letter(&self) -> Option<Letter> {
        match self {
            TileSymbol::Letter(letter) => Some(*letter),
            TileSymbol::WordBreak => None,
        }
    }

    pub fn is_word_break(&self) -> bool {
        matches!(self, TileSymbol::WordBreak)
    }
}

// Symbols travel to JS as plain strings: "C" or "_SPACE_"
impl Serialize for TileSymbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TileSymbol::Letter(letter) => letter.serialize(serializer),
            TileSymbol::WordBreak => serializer.serialize_str(WORD_BREAK_MARKER),
        }
    }
}

/// Ordered, immutable sequence of tile symbols
///
/// Only [`crate::parse::build_sequence`] constructs one, so a `TileSequence`
/// always holds at least one letter and never two adjacent word breaks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TileSequence {
    symbols: Vec<TileSymbol>,
}

impl TileSequence {
    pub(crate) fn from_symbols(symbols: Vec<TileSymbol>) -> TileSequence {
        debug_assert!(symbols.iter().any(|s| !s.is_word_break()));
        TileSequence { symbols }
    }

    pub fn symbols(&self) -> &[TileSymbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a built sequence; kept for slice-like ergonomics
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Letters in order, with their symbol index
    pub fn letters(&self) -> impl Iterator<Item = (usize, Letter)> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .filter_map(|(index, symbol)| symbol.letter().map(|letter| (index, letter)))
    }

    pub fn letter_count(&self) -> usize {
        self.letters().count()
    }

    /// Contiguous runs of letters between word breaks
    ///
    /// Each entry pairs a letter with its index in the full sequence.
    /// Empty runs (from a trailing break) are skipped.
    pub fn words(&self) -> Vec<Vec<(usize, Letter)>> {
        let mut words = Vec::new();
        let mut current = Vec::new();

        for (index, symbol) in self.symbols.iter().enumerate() {
            match symbol {
                TileSymbol::Letter(letter) => current.push((index, *letter)),
                TileSymbol::WordBreak => {
                    if !current.is_empty() {
                        words.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            words.push(current);
        }

        words
    }

    /// Each distinct letter once, in order of first appearance
    pub fn distinct_letters(&self) -> Vec<Letter> {
        let mut seen = Vec::new();
        for (_, letter) in self.letters() {
            if !seen.contains(&letter) {
                seen.push(letter);
            }
        }
        seen
    }
}

impl fmt::Display for TileSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            match symbol {
                TileSymbol::Letter(letter) => write!(f, "{}", letter)?,
                TileSymbol::WordBreak => write!(f, " ")?,
            }
        }
        Ok(())
    }
}
