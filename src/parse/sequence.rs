//! Text to tile sequence conversion
//!
//! Accepts only ASCII letters and the space character. Letters are
//! uppercased; runs of spaces collapse into a single word break.

use thiserror::Error;

use crate::models::{Letter, TileSequence, TileSymbol};

/// Reasons a piece of text cannot be shown as tiles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    /// A character outside `[A-Za-z ]` was found
    #[error("invalid character '{ch}' at position {index}")]
    InvalidCharacter { ch: char, index: usize },

    /// Nothing but spaces (or nothing at all)
    #[error("no letters to render")]
    EmptyInput,
}

impl TileError {
    /// Message shown under the input box when `word` cannot be rendered
    pub fn user_message(&self, word: &str) -> String {
        format!(
            "\"{}\" contains invalid characters. Only letters A-Z and spaces are allowed.",
            word
        )
    }
}

/// Convert `text` into a tile sequence
///
/// Validation is all-or-nothing: the first disallowed character rejects the
/// whole input. A trailing space leaves a trailing word break in the result.
pub fn build_sequence(text: &str) -> Result<TileSequence, TileError> {
    let mut symbols: Vec<TileSymbol> = Vec::with_capacity(text.len());
    let mut has_letter = false;

    for (index, ch) in text.chars().enumerate() {
        if ch == ' ' {
            // No leading break, no doubled breaks
            if matches!(symbols.last(), Some(TileSymbol::Letter(_))) {
                symbols.push(TileSymbol::WordBreak);
            }
            continue;
        }

        let letter = Letter::new(ch).ok_or(TileError::InvalidCharacter { ch, index })?;
        symbols.push(TileSymbol::Letter(letter));
        has_letter = true;
    }

    if !has_letter {
        return Err(TileError::EmptyInput);
    }

    log::debug!("built tile sequence '{}' ({} symbols)", text, symbols.len());
    Ok(TileSequence::from_symbols(symbols))
}

/// Trim surrounding whitespace the way the input box does before processing
pub fn normalize_input(text: &str) -> &str {
    text.trim()
}
