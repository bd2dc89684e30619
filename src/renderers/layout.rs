//! Tile layout calculation
//!
//! Computes the canvas size and absolute tile positions used both for the
//! combined SVG export and by any renderer that needs pixel coordinates.
//!
//! Horizontal bookkeeping, per word of `n` letters:
//! - word width = sum of letter widths + `TILE_GAP * (n - 1)`
//! - the placement cursor advances `width + TILE_GAP` for every letter,
//!   including the last, then `WORD_GAP` more before the next word
//!
//! The canvas width adds `PADDING` on both sides plus `WORD_GAP` and
//! `WORD_GAP_EXTRA` per gap between words. `WORD_GAP_EXTRA` accounts for the
//! trailing `TILE_GAP` the cursor carries into the next word, which keeps
//! the right padding equal to the left one.

use crate::models::{Letter, LayoutResult, Placement, TileDimensions, TileSequence};

/// Space between tiles within a word
pub const TILE_GAP: f64 = 10.0;

/// Extra space between words
pub const WORD_GAP: f64 = 20.0;

/// Additional width per word gap for the cursor's trailing tile gap
pub const WORD_GAP_EXTRA: f64 = 10.0;

/// Canvas padding on each side
pub const PADDING: f64 = 10.0;

/// Lay out `sequence` using `dimensions_of` for each letter's size
///
/// Returns one placement per letter, in sequence order; word breaks get no
/// placement. Every tile is vertically centered on the canvas.
pub fn compute_layout<F>(sequence: &TileSequence, mut dimensions_of: F) -> LayoutResult
where
    F: FnMut(Letter) -> TileDimensions,
{
    let words: Vec<Vec<(usize, TileDimensions)>> = sequence
        .words()
        .into_iter()
        .map(|word| {
            word.into_iter()
                .map(|(index, letter)| (index, dimensions_of(letter)))
                .collect()
        })
        .collect();

    let max_height = words
        .iter()
        .flatten()
        .map(|(_, dims)| dims.height)
        .fold(0.0, f64::max);
    let total_height = max_height + 2.0 * PADDING;

    let word_widths: f64 = words.iter().map(|word| word_width(word)).sum();
    let gaps = words.len().saturating_sub(1) as f64;
    let total_width = word_widths + 2.0 * PADDING + gaps * WORD_GAP + gaps * WORD_GAP_EXTRA;

    let mut placements = Vec::with_capacity(sequence.letter_count());
    let mut current_x = PADDING;

    for word in &words {
        let word_start = current_x;
        let mut offset = 0.0;

        for (symbol_index, dims) in word {
            placements.push(Placement {
                symbol_index: *symbol_index,
                x: word_start + offset,
                y: (total_height - dims.height) / 2.0,
            });
            offset += dims.width + TILE_GAP;
        }

        current_x += offset + WORD_GAP;
    }

    LayoutResult {
        total_width,
        total_height,
        placements,
    }
}

fn word_width(word: &[(usize, TileDimensions)]) -> f64 {
    let tiles: f64 = word.iter().map(|(_, dims)| dims.width).sum();
    tiles + word.len().saturating_sub(1) as f64 * TILE_GAP
}
