//! Render model for the on-page tile row
//!
//! The page builds one `.tile-word` container per word group and one
//! `.tile-svg` element per tile from this model.

use serde::Serialize;

use super::theme::make_svg_responsive;
use crate::assets::TileCache;
use crate::models::{TileSequence, TileSymbol};

/// Content of one tile slot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TileView {
    /// Themed inline SVG markup
    Svg { letter: String, markup: String },
    /// Placeholder for a letter whose asset failed or is not loaded yet
    Error { letter: String, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordGroup {
    pub tiles: Vec<TileView>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TileRow {
    pub words: Vec<WordGroup>,
}

/// Group a sequence into word containers with themed tile markup
///
/// A new group opens at every word break, so a trailing break leaves an
/// empty trailing group, matching the containers the page creates.
pub fn render_row(sequence: &TileSequence, cache: &TileCache) -> TileRow {
    let mut row = TileRow { words: vec![WordGroup::default()] };

    for symbol in sequence.symbols() {
        match symbol {
            TileSymbol::WordBreak => row.words.push(WordGroup::default()),
            TileSymbol::Letter(letter) => {
                let view = match cache.get(*letter) {
                    Some(asset) => TileView::Svg {
                        letter: letter.to_string(),
                        markup: make_svg_responsive(&asset.svg),
                    },
                    None => TileView::Error {
                        letter: letter.to_string(),
                        message: format!("Error loading {}", letter),
                    },
                };
                if let Some(word) = row.words.last_mut() {
                    word.tiles.push(view);
                }
            }
        }
    }

    row
}
