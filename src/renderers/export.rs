//! Combined image export
//!
//! Produces one SVG document holding every tile of a sequence, laid out by
//! [`compute_layout`], plus the download filename for it.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::layout::compute_layout;
use super::svg::{tile_fragment, write_combined_svg, PlacedTile, TileFragment};
use crate::assets::{TileCache, DEFAULT_TILE_SIZE};
use crate::models::{Letter, LayoutResult, Placement, TileDimensions, TileSequence};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// A letter in the sequence has no loaded asset
    #[error("no tile loaded for {0}")]
    MissingTile(Letter),

    #[error("tile {letter} could not be read: {reason}")]
    InvalidTile { letter: Letter, reason: String },

    /// The layout produced a different number of placements than letters
    #[error("layout has {placements} placements for {letters} letters")]
    LayoutMismatch { letters: usize, placements: usize },

    #[error("failed to write SVG: {0}")]
    Write(String),
}

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Download filename for `word`: whitespace runs become hyphens
pub fn export_filename(word: &str) -> String {
    format!("{}-tiles.svg", WHITESPACE_RUN.replace_all(word, "-"))
}

/// Layout of `sequence` using the cached tile sizes
///
/// Fails if any letter of the sequence has not been loaded.
pub fn layout_from_cache(sequence: &TileSequence, cache: &TileCache) -> Result<LayoutResult, ExportError> {
    if let Some(letter) = cache.missing_letters(sequence).into_iter().next() {
        return Err(ExportError::MissingTile(letter));
    }

    Ok(compute_layout(sequence, |letter| {
        cache
            .dimensions(letter)
            .unwrap_or(TileDimensions::new(DEFAULT_TILE_SIZE, DEFAULT_TILE_SIZE))
    }))
}

/// Build the combined SVG document for `sequence`
pub fn export_svg(sequence: &TileSequence, cache: &TileCache) -> Result<String, ExportError> {
    let layout = layout_from_cache(sequence, cache)?;

    // Each distinct letter's content is extracted once
    let mut fragments: Vec<(Letter, TileFragment)> = Vec::new();
    for letter in sequence.distinct_letters() {
        let asset = cache.get(letter).ok_or(ExportError::MissingTile(letter))?;
        let fragment = tile_fragment(&asset.svg).map_err(|e| ExportError::InvalidTile {
            letter,
            reason: e.to_string(),
        })?;
        fragments.push((letter, fragment));
    }
    let fragment_for = |letter: Letter| {
        fragments
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, fragment)| fragment)
            .ok_or(ExportError::MissingTile(letter))
    };

    let mut words = Vec::new();
    for word in placements_by_word(sequence, &layout)? {
        let mut placed = Vec::with_capacity(word.len());
        for (placement, letter) in word {
            placed.push(PlacedTile {
                placement,
                fragment: fragment_for(letter)?,
            });
        }
        words.push(placed);
    }

    let svg = write_combined_svg(&layout, &words).map_err(|e| ExportError::Write(e.to_string()))?;
    log::info!(
        "exported '{}' as {}x{} SVG ({} bytes)",
        sequence,
        layout.total_width,
        layout.total_height,
        svg.len()
    );
    Ok(svg)
}

/// Pair each letter with its placement, grouped by word
///
/// Placements follow letter order, which is also word order.
fn placements_by_word(
    sequence: &TileSequence,
    layout: &LayoutResult,
) -> Result<Vec<Vec<(Placement, Letter)>>, ExportError> {
    if layout.placements.len() != sequence.letter_count() {
        return Err(ExportError::LayoutMismatch {
            letters: sequence.letter_count(),
            placements: layout.placements.len(),
        });
    }

    let mut placements = layout.placements.iter().copied();
    Ok(sequence
        .words()
        .into_iter()
        .map(|word| {
            word.into_iter()
                .zip(placements.by_ref())
                .map(|((_, letter), placement)| (placement, letter))
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::TileAsset;
    use crate::parse::build_sequence;

    fn cache_for(letters: &str) -> TileCache {
        let mut cache = TileCache::new();
        for ch in letters.chars() {
            let letter = Letter::new(ch).unwrap();
            let svg = format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><g><text>{}</text></g></svg>"#,
                ch
            );
            cache.insert(TileAsset::from_svg(letter, svg).unwrap());
        }
        cache
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("cat"), "cat-tiles.svg");
        assert_eq!(export_filename("cat  dog"), "cat-dog-tiles.svg");
        assert_eq!(export_filename("big red dog"), "big-red-dog-tiles.svg");
    }

    #[test]
    fn test_missing_tile() {
        let cache = cache_for("CA");
        let sequence = build_sequence("cat").unwrap();
        assert_eq!(
            export_svg(&sequence, &cache),
            Err(ExportError::MissingTile(Letter::new('t').unwrap()))
        );
    }

    #[test]
    fn test_layout_mismatch_reported() {
        let cache = cache_for("AB");
        let sequence = build_sequence("ab").unwrap();
        let mut layout = layout_from_cache(&sequence, &cache).unwrap();
        layout.placements.pop();

        assert_eq!(
            placements_by_word(&sequence, &layout),
            Err(ExportError::LayoutMismatch { letters: 2, placements: 1 })
        );
    }

    #[test]
    fn test_placements_grouped_by_word() {
        let cache = cache_for("ABC");
        let sequence = build_sequence("ab c ").unwrap();
        let layout = layout_from_cache(&sequence, &cache).unwrap();
        let words = placements_by_word(&sequence, &layout).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].len(), 2);
        assert_eq!(words[1][0].0.symbol_index, 3);
        assert_eq!(words[1][0].1, Letter::new('c').unwrap());
    }

    #[test]
    fn test_export_groups_words() {
        let cache = cache_for("ABC");
        let sequence = build_sequence("ab c").unwrap();
        let svg = export_svg(&sequence, &cache).unwrap();

        assert!(svg.starts_with(r#"<svg width="360" height="120" viewBox="0 0 360 120""#));
        assert!(svg.contains(r#"<g transform="translate(120, 10)"><g><text>B</text></g></g>"#));
        assert!(svg.contains(
            r#"</g></g><g><g transform="translate(250, 10)"><g><text>C</text></g></g></g></g></svg>"#
        ));
    }
}
