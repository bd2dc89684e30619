//! Stateless tile operations for the WASM API
//!
//! Sequence building, layout from explicit dimensions, theming and export
//! filename derivation, without going through a `TileBoard`.

use std::collections::HashMap;

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error, serialize};
use crate::models::{Letter, TileDimensions};
use crate::parse::build_sequence;
use crate::renderers::{compute_layout, export_filename, make_svg_responsive};
use crate::{wasm_log, wasm_warn};

/// Convert text to a tile sequence
///
/// # Returns
/// Array of uppercase letters with `"_SPACE_"` word-break markers
///
/// # Errors
/// Rejects input with characters other than A-Z/a-z and spaces, or
/// with no letters at all.
#[wasm_bindgen(js_name = buildSequence)]
pub fn build_sequence_js(text: &str) -> Result<JsValue, JsValue> {
    wasm_log!("buildSequence('{}')", text);

    let sequence = build_sequence(text).map_err(|e| {
        wasm_warn!("buildSequence rejected '{}': {}", text, e);
        JsValue::from_str(&e.to_string())
    })?;

    serialize(&sequence, "Failed to serialize tile sequence")
}

/// Lay out text using a `{ "A": {width, height}, ... }` dimension map
///
/// Letters missing from the map are laid out at the default tile size.
#[wasm_bindgen(js_name = computeLayout)]
pub fn compute_layout_js(text: &str, dimensions: JsValue) -> Result<JsValue, JsValue> {
    let sequence = build_sequence(text).map_err(js_error)?;
    let dimensions: HashMap<Letter, TileDimensions> =
        deserialize(dimensions, "Failed to deserialize tile dimensions")?;

    let layout = compute_layout(&sequence, |letter| {
        dimensions.get(&letter).copied().unwrap_or_else(|| {
            wasm_warn!("no dimensions for {}, using default size", letter);
            TileDimensions::new(crate::assets::DEFAULT_TILE_SIZE, crate::assets::DEFAULT_TILE_SIZE)
        })
    });

    wasm_log!(
        "computeLayout('{}'): {}x{}, {} placements",
        text,
        layout.total_width,
        layout.total_height,
        layout.placements.len()
    );
    serialize(&layout, "Failed to serialize layout")
}

/// Swap tile SVG colors for theme CSS variables
#[wasm_bindgen(js_name = makeSvgResponsive)]
pub fn make_svg_responsive_js(svg: &str) -> String {
    make_svg_responsive(svg)
}

/// Download filename for an exported word
#[wasm_bindgen(js_name = exportFilename)]
pub fn export_filename_js(word: &str) -> String {
    export_filename(word)
}
