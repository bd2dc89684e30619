//! Geometry types produced and consumed by the layout calculator

use serde::{Deserialize, Serialize};

/// Intrinsic size of one tile asset
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileDimensions {
    pub width: f64,
    pub height: f64,
}

impl TileDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Absolute position of one letter tile on the canvas
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Index of the letter in the originating `TileSequence`
    pub symbol_index: usize,
    pub x: f64,
    pub y: f64,
}

/// Canvas size plus one placement per letter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub total_width: f64,
    pub total_height: f64,
    pub placements: Vec<Placement>,
}

impl LayoutResult {
    /// SVG `viewBox` string covering the whole canvas
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.total_width, self.total_height)
    }
}
