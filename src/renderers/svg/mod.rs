//! SVG output
//!
//! Tile content extraction and the combined export document.

pub mod elements;
pub mod document;

pub use elements::*;
pub use document::*;
