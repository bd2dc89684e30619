//! Tile renderer WASM API
//!
//! JavaScript-facing functions for the tile page.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serialization and error conversion
//! - `types`: result shapes returned to the page
//! - `tiles`: stateless operations (sequence, layout, theming, filenames)
//! - `board`: the stateful `TileBoard` holding input and tile cache
//! - `share`: share-link encoding and decoding

pub mod helpers;
pub mod types;
pub mod tiles;
pub mod board;
pub mod share;

pub use board::TileBoard;
pub use share::{share_url, word_from_query};
pub use tiles::{build_sequence_js, compute_layout_js, export_filename_js, make_svg_responsive_js};
