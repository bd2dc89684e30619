//! Renderers module for the tile renderer
//!
//! Layout arithmetic, on-page render model, theming and SVG export.

pub mod layout;
pub mod row;
pub mod theme;
pub mod svg;
pub mod export;

// Re-export commonly used types
pub use layout::{compute_layout, PADDING, TILE_GAP, WORD_GAP, WORD_GAP_EXTRA};
pub use row::{render_row, TileRow, TileView, WordGroup};
pub use theme::make_svg_responsive;
pub use export::{export_filename, export_svg, layout_from_cache, ExportError};
