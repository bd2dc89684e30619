//! Models module for the tile renderer
//!
//! Data types shared by the sequence builder, the layout calculator
//! and the renderers.

pub mod tile;
pub mod layout;

// Re-export commonly used types
pub use tile::*;
pub use layout::*;
