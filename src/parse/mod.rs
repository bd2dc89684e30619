//! Parsing module for the tile renderer
//!
//! This module converts raw word/phrase input into tile sequences.

pub mod sequence;

// Re-export commonly used types
pub use sequence::*;
