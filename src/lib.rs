//! Scrabble Tile Word Renderer WASM Module
//!
//! Turns a word or phrase into a row of letter tiles: validates and
//! normalizes the text, caches the per-letter SVG assets, lays the tiles out
//! into word groups and produces a single combined SVG for download.

pub mod models;
pub mod parse;
pub mod assets;
pub mod renderers;
pub mod config;
pub mod session;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use parse::{build_sequence, TileError};
pub use renderers::{compute_layout, export_filename};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Tile renderer WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("logger already initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
