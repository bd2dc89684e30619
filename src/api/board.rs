//! Stateful tile board for the host page
//!
//! The page owns the DOM and does the fetching; the board owns the input,
//! the tile sequence and the asset cache, and answers every question the
//! page needs to render, export and share.
//!
//! Typical flow:
//! 1. `setInput(text)` on every input event; fetch each returned request
//! 2. `provideTile(letter, svg)` / `tileFailed(letter)` as fetches settle
//! 3. once `isLoaded()`, `renderRow()` to build the tile containers
//! 4. `exportSvg()` for the download button, `shareUrl(href)` for sharing

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error, parse_letter, serialize};
use crate::api::share;
use crate::api::types::InputStatus;
use crate::config::TileConfig;
use crate::session::TileSession;
use crate::{wasm_info, wasm_log, wasm_warn};

#[wasm_bindgen]
pub struct TileBoard {
    session: TileSession,
}

#[wasm_bindgen]
impl TileBoard {
    /// Create a board; `config` may be `undefined` for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TileBoard, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            TileConfig::default()
        } else {
            deserialize::<TileConfig>(config, "Invalid tile board config")?
        };
        wasm_info!("TileBoard created (tiles from '{}')", config.tile_base_path);

        Ok(TileBoard {
            session: TileSession::new(config),
        })
    }

    /// Process new input box contents
    #[wasm_bindgen(js_name = setInput)]
    pub fn set_input(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let outcome = self
            .session
            .set_input(text)
            .map(|sequence| sequence.map(|s| s.letter_count()));

        let status = match outcome {
            Ok(None) => InputStatus::blank(),
            Ok(Some(letter_count)) => {
                wasm_log!("setInput: {} tiles", letter_count);
                InputStatus {
                    valid: true,
                    shareable: true,
                    message: String::new(),
                    requests: self.session.tile_requests(),
                }
            }
            Err(e) => {
                wasm_warn!("setInput rejected '{}': {}", text, e);
                InputStatus {
                    message: e.user_message(self.session.word()),
                    ..InputStatus::blank()
                }
            }
        };

        serialize(&status, "Failed to serialize input status")
    }

    /// Current (trimmed) word
    #[wasm_bindgen(getter)]
    pub fn word(&self) -> String {
        self.session.word().to_string()
    }

    /// Tiles still to be fetched: `[{letter, url}]`
    #[wasm_bindgen(js_name = pendingTiles)]
    pub fn pending_tiles(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.tile_requests(), "Failed to serialize tile requests")
    }

    /// Hand over fetched SVG text for a letter
    #[wasm_bindgen(js_name = provideTile)]
    pub fn provide_tile(&mut self, letter: &str, svg: &str) -> Result<(), JsValue> {
        let letter = parse_letter(letter).map_err(js_error)?;
        self.session.provide_tile(letter, svg).map_err(js_error)?;
        wasm_log!("provideTile: {} cached ({} tiles)", letter, self.session.cache().len());
        Ok(())
    }

    /// Report that fetching a letter failed
    #[wasm_bindgen(js_name = tileFailed)]
    pub fn tile_failed(&mut self, letter: &str) -> Result<(), JsValue> {
        let letter = parse_letter(letter).map_err(js_error)?;
        self.session.tile_failed(letter);
        Ok(())
    }

    /// True once every letter has either loaded or failed
    #[wasm_bindgen(js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.session.is_loaded()
    }

    /// Word groups with themed tile markup, or `null` with no valid input
    #[wasm_bindgen(js_name = renderRow)]
    pub fn render_row(&self) -> Result<JsValue, JsValue> {
        match self.session.row() {
            Some(row) => serialize(&row, "Failed to serialize tile row"),
            None => Ok(JsValue::NULL),
        }
    }

    /// Canvas size and tile placements for the current word
    #[wasm_bindgen(js_name = layout)]
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        match self.session.layout() {
            Some(layout) => serialize(&layout.map_err(js_error)?, "Failed to serialize layout"),
            None => Err(js_error("No word to lay out")),
        }
    }

    /// Combined SVG for download: `{filename, svg}`
    #[wasm_bindgen(js_name = exportSvg)]
    pub fn export_svg(&self) -> Result<JsValue, JsValue> {
        let exported = self
            .session
            .export()
            .ok_or_else(|| js_error("No word to export"))?
            .map_err(js_error)?;

        wasm_info!("exportSvg: {} ({} bytes)", exported.filename, exported.svg.len());
        serialize(&exported, "Failed to serialize export")
    }

    /// Share link for the current word, based on the page's `href`
    #[wasm_bindgen(js_name = shareUrl)]
    pub fn share_url(&self, base_href: &str) -> Result<String, JsValue> {
        if !self.session.is_shareable() {
            return Err(js_error("Nothing to share"));
        }
        share::share_url(base_href, self.session.word())
    }
}
