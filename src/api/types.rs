//! Shared types for the WASM API
//!
//! Result shapes returned to the host page.

use crate::session::TileRequest;

/// Outcome of processing the input box contents
#[derive(serde::Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InputStatus {
    /// The input can be rendered as tiles
    pub valid: bool,
    /// The share button should be enabled
    pub shareable: bool,
    /// Text for the result line (empty when there is nothing to say)
    pub message: String,
    /// Tiles the page still has to fetch
    pub requests: Vec<TileRequest>,
}

impl InputStatus {
    pub fn blank() -> Self {
        Self {
            valid: false,
            shareable: false,
            message: String::new(),
            requests: Vec::new(),
        }
    }
}
