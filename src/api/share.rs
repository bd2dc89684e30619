//! Share links
//!
//! The current word travels in a single `word` query parameter. Encoding
//! and decoding use the browser's URL API.

use wasm_bindgen::prelude::*;
use web_sys::{Url, UrlSearchParams};

use crate::wasm_info;

/// Query parameter carrying the shared word
pub const WORD_PARAM: &str = "word";

/// `base_href` with its query replaced by `word=<encoded word>`
#[wasm_bindgen(js_name = shareUrl)]
pub fn share_url(base_href: &str, word: &str) -> Result<String, JsValue> {
    let url = Url::new(base_href)?;
    let params = UrlSearchParams::new()?;
    params.append(WORD_PARAM, word);
    url.set_search(&String::from(params.to_string()));

    let href = url.href();
    wasm_info!("share link for '{}': {}", word, href);
    Ok(href)
}

/// Decoded `word` parameter from a location search string (`?word=...`)
#[wasm_bindgen(js_name = wordFromQuery)]
pub fn word_from_query(search: &str) -> Option<String> {
    UrlSearchParams::new_with_str(search)
        .ok()?
        .get(WORD_PARAM)
        .filter(|word| !word.is_empty())
}
