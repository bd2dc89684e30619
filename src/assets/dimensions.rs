//! Intrinsic size extraction for tile SVGs
//!
//! Reads `width`/`height` from the root element, falling back to the
//! `viewBox` size and finally to a 100x100 default.

use roxmltree::{Document as XmlDocument, Node};

use crate::models::TileDimensions;

/// Size used when an SVG declares neither usable attributes nor a viewBox
pub const DEFAULT_TILE_SIZE: f64 = 100.0;

/// Parse tile SVG source
///
/// Editors such as Inkscape and Illustrator emit a `<!DOCTYPE svg ...>`
/// header, so DTDs are allowed.
pub fn parse_svg(svg: &str) -> Result<XmlDocument<'_>, roxmltree::Error> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    XmlDocument::parse_with_options(svg, options)
}

/// Measure an already parsed SVG document
pub fn measure_svg(doc: &XmlDocument) -> TileDimensions {
    measure_root(&doc.root_element())
}

pub(crate) fn measure_root(root: &Node) -> TileDimensions {
    let mut width = root.attribute("width").map(parse_leading_number).unwrap_or(0.0);
    let mut height = root.attribute("height").map(parse_leading_number).unwrap_or(0.0);

    if width == 0.0 || height == 0.0 {
        if let Some((vb_width, vb_height)) = root.attribute("viewBox").and_then(parse_view_box) {
            width = vb_width;
            height = vb_height;
        }
    }

    if width == 0.0 {
        width = DEFAULT_TILE_SIZE;
    }
    if height == 0.0 {
        height = DEFAULT_TILE_SIZE;
    }

    TileDimensions::new(width, height)
}

/// Parse the numeric prefix of a length such as `"100"`, `"42.5px"`, `" 1e2"`
///
/// Anything without a numeric prefix measures as zero.
pub fn parse_leading_number(value: &str) -> f64 {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return 0.0;
    }

    // Optional exponent, only taken if it is followed by digits
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// Width and height from a `viewBox="min-x min-y width height"` value
fn parse_view_box(value: &str) -> Option<(f64, f64)> {
    let parts: Vec<f64> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(parse_leading_number)
        .collect();

    if parts.len() == 4 {
        Some((parts[2], parts[3]))
    } else {
        None
    }
}
