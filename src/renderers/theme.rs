//! Theme-aware tile markup
//!
//! Tile SVGs are authored in black on white. Before inlining them in the
//! page their colors are swapped for CSS variables so light and dark mode
//! both work without separate assets.

use lazy_static::lazy_static;
use regex::Regex;

/// Class added to every inlined tile `<svg>`
pub const TILE_SVG_CLASS: &str = "tile-svg-content";

lazy_static! {
    static ref RECT_WHITE_FILL: Regex = Regex::new(r#"<rect([^>]*)fill="white""#).unwrap();
    static ref TEXT_ELEMENT: Regex = Regex::new(r"<text([^>]*?)>([^<]*)</text>").unwrap();
    static ref SVG_OPEN_TAG: Regex = Regex::new(r"<svg([^>]*)").unwrap();
    static ref BLACK_STROKE: Regex = Regex::new(r#"stroke="black""#).unwrap();
}

/// Rewrite tile SVG colors to theme variables and tag the root element
///
/// - the first white `<rect>` fill becomes `var(--bg-color)`
/// - every `<text>` gets `fill="var(--text-color)"`
/// - the first `<svg>` tag gets `class="tile-svg-content"`
/// - every black stroke becomes `var(--text-color)`
pub fn make_svg_responsive(svg: &str) -> String {
    let themed = RECT_WHITE_FILL.replace(svg, r#"<rect${1}fill="var(--bg-color)""#);
    let themed = TEXT_ELEMENT.replace_all(&themed, r#"<text${1} fill="var(--text-color)">${2}</text>"#);
    let themed = SVG_OPEN_TAG.replace(&themed, format!(r#"<svg${{1}} class="{}""#, TILE_SVG_CLASS));
    BLACK_STROKE
        .replace_all(&themed, r#"stroke="var(--text-color)""#)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: &str = concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">"#,
        r#"<rect x="0" y="0" width="100" height="100" fill="white" stroke="black"/>"#,
        r#"<rect x="5" y="5" width="90" height="90" fill="white"/>"#,
        r#"<text x="50" y="60">A</text><text x="85" y="90">1</text>"#,
        r#"</svg>"#
    );

    #[test]
    fn test_first_rect_fill_only() {
        let themed = make_svg_responsive(TILE);
        assert_eq!(themed.matches(r#"fill="var(--bg-color)""#).count(), 1);
        assert!(themed.contains(r#"height="90" fill="white""#));
    }

    #[test]
    fn test_text_fill_added() {
        let themed = make_svg_responsive(TILE);
        assert!(themed.contains(r#"<text x="50" y="60" fill="var(--text-color)">A</text>"#));
        assert!(themed.contains(r#"<text x="85" y="90" fill="var(--text-color)">1</text>"#));
    }

    #[test]
    fn test_svg_class_and_stroke() {
        let themed = make_svg_responsive(TILE);
        assert!(themed.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" class="tile-svg-content">"#
        ));
        assert!(themed.contains(r#"stroke="var(--text-color)""#));
        assert!(!themed.contains(r#"stroke="black""#));
    }
}
