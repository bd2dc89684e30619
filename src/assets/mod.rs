//! Tile assets and their per-session cache
//!
//! A tile asset is the SVG document for one letter. The host supplies the
//! SVG text (fetched from `./tiles/{LETTER}.svg` in the browser); this
//! module measures it and keeps it for reuse across repeated letters.

pub mod cache;
pub mod dimensions;

pub use cache::*;
pub use dimensions::*;

use thiserror::Error;

use crate::models::{Letter, TileDimensions};

/// Failure to obtain a usable asset for a letter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssetError {
    #[error("SVG for {0} not found")]
    NotFound(Letter),

    #[error("SVG for {letter} is not valid: {reason}")]
    InvalidSvg { letter: Letter, reason: String },
}

/// Source of raw SVG text for tile letters
pub trait AssetProvider {
    fn load(&mut self, letter: Letter) -> Result<String, AssetError>;
}

impl<F> AssetProvider for F
where
    F: FnMut(Letter) -> Result<String, AssetError>,
{
    fn load(&mut self, letter: Letter) -> Result<String, AssetError> {
        self(letter)
    }
}

/// A loaded, measured tile SVG
#[derive(Debug, Clone, PartialEq)]
pub struct TileAsset {
    pub letter: Letter,
    pub dimensions: TileDimensions,
    pub svg: String,
}

impl TileAsset {
    /// Parse and measure the SVG source for `letter`
    pub fn from_svg(letter: Letter, svg: impl Into<String>) -> Result<TileAsset, AssetError> {
        let svg = svg.into();
        let dimensions = {
            let doc = parse_svg(&svg).map_err(|e| AssetError::InvalidSvg {
                letter,
                reason: e.to_string(),
            })?;

            let root = doc.root_element();
            if root.tag_name().name() != "svg" {
                return Err(AssetError::InvalidSvg {
                    letter,
                    reason: format!("root element is <{}>", root.tag_name().name()),
                });
            }
            measure_svg(&doc)
        };

        Ok(TileAsset { letter, dimensions, svg })
    }
}

/// Conventional location of a letter's tile relative to `base_path`
pub fn tile_url(base_path: &str, letter: Letter) -> String {
    format!("{}/{}.svg", base_path.trim_end_matches('/'), letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_svg_measures() {
        let letter = Letter::new('a').unwrap();
        let asset = TileAsset::from_svg(
            letter,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="60" height="70"><rect/></svg>"#,
        )
        .unwrap();
        assert_eq!(asset.dimensions, TileDimensions::new(60.0, 70.0));
    }

    const DOCTYPE_TILE: &str = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n",
        "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" ",
        "\"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n",
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"100\"><g><text>A</text></g></svg>"
    );

    #[test]
    fn test_from_svg_accepts_doctype_header() {
        let letter = Letter::new('a').unwrap();
        let asset = TileAsset::from_svg(letter, DOCTYPE_TILE).unwrap();
        assert_eq!(asset.dimensions, TileDimensions::new(100.0, 100.0));

        let fragment = crate::renderers::svg::tile_fragment(&asset.svg).unwrap();
        assert_eq!(fragment.markup, "<g><text>A</text></g>");
    }

    #[test]
    fn test_from_svg_rejects_non_svg_root() {
        let letter = Letter::new('a').unwrap();
        let err = TileAsset::from_svg(letter, "<html/>").unwrap_err();
        assert!(matches!(err, AssetError::InvalidSvg { .. }));
        assert!(TileAsset::from_svg(letter, "not xml").is_err());
    }

    #[test]
    fn test_tile_url() {
        let letter = Letter::new('q').unwrap();
        assert_eq!(tile_url("./tiles", letter), "./tiles/Q.svg");
        assert_eq!(tile_url("/static/tiles/", letter), "/static/tiles/Q.svg");
    }
}
