//! Combined SVG document generation
//!
//! Writes the single-image export: one root `<svg>` sized from the layout,
//! an outer group, one group per word and one translated group per tile.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::elements::TileFragment;
use crate::models::{LayoutResult, Placement};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A tile ready to be written: where it goes and what it draws
pub struct PlacedTile<'a> {
    pub placement: Placement,
    pub fragment: &'a TileFragment,
}

/// Write the combined document
///
/// `words` holds the placed tiles of each word, in order.
pub fn write_combined_svg(
    layout: &LayoutResult,
    words: &[Vec<PlacedTile<'_>>],
) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new(Vec::new());

    let width = layout.total_width.to_string();
    let height = layout.total_height.to_string();
    let view_box = layout.view_box();

    let mut root = BytesStart::new("svg");
    root.push_attribute(("width", width.as_str()));
    root.push_attribute(("height", height.as_str()));
    root.push_attribute(("viewBox", view_box.as_str()));
    root.push_attribute(("xmlns", SVG_NAMESPACE));

    let mut declared: Vec<&str> = Vec::new();
    let mut ns_attrs: Vec<(String, &str)> = Vec::new();
    for tile in words.iter().flatten() {
        for (prefix, uri) in &tile.fragment.namespaces {
            if !declared.contains(&prefix.as_str()) {
                declared.push(prefix.as_str());
                ns_attrs.push((format!("xmlns:{}", prefix), uri.as_str()));
            }
        }
    }
    for (name, uri) in &ns_attrs {
        root.push_attribute((name.as_str(), *uri));
    }

    writer.write_event(Event::Start(root))?;
    writer.write_event(Event::Start(BytesStart::new("g")))?;

    for word in words {
        writer.write_event(Event::Start(BytesStart::new("g")))?;
        for tile in word {
            let transform = format!("translate({}, {})", tile.placement.x, tile.placement.y);
            let mut group = BytesStart::new("g");
            group.push_attribute(("transform", transform.as_str()));
            writer.write_event(Event::Start(group))?;
            // Tile markup is already well-formed XML taken from its source
            writer.write_event(Event::Text(BytesText::from_escaped(tile.fragment.markup.as_str())))?;
            writer.write_event(Event::End(BytesEnd::new("g")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("g")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("g")))?;
    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_structure() {
        let fragment = TileFragment {
            markup: "<rect/>".to_string(),
            namespaces: vec![("xlink".to_string(), "http://www.w3.org/1999/xlink".to_string())],
        };
        let layout = LayoutResult {
            total_width: 120.0,
            total_height: 120.0,
            placements: vec![Placement { symbol_index: 0, x: 10.0, y: 10.0 }],
        };
        let words = vec![vec![PlacedTile { placement: layout.placements[0], fragment: &fragment }]];

        let svg = write_combined_svg(&layout, &words).unwrap();
        assert_eq!(
            svg,
            concat!(
                r#"<svg width="120" height="120" viewBox="0 0 120 120" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#,
                r#"<g><g><g transform="translate(10, 10)"><rect/></g></g></g></svg>"#
            )
        );
    }
}
