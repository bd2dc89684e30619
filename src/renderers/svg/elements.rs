//! Tile content extraction
//!
//! Pulls the drawable content out of a tile SVG so it can be re-hosted
//! inside the combined export document.

use roxmltree::Node;

use crate::assets::parse_svg;

/// Drawable markup of one tile plus the prefixed namespaces it relies on
#[derive(Debug, Clone, PartialEq)]
pub struct TileFragment {
    pub markup: String,
    /// `(prefix, uri)` pairs declared on the tile's root element
    pub namespaces: Vec<(String, String)>,
}

/// Extract the content of a tile SVG
///
/// Tile artwork usually lives in a single group, so the first `<g>` in
/// document order is taken as-is. Without one, every element child of the
/// root is kept (text and comments between them are dropped).
pub fn tile_fragment(svg: &str) -> Result<TileFragment, roxmltree::Error> {
    let doc = parse_svg(svg)?;
    let root = doc.root_element();

    let markup = match first_group(&root) {
        Some(group) => svg[group.range()].to_string(),
        None => root
            .children()
            .filter(|child| child.is_element() && child.tag_name().name() != "svg")
            .map(|child| &svg[child.range()])
            .collect::<Vec<_>>()
            .concat(),
    };

    let namespaces = root
        .namespaces()
        .filter_map(|ns| ns.name().map(|prefix| (prefix.to_string(), ns.uri().to_string())))
        .filter(|(prefix, _)| prefix != "xml")
        .collect();

    Ok(TileFragment { markup, namespaces })
}

fn first_group<'a, 'input>(root: &Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    root.descendants()
        .find(|node| node.is_element() && node.tag_name().name() == "g")
}
