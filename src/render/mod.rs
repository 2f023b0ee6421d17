//! SVG document assembly.
//!
//! Submodules:
//! - `defaults`: fixed rendering constants
//! - `geometry`: containment tests, shared with the text parser
//! - `shapes`: custom shape templates
//! - `svg`: element serialization

pub mod defaults;
pub mod geometry;
pub mod shapes;
pub mod svg;

use ::svg::node::element::Group;
use ::svg::Document;

use crate::diagram::Diagram;
use crate::scale::Scale;

use self::svg::{definitions, path_node, text_node};

/// Serialize a parsed diagram into a complete SVG document.
///
/// The canvas is sized to the grid extent plus a fixed margin, and the
/// three object groups are emitted in a fixed order so identical input
/// yields identical output.
pub fn generate_svg(diagram: &Diagram, scale: Scale) -> String {
    let width = diagram.columns as f64 * scale.x + defaults::CANVAS_PADDING;
    let height = diagram.rows as f64 * scale.y + defaults::CANVAS_PADDING;

    let mut boxes = Group::new()
        .set("id", "boxes")
        .set("filter", "url(#dsFilter)")
        .set("stroke", "black")
        .set("stroke-width", 2)
        .set("fill", "none");
    for path in &diagram.boxes {
        boxes = boxes.add(path_node(path));
    }

    let mut lines = Group::new()
        .set("id", "lines")
        .set("stroke", "black")
        .set("stroke-width", 2)
        .set("fill", "none");
    for path in &diagram.lines {
        lines = lines.add(path_node(path));
    }

    let mut text = Group::new().set("id", "text").set("fill", "black").set(
        "style",
        format!("font-family: monospace; font-size: {}px", scale.y),
    );
    for label in &diagram.texts {
        text = text.add(text_node(label));
    }

    Document::new()
        .set("width", width)
        .set("height", height)
        .add(definitions())
        .add(boxes)
        .add(lines)
        .add(text)
        .to_string()
}
