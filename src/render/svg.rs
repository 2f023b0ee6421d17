//! Serialization of parsed objects into SVG elements.

use glam::{dvec2, DVec2};
use svg::node::element::path::Data;
use svg::node::element::{Element, Path as PathElement};
use svg::node::{Node, Text as TextNode};

use crate::diagram::{Path, Point, PointFlags, Text};

use super::defaults;
use super::shapes;

/// Escape the XML special characters for text content and attribute
/// values. `&` must come first.
pub fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render one parsed path, dispatching to a shape template when its
/// options ask for one and wrapping in an anchor when they carry a
/// link.
pub fn path_node(path: &Path) -> Element {
    let mut attributes: Vec<(&str, &str)> = Vec::new();
    let mut link = None;
    let mut template = None;
    for (name, value) in &path.options {
        match name.as_str() {
            "a2s:type" => template = shapes::lookup(value),
            "a2s:link" => link = Some(value.as_str()),
            _ => attributes.push((name.as_str(), value.as_str())),
        }
    }

    let data = match template {
        Some(template) => template_data(path, template),
        None => outline_data(path),
    };

    let mut element = Element::new("path");
    element.assign("d", data);
    let mut has_fill = false;
    for (name, value) in attributes {
        if name == "fill" {
            has_fill = true;
        }
        element.assign(xml_escape(name), xml_escape(value));
    }
    if (path.is_closed() || template.is_some()) && !has_fill {
        element.assign("fill", defaults::SHAPE_FILL);
    }
    if template.is_none() {
        let points = path.points();
        if let Some(first) = points.first() {
            if let Some(url) = marker_url(first) {
                element.assign("marker-start", url);
            }
        }
        if points.len() > 1 {
            if let Some(last) = points.last() {
                if let Some(url) = marker_url(last) {
                    element.assign("marker-end", url);
                }
            }
        }
    }

    match link {
        Some(href) => {
            let mut anchor = Element::new("a");
            anchor.assign("href", xml_escape(href));
            anchor.append(element);
            anchor
        }
        None => element,
    }
}

fn marker_url(point: &Point) -> Option<&'static str> {
    if point.flags.contains(PointFlags::SMARKER) {
        Some("url(#Pointer)")
    } else if point.flags.contains(PointFlags::IMARKER) {
        Some("url(#iPointer)")
    } else {
        None
    }
}

/// Fit the named template over the bounding box of the path's vertices.
fn template_data(path: &Path, template: &'static [shapes::TemplateCmd]) -> Data {
    let mut min = DVec2::splat(f64::MAX);
    let mut max = DVec2::splat(f64::MIN);
    for point in path.points() {
        min = min.min(point.canvas);
        max = max.max(point.canvas);
    }
    shapes::fit(template, min, (max - min) / 100.0)
}

/// Emit the ordinary vertex sequence, replacing control corners with
/// fixed-radius quadratic curves.
///
/// The truncate-then-curve construction is only visually correct for a
/// clockwise traversal, which the wall follower guarantees for every
/// closed path.
fn outline_data(path: &Path) -> Data {
    let points = path.points();
    let Some(first) = points.first() else {
        return Data::new();
    };
    let count = points.len();
    let next_of = |i: usize| -> Option<&Point> {
        if i + 1 < count {
            Some(&points[i + 1])
        } else if path.is_closed() {
            Some(&points[0])
        } else {
            None
        }
    };

    let mut data = Data::new();
    if first.flags.contains(PointFlags::CONTROL) && count > 1 {
        // open the path on the curve itself so it begins cleanly
        let previous = if path.is_closed() {
            &points[count - 1]
        } else {
            &points[1]
        };
        let entry = approach(first, previous);
        let exit = approach(first, &points[1]);
        data = data
            .move_to((entry.x, entry.y))
            .quadratic_curve_to((first.canvas.x, first.canvas.y, exit.x, exit.y));
    } else {
        data = data.move_to((first.canvas.x, first.canvas.y));
    }

    for i in 1..count {
        let current = &points[i];
        match next_of(i) {
            Some(next) if current.flags.contains(PointFlags::CONTROL) => {
                let entry = approach(current, &points[i - 1]);
                let exit = approach(current, next);
                data = data
                    .line_to((entry.x, entry.y))
                    .quadratic_curve_to((current.canvas.x, current.canvas.y, exit.x, exit.y));
            }
            // a trailing control point on an open path has no outgoing
            // segment to curve into; draw it sharp
            _ => {
                data = data.line_to((current.canvas.x, current.canvas.y));
            }
        }
    }
    if path.is_closed() {
        data = data.close();
    }
    data
}

/// The point `CORNER_RADIUS` units away from `corner` along the axis it
/// shares with `toward`.
fn approach(corner: &Point, toward: &Point) -> DVec2 {
    let c = corner.canvas;
    let t = toward.canvas;
    if (t.x - c.x).abs() > (t.y - c.y).abs() {
        dvec2(c.x + defaults::CORNER_RADIUS * (t.x - c.x).signum(), c.y)
    } else {
        dvec2(c.x, c.y + defaults::CORNER_RADIUS * (t.y - c.y).signum())
    }
}

/// Render a text label, honoring a contrast fill override.
pub fn text_node(text: &Text) -> Element {
    let mut element = Element::new("text");
    element.assign("x", text.anchor.canvas.x);
    element.assign("y", text.anchor.canvas.y);
    for (name, value) in &text.options {
        element.assign(xml_escape(name), xml_escape(value));
    }
    element.append(TextNode::new(xml_escape(&text.content)));
    element
}

/// The `<defs>` block: the drop-shadow filter and both arrowheads.
pub fn definitions() -> Element {
    let mut offset = Element::new("feOffset");
    offset.assign("result", "offOut");
    offset.assign("in", "SourceGraphic");
    offset.assign("dx", 3);
    offset.assign("dy", 3);

    let mut matrix = Element::new("feColorMatrix");
    matrix.assign("result", "matrixOut");
    matrix.assign("in", "offOut");
    matrix.assign("type", "matrix");
    matrix.assign(
        "values",
        "0.2 0 0 0 0 0 0.2 0 0 0 0 0 0.2 0 0 0 0 0 1 0",
    );

    let mut blur = Element::new("feGaussianBlur");
    blur.assign("result", "blurOut");
    blur.assign("in", "matrixOut");
    blur.assign("stdDeviation", 3);

    let mut blend = Element::new("feBlend");
    blend.assign("in", "SourceGraphic");
    blend.assign("in2", "blurOut");
    blend.assign("mode", "normal");

    let mut filter = Element::new("filter");
    filter.assign("id", "dsFilter");
    filter.assign("width", "150%");
    filter.assign("height", "150%");
    filter.append(offset);
    filter.append(matrix);
    filter.append(blur);
    filter.append(blend);

    let mut defs = Element::new("defs");
    defs.append(filter);
    defs.append(arrow_marker("iPointer", "M 10 0 L 10 10 L 0 5 z"));
    defs.append(arrow_marker("Pointer", "M 0 0 L 10 5 L 0 10 z"));
    defs
}

fn arrow_marker(id: &str, d: &str) -> Element {
    let mut marker = Element::new("marker");
    marker.assign("id", id);
    marker.assign("viewBox", "0 0 10 10");
    marker.assign("refX", 5);
    marker.assign("refY", 5);
    marker.assign("markerUnits", "strokeWidth");
    marker.assign("markerWidth", 8);
    marker.assign("markerHeight", 7);
    marker.assign("orient", "auto");
    marker.append(PathElement::new().set("d", d));
    marker
}
