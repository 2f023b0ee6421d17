//! Custom shape templates substituted for a box's polygon.
//!
//! When a box's options name one of these shapes, its ordinary outline
//! is discarded and the template is fitted to the bounding box of its
//! vertices instead. Templates are authored on a 100 x 100 canvas.

use glam::DVec2;
use svg::node::element::path::Data;

/// One path command of a shape template.
#[derive(Clone, Copy, Debug)]
pub enum TemplateCmd {
    /// `M x y`
    MoveTo(f64, f64),
    /// `L x y`
    LineTo(f64, f64),
    /// `m dx dy`
    MoveBy(f64, f64),
    /// `l dx dy`
    LineBy(f64, f64),
    /// `H x`
    HorizontalTo(f64),
    /// `V y`
    VerticalTo(f64),
    /// `C x1 y1 x2 y2 x y`
    CubicTo(f64, f64, f64, f64, f64, f64),
    /// `A rx ry rot large-arc sweep x y`
    ArcTo(f64, f64, f64, f64, f64, f64, f64),
    /// `Z`
    Close,
}

/// Storage cylinder: bottom ellipse, straight sides, double-stroked
/// top ellipse.
pub const STORAGE: &[TemplateCmd] = &[
    TemplateCmd::MoveTo(0.0, 100.0),
    TemplateCmd::ArcTo(50.0, 25.0, 0.0, 0.0, 0.0, 100.0, 100.0),
    TemplateCmd::VerticalTo(20.0),
    TemplateCmd::ArcTo(50.0, 25.0, 0.0, 0.0, 0.0, 0.0, 20.0),
    TemplateCmd::ArcTo(50.0, 25.0, 0.0, 0.0, 0.0, 100.0, 20.0),
    TemplateCmd::ArcTo(50.0, 25.0, 0.0, 0.0, 0.0, 0.0, 20.0),
    TemplateCmd::Close,
];

/// Document sheet with a wavy bottom edge.
pub const DOCUMENT: &[TemplateCmd] = &[
    TemplateCmd::MoveTo(0.0, 100.0),
    TemplateCmd::CubicTo(25.0, 115.0, 75.0, 85.0, 100.0, 100.0),
    TemplateCmd::VerticalTo(0.0),
    TemplateCmd::HorizontalTo(0.0),
    TemplateCmd::Close,
];

/// Look up a template by the name carried in a box's `a2s:type` option.
pub fn lookup(name: &str) -> Option<&'static [TemplateCmd]> {
    match name {
        "storage" => Some(STORAGE),
        "document" => Some(DOCUMENT),
        _ => None,
    }
}

/// Fit a template to a target box. Absolute endpoints translate and
/// scale, relative offsets only scale, and arc radii scale per axis.
pub fn fit(template: &[TemplateCmd], origin: DVec2, proportion: DVec2) -> Data {
    let x = |v: f64| origin.x + v * proportion.x;
    let y = |v: f64| origin.y + v * proportion.y;
    let mut data = Data::new();
    for cmd in template {
        data = match *cmd {
            TemplateCmd::MoveTo(px, py) => data.move_to((x(px), y(py))),
            TemplateCmd::LineTo(px, py) => data.line_to((x(px), y(py))),
            TemplateCmd::MoveBy(dx, dy) => data.move_by((dx * proportion.x, dy * proportion.y)),
            TemplateCmd::LineBy(dx, dy) => data.line_by((dx * proportion.x, dy * proportion.y)),
            TemplateCmd::HorizontalTo(px) => data.horizontal_line_to(x(px)),
            TemplateCmd::VerticalTo(py) => data.vertical_line_to(y(py)),
            TemplateCmd::CubicTo(x1, y1, x2, y2, px, py) => {
                data.cubic_curve_to((x(x1), y(y1), x(x2), y(y2), x(px), y(py)))
            }
            TemplateCmd::ArcTo(rx, ry, rot, large_arc, sweep, px, py) => data.elliptical_arc_to((
                rx * proportion.x,
                ry * proportion.y,
                rot,
                large_arc,
                sweep,
                x(px),
                y(py),
            )),
            TemplateCmd::Close => data.close(),
        };
    }
    data
}
