//! asciru: render ASCII-art diagrams as SVG.
//!
//! Boxes drawn with `+ - | =` (or rounded with `.` and `'`), connecting
//! lines with optional `< ^ > v` arrowheads, and free-form labels become
//! a single styled SVG document. Trailing reference lines of the form
//! `[N]: {"fill": "#000"}` attach per-shape styling, switch a box to one
//! of the built-in shapes (`a2s:type`), or turn it into a hyperlink
//! (`a2s:link`).
//!
//! The pipeline is a pure function of its input: closed polygons are
//! recognized first by a right-turning wall follower, open polylines
//! next, and whatever cells remain are swept up as text. Conversion is
//! total; input that parses as nothing renders as text.
//!
//! # Example
//!
//! ```
//! let svg = asciru::render("+---+\n|   |\n+---+");
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("id=\"boxes\""));
//! ```

pub mod classify;
pub mod color;
pub mod diagram;
pub mod errors;
pub mod grid;
pub mod options;
pub mod parse;
pub mod render;
pub mod scale;

pub use diagram::{AddPoint, Diagram, Path, Point, PointFlags, Text};
pub use errors::ScaleError;
pub use scale::Scale;

use parse::Parser;

/// Render a diagram with the default 9 x 16 cell scale.
pub fn render(source: &str) -> String {
    let diagram = Parser::run(source, Scale::default());
    render::generate_svg(&diagram, Scale::default())
}

/// Render with explicit cell dimensions in SVG user units.
///
/// Fails only on unusable scale factors; the conversion itself accepts
/// any input.
pub fn render_with_scale(
    source: &str,
    x_scale: f64,
    y_scale: f64,
) -> Result<String, miette::Report> {
    let scale = Scale::try_new(x_scale, y_scale)?;
    let diagram = Parser::run(source, scale);
    Ok(render::generate_svg(&diagram, scale))
}

/// Parse without rendering, exposing the extracted geometry.
pub fn parse(source: &str, scale: Scale) -> Diagram {
    Parser::run(source, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_document_for_any_input() {
        for source in ["", "just words", "+--+", "\n\n\n"] {
            let svg = render(source);
            assert!(svg.contains("<svg"), "no document for {source:?}");
        }
    }

    #[test]
    fn scale_is_validated_up_front() {
        assert!(render_with_scale("+--+", 9.0, 16.0).is_ok());
        assert!(render_with_scale("+--+", 0.0, 16.0).is_err());
        assert!(render_with_scale("+--+", 9.0, f64::NAN).is_err());
    }

    #[test]
    fn parse_exposes_geometry() {
        let diagram = parse("+--+\n|  |\n+--+", Scale::default());
        assert_eq!(diagram.boxes.len(), 1);
        assert_eq!(diagram.rows, 3);
        assert_eq!(diagram.columns, 4);
    }
}
