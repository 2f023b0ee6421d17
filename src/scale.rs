//! Grid-cell to SVG-user-unit mapping.

use glam::{dvec2, DVec2};

use crate::errors::ScaleError;

/// Conversion factors from grid cells to SVG user units.
///
/// A cell is `x` units wide and `y` units tall. The defaults (9 x 16)
/// approximate the aspect ratio of a monospaced terminal glyph, so a
/// rendered diagram keeps roughly the proportions of its source text.
///
/// There is no global instance: a `Scale` is passed into the parser and
/// into every point construction, which makes independent conversions
/// with different scales trivially safe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    /// Validate and build a scale. Both factors must be finite and
    /// strictly positive.
    pub fn try_new(x: f64, y: f64) -> Result<Self, ScaleError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ScaleError::NotFinite { x, y });
        }
        if x <= 0.0 || y <= 0.0 {
            return Err(ScaleError::NotPositive { x, y });
        }
        Ok(Scale { x, y })
    }

    /// Map a grid coordinate (column, row) onto the canvas.
    pub fn to_canvas(&self, grid: DVec2) -> DVec2 {
        dvec2(grid.x * self.x, grid.y * self.y)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale { x: 9.0, y: 16.0 }
    }
}
