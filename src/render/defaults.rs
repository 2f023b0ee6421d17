//! Fixed rendering constants.

/// Radius, in SVG user units, of the quadratic curve that replaces a
/// control-point corner.
pub const CORNER_RADIUS: f64 = 10.0;

/// Padding added around the grid extent when sizing the canvas.
pub const CANVAS_PADDING: f64 = 30.0;

/// Fill applied to closed shapes that specify none, so boxes occlude
/// whatever sits behind them.
pub const SHAPE_FILL: &str = "#fff";
