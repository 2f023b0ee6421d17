//! The grid-to-geometry extraction pipeline.
//!
//! Phases run in a fixed order, each consuming the cells it claims so
//! later phases cannot re-detect them:
//!
//! 1. `boxes`: closed polygons via the wall follower, then their edge
//!    cells are cleared.
//! 2. `lines`: open polylines via the line walker, cleared as found.
//! 3. the deferred corner sweep (corners may be shared between objects,
//!    so they survive until all geometric parsing is done).
//! 4. `text`: whatever is left.

mod boxes;
mod clear;
mod lines;
mod text;

use crate::classify::is_curved_corner;
use crate::diagram::{Diagram, Point, PointFlags};
use crate::grid::Grid;
use crate::options::{self, CommandTable};
use crate::scale::Scale;

#[cfg(feature = "tracing")]
use tracing::debug;

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($event:tt)*) => {};
}

/// Flags for a corner character: sharp `+` is an ordinary vertex, the
/// slanted set renders as a curve.
pub(crate) fn corner_flags(c: char) -> PointFlags {
    if is_curved_corner(c) {
        PointFlags::CONTROL
    } else {
        PointFlags::POINT
    }
}

/// One conversion's parsing state. Owns the grid exclusively; the grid
/// is discarded when parsing ends.
pub struct Parser {
    grid: Grid,
    scale: Scale,
    commands: CommandTable,
    deferred_corners: Vec<(isize, isize)>,
    /// Traversals deeper than this are abandoned like unclosed
    /// candidates. Bounds recursion on pathological input.
    max_depth: usize,
}

impl Parser {
    /// Run the full pipeline over one input blob.
    pub fn run(source: &str, scale: Scale) -> Diagram {
        let (text, commands) = options::extract(source);
        let grid = Grid::new(&text);
        let max_depth = grid.cell_count().saturating_mul(4);
        let rows = grid.row_count();
        let columns = grid.column_count();
        let mut parser = Parser {
            grid,
            scale,
            commands,
            deferred_corners: Vec::new(),
            max_depth,
        };

        let boxes = parser.parse_boxes();
        for path in &boxes {
            parser.clear_object(path);
        }
        let lines = parser.parse_lines();
        parser.sweep_corners();
        let texts = parser.parse_text(&boxes);
        debug!(
            boxes = boxes.len(),
            lines = lines.len(),
            texts = texts.len(),
            "parsing complete"
        );

        Diagram {
            rows,
            columns,
            boxes,
            lines,
            texts,
        }
    }

    fn point(&self, row: isize, col: isize, flags: PointFlags) -> Point {
        Point::new(col as f64, row as f64, flags, self.scale)
    }
}
