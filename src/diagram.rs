//! Geometric objects extracted from the grid.

use bitflags::bitflags;
use glam::{dvec2, DVec2};
use indexmap::IndexMap;

use crate::render::geometry;
use crate::scale::Scale;

bitflags! {
    /// Role of a vertex within a path.
    ///
    /// A point carries at most one of `POINT`/`CONTROL` and at most one
    /// marker flag.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PointFlags: u8 {
        /// Ordinary sharp vertex.
        const POINT = 0b0001;
        /// Vertex replaced by a quadratic curve at render time.
        const CONTROL = 0b0010;
        /// Terminal arrowhead, standard orientation.
        const SMARKER = 0b0100;
        /// Terminal arrowhead, inverted orientation.
        const IMARKER = 0b1000;
    }
}

/// A grid coordinate paired with its scaled canvas coordinate.
///
/// Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// (column, row) in grid cells; fractional for text anchors.
    pub grid: DVec2,
    /// The grid position scaled into SVG user units.
    pub canvas: DVec2,
    pub flags: PointFlags,
}

impl Point {
    pub fn new(grid_x: f64, grid_y: f64, flags: PointFlags, scale: Scale) -> Self {
        let grid = dvec2(grid_x, grid_y);
        Point {
            grid,
            canvas: scale.to_canvas(grid),
            flags,
        }
    }

    pub fn is_marker(&self) -> bool {
        self.flags
            .intersects(PointFlags::SMARKER | PointFlags::IMARKER)
    }
}

/// Outcome of [`Path::add_point`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddPoint {
    Appended,
    /// The point matched a non-initial vertex; nothing was added.
    Dedup,
    /// The point matched the first vertex. The path is now closed and
    /// the boundary is stored once.
    Closed,
}

/// An ordered sequence of vertices: open (a line) or closed (a box).
///
/// Options hold the SVG attributes merged from a command-table blob.
#[derive(Clone, Debug, Default)]
pub struct Path {
    points: Vec<Point>,
    closed: bool,
    pub options: IndexMap<String, String>,
}

impl Path {
    pub fn new() -> Self {
        Path::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Append a vertex, enforcing the dedup and closure invariants.
    /// Marker vertices are appended unconditionally.
    pub fn add_point(&mut self, point: Point) -> AddPoint {
        if point.is_marker() {
            self.points.push(point);
            return AddPoint::Appended;
        }
        if let Some(first) = self.points.first() {
            if first.canvas == point.canvas {
                self.closed = true;
                return AddPoint::Closed;
            }
        }
        if self.points.iter().skip(1).any(|p| p.canvas == point.canvas) {
            return AddPoint::Dedup;
        }
        self.points.push(point);
        AddPoint::Appended
    }

    /// Drop the most recently appended vertex (backtracking).
    pub fn pop_point(&mut self) -> Option<Point> {
        self.points.pop()
    }

    /// Vertex-multiset equality: same count, and every vertex of `self`
    /// has a coordinate match in `other`.
    pub fn same_vertices(&self, other: &Path) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .all(|p| other.points.iter().any(|q| q.canvas == p.canvas))
    }

    /// Even-odd containment of a canvas point. Open paths contain
    /// nothing.
    pub fn contains(&self, query: DVec2) -> bool {
        if !self.closed {
            return false;
        }
        let vertices: Vec<DVec2> = self.points.iter().map(|p| p.canvas).collect();
        geometry::polygon_contains(&vertices, query)
    }
}

/// A free-form label anchored at a grid position.
#[derive(Clone, Debug)]
pub struct Text {
    pub anchor: Point,
    pub content: String,
    pub options: IndexMap<String, String>,
}

impl Text {
    pub fn new(anchor: Point, content: String) -> Self {
        Text {
            anchor,
            content,
            options: IndexMap::new(),
        }
    }
}

/// Everything extracted from one grid, grouped for rendering.
///
/// Groups are emitted in insertion order: boxes, lines, text.
#[derive(Clone, Debug)]
pub struct Diagram {
    /// Grid height in rows, for canvas sizing.
    pub rows: usize,
    /// Width of the widest grid row, for canvas sizing.
    pub columns: usize,
    pub boxes: Vec<Path>,
    pub lines: Vec<Path>,
    pub texts: Vec<Text>,
}
