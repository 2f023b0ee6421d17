//! Open-polyline extraction: start detection and the line walker.
//!
//! The scan is column-major so vertical runs are found top-down, and
//! every accepted line is cleared immediately; the blanked cells keep
//! the rest of the scan from re-detecting it.

use crate::classify::{is_corner, is_edge, is_marker, Direction};
use crate::diagram::{AddPoint, Path, PointFlags};

use super::{corner_flags, Parser};

#[cfg(feature = "tracing")]
use tracing::debug;

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($event:tt)*) => {};
}

impl Parser {
    pub(super) fn parse_lines(&mut self) -> Vec<Path> {
        let mut lines = Vec::new();
        for col in 0..self.grid.column_count() as isize {
            for row in 0..self.grid.row_count() as isize {
                let ch = self.grid.get(row, col);
                let Some(dir) = self.line_start(row, col, ch) else {
                    continue;
                };
                let mut path = Path::new();
                let flags = if is_marker(ch) {
                    PointFlags::IMARKER
                } else {
                    PointFlags::POINT
                };
                path.add_point(self.point(row, col, flags));
                let (dr, dc) = dir.delta();
                self.line_walk(&mut path, row + dr, col + dc, dir);
                debug!(row, col, points = path.points().len(), "line accepted");
                self.clear_object(&path);
                lines.push(path);
            }
        }
        lines
    }

    /// Decide from the local neighborhood alone whether `(row, col)`
    /// starts a line, and in which direction the walker leaves it.
    fn line_start(&self, row: isize, col: isize, ch: char) -> Option<Direction> {
        match ch {
            '<' => self.marker_start(row, col, Direction::Right),
            '>' => self.marker_start(row, col, Direction::Left),
            '^' => self.marker_start(row, col, Direction::Down),
            'v' => self.marker_start(row, col, Direction::Up),
            '|' | ':' => self.edge_start(row, col, Direction::Up, Direction::Down),
            '-' | '=' => self.edge_start(row, col, Direction::Left, Direction::Right),
            '+' | '.' | '\'' | '\\' | '/' => self.corner_start(row, col),
            _ => None,
        }
    }

    /// A marker starts a line pointing away from its tip when the cell
    /// behind it is an edge of the matching orientation.
    fn marker_start(&self, row: isize, col: isize, dir: Direction) -> Option<Direction> {
        let (dr, dc) = dir.delta();
        if is_edge(self.grid.get(row + dr, col + dc), Some(dir)) {
            Some(dir)
        } else {
            None
        }
    }

    /// An edge cell starts a line when exactly one of its two aligned
    /// neighbors continues it; cross-runs attached elsewhere are
    /// tolerated.
    fn edge_start(&self, row: isize, col: isize, a: Direction, b: Direction) -> Option<Direction> {
        let continues = |dir: Direction| {
            let (dr, dc) = dir.delta();
            let next = self.grid.get(row + dr, col + dc);
            is_edge(next, Some(dir)) || is_corner(next)
        };
        match (continues(a), continues(b)) {
            (true, false) => Some(a),
            (false, true) => Some(b),
            _ => None,
        }
    }

    /// A corner starts a line when exactly one compass neighbor is an
    /// edge of the matching orientation; junctions stay ambiguous and
    /// are reached from their free ends instead.
    fn corner_start(&self, row: isize, col: isize) -> Option<Direction> {
        let mut start = None;
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dr, dc) = dir.delta();
            if is_edge(self.grid.get(row + dr, col + dc), Some(dir)) {
                if start.is_some() {
                    return None;
                }
                start = Some(dir);
            }
        }
        start
    }

    /// Extend the path from `(row, col)` heading `dir` until a marker,
    /// a dead end, or open space terminates it. Direction only changes
    /// at corners.
    fn line_walk(&mut self, path: &mut Path, row: isize, col: isize, dir: Direction) {
        let (dr, dc) = dir.delta();
        let (mut r, mut c) = (row, col);
        while is_edge(self.grid.get(r, c), Some(dir)) {
            r += dr;
            c += dc;
        }
        let ch = self.grid.get(r, c);
        if is_corner(ch) {
            match path.add_point(self.point(r, c, corner_flags(ch))) {
                AddPoint::Closed | AddPoint::Dedup => return,
                AddPoint::Appended => {}
            }
            // straight on through the corner when the run continues
            let ahead = self.grid.get(r + dr, c + dc);
            if is_corner(ahead) || is_edge(ahead, Some(dir)) {
                self.line_walk(path, r + dr, c + dc, dir);
                return;
            }
            for turn in [
                Direction::Up,
                Direction::Down,
                Direction::Right,
                Direction::Left,
            ] {
                if turn == dir.reverse() {
                    continue;
                }
                let (tr, tc) = turn.delta();
                let next = self.grid.get(r + tr, c + tc);
                if is_corner(next) || is_edge(next, Some(turn)) {
                    self.line_walk(path, r + tr, c + tc, turn);
                    return;
                }
            }
            // nothing leaves this corner; it is the terminus
            return;
        }
        if is_marker(ch) {
            path.add_point(self.point(r, c, PointFlags::SMARKER));
            return;
        }
        // ran into open space or text; the line ends here
        path.add_point(self.point(r, c, PointFlags::POINT));
    }
}
