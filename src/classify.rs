//! Character classification for the diagram grid.
//!
//! Every parsing decision bottoms out in these predicates: a cell is an
//! edge, a corner, a marker, or nothing the geometry extractors care
//! about (and therefore, eventually, text).

/// A compass direction of travel through the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The (row, column) step for one cell of travel.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The clockwise quarter turn: Right -> Down -> Left -> Up -> Right.
    pub fn right_turn(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }

    /// Bit for direction bitsets (visit bookkeeping).
    pub fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Right => 0b1000,
        }
    }
}

/// Characters that turn a traversal.
pub fn is_corner(c: char) -> bool {
    matches!(c, '+' | '\\' | '/' | '.' | '\'')
}

/// Corners drawn with a curve rather than a sharp angle.
pub fn is_curved_corner(c: char) -> bool {
    matches!(c, '\\' | '/' | '.' | '\'')
}

/// Arrowhead characters terminating a line.
pub fn is_marker(c: char) -> bool {
    matches!(c, 'v' | '^' | '<' | '>')
}

/// Edge characters, optionally constrained to a direction of travel.
///
/// Vertical travel accepts `| : *`, horizontal travel accepts `- = *`.
/// With no direction the union (plus nothing else) applies.
pub fn is_edge(c: char, dir: Option<Direction>) -> bool {
    match dir {
        None => matches!(c, '-' | '|' | ':' | '=' | '*'),
        Some(Direction::Up) | Some(Direction::Down) => matches!(c, '|' | ':' | '*'),
        Some(Direction::Left) | Some(Direction::Right) => matches!(c, '-' | '=' | '*'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners() {
        for c in ['+', '\\', '/', '.', '\''] {
            assert!(is_corner(c), "{c:?} should be a corner");
        }
        assert!(!is_corner('-'));
        assert!(!is_corner('v'));
    }

    #[test]
    fn sharp_versus_curved() {
        assert!(!is_curved_corner('+'));
        for c in ['\\', '/', '.', '\''] {
            assert!(is_curved_corner(c));
        }
    }

    #[test]
    fn markers() {
        for c in ['v', '^', '<', '>'] {
            assert!(is_marker(c));
        }
        assert!(!is_marker('V'));
    }

    #[test]
    fn edges_by_direction() {
        assert!(is_edge('|', Some(Direction::Up)));
        assert!(is_edge(':', Some(Direction::Down)));
        assert!(!is_edge('-', Some(Direction::Down)));
        assert!(is_edge('-', Some(Direction::Left)));
        assert!(is_edge('=', Some(Direction::Right)));
        assert!(!is_edge('|', Some(Direction::Right)));
        // `*` runs both ways
        assert!(is_edge('*', Some(Direction::Up)));
        assert!(is_edge('*', Some(Direction::Left)));
    }

    #[test]
    fn directionless_edge_set() {
        for c in ['-', '|', ':', '=', '*'] {
            assert!(is_edge(c, None), "{c:?} should be an edge");
        }
        assert!(!is_edge('+', None));
        assert!(!is_edge(' ', None));
    }

    #[test]
    fn right_turns_cycle_clockwise() {
        assert_eq!(Direction::Right.right_turn(), Direction::Down);
        assert_eq!(Direction::Down.right_turn(), Direction::Left);
        assert_eq!(Direction::Left.right_turn(), Direction::Up);
        assert_eq!(Direction::Up.right_turn(), Direction::Right);
    }
}
