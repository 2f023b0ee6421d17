//! The mutable character grid the parsers consume.

/// The sentinel returned for any read outside the stored extent.
pub const BLANK: char = ' ';

/// Indexed 2-D character buffer with safe out-of-bounds reads.
///
/// Rows may have unequal length; reading any cell outside the stored
/// extent returns [`BLANK`], so parsers can probe neighbors without
/// bounds arithmetic. Parsing consumes the grid: cells are blanked as
/// the objects claiming them are accepted, and whatever survives is
/// swept up as text.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    pub fn new(text: &str) -> Self {
        let rows = text.lines().map(|line| line.chars().collect()).collect();
        Grid { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row, in cells.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Read a cell; anything outside the grid reads as [`BLANK`].
    pub fn get(&self, row: isize, col: isize) -> char {
        if row < 0 || col < 0 {
            return BLANK;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or(BLANK)
    }

    /// Blank a cell. Writes outside the grid are ignored.
    pub fn blank(&mut self, row: isize, col: isize) {
        if row < 0 || col < 0 {
            return;
        }
        if let Some(cell) = self
            .rows
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            *cell = BLANK;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_cells_and_sentinel() {
        let grid = Grid::new("ab\ncd");
        assert_eq!(grid.get(0, 0), 'a');
        assert_eq!(grid.get(1, 1), 'd');
        assert_eq!(grid.get(2, 0), BLANK);
        assert_eq!(grid.get(0, 5), BLANK);
        assert_eq!(grid.get(-1, 0), BLANK);
        assert_eq!(grid.get(0, -1), BLANK);
    }

    #[test]
    fn ragged_rows() {
        let grid = Grid::new("abcd\nx\nlong row");
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.column_count(), 8);
        assert_eq!(grid.row_len(1), 1);
        assert_eq!(grid.get(1, 2), BLANK);
    }

    #[test]
    fn blanking_consumes_cells() {
        let mut grid = Grid::new("ab");
        grid.blank(0, 0);
        assert_eq!(grid.get(0, 0), BLANK);
        assert_eq!(grid.get(0, 1), 'b');
        // out-of-range writes are a no-op
        grid.blank(9, 9);
        grid.blank(-1, 0);
    }

    #[test]
    fn empty_input() {
        let grid = Grid::new("");
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.column_count(), 0);
        assert_eq!(grid.cell_count(), 0);
    }
}
