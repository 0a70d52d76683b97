//! Grid module - the board's data model
//!
//! The grid is a `width x height` array of cells, each empty or holding a token kind.
//! Uses a flat array for better cache locality; it is allocated once and never resized.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom). Gravity pulls towards increasing y.

use std::fmt;

use crate::config::BoardConfig;
use crate::error::GridError;
use crate::types::{Cell, Kind, Position};

/// The game board, flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    config: BoardConfig,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Box<[Cell]>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            cells: vec![None; config.cell_count()].into_boxed_slice(),
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || y < 0 || x as u8 >= self.config.width() || y as u8 >= self.config.height() {
            return None;
        }
        Some((y as usize) * (self.config.width() as usize) + (x as usize))
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Get width of the grid
    pub fn width(&self) -> u8 {
        self.config.width()
    }

    /// Get height of the grid
    pub fn height(&self) -> u8 {
        self.config.height()
    }

    /// Number of token kinds this grid holds
    pub fn kinds(&self) -> u8 {
        self.config.kinds()
    }

    /// Get cell at position (x, y)
    ///
    /// Returns `None` if out of bounds. The sentinel never equals a real
    /// cell, empty or not, so run comparisons stop at the edges without
    /// explicit bounds checks.
    #[inline]
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Get cell at `position`, `None` if out of bounds
    #[inline]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.get(position.x, position.y)
    }

    /// Kind of the token at (x, y), if there is one
    #[inline]
    pub fn kind_at(&self, x: i8, y: i8) -> Option<Kind> {
        self.get(x, y).flatten()
    }

    /// Set cell at position (x, y)
    /// Returns false (and writes nothing) if out of bounds or if the kind is
    /// not below `kinds()`
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if cell.is_some_and(|kind| kind.index() >= self.kinds()) {
            return false;
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a position is on the grid
    pub fn contains(&self, position: Position) -> bool {
        self.index(position.x, position.y).is_some()
    }

    /// Check if position is occupied (within bounds and holding a token)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if every cell holds a token
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of cells holding a token
    pub fn token_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Cells of column `x`, top to bottom
    pub fn column(&self, x: i8) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height() as i8).filter_map(move |y| self.get(x, y))
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: i8) -> impl Iterator<Item = Cell> + '_ {
        (0..self.width() as i8).filter_map(move |x| self.get(x, y))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
    }

    /// Build a grid from a text fixture
    ///
    /// One line per row, one character per cell: `.` is empty, `0-9` and
    /// `a-f` are kinds. Surrounding whitespace and blank lines are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_crush_core::{BoardConfig, Grid};
    ///
    /// let config = BoardConfig::new(3, 3, 5).unwrap();
    /// let grid = Grid::from_ascii(config, "
    ///     0.1
    ///     234
    ///     012
    /// ").unwrap();
    /// assert_eq!(grid.get(1, 0), Some(None));
    /// assert_eq!(grid.kind_at(2, 1).map(|k| k.index()), Some(4));
    /// assert_eq!(grid.to_string(), "0.1\n234\n012\n");
    /// ```
    pub fn from_ascii(config: BoardConfig, text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let height = config.height() as usize;
        let width = config.width() as usize;
        if rows.len() != height {
            return Err(GridError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }

        let mut grid = Self::new(config);
        for (y, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RowLength {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, c) in line.chars().enumerate() {
                let cell = match c {
                    '.' => None,
                    _ => {
                        let kind = Kind::from_char(c).ok_or(GridError::BadChar {
                            row: y,
                            column: x,
                            found: c,
                        })?;
                        if kind.index() >= config.kinds() {
                            return Err(GridError::KindOutOfRange {
                                row: y,
                                column: x,
                                kind: kind.index(),
                                kinds: config.kinds(),
                            });
                        }
                        Some(kind)
                    }
                };
                grid.cells[y * width + x] = cell;
            }
        }
        Ok(grid)
    }

    /// Copy the board into `out` as rows of kind indices (`None` for empty)
    pub fn write_rows(&self, out: &mut Vec<Vec<Option<u8>>>) {
        let width = self.width() as usize;
        out.clear();
        out.extend(
            self.cells
                .chunks(width)
                .map(|row| row.iter().map(|cell| cell.map(Kind::index)).collect()),
        );
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width() as usize) {
            for cell in row {
                let c = match cell {
                    Some(kind) => kind.as_char(),
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: u8, height: u8) -> BoardConfig {
        BoardConfig::new(width, height, 7).unwrap()
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(config(6, 4));
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(5, 0), Some(5));
        assert_eq!(grid.index(0, 1), Some(6));
        assert_eq!(grid.index(5, 3), Some(23));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(6, 0), None);
        assert_eq!(grid.index(0, 4), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new(config(6, 6));

        grid.set(0, 0, Some(Kind::new(1)));
        grid.set(4, 3, Some(Kind::new(6)));

        assert_eq!(grid.get(0, 0), Some(Some(Kind::new(1))));
        assert_eq!(grid.get(4, 3), Some(Some(Kind::new(6))));

        assert_eq!(grid.cells[0], Some(Kind::new(1)));
        assert_eq!(grid.cells[3 * 6 + 4], Some(Kind::new(6)));
        assert_eq!(grid.token_count(), 2);
    }

    #[test]
    fn test_column_and_row_order() {
        let grid = Grid::from_ascii(
            config(3, 3),
            "012
             3.4
             56.",
        )
        .unwrap();

        let column: Vec<Cell> = grid.column(1).collect();
        assert_eq!(column, vec![Some(Kind::new(1)), None, Some(Kind::new(6))]);

        let row: Vec<Cell> = grid.row(2).collect();
        assert_eq!(row, vec![Some(Kind::new(5)), Some(Kind::new(6)), None]);
    }

    #[test]
    fn test_from_ascii_errors() {
        let c = config(3, 3);
        assert_eq!(
            Grid::from_ascii(c, "012\n345"),
            Err(GridError::RowCount {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::from_ascii(c, "012\n34\n012"),
            Err(GridError::RowLength {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::from_ascii(c, "012\n3x5\n012"),
            Err(GridError::BadChar {
                row: 1,
                column: 1,
                found: 'x'
            })
        );
        assert_eq!(
            Grid::from_ascii(c, "012\n345\n019"),
            Err(GridError::KindOutOfRange {
                row: 2,
                column: 2,
                kind: 9,
                kinds: 7
            })
        );
    }

    #[test]
    fn test_write_rows() {
        let grid = Grid::from_ascii(config(3, 3), "0.1\n234\n..6").unwrap();
        let mut rows = Vec::new();
        grid.write_rows(&mut rows);
        assert_eq!(
            rows,
            vec![
                vec![Some(0), None, Some(1)],
                vec![Some(2), Some(3), Some(4)],
                vec![None, None, Some(6)],
            ]
        );
    }
}
