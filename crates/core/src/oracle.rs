//! Move-possibility oracle - is any matching swap left?
//!
//! Instead of trying every swap, the oracle looks for three same-kind tokens
//! arranged one swap away from a straight triple. Relative to a scanned
//! corner cell `+`, pattern `{(0,1),(1,0),(2,0)}` reads (offsets are `(dx, dy)`):
//!
//! ```text
//!     + B C
//!     A
//! ```
//!
//! `A` can swap up into `+` to complete `A B C`. Six patterns cover a token
//! beside a pair or a split pair; the last two cover a token in line with a
//! pair across a one-cell gap. Every pattern is also checked transposed, which
//! turns each horizontal setup into its vertical twin. Together the sixteen
//! checks cover every way a single swap can complete a run.

use crate::grid::Grid;
use crate::types::{Kind, Position};

/// Offset triples, one swap away from a straight triple
pub const ONE_OFF_PATTERNS: [[(i8, i8); 3]; 8] = [
    [(0, 1), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 0)],
    [(0, 0), (1, 1), (2, 0)],
    [(0, 1), (1, 0), (2, 1)],
    [(0, 0), (1, 0), (2, 1)],
    [(0, 0), (1, 1), (2, 1)],
    [(0, 0), (0, 2), (0, 3)],
    [(0, 0), (0, 1), (0, 3)],
];

/// A located one-off pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OneOff {
    /// Scanned corner cell the offsets are relative to
    pub origin: Position,
    /// Index into [`ONE_OFF_PATTERNS`]
    pub pattern: usize,
    /// Whether the offsets were applied as `(dy, dx)`
    pub transposed: bool,
    pub kind: Kind,
}

impl OneOff {
    /// The three cells that hold the matching kind
    pub fn cells(&self) -> [Position; 3] {
        ONE_OFF_PATTERNS[self.pattern].map(|offset| self.origin_offset(offset))
    }

    fn origin_offset(&self, (dx, dy): (i8, i8)) -> Position {
        if self.transposed {
            self.origin.offset(dy, dx)
        } else {
            self.origin.offset(dx, dy)
        }
    }
}

/// True if at least one single swap would produce a match
///
/// Never mutates the grid. `false` is the terminal ("no moves") state.
pub fn has_any_legal_move(grid: &Grid) -> bool {
    find_one_off(grid).is_some()
}

/// First one-off pattern in scan order (columns outer, rows inner)
pub fn find_one_off(grid: &Grid) -> Option<OneOff> {
    for x in 0..grid.width() as i8 {
        for y in 0..grid.height() as i8 {
            for (pattern, offsets) in ONE_OFF_PATTERNS.iter().enumerate() {
                for transposed in [false, true] {
                    if let Some(kind) = same_kind(grid, x, y, offsets, transposed) {
                        return Some(OneOff {
                            origin: Position::new(x, y),
                            pattern,
                            transposed,
                            kind,
                        });
                    }
                }
            }
        }
    }
    None
}

/// Kind shared by all three cells, if they all hold the same token kind
///
/// Off-board cells and empty cells never qualify.
#[inline]
fn same_kind(
    grid: &Grid,
    x: i8,
    y: i8,
    offsets: &[(i8, i8); 3],
    transposed: bool,
) -> Option<Kind> {
    let at = |(dx, dy): (i8, i8)| {
        if transposed {
            grid.kind_at(x + dy, y + dx)
        } else {
            grid.kind_at(x + dx, y + dy)
        }
    };

    let kind = at(offsets[0])?;
    (at(offsets[1]) == Some(kind) && at(offsets[2]) == Some(kind)).then_some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;

    fn grid(text: &str) -> Grid {
        Grid::from_ascii(BoardConfig::new(4, 4, 5).unwrap(), text).unwrap()
    }

    #[test]
    fn test_pattern_found_as_written() {
        let g = grid(
            ".00.
             0...
             ....
             ....",
        );
        let found = find_one_off(&g).unwrap();
        assert_eq!(found.pattern, 0);
        assert!(!found.transposed);
        assert_eq!(
            found.cells(),
            [Position::new(0, 1), Position::new(1, 0), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_transposed_pattern() {
        let g = grid(
            "....
             ....
             .1..
             1...",
        );
        assert!(!has_any_legal_move(&g));

        let g = grid(
            "....
             .1..
             1...
             1...",
        );
        let found = find_one_off(&g).unwrap();
        assert!(found.transposed);
        assert_eq!(found.kind, Kind::new(1));
    }

    #[test]
    fn test_gap_patterns() {
        let g = grid(
            "2.22
             ....
             ....
             ....",
        );
        let found = find_one_off(&g).unwrap();
        assert_eq!(found.pattern, 6);
        assert!(found.transposed);
    }

    #[test]
    fn test_empty_cells_never_match() {
        let g = grid(
            "....
             ....
             ....
             ....",
        );
        assert!(!has_any_legal_move(&g));
    }
}
