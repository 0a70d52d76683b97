//! Swap validation and apply-with-undo
//!
//! A swap exchanges two 4-adjacent cells. Proposing a swap never touches the
//! grid; the returned descriptor remembers both original cells, so applying
//! and undoing it are O(1) writes instead of whole-board copies.

use crate::grid::Grid;
use crate::types::{Cell, Direction, Position};

/// One side of a swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapToken {
    pub position: Position,
    /// Cell content before the swap
    pub cell: Cell,
    /// Direction this token appears to move
    pub direction: Direction,
}

/// A validated swap between two adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapDescriptor {
    pub first: SwapToken,
    pub second: SwapToken,
}

impl SwapDescriptor {
    /// Both positions involved, in request order
    pub fn positions(&self) -> [Position; 2] {
        [self.first.position, self.second.position]
    }
}

/// Validate a swap between `a` and `b`
///
/// Returns `None` unless both positions are on the grid and share an edge
/// (diagonal and distant swaps are illegal).
///
/// # Examples
///
/// ```
/// use tile_crush_core::{propose_swap, BoardConfig, Grid};
/// use tile_crush_core::types::{Direction, Position};
///
/// let grid = Grid::new(BoardConfig::default());
/// assert!(propose_swap(&grid, Position::new(0, 0), Position::new(1, 1)).is_none());
///
/// let swap = propose_swap(&grid, Position::new(0, 0), Position::new(1, 0)).unwrap();
/// assert_eq!(swap.first.direction, Direction::Right);
/// assert_eq!(swap.second.direction, Direction::Left);
/// ```
pub fn propose_swap(grid: &Grid, a: Position, b: Position) -> Option<SwapDescriptor> {
    let first_cell = grid.cell(a)?;
    let second_cell = grid.cell(b)?;
    let direction = a.direction_to(b)?;

    Some(SwapDescriptor {
        first: SwapToken {
            position: a,
            cell: first_cell,
            direction,
        },
        second: SwapToken {
            position: b,
            cell: second_cell,
            direction: direction.opposite(),
        },
    })
}

impl Grid {
    /// Exchange the two cells described by `swap`
    pub fn apply_swap(&mut self, swap: &SwapDescriptor) {
        let SwapDescriptor { first, second } = *swap;
        self.set(first.position.x, first.position.y, second.cell);
        self.set(second.position.x, second.position.y, first.cell);
    }

    /// Restore both cells to their contents at proposal time
    pub fn undo_swap(&mut self, swap: &SwapDescriptor) {
        let SwapDescriptor { first, second } = *swap;
        self.set(first.position.x, first.position.y, first.cell);
        self.set(second.position.x, second.position.y, second.cell);
    }
}
