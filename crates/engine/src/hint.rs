//! Exhaustive swap search.
//!
//! Tries every right and down neighbour swap with apply-with-undo and a local
//! run check through the two touched cells. The oracle in core answers the
//! yes/no question faster; this module names the actual swaps.

use tile_crush_core::matching::{run_length_through, Orientation};
use tile_crush_core::{propose_swap, Grid, SwapDescriptor};
use tile_crush_types::{Position, MIN_RUN};

/// A swap request between two adjacent positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Swap {
    pub from: Position,
    pub to: Position,
}

impl Swap {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// Whether applying `swap` would form a run through either touched cell.
///
/// The grid is restored before returning.
pub fn swap_completes_run(grid: &mut Grid, swap: &SwapDescriptor) -> bool {
    grid.apply_swap(swap);
    let completes = swap.positions().into_iter().any(|position| {
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .any(|orientation| run_length_through(grid, position, orientation) >= MIN_RUN)
    });
    grid.undo_swap(swap);
    completes
}

/// Every swap that would form a run, in scan order (columns outer, rows inner;
/// right neighbour before down neighbour).
///
/// Swaps between two tokens of the same kind are skipped; they change nothing.
pub fn legal_swaps(grid: &mut Grid) -> Vec<Swap> {
    let mut out = Vec::new();
    for_each_candidate(grid, |swap| {
        out.push(swap);
        true
    });
    out
}

/// First entry of [`legal_swaps`], without collecting the rest.
pub fn first_legal_swap(grid: &mut Grid) -> Option<Swap> {
    let mut found = None;
    for_each_candidate(grid, |swap| {
        found = Some(swap);
        false
    });
    found
}

/// Calls `visit` for each legal swap until it returns `false`.
fn for_each_candidate(grid: &mut Grid, mut visit: impl FnMut(Swap) -> bool) {
    for x in 0..grid.width() as i8 {
        for y in 0..grid.height() as i8 {
            let from = Position::new(x, y);
            for to in [from.offset(1, 0), from.offset(0, 1)] {
                let Some(descriptor) = propose_swap(grid, from, to) else {
                    continue;
                };
                if descriptor.first.cell == descriptor.second.cell {
                    continue;
                }
                if swap_completes_run(grid, &descriptor) && !visit(Swap::new(from, to)) {
                    return;
                }
            }
        }
    }
}
