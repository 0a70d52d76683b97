//! Gravity and refill - collapsing columns and planning new tokens
//!
//! After matched tokens are cleared, every column is compacted towards the
//! bottom and the vacated top cells are refilled. Refill kinds are planned on
//! a compacted working copy, bottom to top, and each chosen kind is written to
//! the copy before the next cell is planned. A new token therefore never
//! lands next to a token of its own kind, including other new tokens, which
//! keeps fresh tokens from forming a match on arrival.
//!
//! For presentation layers, [`drop_frames`] describes the same refill as a
//! sequence of one-row moves without touching the real grid.

use arrayvec::ArrayVec;
use rand::Rng;
use smallvec::SmallVec;
use tracing::trace;

use crate::grid::Grid;
use crate::types::{Direction, Kind, Origin, PendingMove, Position, MAX_KINDS};

const KIND_CAPACITY: usize = MAX_KINDS as usize;

/// New kinds queued per column, lowest-landing kind first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropSlots {
    columns: Vec<SmallVec<[Kind; 8]>>,
}

impl DropSlots {
    fn with_width(width: u8) -> Self {
        Self {
            columns: vec![SmallVec::new(); width as usize],
        }
    }

    /// Kinds waiting above column `x`; empty for unknown columns
    pub fn column(&self, x: usize) -> &[Kind] {
        self.columns
            .get(x)
            .map(|column| column.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate `(x, kinds)` for every column
    pub fn columns(&self) -> impl Iterator<Item = (usize, &[Kind])> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(|(x, column)| (x, column.as_slice()))
    }

    /// Total number of queued tokens
    pub fn total(&self) -> usize {
        self.columns.iter().map(|column| column.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|column| column.is_empty())
    }
}

/// Compact every column so tokens rest at the bottom
///
/// Relative order within a column is preserved; empty cells end up above all
/// tokens. Uses a two-pointer pass per column with no allocation.
pub fn pull_down(grid: &mut Grid) {
    let height = grid.height() as i8;
    for x in 0..grid.width() as i8 {
        let mut write_y = height;
        for read_y in (0..height).rev() {
            if let Some(kind) = grid.kind_at(x, read_y) {
                write_y -= 1;
                if write_y != read_y {
                    grid.set(x, write_y, Some(kind));
                    grid.set(x, read_y, None);
                }
            }
        }
    }
}

/// Kinds that may be placed at (x, y) without matching a neighbour
///
/// Excludes the kinds of the up, right, down and left neighbours. Empty
/// neighbours and off-board positions exclude nothing. Falls back to every
/// kind if nothing would remain.
pub fn refill_candidates(grid: &Grid, x: i8, y: i8) -> ArrayVec<Kind, KIND_CAPACITY> {
    let mut excluded = [false; KIND_CAPACITY];
    for direction in Direction::ALL {
        let (dx, dy) = direction.delta();
        if let Some(kind) = grid.kind_at(x + dx, y + dy) {
            excluded[kind.index() as usize] = true;
        }
    }

    let all_kinds = (0..grid.kinds()).map(Kind::new);
    let candidates: ArrayVec<Kind, KIND_CAPACITY> = all_kinds
        .clone()
        .filter(|kind| !excluded[kind.index() as usize])
        .collect();
    if candidates.is_empty() {
        return all_kinds.collect();
    }
    candidates
}

/// Plan the tokens that refill every empty cell
///
/// Works on a compacted copy; `grid` itself is left untouched.
pub fn plan_refill<R: Rng>(grid: &Grid, rng: &mut R) -> DropSlots {
    let mut work = grid.clone();
    pull_down(&mut work);

    let mut slots = DropSlots::with_width(grid.width());
    for x in 0..grid.width() as i8 {
        for y in (0..grid.height() as i8).rev() {
            if work.get(x, y) != Some(None) {
                continue;
            }
            let candidates = refill_candidates(&work, x, y);
            let kind = candidates[rng.random_range(0..candidates.len())];
            work.set(x, y, Some(kind));
            slots.columns[x as usize].push(kind);
        }
    }

    trace!(queued = slots.total(), "planned refill");
    slots
}

/// Compact the grid, then drop each column's queued kinds into its empty cells
///
/// The first kind of a column lands on the lowest empty cell. `slots` is
/// expected to come from [`plan_refill`] on the same grid; surplus kinds are
/// ignored and missing ones leave cells empty.
pub fn apply_refill(grid: &mut Grid, slots: &DropSlots) {
    pull_down(grid);
    for (x, kinds) in slots.columns() {
        let x = x as i8;
        let mut queued = kinds.iter().copied();
        for y in (0..grid.height() as i8).rev() {
            if grid.get(x, y) != Some(None) {
                continue;
            }
            match queued.next() {
                Some(kind) => {
                    grid.set(x, y, Some(kind));
                }
                None => break,
            }
        }
    }
}

/// Describe the refill as animation frames
///
/// Each frame moves every token with an open cell below it down one row
/// (a whole stack falls together), and feeds the next queued kind of each
/// column in from above the top row. Replaying the frames with
/// [`apply_frame`] ends in the same grid as [`apply_refill`].
pub fn drop_frames(grid: &Grid, slots: &DropSlots) -> Vec<Vec<PendingMove>> {
    let mut board = grid.clone();
    let mut queues: Vec<&[Kind]> = (0..grid.width() as usize)
        .map(|x| slots.column(x))
        .collect();
    let mut frames = Vec::new();

    while queues.iter().any(|queue| !queue.is_empty()) {
        let mut frame = Vec::new();
        for (x, queue) in queues.iter_mut().enumerate() {
            let x = x as i8;
            let bottom = board.height() as i8 - 1;

            // Whether the cell below the one being scanned is free this frame.
            let mut below_open = board.get(x, bottom) == Some(None);
            for y in (0..bottom).rev() {
                match board.kind_at(x, y) {
                    Some(kind) if below_open => frame.push(PendingMove {
                        origin: Origin::Cell(Position::new(x, y)),
                        direction: Direction::Down,
                        kind,
                    }),
                    Some(_) => below_open = false,
                    None => below_open = true,
                }
            }

            if below_open {
                if let Some((&kind, rest)) = queue.split_first() {
                    frame.push(PendingMove {
                        origin: Origin::AboveBoard { column: x },
                        direction: Direction::Down,
                        kind,
                    });
                    *queue = rest;
                }
            }
        }

        if frame.is_empty() {
            break;
        }
        apply_frame(&mut board, &frame);
        frames.push(frame);
    }

    frames
}

/// Move tokens one frame along, as described by [`drop_frames`]
///
/// All origins are vacated before any destination is written, so a falling
/// stack moves as a unit.
pub fn apply_frame(grid: &mut Grid, frame: &[PendingMove]) {
    for pending in frame {
        if let Origin::Cell(position) = pending.origin {
            grid.set(position.x, position.y, None);
        }
    }
    for pending in frame {
        let destination = pending.destination();
        grid.set(destination.x, destination.y, Some(pending.kind));
    }
}
