//! Match detection - runs of three or more identical tokens
//!
//! The detector scans every cell once per orientation and only starts a run
//! where one actually begins (the previous cell in that direction holds a
//! different kind, is empty, or is off the board). A run of four is therefore
//! reported once with four positions, never as two overlapping triples.
//!
//! Horizontal and vertical runs are reported independently: an L or T shape
//! produces two remove-sets that share a cell. Clearing is idempotent, so
//! consumers simply empty every listed position.

use smallvec::SmallVec;

use crate::grid::Grid;
use crate::scoring::remove_set_score;
use crate::types::{Kind, Position, MIN_RUN};

/// Axis a run lies along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Offset of the next cell along the run
    #[inline]
    fn delta(self) -> (i8, i8) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A maximal run of at least three same-kind tokens in one row or column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoveSet {
    kind: Kind,
    orientation: Orientation,
    /// Ordered from the run start (leftmost / topmost)
    positions: SmallVec<[Position; 8]>,
}

impl RemoveSet {
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Remove-sets are never empty; provided for API completeness
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// First position of the run, where its score callout is anchored
    pub fn anchor(&self) -> Position {
        self.positions[0]
    }

    /// Points this run is worth on its own
    pub fn score(&self) -> u32 {
        remove_set_score(self.len())
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}

/// Find every run on the grid
///
/// Returns an empty vector when the grid is at rest.
pub fn find_matches(grid: &Grid) -> Vec<RemoveSet> {
    let mut out = Vec::new();
    find_matches_into(grid, &mut out);
    out
}

/// Same as [`find_matches`], reusing the caller's buffer
///
/// `out` is cleared first.
pub fn find_matches_into(grid: &Grid, out: &mut Vec<RemoveSet>) {
    out.clear();
    for x in 0..grid.width() as i8 {
        for y in 0..grid.height() as i8 {
            let Some(kind) = grid.kind_at(x, y) else {
                continue;
            };
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                if let Some(set) = run_starting_at(grid, x, y, kind, orientation) {
                    out.push(set);
                }
            }
        }
    }
}

/// True if any run exists; stops at the first one
pub fn has_matches(grid: &Grid) -> bool {
    (0..grid.width() as i8).any(|x| {
        (0..grid.height() as i8).any(|y| {
            grid.kind_at(x, y).is_some_and(|kind| {
                [Orientation::Horizontal, Orientation::Vertical]
                    .into_iter()
                    .any(|orientation| run_length(grid, x, y, kind, orientation) >= MIN_RUN)
            })
        })
    })
}

/// Length of the same-kind run passing through (x, y) along `orientation`
///
/// Counts in both directions from the cell. Used for local checks after a
/// single swap, where a full scan would be wasted work.
pub fn run_length_through(grid: &Grid, position: Position, orientation: Orientation) -> usize {
    let Some(kind) = grid.kind_at(position.x, position.y) else {
        return 0;
    };
    let target = Some(Some(kind));
    let (dx, dy) = orientation.delta();

    let mut length = 1;
    let mut p = position.offset(dx, dy);
    while grid.cell(p) == target {
        length += 1;
        p = p.offset(dx, dy);
    }
    let mut p = position.offset(-dx, -dy);
    while grid.cell(p) == target {
        length += 1;
        p = p.offset(-dx, -dy);
    }
    length
}

/// Length of the run starting at (x, y), or 0 if no run starts there
fn run_length(grid: &Grid, x: i8, y: i8, kind: Kind, orientation: Orientation) -> usize {
    let target = Some(Some(kind));
    let (dx, dy) = orientation.delta();

    // Only the first cell of a run starts it.
    if grid.get(x - dx, y - dy) == target {
        return 0;
    }

    let mut length = 1;
    while grid.get(x + dx * length as i8, y + dy * length as i8) == target {
        length += 1;
    }
    length
}

fn run_starting_at(
    grid: &Grid,
    x: i8,
    y: i8,
    kind: Kind,
    orientation: Orientation,
) -> Option<RemoveSet> {
    let length = run_length(grid, x, y, kind, orientation);
    if length < MIN_RUN {
        return None;
    }

    let (dx, dy) = orientation.delta();
    let positions = (0..length as i8)
        .map(|i| Position::new(x + dx * i, y + dy * i))
        .collect();
    Some(RemoveSet {
        kind,
        orientation,
        positions,
    })
}
