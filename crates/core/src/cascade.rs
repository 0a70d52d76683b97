//! Cascade resolution - detect, clear, refill, repeat
//!
//! One cascade step detects every run, clears the matched cells, plans and
//! applies a refill, and reports what happened. Steps repeat until the grid
//! is at rest. [`Cascade`] exposes the loop as a lazy iterator so a caller
//! can animate each step before asking for the next one.

use std::iter::FusedIterator;

use rand::Rng;
use tracing::debug;

use crate::gravity::{apply_refill, drop_frames, plan_refill, DropSlots};
use crate::grid::Grid;
use crate::matching::{find_matches, RemoveSet};
use crate::scoring::batch_score;
use crate::types::{PendingMove, Position};

/// Points earned by one remove-set, anchored at that set's first position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreCallout {
    pub position: Position,
    pub points: u32,
}

/// Result of one detect-clear-refill iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeStep {
    /// 0 for the step triggered directly by the swap
    pub index: u32,
    pub matches: Vec<RemoveSet>,
    /// One per entry of `matches`, in the same order
    pub callouts: Vec<ScoreCallout>,
    pub points: u32,
    /// Distinct cells emptied (overlapping runs count shared cells once)
    pub cleared: usize,
    pub drop_slots: DropSlots,
    /// Fall animation for the refill, see [`drop_frames`]
    pub falls: Vec<Vec<PendingMove>>,
}

/// Totals of a fully resolved cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeSummary {
    pub steps: u32,
    pub points: u32,
    pub cleared: usize,
}

impl CascadeSummary {
    /// Fold one step into the totals
    pub fn record(&mut self, step: &CascadeStep) {
        self.steps += 1;
        self.points = self.points.saturating_add(step.points);
        self.cleared += step.cleared;
    }

    /// Add another summary's totals to this one
    pub fn merge(&mut self, other: CascadeSummary) {
        self.steps += other.steps;
        self.points = self.points.saturating_add(other.points);
        self.cleared += other.cleared;
    }
}

/// Run a single cascade step
///
/// Returns `None` (and leaves the grid untouched) when the grid is at rest.
pub fn cascade_step<R: Rng>(grid: &mut Grid, rng: &mut R, index: u32) -> Option<CascadeStep> {
    let matches = find_matches(grid);
    if matches.is_empty() {
        return None;
    }

    let mut cleared = 0;
    for position in matches.iter().flat_map(RemoveSet::positions) {
        if grid.is_occupied(position.x, position.y) {
            grid.set(position.x, position.y, None);
            cleared += 1;
        }
    }

    let callouts = matches
        .iter()
        .map(|set| ScoreCallout {
            position: set.anchor(),
            points: set.score(),
        })
        .collect();
    let points = batch_score(&matches);

    let drop_slots = plan_refill(grid, rng);
    let falls = drop_frames(grid, &drop_slots);
    apply_refill(grid, &drop_slots);

    debug!(
        step = index,
        sets = matches.len(),
        cleared,
        points,
        "cascade step"
    );

    Some(CascadeStep {
        index,
        matches,
        callouts,
        points,
        cleared,
        drop_slots,
        falls,
    })
}

/// Lazy sequence of cascade steps over a borrowed grid
///
/// Finite and non-restartable: once a step finds no match the iterator is
/// exhausted for good, and the grid is at rest.
#[derive(Debug)]
pub struct Cascade<'a, R> {
    grid: &'a mut Grid,
    rng: &'a mut R,
    next_index: u32,
    finished: bool,
}

impl<'a, R: Rng> Cascade<'a, R> {
    pub fn new(grid: &'a mut Grid, rng: &'a mut R) -> Self {
        Self {
            grid,
            rng,
            next_index: 0,
            finished: false,
        }
    }

    /// Whether the grid has reached rest
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Drain the remaining steps, keeping only the totals
    pub fn summarize(self) -> CascadeSummary {
        self.fold(CascadeSummary::default(), |mut summary, step| {
            summary.record(&step);
            summary
        })
    }
}

impl<R: Rng> Iterator for Cascade<'_, R> {
    type Item = CascadeStep;

    fn next(&mut self) -> Option<CascadeStep> {
        if self.finished {
            return None;
        }
        match cascade_step(self.grid, self.rng, self.next_index) {
            Some(step) => {
                self.next_index += 1;
                Some(step)
            }
            None => {
                self.finished = true;
                None
            }
        }
    }
}

impl<R: Rng> FusedIterator for Cascade<'_, R> {}

/// Resolve every cascade step until the grid is at rest
pub fn resolve_cascade<R: Rng>(grid: &mut Grid, rng: &mut R) -> CascadeSummary {
    Cascade::new(grid, rng).summarize()
}

/// Fill every empty cell, then resolve any matches the fill produced
///
/// Used for the initial board. The returned points are normally discarded
/// by callers.
pub fn populate<R: Rng>(grid: &mut Grid, rng: &mut R) -> CascadeSummary {
    let slots = plan_refill(grid, rng);
    apply_refill(grid, &slots);
    resolve_cascade(grid, rng)
}
