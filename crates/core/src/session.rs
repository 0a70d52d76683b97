//! Session module - one play session around a single grid
//!
//! The session owns the grid, its random source, the score and the terminal
//! flag. Swaps go through [`Session::swap`], which validates, applies and
//! either undoes the swap (no match) or hands back a [`Turn`]: an iterator
//! over the cascade steps the swap triggers. Callers that do not animate can
//! use [`Session::play`], which resolves the whole turn at once.

use rand::Rng;
use tracing::debug;

use crate::cascade::{cascade_step, populate, resolve_cascade, CascadeStep, CascadeSummary};
use crate::config::BoardConfig;
use crate::error::{ConfigError, SwapError};
use crate::grid::Grid;
use crate::matching::has_matches;
use crate::oracle::has_any_legal_move;
use crate::rng::{seeded, SessionRng};
use crate::snapshot::BoardSnapshot;
use crate::swap::{propose_swap, SwapDescriptor};
use crate::types::Position;

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session<R = SessionRng> {
    grid: Grid,
    rng: R,
    score: u32,
    /// Accepted swaps this episode
    moves: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    game_over: bool,
    /// Accepted turn whose cascade has not reached rest yet.
    pending: Option<PendingTurn>,
    last_turn: Option<TurnSummary>,
}

/// Swap and running totals of the turn in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTurn {
    descriptor: SwapDescriptor,
    progress: CascadeSummary,
}

/// Outcome of a legal swap request
#[derive(Debug)]
pub enum SwapOutcome<'a, R: Rng> {
    /// The swap matched nothing and has already been undone
    Rejected(SwapDescriptor),
    /// The swap matched; iterate the turn to resolve its cascade
    Accepted(Turn<'a, R>),
}

/// Totals for one swap request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummary {
    pub descriptor: SwapDescriptor,
    pub accepted: bool,
    pub steps: u32,
    pub points: u32,
    pub cleared: usize,
    /// Terminal flag after the turn
    pub game_over: bool,
}

impl Session<SessionRng> {
    /// Create a session with the default ChaCha8 source seeded from `seed`
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, seeded(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Create a session around an injected random source
    ///
    /// The board is filled and settled before this returns.
    pub fn with_rng(config: BoardConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = Self {
            grid: Grid::new(config),
            rng,
            score: 0,
            moves: 0,
            episode_id: 0,
            game_over: false,
            pending: None,
            last_turn: None,
        };
        session.deal();
        Ok(session)
    }

    /// Discard the board and start a new episode from the same random stream
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.score = 0;
        self.moves = 0;
        self.pending = None;
        self.last_turn = None;
        self.deal();
    }

    fn deal(&mut self) {
        self.grid.clear();
        populate(&mut self.grid, &mut self.rng);
        self.game_over = !has_any_legal_move(&self.grid);
        debug!(
            episode = self.episode_id,
            game_over = self.game_over,
            "dealt board"
        );
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> BoardConfig {
        self.grid.config()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// True once no swap can produce a match
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn last_turn(&self) -> Option<&TurnSummary> {
        self.last_turn.as_ref()
    }

    /// Validate a swap without applying it
    pub fn propose_swap(&self, a: Position, b: Position) -> Option<SwapDescriptor> {
        propose_swap(&self.grid, a, b)
    }

    /// Attempt to swap the tokens at `a` and `b`
    ///
    /// Errors leave the board untouched. A legal swap that matches nothing is
    /// undone before returning [`SwapOutcome::Rejected`].
    pub fn swap(&mut self, a: Position, b: Position) -> Result<SwapOutcome<'_, R>, SwapError> {
        self.settle();
        if self.game_over {
            return Err(SwapError::GameOver);
        }
        for position in [a, b] {
            if !self.grid.contains(position) {
                return Err(SwapError::OutOfBounds(position));
            }
        }
        let descriptor = propose_swap(&self.grid, a, b).ok_or(SwapError::NotAdjacent { a, b })?;

        self.grid.apply_swap(&descriptor);
        if !has_matches(&self.grid) {
            self.grid.undo_swap(&descriptor);
            debug!(
                %a,
                %b,
                direction = descriptor.first.direction.as_str(),
                "swap rejected"
            );
            self.last_turn = Some(TurnSummary {
                descriptor,
                accepted: false,
                steps: 0,
                points: 0,
                cleared: 0,
                game_over: self.game_over,
            });
            return Ok(SwapOutcome::Rejected(descriptor));
        }

        self.moves += 1;
        self.pending = Some(PendingTurn {
            descriptor,
            progress: CascadeSummary::default(),
        });
        Ok(SwapOutcome::Accepted(Turn {
            session: self,
            descriptor,
            summary: CascadeSummary::default(),
            finished: false,
        }))
    }

    /// Swap and resolve the whole cascade in one call
    pub fn play(&mut self, a: Position, b: Position) -> Result<TurnSummary, SwapError> {
        match self.swap(a, b)? {
            SwapOutcome::Rejected(descriptor) => Ok(TurnSummary {
                descriptor,
                accepted: false,
                steps: 0,
                points: 0,
                cleared: 0,
                game_over: self.game_over,
            }),
            SwapOutcome::Accepted(turn) => Ok(turn.finish()),
        }
    }

    /// Resolve any cascade left pending by a dropped [`Turn`]
    ///
    /// Points earned this way are added to the score, and the turn is
    /// recorded in [`Session::last_turn`] with the steps it had already
    /// yielded. Returns only the steps resolved here.
    pub fn settle(&mut self) -> CascadeSummary {
        let Some(pending) = self.pending.as_mut() else {
            return CascadeSummary::default();
        };
        let summary = resolve_cascade(&mut self.grid, &mut self.rng);
        pending.progress.merge(summary);
        self.score = self.score.saturating_add(summary.points);
        self.end_turn();
        summary
    }

    /// Refresh the terminal flag and record the pending turn, if any
    fn end_turn(&mut self) {
        self.game_over = !has_any_legal_move(&self.grid);
        if let Some(pending) = self.pending.take() {
            self.last_turn = Some(TurnSummary {
                descriptor: pending.descriptor,
                accepted: true,
                steps: pending.progress.steps,
                points: pending.progress.points,
                cleared: pending.progress.cleared,
                game_over: self.game_over,
            });
        }
        if self.game_over {
            debug!(score = self.score, moves = self.moves, "no legal moves left");
        }
    }

    /// Copy the board and counters into `out`, reusing its allocations
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.kinds = self.grid.kinds();
        self.grid.write_rows(&mut out.rows);
        out.refresh_hash();
        out.score = self.score;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

/// Cascade of one accepted swap, resolved step by step
///
/// Each yielded step has already been applied to the board and its points
/// added to the session score. When the iterator is exhausted the terminal
/// flag is refreshed. Dropping a turn early is allowed; the next swap settles
/// the rest.
#[derive(Debug)]
pub struct Turn<'a, R: Rng> {
    session: &'a mut Session<R>,
    descriptor: SwapDescriptor,
    summary: CascadeSummary,
    finished: bool,
}

impl<R: Rng> Turn<'_, R> {
    /// The swap that started this turn
    pub fn descriptor(&self) -> &SwapDescriptor {
        &self.descriptor
    }

    /// Totals of the steps yielded so far
    pub fn progress(&self) -> CascadeSummary {
        self.summary
    }

    /// Board as of the last yielded step
    pub fn grid(&self) -> &Grid {
        &self.session.grid
    }

    /// Resolve the remaining steps and return the turn's totals
    pub fn finish(mut self) -> TurnSummary {
        self.by_ref().for_each(drop);
        TurnSummary {
            descriptor: self.descriptor,
            accepted: true,
            steps: self.summary.steps,
            points: self.summary.points,
            cleared: self.summary.cleared,
            game_over: self.session.game_over,
        }
    }
}

impl<R: Rng> Iterator for Turn<'_, R> {
    type Item = CascadeStep;

    fn next(&mut self) -> Option<CascadeStep> {
        if self.finished {
            return None;
        }
        let session = &mut *self.session;
        match cascade_step(&mut session.grid, &mut session.rng, self.summary.steps) {
            Some(step) => {
                session.score = session.score.saturating_add(step.points);
                self.summary.record(&step);
                if let Some(pending) = session.pending.as_mut() {
                    pending.progress = self.summary;
                }
                Some(step)
            }
            None => {
                self.finished = true;
                session.end_turn();
                None
            }
        }
    }
}

impl<R: Rng> std::iter::FusedIterator for Turn<'_, R> {}
