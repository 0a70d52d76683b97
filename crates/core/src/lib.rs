//! Core board logic - pure, deterministic, and testable
//!
//! This crate contains the match-3 board rules: the grid, run detection,
//! gravity and refill planning, the move-possibility oracle and the
//! swap/cascade session. It has no dependencies on rendering, input or I/O.
//!
//! - **Deterministic**: the same seed produces the same boards and cascades
//! - **Headless**: every operation is a plain function or method on owned data
//!
//! # Module Structure
//!
//! - [`grid`]: W x H token storage addressed by `(x, y)` with `y` growing downwards
//! - [`matching`]: runs of three or more same-kind tokens, as remove-sets
//! - [`gravity`]: column compaction and neighbour-aware refill planning
//! - [`oracle`]: whether any single swap can still produce a match
//! - [`cascade`]: detect, clear, refill, repeat until the board is at rest
//! - [`session`]: one play session (score, moves, terminal flag) around a grid
//!
//! # Rules
//!
//! - A swap exchanges two edge-adjacent tokens and is kept only if it forms a run
//! - A run of length `n >= 3` scores `10 + (n - 3) * 10`
//! - Refilled tokens never land next to a token of their own kind
//! - The session is over when no single swap can form a run
//!
//! # Example
//!
//! ```
//! use tile_crush_core::{BoardConfig, Session};
//!
//! let session = Session::new(BoardConfig::default(), 12345).unwrap();
//! assert!(session.grid().is_full());
//! assert_eq!(session.score(), 0);
//! ```

pub mod cascade;
pub mod config;
pub mod error;
pub mod gravity;
pub mod grid;
pub mod matching;
pub mod oracle;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod swap;

pub use tile_crush_types as types;

// Re-export commonly used types for convenience
pub use cascade::{populate, resolve_cascade, Cascade, CascadeStep, CascadeSummary, ScoreCallout};
pub use config::BoardConfig;
pub use error::{ConfigError, GridError, SwapError};
pub use gravity::{apply_refill, drop_frames, plan_refill, pull_down, DropSlots};
pub use grid::Grid;
pub use matching::{find_matches, has_matches, Orientation, RemoveSet};
pub use oracle::{find_one_off, has_any_legal_move, OneOff};
pub use rng::{seeded, SessionRng};
pub use scoring::{batch_score, remove_set_score};
pub use session::{Session, SwapOutcome, Turn, TurnSummary};
pub use snapshot::{board_hash, BoardSnapshot};
pub use swap::{propose_swap, SwapDescriptor, SwapToken};
