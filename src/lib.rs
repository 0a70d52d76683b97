//! Tile Crush (workspace facade crate).
//!
//! Re-exports the board rules and drivers from the crates under `crates/` as
//! `tile_crush::{core, engine, types}`, and hosts the headless simulator's
//! argument parsing and report formatting.

pub mod cli;
pub mod report;

pub use tile_crush_core as core;
pub use tile_crush_engine as engine;
pub use tile_crush_types as types;
