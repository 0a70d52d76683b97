//! Command-line flags for the headless simulator.

use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::core::BoardConfig;
use crate::engine::Policy;
use crate::types::{DEFAULT_HEIGHT, DEFAULT_KINDS, DEFAULT_WIDTH};

pub const USAGE: &str = "\
usage: tile-crush [--width N] [--height N] [--kinds N] [--seed N] [--episodes N]
                  [--max-moves N] [--policy first|random] [--json] [--board]";

pub const DEFAULT_SEED: u64 = 1;
pub const DEFAULT_EPISODES: u32 = 1;
pub const DEFAULT_MAX_MOVES: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub board: BoardConfig,
    pub seed: u64,
    pub episodes: u32,
    pub max_moves: u32,
    pub policy: Policy,
    /// One JSON object per episode instead of a text line
    pub json: bool,
    /// Include the final board in each report
    pub show_board: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            seed: DEFAULT_SEED,
            episodes: DEFAULT_EPISODES,
            max_moves: DEFAULT_MAX_MOVES,
            policy: Policy::First,
            json: false,
            show_board: false,
        }
    }
}

/// Parse the arguments after the program name.
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String]) -> Result<Option<SimConfig>> {
    let mut config = SimConfig::default();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut kinds = DEFAULT_KINDS;

    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => return Ok(None),
            "--json" => config.json = true,
            "--board" => config.show_board = true,
            "--width" | "--height" | "--kinds" | "--seed" | "--episodes" | "--max-moves"
            | "--policy" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                match flag {
                    "--width" => width = number(flag, v)?,
                    "--height" => height = number(flag, v)?,
                    "--kinds" => kinds = number(flag, v)?,
                    "--seed" => config.seed = number(flag, v)?,
                    "--episodes" => config.episodes = number(flag, v)?,
                    "--max-moves" => config.max_moves = number(flag, v)?,
                    _ => {
                        config.policy = Policy::from_str(v)
                            .ok_or_else(|| anyhow!("invalid --policy value: {}", v))?;
                    }
                }
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    config.board = BoardConfig::new(width, height, kinds).context("invalid board settings")?;
    Ok(Some(config))
}

fn number<T: FromStr>(flag: &str, v: &str) -> Result<T> {
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}
