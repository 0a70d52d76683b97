//! Autoplay - drive a session with a simple move policy until it ends.

use rand::Rng;
use tracing::{debug, warn};

use tile_crush_core::Session;

use crate::hint::{first_legal_swap, legal_swaps, Swap};

/// How the next swap is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// First legal swap in scan order
    #[default]
    First,
    /// Uniformly random legal swap
    Random,
}

impl Policy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first" => Some(Policy::First),
            "random" => Some(Policy::Random),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Policy::First => "first",
            Policy::Random => "random",
        }
    }
}

/// Totals for one played episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EpisodeStats {
    pub episode_id: u32,
    pub moves: u32,
    pub score: u32,
    pub cascade_steps: u32,
    /// Most steps triggered by a single swap
    pub longest_cascade: u32,
    pub cleared: usize,
    /// False when the episode stopped at the move limit
    pub game_over: bool,
}

/// Pick the next swap for `session` according to `policy`.
///
/// Returns `None` when no swap can form a run.
pub fn choose_swap<S: Rng, R: Rng>(
    session: &Session<S>,
    policy: Policy,
    rng: &mut R,
) -> Option<Swap> {
    let mut scratch = session.grid().clone();
    match policy {
        Policy::First => first_legal_swap(&mut scratch),
        Policy::Random => {
            let swaps = legal_swaps(&mut scratch);
            if swaps.is_empty() {
                return None;
            }
            Some(swaps[rng.random_range(0..swaps.len())])
        }
    }
}

/// Play until the session is over or `max_moves` swaps have been accepted.
///
/// `rng` only drives the policy; board randomness stays with the session.
pub fn play_episode<S: Rng, R: Rng>(
    session: &mut Session<S>,
    policy: Policy,
    max_moves: u32,
    rng: &mut R,
) -> EpisodeStats {
    let mut stats = EpisodeStats {
        episode_id: session.episode_id(),
        ..EpisodeStats::default()
    };

    while !session.is_over() && session.moves() < max_moves {
        let Some(swap) = choose_swap(session, policy, rng) else {
            warn!(episode = stats.episode_id, "no legal swap found on a live board");
            break;
        };
        match session.play(swap.from, swap.to) {
            Ok(turn) if turn.accepted => {
                stats.cascade_steps += turn.steps;
                stats.longest_cascade = stats.longest_cascade.max(turn.steps);
                stats.cleared += turn.cleared;
            }
            Ok(_) => {
                warn!(from = %swap.from, to = %swap.to, "chosen swap was rejected");
                break;
            }
            Err(err) => {
                warn!(code = err.code(), %err, "swap failed");
                break;
            }
        }
    }

    stats.moves = session.moves();
    stats.score = session.score();
    stats.game_over = session.is_over();
    debug!(
        episode = stats.episode_id,
        moves = stats.moves,
        score = stats.score,
        game_over = stats.game_over,
        policy = policy.as_str(),
        "episode finished"
    );
    stats
}
