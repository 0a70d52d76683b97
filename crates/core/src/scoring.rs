//! Scoring module - points for cleared runs
//!
//! Every remove-set is scored on its own:
//! `MATCH_BASE_SCORE + MATCH_EXTRA_SCORE * (len - 3)`. A cascade step sums
//! the scores of all sets it clears. There is no chain multiplier; later
//! cascade steps score exactly like the first.

use crate::matching::RemoveSet;
use crate::types::{MATCH_BASE_SCORE, MATCH_EXTRA_SCORE, MIN_RUN};

/// Points for a single run of `len` tokens (0 below the minimum run length)
pub fn remove_set_score(len: usize) -> u32 {
    if len < MIN_RUN {
        return 0;
    }
    let extra = u32::try_from(len - MIN_RUN).unwrap_or(u32::MAX);
    MATCH_BASE_SCORE.saturating_add(MATCH_EXTRA_SCORE.saturating_mul(extra))
}

/// Sum of the scores of every set in a batch
pub fn batch_score(sets: &[RemoveSet]) -> u32 {
    sets.iter()
        .fold(0u32, |total, set| total.saturating_add(set.score()))
}
