//! Plain-data copy of a session for observers
//!
//! Snapshots own their data and hold no references into the session, so a
//! presentation layer or a report writer can keep them across turns.

/// Board contents and session counters at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoardSnapshot {
    pub width: u8,
    pub height: u8,
    pub kinds: u8,
    /// Rows top to bottom; `None` marks an empty cell
    pub rows: Vec<Vec<Option<u8>>>,
    /// FNV-1a 64 over the rows, see [`board_hash`]
    pub board_hash: u64,
    pub score: u32,
    pub moves: u32,
    pub episode_id: u32,
    pub game_over: bool,
}

impl BoardSnapshot {
    /// Recompute `board_hash` from `rows`
    pub fn refresh_hash(&mut self) {
        self.board_hash = board_hash(&self.rows);
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

/// FNV-1a 64-bit hash of board rows, empty cells hashed as `0xff`
pub fn board_hash(rows: &[Vec<Option<u8>>]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in rows.iter().flatten().map(|cell| cell.unwrap_or(0xff)) {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}
