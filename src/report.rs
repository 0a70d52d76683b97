//! Per-episode reports printed by the simulator.

use serde::Serialize;

use crate::cli::SimConfig;
use crate::core::BoardSnapshot;
use crate::engine::EpisodeStats;
use crate::types::Kind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeReport {
    pub episode: u32,
    pub seed: u64,
    pub policy: &'static str,
    pub width: u8,
    pub height: u8,
    pub kinds: u8,
    pub moves: u32,
    pub score: u32,
    pub cascade_steps: u32,
    pub longest_cascade: u32,
    pub cleared: usize,
    pub game_over: bool,
    pub board_hash: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<Vec<String>>,
}

impl EpisodeReport {
    pub fn new(config: &SimConfig, stats: &EpisodeStats, snapshot: &BoardSnapshot) -> Self {
        Self {
            episode: stats.episode_id,
            seed: config.seed,
            policy: config.policy.as_str(),
            width: snapshot.width,
            height: snapshot.height,
            kinds: snapshot.kinds,
            moves: stats.moves,
            score: stats.score,
            cascade_steps: stats.cascade_steps,
            longest_cascade: stats.longest_cascade,
            cleared: stats.cleared,
            game_over: stats.game_over,
            board_hash: snapshot.board_hash,
            board: config.show_board.then(|| board_rows(snapshot)),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Human-readable summary; the board (if any) follows on its own lines.
    pub fn to_text(&self) -> String {
        let end = if self.game_over { "no moves" } else { "move limit" };
        let mut out = format!(
            "episode {}: score {} in {} moves ({} steps, longest {}, {} cleared), {}, hash {:016x}",
            self.episode,
            self.score,
            self.moves,
            self.cascade_steps,
            self.longest_cascade,
            self.cleared,
            end,
            self.board_hash,
        );
        for row in self.board.iter().flatten() {
            out.push('\n');
            out.push_str(row);
        }
        out
    }
}

/// Board rows as text, one hex digit per token and `.` for empty cells.
pub fn board_rows(snapshot: &BoardSnapshot) -> Vec<String> {
    snapshot
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map_or('.', |k| Kind::new(k).as_char()))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> BoardSnapshot {
        let mut s = BoardSnapshot {
            width: 3,
            height: 2,
            kinds: 5,
            rows: vec![vec![Some(0), None, Some(4)], vec![Some(1), Some(2), Some(3)]],
            ..BoardSnapshot::default()
        };
        s.refresh_hash();
        s
    }

    #[test]
    fn test_board_rows() {
        assert_eq!(board_rows(&snapshot()), vec!["0.4", "123"]);
    }

    #[test]
    fn test_json_omits_board_unless_requested() {
        let stats = EpisodeStats {
            moves: 2,
            score: 30,
            ..EpisodeStats::default()
        };
        let mut config = SimConfig::default();

        let json = EpisodeReport::new(&config, &stats, &snapshot()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 30);
        assert_eq!(value["policy"], "first");
        assert!(value.get("board").is_none());

        config.show_board = true;
        let report = EpisodeReport::new(&config, &stats, &snapshot());
        assert!(report.to_text().ends_with("\n0.4\n123"));
    }
}
