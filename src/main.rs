//! Headless simulator (default binary).
//!
//! Plays autoplay episodes on a seeded board and prints one summary per
//! episode, as text or JSON lines. Logs go to stderr; set `RUST_LOG` to see
//! cascade steps.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tile_crush::cli::{parse_args, USAGE};
use tile_crush::core::Session;
use tile_crush::engine::play_episode;
use tile_crush::report::EpisodeReport;

/// Keeps the policy stream apart from the board stream for the same seed.
const POLICY_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let mut session = Session::new(config.board, config.seed)?;
    let mut policy_rng = ChaCha8Rng::seed_from_u64(config.seed ^ POLICY_STREAM);
    info!(
        width = config.board.width(),
        height = config.board.height(),
        kinds = config.board.kinds(),
        seed = config.seed,
        policy = config.policy.as_str(),
        "starting simulation"
    );

    for episode in 0..config.episodes {
        if episode > 0 {
            session.restart();
        }
        let stats = play_episode(&mut session, config.policy, config.max_moves, &mut policy_rng);
        let report = EpisodeReport::new(&config, &stats, &session.snapshot());
        if config.json {
            println!("{}", report.to_json()?);
        } else {
            println!("{}", report.to_text());
        }
    }

    Ok(())
}
