//! Drivers on top of the core board rules: swap search and autoplay.

pub mod autoplay;
pub mod hint;

pub use autoplay::{choose_swap, play_episode, EpisodeStats, Policy};
pub use hint::{first_legal_swap, legal_swaps, swap_completes_run, Swap};
