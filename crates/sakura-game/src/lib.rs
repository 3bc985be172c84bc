//! Round lifecycle and player operations for the Sakura rotation puzzle.
//!
//! [`Game`] owns one grid for as long as the player keeps the window open. Each
//! round is generated from a [`RoundSeed`](sakura_generator::RoundSeed), shuffled,
//! then played one rotation at a time until every cell is back in place.
//!
//! # Overview
//!
//! - [`RoundConfig`]: board size, relax factor, topology and auto-shuffle
//!   settings, validated before any state changes
//! - [`RoundState`]: where the current round is in its lifecycle
//! - [`shuffle`]: scrambling and the rotate-then-check step
//! - [`Game`]: the session facade tying them together
//!
//! # Examples
//!
//! ```
//! use sakura_core::Rotation;
//! use sakura_game::{Game, RoundConfig};
//! use sakura_generator::RoundSeed;
//!
//! let config = RoundConfig::default();
//! let mut game = Game::new_round_with_seed(config, RoundSeed::from_phrase("demo")).unwrap();
//! assert!(game.is_solved());
//!
//! let focus = game.shuffle().unwrap();
//! assert!(!game.is_solved());
//!
//! let outcome = game.rotate(focus, Rotation::Clockwise).unwrap();
//! assert!(outcome.alive.contains(game.grid().root()));
//! ```

pub use self::{
    config::{AutoShuffle, ConfigError, RoundConfig},
    error::GameError,
    game::Game,
    shuffle::RotateOutcome,
    state::RoundState,
};

mod config;
mod error;
mod game;
pub mod shuffle;
mod state;
