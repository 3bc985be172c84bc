use sakura_core::GridError;

use crate::ConfigError;

/// Errors reported by [`Game`](crate::Game) operations.
///
/// None of them leave the game in an inconsistent state: a rejected call changes
/// nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The round configuration was rejected.
    #[display("{_0}")]
    Config(#[from] ConfigError),
    /// A position argument was outside the grid.
    #[display("{_0}")]
    Grid(#[from] GridError),
    /// Every shuffle attempt left the whole grid in place.
    ///
    /// This happens only on degenerate boards, e.g. when no cell carries a
    /// connector.
    #[display("grid is still in place after {attempts} shuffle attempts")]
    ShuffleExhausted {
        /// Number of full-grid shuffles tried.
        attempts: usize,
    },
}
