use std::time::Duration;

use sakura_core::{Grid, GridError, Topology};
use sakura_generator::{RelaxFactor, RelaxFactorError};
use serde::{Deserialize, Serialize};

/// Settings used to generate a round.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// configuration file only needs the values it changes.
///
/// # Examples
///
/// ```
/// use sakura_core::Topology;
/// use sakura_game::RoundConfig;
///
/// let config = RoundConfig {
///     width: 10,
///     topology: Topology::Toroidal,
///     ..RoundConfig::default()
/// };
/// assert!(config.validate().is_ok());
///
/// let bad = RoundConfig { relax_factor: 0.9, ..config };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Number of columns, at least [`Grid::MIN_SIDE`].
    pub width: usize,
    /// Number of rows, at least [`Grid::MIN_SIDE`].
    pub height: usize,
    /// Forbidden-cell density in `[0, 0.7]`.
    pub relax_factor: f64,
    /// Whether the edges of the board wrap around.
    pub topology: Topology,
    /// Automatic shuffling of freshly generated rounds.
    pub auto_shuffle: AutoShuffle,
}

impl RoundConfig {
    /// Default number of columns.
    pub const DEFAULT_WIDTH: usize = 7;
    /// Default number of rows.
    pub const DEFAULT_HEIGHT: usize = 6;

    /// Checks the configuration and returns its relax factor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dimensions`] if either side is below
    /// [`Grid::MIN_SIDE`] and [`ConfigError::RelaxFactor`] if the relax factor is
    /// outside `[0, 0.7]`.
    pub fn validate(&self) -> Result<RelaxFactor, ConfigError> {
        Grid::check_dimensions(self.width, self.height)?;
        Ok(RelaxFactor::new(self.relax_factor)?)
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            relax_factor: RelaxFactor::default().value(),
            topology: Topology::default(),
            auto_shuffle: AutoShuffle::default(),
        }
    }
}

/// Shuffle a freshly generated round after a delay.
///
/// This is plain data: the caller owns the timer and asks
/// [`Game::should_auto_shuffle`](crate::Game::should_auto_shuffle) when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoShuffle {
    /// Whether rounds are shuffled automatically.
    pub enabled: bool,
    /// Delay between generation and shuffling, in milliseconds.
    pub delay_ms: u64,
}

impl AutoShuffle {
    /// Delays up to this many milliseconds shuffle right away.
    pub const IMMEDIATE_THRESHOLD_MS: u64 = 100;

    /// Auto-shuffle turned off.
    pub const DISABLED: Self = Self {
        enabled: false,
        delay_ms: 5000,
    };

    /// Returns how long to wait before shuffling, or `None` if disabled.
    ///
    /// Delays of [`Self::IMMEDIATE_THRESHOLD_MS`] or less are reported as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use sakura_game::AutoShuffle;
    ///
    /// assert_eq!(AutoShuffle::default().delay(), Some(Duration::from_secs(5)));
    /// let quick = AutoShuffle { enabled: true, delay_ms: 50 };
    /// assert_eq!(quick.delay(), Some(Duration::ZERO));
    /// assert_eq!(AutoShuffle::DISABLED.delay(), None);
    /// ```
    #[must_use]
    pub fn delay(&self) -> Option<Duration> {
        if !self.enabled {
            return None;
        }
        if self.delay_ms <= Self::IMMEDIATE_THRESHOLD_MS {
            return Some(Duration::ZERO);
        }
        Some(Duration::from_millis(self.delay_ms))
    }
}

impl Default for AutoShuffle {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ms: 5000,
        }
    }
}

/// Error returned when a [`RoundConfig`] is rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ConfigError {
    /// The board size is too small.
    #[display("{_0}")]
    Dimensions(#[from] GridError),
    /// The relax factor is out of range.
    #[display("{_0}")]
    RelaxFactor(#[from] RelaxFactorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_board() {
        let config = RoundConfig::default();
        assert_eq!((config.width, config.height), (7, 6));
        assert!((config.relax_factor - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.topology, Topology::Bounded);
        assert!(config.auto_shuffle.enabled);
        assert_eq!(config.auto_shuffle.delay_ms, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_small_board() {
        let config = RoundConfig {
            height: 2,
            ..RoundConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Dimensions(GridError::InvalidDimensions {
                width: 7,
                height: 2
            }))
        );
    }

    #[test]
    fn test_validate_rejects_relax_factor() {
        for relax_factor in [-0.1, 0.71, f64::NAN] {
            let config = RoundConfig {
                relax_factor,
                ..RoundConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::RelaxFactor(_))
            ));
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RoundConfig =
            serde_json::from_str(r#"{ "width": 12, "topology": "toroidal" }"#).unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, RoundConfig::DEFAULT_HEIGHT);
        assert_eq!(config.topology, Topology::Toroidal);
        assert_eq!(config.auto_shuffle, AutoShuffle::default());

        let config: RoundConfig =
            serde_json::from_str(r#"{ "auto_shuffle": { "enabled": false } }"#).unwrap();
        assert_eq!(config.auto_shuffle.delay(), None);
    }
}
