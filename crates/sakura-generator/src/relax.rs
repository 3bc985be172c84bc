use std::fmt::{self, Display};

/// Density of the forbidden-cell mask used while carving a branch.
///
/// The generator draws `round(cells × factor)` random coordinates as forbidden
/// cells, which makes branches sparser ("more relaxed"). The factor is limited to
/// `[0.0, 0.7]`.
///
/// # Examples
///
/// ```
/// use sakura_generator::RelaxFactor;
///
/// let relax = RelaxFactor::new(0.5).unwrap();
/// assert_eq!(relax.forbidden_draws(42), 21);
/// assert!(RelaxFactor::new(0.8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RelaxFactor(f64);

impl RelaxFactor {
    /// Smallest allowed factor.
    pub const MIN: f64 = 0.0;
    /// Largest allowed factor.
    pub const MAX: f64 = 0.7;
    /// The factor producing no forbidden cells at all.
    pub const NONE: Self = Self(0.0);

    /// Validates and wraps a factor.
    ///
    /// # Errors
    ///
    /// Returns [`RelaxFactorError::OutOfRange`] if `value` is not within
    /// `[RelaxFactor::MIN, RelaxFactor::MAX]` (NaN included).
    pub fn new(value: f64) -> Result<Self, RelaxFactorError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RelaxFactorError::OutOfRange { value })
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns how many coordinates to draw for a grid of `cell_count` cells,
    /// rounding half up.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn forbidden_draws(self, cell_count: usize) -> usize {
        (cell_count as f64 * self.0 + 0.5).floor() as usize
    }
}

impl Default for RelaxFactor {
    fn default() -> Self {
        Self(0.1)
    }
}

impl TryFrom<f64> for RelaxFactor {
    type Error = RelaxFactorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RelaxFactor> for f64 {
    fn from(relax: RelaxFactor) -> Self {
        relax.0
    }
}

impl Display for RelaxFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Error returned for an invalid [`RelaxFactor`].
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum RelaxFactorError {
    /// The factor is outside `[0.0, 0.7]`.
    #[display("relax factor {value} is outside of [{}, {}]", RelaxFactor::MIN, RelaxFactor::MAX)]
    OutOfRange {
        /// The rejected factor.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(RelaxFactor::new(0.0).is_ok());
        assert!(RelaxFactor::new(0.7).is_ok());
        assert_eq!(
            RelaxFactor::new(-0.1),
            Err(RelaxFactorError::OutOfRange { value: -0.1 })
        );
        assert!(RelaxFactor::new(0.71).is_err());
        assert!(RelaxFactor::new(f64::NAN).is_err());
        assert!(RelaxFactor::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_forbidden_draws_round_half_up() {
        assert_eq!(RelaxFactor::NONE.forbidden_draws(100), 0);
        assert_eq!(RelaxFactor::default().forbidden_draws(42), 4);
        assert_eq!(RelaxFactor::default().forbidden_draws(45), 5);
        assert_eq!(RelaxFactor::new(0.7).unwrap().forbidden_draws(9), 6);
    }

    #[test]
    fn test_error_message() {
        let err = RelaxFactor::new(1.5).unwrap_err();
        assert_eq!(err.to_string(), "relax factor 1.5 is outside of [0, 0.7]");
    }
}
