use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed from which a whole round is reproduced.
///
/// Seeds display as 64 lowercase hexadecimal digits and parse back from the same
/// form. A human-friendly phrase can be turned into a seed by hashing it.
///
/// # Examples
///
/// ```
/// use sakura_generator::RoundSeed;
///
/// let seed = RoundSeed::from_phrase("spring");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<RoundSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundSeed([u8; 32]);

impl RoundSeed {
    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from an arbitrary phrase with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the random stream for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for RoundSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for RoundSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`RoundSeed`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hexadecimal digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected input in characters.
        len: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[display("invalid hexadecimal digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for RoundSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }
        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let mut value = 0;
            for _ in 0..2 {
                let ch = chars.next().ok_or(SeedParseError::InvalidLength { len })?;
                let digit = ch.to_digit(16).ok_or(SeedParseError::InvalidDigit { ch })?;
                #[expect(clippy::cast_possible_truncation)]
                let digit = digit as u8;
                value = (value << 4) | digit;
            }
            *byte = value;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::RngExt as _;

    use super::*;

    #[test]
    fn test_parse_and_display() {
        let text = "00ff10a0".repeat(8);
        let seed: RoundSeed = text.parse().unwrap();
        assert_eq!(seed.as_bytes()[..4], [0x00, 0xff, 0x10, 0xa0]);
        assert_eq!(seed.to_string(), text);

        let upper: RoundSeed = text.to_uppercase().parse().unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<RoundSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let bad = format!("g{}", "0".repeat(63));
        assert_eq!(
            bad.parse::<RoundSeed>(),
            Err(SeedParseError::InvalidDigit { ch: 'g' })
        );
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = RoundSeed::from_phrase("determinism");
        let mut rng1 = seed.rng();
        let mut rng2 = seed.rng();
        for _ in 0..8 {
            assert_eq!(
                rng1.random_range(0..1000_u32),
                rng2.random_range(0..1000_u32)
            );
        }
        assert_ne!(RoundSeed::from_phrase("a"), RoundSeed::from_phrase("b"));
    }
}
