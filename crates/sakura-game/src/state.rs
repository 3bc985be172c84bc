/// Lifecycle of one round.
///
/// ```text
/// Generated --shuffle--> Unsolved --rotations--> Solved
///     ^                                            |
///     +-----------------regenerate-----------------+
/// ```
///
/// `Generated` and `Solved` both have every cell in place; they differ only in
/// that a freshly generated round is waiting for its (possibly automatic) shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RoundState {
    /// Freshly generated and not shuffled yet.
    Generated,
    /// Shuffled, with at least one cell out of place.
    Unsolved,
    /// Brought back in place by the player.
    Solved,
}

impl RoundState {
    /// Returns `true` if every cell is in place, i.e. the round is not
    /// [`Unsolved`](Self::Unsolved).
    #[must_use]
    pub const fn is_complete(self) -> bool {
        !matches!(self, Self::Unsolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_states() {
        assert!(RoundState::Generated.is_complete());
        assert!(RoundState::Solved.is_complete());
        assert!(!RoundState::Unsolved.is_complete());
        assert!(RoundState::Solved.is_solved());
        assert!(!RoundState::Generated.is_solved());
    }
}
