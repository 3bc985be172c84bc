use rand_pcg::Pcg64;
use sakura_core::{
    Cell, ConnectorSet, Direction, Grid, Layer, Position, PositionSet, Rotation, connectivity,
};
use sakura_generator::{BranchGenerator, GeneratedBranch, RoundSeed};

use crate::{GameError, RotateOutcome, RoundConfig, RoundState, shuffle};

/// A Sakura game session.
///
/// Owns the grid, the random stream of the current round and the presentation
/// flags a front end needs (peek mode and keyboard focus). Every operation runs to
/// completion and leaves the session consistent; rejected calls change nothing.
///
/// # Examples
///
/// ```
/// use sakura_core::Rotation;
/// use sakura_game::{Game, RoundConfig};
/// use sakura_generator::RoundSeed;
///
/// let mut game = Game::new_round_with_seed(RoundConfig::default(), RoundSeed::from_phrase("x"))
///     .unwrap();
/// let root = game.grid().root();
///
/// // Turning the root of an unshuffled board breaks it; four turns restore it.
/// let outcome = game.rotate(root, Rotation::Clockwise).unwrap();
/// assert!(!outcome.solved);
/// for _ in 0..3 {
///     game.rotate(root, Rotation::Clockwise).unwrap();
/// }
/// assert!(game.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: RoundConfig,
    generator: BranchGenerator,
    grid: Grid,
    rng: Pcg64,
    seed: RoundSeed,
    branch: GeneratedBranch,
    state: RoundState,
    alive: PositionSet,
    peek: bool,
    focus: Option<Position>,
}

impl Game {
    /// Starts a session with a round generated from a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if the configuration is invalid.
    pub fn new_round(config: RoundConfig) -> Result<Self, GameError> {
        Self::new_round_with_seed(config, RoundSeed::random())
    }

    /// Starts a session with a round generated from `seed`.
    ///
    /// The same configuration and seed always produce the same board, and the same
    /// shuffles afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if the configuration is invalid.
    pub fn new_round_with_seed(config: RoundConfig, seed: RoundSeed) -> Result<Self, GameError> {
        let relax = config.validate()?;
        let mut grid = Grid::new(config.width, config.height)?;
        grid.set_topology(config.topology);
        let generator = BranchGenerator::new(relax);
        let mut rng = seed.rng();
        let branch = generator.generate(&mut grid, &mut rng);
        let alive = PositionSet::full(grid.width(), grid.height());
        log::debug!("new round from seed {seed}");
        Ok(Self {
            config,
            generator,
            grid,
            rng,
            seed,
            branch,
            state: RoundState::Generated,
            alive,
            peek: false,
            focus: None,
        })
    }

    /// Generates a new round with the same configuration and a random seed.
    pub fn regenerate(&mut self) {
        self.regenerate_with_seed(RoundSeed::random());
    }

    /// Generates a new round with the same configuration from `seed`.
    ///
    /// The grid is reused, so the root of the previous round shapes the
    /// forbidden-cell mask of the new one.
    pub fn regenerate_with_seed(&mut self, seed: RoundSeed) {
        self.seed = seed;
        self.rng = seed.rng();
        self.branch = self.generator.generate(&mut self.grid, &mut self.rng);
        self.state = RoundState::Generated;
        self.alive = PositionSet::full(self.grid.width(), self.grid.height());
        self.peek = false;
        self.focus = None;
        log::debug!("regenerated round from seed {seed}");
    }

    /// Applies a new configuration and generates a new round from a random seed.
    ///
    /// A new grid is created only if the size changed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if the configuration is invalid; the current
    /// round is kept in that case.
    pub fn regenerate_with(&mut self, config: RoundConfig) -> Result<(), GameError> {
        let relax = config.validate()?;
        if (config.width, config.height) != (self.grid.width(), self.grid.height()) {
            self.grid = Grid::new(config.width, config.height)?;
        }
        self.grid.set_topology(config.topology);
        self.generator = BranchGenerator::new(relax);
        self.config = config;
        self.regenerate();
        Ok(())
    }

    /// Scrambles the board and starts play.
    ///
    /// Leaves peek mode, recomputes the alive cells and moves the focus to the
    /// top-left cell, which is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ShuffleExhausted`] if the board cannot be scrambled;
    /// the round is left unchanged apart from peek mode.
    pub fn shuffle(&mut self) -> Result<Position, GameError> {
        self.peek = false;
        let passes = shuffle::shuffle_grid(&mut self.grid, &mut self.rng)?;
        self.alive = connectivity::alive_cells(&self.grid);
        self.state = RoundState::Unsolved;
        self.focus = Some(Position::ORIGIN);
        log::debug!(
            "shuffled round in {passes} passes, {} of {} cells alive",
            self.alive.len(),
            self.grid.len()
        );
        Ok(Position::ORIGIN)
    }

    /// Rotates one cell a quarter-turn.
    ///
    /// Solving the board clears the focus and marks every cell alive. Rotating a
    /// solved or freshly generated board is allowed; front ends check
    /// [`Game::is_input_blocked`] first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Grid`] if `pos` is outside the grid.
    pub fn rotate(
        &mut self,
        pos: Position,
        rotation: Rotation,
    ) -> Result<RotateOutcome, GameError> {
        let outcome = shuffle::rotate_cell(&mut self.grid, pos, rotation)?;
        Ok(self.apply(outcome))
    }

    /// Restores one cell to its original orientation.
    ///
    /// Behaves like [`Game::rotate`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Grid`] if `pos` is outside the grid.
    pub fn put_in_place(&mut self, pos: Position) -> Result<RotateOutcome, GameError> {
        let outcome = shuffle::put_cell_in_place(&mut self.grid, pos)?;
        Ok(self.apply(outcome))
    }

    fn apply(&mut self, outcome: RotateOutcome) -> RotateOutcome {
        if outcome.solved {
            if self.state.is_unsolved() {
                log::debug!("round solved");
                self.state = RoundState::Solved;
            }
            self.focus = None;
        } else {
            self.state = RoundState::Unsolved;
        }
        self.alive = outcome.alive.clone();
        outcome
    }

    /// Turns peek mode on or off.
    ///
    /// While peeking, [`Game::displayed`] shows the original orientation. Peek mode
    /// cannot be turned on while the round is solved. Returns whether peek mode is
    /// on afterwards.
    pub fn set_peek(&mut self, on: bool) -> bool {
        if on && self.state.is_complete() {
            return self.peek;
        }
        self.peek = on;
        self.peek
    }

    /// Returns `true` while peek mode is on.
    #[must_use]
    pub fn is_peeking(&self) -> bool {
        self.peek
    }

    /// Returns the connectors a front end should draw for `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Grid`] if `pos` is outside the grid.
    pub fn displayed(&self, pos: Position) -> Result<ConnectorSet, GameError> {
        let layer = if self.peek {
            Layer::Original
        } else {
            Layer::Current
        };
        Ok(self.grid.cell(pos)?.connectors(layer))
    }

    /// Returns `true` if every cell is in place.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_complete()
    }

    /// Returns the cells currently piped to the root.
    ///
    /// Every cell is reported alive while the round is solved or freshly
    /// generated.
    #[must_use]
    pub fn alive_cells(&self) -> &PositionSet {
        &self.alive
    }

    /// Returns the original and current connectors of one cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Grid`] if `pos` is outside the grid.
    pub fn cell(&self, pos: Position) -> Result<&Cell, GameError> {
        Ok(self.grid.cell(pos)?)
    }

    /// Returns the board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns where the current round is in its lifecycle.
    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the configuration of the current round.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Returns the seed the current round was generated from.
    #[must_use]
    pub fn seed(&self) -> RoundSeed {
        self.seed
    }

    /// Returns the generation report of the current round.
    #[must_use]
    pub fn branch(&self) -> &GeneratedBranch {
        &self.branch
    }

    /// Returns the keyboard focus, or `None` when the round is not being played.
    #[must_use]
    pub fn focus(&self) -> Option<Position> {
        self.focus
    }

    /// Moves the keyboard focus one cell, wrapping around every edge.
    ///
    /// Does nothing while input is blocked. Returns the new focus.
    pub fn move_focus(&mut self, dir: Direction) -> Option<Position> {
        if self.is_input_blocked() {
            return self.focus;
        }
        self.focus = self
            .focus
            .map(|pos| self.grid.wrapping_neighbor(pos, dir).unwrap_or(pos));
        self.focus
    }

    /// Returns `true` while the round is solved or peek mode is on.
    #[must_use]
    pub fn is_input_blocked(&self) -> bool {
        self.state.is_complete() || self.peek
    }

    /// Returns `true` if a pending automatic shuffle should run now.
    ///
    /// Only freshly generated rounds are shuffled automatically; a round solved by
    /// the player stays on screen until the next one is generated.
    #[must_use]
    pub fn should_auto_shuffle(&self) -> bool {
        self.config.auto_shuffle.enabled && self.state.is_generated()
    }
}
