//! Scrambling a grid and checking it after each player move.
//!
//! [`shuffle_grid`] gives every cell a random number of quarter-turns and repeats
//! the whole pass while the board still happens to be in place, up to
//! [`MAX_SHUFFLE_ATTEMPTS`] passes. [`rotate_cell`] and [`put_cell_in_place`]
//! change a single cell and report the new alive set together with the solved
//! flag.

use rand::{Rng, RngExt as _};
use sakura_core::{Cell, Grid, GridError, Position, PositionSet, Rotation, connectivity};

use crate::GameError;

/// Maximum number of full-grid passes [`shuffle_grid`] tries.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 1000;

/// Result of a single-cell move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotateOutcome {
    /// Cells currently piped to the root.
    ///
    /// Every cell of the grid when `solved` is `true`.
    pub alive: PositionSet,
    /// Whether every cell is back in place.
    pub solved: bool,
}

/// Draws the random turn applied to one cell during a shuffle.
///
/// The sense is a coin flip and the count is uniform in `0..4`, except that an even
/// clockwise count is bumped to the next odd one. Clockwise turns therefore always
/// change a cell that is not symmetric under a half-turn.
pub fn random_turns<R>(rng: &mut R) -> (Rotation, u8)
where
    R: Rng + ?Sized,
{
    let rotation = Rotation::from_clockwise(!rng.random_bool(0.5));
    let mut count: u8 = rng.random_range(0..4);
    if count % 2 == 0 && rotation.is_clockwise() {
        count = (count + 1) % 4;
    }
    (rotation, count)
}

/// Applies [`random_turns`] to the current connectors of one cell.
pub fn rotate_randomly<R>(cell: &mut Cell, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let (rotation, count) = random_turns(rng);
    for _ in 0..count {
        cell.rotate(rotation);
    }
}

/// Scrambles the current orientation of every cell.
///
/// Whole-grid passes are repeated while every cell is still in place. Returns the
/// number of passes used.
///
/// # Errors
///
/// Returns [`GameError::ShuffleExhausted`] if the grid is still in place after
/// [`MAX_SHUFFLE_ATTEMPTS`] passes. Empty cells and crosses look the same in every
/// orientation, so a board made only of those can never be scrambled. The grid is
/// left in place in that case.
pub fn shuffle_grid<R>(grid: &mut Grid, rng: &mut R) -> Result<usize, GameError>
where
    R: Rng + ?Sized,
{
    for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
        for pos in grid.positions() {
            rotate_randomly(&mut grid[pos], rng);
        }
        if !grid.is_all_in_place() {
            log::trace!("shuffled {}x{} grid in {attempt} passes", grid.width(), grid.height());
            return Ok(attempt);
        }
    }
    log::warn!(
        "{}x{} grid is still in place after {MAX_SHUFFLE_ATTEMPTS} shuffle passes",
        grid.width(),
        grid.height()
    );
    Err(GameError::ShuffleExhausted {
        attempts: MAX_SHUFFLE_ATTEMPTS,
    })
}

/// Rotates one cell a quarter-turn, then recomputes the alive set and the solved
/// flag.
///
/// # Errors
///
/// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid; nothing is
/// changed in that case.
pub fn rotate_cell(
    grid: &mut Grid,
    pos: Position,
    rotation: Rotation,
) -> Result<RotateOutcome, GridError> {
    grid.rotate(pos, rotation)?;
    Ok(check(grid))
}

/// Restores one cell to its original orientation, then recomputes the alive set
/// and the solved flag.
///
/// # Errors
///
/// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid; nothing is
/// changed in that case.
pub fn put_cell_in_place(grid: &mut Grid, pos: Position) -> Result<RotateOutcome, GridError> {
    grid.put_in_place(pos)?;
    Ok(check(grid))
}

fn check(grid: &Grid) -> RotateOutcome {
    if grid.is_all_in_place() {
        RotateOutcome {
            alive: PositionSet::full(grid.width(), grid.height()),
            solved: true,
        }
    } else {
        RotateOutcome {
            alive: connectivity::alive_cells(grid),
            solved: false,
        }
    }
}
