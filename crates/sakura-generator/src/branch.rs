use rand::{Rng, RngExt as _};
use sakura_core::{Direction, Grid, Position, PositionSet};

use crate::{RelaxFactor, RoundSeed};

/// Maximum number of new connections a cell opens while it is being carved.
///
/// The connection through which the cell was reached is not counted, so a carved
/// cell ends up with at most three connectors.
const MAX_CARVED_CONNECTIONS: u8 = 2;

/// Carves random branches into a [`Grid`].
///
/// # Examples
///
/// ```
/// use sakura_core::{Grid, Topology};
/// use sakura_generator::{BranchGenerator, RelaxFactor, RoundSeed};
///
/// let mut grid = Grid::new(5, 5).unwrap();
/// grid.set_topology(Topology::Toroidal);
///
/// let generator = BranchGenerator::new(RelaxFactor::NONE);
/// let branch = generator.generate_with_seed(&mut grid, RoundSeed::from_phrase("torus"));
/// assert_eq!(branch.forbidden, 0);
/// assert!(branch.occupied >= 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchGenerator {
    relax: RelaxFactor,
}

/// Summary of one generated branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedBranch {
    /// The cell carving started from.
    pub start: Position,
    /// The root chosen after carving.
    pub root: Position,
    /// `false` if no cell with two or more connectors was found around the center,
    /// in which case the root fell back to the center cell.
    pub root_found: bool,
    /// Number of cells that were excluded from carving.
    pub forbidden: usize,
    /// Number of cells carrying at least one connector.
    pub occupied: usize,
}

impl BranchGenerator {
    /// Creates a generator with the given forbidden-cell density.
    #[must_use]
    pub const fn new(relax: RelaxFactor) -> Self {
        Self { relax }
    }

    /// Returns the forbidden-cell density.
    #[must_use]
    pub const fn relax(&self) -> RelaxFactor {
        self.relax
    }

    /// Generates a branch from a seed.
    ///
    /// The same seed, grid size, topology and previous root always produce the
    /// same branch.
    pub fn generate_with_seed(&self, grid: &mut Grid, seed: RoundSeed) -> GeneratedBranch {
        self.generate(grid, &mut seed.rng())
    }

    /// Replaces the grid content with a freshly carved branch.
    ///
    /// The grid keeps its size and topology. On return every cell is in place
    /// (both connector layers were written together) and the root has been moved,
    /// see [`find_root`].
    pub fn generate<R>(&self, grid: &mut Grid, rng: &mut R) -> GeneratedBranch
    where
        R: Rng + ?Sized,
    {
        grid.reset();

        let forbidden = self.forbidden_cells(grid, rng);
        let start = Position::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        carve(grid, &forbidden, start, rng);

        let found = find_root(grid);
        let root = found.unwrap_or_else(|| grid.center());
        grid.set_root(root);
        if found.is_none() {
            log::warn!(
                "no cell with two or more connectors around the center of the {}x{} grid, keeping root at {root}",
                grid.width(),
                grid.height()
            );
        }

        let branch = GeneratedBranch {
            start,
            root,
            root_found: found.is_some(),
            forbidden: forbidden.len(),
            occupied: grid.occupied_count(),
        };
        log::debug!(
            "generated {}x{} {:?} branch: start={}, root={}, forbidden={}, occupied={}",
            grid.width(),
            grid.height(),
            grid.topology(),
            branch.start,
            branch.root,
            branch.forbidden,
            branch.occupied
        );
        branch
    }

    /// Draws the forbidden-cell mask.
    ///
    /// Coordinates are drawn with replacement, so duplicates collapse. The current
    /// root is always allowed, and so is every cell within half the grid extent of
    /// the root on both axes.
    // TODO: the half-extent exemption clears most of the mask when the root sits at
    // the center; revisit it together with the relax factor range.
    fn forbidden_cells<R>(&self, grid: &Grid, rng: &mut R) -> PositionSet
    where
        R: Rng + ?Sized,
    {
        let (width, height) = (grid.width(), grid.height());
        let mut forbidden = PositionSet::new(width, height);
        for _ in 0..self.relax.forbidden_draws(grid.len()) {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            forbidden.insert(Position::new(x, y));
        }
        let drawn = forbidden.len();

        let root = grid.root();
        forbidden.remove(root);
        forbidden.retain(|pos| {
            pos.x.abs_diff(root.x) > width / 2 || pos.y.abs_diff(root.y) > height / 2
        });
        log::trace!(
            "forbidden cells: {drawn} drawn, {} kept after pruning around {root}",
            forbidden.len()
        );
        forbidden
    }
}

struct Frame {
    pos: Position,
    first: Direction,
    tried: u8,
    budget: u8,
}

impl Frame {
    fn new<R>(pos: Position, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            pos,
            first: Direction::from_index(rng.random_range(0..4)),
            tried: 0,
            budget: MAX_CARVED_CONNECTIONS,
        }
    }
}

/// Depth-first carving from `start`.
///
/// Each cell tries its four sides once, starting from a random side and going on
/// in slot order, and opens at most [`MAX_CARVED_CONNECTIONS`] new connections.
/// A side is accepted only if its neighbor exists, is still empty and is not
/// forbidden; the neighbor is then carved completely before the next side is
/// tried. Connecting only to empty cells keeps the result a tree.
fn carve<R>(grid: &mut Grid, forbidden: &PositionSet, start: Position, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let mut stack = vec![Frame::new(start, rng)];
    while let Some(frame) = stack.last_mut() {
        if frame.tried == 4 || frame.budget == 0 {
            stack.pop();
            continue;
        }
        let pos = frame.pos;
        let dir = frame.first.shifted(frame.tried);
        frame.tried += 1;

        if grid[pos].original().contains(dir) {
            continue;
        }
        let Some(next) = grid.neighbor(pos, dir) else {
            continue;
        };
        if !grid[next].is_empty() || forbidden.contains(next) {
            continue;
        }

        frame.budget -= 1;
        grid.connect(pos, dir);
        log::trace!("carved {pos} -> {next} ({dir})");
        stack.push(Frame::new(next, rng));
    }
}

/// Looks for a root cell with at least two connectors.
///
/// The center cell wins if it qualifies. Otherwise squares around the center are
/// scanned row by row, growing by one cell in every direction each time, until a
/// qualifying cell is found or the square would cross the top or left edge. For an
/// even side the starting square already spans the two middle rows or columns.
///
/// Returns `None` if no cell qualifies.
///
/// # Examples
///
/// ```
/// use sakura_core::{Direction, Grid, Position};
/// use sakura_generator::find_root;
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// assert_eq!(find_root(&grid), None);
///
/// grid.connect(Position::new(0, 0), Direction::Right);
/// grid.connect(Position::new(1, 0), Direction::Right);
/// assert_eq!(find_root(&grid), Some(Position::new(1, 0)));
/// ```
#[must_use]
pub fn find_root(grid: &Grid) -> Option<Position> {
    const MIN_ROOT_DEGREE: usize = 2;

    let center = grid.center();
    if grid[center].degree() >= MIN_ROOT_DEGREE {
        return Some(center);
    }

    let mut top = Some(center.y - usize::from(grid.height() % 2 == 0));
    let mut left = Some(center.x - usize::from(grid.width() % 2 == 0));
    let (mut bottom, mut right) = (center.y, center.x);
    while let (Some(t), Some(l)) = (top, left) {
        for y in t..=bottom {
            for x in l..=right {
                let pos = Position::new(x, y);
                if grid[pos].degree() >= MIN_ROOT_DEGREE {
                    return Some(pos);
                }
            }
        }
        top = t.checked_sub(1);
        left = l.checked_sub(1);
        bottom += 1;
        right += 1;
    }
    None
}
