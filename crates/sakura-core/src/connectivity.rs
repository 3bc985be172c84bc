//! Flood fill of the cells currently piped to the root.
//!
//! A cell is *alive* when a chain of matching current connectors links it to the
//! root: every hop needs an open connector on the near cell and the reciprocal
//! connector on the far cell. The original orientations play no part here, so the
//! alive set is unrelated to solved detection.

use crate::{Direction, Grid, Position, PositionSet};

/// Returns every cell currently connected to the root, the root included.
///
/// The traversal is depth-first from the root and never leaves a cell through the
/// side it entered from. Rotations can close loops that the generated tree never
/// had, so visited cells are tracked explicitly and each cell is expanded at most
/// once.
///
/// # Examples
///
/// ```
/// use sakura_core::{Direction, Grid, Position, connectivity};
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// let root = grid.root();
/// grid.connect(root, Direction::Top);
/// grid.connect(root, Direction::Bottom);
///
/// let alive = connectivity::alive_cells(&grid);
/// assert_eq!(alive.len(), 3);
/// assert!(alive.contains(Position::new(1, 0)));
/// assert!(alive.contains(Position::new(1, 2)));
/// ```
#[must_use]
pub fn alive_cells(grid: &Grid) -> PositionSet {
    let mut alive = PositionSet::new(grid.width(), grid.height());
    let root = grid.root();
    alive.insert(root);

    let mut stack: Vec<(Position, Option<Direction>)> = vec![(root, None)];
    while let Some((pos, came_from)) = stack.pop() {
        for dir in grid[pos].current() {
            if Some(dir) == came_from {
                continue;
            }
            let Some(next) = grid.neighbor(pos, dir) else {
                continue;
            };
            let back = dir.opposite();
            if !grid[next].current().contains(back) {
                continue;
            }
            if alive.insert(next) {
                stack.push((next, Some(back)));
            }
        }
    }
    alive
}

/// Returns `true` if `pos` and its neighbor towards `dir` have matching current
/// connectors.
///
/// # Panics
///
/// Panics if `pos` is outside the grid.
#[must_use]
pub fn is_linked(grid: &Grid, pos: Position, dir: Direction) -> bool {
    grid[pos].current().contains(dir)
        && grid
            .neighbor(pos, dir)
            .is_some_and(|next| grid[next].current().contains(dir.opposite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rotation, Topology};

    #[test]
    fn test_lone_root_is_alive() {
        let grid = Grid::new(3, 3).unwrap();
        let alive = alive_cells(&grid);
        assert_eq!(alive.len(), 1);
        assert!(alive.contains(grid.root()));
    }

    #[test]
    fn test_half_open_link_is_dead() {
        let mut grid = Grid::new(3, 3).unwrap();
        let root = grid.root();
        let top = grid.connect(root, Direction::Top).unwrap();
        grid.rotate(top, Rotation::Clockwise).unwrap();

        assert!(!is_linked(&grid, root, Direction::Top));
        let alive = alive_cells(&grid);
        assert_eq!(alive.iter().collect::<Vec<_>>(), [root]);
    }

    #[test]
    fn test_chain_through_wrapped_edge() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_topology(Topology::Toroidal);
        let root = grid.root();
        let left = grid.connect(root, Direction::Left).unwrap();
        let wrapped = grid.connect(left, Direction::Left).unwrap();
        assert_eq!(wrapped, Position::new(2, 1));

        let alive = alive_cells(&grid);
        assert_eq!(alive.len(), 3);

        grid.set_topology(Topology::Bounded);
        let alive = alive_cells(&grid);
        assert_eq!(alive.len(), 2);
        assert!(!alive.contains(wrapped));
    }

    #[test]
    fn test_rotated_cycle_terminates() {
        // A 2x2 loop; a generated branch never has one, but rotations can close it.
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_root(Position::new(0, 0));
        grid.connect(Position::new(0, 0), Direction::Right);
        grid.connect(Position::new(1, 0), Direction::Bottom);
        grid.connect(Position::new(1, 1), Direction::Left);
        grid.connect(Position::new(0, 1), Direction::Top);

        let alive = alive_cells(&grid);
        assert_eq!(alive.len(), 4);
        assert_eq!(alive_cells(&grid), alive);
    }
}
