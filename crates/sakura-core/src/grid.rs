//! The puzzle board.
//!
//! A [`Grid`] owns a `width × height` array of [`Cell`]s, the root coordinate the
//! connectivity flood fill starts from, and the [`Topology`] deciding whether the
//! edges wrap around.
//!
//! # Wrap policy
//!
//! Every neighbor lookup goes through [`Grid::neighbor`]. A one-cell step can only
//! leave the board across a single edge, so a toroidal grid corrects exactly the
//! axis that overflowed: stepping left from column 0 lands on the last column of the
//! same row, stepping down from the last row lands on row 0 of the same column.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use crate::{Cell, Direction, Layer, Position, Rotation};

/// Whether the grid edges are boundaries or wrap to the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Topology {
    /// Cells on an edge have no neighbor beyond it.
    #[default]
    Bounded,
    /// Cells on an edge are adjacent to the cells on the opposite edge.
    Toroidal,
}

impl Topology {
    /// Returns `true` for [`Topology::Toroidal`].
    #[must_use]
    pub const fn is_toroidal(self) -> bool {
        matches!(self, Self::Toroidal)
    }
}

/// Errors reported by [`Grid`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The requested size is below the minimum of 3×3.
    #[display("invalid grid size {width}x{height}: both sides must be at least {}", Grid::MIN_SIDE)]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A coordinate lies outside the grid.
    #[display("position {pos} is outside of the grid")]
    OutOfBounds {
        /// The offending coordinate.
        pos: Position,
    },
}

/// A rectangular board of puzzle cells.
///
/// # Examples
///
/// ```
/// use sakura_core::{Direction, Grid, Position, Topology};
///
/// let mut grid = Grid::new(5, 5).unwrap();
/// assert_eq!(grid.neighbor(Position::new(0, 2), Direction::Left), None);
///
/// grid.set_topology(Topology::Toroidal);
/// assert_eq!(
///     grid.neighbor(Position::new(0, 2), Direction::Left),
///     Some(Position::new(4, 2))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    root: Position,
    topology: Topology,
}

impl Grid {
    /// Smallest allowed width and height.
    pub const MIN_SIDE: usize = 3;

    /// Creates a bounded grid of empty cells with the root at the center.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either side is below
    /// [`Grid::MIN_SIDE`].
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::new(); width * height],
            root: Position::new(width / 2, height / 2),
            topology: Topology::Bounded,
        })
    }

    /// Checks that a `width × height` grid could be created.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either side is below
    /// [`Grid::MIN_SIDE`].
    pub fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
        if width < Self::MIN_SIDE || height < Self::MIN_SIDE {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least 3×3 cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the geometric center, `(width / 2, height / 2)`.
    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Returns the root cell coordinate.
    #[must_use]
    pub fn root(&self) -> Position {
        self.root
    }

    /// Moves the root.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set_root(&mut self, pos: Position) {
        assert!(
            self.contains(pos),
            "Root {pos} outside of {}x{} grid",
            self.width,
            self.height
        );
        self.root = pos;
    }

    /// Returns the current topology.
    #[must_use]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Switches between bounded and toroidal topology.
    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Returns an error unless `pos` lies inside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn check_position(&self, pos: Position) -> Result<(), GridError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { pos })
        }
    }

    fn index_of(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "Position {pos} outside of {}x{} grid",
            self.width,
            self.height
        );
        pos.y * self.width + pos.x
    }

    /// Returns the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn cell(&self, pos: Position) -> Result<&Cell, GridError> {
        self.check_position(pos)?;
        Ok(&self[pos])
    }

    /// Returns the cell at `pos` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn cell_mut(&mut self, pos: Position) -> Result<&mut Cell, GridError> {
        self.check_position(pos)?;
        Ok(&mut self[pos])
    }

    /// Returns an iterator over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.cells.len()).map(move |i| Position::new(i % width, i / width))
    }

    /// Returns an iterator over every cell with its position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.positions().zip(&self.cells)
    }

    /// Returns the neighbor of `pos` in direction `dir`, honoring the topology.
    ///
    /// On a bounded grid a step across an edge has no neighbor. On a toroidal grid
    /// it wraps to the opposite edge on the axis that overflowed. A `pos` outside
    /// the grid has no neighbor.
    #[must_use]
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        self.step(pos, dir, self.topology.is_toroidal())
    }

    /// Returns the neighbor of `pos` in direction `dir`, always wrapping at the edges.
    ///
    /// This is the movement rule for a keyboard focus, which wraps regardless of
    /// the grid topology. Returns `None` only if `pos` is outside the grid.
    #[must_use]
    pub fn wrapping_neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        self.step(pos, dir, true)
    }

    fn step(&self, pos: Position, dir: Direction, wrap: bool) -> Option<Position> {
        if !self.contains(pos) {
            return None;
        }
        let (dx, dy) = dir.delta();
        let x = pos.x.checked_add_signed(dx).filter(|&x| x < self.width);
        let y = pos.y.checked_add_signed(dy).filter(|&y| y < self.height);
        match (x, y) {
            (Some(x), Some(y)) => Some(Position::new(x, y)),
            _ if !wrap => None,
            (None, Some(y)) => {
                let x = if dx < 0 { self.width - 1 } else { 0 };
                Some(Position::new(x, y))
            }
            (Some(x), None) => {
                let y = if dy < 0 { self.height - 1 } else { 0 };
                Some(Position::new(x, y))
            }
            (None, None) => None,
        }
    }

    /// Opens a connector from `pos` towards `dir` and the reciprocal connector on
    /// the neighbor, on both layers.
    ///
    /// Returns the neighbor, or `None` (leaving the grid untouched) if `pos` is
    /// outside the grid or has no neighbor in that direction.
    pub fn connect(&mut self, pos: Position, dir: Direction) -> Option<Position> {
        let next = self.neighbor(pos, dir)?;
        self[pos].connect(dir);
        self[next].connect(dir.opposite());
        Some(next)
    }

    /// Rotates the current connectors of one cell by a quarter-turn.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn rotate(&mut self, pos: Position, rotation: Rotation) -> Result<(), GridError> {
        self.cell_mut(pos)?.rotate(rotation);
        Ok(())
    }

    /// Restores one cell to its original orientation.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn put_in_place(&mut self, pos: Position) -> Result<(), GridError> {
        self.cell_mut(pos)?.put_in_place();
        Ok(())
    }

    /// Clears both connector layers of every cell.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Returns `true` if every cell is in its original orientation.
    #[must_use]
    pub fn is_all_in_place(&self) -> bool {
        self.cells.iter().all(Cell::is_in_place)
    }

    /// Returns the number of cells carrying at least one connector.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Draws the grid as text, three characters by three lines per cell.
    ///
    /// Open connectors are drawn as `*` around a `*` hub; cells without connectors
    /// are drawn as backticks on all three lines.
    ///
    /// ```
    /// use sakura_core::{Direction, Grid, Layer, Position};
    ///
    /// let mut grid = Grid::new(3, 3).unwrap();
    /// grid.connect(Position::new(0, 0), Direction::Right);
    /// let text = grid.render(Layer::Original);
    /// assert_eq!(text.lines().next(), Some("      ```"));
    /// assert_eq!(text.lines().nth(1), Some(" **** ```"));
    /// ```
    #[must_use]
    pub fn render(&self, layer: Layer) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            for level in 0..3 {
                if y > 0 || level > 0 {
                    out.push('\n');
                }
                for x in 0..self.width {
                    let set = self[Position::new(x, y)].connectors(layer);
                    let mark = |dir| if set.contains(dir) { '*' } else { ' ' };
                    let chunk = if set.is_empty() {
                        ['`'; 3]
                    } else {
                        match level {
                            0 => [' ', mark(Direction::Top), ' '],
                            1 => [mark(Direction::Left), '*', mark(Direction::Right)],
                            _ => [' ', mark(Direction::Bottom), ' '],
                        }
                    };
                    out.extend(chunk);
                }
            }
        }
        out
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.index_of(pos)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let i = self.index_of(pos);
        &mut self.cells[i]
    }
}

/// Draws the current layer, see [`Grid::render`].
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Layer::Current))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::ConnectorSet;

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Grid::new(2, 5),
            Err(GridError::InvalidDimensions {
                width: 2,
                height: 5
            })
        );
        assert!(Grid::new(3, 2).is_err());
        assert!(Grid::new(3, 3).is_ok());
    }

    #[test]
    fn test_root_starts_at_center() {
        let grid = Grid::new(7, 6).unwrap();
        assert_eq!(grid.root(), Position::new(3, 3));
        assert_eq!(grid.center(), grid.root());
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(3, 4).unwrap();
        let pos = Position::new(3, 0);
        assert_eq!(grid.cell(pos), Err(GridError::OutOfBounds { pos }));
        assert_eq!(
            grid.rotate(pos, Rotation::Clockwise),
            Err(GridError::OutOfBounds { pos })
        );
        assert_eq!(grid, Grid::new(3, 4).unwrap());
    }

    #[test]
    #[should_panic(expected = "Root (0, 4) outside of 3x4 grid")]
    fn test_set_root_out_of_bounds_panics() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.set_root(Position::new(0, 4));
    }

    #[test]
    fn test_bounded_neighbors() {
        let grid = Grid::new(5, 5).unwrap();
        let corner = Position::new(0, 0);
        assert_eq!(grid.neighbor(corner, Direction::Left), None);
        assert_eq!(grid.neighbor(corner, Direction::Top), None);
        assert_eq!(
            grid.neighbor(corner, Direction::Right),
            Some(Position::new(1, 0))
        );
        assert_eq!(
            grid.neighbor(corner, Direction::Bottom),
            Some(Position::new(0, 1))
        );
        assert_eq!(grid.neighbor(Position::new(4, 4), Direction::Right), None);
        assert_eq!(grid.neighbor(Position::new(4, 4), Direction::Bottom), None);
    }

    #[test]
    fn test_toroidal_neighbors_wrap_single_axis() {
        let mut grid = Grid::new(5, 4).unwrap();
        grid.set_topology(Topology::Toroidal);
        for y in 0..4 {
            assert_eq!(
                grid.neighbor(Position::new(0, y), Direction::Left),
                Some(Position::new(4, y))
            );
            assert_eq!(
                grid.neighbor(Position::new(4, y), Direction::Right),
                Some(Position::new(0, y))
            );
        }
        for x in 0..5 {
            assert_eq!(
                grid.neighbor(Position::new(x, 0), Direction::Top),
                Some(Position::new(x, 3))
            );
            assert_eq!(
                grid.neighbor(Position::new(x, 3), Direction::Bottom),
                Some(Position::new(x, 0))
            );
        }
    }

    #[test]
    fn test_wrapping_neighbor_ignores_topology() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            grid.wrapping_neighbor(Position::new(0, 1), Direction::Left),
            Some(Position::new(2, 1))
        );
        assert_eq!(
            grid.wrapping_neighbor(Position::new(1, 1), Direction::Left),
            Some(Position::new(0, 1))
        );
    }

    #[test]
    fn test_neighbor_of_outside_position() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_topology(Topology::Toroidal);
        assert_eq!(grid.neighbor(Position::new(100, 0), Direction::Left), None);
        assert_eq!(grid.neighbor(Position::new(3, 1), Direction::Left), None);
        assert_eq!(grid.neighbor(Position::new(1, 3), Direction::Top), None);
        assert_eq!(
            grid.wrapping_neighbor(Position::new(5, 0), Direction::Top),
            None
        );
        assert_eq!(
            grid.wrapping_neighbor(Position::new(0, 5), Direction::Right),
            None
        );
        assert_eq!(grid.connect(Position::new(3, 0), Direction::Left), None);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_connect_sets_reciprocal_connectors() {
        let mut grid = Grid::new(3, 3).unwrap();
        let next = grid.connect(Position::new(1, 1), Direction::Top);
        assert_eq!(next, Some(Position::new(1, 0)));
        assert_eq!(
            grid[Position::new(1, 1)].original(),
            ConnectorSet::from_iter([Direction::Top])
        );
        assert_eq!(
            grid[Position::new(1, 0)].current(),
            ConnectorSet::from_iter([Direction::Bottom])
        );
        assert!(grid.is_all_in_place());
        assert_eq!(grid.occupied_count(), 2);

        assert_eq!(grid.connect(Position::new(1, 0), Direction::Top), None);
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn test_rotate_and_put_in_place() {
        let mut grid = Grid::new(3, 3).unwrap();
        let root = grid.root();
        grid.connect(root, Direction::Left);
        grid.rotate(root, Rotation::Clockwise).unwrap();
        assert!(!grid.is_all_in_place());
        grid.put_in_place(root).unwrap();
        assert!(grid.is_all_in_place());

        grid.reset();
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_render() {
        let mut grid = Grid::new(3, 3).unwrap();
        let root = grid.root();
        grid.connect(root, Direction::Bottom);
        grid.connect(root, Direction::Right);
        let expected = [
            "`````````",
            "`````````",
            "`````````",
            "```      ",
            "``` **** ",
            "``` *    ",
            "``` * ```",
            "``` * ```",
            "```   ```",
        ]
        .join("\n");
        assert_eq!(grid.render(Layer::Original), expected);
        assert_eq!(grid.to_string(), expected);
    }

    proptest! {
        #[test]
        fn prop_neighbor_is_symmetric(
            width in 3usize..12,
            height in 3usize..12,
            x in 0usize..12,
            y in 0usize..12,
            dir in 0u8..4,
            toroidal: bool,
        ) {
            let mut grid = Grid::new(width, height).unwrap();
            if toroidal {
                grid.set_topology(Topology::Toroidal);
            }
            let pos = Position::new(x % width, y % height);
            let dir = Direction::from_index(dir);
            if let Some(next) = grid.neighbor(pos, dir) {
                prop_assert!(grid.contains(next));
                prop_assert_ne!(next, pos);
                prop_assert_eq!(grid.neighbor(next, dir.opposite()), Some(pos));
            } else {
                prop_assert!(!toroidal);
            }
        }
    }
}
