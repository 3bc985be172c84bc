//! Core data structures for the Sakura rotation puzzle.
//!
//! A puzzle is a rectangular [`Grid`] of [`Cell`]s. Every cell carries up to four
//! pipe connectors, stored twice: the *original* orientation fixed when a branch is
//! generated, and the *current* orientation the player rotates. The puzzle is solved
//! when every cell is back in its original orientation.
//!
//! # Overview
//!
//! 1. **Directions and connectors**
//!    - [`direction`]: the four sides of a cell and the two rotation senses
//!    - [`connector_set`]: which sides of one cell have an open connector
//!
//! 2. **Cells and positions**
//!    - [`cell`]: original and current connector sets of a single cell
//!    - [`position`]: grid coordinates and dense coordinate sets
//!
//! 3. **Grid and connectivity**
//!    - [`grid`]: the board, its root cell and topology (bounded or toroidal)
//!    - [`connectivity`]: flood fill of the cells currently piped to the root
//!
//! # Examples
//!
//! ```
//! use sakura_core::{Direction, Grid, Position, Rotation, connectivity};
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! let root = grid.root();
//! let right = grid.connect(root, Direction::Right).unwrap();
//! assert_eq!(right, Position::new(2, 1));
//!
//! // Both ends are connected, so both are alive.
//! let alive = connectivity::alive_cells(&grid);
//! assert!(alive.contains(root) && alive.contains(right));
//!
//! // Rotating one end breaks the link.
//! grid.rotate(right, Rotation::Clockwise).unwrap();
//! assert!(!grid.is_all_in_place());
//! assert!(!connectivity::alive_cells(&grid).contains(right));
//! ```

pub mod cell;
pub mod connectivity;
pub mod connector_set;
pub mod direction;
pub mod grid;
pub mod position;

pub use self::{
    cell::{Cell, Layer},
    connector_set::{ConnectionKind, ConnectorSet, ConnectorSetParseError},
    direction::{Direction, Rotation},
    grid::{Grid, GridError, Topology},
    position::{Position, PositionSet},
};
