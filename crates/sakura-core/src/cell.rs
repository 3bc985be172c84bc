//! A single puzzle cell.

use crate::{ConnectionKind, ConnectorSet, Direction, Rotation};

/// Which of a cell's two connector sets to read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layer {
    /// The orientation the player sees and rotates.
    #[default]
    Current,
    /// The orientation fixed when the branch was generated.
    Original,
}

/// A puzzle cell with its original and current connector sets.
///
/// Generation writes both sets in lock-step through [`Cell::connect`]; gameplay only
/// ever touches the current set. The cell is *in place* when both sets are equal.
///
/// [`Cell::is_empty`], [`Cell::degree`] and [`Cell::kind`] describe the generated
/// shape and read the original set. Use [`Cell::connectors`] to query a layer that
/// was edited on its own.
///
/// # Examples
///
/// ```
/// use sakura_core::{Cell, Direction, Rotation};
///
/// let mut cell = Cell::new();
/// cell.connect(Direction::Left);
/// assert!(cell.is_in_place());
///
/// cell.rotate(Rotation::Clockwise);
/// assert!(!cell.is_in_place());
/// cell.rotate(Rotation::CounterClockwise);
/// assert!(cell.is_in_place());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    original: ConnectorSet,
    current: ConnectorSet,
}

impl Cell {
    /// Creates an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            original: ConnectorSet::EMPTY,
            current: ConnectorSet::EMPTY,
        }
    }

    /// Creates a cell in place with the given connectors.
    #[must_use]
    pub const fn in_place(connectors: ConnectorSet) -> Self {
        Self {
            original: connectors,
            current: connectors,
        }
    }

    /// Creates a cell from explicit original and current connector sets.
    #[must_use]
    pub const fn with_state(original: ConnectorSet, current: ConnectorSet) -> Self {
        Self { original, current }
    }

    /// Returns the connectors fixed at generation time.
    #[must_use]
    pub const fn original(&self) -> ConnectorSet {
        self.original
    }

    /// Returns the connectors as currently rotated.
    #[must_use]
    pub const fn current(&self) -> ConnectorSet {
        self.current
    }

    /// Returns the connector set of the given layer.
    #[must_use]
    pub const fn connectors(&self, layer: Layer) -> ConnectorSet {
        match layer {
            Layer::Current => self.current,
            Layer::Original => self.original,
        }
    }

    /// Opens or closes one connector on a single layer.
    pub fn set_connector(&mut self, dir: Direction, value: bool, layer: Layer) {
        match layer {
            Layer::Current => self.current.set(dir, value),
            Layer::Original => self.original.set(dir, value),
        }
    }

    /// Opens or closes one connector on both layers.
    pub fn set_connection(&mut self, dir: Direction, value: bool) {
        self.original.set(dir, value);
        self.current.set(dir, value);
    }

    /// Opens a connector on both layers.
    pub fn connect(&mut self, dir: Direction) {
        self.set_connection(dir, true);
    }

    /// Rotates the current connectors by one quarter-turn.
    pub fn rotate(&mut self, rotation: Rotation) {
        self.current.rotate(rotation);
    }

    /// Restores the current connectors to the original orientation.
    pub fn put_in_place(&mut self) {
        self.current = self.original;
    }

    /// Clears both layers.
    pub fn reset(&mut self) {
        self.original.clear();
        self.current.clear();
    }

    /// Returns `true` if the current orientation matches the original one.
    #[must_use]
    pub fn is_in_place(&self) -> bool {
        self.current == self.original
    }

    /// Returns `true` if the cell has no connector in the original layer.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Returns the number of connectors in the original layer.
    #[must_use]
    pub const fn degree(&self) -> usize {
        self.original.degree()
    }

    /// Classifies the shape of the original connectors.
    #[must_use]
    pub const fn kind(&self) -> ConnectionKind {
        self.original.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_connector_touches_one_layer() {
        let mut cell = Cell::new();
        cell.set_connector(Direction::Top, true, Layer::Current);
        assert!(cell.current().contains(Direction::Top));
        assert!(cell.original().is_empty());
        assert!(!cell.is_in_place());

        cell.set_connector(Direction::Top, true, Layer::Original);
        assert!(cell.is_in_place());
    }

    #[test]
    fn test_set_connection_touches_both_layers() {
        let mut cell = Cell::in_place(ConnectorSet::from_iter([Direction::Left, Direction::Top]));
        cell.set_connection(Direction::Left, false);
        assert_eq!(cell.original(), ConnectorSet::from_iter([Direction::Top]));
        assert!(cell.is_in_place());

        cell.set_connection(Direction::Bottom, true);
        assert_eq!(
            cell.current(),
            ConnectorSet::from_iter([Direction::Top, Direction::Bottom])
        );
        assert_eq!(cell.kind(), ConnectionKind::Straight);
    }

    #[test]
    fn test_shape_queries_read_original_layer() {
        let mut cell = Cell::new();
        cell.set_connector(Direction::Right, true, Layer::Current);
        assert!(cell.is_empty());
        assert_eq!(cell.degree(), 0);
        assert_eq!(cell.connectors(Layer::Current).degree(), 1);
    }

    #[test]
    fn test_rotate_touches_current_only() {
        let mut cell = Cell::in_place(ConnectorSet::from_iter([Direction::Left, Direction::Top]));
        cell.rotate(Rotation::Clockwise);
        assert_eq!(
            cell.original(),
            ConnectorSet::from_iter([Direction::Left, Direction::Top])
        );
        assert_eq!(
            cell.current(),
            ConnectorSet::from_iter([Direction::Top, Direction::Right])
        );
        assert_eq!(cell.degree(), 2);
        assert_eq!(cell.kind(), ConnectionKind::Corner);
    }

    #[test]
    fn test_put_in_place_and_reset() {
        let mut cell = Cell::in_place(ConnectorSet::from_iter([Direction::Bottom]));
        cell.rotate(Rotation::CounterClockwise);
        cell.put_in_place();
        assert!(cell.is_in_place());

        cell.reset();
        assert!(cell.is_empty());
        assert_eq!(cell, Cell::new());
    }

    #[test]
    fn test_symmetric_cell_is_in_place_after_half_turn() {
        let mut cell = Cell::in_place(ConnectorSet::from_iter([Direction::Left, Direction::Right]));
        cell.rotate(Rotation::Clockwise);
        assert!(!cell.is_in_place());
        cell.rotate(Rotation::Clockwise);
        assert!(cell.is_in_place());
    }
}
