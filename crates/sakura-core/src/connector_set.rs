//! The open connectors of a single cell.
//!
//! This module provides [`ConnectorSet`], a four-slot boolean vector indexed by
//! [`Direction`], and [`ConnectionKind`], the shape classification used to pick a
//! figure when drawing a cell.
//!
//! # Examples
//!
//! ```
//! use sakura_core::{ConnectionKind, ConnectorSet, Direction, Rotation};
//!
//! let mut set = ConnectorSet::from_iter([Direction::Left, Direction::Top]);
//! assert_eq!(set.kind(), ConnectionKind::Corner);
//!
//! set.rotate(Rotation::Clockwise);
//! assert_eq!(set, ConnectorSet::from_iter([Direction::Top, Direction::Right]));
//! assert_eq!(set.to_string(), "0110");
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    str::FromStr,
};

use crate::{Direction, Rotation};

const MASK: u8 = 0b1111;

/// Which sides of a cell have an open connector.
///
/// Bit `i` is set when the side [`Direction::from_index(i)`] is open. Equality is
/// slot-wise, so two sets are equal only if they have the same orientation.
///
/// [`Direction::from_index(i)`]: Direction::from_index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConnectorSet {
    bits: u8,
}

impl ConnectorSet {
    /// A set with no open connector.
    pub const EMPTY: Self = Self { bits: 0 };

    /// A set with all four connectors open.
    pub const FULL: Self = Self { bits: MASK };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set from its raw bit representation.
    ///
    /// Returns `None` if bits above the four direction slots are set.
    #[must_use]
    pub const fn try_from_bits(bits: u8) -> Option<Self> {
        if bits & !MASK == 0 {
            Some(Self { bits })
        } else {
            None
        }
    }

    /// Returns the raw bit representation (bit `i` is slot `i`).
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Returns `true` if the connector towards `dir` is open.
    #[must_use]
    pub const fn contains(self, dir: Direction) -> bool {
        self.bits & (1 << dir.index()) != 0
    }

    /// Opens or closes the connector towards `dir`.
    pub fn set(&mut self, dir: Direction, value: bool) {
        if value {
            self.bits |= 1 << dir.index();
        } else {
            self.bits &= !(1 << dir.index());
        }
    }

    /// Opens the connector towards `dir`, returning `true` if it was closed.
    pub fn insert(&mut self, dir: Direction) -> bool {
        let was_open = self.contains(dir);
        self.set(dir, true);
        !was_open
    }

    /// Closes every connector.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Shifts every connector one slot in the rotation sense.
    ///
    /// Four rotations in the same sense restore the original set, and a rotation
    /// followed by its reverse is the identity.
    pub fn rotate(&mut self, rotation: Rotation) {
        *self = self.rotated(rotation);
    }

    /// Returns a copy of the set rotated by one quarter-turn.
    #[must_use]
    pub const fn rotated(self, rotation: Rotation) -> Self {
        let bits = match rotation {
            Rotation::Clockwise => (self.bits << 1) | (self.bits >> 3),
            Rotation::CounterClockwise => (self.bits >> 1) | (self.bits << 3),
        };
        Self { bits: bits & MASK }
    }

    /// Returns the number of slots equal to `value`.
    #[must_use]
    pub const fn count(self, value: bool) -> usize {
        let open = self.bits.count_ones() as usize;
        if value { open } else { 4 - open }
    }

    /// Returns the number of open connectors.
    #[must_use]
    pub const fn degree(self) -> usize {
        self.count(true)
    }

    /// Returns `true` if no connector is open.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Classifies the shape of the open connectors.
    #[must_use]
    pub const fn kind(self) -> ConnectionKind {
        match self.degree() {
            0 => ConnectionKind::Empty,
            1 => ConnectionKind::End,
            2 if self.bits == 0b0101 || self.bits == 0b1010 => ConnectionKind::Straight,
            2 => ConnectionKind::Corner,
            3 => ConnectionKind::Tee,
            _ => ConnectionKind::Cross,
        }
    }

    /// Returns an iterator over the open directions in slot order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter {
            bits: self.bits,
            next: 0,
        }
    }
}

impl FromIterator<Direction> for ConnectorSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut set = Self::new();
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

impl IntoIterator for ConnectorSet {
    type Item = Direction;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the open directions of a [`ConnectorSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u8,
    next: u8,
}

impl Iterator for Iter {
    type Item = Direction;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < 4 {
            let index = self.next;
            self.next += 1;
            if self.bits & (1 << index) != 0 {
                return Some(Direction::from_index(index));
            }
        }
        None
    }
}

impl FusedIterator for Iter {}

/// Formats the set as its four-character key, one `0`/`1` per slot in
/// Left, Top, Right, Bottom order.
impl Display for ConnectorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dir in Direction::ALL {
            f.write_str(if self.contains(dir) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`ConnectorSet`] key fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid connector key {key:?}: expected four `0`/`1` characters")]
pub struct ConnectorSetParseError {
    key: String,
}

impl FromStr for ConnectorSet {
    type Err = ConnectorSetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ConnectorSetParseError { key: s.to_owned() };
        if s.len() != 4 {
            return Err(err());
        }
        let mut set = Self::new();
        for (dir, ch) in Direction::ALL.into_iter().zip(s.chars()) {
            match ch {
                '0' => {}
                '1' => set.set(dir, true),
                _ => return Err(err()),
            }
        }
        Ok(set)
    }
}

/// Shape of a cell's open connectors, independent of orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    /// No connector.
    Empty,
    /// A single connector (a leaf of the branch).
    End,
    /// Two connectors on opposite sides.
    Straight,
    /// Two connectors on adjacent sides.
    Corner,
    /// Three connectors.
    Tee,
    /// All four connectors.
    Cross,
}

impl ConnectionKind {
    /// Returns the number of connectors of this shape.
    #[must_use]
    pub const fn degree(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::End => 1,
            Self::Straight | Self::Corner => 2,
            Self::Tee => 3,
            Self::Cross => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn set(key: &str) -> ConnectorSet {
        key.parse().expect("valid connector key")
    }

    #[test]
    fn test_rotate_clockwise_moves_left_to_top() {
        let mut s = set("1000");
        s.rotate(Rotation::Clockwise);
        assert_eq!(s, set("0100"));
        s.rotate(Rotation::Clockwise);
        assert_eq!(s, set("0010"));
        s.rotate(Rotation::Clockwise);
        assert_eq!(s, set("0001"));
        s.rotate(Rotation::Clockwise);
        assert_eq!(s, set("1000"));
    }

    #[test]
    fn test_rotate_counter_clockwise_moves_top_to_left() {
        let mut s = set("0110");
        s.rotate(Rotation::CounterClockwise);
        assert_eq!(s, set("1100"));
        s.rotate(Rotation::CounterClockwise);
        assert_eq!(s, set("1001"));
    }

    #[test]
    fn test_count_and_empty() {
        assert!(ConnectorSet::EMPTY.is_empty());
        assert_eq!(set("1011").count(true), 3);
        assert_eq!(set("1011").count(false), 1);
        assert_eq!(ConnectorSet::FULL.degree(), 4);
    }

    #[test]
    fn test_kind() {
        assert_eq!(set("0000").kind(), ConnectionKind::Empty);
        assert_eq!(set("0010").kind(), ConnectionKind::End);
        assert_eq!(set("1010").kind(), ConnectionKind::Straight);
        assert_eq!(set("0101").kind(), ConnectionKind::Straight);
        assert_eq!(set("1100").kind(), ConnectionKind::Corner);
        assert_eq!(set("1001").kind(), ConnectionKind::Corner);
        assert_eq!(set("1101").kind(), ConnectionKind::Tee);
        assert_eq!(set("1111").kind(), ConnectionKind::Cross);
        for bits in 0..16 {
            let s = ConnectorSet::try_from_bits(bits).unwrap();
            assert_eq!(s.kind().degree(), s.degree());
        }
    }

    #[test]
    fn test_iter_in_slot_order() {
        let dirs: Vec<_> = set("1011").iter().collect();
        assert_eq!(dirs, [Direction::Left, Direction::Right, Direction::Bottom]);
    }

    #[test]
    fn test_parse_rejects_bad_keys() {
        assert!("101".parse::<ConnectorSet>().is_err());
        assert!("10201".parse::<ConnectorSet>().is_err());
        assert!("10a1".parse::<ConnectorSet>().is_err());
        assert!(ConnectorSet::try_from_bits(0x10).is_none());
    }

    proptest! {
        #[test]
        fn prop_four_rotations_are_identity(bits in 0u8..16, clockwise: bool) {
            let original = ConnectorSet::try_from_bits(bits).unwrap();
            let rotation = Rotation::from_clockwise(clockwise);
            let mut s = original;
            for _ in 0..4 {
                s.rotate(rotation);
            }
            prop_assert_eq!(s, original);
        }

        #[test]
        fn prop_rotation_then_reverse_is_identity(bits in 0u8..16, clockwise: bool) {
            let original = ConnectorSet::try_from_bits(bits).unwrap();
            let rotation = Rotation::from_clockwise(clockwise);
            prop_assert_eq!(original.rotated(rotation).rotated(rotation.reversed()), original);
        }

        #[test]
        fn prop_rotation_preserves_kind(bits in 0u8..16) {
            let s = ConnectorSet::try_from_bits(bits).unwrap();
            prop_assert_eq!(s.rotated(Rotation::Clockwise).kind(), s.kind());
        }

        #[test]
        fn prop_rotation_moves_each_connector_one_slot(bits in 0u8..16) {
            let s = ConnectorSet::try_from_bits(bits).unwrap();
            let r = s.rotated(Rotation::Clockwise);
            for dir in Direction::ALL {
                prop_assert_eq!(s.contains(dir), r.contains(dir.shifted(1)));
            }
        }
    }
}
