//! Grid coordinates and dense coordinate sets.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

/// A cell coordinate, `x` counting columns from the left and `y` rows from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Position {
    /// The top-left corner.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a position from its column and row.
    #[must_use]
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// A set of positions inside a `width × height` rectangle.
///
/// Membership is stored densely in row-major order, so iteration always yields
/// positions top to bottom, left to right.
///
/// # Examples
///
/// ```
/// use sakura_core::{Position, PositionSet};
///
/// let mut set = PositionSet::new(3, 3);
/// assert!(set.insert(Position::new(2, 0)));
/// assert!(set.insert(Position::new(0, 1)));
/// assert!(!set.insert(Position::new(2, 0)));
///
/// let positions: Vec<_> = set.iter().collect();
/// assert_eq!(positions, [Position::new(2, 0), Position::new(0, 1)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSet {
    width: usize,
    height: usize,
    members: Vec<bool>,
    len: usize,
}

impl PositionSet {
    /// Creates an empty set over a `width × height` rectangle.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            members: vec![false; width * height],
            len: 0,
        }
    }

    /// Creates a set containing every position of a `width × height` rectangle.
    #[must_use]
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            members: vec![true; width * height],
            len: width * height,
        }
    }

    /// Returns the width of the covered rectangle.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the covered rectangle.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.x < self.width && pos.y < self.height).then_some(pos.y * self.width + pos.x)
    }

    /// Adds a position, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the covered rectangle.
    pub fn insert(&mut self, pos: Position) -> bool {
        let Some(i) = self.index(pos) else {
            panic!(
                "Position {pos} outside of {}x{} set",
                self.width, self.height
            );
        };
        let inserted = !self.members[i];
        self.members[i] = true;
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a position, returning `true` if it was present.
    pub fn remove(&mut self, pos: Position) -> bool {
        let Some(i) = self.index(pos) else {
            return false;
        };
        let removed = self.members[i];
        self.members[i] = false;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns `true` if the position is in the set.
    ///
    /// Positions outside the covered rectangle are never members.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.members[i])
    }

    /// Keeps only the positions for which `f` returns `true`.
    pub fn retain(&mut self, mut f: impl FnMut(Position) -> bool) {
        for i in 0..self.members.len() {
            if self.members[i] && !f(Position::new(i % self.width, i / self.width)) {
                self.members[i] = false;
                self.len -= 1;
            }
        }
    }

    /// Removes every position.
    pub fn clear(&mut self) {
        self.members.fill(false);
        self.len = 0;
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set has no position.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over the positions in row-major order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            set: self,
            next: 0,
            remaining: self.len,
        }
    }
}

impl<'a> IntoIterator for &'a PositionSet {
    type Item = Position;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Row-major iterator over a [`PositionSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    set: &'a PositionSet,
    next: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.set.members.len() {
            let i = self.next;
            self.next += 1;
            if self.set.members[i] {
                self.remaining -= 1;
                return Some(Position::new(i % self.set.width, i / self.set.width));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for Iter<'_> {}
impl ExactSizeIterator for Iter<'_> {}
