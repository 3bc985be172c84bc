//! Cell sides and rotation senses.

use std::fmt::{self, Display};

/// One of the four sides of a cell.
///
/// The discriminant is the slot index used by [`ConnectorSet`], in the fixed
/// order Left, Top, Right, Bottom. Rotating clockwise moves a connector one
/// slot forward in this order.
///
/// [`ConnectorSet`]: crate::ConnectorSet
///
/// # Examples
///
/// ```
/// use sakura_core::Direction;
///
/// assert_eq!(Direction::Left.opposite(), Direction::Right);
/// assert_eq!(Direction::Top.delta(), (0, -1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Direction {
    /// The left side, towards decreasing `x`.
    Left = 0,
    /// The top side, towards decreasing `y`.
    Top = 1,
    /// The right side, towards increasing `x`.
    Right = 2,
    /// The bottom side, towards increasing `y`.
    Bottom = 3,
}

impl Direction {
    /// All directions in slot order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// Returns the direction stored in slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-3.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Top,
            2 => Self::Right,
            3 => Self::Bottom,
            _ => panic!("Invalid direction index: {index}"),
        }
    }

    /// Returns the slot index (0-3) of this direction.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the coordinate offset `(dx, dy)` of a one-cell step in this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Left => (-1, 0),
            Self::Top => (0, -1),
            Self::Right => (1, 0),
            Self::Bottom => (0, 1),
        }
    }

    /// Returns the direction pointing the other way, `(d + 2) mod 4`.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
        }
    }

    /// Returns the direction `steps` slots further in slot order, wrapping around.
    #[must_use]
    pub fn shifted(self, steps: u8) -> Self {
        Self::from_index((self.index() + steps % 4) % 4)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// The sense of a single quarter-turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// A quarter-turn clockwise: a connector on the left moves to the top.
    Clockwise,
    /// A quarter-turn counter-clockwise: a connector on the top moves to the left.
    CounterClockwise,
}

impl Rotation {
    /// Converts a "clockwise?" flag into a rotation.
    #[must_use]
    pub const fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    /// Returns `true` for [`Rotation::Clockwise`].
    #[must_use]
    pub const fn is_clockwise(self) -> bool {
        matches!(self, Self::Clockwise)
    }

    /// Returns the rotation that undoes this one.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}
