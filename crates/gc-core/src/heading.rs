//! Compass heading and rotation.
//!
//! Rotation is index arithmetic over the clockwise table `[N, E, S, W]`:
//! right is `(i + 1) mod 4`, left is `(i + 3) mod 4`.

use std::fmt;
use std::str::FromStr;

use crate::{GcError, GcResult};

/// Direction a car is facing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    North,
    #[cfg_attr(feature = "serde", serde(rename = "E"))]
    East,
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    South,
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    West,
}

impl Heading {
    /// All headings in clockwise order, starting at north.
    pub const CLOCKWISE: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Position of `self` in [`CLOCKWISE`](Self::CLOCKWISE).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East  => 1,
            Heading::South => 2,
            Heading::West  => 3,
        }
    }

    /// One quarter turn clockwise.
    #[inline]
    pub fn right(self) -> Heading {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    /// One quarter turn counter-clockwise.
    #[inline]
    pub fn left(self) -> Heading {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    /// Unit cell offset `(dx, dy)` for a forward move.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East  => (1, 0),
            Heading::South => (0, -1),
            Heading::West  => (-1, 0),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East  => 'E',
            Heading::South => 'S',
            Heading::West  => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = GcError;

    /// Accepts `N`, `E`, `S`, `W` in either case.
    fn try_from(c: char) -> GcResult<Self> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            _   => Err(GcError::InvalidHeading(c.to_string())),
        }
    }
}

impl FromStr for Heading {
    type Err = GcError;

    fn from_str(s: &str) -> GcResult<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Heading::try_from(c),
            _ => Err(GcError::InvalidHeading(s.to_owned())),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
