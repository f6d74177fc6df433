//! Discrete grid coordinates and bounds.
//!
//! The grid spans `[0, width) × [0, height)`.  `+y` is north and `+x` is east.
//! Coordinates are `i32`; `GridBounds::new` rejects sides that do not fit in
//! `i32`, so a one-cell step from any in-bounds cell can never overflow.

use std::fmt;

use crate::{GcError, GcResult, Heading};

/// One grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step along `heading`, ignoring bounds.
    #[inline]
    pub fn neighbour(self, heading: Heading) -> GridPos {
        let (dx, dy) = heading.delta();
        GridPos::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        GridPos::new(x, y)
    }
}

/// Width and height of the simulation field.  Fixed for a simulation's life.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    width:  u32,
    height: u32,
}

impl GridBounds {
    /// Validate and construct bounds.  Both sides must be positive.
    pub fn new(width: u32, height: u32) -> GcResult<Self> {
        let max = i32::MAX as u32;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(GcError::InvalidGrid { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    #[inline]
    fn contains_x(self, x: i32) -> bool {
        x >= 0 && (x as u32) < self.width
    }

    #[inline]
    fn contains_y(self, y: i32) -> bool {
        y >= 0 && (y as u32) < self.height
    }

    /// `true` if `pos` lies on the grid.
    #[inline]
    pub fn contains(self, pos: GridPos) -> bool {
        self.contains_x(pos.x) && self.contains_y(pos.y)
    }

    /// Move one cell from `from` along `heading`, clamped per axis.
    ///
    /// Each axis of the candidate cell is checked on its own: an off-grid x
    /// keeps the old x, an off-grid y keeps the old y.
    pub fn step(self, from: GridPos, heading: Heading) -> GridPos {
        let candidate = from.neighbour(heading);
        GridPos {
            x: if self.contains_x(candidate.x) { candidate.x } else { from.x },
            y: if self.contains_y(candidate.y) { candidate.y } else { from.y },
        }
    }

    /// Number of cells on the grid.
    pub fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}
