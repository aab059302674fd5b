//! Grid geometry: [`GridPos`] and the fixed direction tables.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// A 2D integer grid position. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

/// The four axial step directions: up, down, left, right.
///
/// Neighbor enumeration order is fixed; among equal-cost paths the search
/// engine settles on the earliest-discovered one, so reordering this table
/// changes which of several optimal paths is returned.
pub const AXIAL_DIRS: [GridPos; 4] = [
    GridPos::new(0, -1),
    GridPos::new(0, 1),
    GridPos::new(-1, 0),
    GridPos::new(1, 0),
];

/// The four diagonal step directions, enumerated after [`AXIAL_DIRS`].
pub const DIAGONAL_DIRS: [GridPos; 4] = [
    GridPos::new(-1, -1),
    GridPos::new(-1, 1),
    GridPos::new(1, -1),
    GridPos::new(1, 1),
];

impl GridPos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a position shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four axial neighbours, in [`AXIAL_DIRS`] order.
    #[inline]
    pub fn neighbors_axial(self) -> [GridPos; 4] {
        [
            self + AXIAL_DIRS[0],
            self + AXIAL_DIRS[1],
            self + AXIAL_DIRS[2],
            self + AXIAL_DIRS[3],
        ]
    }

    /// All eight neighbours: the four axial ones first, then the diagonals,
    /// each in table order.
    #[inline]
    pub fn neighbors_all(self) -> [GridPos; 8] {
        [
            self + AXIAL_DIRS[0],
            self + AXIAL_DIRS[1],
            self + AXIAL_DIRS[2],
            self + AXIAL_DIRS[3],
            self + DIAGONAL_DIRS[0],
            self + DIAGONAL_DIRS[1],
            self + DIAGONAL_DIRS[2],
            self + DIAGONAL_DIRS[3],
        ]
    }
}

impl Hash for GridPos {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for GridPos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridPos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for GridPos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridPos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
