//! Transform-layer value types.

use std::fmt;

/// A logical grid coordinate with elevation level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
    pub h: i32,
}

impl GridCoord {
    /// Create a coordinate with elevation.
    #[inline]
    pub const fn new(x: i32, y: i32, h: i32) -> Self {
        Self { x, y, h }
    }

    /// Create a ground-level (h = 0) coordinate.
    #[inline]
    pub const fn flat(x: i32, y: i32) -> Self {
        Self { x, y, h: 0 }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, h={})", self.x, self.y, self.h)
    }
}

/// An isometric screen coordinate in sub-pixel precision.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsoCoord {
    pub x: f64,
    pub y: f64,
}

impl IsoCoord {
    /// Create a screen coordinate.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A pixel-quantized isometric screen coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsoCoordInt {
    pub x: i32,
    pub y: i32,
}

impl IsoCoordInt {
    /// Create a pixel coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
