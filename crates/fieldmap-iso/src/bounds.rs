//! Grid bounds validation for externally supplied coordinates.

use std::fmt;

/// Coordinate outside `[0, width) × [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grid coordinate ({}, {}) outside {}x{} map",
            self.x, self.y, self.width, self.height
        )
    }
}

impl std::error::Error for OutOfBounds {}

/// Reject coordinates outside `[0, width) × [0, height)`.
///
/// Must run before any layer-array indexing derived from external input
/// such as click coordinates; out-of-range values are reported, never
/// clamped or wrapped.
#[inline]
pub fn validate_grid_bounds(x: i32, y: i32, width: i32, height: i32) -> Result<(), OutOfBounds> {
    if x >= 0 && x < width && y >= 0 && y < height {
        Ok(())
    } else {
        Err(OutOfBounds {
            x,
            y,
            width,
            height,
        })
    }
}
