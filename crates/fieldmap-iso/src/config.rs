//! Isometric projection configuration.

use std::fmt;

/// Tile dimensions and elevation scaling for the isometric projection.
///
/// Validated at construction: tile dimensions must be positive (the inverse
/// transform divides by them) and the elevation scale non-negative. A scale
/// of zero flattens elevation out of the projection entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsoConfig {
    tile_width: f64,
    tile_height: f64,
    elevation_scale: f64,
}

impl IsoConfig {
    /// Create a config, failing fast on values that would break the
    /// projection downstream.
    pub fn new(
        tile_width: f64,
        tile_height: f64,
        elevation_scale: f64,
    ) -> Result<Self, IsoConfigError> {
        if !(tile_width > 0.0) || !tile_width.is_finite() {
            return Err(IsoConfigError::NonPositiveTileWidth(tile_width));
        }
        if !(tile_height > 0.0) || !tile_height.is_finite() {
            return Err(IsoConfigError::NonPositiveTileHeight(tile_height));
        }
        if !(elevation_scale >= 0.0) || !elevation_scale.is_finite() {
            return Err(IsoConfigError::NegativeElevationScale(elevation_scale));
        }
        Ok(Self {
            tile_width,
            tile_height,
            elevation_scale,
        })
    }

    /// Tile width in pixels.
    #[inline]
    pub fn tile_width(&self) -> f64 {
        self.tile_width
    }

    /// Tile height in pixels.
    #[inline]
    pub fn tile_height(&self) -> f64 {
        self.tile_height
    }

    /// Vertical pixel offset per elevation level.
    #[inline]
    pub fn elevation_scale(&self) -> f64 {
        self.elevation_scale
    }

    #[inline]
    pub(crate) fn half_tile_width(&self) -> f64 {
        self.tile_width / 2.0
    }

    #[inline]
    pub(crate) fn half_tile_height(&self) -> f64 {
        self.tile_height / 2.0
    }
}

impl Default for IsoConfig {
    /// 64×32 pixel tiles, 16 pixels per elevation level.
    fn default() -> Self {
        Self {
            tile_width: 64.0,
            tile_height: 32.0,
            elevation_scale: 16.0,
        }
    }
}

/// Invalid projection configuration, rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IsoConfigError {
    /// `tile_width` must be positive and finite.
    NonPositiveTileWidth(f64),
    /// `tile_height` must be positive and finite.
    NonPositiveTileHeight(f64),
    /// `elevation_scale` must be non-negative and finite.
    NegativeElevationScale(f64),
}

impl fmt::Display for IsoConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTileWidth(v) => {
                write!(f, "tile_width must be positive, got {v}")
            }
            Self::NonPositiveTileHeight(v) => {
                write!(f, "tile_height must be positive, got {v}")
            }
            Self::NegativeElevationScale(v) => {
                write!(f, "elevation_scale must be non-negative, got {v}")
            }
        }
    }
}

impl std::error::Error for IsoConfigError {}
