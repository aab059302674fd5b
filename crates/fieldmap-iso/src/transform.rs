//! Forward and inverse grid / isometric projections.
//!
//! The forward projection drops one degree of freedom: a screen point
//! corresponds to a whole line of `(x, y, h)` solutions, so the inverse
//! needs the elevation supplied externally (typically looked up from the
//! map's elevation layer at the candidate tile).

use crate::config::IsoConfig;
use crate::coords::{GridCoord, IsoCoord, IsoCoordInt};

/// Project a grid coordinate to isometric screen coordinates.
///
/// ```text
/// X = (tile_width / 2) * (x - y)
/// Y = (tile_height / 2) * (x + y) - elevation_scale * h
/// ```
#[inline]
pub fn to_iso(grid: GridCoord, config: &IsoConfig) -> IsoCoord {
    let x = f64::from(grid.x);
    let y = f64::from(grid.y);
    IsoCoord {
        x: config.half_tile_width() * (x - y),
        y: config.half_tile_height() * (x + y) - config.elevation_scale() * f64::from(grid.h),
    }
}

/// Recover the grid coordinate under a screen point, given the elevation
/// at the candidate tile.
///
/// Adjusts Y for elevation, solves the 2×2 linear system, and rounds each
/// axis to the nearest integer with round-half-to-even — the same rounding
/// rule [`to_iso_int`] uses, which keeps the two quantizations consistent.
/// For any `to_iso` output of an integer grid coordinate this recovers the
/// original `(x, y)` exactly.
#[inline]
pub fn to_grid(iso: IsoCoord, elevation: i32, config: &IsoConfig) -> GridCoord {
    let y_adjusted = iso.y + config.elevation_scale() * f64::from(elevation);

    let x_term = iso.x / config.half_tile_width();
    let y_term = y_adjusted / config.half_tile_height();

    let grid_x = (x_term + y_term) / 2.0;
    let grid_y = (y_term - x_term) / 2.0;

    GridCoord {
        x: grid_x.round_ties_even() as i32,
        y: grid_y.round_ties_even() as i32,
        h: elevation,
    }
}

/// Project to pixel-exact integer screen coordinates.
///
/// Applies [`to_iso`] and rounds both axes half-to-even.
#[inline]
pub fn to_iso_int(grid: GridCoord, config: &IsoConfig) -> IsoCoordInt {
    let iso = to_iso(grid, config);
    IsoCoordInt {
        x: iso.x.round_ties_even() as i32,
        y: iso.y.round_ties_even() as i32,
    }
}

/// Project to the tile's center point, a quarter tile-height below the
/// anchor. Useful for sprite positioning.
#[inline]
pub fn to_iso_center(grid: GridCoord, config: &IsoConfig) -> IsoCoord {
    let base = to_iso(grid, config);
    IsoCoord {
        x: base.x,
        y: base.y + config.tile_height() / 4.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_origin() {
        let cfg = IsoConfig::default();
        assert_eq!(to_iso(GridCoord::flat(0, 0), &cfg), IsoCoord::new(0.0, 0.0));
    }

    #[test]
    fn forward_formula() {
        let cfg = IsoConfig::default();
        // X = 32*(3-1) = 64, Y = 16*(3+1) - 16*2 = 32
        let iso = to_iso(GridCoord::new(3, 1, 2), &cfg);
        assert_eq!(iso, IsoCoord::new(64.0, 32.0));
    }

    #[test]
    fn elevation_raises_tile_on_screen() {
        let cfg = IsoConfig::default();
        let ground = to_iso(GridCoord::new(2, 2, 0), &cfg);
        let raised = to_iso(GridCoord::new(2, 2, 3), &cfg);
        assert_eq!(raised.x, ground.x);
        assert_eq!(raised.y, ground.y - 48.0);
    }

    #[test]
    fn round_trip_is_exact_over_supported_range() {
        let cfg = IsoConfig::default();
        for x in 0..100 {
            for y in 0..100 {
                for h in 0..=10 {
                    let grid = GridCoord::new(x, y, h);
                    let back = to_grid(to_iso(grid, &cfg), h, &cfg);
                    assert_eq!(back, grid, "round trip failed at {grid}");
                }
            }
        }
    }

    #[test]
    fn round_trip_pixel_error_within_half_pixel() {
        let cfg = IsoConfig::new(64.0, 32.0, 16.0).unwrap();
        for x in 0..10 {
            for y in 0..10 {
                for h in 0..3 {
                    let iso = to_iso(GridCoord::new(x, y, h), &cfg);
                    let recovered = to_iso(to_grid(iso, h, &cfg), &cfg);
                    assert!((recovered.x - iso.x).abs() <= 0.5);
                    assert!((recovered.y - iso.y).abs() <= 0.5);
                }
            }
        }
    }

    #[test]
    fn inverse_needs_matching_elevation() {
        let cfg = IsoConfig::default();
        let iso = to_iso(GridCoord::new(4, 4, 2), &cfg);
        // With the wrong elevation the recovered cell drifts.
        let wrong = to_grid(iso, 0, &cfg);
        assert_ne!((wrong.x, wrong.y), (4, 4));
        let right = to_grid(iso, 2, &cfg);
        assert_eq!((right.x, right.y), (4, 4));
    }

    #[test]
    fn to_iso_int_rounds_half_to_even() {
        // Odd tile dimensions produce .5 pixel positions.
        let cfg = IsoConfig::new(65.0, 33.0, 16.0).unwrap();
        let px = to_iso_int(GridCoord::flat(1, 0), &cfg);
        // X = 32.5 -> 32, Y = 16.5 -> 16
        assert_eq!(px, IsoCoordInt::new(32, 16));
        let px = to_iso_int(GridCoord::flat(3, 0), &cfg);
        // X = 97.5 -> 98, Y = 49.5 -> 50 (ties go to even)
        assert_eq!(px, IsoCoordInt::new(98, 50));
    }

    #[test]
    fn center_is_quarter_tile_below_anchor() {
        let cfg = IsoConfig::default();
        let anchor = to_iso(GridCoord::flat(2, 1), &cfg);
        let center = to_iso_center(GridCoord::flat(2, 1), &cfg);
        assert_eq!(center.x, anchor.x);
        assert_eq!(center.y, anchor.y + 8.0);
    }

    #[test]
    fn zero_elevation_scale_ignores_height() {
        let cfg = IsoConfig::new(64.0, 32.0, 0.0).unwrap();
        let a = to_iso(GridCoord::new(3, 2, 0), &cfg);
        let b = to_iso(GridCoord::new(3, 2, 7), &cfg);
        assert_eq!(a, b);
    }
}
