//! Diamond tile hit-testing.
//!
//! An isometric tile covers a diamond on screen, not its bounding box; a
//! bounding-box test misattributes clicks near tile corners to the wrong
//! tile. Normalizing the click into tile-local diamond space reduces
//! membership to `|u| + |v| <= 1`.

use crate::config::IsoConfig;
use crate::coords::{GridCoord, IsoCoord};
use crate::transform::to_iso;

/// Normalize a screen point relative to a tile's projected position:
/// `u = 2 (X - Xc) / tile_width`, `v = 2 (Y - Yc) / tile_height`.
///
/// The result is in diamond space, where the tile's corners sit at
/// `(±1, 0)` and `(0, ±1)`.
#[inline]
pub fn normalize_to_diamond(point: IsoCoord, tile: GridCoord, config: &IsoConfig) -> (f64, f64) {
    let center = to_iso(tile, config);
    let u = (point.x - center.x) / config.half_tile_width();
    let v = (point.y - center.y) / config.half_tile_height();
    (u, v)
}

/// Whether a diamond-space point belongs to the tile. Boundary inclusive.
#[inline]
pub fn is_in_diamond(u: f64, v: f64) -> bool {
    u.abs() + v.abs() <= 1.0
}
