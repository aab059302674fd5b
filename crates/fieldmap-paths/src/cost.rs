//! Edge-cost model over the map's three layers.
//!
//! The cost of an edge depends on the terrain and priority of the
//! **destination** cell only; entering a cell costs according to that
//! cell's properties. The elevation delta depends on both endpoints.

use fieldmap_core::{CostConfig, GridPos, MultiLayerMap, TerrainCostTable};

/// Whether the move from `u` to `v` changes both axes by exactly one.
#[inline]
pub fn is_diagonal_move(u: GridPos, v: GridPos) -> bool {
    (v.x - u.x).abs() == 1 && (v.y - u.y).abs() == 1
}

/// Cost of the directed edge `u -> v`, or `None` when the edge is
/// unreachable (impassable destination, disallowed diagonal, or `v`
/// outside the map).
///
/// For reachable edges:
///
/// ```text
/// cost = base(v) * κ
///      + ascent(v)  * max(0,  Δh)
///      + descent(v) * max(0, -Δh)
///      + priority_weight * priority(v)
/// ```
///
/// with `κ = diagonal_factor(v)` for diagonal moves and `1` otherwise, and
/// `Δh = elevation(v) - elevation(u)`. Finite costs above the config's
/// `max_cost_cap` saturate to the cap; the unreachable case is never
/// saturated.
pub fn edge_cost(
    u: GridPos,
    v: GridPos,
    map: &MultiLayerMap,
    table: &TerrainCostTable,
    config: &CostConfig,
    allow_diagonal: bool,
) -> Option<f64> {
    let code = map.terrain_at(v)?;
    let terrain = table.lookup(code);
    if !terrain.passable {
        return None;
    }

    let diagonal = is_diagonal_move(u, v);
    if diagonal && !allow_diagonal {
        return None;
    }

    let kappa = if diagonal { terrain.diagonal_factor } else { 1.0 };
    let delta_h = map.elevation_at(v)? - map.elevation_at(u)?;

    let mut cost = terrain.base_cost * kappa
        + terrain.ascent_cost * f64::from(delta_h.max(0))
        + terrain.descent_cost * f64::from((-delta_h).max(0))
        + config.priority_weight() * map.priority_at(v)?;

    if cost > config.max_cost_cap() {
        cost = config.max_cost_cap();
    }
    Some(cost)
}

/// Minimum base cost over all passable terrain codes present on the map.
///
/// Used to scale the heuristics; the result is a lower bound on any edge's
/// cost because ascent/descent/priority components are non-negative under a
/// non-negative priority weight and the diagonal factor is at least 1.
/// Defaults to `1.0` when no passable terrain exists, so the heuristic
/// never degenerates to zero.
pub fn minimum_base_cost(map: &MultiLayerMap, table: &TerrainCostTable) -> f64 {
    let mut min_cost = f64::INFINITY;
    for p in map.positions() {
        let Some(code) = map.terrain_at(p) else {
            continue;
        };
        let terrain = table.lookup(code);
        if terrain.passable && terrain.base_cost < min_cost {
            min_cost = terrain.base_cost;
        }
    }
    if min_cost.is_finite() { min_cost } else { 1.0 }
}
