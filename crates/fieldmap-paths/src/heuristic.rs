//! Admissible distance estimates for A*.

use fieldmap_core::GridPos;

/// √2 − 1, the octile diagonal-shortcut coefficient.
const OCTILE_DIAG: f64 = 0.41421356237;

/// Manhattan (L1) distance scaled by the map's minimum base cost.
#[inline]
pub fn manhattan(pos: GridPos, goal: GridPos, min_cost: f64) -> f64 {
    let dx = f64::from((pos.x - goal.x).abs());
    let dy = f64::from((pos.y - goal.y).abs());
    (dx + dy) * min_cost
}

/// Octile distance scaled by the map's minimum base cost, for
/// 8-directional movement.
#[inline]
pub fn octile(pos: GridPos, goal: GridPos, min_cost: f64) -> f64 {
    let dx = f64::from((pos.x - goal.x).abs());
    let dy = f64::from((pos.y - goal.y).abs());
    (dx.max(dy) + OCTILE_DIAG * dx.min(dy)) * min_cost
}

/// Heuristic selector. Both variants are admissible as long as `min_cost`
/// does not exceed the true minimum per-step cost of any edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// L1 distance, for 4-directional movement.
    Manhattan,
    /// Diagonal-shortcut distance, for 8-directional movement.
    Octile,
}

impl Heuristic {
    /// The admissible heuristic for the given movement model.
    #[inline]
    pub fn for_movement(allow_diagonal: bool) -> Self {
        if allow_diagonal {
            Self::Octile
        } else {
            Self::Manhattan
        }
    }

    /// Lower-bound estimate of the remaining cost from `pos` to `goal`.
    #[inline]
    pub fn estimate(self, pos: GridPos, goal: GridPos, min_cost: f64) -> f64 {
        match self {
            Self::Manhattan => manhattan(pos, goal, min_cost),
            Self::Octile => octile(pos, goal, min_cost),
        }
    }
}
