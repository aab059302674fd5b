//! **fieldmap-paths** — Multi-weighted pathfinding over layered grid maps.
//!
//! This crate provides least-cost route search across a
//! [`MultiLayerMap`](fieldmap_core::MultiLayerMap)'s terrain, elevation and
//! tactical-priority layers:
//!
//! - **Dijkstra** and **A\*** sharing one relaxation core ([`PathFinder`],
//!   [`find_path`])
//! - the directed edge-cost model ([`edge_cost`]) with destination-cell
//!   asymmetry and saturation capping
//! - admissible [`Heuristic`]s (Manhattan for 4-way movement, octile for
//!   8-way), scaled by the map's minimum passable base cost
//!
//! Tie-breaking among equal-cost paths is deterministic: neighbors are
//! enumerated in a fixed order, relaxation requires strict improvement, and
//! the frontier breaks `f`-score ties by insertion sequence, so the
//! earliest-discovered path wins and straight routes are preferred over
//! equal-cost zig-zags.

mod cost;
mod finder;
mod heuristic;

pub use cost::{edge_cost, is_diagonal_move, minimum_base_cost};
pub use finder::{Algorithm, NoPathFound, PathFinder, PathResult, find_path};
pub use heuristic::{Heuristic, manhattan, octile};
