//! Best-first path search over a [`MultiLayerMap`].
//!
//! Dijkstra and A* share one relaxation core; the only difference is the
//! heuristic term in the frontier ordering. Decreasing-key updates are
//! handled by pushing duplicate frontier entries and skipping the stale
//! ones on pop, so the heap never needs removal.

use std::collections::BinaryHeap;
use std::fmt;
use std::time::{Duration, Instant};

use fieldmap_core::{AXIAL_DIRS, CostConfig, DIAGONAL_DIRS, GridPos, MultiLayerMap, TerrainCostTable};

use crate::cost::{edge_cost, minimum_base_cost};
use crate::heuristic::Heuristic;

/// Search algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Uniform-cost search; the heuristic contributes 0.
    Dijkstra,
    /// Best-first search guided by an admissible heuristic.
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dijkstra => write!(f, "dijkstra"),
            Self::AStar => write!(f, "astar"),
        }
    }
}

/// A complete path query result.
///
/// `path` runs from start to goal inclusive and has length 1 only when
/// start equals goal. `nodes_expanded` counts settled pops, excluding the
/// goal pop and stale re-pops, so Dijkstra-vs-A* comparisons are
/// meaningful.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub path: Vec<GridPos>,
    pub total_cost: f64,
    pub algorithm: Algorithm,
    pub nodes_expanded: usize,
    pub execution_time: Duration,
}

/// The frontier emptied without reaching the goal. Final for the query;
/// there is no partial path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoPathFound {
    pub start: GridPos,
    pub goal: GridPos,
}

impl fmt::Display for NoPathFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no path from {} to {}", self.start, self.goal)
    }
}

impl std::error::Error for NoPathFound {}

// ---------------------------------------------------------------------------
// Internal search state
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct Node {
    g: f64,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry, ordered by `f`-score with the monotonic insertion
/// sequence as explicit tie-break: among equal `f`-scores the
/// earliest-pushed entry pops first. Combined with the fixed neighbor
/// order and strict `<` relaxation this makes the earliest-discovered
/// equal-cost path win, which suppresses zig-zagging.
#[derive(Clone, Copy)]
struct OpenRef {
    f: f64,
    seq: u64,
    idx: usize,
}

impl PartialEq for OpenRef {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f).is_eq() && self.seq == other.seq
    }
}

impl Eq for OpenRef {}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other
            .f
            .total_cmp(&self.f)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable search state for one map size.
///
/// Owns the node array so repeated queries incur no allocations after
/// warm-up; a generation counter lazily invalidates all nodes between
/// queries. Each `PathFinder` serves one query at a time, but separate
/// finders may search the same map concurrently.
pub struct PathFinder {
    width: i32,
    height: i32,
    nodes: Vec<Node>,
    generation: u32,
}

impl PathFinder {
    /// Create a finder for maps of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            nodes: vec![Node::default(); len],
            generation: 0,
        }
    }

    /// Adapt to a new map size. Shrinking keeps the existing allocation
    /// and only bumps the generation; growing reallocates.
    pub fn set_dimensions(&mut self, width: i32, height: i32) {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        self.width = width;
        self.height = height;
        if len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
        } else {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }
    }

    #[inline]
    fn idx(&self, p: GridPos) -> usize {
        (p.y * self.width + p.x) as usize
    }

    #[inline]
    fn pos(&self, idx: usize) -> GridPos {
        GridPos::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    /// Run a path query from the map's start to its goal.
    ///
    /// Returns the least-cost path, or [`NoPathFound`] once the frontier
    /// is exhausted. With 4-directional movement the heuristic is
    /// Manhattan distance; with diagonals enabled it is octile distance,
    /// both scaled by the map's minimum passable base cost.
    pub fn find_path(
        &mut self,
        map: &MultiLayerMap,
        table: &TerrainCostTable,
        algorithm: Algorithm,
        allow_diagonal: bool,
        config: &CostConfig,
    ) -> Result<PathResult, NoPathFound> {
        let started = Instant::now();

        if map.width() != self.width || map.height() != self.height {
            self.set_dimensions(map.width(), map.height());
        }

        let start = map.start();
        let goal = map.goal();

        if start == goal {
            return Ok(PathResult {
                path: vec![start],
                total_cost: 0.0,
                algorithm,
                nodes_expanded: 0,
                execution_time: started.elapsed(),
            });
        }

        let min_cost = minimum_base_cost(map, table);
        let heuristic = Heuristic::for_movement(allow_diagonal);
        let estimate = |p: GridPos| match algorithm {
            Algorithm::AStar => heuristic.estimate(p, goal, min_cost),
            Algorithm::Dijkstra => 0.0,
        };

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let start_idx = self.idx(start);
        let goal_idx = self.idx(goal);
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(OpenRef {
            f: estimate(start),
            seq,
            idx: start_idx,
        });

        let mut nodes_expanded: usize = 0;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries: settled nodes and superseded pushes.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            nodes_expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_pos = self.pos(ci);

            let diag_count = if allow_diagonal { 4 } else { 0 };
            for &dir in AXIAL_DIRS.iter().chain(DIAGONAL_DIRS.iter().take(diag_count)) {
                let np = current_pos + dir;
                let Some(step) =
                    edge_cost(current_pos, np, map, table, config, allow_diagonal)
                else {
                    continue;
                };
                let tentative_g = current_g + step;

                let ni = self.idx(np);
                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Strict improvement required; ties keep the earlier path.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = f64::INFINITY;
                }

                n.g = tentative_g;
                n.parent = ci;
                n.open = true;

                seq += 1;
                open.push(OpenRef {
                    f: tentative_g + estimate(np),
                    seq,
                    idx: ni,
                });
            }
        };

        if !found {
            log::debug!("{algorithm}: no path from {start} to {goal} ({nodes_expanded} nodes expanded)");
            return Err(NoPathFound { start, goal });
        }

        // Reconstruct by walking parents back to the start.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.pos(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();

        let total_cost = self.nodes[goal_idx].g;
        let execution_time = started.elapsed();
        log::debug!(
            "{algorithm}: {start} -> {goal} cost {total_cost:.3}, {nodes_expanded} nodes expanded in {execution_time:?}"
        );

        Ok(PathResult {
            path,
            total_cost,
            algorithm,
            nodes_expanded,
            execution_time,
        })
    }
}

/// One-shot convenience wrapper around [`PathFinder::find_path`].
pub fn find_path(
    map: &MultiLayerMap,
    table: &TerrainCostTable,
    algorithm: Algorithm,
    allow_diagonal: bool,
    config: &CostConfig,
) -> Result<PathResult, NoPathFound> {
    PathFinder::new(map.width(), map.height()).find_path(
        map,
        table,
        algorithm,
        allow_diagonal,
        config,
    )
}
