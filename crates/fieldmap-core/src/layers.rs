//! Multi-layer map: terrain, elevation and tactical-priority grids.

use std::fmt;

use crate::geom::GridPos;

/// A rectangular map with three same-shaped layers plus start and goal.
///
/// Layers are stored row-major and never change after construction; any
/// number of searches may read the same map concurrently. Terrain codes are
/// interpreted through a `TerrainCostTable` supplied separately, so the map
/// itself carries no cost semantics.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLayerMap {
    terrain: Vec<char>,
    elevation: Vec<i32>,
    priority: Vec<f64>,
    width: i32,
    height: i32,
    start: GridPos,
    goal: GridPos,
}

impl MultiLayerMap {
    /// Build a map from row-of-rows layers.
    ///
    /// All three layers must be non-empty, rectangular and share the same
    /// shape, and `start` / `goal` must lie within it. Passability of start
    /// and goal is the loader's responsibility since it depends on the
    /// terrain table in use.
    pub fn new(
        terrain: Vec<Vec<char>>,
        elevation: Vec<Vec<i32>>,
        priority: Vec<Vec<f64>>,
        start: GridPos,
        goal: GridPos,
    ) -> Result<Self, MapError> {
        let height = terrain.len();
        let width = terrain.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(MapError::EmptyLayer { layer: "terrain" });
        }

        let terrain = flatten("terrain", terrain, width)?;
        let elevation = flatten("elevation", elevation, width)?;
        let priority = flatten("priority", priority, width)?;

        if elevation.len() != terrain.len() {
            return Err(MapError::LayerShapeMismatch {
                layer: "elevation",
                expected: terrain.len(),
                actual: elevation.len(),
            });
        }
        if priority.len() != terrain.len() {
            return Err(MapError::LayerShapeMismatch {
                layer: "priority",
                expected: terrain.len(),
                actual: priority.len(),
            });
        }

        let map = Self {
            terrain,
            elevation,
            priority,
            width: width as i32,
            height: height as i32,
            start,
            goal,
        };
        if !map.contains(start) {
            return Err(MapError::EndpointOutOfBounds {
                name: "start",
                pos: start,
            });
        }
        if !map.contains(goal) {
            return Err(MapError::EndpointOutOfBounds {
                name: "goal",
                pos: goal,
            });
        }
        Ok(map)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Start position.
    #[inline]
    pub fn start(&self) -> GridPos {
        self.start
    }

    /// Goal position.
    #[inline]
    pub fn goal(&self) -> GridPos {
        self.goal
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn contains(&self, p: GridPos) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn idx(&self, p: GridPos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Terrain code at `p`, or `None` if out of bounds.
    #[inline]
    pub fn terrain_at(&self, p: GridPos) -> Option<char> {
        self.idx(p).map(|i| self.terrain[i])
    }

    /// Elevation level at `p`, or `None` if out of bounds.
    #[inline]
    pub fn elevation_at(&self, p: GridPos) -> Option<i32> {
        self.idx(p).map(|i| self.elevation[i])
    }

    /// Tactical priority at `p`, or `None` if out of bounds.
    #[inline]
    pub fn priority_at(&self, p: GridPos) -> Option<f64> {
        self.idx(p).map(|i| self.priority[i])
    }

    /// Row-major iterator over all positions in the map.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        let w = self.width;
        (0..self.width * self.height).map(move |i| GridPos::new(i % w, i / w))
    }
}

fn flatten<T>(layer: &'static str, rows: Vec<Vec<T>>, width: usize) -> Result<Vec<T>, MapError> {
    let mut flat = Vec::with_capacity(rows.len() * width);
    for (row_idx, row) in rows.into_iter().enumerate() {
        if row.len() != width {
            return Err(MapError::NonRectangular {
                layer,
                row: row_idx,
                expected: width,
                actual: row.len(),
            });
        }
        flat.extend(row);
    }
    Ok(flat)
}

/// Errors that can occur when assembling a [`MultiLayerMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A layer has no cells.
    EmptyLayer { layer: &'static str },
    /// A row's width differs from the first row's.
    NonRectangular {
        layer: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A layer's total cell count differs from the terrain layer's.
    LayerShapeMismatch {
        layer: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Start or goal lies outside the map.
    EndpointOutOfBounds { name: &'static str, pos: GridPos },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayer { layer } => write!(f, "{layer} layer is empty"),
            Self::NonRectangular {
                layer,
                row,
                expected,
                actual,
            } => write!(
                f,
                "non-rectangular {layer} layer: row {row} has {actual} cells, expected {expected}"
            ),
            Self::LayerShapeMismatch {
                layer,
                expected,
                actual,
            } => write!(
                f,
                "{layer} layer has {actual} cells, terrain layer has {expected}"
            ),
            Self::EndpointOutOfBounds { name, pos } => {
                write!(f, "{name} position {pos} is outside the map")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_3x3() -> MultiLayerMap {
        MultiLayerMap::new(
            vec![
                vec!['S', '.', '.'],
                vec!['.', '#', '.'],
                vec!['.', '.', 'G'],
            ],
            vec![vec![0, 0, 0], vec![0, 2, 0], vec![0, 0, 0]],
            vec![
                vec![0.0, 0.0, 0.0],
                vec![0.0, 5.0, 0.0],
                vec![0.0, 0.0, 0.0],
            ],
            GridPos::new(0, 0),
            GridPos::new(2, 2),
        )
        .unwrap()
    }

    #[test]
    fn accessors_return_layer_values() {
        let map = flat_3x3();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 3);
        assert_eq!(map.terrain_at(GridPos::new(1, 1)), Some('#'));
        assert_eq!(map.elevation_at(GridPos::new(1, 1)), Some(2));
        assert_eq!(map.priority_at(GridPos::new(1, 1)), Some(5.0));
        assert_eq!(map.terrain_at(GridPos::new(2, 2)), Some('G'));
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let map = flat_3x3();
        assert_eq!(map.terrain_at(GridPos::new(-1, 0)), None);
        assert_eq!(map.elevation_at(GridPos::new(3, 0)), None);
        assert_eq!(map.priority_at(GridPos::new(0, 3)), None);
    }

    #[test]
    fn positions_iterates_row_major() {
        let map = flat_3x3();
        let pts: Vec<_> = map.positions().collect();
        assert_eq!(pts.len(), 9);
        assert_eq!(pts[0], GridPos::new(0, 0));
        assert_eq!(pts[1], GridPos::new(1, 0));
        assert_eq!(pts[8], GridPos::new(2, 2));
    }

    #[test]
    fn non_rectangular_terrain_rejected() {
        let err = MultiLayerMap::new(
            vec![vec!['.', '.'], vec!['.']],
            vec![vec![0, 0], vec![0, 0]],
            vec![vec![0.0, 0.0], vec![0.0, 0.0]],
            GridPos::ZERO,
            GridPos::new(1, 1),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MapError::NonRectangular {
                layer: "terrain",
                row: 1,
                ..
            }
        ));
    }

    #[test]
    fn mismatched_layer_shape_rejected() {
        let err = MultiLayerMap::new(
            vec![vec!['.', '.']],
            vec![vec![0, 0], vec![0, 0]],
            vec![vec![0.0, 0.0]],
            GridPos::ZERO,
            GridPos::new(1, 0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MapError::LayerShapeMismatch {
                layer: "elevation",
                ..
            }
        ));
    }

    #[test]
    fn empty_map_rejected() {
        let err = MultiLayerMap::new(vec![], vec![], vec![], GridPos::ZERO, GridPos::ZERO)
            .unwrap_err();
        assert_eq!(err, MapError::EmptyLayer { layer: "terrain" });
    }

    #[test]
    fn out_of_bounds_endpoints_rejected() {
        let err = MultiLayerMap::new(
            vec![vec!['.', '.']],
            vec![vec![0, 0]],
            vec![vec![0.0, 0.0]],
            GridPos::new(0, 0),
            GridPos::new(2, 0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MapError::EndpointOutOfBounds { name: "goal", .. }
        ));
    }
}
