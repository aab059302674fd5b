//! **fieldmap-core** — Multi-layer tactical grid maps (core types).
//!
//! This crate provides the data model shared across the *fieldmap*
//! workspace: grid positions and direction tables, the immutable
//! [`MultiLayerMap`] (terrain / elevation / tactical-priority layers), the
//! [`TerrainCostTable`] adapter, and the validated [`CostConfig`].
//!
//! Maps and tables are built once (by an external loader) and are read-only
//! afterwards, so independent searches may share them freely.

pub mod config;
pub mod geom;
pub mod layers;
pub mod terrain;

pub use config::{ConfigError, CostConfig, MAX_COST_CAP};
pub use geom::{AXIAL_DIRS, DIAGONAL_DIRS, GridPos};
pub use layers::{MapError, MultiLayerMap};
pub use terrain::{DEFAULT_TERRAIN, TerrainCell, TerrainCostTable};
