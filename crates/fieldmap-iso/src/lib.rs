//! **fieldmap-iso** — Grid / isometric-pixel coordinate transforms.
//!
//! This crate provides the bidirectional mapping between logical grid
//! coordinates and isometric screen pixels used for rendering and click
//! hit-testing:
//!
//! - forward projection [`to_iso`] (plus pixel-quantized [`to_iso_int`]
//!   and sprite-anchor [`to_iso_center`])
//! - inverse projection [`to_grid`], which needs an externally supplied
//!   elevation because the forward map is not bijective without one
//! - diamond tile membership ([`normalize_to_diamond`], [`is_in_diamond`])
//! - bounds validation for click-derived coordinates
//!   ([`validate_grid_bounds`])
//!
//! It is a pure, stateless layer with no dependency on the map or search
//! crates.

mod bounds;
mod config;
mod coords;
mod diamond;
mod transform;

pub use bounds::{OutOfBounds, validate_grid_bounds};
pub use config::{IsoConfig, IsoConfigError};
pub use coords::{GridCoord, IsoCoord, IsoCoordInt};
pub use diamond::{is_in_diamond, normalize_to_diamond};
pub use transform::{to_grid, to_iso, to_iso_center, to_iso_int};
