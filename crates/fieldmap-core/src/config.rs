//! Search cost configuration.

use std::fmt;

/// Default saturation cap for finite edge costs.
pub const MAX_COST_CAP: f64 = 255.0;

/// Parameters for edge-cost calculation, validated at construction.
///
/// `priority_weight` scales the tactical-priority layer and may be any sign
/// (negative weights make high-priority cells attractive). `max_cost_cap`
/// clamps finite edge costs and must be positive; unreachable edges are
/// never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostConfig {
    priority_weight: f64,
    max_cost_cap: f64,
}

impl CostConfig {
    /// Create a config, rejecting a non-positive or non-finite cost cap.
    pub fn new(priority_weight: f64, max_cost_cap: f64) -> Result<Self, ConfigError> {
        if !(max_cost_cap > 0.0) || !max_cost_cap.is_finite() {
            return Err(ConfigError::NonPositiveCostCap(max_cost_cap));
        }
        Ok(Self {
            priority_weight,
            max_cost_cap,
        })
    }

    /// Create a config with the given priority weight and the default cap.
    pub fn with_priority_weight(priority_weight: f64) -> Self {
        Self {
            priority_weight,
            max_cost_cap: MAX_COST_CAP,
        }
    }

    /// Weight applied to the tactical-priority layer.
    #[inline]
    pub fn priority_weight(&self) -> f64 {
        self.priority_weight
    }

    /// Saturation cap for finite edge costs.
    #[inline]
    pub fn max_cost_cap(&self) -> f64 {
        self.max_cost_cap
    }
}

impl Default for CostConfig {
    /// Priority layer ignored, cap at [`MAX_COST_CAP`].
    fn default() -> Self {
        Self {
            priority_weight: 0.0,
            max_cost_cap: MAX_COST_CAP,
        }
    }
}

/// Invalid configuration, rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `max_cost_cap` must be positive and finite.
    NonPositiveCostCap(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveCostCap(v) => {
                write!(f, "max_cost_cap must be positive and finite, got {v}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
