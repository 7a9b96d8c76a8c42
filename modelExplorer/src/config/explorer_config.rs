use serde::{Deserialize, Serialize};
use crate::config::constants::*;
use crate::config::parameter_set::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    pub grid_points: usize,         // Number of franchise-ratio samples, endpoints included
    pub padding_fraction: f64,      // Vertical padding applied above and below the curves
    pub fallback_span: f64,         // Minimum display height for flat curves
    pub output_dir: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            grid_points: GRID_POINTS,
            padding_fraction: BOUNDS_PADDING_FRACTION,
            fallback_span: DEFAULT_FALLBACK_SPAN,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.grid_points < MIN_GRID_POINTS {
            return Err(DomainError::InvalidConfig(format!(
                "grid needs at least {} points, got {}",
                MIN_GRID_POINTS, self.grid_points
            )));
        }
        if !self.padding_fraction.is_finite() || self.padding_fraction < 0.0 {
            return Err(DomainError::InvalidConfig(format!(
                "padding fraction must be a non-negative number, got {}",
                self.padding_fraction
            )));
        }
        if !self.fallback_span.is_finite() || self.fallback_span <= 0.0 {
            return Err(DomainError::InvalidConfig(format!(
                "fallback span must be positive, got {}",
                self.fallback_span
            )));
        }
        Ok(())
    }
}
