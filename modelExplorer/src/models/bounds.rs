use serde::{Deserialize, Serialize};
use crate::models::curves::CurveSet;

/// Vertical display range for a set of curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayBounds {
    pub min: f64,
    pub max: f64,
}

impl DisplayBounds {
    /// Range over all curve values, widened by `padding_fraction` of its
    /// height on each side. Flat curves give a zero-height range.
    pub fn from_curves(curves: &CurveSet, padding_fraction: f64) -> Self {
        let (p_min, p_max) = curves
            .values()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
                (lo.min(value), hi.max(value))
            });

        if p_min > p_max {
            return Self { min: 0.0, max: 0.0 };
        }

        let padding = (p_max - p_min) * padding_fraction;
        Self {
            min: p_min - padding,
            max: p_max + padding,
        }
    }

    pub fn height(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.height() <= 0.0
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Widen the range symmetrically about its centre until it is at least
    /// `span` tall. Ranges already taller are returned unchanged.
    pub fn with_min_span(&self, span: f64) -> Self {
        if self.height() >= span {
            return *self;
        }
        let centre = (self.min + self.max) / 2.0;
        let half = span / 2.0;
        Self {
            min: centre - half,
            max: centre + half,
        }
    }
}
