use serde::{Deserialize, Serialize};
use crate::core::evaluation::Evaluation;
use crate::models::bounds::DisplayBounds;
use crate::models::curves::CurveKind;
use crate::utils::logging::{self, OperationCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    pub kind: CurveKind,
    pub at_zero: f64,            // Profit with every outlet company-operated
    pub at_one: f64,             // Profit with every outlet franchised
    pub peak_value: f64,
    pub peak_ratio: f64,         // First franchise ratio attaining the peak
    pub break_even: Vec<f64>,    // Franchise ratios where the curve changes sign
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub curves: Vec<CurveSummary>,
    pub bounds: DisplayBounds,
}

impl EvaluationSummary {
    pub fn curve(&self, kind: CurveKind) -> Option<&CurveSummary> {
        self.curves.iter().find(|summary| summary.kind == kind)
    }
}

pub fn summarize(evaluation: &Evaluation) -> EvaluationSummary {
    let _timing = logging::start_timing("summarize", OperationCategory::Analysis);

    let curves = CurveKind::ALL
        .iter()
        .map(|&kind| summarize_curve(kind, &evaluation.grid, evaluation.curves.get(kind)))
        .collect();

    EvaluationSummary {
        curves,
        bounds: evaluation.bounds,
    }
}

/// `grid` and `values` must be the same non-zero length.
pub fn summarize_curve(kind: CurveKind, grid: &[f64], values: &[f64]) -> CurveSummary {
    let mut peak_index = 0;
    for (i, &value) in values.iter().enumerate() {
        if value > values[peak_index] {
            peak_index = i;
        }
    }

    CurveSummary {
        kind,
        at_zero: values.first().copied().unwrap_or(0.0),
        at_one: values.last().copied().unwrap_or(0.0),
        peak_value: values.get(peak_index).copied().unwrap_or(0.0),
        peak_ratio: grid.get(peak_index).copied().unwrap_or(0.0),
        break_even: break_even_points(grid, values),
    }
}

/// Sign changes of the curve, located by linear interpolation between the
/// last non-zero sample and the next sample of opposite sign. Samples that
/// are exactly zero do not count as a crossing on their own.
pub fn break_even_points(grid: &[f64], values: &[f64]) -> Vec<f64> {
    let mut crossings = Vec::new();
    let mut last_nonzero: Option<(f64, f64)> = None;

    for (&f, &value) in grid.iter().zip(values) {
        if value == 0.0 {
            continue;
        }
        if let Some((prev_f, prev_value)) = last_nonzero {
            if prev_value.signum() != value.signum() {
                let t = prev_value / (prev_value - value);
                crossings.push(prev_f + t * (f - prev_f));
            }
        }
        last_nonzero = Some((f, value));
    }

    crossings
}
