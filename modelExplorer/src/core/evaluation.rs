use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::config::const_funcs::{company_operated_profit, franchised_profit, total_operational_cost};
use crate::config::constants::{GRID_END, GRID_START};
use crate::config::explorer_config::ExplorerConfig;
use crate::config::parameter_set::{DomainError, ParameterSet};
use crate::models::bounds::DisplayBounds;
use crate::models::curves::{domain_grid, CurveSet};
use crate::utils::logging::{self, EvaluationType, OperationCategory};

/// Result of one evaluation pass: the franchise-ratio grid, the three
/// profit curves sampled on it, and the padded display range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub params: ParameterSet,
    pub grid: Vec<f64>,
    pub curves: CurveSet,
    pub bounds: DisplayBounds,
}

pub fn evaluate(params: ParameterSet) -> Result<Evaluation, DomainError> {
    evaluate_with(params, &ExplorerConfig::default())
}

pub fn evaluate_with(params: ParameterSet, config: &ExplorerConfig) -> Result<Evaluation, DomainError> {
    let _timing = logging::start_timing("evaluate",
        OperationCategory::Evaluation { subcategory: EvaluationType::Pass });

    {
        let _timing = logging::start_timing("validate_inputs",
            OperationCategory::Evaluation { subcategory: EvaluationType::Validation });
        params.validate()?;
        config.validate()?;
    }

    let grid = {
        let _timing = logging::start_timing("domain_grid",
            OperationCategory::Evaluation { subcategory: EvaluationType::Grid });
        domain_grid(GRID_START, GRID_END, config.grid_points)
    };

    let curves = {
        let _timing = logging::start_timing("evaluate_curves",
            OperationCategory::Evaluation { subcategory: EvaluationType::Curves });
        evaluate_curves(&params, &grid)
    };

    let bounds = {
        let _timing = logging::start_timing("display_bounds",
            OperationCategory::Evaluation { subcategory: EvaluationType::Bounds });
        DisplayBounds::from_curves(&curves, config.padding_fraction)
    };

    debug!(
        points = grid.len(),
        min = bounds.min,
        max = bounds.max,
        "evaluated profit curves"
    );

    Ok(Evaluation { params, grid, curves, bounds })
}

/// Sample `P_base`, `P_endh` and `P_dup` at every franchise ratio in `grid`.
///
/// Assumes `params` has been validated; `n` is used as a divisor.
pub fn evaluate_curves(params: &ParameterSet, grid: &[f64]) -> CurveSet {
    // Constant along the curve
    let franchised = franchised_profit(params);
    let company = company_operated_profit(params);
    let outlets = params.n as f64;

    let mut curves = CurveSet::with_capacity(grid.len());
    for &f in grid {
        let company_share = 1.0 - f;
        let franchised_term = f * franchised;

        let p_base = company_share * company + franchised_term;
        let p_endh = company_share * (params.pi - total_operational_cost(params, f) / outlets) + franchised_term;
        let p_dup = p_endh - params.delta * f * company_share;

        curves.p_base.push(p_base);
        curves.p_endh.push(p_endh);
        curves.p_dup.push(p_dup);
    }
    curves
}
