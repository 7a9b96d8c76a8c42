use crate::config::constants::EFFORT_COST_COEFFICIENT;
use crate::config::parameter_set::ParameterSet;

/// Cost of effort, `c(a) = ½ κ a²`.
pub fn effort_cost(params: &ParameterSet, effort: f64) -> f64 {
    EFFORT_COST_COEFFICIENT * params.kappa * effort.powi(2)
}

/// Probability of success, `p(a) = 1 - e^(-β a)`.
pub fn success_probability(params: &ParameterSet, effort: f64) -> f64 {
    // exp_m1 keeps precision when β·a is small
    -(-params.beta * effort).exp_m1()
}

/// Total operational cost across all N outlets, `H + v (1 - F) N`.
///
/// This is not a per-outlet figure; divide by N before using it in a
/// per-outlet profit expression.
pub fn total_operational_cost(params: &ParameterSet, franchise_ratio: f64) -> f64 {
    params.h + params.v * (1.0 - franchise_ratio) * params.n as f64
}

/// Per-outlet profit of a company-operated outlet under the constant cost model.
pub fn company_operated_profit(params: &ParameterSet) -> f64 {
    params.pi - params.c_op
}

/// Per-outlet profit of a franchised outlet at the chosen effort level,
/// `p(a*) π - c(a*)`.
pub fn franchised_profit(params: &ParameterSet) -> f64 {
    success_probability(params, params.a_star) * params.pi - effort_cost(params, params.a_star)
}
