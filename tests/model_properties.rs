// tests/model_properties.rs
use franchise_explorer::analysis::summary::summarize;
use franchise_explorer::config::const_funcs::{effort_cost, success_probability};
use franchise_explorer::config::explorer_config::ExplorerConfig;
use franchise_explorer::config::parameter_catalog::ParameterKey;
use franchise_explorer::core::explorer::{Explorer, ParameterChange};
use franchise_explorer::{evaluate, CurveKind, DomainError, ParameterSet};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TOLERANCE: f64 = 1e-9;
const SAMPLES: usize = 300;

fn reference() -> ParameterSet {
    ParameterSet {
        pi: 0.23,
        c_op: 0.20,
        h: 1e7,
        v: 5e3,
        n: 500,
        a_star: 1.0,
        beta: 1.0,
        kappa: 1.0,
        delta: 0.10,
    }
}

fn sampled_sets(seed: u64) -> Vec<ParameterSet> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES).map(|_| ParameterSet::sample(&mut rng)).collect()
}

/* ──────────────────────────────────────────────────────────────────────────
Domain grid
────────────────────────────────────────────────────────────────────────── */

#[test]
fn grid_has_200_increasing_points_over_unit_interval() {
    for params in sampled_sets(1) {
        let evaluation = evaluate(params).unwrap();
        let grid = &evaluation.grid;
        assert_eq!(grid.len(), 200);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[grid.len() - 1], 1.0);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
        for kind in CurveKind::ALL {
            assert_eq!(evaluation.curves.get(kind).len(), grid.len());
        }
    }
}

/* ──────────────────────────────────────────────────────────────────────────
Curve relationships
────────────────────────────────────────────────────────────────────────── */

#[test]
fn duplication_curve_is_endogenous_less_quadratic_penalty() {
    for params in sampled_sets(2) {
        let evaluation = evaluate(params).unwrap();
        let curves = &evaluation.curves;
        for (i, &f) in evaluation.grid.iter().enumerate() {
            let expected = curves.p_endh[i] - params.delta * f * (1.0 - f);
            assert!((curves.p_dup[i] - expected).abs() < TOLERANCE);
        }
    }
}

#[test]
fn duplication_never_exceeds_endogenous_and_meets_it_at_endpoints() {
    for params in sampled_sets(3) {
        let evaluation = evaluate(params).unwrap();
        let curves = &evaluation.curves;
        let last = curves.len() - 1;
        for i in 0..curves.len() {
            assert!(curves.p_dup[i] <= curves.p_endh[i]);
        }
        assert_eq!(curves.p_dup[0], curves.p_endh[0]);
        assert_eq!(curves.p_dup[last], curves.p_endh[last]);
    }
}

#[test]
fn all_company_operated_endpoint() {
    for params in sampled_sets(4) {
        let evaluation = evaluate(params).unwrap();
        let n = params.n as f64;
        assert!((evaluation.curves.p_base[0] - (params.pi - params.c_op)).abs() < TOLERANCE);
        let expected_endh = params.pi - (params.h + params.v * n) / n;
        assert!((evaluation.curves.p_endh[0] - expected_endh).abs() < TOLERANCE * expected_endh.abs().max(1.0));
    }
}

#[test]
fn all_franchised_endpoint_ignores_operating_costs() {
    for params in sampled_sets(5) {
        let evaluation = evaluate(params).unwrap();
        let last = evaluation.grid.len() - 1;
        let franchised = success_probability(&params, params.a_star) * params.pi - effort_cost(&params, params.a_star);
        assert!((evaluation.curves.p_base[last] - franchised).abs() < TOLERANCE);
        assert_eq!(evaluation.curves.p_base[last], evaluation.curves.p_endh[last]);

        let varied = ParameterSet { h: 0.0, v: 0.0, c_op: 1.0, ..params };
        let other = evaluate(varied).unwrap();
        assert_eq!(other.curves.p_base[last], evaluation.curves.p_base[last]);
        assert_eq!(other.curves.p_endh[last], evaluation.curves.p_endh[last]);
    }
}

/* ──────────────────────────────────────────────────────────────────────────
Display bounds
────────────────────────────────────────────────────────────────────────── */

#[test]
fn bounds_contain_every_curve_value() {
    for params in sampled_sets(6) {
        let evaluation = evaluate(params).unwrap();
        for value in evaluation.curves.values() {
            assert!(evaluation.bounds.min <= value && value <= evaluation.bounds.max);
        }
    }
}

#[test]
fn bounds_are_padded_by_ten_percent() {
    let evaluation = evaluate(reference()).unwrap();
    let values: Vec<f64> = evaluation.curves.values().collect();
    let p_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let p_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let padding = (p_max - p_min) * 0.1;
    assert!((evaluation.bounds.min - (p_min - padding)).abs() < TOLERANCE);
    assert!((evaluation.bounds.max - (p_max + padding)).abs() < TOLERANCE);
}

/* ──────────────────────────────────────────────────────────────────────────
Scenarios
────────────────────────────────────────────────────────────────────────── */

#[test]
fn reference_scenario_values() {
    let params = reference();
    assert_eq!(effort_cost(&params, 1.0), 0.5);
    assert!((success_probability(&params, 1.0) - 0.6321).abs() < 1e-4);

    let evaluation = evaluate(params).unwrap();
    let curves = &evaluation.curves;
    assert!((curves.p_base[0] - 0.03).abs() < TOLERANCE);
    assert!((curves.p_base[199] - (-0.3546)).abs() < 1e-4);
    // (1e7 + 5e3 * 500) / 500 = 25_000 per outlet
    assert!((curves.p_endh[0] - (0.23 - 25_000.0)).abs() < 1e-6);
}

#[test]
fn degenerate_parameters_give_flat_zero_curves() {
    let params = ParameterSet {
        pi: 0.0,
        c_op: 0.0,
        h: 0.0,
        v: 0.0,
        a_star: 0.0,
        // a non-zero penalty would bend P_dup below zero inside the domain
        delta: 0.0,
        ..reference()
    };
    let evaluation = evaluate(params).unwrap();
    assert!(evaluation.curves.values().all(|value| value == 0.0));
    assert!(evaluation.bounds.is_degenerate());
    assert_eq!(evaluation.bounds.height(), 0.0);

    let shown = evaluation.bounds.with_min_span(ExplorerConfig::default().fallback_span);
    assert!(shown.height() > 0.0);
    assert!(shown.min.is_finite() && shown.max.is_finite());

    let summary = summarize(&evaluation);
    for curve in &summary.curves {
        assert!(curve.break_even.is_empty());
        assert_eq!(curve.peak_value, 0.0);
    }
}

#[test]
fn zero_outlets_fail_before_computation() {
    let params = ParameterSet { n: 0, ..reference() };
    match evaluate(params) {
        Err(DomainError::OutOfRange { key, .. }) => assert_eq!(key, ParameterKey::N),
        other => panic!("expected a domain error, got {:?}", other.map(|e| e.bounds)),
    }
}

/* ──────────────────────────────────────────────────────────────────────────
Recompute on input
────────────────────────────────────────────────────────────────────────── */

#[test]
fn explorer_matches_direct_evaluation_after_each_change() {
    let mut explorer = Explorer::new(reference(), ExplorerConfig::default()).unwrap();
    let changes = ["delta=0.3", "n+4", "a_star-2", "h=2e7", "beta=0.01", "kappa+"];

    for line in changes {
        let change: ParameterChange = line.parse().unwrap();
        let _ = explorer.apply(change);
        let direct = evaluate(*explorer.params()).unwrap();
        assert_eq!(explorer.evaluation(), &direct, "after {}", line);
    }

    // beta=0.01 is below the domain and must not have been applied
    assert_eq!(explorer.params().beta, 1.0);
    // 500 is off the 50-wide grid anchored at 1: the first step lands on 501
    assert_eq!(explorer.params().n, 651);
    assert_eq!(explorer.params().h, 2e7);
}
