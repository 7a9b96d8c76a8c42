use super::summary::{CurveSummary, EvaluationSummary};
use crate::config::parameter_catalog::ParameterGroup;
use crate::config::parameter_set::ParameterSet;
use crate::core::sweep::SweepPoint;
use crate::models::bounds::DisplayBounds;
use crate::models::curves::CurveKind;

const MODEL_EQUATIONS: [(&str, &str); 6] = [
    ("P_base(F)", "(1 - F)(π - C_op) + F (p(a*) π - c(a*))"),
    ("P_endh(F)", "(1 - F)(π - C_op,F(F) / N) + F (p(a*) π - c(a*))"),
    ("P_dup(F)", "P_endh(F) - δ F (1 - F)"),
    ("p(a)", "1 - e^(-β a)            (probability of success)"),
    ("c(a)", "½ κ a²                  (cost of effort)"),
    ("C_op,F(F)", "H + v (1 - F) N          (total operational cost)"),
];

pub fn print_parameters(params: &ParameterSet) {
    println!("\nModel Parameters");
    println!("----------------------------------------");
    for group in ParameterGroup::ALL {
        println!("{}:", group.title());
        for spec in group.members() {
            let value = params.get(spec.key);
            if spec.integer {
                println!("  {} ({}): {}", spec.label, spec.symbol, value as u64);
            } else {
                println!("  {} ({}): {}", spec.label, spec.symbol, format_value(value));
            }
        }
    }
}

pub fn print_evaluation_summary(summary: &EvaluationSummary, fallback_span: f64) {
    println!("\nProfitability Models vs. Franchise Ratio");
    println!("----------------------------------------");
    for curve in &summary.curves {
        print_curve_summary(curve);
    }
    print_bounds(&summary.bounds, fallback_span);
}

fn print_curve_summary(curve: &CurveSummary) {
    println!("{}:", curve.kind.label());
    println!("  P(F=0): {:.4}", curve.at_zero);
    println!("  P(F=1): {:.4}", curve.at_one);
    println!("  Peak: {:.4} at F={:.3}", curve.peak_value, curve.peak_ratio);
    if curve.break_even.is_empty() {
        println!("  Break-even: none");
    } else {
        let points: Vec<String> = curve.break_even.iter().map(|f| format!("{:.3}", f)).collect();
        println!("  Break-even at F: {}", points.join(", "));
    }
}

fn print_bounds(bounds: &DisplayBounds, fallback_span: f64) {
    println!("Display range (P): [{:.4}, {:.4}]", bounds.min, bounds.max);
    if bounds.is_degenerate() {
        let shown = bounds.with_min_span(fallback_span);
        println!("  Curves are flat; showing [{:.4}, {:.4}]", shown.min, shown.max);
    }
}

pub fn print_model_equations() {
    println!("\nModel Equations");
    println!("----------------------------------------");
    println!("F is the franchise ratio (the proportion of outlets that are franchised).");
    for (lhs, rhs) in MODEL_EQUATIONS {
        println!("  {:<10} = {}", lhs, rhs);
    }
}

pub fn print_sweep(points: &[SweepPoint]) {
    let Some(first) = points.first() else {
        println!("\nParameter sweep produced no points");
        return;
    };

    println!("\nParameter Sweep: {}", first.key);
    println!("----------------------------------------");
    println!(
        "{:>12} {:>12} {:>10} {:>12} {:>10} {:>12} {:>10}",
        first.key.as_str(), "base peak", "at F", "endh peak", "at F", "dup peak", "at F"
    );
    for point in points {
        let mut row = format!("{:>12}", format_value(point.value));
        for kind in CurveKind::ALL {
            match point.summary.curve(kind) {
                Some(curve) => row.push_str(&format!(" {:>12.4} {:>10.3}", curve.peak_value, curve.peak_ratio)),
                None => row.push_str(&format!(" {:>12} {:>10}", "-", "-")),
            }
        }
        println!("{}", row);
    }
}

fn format_value(value: f64) -> String {
    if value != 0.0 && (value.abs() >= 1e4 || value.abs() < 1e-3) {
        format!("{:.2e}", value)
    } else {
        format!("{}", value)
    }
}
