use std::path::{Path, PathBuf};
use clap::Parser;
use crate::config::constants::{DEFAULT_FALLBACK_SPAN, DEFAULT_OUTPUT_DIR, GRID_POINTS, MIN_GRID_POINTS};
use crate::config::parameter_catalog::ParameterKey;
use crate::core::sweep::SweepSpec;

#[derive(Parser)]
#[command(author, version, about = "Explore franchise profitability curves", long_about = None)]
pub struct Args {
    #[arg(long, help = "Potential profit per outlet (π)")]
    pi: Option<f64>,

    #[arg(long, help = "Constant operational cost (C_op)")]
    c_op: Option<f64>,

    #[arg(long, help = "Fixed HQ overhead (H)")]
    h: Option<f64>,

    #[arg(long, help = "Per-outlet variable cost (v)")]
    v: Option<f64>,

    #[arg(long, help = "Total number of outlets (N)")]
    n: Option<u32>,

    #[arg(long, help = "Chosen effort level (a*)")]
    a_star: Option<f64>,

    #[arg(long, help = "Franchisee efficiency (β)")]
    beta: Option<f64>,

    #[arg(long, help = "Effort cost curvature (κ)")]
    kappa: Option<f64>,

    #[arg(long, help = "Duplication penalty (δ)")]
    delta: Option<f64>,

    #[arg(short, long, help = "Load parameters from a JSON file; flags override its values")]
    params: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Start from a random valid parameter set")]
    random: bool,

    #[arg(long, help = "Random seed for --random")]
    seed: Option<u64>,

    #[arg(
        short = 's',
        long,
        conflicts_with_all = ["interactive", "export_json", "show_equations"],
        help = "Sweep one parameter: key:start:end:steps"
    )]
    sweep: Option<SweepSpec>,

    #[arg(short, long, default_value_t = false, help = "Read key=value changes from stdin and recompute")]
    interactive: bool,

    #[arg(long, default_value_t = GRID_POINTS, value_parser = parse_grid_points)]
    grid_points: usize,

    #[arg(long, default_value_t = DEFAULT_FALLBACK_SPAN, value_parser = parse_fallback_span)]
    fallback_span: f64,

    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: String,

    #[arg(long, default_value_t = false)]
    export_csv: bool,

    #[arg(long, default_value_t = false)]
    export_json: bool,

    #[arg(long, default_value_t = false)]
    show_equations: bool,

    #[arg(long, default_value_t = false)]
    progress: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

fn parse_grid_points(s: &str) -> Result<usize, String> {
    let points = s.parse::<usize>().map_err(|e| e.to_string())?;
    if points < MIN_GRID_POINTS {
        return Err(format!("grid needs at least {} points", MIN_GRID_POINTS));
    }
    Ok(points)
}

fn parse_fallback_span(s: &str) -> Result<f64, String> {
    let span = s.parse::<f64>().map_err(|e| e.to_string())?;
    if !span.is_finite() || span <= 0.0 {
        return Err("fallback span must be a positive number".to_string());
    }
    Ok(span)
}

// Add getter methods for all fields
impl Args {
    /// Parameter values given explicitly on the command line.
    pub fn overrides(&self) -> Vec<(ParameterKey, f64)> {
        [
            (ParameterKey::Pi, self.pi),
            (ParameterKey::COp, self.c_op),
            (ParameterKey::H, self.h),
            (ParameterKey::V, self.v),
            (ParameterKey::N, self.n.map(f64::from)),
            (ParameterKey::AStar, self.a_star),
            (ParameterKey::Beta, self.beta),
            (ParameterKey::Kappa, self.kappa),
            (ParameterKey::Delta, self.delta),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }

    pub fn params(&self) -> Option<&Path> {
        self.params.as_deref()
    }

    pub fn random(&self) -> bool {
        self.random
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn sweep(&self) -> Option<&SweepSpec> {
        self.sweep.as_ref()
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn grid_points(&self) -> usize {
        self.grid_points
    }

    pub fn fallback_span(&self) -> f64 {
        self.fallback_span
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn export_csv(&self) -> bool {
        self.export_csv
    }

    pub fn export_json(&self) -> bool {
        self.export_json
    }

    pub fn show_equations(&self) -> bool {
        self.show_equations
    }

    pub fn progress(&self) -> bool {
        self.progress
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}
