// Domain Grid Constants
pub const GRID_POINTS: usize = 200;
pub const GRID_START: f64 = 0.0;
pub const GRID_END: f64 = 1.0;
pub const MIN_GRID_POINTS: usize = 2;

// Display Bounds
pub const BOUNDS_PADDING_FRACTION: f64 = 0.1;  // 10% above and below the data
pub const DEFAULT_FALLBACK_SPAN: f64 = 1.0;    // Minimum height shown for flat curves

// Core Economic Parameters
pub const PI_MIN: f64 = 0.0;
pub const PI_MAX: f64 = 1.0;
pub const PI_DEFAULT: f64 = 0.23;
pub const PI_STEP: f64 = 0.01;

pub const C_OP_MIN: f64 = 0.0;
pub const C_OP_MAX: f64 = 1.0;
pub const C_OP_DEFAULT: f64 = 0.20;
pub const C_OP_STEP: f64 = 0.01;

// Endogenous Overhead
pub const H_MIN: f64 = 0.0;
pub const H_MAX: f64 = 5e7;
pub const H_DEFAULT: f64 = 1e7;
pub const H_STEP: f64 = 1e6;

pub const V_MIN: f64 = 0.0;
pub const V_MAX: f64 = 5e4;
pub const V_DEFAULT: f64 = 5e3;
pub const V_STEP: f64 = 1e3;

pub const N_MIN: u32 = 1;
pub const N_MAX: u32 = 10_000;
pub const N_DEFAULT: u32 = 500;
pub const N_STEP: u32 = 50;

// Effort & Incentives
pub const A_STAR_MIN: f64 = 0.0;
pub const A_STAR_MAX: f64 = 10.0;
pub const A_STAR_DEFAULT: f64 = 1.0;
pub const A_STAR_STEP: f64 = 0.1;

pub const BETA_MIN: f64 = 0.1;
pub const BETA_MAX: f64 = 10.0;
pub const BETA_DEFAULT: f64 = 1.0;
pub const BETA_STEP: f64 = 0.1;

pub const KAPPA_MIN: f64 = 0.1;
pub const KAPPA_MAX: f64 = 10.0;
pub const KAPPA_DEFAULT: f64 = 1.0;
pub const KAPPA_STEP: f64 = 0.1;

// Duplication Penalty
pub const DELTA_MIN: f64 = 0.0;
pub const DELTA_MAX: f64 = 1.0;
pub const DELTA_DEFAULT: f64 = 0.10;
pub const DELTA_STEP: f64 = 0.01;

// Model coefficients
pub const EFFORT_COST_COEFFICIENT: f64 = 0.5;

// Export
pub const DEFAULT_OUTPUT_DIR: &str = "output";
