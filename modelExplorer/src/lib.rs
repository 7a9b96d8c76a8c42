// Main module declarations for the franchise profitability explorer

// Model parameters, their domains and the closed-form helper functions
pub mod config {
    pub mod constants;
    pub mod parameter_catalog;
    pub mod parameter_set;
    pub mod const_funcs;
    pub mod explorer_config;
}

// Value types produced by an evaluation pass
pub mod models {
    pub mod curves;
    pub mod bounds;
}

// Evaluation pipeline
pub mod core {
    pub mod evaluation;
    pub mod explorer;
    pub mod sweep;
}

// Curve analysis and terminal reporting
pub mod analysis {
    pub mod summary;
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::config::parameter_set::{DomainError, ParameterSet};
pub use crate::core::evaluation::{evaluate, Evaluation};
pub use crate::models::bounds::DisplayBounds;
pub use crate::models::curves::{CurveKind, CurveSet};
