use std::fmt;
use std::str::FromStr;
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::analysis::summary::{summarize, EvaluationSummary};
use crate::config::explorer_config::ExplorerConfig;
use crate::config::parameter_catalog::ParameterKey;
use crate::config::parameter_set::{DomainError, ParameterSet};
use crate::core::evaluation::evaluate_with;
use crate::models::curves::domain_grid;
use crate::utils::logging::{self, OperationCategory};

/// One parameter varied over an evenly spaced range, `key:start:end:steps`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSpec {
    pub key: ParameterKey,
    pub start: f64,
    pub end: f64,
    pub steps: usize,
}

impl SweepSpec {
    /// Evenly spaced values from `start` to `end` inclusive. Integer
    /// parameters are rounded and repeated values collapse into one.
    pub fn values(&self) -> Vec<f64> {
        let mut values = domain_grid(self.start, self.end, self.steps);
        if self.key.spec().integer {
            values.iter_mut().for_each(|value| *value = value.round());
            values.dedup();
        }
        values
    }
}

impl FromStr for SweepSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(format!("Invalid sweep '{}', expected key:start:end:steps", s));
        }

        let key = parts[0].parse::<ParameterKey>()?;
        let start = parts[1]
            .parse::<f64>()
            .map_err(|e| format!("Invalid sweep start '{}': {}", parts[1], e))?;
        let end = parts[2]
            .parse::<f64>()
            .map_err(|e| format!("Invalid sweep end '{}': {}", parts[2], e))?;
        let steps = parts[3]
            .parse::<usize>()
            .map_err(|e| format!("Invalid sweep step count '{}': {}", parts[3], e))?;
        if steps == 0 {
            return Err("Sweep needs at least one step".to_string());
        }

        Ok(SweepSpec { key, start, end, steps })
    }
}

impl fmt::Display for SweepSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.key, self.start, self.end, self.steps)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub key: ParameterKey,
    pub value: f64,
    pub summary: EvaluationSummary,
}

/// Evaluate one pass per value of `key`, all other parameters taken from
/// `base`. Passes are independent and run in parallel; results keep the
/// order of `values`, with consecutive values that land on the same
/// parameter setting evaluated once. Any out-of-domain value fails the
/// whole sweep.
pub fn sweep(
    base: &ParameterSet,
    key: ParameterKey,
    values: &[f64],
    config: &ExplorerConfig,
    progress: Option<&ProgressBar>,
) -> Result<Vec<SweepPoint>, DomainError> {
    let _timing = logging::start_timing("sweep", OperationCategory::Sweep);

    // Reject bad input before spending any work
    let mut sets = values
        .iter()
        .map(|&value| base.with(key, value))
        .collect::<Result<Vec<_>, _>>()?;
    sets.dedup_by(|a, b| a.get(key) == b.get(key));

    let points = sets
        .into_par_iter()
        .map(|params| -> Result<SweepPoint, DomainError> {
            let evaluation = evaluate_with(params, config)?;
            if let Some(bar) = progress {
                bar.inc(1);
            }
            Ok(SweepPoint {
                key,
                value: params.get(key),
                summary: summarize(&evaluation),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(parameter = %key, passes = points.len(), "parameter sweep complete");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::curves::CurveKind;

    #[test]
    fn parses_sweep_spec() {
        let spec: SweepSpec = "delta:0:1:5".parse().unwrap();
        assert_eq!(spec.key, ParameterKey::Delta);
        assert_eq!(spec.values(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(spec.to_string(), "delta:0:1:5");

        assert!("delta:0:1".parse::<SweepSpec>().is_err());
        assert!("delta:0:1:0".parse::<SweepSpec>().is_err());
        assert!("omega:0:1:3".parse::<SweepSpec>().is_err());
    }

    #[test]
    fn single_step_sweeps_start_only() {
        let spec = SweepSpec { key: ParameterKey::Pi, start: 0.3, end: 0.9, steps: 1 };
        assert_eq!(spec.values(), vec![0.3]);
    }

    #[test]
    fn sweep_preserves_value_order() {
        let values = domain_grid(0.0, 1.0, 21);
        let points = sweep(&ParameterSet::default(), ParameterKey::Delta, &values, &ExplorerConfig::default(), None).unwrap();
        assert_eq!(points.len(), 21);
        for (point, value) in points.iter().zip(&values) {
            assert_eq!(point.value, *value);
        }
    }

    #[test]
    fn larger_penalty_lowers_peak() {
        let values = [0.0, 0.5, 1.0];
        let points = sweep(&ParameterSet::default(), ParameterKey::Delta, &values, &ExplorerConfig::default(), None).unwrap();
        let peaks: Vec<f64> = points
            .iter()
            .map(|p| p.summary.curve(CurveKind::Duplication).map(|c| c.peak_value).unwrap_or(f64::NAN))
            .collect();
        assert!(peaks[0] >= peaks[1] && peaks[1] >= peaks[2]);
    }

    #[test]
    fn out_of_domain_value_fails_sweep() {
        let result = sweep(&ParameterSet::default(), ParameterKey::N, &[10.0, 0.0], &ExplorerConfig::default(), None);
        assert!(matches!(result, Err(DomainError::OutOfRange { .. })));
    }

    #[test]
    fn progress_bar_counts_passes() {
        let bar = ProgressBar::hidden();
        let values = domain_grid(1.0, 10_000.0, 8);
        sweep(&ParameterSet::default(), ParameterKey::N, &values, &ExplorerConfig::default(), Some(&bar)).unwrap();
        assert_eq!(bar.position(), 8);
    }

    #[test]
    fn integer_sweep_drops_repeated_outlet_counts() {
        let spec: SweepSpec = "n:1:3:5".parse().unwrap();
        assert_eq!(spec.values(), vec![1.0, 2.0, 3.0]);

        let points = sweep(&ParameterSet::default(), ParameterKey::N, &[1.0, 1.6, 2.4, 3.0], &ExplorerConfig::default(), None).unwrap();
        let counts: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(counts, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn continuous_sweep_keeps_every_value() {
        let spec: SweepSpec = "kappa:1:1:3".parse().unwrap();
        assert_eq!(spec.values().len(), 3);
    }
}
