use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};
use crate::config::explorer_config::ExplorerConfig;
use crate::config::parameter_catalog::ParameterKey;
use crate::config::parameter_set::{DomainError, ParameterSet};
use crate::core::evaluation::{evaluate_with, Evaluation};

/// A single control interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterChange {
    /// Set a parameter to an exact value; out-of-domain values are rejected.
    Set { key: ParameterKey, value: f64 },
    /// Move a parameter by whole control steps, stopping at the domain edges.
    /// An off-grid value moves to the next grid point first.
    Nudge { key: ParameterKey, steps: i32 },
}

impl ParameterChange {
    pub fn key(&self) -> ParameterKey {
        match self {
            ParameterChange::Set { key, .. } | ParameterChange::Nudge { key, .. } => *key,
        }
    }
}

impl FromStr for ParameterChange {
    type Err = String;

    // Accepts `key=value`, `key+`, `key-`, `key+N` and `key-N`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((key, value)) = s.split_once('=') {
            let key = key.parse::<ParameterKey>()?;
            let value = value
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("Invalid value for {}: {}", key, e))?;
            return Ok(ParameterChange::Set { key, value });
        }

        if let Some(pos) = s.rfind(|c: char| c == '+' || c == '-') {
            let key = s[..pos].parse::<ParameterKey>()?;
            let sign = if s[pos..].starts_with('-') { -1 } else { 1 };
            let count = s[pos + 1..].trim();
            let magnitude = if count.is_empty() {
                1
            } else {
                count
                    .parse::<i32>()
                    .map_err(|e| format!("Invalid step count for {}: {}", key, e))?
            };
            return Ok(ParameterChange::Nudge { key, steps: sign * magnitude });
        }

        Err(format!("Unrecognised change '{}', expected key=value or key+/-steps", s))
    }
}

impl fmt::Display for ParameterChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterChange::Set { key, value } => write!(f, "{}={}", key, value),
            ParameterChange::Nudge { key, steps } => write!(f, "{}{:+}", key, steps),
        }
    }
}

/// Holds the current parameter set and recomputes the curves whenever a
/// control changes. A rejected change leaves the previous state in place.
pub struct Explorer {
    config: ExplorerConfig,
    params: ParameterSet,
    current: Evaluation,
    passes: usize,
}

impl Explorer {
    pub fn new(params: ParameterSet, config: ExplorerConfig) -> Result<Self, DomainError> {
        let current = evaluate_with(params, &config)?;
        Ok(Self {
            config,
            params,
            current,
            passes: 1,
        })
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.current
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Number of successful evaluation passes, including the initial one.
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn apply(&mut self, change: ParameterChange) -> Result<&Evaluation, DomainError> {
        let key = change.key();
        let value = match change {
            ParameterChange::Set { value, .. } => value,
            ParameterChange::Nudge { steps: 0, .. } => {
                debug!(change = %change, "zero-step nudge, nothing to recompute");
                return Ok(&self.current);
            }
            ParameterChange::Nudge { steps, .. } => key.spec().step_from(self.params.get(key), steps),
        };

        let params = match self.params.with(key, value) {
            Ok(params) => params,
            Err(e) => {
                warn!(change = %change, "rejected parameter change: {}", e);
                return Err(e);
            }
        };

        self.current = evaluate_with(params, &self.config)?;
        self.params = params;
        self.passes += 1;

        debug!(change = %change, passes = self.passes, "recomputed curves");
        Ok(&self.current)
    }

    /// Restore every parameter to its default and recompute.
    pub fn reset(&mut self) -> Result<&Evaluation, DomainError> {
        let params = ParameterSet::default();
        self.current = evaluate_with(params, &self.config)?;
        self.params = params;
        self.passes += 1;
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explorer() -> Explorer {
        Explorer::new(ParameterSet::default(), ExplorerConfig::default()).unwrap()
    }

    #[test]
    fn parses_changes() {
        assert_eq!(
            "delta=0.25".parse::<ParameterChange>(),
            Ok(ParameterChange::Set { key: ParameterKey::Delta, value: 0.25 })
        );
        assert_eq!(
            "a_star+".parse::<ParameterChange>(),
            Ok(ParameterChange::Nudge { key: ParameterKey::AStar, steps: 1 })
        );
        assert_eq!(
            " n-3 ".parse::<ParameterChange>(),
            Ok(ParameterChange::Nudge { key: ParameterKey::N, steps: -3 })
        );
        assert!("gamma=1".parse::<ParameterChange>().is_err());
        assert!("pi=abc".parse::<ParameterChange>().is_err());
        assert!("pi".parse::<ParameterChange>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let change = ParameterChange::Nudge { key: ParameterKey::Kappa, steps: -2 };
        assert_eq!(change.to_string(), "kappa-2");
        assert_eq!(change.to_string().parse::<ParameterChange>(), Ok(change));
    }

    #[test]
    fn set_recomputes_curves() {
        let mut explorer = explorer();
        let before = explorer.evaluation().curves.p_dup.clone();
        let evaluation = explorer.apply(ParameterChange::Set { key: ParameterKey::Delta, value: 0.5 }).unwrap();
        assert_eq!(evaluation.params.delta, 0.5);
        assert_ne!(evaluation.curves.p_dup, before);
        assert_eq!(explorer.params().delta, 0.5);
        assert_eq!(explorer.passes(), 2);
    }

    #[test]
    fn rejected_change_keeps_previous_state() {
        let mut explorer = explorer();
        let before = explorer.evaluation().clone();
        let result = explorer.apply(ParameterChange::Set { key: ParameterKey::N, value: 0.0 });
        assert!(matches!(result, Err(DomainError::OutOfRange { key: ParameterKey::N, .. })));
        assert_eq!(explorer.evaluation(), &before);
        assert_eq!(explorer.params().n, 500);
        assert_eq!(explorer.passes(), 1);
    }

    #[test]
    fn nudge_moves_by_steps_and_stops_at_edges() {
        let mut explorer = explorer();
        explorer.apply(ParameterChange::Nudge { key: ParameterKey::Pi, steps: 2 }).unwrap();
        assert!((explorer.params().pi - 0.25).abs() < 1e-12);

        explorer.apply(ParameterChange::Nudge { key: ParameterKey::Delta, steps: -100 }).unwrap();
        assert_eq!(explorer.params().delta, 0.0);

        explorer.apply(ParameterChange::Nudge { key: ParameterKey::Beta, steps: 1000 }).unwrap();
        assert!((explorer.params().beta - 10.0).abs() < 1e-12);
    }

    #[test]
    fn zero_step_nudge_changes_nothing() {
        let mut explorer = explorer();
        for line in ["n+0", "n-0"] {
            explorer.apply(line.parse().unwrap()).unwrap();
            assert_eq!(explorer.params().n, 500);
        }
        assert_eq!(explorer.passes(), 1);

        let params = ParameterSet { pi: 0.233, ..ParameterSet::default() };
        let mut explorer = Explorer::new(params, ExplorerConfig::default()).unwrap();
        explorer.apply("pi+0".parse().unwrap()).unwrap();
        assert_eq!(explorer.params().pi, 0.233);
    }

    #[test]
    fn nudge_from_off_grid_value_reaches_next_grid_point() {
        let mut explorer = explorer();
        explorer.apply("n+1".parse().unwrap()).unwrap();
        assert_eq!(explorer.params().n, 501);
        explorer.apply("n+1".parse().unwrap()).unwrap();
        assert_eq!(explorer.params().n, 551);

        explorer.apply("pi=0.233".parse().unwrap()).unwrap();
        explorer.apply("pi-".parse().unwrap()).unwrap();
        assert!((explorer.params().pi - 0.23).abs() < 1e-12);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut explorer = explorer();
        explorer.apply(ParameterChange::Set { key: ParameterKey::H, value: 0.0 }).unwrap();
        explorer.reset().unwrap();
        assert_eq!(explorer.params(), &ParameterSet::default());
        assert_eq!(explorer.passes(), 3);
    }
}
