use std::fs;
use std::path::Path;
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::config::constants::*;
use crate::config::parameter_catalog::{ParameterKey, ParameterSpec};

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    OutOfRange {
        key: ParameterKey,
        value: f64,
        min: f64,
        max: f64,
    },
    NotFinite {
        key: ParameterKey,
        value: f64,
    },
    InvalidConfig(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::OutOfRange { key, value, min, max } => write!(
                f,
                "{} = {} is out of bounds [{}, {}]",
                key, value, min, max
            ),
            DomainError::NotFinite { key, value } => {
                write!(f, "{} = {} is not a finite number", key, value)
            }
            DomainError::InvalidConfig(msg) => write!(f, "Invalid explorer configuration: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

/// Inputs of one evaluation pass.
///
/// Values are plain data; `validate` is the only gate between a caller and
/// the curve evaluator, so a set built by hand (or deserialized) may be out of
/// domain until it is checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    pub pi: f64,      // Potential profit per outlet
    pub c_op: f64,    // Constant per-outlet operational cost
    pub h: f64,       // Fixed headquarters overhead
    pub v: f64,       // Per-outlet variable cost
    pub n: u32,       // Total outlet count, used as a divisor
    pub a_star: f64,  // Chosen effort level
    pub beta: f64,    // Franchisee efficiency
    pub kappa: f64,   // Effort cost curvature
    pub delta: f64,   // Duplication penalty
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            pi: PI_DEFAULT,
            c_op: C_OP_DEFAULT,
            h: H_DEFAULT,
            v: V_DEFAULT,
            n: N_DEFAULT,
            a_star: A_STAR_DEFAULT,
            beta: BETA_DEFAULT,
            kappa: KAPPA_DEFAULT,
            delta: DELTA_DEFAULT,
        }
    }
}

impl ParameterSet {
    pub fn get(&self, key: ParameterKey) -> f64 {
        match key {
            ParameterKey::Pi => self.pi,
            ParameterKey::COp => self.c_op,
            ParameterKey::H => self.h,
            ParameterKey::V => self.v,
            ParameterKey::N => self.n as f64,
            ParameterKey::AStar => self.a_star,
            ParameterKey::Beta => self.beta,
            ParameterKey::Kappa => self.kappa,
            ParameterKey::Delta => self.delta,
        }
    }

    /// Returns a copy with one parameter replaced. Integer parameters are
    /// rounded to the nearest whole number after the domain check.
    pub fn with(&self, key: ParameterKey, value: f64) -> Result<ParameterSet, DomainError> {
        let spec = key.spec();
        check_value(spec, value)?;

        let mut updated = *self;
        match key {
            ParameterKey::Pi => updated.pi = value,
            ParameterKey::COp => updated.c_op = value,
            ParameterKey::H => updated.h = value,
            ParameterKey::V => updated.v = value,
            ParameterKey::N => updated.n = value.round() as u32,
            ParameterKey::AStar => updated.a_star = value,
            ParameterKey::Beta => updated.beta = value,
            ParameterKey::Kappa => updated.kappa = value,
            ParameterKey::Delta => updated.delta = value,
        }
        Ok(updated)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for key in ParameterKey::ALL {
            check_value(key.spec(), self.get(key))?;
        }
        Ok(())
    }

    /// Draw a parameter set uniformly from the declared domains.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
        ParameterSet {
            pi: rng.gen_range(PI_MIN..=PI_MAX),
            c_op: rng.gen_range(C_OP_MIN..=C_OP_MAX),
            h: rng.gen_range(H_MIN..=H_MAX),
            v: rng.gen_range(V_MIN..=V_MAX),
            n: rng.gen_range(N_MIN..=N_MAX),
            a_star: rng.gen_range(A_STAR_MIN..=A_STAR_MAX),
            beta: rng.gen_range(BETA_MIN..=BETA_MAX),
            kappa: rng.gen_range(KAPPA_MIN..=KAPPA_MAX),
            delta: rng.gen_range(DELTA_MIN..=DELTA_MAX),
        }
    }
}

fn check_value(spec: &ParameterSpec, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NotFinite { key: spec.key, value });
    }
    if !spec.contains(value) {
        return Err(DomainError::OutOfRange {
            key: spec.key,
            value,
            min: spec.min,
            max: spec.max,
        });
    }
    Ok(())
}

#[derive(Debug)]
pub enum ParameterLoadError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Domain(DomainError),
}

impl From<std::io::Error> for ParameterLoadError {
    fn from(err: std::io::Error) -> Self {
        ParameterLoadError::IoError(err)
    }
}

impl From<serde_json::Error> for ParameterLoadError {
    fn from(err: serde_json::Error) -> Self {
        ParameterLoadError::JsonError(err)
    }
}

impl From<DomainError> for ParameterLoadError {
    fn from(err: DomainError) -> Self {
        ParameterLoadError::Domain(err)
    }
}

impl std::fmt::Display for ParameterLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterLoadError::IoError(e) => write!(f, "IO error: {}", e),
            ParameterLoadError::JsonError(e) => write!(f, "JSON error: {}", e),
            ParameterLoadError::Domain(e) => write!(f, "Invalid parameter: {}", e),
        }
    }
}

impl std::error::Error for ParameterLoadError {}

/// Read a parameter set from JSON. Fields that are absent take their defaults.
pub fn parse_parameters(json: &str) -> Result<ParameterSet, ParameterLoadError> {
    let params: ParameterSet = serde_json::from_str(json)?;
    params.validate()?;
    Ok(params)
}

pub fn load_parameters(path: impl AsRef<Path>) -> Result<ParameterSet, ParameterLoadError> {
    let contents = fs::read_to_string(path)?;
    parse_parameters(&contents)
}
