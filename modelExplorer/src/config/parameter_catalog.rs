use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::config::constants::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ParameterKey {
    Pi,       // Potential profit per outlet
    COp,      // Constant operational cost
    H,        // Fixed HQ overhead
    V,        // Per-outlet variable cost
    N,        // Total number of outlets
    AStar,    // Chosen effort level
    Beta,     // Franchisee efficiency
    Kappa,    // Effort cost curvature
    Delta,    // Duplication penalty
}

impl ParameterKey {
    pub const ALL: [ParameterKey; 9] = [
        ParameterKey::Pi,
        ParameterKey::COp,
        ParameterKey::H,
        ParameterKey::V,
        ParameterKey::N,
        ParameterKey::AStar,
        ParameterKey::Beta,
        ParameterKey::Kappa,
        ParameterKey::Delta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKey::Pi => "pi",
            ParameterKey::COp => "c_op",
            ParameterKey::H => "h",
            ParameterKey::V => "v",
            ParameterKey::N => "n",
            ParameterKey::AStar => "a_star",
            ParameterKey::Beta => "beta",
            ParameterKey::Kappa => "kappa",
            ParameterKey::Delta => "delta",
        }
    }

    pub fn spec(&self) -> &'static ParameterSpec {
        spec_for(*self)
    }
}

impl FromStr for ParameterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pi" | "π" => Ok(ParameterKey::Pi),
            "c_op" | "cop" => Ok(ParameterKey::COp),
            "h" => Ok(ParameterKey::H),
            "v" => Ok(ParameterKey::V),
            "n" => Ok(ParameterKey::N),
            "a_star" | "a*" | "astar" => Ok(ParameterKey::AStar),
            "beta" | "β" => Ok(ParameterKey::Beta),
            "kappa" | "κ" => Ok(ParameterKey::Kappa),
            "delta" | "δ" => Ok(ParameterKey::Delta),
            _ => Err(format!("Unknown parameter: {}", s)),
        }
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Control-surface sections the parameters are presented under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ParameterGroup {
    CoreEconomic,
    EndogenousOverhead,
    EffortIncentives,
    DuplicationPenalty,
}

impl ParameterGroup {
    pub const ALL: [ParameterGroup; 4] = [
        ParameterGroup::CoreEconomic,
        ParameterGroup::EndogenousOverhead,
        ParameterGroup::EffortIncentives,
        ParameterGroup::DuplicationPenalty,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ParameterGroup::CoreEconomic => "Core Economic Parameters",
            ParameterGroup::EndogenousOverhead => "Endogenous Overhead",
            ParameterGroup::EffortIncentives => "Effort & Incentives",
            ParameterGroup::DuplicationPenalty => "Duplication Penalty",
        }
    }

    pub fn members(&self) -> impl Iterator<Item = &'static ParameterSpec> + '_ {
        catalog().iter().filter(move |spec| spec.group == *self)
    }
}

/// Declared domain and slider metadata for one model parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSpec {
    pub key: ParameterKey,
    pub symbol: &'static str,
    pub label: &'static str,
    pub group: ParameterGroup,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    pub integer: bool,
}

impl ParameterSpec {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Move `steps` control steps away from `value` on the grid anchored at
    /// `min`. An off-grid value first moves to the nearest grid point in the
    /// direction of travel, which counts as one step. The result stays inside
    /// the domain.
    pub fn step_from(&self, value: f64, steps: i32) -> f64 {
        if steps == 0 {
            return value;
        }

        let position = (value - self.min) / self.step;
        let nearest = position.round();
        let index = if (position - nearest).abs() < GRID_TOLERANCE {
            nearest + f64::from(steps)
        } else if steps > 0 {
            position.ceil() + f64::from(steps - 1)
        } else {
            position.floor() + f64::from(steps + 1)
        };

        let moved = self.clamp(self.min + index * self.step);
        if self.integer {
            moved.round()
        } else {
            moved
        }
    }
}

// Fraction of a step within which a value counts as on the control grid
const GRID_TOLERANCE: f64 = 1e-9;

static CATALOG: [ParameterSpec; 9] = [
    ParameterSpec {
        key: ParameterKey::Pi,
        symbol: "π",
        label: "Potential profit per outlet",
        group: ParameterGroup::CoreEconomic,
        min: PI_MIN,
        max: PI_MAX,
        default: PI_DEFAULT,
        step: PI_STEP,
        integer: false,
    },
    ParameterSpec {
        key: ParameterKey::COp,
        symbol: "C_op",
        label: "Constant operational cost",
        group: ParameterGroup::CoreEconomic,
        min: C_OP_MIN,
        max: C_OP_MAX,
        default: C_OP_DEFAULT,
        step: C_OP_STEP,
        integer: false,
    },
    ParameterSpec {
        key: ParameterKey::H,
        symbol: "H",
        label: "Fixed HQ overhead",
        group: ParameterGroup::EndogenousOverhead,
        min: H_MIN,
        max: H_MAX,
        default: H_DEFAULT,
        step: H_STEP,
        integer: false,
    },
    ParameterSpec {
        key: ParameterKey::V,
        symbol: "v",
        label: "Per-outlet variable cost",
        group: ParameterGroup::EndogenousOverhead,
        min: V_MIN,
        max: V_MAX,
        default: V_DEFAULT,
        step: V_STEP,
        integer: false,
    },
    ParameterSpec {
        key: ParameterKey::N,
        symbol: "N",
        label: "Total number of outlets",
        group: ParameterGroup::EndogenousOverhead,
        min: N_MIN as f64,
        max: N_MAX as f64,
        default: N_DEFAULT as f64,
        step: N_STEP as f64,
        integer: true,
    },
    ParameterSpec {
        key: ParameterKey::AStar,
        symbol: "a*",
        label: "Chosen effort level",
        group: ParameterGroup::EffortIncentives,
        min: A_STAR_MIN,
        max: A_STAR_MAX,
        default: A_STAR_DEFAULT,
        step: A_STAR_STEP,
        integer: false,
    },
    ParameterSpec {
        key: ParameterKey::Beta,
        symbol: "β",
        label: "Franchisee efficiency",
        group: ParameterGroup::EffortIncentives,
        min: BETA_MIN,
        max: BETA_MAX,
        default: BETA_DEFAULT,
        step: BETA_STEP,
        integer: false,
    },
    ParameterSpec {
        key: ParameterKey::Kappa,
        symbol: "κ",
        label: "Effort cost curvature",
        group: ParameterGroup::EffortIncentives,
        min: KAPPA_MIN,
        max: KAPPA_MAX,
        default: KAPPA_DEFAULT,
        step: KAPPA_STEP,
        integer: false,
    },
    ParameterSpec {
        key: ParameterKey::Delta,
        symbol: "δ",
        label: "Duplication penalty",
        group: ParameterGroup::DuplicationPenalty,
        min: DELTA_MIN,
        max: DELTA_MAX,
        default: DELTA_DEFAULT,
        step: DELTA_STEP,
        integer: false,
    },
];

pub fn catalog() -> &'static [ParameterSpec] {
    &CATALOG
}

pub fn spec_for(key: ParameterKey) -> &'static ParameterSpec {
    // CATALOG is declared in ParameterKey::ALL order
    &CATALOG[key as usize]
}
