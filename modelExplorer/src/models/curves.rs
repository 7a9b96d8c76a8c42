use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Base,         // Constant operational cost
    Endogenous,   // Endogenous overhead
    Duplication,  // Endogenous overhead less the duplication penalty
}

impl CurveKind {
    pub const ALL: [CurveKind; 3] = [CurveKind::Base, CurveKind::Endogenous, CurveKind::Duplication];

    pub fn name(&self) -> &'static str {
        match self {
            CurveKind::Base => "P_base",
            CurveKind::Endogenous => "P_endh",
            CurveKind::Duplication => "P_dup",
        }
    }

    /// Legend text shown next to the plotted curve.
    pub fn label(&self) -> &'static str {
        match self {
            CurveKind::Base => "P_base: Baseline Profit",
            CurveKind::Endogenous => "P_endh: Endogenous Overhead",
            CurveKind::Duplication => "P_dup: Duplication Penalty",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Profit-per-outlet curves, each aligned index-for-index with the domain grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSet {
    pub p_base: Vec<f64>,
    pub p_endh: Vec<f64>,
    pub p_dup: Vec<f64>,
}

impl CurveSet {
    pub fn with_capacity(points: usize) -> Self {
        Self {
            p_base: Vec::with_capacity(points),
            p_endh: Vec::with_capacity(points),
            p_dup: Vec::with_capacity(points),
        }
    }

    pub fn get(&self, kind: CurveKind) -> &[f64] {
        match kind {
            CurveKind::Base => &self.p_base,
            CurveKind::Endogenous => &self.p_endh,
            CurveKind::Duplication => &self.p_dup,
        }
    }

    pub fn len(&self) -> usize {
        self.p_base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.p_base.is_empty()
    }

    /// Every value of the three curves, in `P_base`, `P_endh`, `P_dup` order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.p_base
            .iter()
            .chain(self.p_endh.iter())
            .chain(self.p_dup.iter())
            .copied()
    }
}

/// Evenly spaced values over `[start, end]`, both endpoints included.
pub fn domain_grid(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = points - 1;
            let span = end - start;
            (0..points)
                .map(|i| {
                    if i == last {
                        end
                    } else {
                        start + span * (i as f64 / last as f64)
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_includes_both_endpoints() {
        let grid = domain_grid(0.0, 1.0, 200);
        assert_eq!(grid.len(), 200);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[199], 1.0);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn grid_spacing_is_even() {
        let grid = domain_grid(0.0, 1.0, 5);
        assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn degenerate_grid_sizes() {
        assert!(domain_grid(0.0, 1.0, 0).is_empty());
        assert_eq!(domain_grid(0.0, 1.0, 1), vec![0.0]);
    }

    #[test]
    fn values_chain_all_three_curves() {
        let curves = CurveSet {
            p_base: vec![1.0, 2.0],
            p_endh: vec![3.0, 4.0],
            p_dup: vec![5.0, 6.0],
        };
        assert_eq!(curves.values().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(curves.get(CurveKind::Endogenous), &[3.0, 4.0]);
        assert_eq!(curves.len(), 2);
    }
}
