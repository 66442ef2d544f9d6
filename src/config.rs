//! Search settings shared by the solvers.

use crate::error::{PathfindingError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cost of a move along a row or column.
pub const CARDINAL_COST: f64 = 1.0;
/// Cost of a diagonal move. Equal to the Euclidean length of the move, which keeps the
/// straight-line heuristic admissible.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;
/// Diagonal cost used by earlier versions of the maze solver. Still admissible.
pub const LEGACY_DIAGONAL_COST: f64 = 1.7;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Cost of a diagonal move; must lie strictly between 1 and 2.
    pub diagonal_cost: f64,
    /// Multiplier applied to the heuristic. Values above 1 trade optimality for speed.
    pub heuristic_factor: f64,
    /// Maximum number of node expansions before a search gives up.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            diagonal_cost: DIAGONAL_COST,
            heuristic_factor: 1.0,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    pub fn legacy() -> Self {
        Self::default().with_diagonal_cost(LEGACY_DIAGONAL_COST)
    }

    pub fn with_diagonal_cost(mut self, cost: f64) -> Self {
        self.diagonal_cost = cost;
        self
    }

    pub fn with_heuristic_factor(mut self, factor: f64) -> Self {
        self.heuristic_factor = factor;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<()> {
        let d = self.diagonal_cost;
        if !d.is_finite() || d <= CARDINAL_COST || d >= 2.0 * CARDINAL_COST {
            return Err(PathfindingError::InvalidConfig(format!(
                "diagonal cost {} must lie strictly between {} and {}",
                d,
                CARDINAL_COST,
                2.0 * CARDINAL_COST
            )));
        }
        let h = self.heuristic_factor;
        if !h.is_finite() || h < 0.0 {
            return Err(PathfindingError::InvalidConfig(format!(
                "heuristic factor {} must be finite and non-negative",
                h
            )));
        }
        Ok(())
    }

    /// Whether the Euclidean heuristic under this configuration never overestimates the
    /// remaining cost. An inadmissible configuration still finds paths but they are only
    /// best-effort.
    pub fn is_admissible(&self) -> bool {
        self.heuristic_factor <= 1.0 && self.diagonal_cost >= DIAGONAL_COST
    }

    pub fn step_cost(&self, diagonal: bool) -> f64 {
        if diagonal {
            self.diagonal_cost
        } else {
            CARDINAL_COST
        }
    }
}
