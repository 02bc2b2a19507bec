//! Search configuration.

use std::fmt;

use crate::neighbors::Neighborhood;

/// Default diagonal step cost. Slightly above `1.0` so that, between two
/// otherwise equal routes, the one with fewer diagonal steps wins.
pub const DEFAULT_DIAGONAL_COST: f32 = 1.001;

/// Parameters for [`PathMap::compute_path`](crate::PathMap::compute_path).
///
/// Changes affect subsequent searches only.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Adjacency used for expansion.
    pub neighborhood: Neighborhood,
    /// Cost of a diagonal step, relative to an orthogonal step of `1.0`.
    /// Large values discourage diagonals without forbidding them.
    pub diagonal_cost: f32,
    /// Whether the returned path starts with the start cell.
    pub include_start: bool,
    /// Route toward an impassable goal and stop next to it instead of
    /// returning an empty path.
    pub approach_blocked_goal: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            neighborhood: Neighborhood::Eight,
            diagonal_cost: DEFAULT_DIAGONAL_COST,
            include_start: false,
            approach_blocked_goal: false,
        }
    }
}

impl SearchConfig {
    #[inline]
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    #[inline]
    pub fn with_diagonal_cost(mut self, cost: f32) -> Self {
        self.diagonal_cost = cost;
        self
    }

    #[inline]
    pub fn with_include_start(mut self, include: bool) -> Self {
        self.include_start = include;
        self
    }

    #[inline]
    pub fn with_approach_blocked_goal(mut self, approach: bool) -> Self {
        self.approach_blocked_goal = approach;
        self
    }

    /// Check that every parameter is usable by the search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.diagonal_cost.is_finite() || self.diagonal_cost < 0.0 {
            return Err(ConfigError::InvalidDiagonalCost(self.diagonal_cost));
        }
        Ok(())
    }
}

/// Errors reported by [`SearchConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The diagonal cost is negative, infinite or NaN.
    InvalidDiagonalCost(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDiagonalCost(c) => {
                write!(f, "diagonal cost must be finite and non-negative, got {c}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
