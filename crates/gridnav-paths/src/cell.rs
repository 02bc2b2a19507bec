//! The default pathfinding cell.

use crate::traits::Terrain;

/// A grid cell carrying passability and a move-cost multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathCell {
    pub passable: bool,
    pub cost: f32,
}

impl PathCell {
    /// A passable cell with unit cost.
    pub const OPEN: Self = Self {
        passable: true,
        cost: 1.0,
    };

    /// An impassable cell.
    pub const BLOCKED: Self = Self {
        passable: false,
        cost: 1.0,
    };

    #[inline]
    pub const fn new(passable: bool, cost: f32) -> Self {
        Self { passable, cost }
    }

    /// Set the cost multiplier (builder).
    #[inline]
    pub const fn with_cost(mut self, cost: f32) -> Self {
        self.cost = cost;
        self
    }

    #[inline]
    pub fn block(&mut self) {
        self.passable = false;
    }

    #[inline]
    pub fn unblock(&mut self) {
        self.passable = true;
    }

    #[inline]
    pub fn toggle(&mut self) {
        self.passable = !self.passable;
    }
}

impl Default for PathCell {
    #[inline]
    fn default() -> Self {
        Self::OPEN
    }
}

impl Terrain for PathCell {
    #[inline]
    fn passable(&self) -> bool {
        self.passable
    }

    #[inline]
    fn move_cost(&self) -> f32 {
        self.cost
    }
}
