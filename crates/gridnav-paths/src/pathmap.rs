use std::collections::HashMap;

use gridnav_core::{Grid, Point};

use crate::cell::PathCell;
use crate::config::{ConfigError, SearchConfig};
use crate::neighbors::{Neighborhood, Neighbors};
use crate::traits::Terrain;

// ---------------------------------------------------------------------------
// Internal node for the priority-queue search
// ---------------------------------------------------------------------------

pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) cost: f32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            cost: 0.0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry, ordered by cost then insertion sequence for use in
/// `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: f32,
    pub(crate) seq: u64,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest cost first, and
        // among equal costs the earliest pushed.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped from the frontier and expanded.
    pub expanded: usize,
    /// Cells that received a cost.
    pub reached: usize,
    /// Whether the goal was popped from the frontier.
    pub found: bool,
}

// ---------------------------------------------------------------------------
// PathMap
// ---------------------------------------------------------------------------

/// A pathfinding session: a grid of cells, the search parameters, and the
/// predecessor / cost-so-far maps of the last search.
///
/// The maps live in dense per-cell arrays tagged with a generation counter,
/// so starting a new search invalidates them without touching every cell and
/// repeated searches allocate only the frontier and the returned path.
pub struct PathMap<T = PathCell> {
    pub(crate) grid: Grid<T>,
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // grid size the node cache was laid out for
    pub(crate) searched_size: Point,
    // cells that received a cost in the last search, in discovery order
    pub(crate) explored: Vec<Point>,
    pub(crate) stats: SearchStats,
    pub(crate) nbuf: Neighbors,
}

impl<T: Terrain + Default + Clone> PathMap<T> {
    /// Create a `width` x `height` map of default cells with the default
    /// [`SearchConfig`].
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_grid(Grid::new(width, height))
    }

    /// Create a map with an explicit configuration.
    pub fn with_config(width: i32, height: i32, config: SearchConfig) -> Result<Self, ConfigError> {
        let mut map = Self::new(width, height);
        map.set_config(config)?;
        Ok(map)
    }

    /// Resize the grid. Every cell is reset to its default and the search
    /// maps are discarded.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.grid.resize(width, height);
        self.nodes.clear();
        self.nodes.resize(self.grid.len(), Node::default());
        self.generation = 0;
        self.searched_size = self.grid.size();
        self.explored.clear();
        self.stats = SearchStats::default();
    }

    /// Reset every cell to its default value.
    pub fn clear(&mut self) {
        self.grid.clear();
    }
}

impl<T: Terrain> PathMap<T> {
    /// Wrap an existing grid, using the default [`SearchConfig`].
    pub fn from_grid(grid: Grid<T>) -> Self {
        let len = grid.len();
        let size = grid.size();
        Self {
            grid,
            config: SearchConfig::default(),
            nodes: vec![Node::default(); len],
            generation: 0,
            searched_size: size,
            explored: Vec::new(),
            stats: SearchStats::default(),
            nbuf: Neighbors::new(),
        }
    }

    /// Give back the underlying grid.
    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    // -----------------------------------------------------------------------
    // Grid access
    // -----------------------------------------------------------------------

    #[inline]
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Mutable access to the grid. Resizing through this reference is
    /// allowed; the search caches follow on the next search.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid<T> {
        &mut self.grid
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.grid.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.grid.in_bounds(p)
    }

    /// The cell at `p`. Panics if `p` is out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> &T {
        self.grid.at(p)
    }

    /// The cell at `p`. Panics if `p` is out of bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> &mut T {
        self.grid.at_mut(p)
    }

    /// Whether `p` is in bounds and passable.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.grid.get(p).is_some_and(|c| c.passable())
    }

    /// In-bounds points within Euclidean distance `radius` of `center`.
    #[inline]
    pub fn circle(&self, center: Point, radius: f32) -> Vec<Point> {
        self.grid.circle(center, radius)
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the whole configuration after validating it.
    pub fn set_config(&mut self, config: SearchConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[inline]
    pub fn diagonal_cost(&self) -> f32 {
        self.config.diagonal_cost
    }

    /// Set the cost of a diagonal step.
    ///
    /// # Panics
    ///
    /// Panics if `cost` is negative, infinite or NaN.
    pub fn set_diagonal_cost(&mut self, cost: f32) {
        assert!(
            cost.is_finite() && cost >= 0.0,
            "diagonal cost must be finite and non-negative, got {cost}"
        );
        self.config.diagonal_cost = cost;
    }

    #[inline]
    pub fn include_start(&self) -> bool {
        self.config.include_start
    }

    #[inline]
    pub fn set_include_start(&mut self, include: bool) {
        self.config.include_start = include;
    }

    #[inline]
    pub fn neighborhood(&self) -> Neighborhood {
        self.config.neighborhood
    }

    #[inline]
    pub fn set_neighborhood(&mut self, neighborhood: Neighborhood) {
        self.config.neighborhood = neighborhood;
    }

    #[inline]
    pub fn set_approach_blocked_goal(&mut self, approach: bool) {
        self.config.approach_blocked_goal = approach;
    }

    // -----------------------------------------------------------------------
    // Results of the last search
    // -----------------------------------------------------------------------

    #[inline]
    fn current_node(&self, p: Point) -> Option<&Node> {
        if self.searched_size != self.grid.size() || self.nodes.len() != self.grid.len() {
            // grid resized through grid_mut since the last search
            return None;
        }
        let n = &self.nodes[self.grid.index_of(p)?];
        (self.generation != 0 && n.generation == self.generation).then_some(n)
    }

    /// Predecessor of `p` on the cheapest route found by the last search.
    ///
    /// `None` for the start cell, for unreached cells, and for points out of
    /// bounds.
    pub fn came_from(&self, p: Point) -> Option<Point> {
        let n = self.current_node(p)?;
        if n.parent == NO_PARENT {
            None
        } else {
            Some(self.grid.point_of(n.parent))
        }
    }

    /// Cumulative cost from the start to `p` found by the last search, or
    /// `None` if `p` was not reached.
    pub fn cost_so_far(&self, p: Point) -> Option<f32> {
        self.current_node(p).map(|n| n.cost)
    }

    /// Cells that received a cost in the last search, in discovery order.
    #[inline]
    pub fn explored(&self) -> &[Point] {
        &self.explored
    }

    /// Counters from the last search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Snapshot of the predecessor map of the last search.
    pub fn came_from_map(&self) -> HashMap<Point, Point> {
        self.explored
            .iter()
            .filter_map(|&p| self.came_from(p).map(|prev| (p, prev)))
            .collect()
    }

    /// Snapshot of the cost-so-far map of the last search.
    pub fn cost_so_far_map(&self) -> HashMap<Point, f32> {
        self.explored
            .iter()
            .filter_map(|&p| self.cost_so_far(p).map(|c| (p, c)))
            .collect()
    }
}

impl PathMap<PathCell> {
    /// Set the passability of the cell at `p`. Panics if out of bounds.
    pub fn set_passable(&mut self, p: Point, passable: bool) {
        self.grid.at_mut(p).passable = passable;
    }

    /// Set the move-cost multiplier of the cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds, or if `cost` is negative, infinite
    /// or NaN.
    pub fn set_cost(&mut self, p: Point, cost: f32) {
        assert!(
            cost.is_finite() && cost >= 0.0,
            "cell cost must be finite and non-negative, got {cost}"
        );
        self.grid.at_mut(p).cost = cost;
    }
}

impl<T: Terrain + Default + Clone> Default for PathMap<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(feature = "serde")]
impl<T: Terrain + serde::Serialize> serde::Serialize for PathMap<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("PathMap", 2)?;
        s.serialize_field("grid", &self.grid)?;
        s.serialize_field("config", &self.config)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Terrain + serde::Deserialize<'de>> serde::Deserialize<'de> for PathMap<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(bound = "T: serde::Deserialize<'de>")]
        struct Data<T> {
            grid: Grid<T>,
            #[serde(default)]
            config: SearchConfig,
        }

        let data = Data::<T>::deserialize(deserializer)?;
        let mut map = PathMap::from_grid(data.grid);
        map.set_config(data.config).map_err(serde::de::Error::custom)?;
        Ok(map)
    }
}
