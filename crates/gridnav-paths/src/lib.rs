//! Weighted pathfinding on 2D grids.
//!
//! The entry point is [`PathMap`], a pathfinding session that owns a
//! [`Grid`](gridnav_core::Grid) of cells together with the search caches:
//!
//! - **Uniform-cost search** from a start to a goal cell
//!   ([`PathMap::compute_path`]), with configurable diagonal cost and
//!   4- or 8-way adjacency ([`SearchConfig`], [`Neighborhood`])
//! - **Predecessor and cost-so-far maps** of the last search
//!   ([`PathMap::came_from`], [`PathMap::cost_so_far`]) for overlays
//! - **Path reconstruction** from any predecessor map ([`reconstruct_path`])
//! - **Circle queries**, **lines** and **raycasts** ([`PathMap::circle`],
//!   [`line`], [`raycast`])
//!
//! Cells implement [`Terrain`]; [`PathCell`] is the ready-made one.
//!
//! ```
//! use gridnav_core::Point;
//! use gridnav_paths::PathMap;
//!
//! let mut map: PathMap = PathMap::new(3, 3);
//! map.set_diagonal_cost(1.0);
//! map.set_include_start(true);
//! let path = map.compute_path(Point::new(0, 0), Point::new(2, 2));
//! assert_eq!(path, vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]);
//! assert_eq!(map.cost_so_far(Point::new(2, 2)), Some(2.0));
//! ```

mod cell;
mod config;
mod distance;
mod line;
mod neighbors;
mod pathmap;
mod reconstruct;
mod search;
mod traits;

#[cfg(test)]
mod tests;

pub use cell::PathCell;
pub use config::{ConfigError, DEFAULT_DIAGONAL_COST, SearchConfig};
pub use distance::{chebyshev, euclidean, manhattan};
pub use line::{RaycastHit, line, raycast};
pub use neighbors::{Neighborhood, Neighbors, direction_cost};
pub use pathmap::{PathMap, SearchStats};
pub use reconstruct::reconstruct_path;
pub use traits::Terrain;
