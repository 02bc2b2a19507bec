//! **gridnav-core**: geometry primitives and a dense 2D grid container.
//!
//! This crate provides the foundational types used across the *gridnav*
//! workspace: [`Point`] and [`Range`] for integer grid geometry, and
//! [`Grid`], a bounds-checked row-major array of arbitrary cells.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::Grid;
