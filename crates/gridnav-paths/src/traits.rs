/// Per-cell pathfinding data read by the search.
pub trait Terrain {
    /// Whether the search may step onto this cell.
    fn passable(&self) -> bool;

    /// Multiplier applied to the direction cost of any step onto this cell.
    /// Must be finite and non-negative.
    fn move_cost(&self) -> f32 {
        1.0
    }
}

/// A plain boolean grid: `true` is passable, every step costs its
/// direction cost.
impl Terrain for bool {
    #[inline]
    fn passable(&self) -> bool {
        *self
    }
}
