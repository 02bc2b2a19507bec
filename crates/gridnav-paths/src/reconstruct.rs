use gridnav_core::Point;

/// Rebuild a start-to-goal path by following predecessors back from `goal`.
///
/// `came_from` must describe a tree rooted at `start`, as produced by
/// [`PathMap::compute_path`](crate::PathMap::compute_path) or a `HashMap`
/// snapshot of it. The result is empty when `goal` was not reached, or when
/// the chain breaks before reaching `start`. When `goal == start` the path
/// is `[start]` or empty, depending on `include_start`.
pub fn reconstruct_path(
    start: Point,
    goal: Point,
    include_start: bool,
    came_from: impl Fn(Point) -> Option<Point>,
) -> Vec<Point> {
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        path.push(current);
        match came_from(current) {
            Some(prev) => current = prev,
            None => return Vec::new(),
        }
    }
    if include_start {
        path.push(start);
    }
    path.reverse();
    path
}
