//! Straight lines and raycasts across the grid.
//!
//! A line from `a` to `b` takes `N = chebyshev(a, b)` steps. Step `i`
//! linearly interpolates at `t = i / N` and rounds to the nearest cell, so
//! every line is 8-connected and contains both endpoints.

use gridnav_core::{Grid, Point};

use crate::PathMap;
use crate::distance::chebyshev;
use crate::traits::Terrain;

/// Outcome of [`raycast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaycastHit {
    /// Whether the ray was stopped before reaching its end.
    pub hit: bool,
    /// The blocking cell when `hit`, otherwise the end of the ray.
    pub pos: Point,
}

#[inline]
fn step_point(a: Point, b: Point, step: i64, n: i64) -> Point {
    let t = if n == 0 { 0.0 } else { step as f64 / n as f64 };
    let lerp = |u: i32, v: i32| (u as f64 * (1.0 - t) + v as f64 * t).round() as i32;
    Point::new(lerp(a.x, b.x), lerp(a.y, b.y))
}

/// Cells on the segment from `a` to `b`, both included.
pub fn line(a: Point, b: Point) -> Vec<Point> {
    let n = chebyshev(a, b);
    (0..=n).map(|step| step_point(a, b, step, n)).collect()
}

/// Walk the line from `a` to `b` and stop at the first cell that is out of
/// bounds or impassable, `a` included.
///
/// Leaving the grid counts as a hit on the first out-of-bounds cell, so the
/// walk never takes more steps than the grid is wide or tall, however far
/// away `b` lies.
///
/// When `visited` is given it is cleared and receives every cell walked,
/// the blocking one included.
pub fn raycast<T: Terrain>(
    grid: &Grid<T>,
    a: Point,
    b: Point,
    mut visited: Option<&mut Vec<Point>>,
) -> RaycastHit {
    let n = chebyshev(a, b);
    if let Some(v) = visited.as_deref_mut() {
        v.clear();
        let extent = i64::from(grid.width().max(grid.height()));
        v.reserve(n.min(extent) as usize + 1);
    }
    for step in 0..=n {
        let p = step_point(a, b, step, n);
        if let Some(v) = visited.as_deref_mut() {
            v.push(p);
        }
        if !grid.get(p).is_some_and(|c| c.passable()) {
            return RaycastHit { hit: true, pos: p };
        }
    }
    RaycastHit { hit: false, pos: b }
}

impl<T: Terrain> PathMap<T> {
    /// Cells on the segment from `a` to `b`. See [`line`].
    #[inline]
    pub fn line(&self, a: Point, b: Point) -> Vec<Point> {
        line(a, b)
    }

    /// Cast a ray over this map's grid. See [`raycast`].
    #[inline]
    pub fn raycast(&self, a: Point, b: Point, visited: Option<&mut Vec<Point>>) -> RaycastHit {
        raycast(&self.grid, a, b, visited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathCell;

    #[test]
    fn line_single_point() {
        assert_eq!(line(Point::new(3, 3), Point::new(3, 3)), vec![Point::new(3, 3)]);
    }

    #[test]
    fn line_horizontal_and_diagonal() {
        assert_eq!(
            line(Point::new(0, 0), Point::new(3, 0)),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0)
            ]
        );
        assert_eq!(
            line(Point::new(2, 2), Point::new(0, 0)),
            vec![Point::new(2, 2), Point::new(1, 1), Point::new(0, 0)]
        );
    }

    #[test]
    fn line_is_eight_connected() {
        let pts = line(Point::new(-2, 1), Point::new(9, -4));
        assert_eq!(pts.len(), 12);
        assert_eq!(pts.first(), Some(&Point::new(-2, 1)));
        assert_eq!(pts.last(), Some(&Point::new(9, -4)));
        for w in pts.windows(2) {
            assert_eq!(chebyshev(w[0], w[1]), 1);
        }
    }

    #[test]
    fn raycast_clear() {
        let g: Grid<PathCell> = Grid::new(5, 5);
        let mut visited = vec![Point::new(99, 99)];
        let hit = raycast(&g, Point::new(0, 0), Point::new(4, 2), Some(&mut visited));
        assert_eq!(hit, RaycastHit { hit: false, pos: Point::new(4, 2) });
        assert_eq!(visited.len(), 5);
        assert_eq!(visited[0], Point::new(0, 0));
    }

    #[test]
    fn raycast_stops_at_wall() {
        let mut m: PathMap = PathMap::new(6, 1);
        m.set_passable(Point::new(3, 0), false);
        let mut visited = Vec::new();
        let hit = m.raycast(Point::new(0, 0), Point::new(5, 0), Some(&mut visited));
        assert_eq!(hit, RaycastHit { hit: true, pos: Point::new(3, 0) });
        assert_eq!(visited.len(), 4);
    }

    #[test]
    fn raycast_toward_far_point_stops_at_edge() {
        let m: PathMap = PathMap::new(4, 4);
        let mut visited = Vec::new();
        let far = Point::new(i32::MAX, i32::MIN);
        let hit = m.raycast(Point::new(1, 2), far, Some(&mut visited));
        assert!(hit.hit);
        assert!(!m.in_bounds(hit.pos));
        assert!(visited.len() <= 5);
        assert_eq!(visited.last(), Some(&hit.pos));

        let outside = Point::new(i32::MIN, i32::MIN);
        let hit = m.raycast(outside, Point::new(i32::MAX, i32::MAX), None);
        assert_eq!(hit, RaycastHit { hit: true, pos: outside });
    }

    #[test]
    fn raycast_leaving_grid_hits() {
        let m: PathMap = PathMap::new(3, 3);
        let hit = m.raycast(Point::new(1, 1), Point::new(5, 1), None);
        assert_eq!(hit, RaycastHit { hit: true, pos: Point::new(3, 1) });
    }
}
