use gridnav_core::Point;

// Per-axis absolute differences, widened so extreme coordinates cannot
// overflow.
#[inline]
fn deltas(a: Point, b: Point) -> (i64, i64) {
    (
        (i64::from(a.x) - i64::from(b.x)).abs(),
        (i64::from(a.y) - i64::from(b.y)).abs(),
    )
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i64 {
    let (dx, dy) = deltas(a, b);
    dx + dy
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i64 {
    let (dx, dy) = deltas(a, b);
    dx.max(dy)
}

/// Euclidean distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f32 {
    (a.distance_squared(b) as f64).sqrt() as f32
}
