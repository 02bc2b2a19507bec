//! Integer grid geometry: cell coordinates and rectangular regions.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A cell coordinate. X grows right, Y grows down.
///
/// Points order row-major (by `y`, then `x`), matching the storage order of
/// [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// This point moved by `dx` columns and `dy` rows.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Squared Euclidean distance to `other`, computed in `i64` so that far
    /// apart points cannot overflow.
    #[inline]
    pub fn distance_squared(self, other: Point) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// True when `other` differs on both axes, i.e. a step from `self` to an
    /// adjacent `other` is diagonal.
    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        self.x != other.x && self.y != other.y
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

macro_rules! point_op {
    ($trait:ident, $method:ident, $op:tt, Point) => {
        impl $trait for Point {
            type Output = Point;
            #[inline]
            fn $method(self, rhs: Point) -> Point {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
    ($trait:ident, $method:ident, $op:tt, i32) => {
        impl $trait<i32> for Point {
            type Output = Point;
            #[inline]
            fn $method(self, k: i32) -> Point {
                Point::new(self.x $op k, self.y $op k)
            }
        }
    };
}

point_op!(Add, add, +, Point);
point_op!(Sub, sub, -, Point);
point_op!(Mul, mul, *, i32);
point_op!(Div, div, /, i32);

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// A rectangle of cells, `min` inclusive and `max` exclusive on both axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The rectangle spanned by corners `(x0, y0)` and `(x1, y1)`, in any
    /// order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Range {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    #[inline]
    pub fn height(self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    /// `(width, height)` as a point.
    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Cells covered by both rectangles. Disjoint inputs give the default
    /// (empty) range.
    pub fn intersect(self, other: Range) -> Self {
        let min = Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        if min.x < max.x && min.y < max.y {
            Range { min, max }
        } else {
            Range::default()
        }
    }

    /// Cells of the rectangle in row-major order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Cell at row-major offset `i`, which must be below `len()`.
    #[inline]
    fn nth_cell(self, i: usize) -> Point {
        let w = self.width() as usize;
        Point::new(self.min.x + (i % w) as i32, self.min.y + (i / w) as i32)
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at {}", self.width(), self.height(), self.min)
    }
}

/// Iterator over the cells of a [`Range`], see [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    front: usize,
    back: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.front >= self.back {
            return None;
        }
        let p = self.range.nth_cell(self.front);
        self.front += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for RangeIter {
    #[inline]
    fn next_back(&mut self) -> Option<Point> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.range.nth_cell(self.back))
    }
}

impl ExactSizeIterator for RangeIter {}
