//! The [`Grid`] type, a dense and exclusively owned 2D array of cells.
//!
//! Cells are stored row-major. Indexing outside the grid is a caller bug and
//! panics; use [`Grid::in_bounds`] or [`Grid::get`] to probe first.

use std::ops::{Index, IndexMut};

use crate::geom::{Point, Range};

/// A 2D grid of `T` values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawGrid<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

// Deserialized form, checked before it becomes a Grid.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = String;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        let expected = (raw.width.max(0) as usize) * (raw.height.max(0) as usize);
        if raw.width < 0 || raw.height < 0 || raw.cells.len() != expected {
            return Err(format!(
                "grid of {}x{} cannot hold {} cells",
                raw.width,
                raw.height,
                raw.cells.len()
            ));
        }
        Ok(Self {
            cells: raw.cells,
            width: raw.width,
            height: raw.height,
        })
    }
}

impl<T: Default + Clone> Default for Grid<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T: Default + Clone> Grid<T> {
    /// Create a new grid of the given dimensions, filled with `T::default()`.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, T::default())
    }

    /// Reallocate the grid to `width * height` default cells.
    ///
    /// Previous contents are discarded, even when the size is unchanged.
    pub fn resize(&mut self, width: i32, height: i32) {
        let w = width.max(0);
        let h = height.max(0);
        self.cells.clear();
        self.cells.resize((w as usize) * (h as usize), T::default());
        self.width = w;
        self.height = h;
    }

    /// Reset every cell to `T::default()`.
    pub fn clear(&mut self) {
        self.clear_with(T::default());
    }
}

impl<T: Clone> Grid<T> {
    /// Create a new grid with every cell set to `value`.
    pub fn filled(width: i32, height: i32, value: T) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![value; (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }

    /// Reset every cell to `value`.
    pub fn clear_with(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The bounding range `[0, 0) - (width, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `0 <= p.x < width && 0 <= p.y < height`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Flat row-major index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Point for a flat row-major index. `idx` must be `< len()`.
    #[inline]
    pub fn point_of(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    #[inline]
    fn checked_index(&self, p: Point) -> usize {
        match self.index_of(p) {
            Some(i) => i,
            None => panic!(
                "grid access out of bounds: {p} not in {}x{}",
                self.width, self.height
            ),
        }
    }

    /// Shared reference to the cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> &T {
        let i = self.checked_index(p);
        &self.cells[i]
    }

    /// Mutable reference to the cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> &mut T {
        let i = self.checked_index(p);
        &mut self.cells[i]
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index_of(p).map(move |i| &mut self.cells[i])
    }

    /// Replace the cell at `p`, panicking if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, value: T) {
        *self.at_mut(p) = value;
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.bounds().iter().zip(self.cells.iter())
    }

    /// Row-major iterator over `(Point, &mut T)` pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Point, &mut T)> + '_ {
        self.bounds().iter().zip(self.cells.iter_mut())
    }

    /// In-bounds points whose Euclidean distance to `center` is at most
    /// `radius`, in row-major order.
    ///
    /// Only the bounding box of the circle is scanned, clipped to the grid.
    /// A negative or NaN radius yields no points.
    pub fn circle(&self, center: Point, radius: f32) -> Vec<Point> {
        if radius.is_nan() || radius < 0.0 {
            return Vec::new();
        }
        let r = radius.ceil() as i32;
        let bbox = Range::new(
            center.x.saturating_sub(r),
            center.y.saturating_sub(r),
            center.x.saturating_add(r).saturating_add(1),
            center.y.saturating_add(r).saturating_add(1),
        )
        .intersect(self.bounds());
        let r2 = (radius as f64) * (radius as f64);
        bbox.iter()
            .filter(|&p| (p.distance_squared(center) as f64) <= r2)
            .collect()
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, p: Point) -> &T {
        self.at(p)
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, p: Point) -> &mut T {
        self.at_mut(p)
    }
}
