use gridnav_core::Point;

/// Direction offsets in expansion order: the four orthogonal moves first,
/// then the four diagonals.
const DIRS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// Which adjacency the search expands through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighborhood {
    /// Orthogonal moves only.
    Four,
    /// Orthogonal and diagonal moves. This is the default.
    #[default]
    Eight,
}

impl Neighborhood {
    /// Direction offsets for this neighborhood, in expansion order.
    #[inline]
    pub fn directions(self) -> &'static [Point] {
        match self {
            Self::Four => &DIRS[..4],
            Self::Eight => &DIRS,
        }
    }

    /// The other neighborhood.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Four => Self::Eight,
            Self::Eight => Self::Four,
        }
    }
}

/// Direction cost of a single step between adjacent cells: `1.0` for an
/// orthogonal move, `diagonal_cost` for a diagonal one.
#[inline]
pub fn direction_cost(from: Point, to: Point, diagonal_cost: f32) -> f32 {
    if from.is_diagonal_to(to) {
        diagonal_cost
    } else {
        1.0
    }
}

/// Reusable buffer for the passable neighbors of a cell, so the search
/// does not allocate per expansion.
#[derive(Debug, Default)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Neighbors {
    pub fn new() -> Self {
        Neighbors {
            buf: Vec::with_capacity(DIRS.len()),
        }
    }

    /// Return the neighbors of `p` in `neighborhood`, keeping only those
    /// for which `keep` returns `true`.
    pub fn expand(
        &mut self,
        p: Point,
        neighborhood: Neighborhood,
        keep: impl Fn(Point) -> bool,
    ) -> &[Point] {
        self.buf.clear();
        self.buf.extend(
            neighborhood
                .directions()
                .iter()
                .map(|&d| p + d)
                .filter(|&n| keep(n)),
        );
        &self.buf
    }
}
