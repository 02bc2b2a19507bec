//! Pathfinding visualizer model shared by the `pathfind` terminal demo.
//!
//! Demonstrates: editing passability, moving start and goal, recomputing the
//! path after every edit, diagonal-cost presets, 4/8-way adjacency, the
//! cost-so-far and predecessor overlays, circle queries and raycasts.

use crossterm::event::KeyCode;
use gridnav_core::Point;
use gridnav_paths::{DEFAULT_DIAGONAL_COST, Neighborhood, PathMap, RaycastHit};
use rand::prelude::*;
use rand::rngs::StdRng;

pub const WIDTH: i32 = 40;
pub const HEIGHT: i32 = 20;

const WALL_DENSITY: f64 = 0.22;
const BLOCK_RADIUS: f32 = 2.0;

/// Diagonal costs cycled through with `d`. The last one effectively
/// forbids diagonal moves.
pub const DIAGONAL_PRESETS: [f32; 5] = [DEFAULT_DIAGONAL_COST, std::f32::consts::SQRT_2, 1.0, 2.5, 1000.0];

pub const HELP_TEXT: &str = "\
arrows move  space wall  s start  g goal  d diagonal  n 4/8-way
c costs  t tree  l ray  o block circle  r scatter  q quit";

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// A user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveCursor(i32, i32),
    ToggleWall,
    SetStart,
    SetGoal,
    CycleDiagonal,
    ToggleNeighborhood,
    ToggleCosts,
    ToggleTree,
    ToggleRay,
    BlockCircle,
    Scatter,
    Quit,
}

/// Map a terminal key to an [`Action`].
pub fn action_for(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Left => Action::MoveCursor(-1, 0),
        KeyCode::Right => Action::MoveCursor(1, 0),
        KeyCode::Up => Action::MoveCursor(0, -1),
        KeyCode::Down => Action::MoveCursor(0, 1),
        KeyCode::Char(' ') => Action::ToggleWall,
        KeyCode::Char('s') => Action::SetStart,
        KeyCode::Char('g') => Action::SetGoal,
        KeyCode::Char('d') => Action::CycleDiagonal,
        KeyCode::Char('n') => Action::ToggleNeighborhood,
        KeyCode::Char('c') => Action::ToggleCosts,
        KeyCode::Char('t') => Action::ToggleTree,
        KeyCode::Char('l') => Action::ToggleRay,
        KeyCode::Char('o') => Action::BlockCircle,
        KeyCode::Char('r') => Action::Scatter,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

// ---------------------------------------------------------------------------
// Visualizer
// ---------------------------------------------------------------------------

/// Which kind of glyph a rendered cell shows, for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Floor,
    Wall,
    Start,
    Goal,
    Path,
    Ray,
    RayHit,
    Overlay,
}

pub struct Visualizer {
    map: PathMap,
    start: Point,
    goal: Point,
    cursor: Point,
    path: Vec<Point>,
    diagonal: usize,
    show_costs: bool,
    show_tree: bool,
    show_ray: bool,
    ray: Option<RaycastHit>,
    ray_cells: Vec<Point>,
    rng: StdRng,
}

impl Visualizer {
    /// An open `width` x `height` map with start and goal in opposite
    /// corners.
    pub fn new(width: i32, height: i32, seed: u64) -> Self {
        let mut map: PathMap = PathMap::new(width, height);
        map.set_include_start(true);
        let mut vis = Self {
            map,
            start: Point::ZERO,
            goal: Point::new(width - 1, height - 1),
            cursor: Point::ZERO,
            path: Vec::new(),
            diagonal: 0,
            show_costs: false,
            show_tree: false,
            show_ray: false,
            ray: None,
            ray_cells: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        vis.refresh();
        vis
    }

    /// Like [`new`](Self::new), with randomly scattered walls.
    pub fn scattered(width: i32, height: i32, seed: u64) -> Self {
        let mut vis = Self::new(width, height, seed);
        vis.scatter();
        vis
    }

    pub fn map(&self) -> &PathMap {
        &self.map
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn ray(&self) -> Option<RaycastHit> {
        self.ray
    }

    /// Apply an action. Returns `false` once the user asked to quit.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::MoveCursor(dx, dy) => {
                let next = self.cursor.shift(dx, dy);
                if self.map.in_bounds(next) {
                    self.cursor = next;
                }
                // The ray follows the cursor.
                self.recast();
                return true;
            }
            Action::ToggleWall => {
                if self.cursor != self.start && self.cursor != self.goal {
                    self.map.at_mut(self.cursor).toggle();
                }
            }
            Action::SetStart => self.start = self.cursor,
            Action::SetGoal => self.goal = self.cursor,
            Action::CycleDiagonal => {
                self.diagonal = (self.diagonal + 1) % DIAGONAL_PRESETS.len();
                self.map.set_diagonal_cost(DIAGONAL_PRESETS[self.diagonal]);
            }
            Action::ToggleNeighborhood => {
                let nb = self.map.neighborhood().toggled();
                self.map.set_neighborhood(nb);
            }
            Action::ToggleCosts => self.show_costs = !self.show_costs,
            Action::ToggleTree => self.show_tree = !self.show_tree,
            Action::ToggleRay => self.show_ray = !self.show_ray,
            Action::BlockCircle => {
                for p in self.map.circle(self.cursor, BLOCK_RADIUS) {
                    if p != self.start && p != self.goal {
                        self.map.set_passable(p, false);
                    }
                }
            }
            Action::Scatter => self.scatter(),
            Action::Quit => return false,
        }
        self.refresh();
        true
    }

    fn scatter(&mut self) {
        self.map.clear();
        let mut walls = 0;
        for y in 0..self.map.height() {
            for x in 0..self.map.width() {
                let p = Point::new(x, y);
                if p != self.start && p != self.goal && self.rng.random_bool(WALL_DENSITY) {
                    self.map.set_passable(p, false);
                    walls += 1;
                }
            }
        }
        log::debug!("scattered {walls} walls over {}", self.map.grid().bounds());
        self.refresh();
    }

    /// Recompute the path and the ray after an edit.
    fn refresh(&mut self) {
        self.path = self.map.compute_path(self.start, self.goal);
        self.recast();
    }

    fn recast(&mut self) {
        if self.show_ray {
            self.ray = Some(self.map.raycast(self.start, self.cursor, Some(&mut self.ray_cells)));
        } else {
            self.ray = None;
            self.ray_cells.clear();
        }
    }

    /// Glyph and character for the cell at `p`.
    pub fn cell(&self, p: Point) -> (Glyph, char) {
        if p == self.start {
            return (Glyph::Start, 'S');
        }
        if p == self.goal {
            return (Glyph::Goal, 'G');
        }
        if !self.map.passable(p) {
            if self.ray.is_some_and(|r| r.hit && r.pos == p) {
                return (Glyph::RayHit, 'X');
            }
            return (Glyph::Wall, '#');
        }
        if self.path.contains(&p) {
            return (Glyph::Path, '*');
        }
        if self.show_ray && self.ray_cells.contains(&p) {
            return (Glyph::Ray, '+');
        }
        if let Some(prev) = self.show_tree.then(|| self.map.came_from(p)).flatten() {
            return (Glyph::Overlay, arrow(prev - p));
        }
        if let Some(c) = self.show_costs.then(|| self.map.cost_so_far(p)).flatten() {
            let digit = (c as u32 % 10) as u8;
            return (Glyph::Overlay, char::from(b'0' + digit));
        }
        (Glyph::Floor, '.')
    }

    /// The map as text, one string per row.
    pub fn render(&self) -> Vec<String> {
        (0..self.map.height())
            .map(|y| {
                (0..self.map.width())
                    .map(|x| self.cell(Point::new(x, y)).1)
                    .collect()
            })
            .collect()
    }

    pub fn status_line(&self) -> String {
        let nb = match self.map.neighborhood() {
            Neighborhood::Four => "4-way",
            Neighborhood::Eight => "8-way",
        };
        let stats = self.map.stats();
        let cost = match self.map.cost_so_far(self.goal) {
            Some(c) if stats.found => format!("{c:.2}"),
            _ => "unreachable".to_string(),
        };
        format!(
            "{nb}  diag {:.3}  cost {cost}  len {}  expanded {}  cursor {}",
            self.map.diagonal_cost(),
            self.path.len(),
            stats.expanded,
            self.cursor
        )
    }
}

/// ASCII arrow pointing along `d`, a unit step toward a predecessor.
fn arrow(d: Point) -> char {
    match (d.x, d.y) {
        (1, 0) => '>',
        (-1, 0) => '<',
        (0, -1) => '^',
        (0, 1) => 'v',
        (1, -1) | (-1, 1) => '/',
        _ => '\\',
    }
}
