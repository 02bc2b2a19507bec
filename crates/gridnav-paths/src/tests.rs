//! Whole-map scenarios and randomized checks against a brute-force solver.

use gridnav_core::Point;

use crate::{Neighborhood, PathMap, Terrain, direction_cost};
use rand::prelude::*;
use rand::rngs::StdRng;

fn path_cost(map: &PathMap, start: Point, path: &[Point]) -> f32 {
    let mut prev = start;
    let mut total = 0.0;
    for &p in path {
        total += direction_cost(prev, p, map.diagonal_cost()) * map.at(p).move_cost();
        prev = p;
    }
    total
}

/// Cheapest cost from `start` to every cell by plain Bellman-Ford
/// relaxation over the same adjacency the search uses.
fn brute_force_costs(map: &PathMap, start: Point) -> Vec<Option<f32>> {
    let grid = map.grid();
    let mut dist: Vec<Option<f32>> = vec![None; grid.len()];
    dist[grid.index_of(start).unwrap()] = Some(0.0);
    for _ in 0..grid.len() {
        let mut changed = false;
        for (p, _) in grid.iter() {
            let Some(d) = dist[grid.index_of(p).unwrap()] else {
                continue;
            };
            for &dir in map.neighborhood().directions() {
                let n = p + dir;
                if !map.passable(n) {
                    continue;
                }
                let cand = d + direction_cost(p, n, map.diagonal_cost()) * map.at(n).move_cost();
                let slot = &mut dist[grid.index_of(n).unwrap()];
                if slot.is_none_or(|old| cand < old - 1e-6) {
                    *slot = Some(cand);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn random_map(rng: &mut StdRng, w: i32, h: i32) -> PathMap {
    let mut map: PathMap = PathMap::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let p = Point::new(x, y);
            if rng.random_bool(0.3) {
                map.set_passable(p, false);
            }
            let cost = [1.0, 1.0, 2.0, 3.5][rng.random_range(0..4usize)];
            map.set_cost(p, cost);
        }
    }
    map
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn open_grid_unit_diagonal_goes_straight_across() {
    let mut map: PathMap = PathMap::new(3, 3);
    map.set_diagonal_cost(1.0);
    map.set_include_start(true);
    let path = map.compute_path(Point::new(0, 0), Point::new(2, 2));
    assert_eq!(
        path,
        vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
    );
    assert_eq!(map.cost_so_far(Point::new(2, 2)), Some(2.0));
}

#[test]
fn diagonal_cost_two_ties_with_orthogonal_detour() {
    // Two diagonals cost exactly as much as four orthogonal steps; the
    // first route found at that cost is kept.
    let mut map: PathMap = PathMap::new(3, 3);
    map.set_diagonal_cost(2.0);
    map.set_include_start(true);
    let path = map.compute_path(Point::new(0, 0), Point::new(2, 2));
    assert_eq!(map.cost_so_far(Point::new(2, 2)), Some(4.0));
    assert_eq!(path_cost(&map, Point::new(0, 0), &path[1..]), 4.0);
}

#[test]
fn expensive_diagonal_routes_orthogonally() {
    let mut map: PathMap = PathMap::new(3, 3);
    map.set_diagonal_cost(2.5);
    map.set_include_start(true);
    let path = map.compute_path(Point::new(0, 0), Point::new(2, 2));
    assert_eq!(path.len(), 5);
    assert_eq!(map.cost_so_far(Point::new(2, 2)), Some(4.0));
    for w in path.windows(2) {
        assert!(!w[0].is_diagonal_to(w[1]));
    }
}

#[test]
fn single_row_with_blocked_middle_is_unreachable() {
    let mut map: PathMap = PathMap::new(3, 1);
    map.set_passable(Point::new(1, 0), false);
    map.set_include_start(true);
    assert!(map.compute_path(Point::new(0, 0), Point::new(2, 0)).is_empty());
    assert_eq!(map.cost_so_far(Point::new(2, 0)), None);
}

#[test]
fn circle_of_radius_two() {
    let map: PathMap = PathMap::new(10, 10);
    let center = Point::new(5, 5);
    let got = map.circle(center, 2.0);
    let expected: Vec<Point> = map
        .grid()
        .bounds()
        .iter()
        .filter(|p| p.distance_squared(center) <= 4)
        .collect();
    assert_eq!(got, expected);
    assert_eq!(got.len(), 13);
}

#[test]
fn walled_in_goal_is_unreachable() {
    let mut map: PathMap = PathMap::new(7, 7);
    let goal = Point::new(4, 4);
    for p in map.circle(goal, 1.5) {
        if p != goal {
            map.set_passable(p, false);
        }
    }
    assert!(map.compute_path(Point::new(0, 0), goal).is_empty());
    // Every cell outside the wall ring was still explored.
    assert_eq!(map.explored().len(), 49 - 9);
}

#[test]
fn bounds_invariant() {
    let map: PathMap = PathMap::new(6, 4);
    for y in -3..7 {
        for x in -3..9 {
            let inside = (0..6).contains(&x) && (0..4).contains(&y);
            assert_eq!(map.in_bounds(Point::new(x, y)), inside);
        }
    }
}

// ---------------------------------------------------------------------------
// Properties on random grids
// ---------------------------------------------------------------------------

#[test]
fn random_grids_give_valid_optimal_paths() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..60usize {
        let w = rng.random_range(2..9);
        let h = rng.random_range(1..7);
        let mut map = random_map(&mut rng, w, h);
        let start = Point::new(rng.random_range(0..w), rng.random_range(0..h));
        let goal = Point::new(rng.random_range(0..w), rng.random_range(0..h));
        map.set_passable(start, true);
        map.set_passable(goal, true);
        map.set_diagonal_cost([1.0, 1.001, 1.414, 2.5][round % 4]);
        if round % 5 == 0 {
            map.set_neighborhood(Neighborhood::Four);
        }

        let path = map.compute_path(start, goal);
        let expected = brute_force_costs(&map, start)[map.grid().index_of(goal).unwrap()];

        match expected {
            None => {
                assert!(path.is_empty(), "round {round}: path to unreachable goal");
                assert_eq!(map.cost_so_far(goal), None);
            }
            Some(best) => {
                let got = map.cost_so_far(goal).expect("goal reached");
                assert!((got - best).abs() < 1e-3, "round {round}: {got} vs {best}");
                if start == goal {
                    assert!(path.is_empty());
                    continue;
                }
                assert_eq!(path.last(), Some(&goal));
                let mut prev = start;
                for &p in &path {
                    assert!(map.passable(p), "round {round}: {p} not passable");
                    assert!(map.neighborhood().directions().contains(&(p - prev)));
                    prev = p;
                }
                assert!((path_cost(&map, start, &path) - got).abs() < 1e-3);
            }
        }
    }
}

#[test]
fn recomputing_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut map = random_map(&mut rng, 12, 9);
    let start = Point::new(0, 0);
    let goal = Point::new(11, 8);
    map.set_passable(start, true);
    map.set_passable(goal, true);

    let first = map.compute_path(start, goal);
    let first_costs = map.cost_so_far_map();
    let first_tree = map.came_from_map();
    let second = map.compute_path(start, goal);
    assert_eq!(first, second);
    assert_eq!(first_costs, map.cost_so_far_map());
    assert_eq!(first_tree, map.came_from_map());
}

#[test]
fn custom_terrain_payload() {
    #[derive(Clone, Default)]
    struct Tile {
        wall: bool,
        mud: bool,
    }

    impl Terrain for Tile {
        fn passable(&self) -> bool {
            !self.wall
        }

        fn move_cost(&self) -> f32 {
            if self.mud { 5.0 } else { 1.0 }
        }
    }

    let mut map: PathMap<Tile> = PathMap::new(5, 3);
    map.set_neighborhood(Neighborhood::Four);
    // Mud across the middle row except at the far end.
    for x in 0..4 {
        map.at_mut(Point::new(x, 1)).mud = true;
    }
    map.at_mut(Point::new(2, 0)).wall = true;
    let path = map.compute_path(Point::new(0, 0), Point::new(0, 2));
    // Straight down through one mud cell: 5 + 1.
    assert_eq!(path, vec![Point::new(0, 1), Point::new(0, 2)]);
    assert_eq!(map.cost_so_far(Point::new(0, 2)), Some(6.0));
}
