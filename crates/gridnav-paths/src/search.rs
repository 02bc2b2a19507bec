use std::collections::{BinaryHeap, HashMap};

use gridnav_core::Point;

use crate::PathMap;
use crate::neighbors::direction_cost;
use crate::pathmap::{NO_PARENT, Node, NodeRef, SearchStats};
use crate::reconstruct::reconstruct_path;
use crate::traits::Terrain;

/// Whether the search may step onto a cell with this move cost. Cells with
/// a negative, infinite or NaN cost are never entered.
#[inline]
fn usable_cost(cost: f32) -> bool {
    cost.is_finite() && cost >= 0.0
}

impl<T: Terrain> PathMap<T> {
    /// Compute the cheapest path from `start` to `goal`.
    ///
    /// Runs a uniform-cost search (Dijkstra, no heuristic) over passable
    /// cells and stops as soon as the goal leaves the frontier. The start
    /// cell is always expanded, even if it is impassable.
    ///
    /// Returns the cells from start to goal; the start is included only when
    /// [`include_start`](crate::SearchConfig::include_start) is set. An
    /// unreachable or out-of-bounds endpoint yields an empty path.
    ///
    /// The predecessor and cost-so-far maps of this search replace those of
    /// the previous one; query them with [`came_from`](Self::came_from) and
    /// [`cost_so_far`](Self::cost_so_far).
    pub fn compute_path(&mut self, start: Point, goal: Point) -> Vec<Point> {
        self.begin_search();

        let (Some(start_idx), Some(goal_idx)) =
            (self.grid.index_of(start), self.grid.index_of(goal))
        else {
            log::trace!("path {start} -> {goal}: endpoint outside {}", self.grid.bounds());
            return Vec::new();
        };

        let cfg = self.config;
        let approach = cfg.approach_blocked_goal && !self.grid.at(goal).passable();
        let cur_gen = self.generation;

        let grid = &self.grid;
        let nodes = &mut self.nodes;
        let explored = &mut self.explored;
        let mut stats = SearchStats::default();

        nodes[start_idx] = Node {
            cost: 0.0,
            parent: NO_PARENT,
            generation: cur_gen,
            open: true,
        };
        explored.push(start);

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(NodeRef {
            idx: start_idx,
            cost: 0.0,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries.
            if nodes[ci].generation != cur_gen || !nodes[ci].open {
                continue;
            }
            nodes[ci].open = false;

            if ci == goal_idx {
                stats.found = true;
                break;
            }
            stats.expanded += 1;

            let current_cost = nodes[ci].cost;
            let cp = grid.point_of(ci);

            let keep = |n: Point| match grid.get(n) {
                Some(cell) => {
                    (cell.passable() || (approach && n == goal)) && usable_cost(cell.move_cost())
                }
                None => false,
            };
            for &np in nbuf.expand(cp, cfg.neighborhood, keep) {
                let Some(ni) = grid.index_of(np) else {
                    continue;
                };
                let move_cost = grid.at(np).move_cost();
                let tentative = current_cost + direction_cost(cp, np, cfg.diagonal_cost) * move_cost;

                let n = &mut nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.cost {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    explored.push(np);
                }

                n.cost = tentative;
                n.parent = ci;
                n.open = true;

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                    seq,
                });
            }
        }

        self.nbuf = nbuf;
        stats.reached = self.explored.len();
        self.stats = stats;

        let mut path = reconstruct_path(start, goal, cfg.include_start, |p| self.came_from(p));
        if approach {
            path.pop();
        }

        if stats.found {
            log::debug!(
                "path {start} -> {goal}: {} cells, cost {:.3}, expanded {} of {} reached",
                path.len(),
                self.nodes[goal_idx].cost,
                stats.expanded,
                stats.reached
            );
        } else {
            log::trace!(
                "path {start} -> {goal}: unreachable, expanded {} cells",
                stats.expanded
            );
        }
        path
    }

    /// Like [`compute_path`](Self::compute_path), and also copy the
    /// predecessor and cost-so-far maps into `came_from` and `cost_so_far`.
    /// Both maps are cleared first.
    pub fn compute_path_into(
        &mut self,
        start: Point,
        goal: Point,
        came_from: &mut HashMap<Point, Point>,
        cost_so_far: &mut HashMap<Point, f32>,
    ) -> Vec<Point> {
        let path = self.compute_path(start, goal);
        came_from.clear();
        cost_so_far.clear();
        for &p in &self.explored {
            if let Some(prev) = self.came_from(p) {
                came_from.insert(p, prev);
            }
            if let Some(c) = self.cost_so_far(p) {
                cost_so_far.insert(p, c);
            }
        }
        path
    }

    /// Invalidate the maps of the previous search.
    fn begin_search(&mut self) {
        let size = self.grid.size();
        if self.nodes.len() != self.grid.len() || self.searched_size != size {
            self.nodes.clear();
            self.nodes.resize(self.grid.len(), Node::default());
            self.generation = 0;
            self.searched_size = size;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale nodes could match again, so wipe them.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.explored.clear();
        self.stats = SearchStats::default();
    }
}
