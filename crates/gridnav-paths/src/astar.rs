use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::f64::consts::SQRT_2;

use gridnav_core::Point;
use log::{debug, trace};

use crate::Path;
use crate::config::{Heuristic, SearchConfig};
use crate::heuristic::calculate_heuristic;
use crate::node::{NodeArena, NodeRef, PathNode};
use crate::smooth;
use crate::traits::{NavMap, PathSearch};

/// Cost of stepping from `from` to the adjacent cell `to`: √2 for a
/// diagonal step, 1 otherwise, scaled by the cost of `to`.
#[inline]
pub fn step_cost<M: NavMap + ?Sized>(map: &M, from: Point, to: Point) -> f64 {
    let base = if from.x != to.x && from.y != to.y {
        SQRT_2
    } else {
        1.0
    };
    base * map.cost(to)
}

/// Compute the cheapest path from `start` to `goal` with A*.
///
/// Returns the full path (both endpoints included), `[start]` when
/// `start == goal`, or `None` when either endpoint is blocked or the goal
/// cannot be reached. Among open entries of equal priority the one queued
/// first is expanded first, so results are identical across runs and
/// platforms.
pub fn astar_path<M: NavMap + ?Sized>(
    map: &M,
    start: Point,
    goal: Point,
    config: SearchConfig,
) -> Option<Path> {
    trace!("astar: {start} -> {goal} ({config:?})");

    if !map.is_walkable(start) {
        debug!("astar: start {start} is blocked");
        return None;
    }
    if !map.is_walkable(goal) {
        debug!("astar: goal {goal} is blocked");
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut arena = NodeArena::default();
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut closed: HashSet<Point> = HashSet::new();
    let mut best_g: HashMap<Point, f64> = HashMap::new();
    let mut seq: u64 = 0;

    let h = calculate_heuristic(start, goal, config.heuristic);
    let root = arena.push(PathNode {
        pos: start,
        g: 0.0,
        h,
        parent: None,
    });
    best_g.insert(start, 0.0);
    open.push(NodeRef {
        idx: root,
        priority: h,
        seq,
    });
    seq += 1;

    let mut nbuf: Vec<Point> = Vec::with_capacity(8);

    while let Some(current) = open.pop() {
        let node = arena.get(current.idx);

        // Skip entries for positions already expanded or superseded by a
        // cheaper route queued later.
        if closed.contains(&node.pos) || best_g.get(&node.pos).is_some_and(|&g| node.g > g) {
            continue;
        }

        if node.pos == goal {
            let path = arena.path_to(current.idx);
            trace!(
                "astar: found path of {} cells, cost {:.3}, {} expanded, {} nodes",
                path.len(),
                node.g,
                closed.len(),
                arena.len()
            );
            return Some(path);
        }

        closed.insert(node.pos);

        nbuf.clear();
        map.neighbors_into(node.pos, config.allow_diagonal, &mut nbuf);

        for &np in &nbuf {
            if closed.contains(&np) {
                continue;
            }
            let tentative_g = node.g + step_cost(map, node.pos, np);

            match best_g.entry(np) {
                Entry::Occupied(mut e) => {
                    if tentative_g >= *e.get() {
                        continue;
                    }
                    e.insert(tentative_g);
                }
                Entry::Vacant(e) => {
                    // Infinite-cost cells are never entered.
                    if !tentative_g.is_finite() {
                        continue;
                    }
                    e.insert(tentative_g);
                }
            }

            let h = calculate_heuristic(np, goal, config.heuristic);
            let idx = arena.push(PathNode {
                pos: np,
                g: tentative_g,
                h,
                parent: Some(current.idx),
            });
            open.push(NodeRef {
                idx,
                priority: tentative_g + h,
                seq,
            });
            seq += 1;
        }
    }

    debug!(
        "astar: no path {start} -> {goal} after expanding {} cells",
        closed.len()
    );
    None
}

/// A* pathfinder with a fixed [`SearchConfig`].
///
/// Holds no per-search state: every call allocates its own open set and
/// node arena, so one `Pathfinder` can serve many grids and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pathfinder {
    config: SearchConfig,
}

impl Pathfinder {
    /// Create a pathfinder using `config` for every search.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration used by [`find_path`](Self::find_path).
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the configuration for subsequent searches.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Heuristic estimate from `a` to `b` under `kind`.
    pub fn calculate_heuristic(a: Point, b: Point, kind: Heuristic) -> f64 {
        calculate_heuristic(a, b, kind)
    }

    /// Search with this pathfinder's configuration. See [`astar_path`].
    pub fn find_path<M: NavMap + ?Sized>(&self, map: &M, start: Point, goal: Point) -> Option<Path> {
        astar_path(map, start, goal, self.config)
    }

    /// Search with an explicit configuration, ignoring the stored one.
    pub fn find_path_with<M: NavMap + ?Sized>(
        &self,
        map: &M,
        start: Point,
        goal: Point,
        config: SearchConfig,
    ) -> Option<Path> {
        astar_path(map, start, goal, config)
    }

    /// Line-of-sight smoothing. See [`smooth::smooth_path`].
    pub fn smooth_path<M: NavMap + ?Sized>(&self, map: &M, path: &[Point]) -> Path {
        smooth::smooth_path(map, path)
    }
}

impl PathSearch for Pathfinder {
    fn find_path<M: NavMap + ?Sized>(&self, map: &M, start: Point, goal: Point) -> Option<Path> {
        Pathfinder::find_path(self, map, start, goal)
    }

    fn smooth_path<M: NavMap + ?Sized>(&self, map: &M, path: &[Point]) -> Path {
        Pathfinder::smooth_path(self, map, path)
    }
}
