//! Memoizing path cache over a single grid.
//!
//! [`PathfindingSystem`] owns a [`NavigationGrid`] and a search strategy
//! and stores found paths keyed by `(start, goal, smooth)`. Eviction is
//! FIFO by insertion time: lookups do not refresh an entry. The cache is
//! never invalidated on its own; after editing the grid, call
//! [`invalidate_area`](PathfindingSystem::invalidate_area) or
//! [`clear_cache`](PathfindingSystem::clear_cache).

use std::collections::{HashMap, VecDeque};

use gridnav_core::{Point, Range};
use log::{debug, trace};

use crate::Path;
use crate::astar::Pathfinder;
use crate::config::{CacheConfig, SearchConfig};
use crate::grid::NavigationGrid;
use crate::traits::PathSearch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    start: Point,
    goal: Point,
    smooth: bool,
}

/// Counters describing cache behaviour since creation or the last
/// [`reset_stats`](PathfindingSystem::reset_stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub invalidations: u64,
}

/// A grid, a searcher, and a bounded cache of the paths it produced.
#[derive(Debug)]
pub struct PathfindingSystem<S = Pathfinder> {
    grid: NavigationGrid,
    searcher: S,
    config: CacheConfig,
    entries: HashMap<CacheKey, Path>,
    /// Keys in insertion order, oldest first.
    order: VecDeque<CacheKey>,
    stats: CacheStats,
}

impl PathfindingSystem<Pathfinder> {
    /// Default search and cache configuration over `grid`.
    pub fn new(grid: NavigationGrid) -> Self {
        Self::with_searcher(grid, Pathfinder::default(), CacheConfig::default())
    }

    /// A* with `search` and a cache configured by `cache`.
    pub fn with_config(grid: NavigationGrid, search: SearchConfig, cache: CacheConfig) -> Self {
        Self::with_searcher(grid, Pathfinder::new(search), cache)
    }
}

impl<S: PathSearch> PathfindingSystem<S> {
    /// Wrap an arbitrary search strategy.
    pub fn with_searcher(grid: NavigationGrid, searcher: S, config: CacheConfig) -> Self {
        Self {
            grid,
            searcher,
            config,
            entries: HashMap::with_capacity(config.capacity),
            order: VecDeque::with_capacity(config.capacity),
            stats: CacheStats::default(),
        }
    }

    /// Find a path from `start` to `goal`, smoothing it when `smooth` is set.
    ///
    /// A cached result is returned as a fresh copy. On a miss the searcher
    /// runs; a found path is stored, a missing one is not, so a later call
    /// searches again.
    pub fn find_path(&mut self, start: Point, goal: Point, smooth: bool) -> Option<Path> {
        let key = CacheKey { start, goal, smooth };
        if let Some(path) = self.entries.get(&key) {
            self.stats.hits += 1;
            trace!("path cache hit {start} -> {goal} (smooth={smooth})");
            return Some(path.clone());
        }
        self.stats.misses += 1;

        let mut path = self.searcher.find_path(&self.grid, start, goal)?;
        if smooth {
            path = self.searcher.smooth_path(&self.grid, &path);
        }
        self.store(key, path.clone());
        Some(path)
    }

    /// [`find_path`](Self::find_path) with the configured default
    /// smoothing flag.
    pub fn find_path_default(&mut self, start: Point, goal: Point) -> Option<Path> {
        self.find_path(start, goal, self.config.smooth_by_default)
    }

    fn store(&mut self, key: CacheKey, path: Path) {
        if self.config.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.config.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            self.stats.evictions += 1;
            debug!("path cache evicted {} -> {}", oldest.start, oldest.goal);
        }
        self.entries.insert(key, path);
        self.order.push_back(key);
    }

    /// Drop cached paths after the rectangle spanned by `a` and `b` has
    /// been edited.
    ///
    /// Every entry is dropped, whether or not its path touches the
    /// rectangle.
    pub fn invalidate_area(&mut self, a: Point, b: Point) {
        let area = Range::from_corners(a, b);
        debug!(
            "path cache invalidated by area {area}: dropping {} paths",
            self.entries.len()
        );
        self.drop_all();
    }

    /// Drop every cached path.
    pub fn clear_cache(&mut self) {
        debug!("path cache cleared: dropping {} paths", self.entries.len());
        self.drop_all();
    }

    fn drop_all(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.invalidations += 1;
    }

    /// Whether a path for this query is currently cached.
    pub fn contains(&self, start: Point, goal: Point, smooth: bool) -> bool {
        self.entries.contains_key(&CacheKey { start, goal, smooth })
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of cached paths.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Hit, miss, eviction and invalidation counters since the last reset.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Zero every counter; cached paths are kept.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// The grid searched by this system.
    pub fn grid(&self) -> &NavigationGrid {
        &self.grid
    }

    /// Mutable grid access. Edits do **not** invalidate cached paths.
    pub fn grid_mut(&mut self) -> &mut NavigationGrid {
        &mut self.grid
    }

    /// The search backend used on cache misses.
    pub fn searcher(&self) -> &S {
        &self.searcher
    }

    /// Give back the grid and the searcher, discarding the cache.
    pub fn into_parts(self) -> (NavigationGrid, S) {
        (self.grid, self.searcher)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::traits::NavMap;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// Pathfinder that counts how often it is asked to search.
    #[derive(Default)]
    struct CountingSearch {
        inner: Pathfinder,
        searches: Cell<usize>,
    }

    impl PathSearch for CountingSearch {
        fn find_path<M: NavMap + ?Sized>(&self, map: &M, start: Point, goal: Point) -> Option<Path> {
            self.searches.set(self.searches.get() + 1);
            self.inner.find_path(map, start, goal)
        }

        fn smooth_path<M: NavMap + ?Sized>(&self, map: &M, path: &[Point]) -> Path {
            self.inner.smooth_path(map, path)
        }
    }

    fn counting(w: i32, h: i32, capacity: usize) -> PathfindingSystem<CountingSearch> {
        PathfindingSystem::with_searcher(
            NavigationGrid::new(w, h).unwrap(),
            CountingSearch::default(),
            CacheConfig::with_capacity(capacity),
        )
    }

    fn searches(sys: &PathfindingSystem<CountingSearch>) -> usize {
        sys.searcher().searches.get()
    }

    #[test]
    fn second_identical_query_hits_cache() {
        let mut sys = counting(10, 10, 100);
        let first = sys.find_path(p(0, 0), p(7, 4), true);
        let second = sys.find_path(p(0, 0), p(7, 4), true);
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(searches(&sys), 1);
        assert_eq!(
            sys.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                evictions: 0,
                invalidations: 0
            }
        );
    }

    #[test]
    fn smooth_flag_is_part_of_the_key() {
        let mut sys = counting(10, 10, 100);
        let smoothed = sys.find_path(p(0, 0), p(9, 0), true).unwrap();
        let raw = sys.find_path(p(0, 0), p(9, 0), false).unwrap();
        assert_eq!(smoothed, vec![p(0, 0), p(9, 0)]);
        assert_eq!(raw.len(), 10);
        assert_eq!(searches(&sys), 2);
        assert_eq!(sys.len(), 2);
    }

    #[test]
    fn invalidate_area_clears_everything() {
        let mut sys = counting(10, 10, 100);
        sys.find_path(p(0, 0), p(2, 0), false);
        sys.find_path(p(9, 9), p(8, 8), false);
        assert_eq!(sys.len(), 2);

        // Far from both paths, still drops both.
        sys.invalidate_area(p(5, 5), p(5, 5));
        assert!(sys.is_empty());

        sys.find_path(p(0, 0), p(2, 0), false);
        assert_eq!(searches(&sys), 3);
        assert_eq!(sys.stats().invalidations, 1);
    }

    #[test]
    fn invalidate_area_accepts_extreme_corners() {
        let mut sys = counting(4, 4, 100);
        sys.find_path(p(0, 0), p(3, 3), false);
        sys.invalidate_area(p(0, 0), p(i32::MAX, i32::MAX));
        assert!(sys.is_empty());
        sys.find_path(p(0, 0), p(3, 3), false);
        sys.invalidate_area(p(i32::MIN, i32::MIN), p(i32::MAX, i32::MAX));
        assert!(sys.is_empty());
        assert_eq!(sys.stats().invalidations, 2);
    }

    #[test]
    fn clear_cache_forces_recompute() {
        let mut sys = counting(10, 10, 100);
        sys.find_path(p(0, 0), p(3, 3), true);
        sys.clear_cache();
        assert!(!sys.contains(p(0, 0), p(3, 3), true));
        sys.find_path(p(0, 0), p(3, 3), true);
        assert_eq!(searches(&sys), 2);
    }

    #[test]
    fn missing_paths_are_not_cached() {
        let mut sys = counting(10, 10, 100);
        sys.grid_mut().set_area_walkable(p(5, 0), p(5, 9), false);
        assert_eq!(sys.find_path(p(0, 5), p(9, 5), true), None);
        assert!(sys.is_empty());

        // Opening a gap is seen without any invalidation call.
        sys.grid_mut().set_walkable(p(5, 9), true);
        assert!(sys.find_path(p(0, 5), p(9, 5), true).is_some());
        assert_eq!(searches(&sys), 2);
    }

    #[test]
    fn grid_edits_do_not_invalidate() {
        let mut sys = counting(10, 10, 100);
        let before = sys.find_path(p(0, 0), p(9, 0), false).unwrap();
        sys.grid_mut().set_walkable(p(4, 0), false);
        assert_eq!(sys.find_path(p(0, 0), p(9, 0), false), Some(before));
        assert_eq!(searches(&sys), 1);

        sys.invalidate_area(p(4, 0), p(4, 0));
        let after = sys.find_path(p(0, 0), p(9, 0), false).unwrap();
        assert!(!after.contains(&p(4, 0)));
    }

    #[test]
    fn returned_paths_are_copies() {
        let mut sys = counting(10, 10, 100);
        let mut path = sys.find_path(p(0, 0), p(4, 4), false).unwrap();
        let original = path.clone();
        path.clear();
        assert_eq!(sys.find_path(p(0, 0), p(4, 4), false), Some(original));
    }

    #[test]
    fn fifo_eviction_ignores_access_recency() {
        let mut sys = counting(10, 10, 3);
        for x in 1..=3 {
            sys.find_path(p(0, 0), p(x, 0), false);
        }
        // Touch the oldest entry; FIFO still evicts it first.
        sys.find_path(p(0, 0), p(1, 0), false);
        sys.find_path(p(0, 0), p(4, 0), false);

        assert_eq!(sys.len(), 3);
        assert!(!sys.contains(p(0, 0), p(1, 0), false));
        assert!(sys.contains(p(0, 0), p(2, 0), false));
        assert_eq!(sys.stats().evictions, 1);

        sys.find_path(p(0, 0), p(1, 0), false);
        assert_eq!(searches(&sys), 5);
    }

    #[test]
    fn default_capacity_evicts_the_earliest_query() {
        let mut sys = PathfindingSystem::new(NavigationGrid::new(20, 20).unwrap());
        assert_eq!(sys.capacity(), 100);
        let goals: Vec<Point> = Range::new(0, 0, 20, 20).iter().skip(1).take(101).collect();
        for &g in &goals {
            sys.find_path(p(0, 0), g, true);
        }
        assert_eq!(sys.len(), 100);
        assert!(!sys.contains(p(0, 0), goals[0], true));
        assert!(sys.contains(p(0, 0), goals[1], true));
        assert!(sys.contains(p(0, 0), goals[100], true));
    }

    #[test]
    fn zero_capacity_never_stores() {
        let mut sys = counting(5, 5, 0);
        sys.find_path(p(0, 0), p(4, 4), true);
        sys.find_path(p(0, 0), p(4, 4), true);
        assert!(sys.is_empty());
        assert_eq!(searches(&sys), 2);
    }

    #[test]
    fn default_smoothing_flag() {
        let grid = NavigationGrid::new(6, 1).unwrap();
        let cache = CacheConfig {
            smooth_by_default: false,
            ..CacheConfig::default()
        };
        let mut sys = PathfindingSystem::with_config(grid, SearchConfig::default(), cache);
        assert_eq!(sys.find_path_default(p(0, 0), p(5, 0)).map(|path| path.len()), Some(6));
        assert!(sys.contains(p(0, 0), p(5, 0), false));

        let (grid, pf) = sys.into_parts();
        assert_eq!(grid.width(), 6);
        assert_eq!(pf.config(), SearchConfig::default());
    }

    #[test]
    fn start_equals_goal_is_cached_like_any_path() {
        let mut sys = counting(4, 4, 10);
        assert_eq!(sys.find_path(p(2, 2), p(2, 2), true), Some(vec![p(2, 2)]));
        assert!(sys.contains(p(2, 2), p(2, 2), true));
        sys.reset_stats();
        assert_eq!(sys.stats(), CacheStats::default());
    }
}
