use gridnav_core::Point;

use crate::Path;

/// Read access to per-cell walkability and movement cost.
pub trait NavMap {
    /// Whether `p` can be entered. Must be `false` outside the map.
    fn is_walkable(&self, p: Point) -> bool;

    /// Cost multiplier for entering `p`. `f64::INFINITY` outside the map.
    fn cost(&self, p: Point) -> f64;

    /// Append the walkable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    ///
    /// Cardinal neighbors come first. With `diagonal`, a diagonal neighbor
    /// is kept only when both orthogonally adjacent cells are walkable, so
    /// a path never squeezes between two blocked corners.
    fn neighbors_into(&self, p: Point, diagonal: bool, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_walkable(n) {
                buf.push(n);
            }
        }
        if !diagonal {
            return;
        }
        for n in p.neighbors_diagonal() {
            if self.is_walkable(n)
                && self.is_walkable(Point::new(n.x, p.y))
                && self.is_walkable(Point::new(p.x, n.y))
            {
                buf.push(n);
            }
        }
    }
}

/// A path search strategy used by [`PathfindingSystem`](crate::PathfindingSystem).
pub trait PathSearch {
    /// Shortest path from `start` to `goal`, both included, or `None`.
    fn find_path<M: NavMap + ?Sized>(&self, map: &M, start: Point, goal: Point) -> Option<Path>;

    /// Remove waypoints that a straight, unobstructed line can skip.
    fn smooth_path<M: NavMap + ?Sized>(&self, map: &M, path: &[Point]) -> Path;
}
