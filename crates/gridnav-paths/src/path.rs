//! Helpers for inspecting finished paths.

use gridnav_core::Point;

use crate::astar::step_cost;
use crate::smooth::Line;
use crate::traits::NavMap;

/// Ordered grid coordinates, first = start, last = goal.
pub type Path = Vec<Point>;

/// Total movement cost of `path`.
///
/// Each segment is rasterised with Bresenham and charged cell by cell with
/// the search's step rule, so adjacent steps cost exactly what A* paid for
/// them and smoothed segments are priced along the cells they cross.
pub fn path_cost<M: NavMap + ?Sized>(map: &M, path: &[Point]) -> f64 {
    path.windows(2)
        .map(|seg| {
            let cells: Vec<Point> = Line::new(seg[0], seg[1]).collect();
            cells
                .windows(2)
                .map(|step| step_cost(map, step[0], step[1]))
                .sum::<f64>()
        })
        .sum()
}

/// Whether `path` is non-empty, fully walkable, and made of single steps
/// that are legal moves: 4-connected, or 8-connected with `diagonal` and
/// without cutting a blocked corner.
pub fn is_valid_path<M: NavMap + ?Sized>(map: &M, path: &[Point], diagonal: bool) -> bool {
    if path.is_empty() || !path.iter().all(|&p| map.is_walkable(p)) {
        return false;
    }
    path.windows(2).all(|step| {
        let (a, b) = (step[0], step[1]);
        if !a.is_adjacent(b, diagonal) {
            return false;
        }
        if a.x != b.x && a.y != b.y {
            map.is_walkable(Point::new(b.x, a.y)) && map.is_walkable(Point::new(a.x, b.y))
        } else {
            true
        }
    })
}
