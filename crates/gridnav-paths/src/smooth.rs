//! Line-of-sight tests and string-pulling path smoothing.

use gridnav_core::Point;

use crate::Path;
use crate::traits::NavMap;

/// Integer Bresenham rasterisation of the segment `a → b`, yielding every
/// traversed cell from `a` to `b` inclusive.
#[derive(Debug, Clone)]
pub struct Line {
    cur: Point,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl Line {
    /// Start rasterising from `a` towards `b`.
    pub fn new(a: Point, b: Point) -> Self {
        // Error terms are widened so spans near the i32 extremes stay exact.
        let dx = i64::from(a.x.abs_diff(b.x));
        let dy = -i64::from(a.y.abs_diff(b.y));
        Self {
            cur: a,
            end: b,
            dx,
            dy,
            sx: if a.x < b.x { 1 } else { -1 },
            sy: if a.y < b.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = self.cur;
        if p == self.end {
            self.done = true;
            return Some(p);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.cur.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
        Some(p)
    }
}

/// Cells on the Bresenham segment from `a` to `b`, endpoints included.
pub fn bresenham_line(a: Point, b: Point) -> Vec<Point> {
    Line::new(a, b).collect()
}

/// Whether every cell on the Bresenham segment `a → b`, endpoints
/// included, is walkable. Stops at the first blocked cell.
pub fn has_line_of_sight<M: NavMap + ?Sized>(map: &M, a: Point, b: Point) -> bool {
    Line::new(a, b).all(|p| map.is_walkable(p))
}

/// String-pull `path`: keep the first point, then repeatedly jump to the
/// furthest later point visible from the current anchor.
///
/// Paths of two points or fewer are returned unchanged. The result is
/// never longer than the input and keeps both endpoints.
pub fn smooth_path<M: NavMap + ?Sized>(map: &M, path: &[Point]) -> Path {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let last = path.len() - 1;
    let mut smoothed = Vec::with_capacity(path.len());
    smoothed.push(path[0]);

    let mut anchor = 0;
    while anchor < last {
        let next = (anchor + 1..=last)
            .rev()
            .find(|&i| has_line_of_sight(map, path[anchor], path[i]))
            .unwrap_or(anchor + 1);
        smoothed.push(path[next]);
        anchor = next;
    }

    smoothed
}
