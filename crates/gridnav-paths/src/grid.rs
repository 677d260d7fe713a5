//! Walkability and movement-cost storage for a fixed-size tile map.
//!
//! [`NavigationGrid`] keeps two parallel row-major buffers: a walkable flag
//! and a cost multiplier per cell. Every cell starts walkable with cost 1.0.
//! Coordinates outside the grid read as blocked with infinite cost; writes
//! to them are ignored.

use std::fmt;

use gridnav_core::{Point, Range};
use log::warn;

use crate::error::{GridError, Result};
use crate::traits::NavMap;

/// Cost of a cell that has not been given one explicitly.
pub const DEFAULT_COST: f64 = 1.0;

/// Per-cell walkability and movement cost for a `width × height` map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct NavigationGrid {
    width: i32,
    height: i32,
    walkable: Vec<bool>,
    costs: Vec<f64>,
}

impl NavigationGrid {
    /// Create an all-walkable grid with every cost set to 1.0.
    ///
    /// Fails when either dimension is zero or negative.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            walkable: vec![true; len],
            costs: vec![DEFAULT_COST; len],
        })
    }

    fn checked_len(width: i32, height: i32) -> Result<usize> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridError::TooLarge { width, height })
    }

    /// Build a grid from an ASCII picture, one text line per row.
    ///
    /// `#` and `X` are blocked, `.` and space are walkable with cost 1.0,
    /// and a digit `1`-`9` is walkable with that cost.
    pub fn from_ascii(map: &str) -> Result<Self> {
        let rows: Vec<&str> = map.lines().collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::new(
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(rows.len()).unwrap_or(i32::MAX),
        )?;
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedMap {
                    line: y + 1,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '#' | 'X' => grid.set_walkable(p, false),
                    '.' | ' ' => {}
                    '1'..='9' => grid.set_cost(p, f64::from(ch as u8 - b'0')),
                    _ => {
                        return Err(GridError::MapParse {
                            line: y + 1,
                            column: x + 1,
                            ch,
                        });
                    }
                }
            }
        }
        Ok(grid)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (x = width, y = height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The full grid rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Whether `p` can be entered. Always `false` out of bounds.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.walkable[i])
    }

    /// Mark a single cell walkable or blocked. Ignored out of bounds.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) {
        if let Some(i) = self.idx(p) {
            self.walkable[i] = walkable;
        }
    }

    /// Movement cost multiplier of `p`; `f64::INFINITY` out of bounds.
    #[inline]
    pub fn get_cost(&self, p: Point) -> f64 {
        self.idx(p).map_or(f64::INFINITY, |i| self.costs[i])
    }

    /// Set the cost multiplier of a single cell. Ignored out of bounds.
    ///
    /// Searches assume costs are positive; negative or NaN values are
    /// stored but produce unspecified routes.
    pub fn set_cost(&mut self, p: Point, cost: f64) {
        let Some(i) = self.idx(p) else {
            return;
        };
        if cost.is_nan() || cost < 0.0 {
            warn!("cell {p} given cost {cost}; searches expect positive costs");
        }
        self.costs[i] = cost;
    }

    /// Set every cell's cost, leaving walkability untouched.
    pub fn fill_cost(&mut self, cost: f64) {
        if cost.is_nan() || cost < 0.0 {
            warn!("grid filled with cost {cost}; searches expect positive costs");
        }
        self.costs.fill(cost);
    }

    /// Walkable neighbors of `p`: up to 4, or up to 8 with `diagonal`.
    ///
    /// A diagonal neighbor is returned only when both cells orthogonally
    /// adjacent to the step are walkable.
    pub fn get_neighbors(&self, p: Point, diagonal: bool) -> Vec<Point> {
        let mut buf = Vec::with_capacity(if diagonal { 8 } else { 4 });
        self.neighbors_into(p, diagonal, &mut buf);
        buf
    }

    /// Reset every cell to walkable with cost 1.0.
    pub fn clear(&mut self) {
        self.walkable.fill(true);
        self.costs.fill(DEFAULT_COST);
    }

    /// Set walkability for the rectangle spanned by corners `a` and `b`.
    ///
    /// Both corners are inclusive and may be given in any order; the
    /// rectangle is clamped to the grid.
    pub fn set_area_walkable(&mut self, a: Point, b: Point, walkable: bool) {
        let area = self.bounds().intersect(Range::from_corners(a, b));
        for p in area {
            if let Some(i) = self.idx(p) {
                self.walkable[i] = walkable;
            }
        }
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.walkable.iter().filter(|&&w| w).count()
    }
}

impl NavMap for NavigationGrid {
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        NavigationGrid::is_walkable(self, p)
    }

    #[inline]
    fn cost(&self, p: Point) -> f64 {
        self.get_cost(p)
    }
}

impl fmt::Display for NavigationGrid {
    /// Walkability map: `.` walkable, `#` blocked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = if self.is_walkable(Point::new(x, y)) { '.' } else { '#' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Unchecked serialized form, validated into a [`NavigationGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    width: i32,
    height: i32,
    walkable: Vec<bool>,
    costs: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for NavigationGrid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let expected = Self::checked_len(raw.width, raw.height)?;
        for found in [raw.walkable.len(), raw.costs.len()] {
            if found != expected {
                return Err(GridError::LengthMismatch { expected, found });
            }
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            walkable: raw.walkable,
            costs: raw.costs,
        })
    }
}
