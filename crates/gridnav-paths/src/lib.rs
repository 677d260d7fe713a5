//! Grid navigation for turn-based tile games.
//!
//! This crate provides the pathfinding core used to move actors across a
//! tile map:
//!
//! - **[`NavigationGrid`]** — per-cell walkability and movement cost.
//! - **A\*** search ([`Pathfinder`], [`astar_path`]) with Manhattan,
//!   Euclidean, octile and Chebyshev [`Heuristic`]s and diagonal moves that
//!   never cut a blocked corner.
//! - **Line-of-sight smoothing** ([`smooth_path`], [`has_line_of_sight`])
//!   that removes waypoints a straight unobstructed segment can skip.
//! - **[`PathfindingSystem`]** — a bounded FIFO cache of found paths over
//!   one grid, invalidated explicitly by the host.
//!
//! "No path" is an ordinary outcome and is reported as `None`; only grid
//! construction can fail, with a [`GridError`].
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`NavMap`] | walkability, cost and neighbor enumeration read by searches |
//! | [`PathSearch`] | search + smoothing strategy driven by [`PathfindingSystem`] |

mod astar;
mod config;
mod error;
mod grid;
mod heuristic;
mod node;
mod path;
mod smooth;
mod system;
mod traits;

pub use astar::{Pathfinder, astar_path, step_cost};
pub use config::{CacheConfig, DEFAULT_CACHE_CAPACITY, Heuristic, SearchConfig};
pub use error::{GridError, Result};
pub use grid::{DEFAULT_COST, NavigationGrid};
pub use heuristic::{calculate_heuristic, chebyshev, euclidean, manhattan, octile};
pub use path::{Path, is_valid_path, path_cost};
pub use smooth::{Line, bresenham_line, has_line_of_sight, smooth_path};
pub use system::{CacheStats, PathfindingSystem};
pub use traits::{NavMap, PathSearch};

pub use gridnav_core::{Point, Range};
