//! **gridnav-core** — geometry primitives shared by the *gridnav* crates.
//!
//! Every grid coordinate in the workspace is a [`Point`]; rectangular areas
//! (map bounds, edited regions, invalidated regions) are [`Range`] values.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
