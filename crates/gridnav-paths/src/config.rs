//! Search and cache configuration values.

/// Distance estimate used to order the A* open set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `dx + dy`.
    Manhattan,
    /// Straight-line distance.
    Euclidean,
    /// Octile distance, `max + (√2 − 1)·min`. Exact for 8-way movement on
    /// uniform-cost terrain.
    #[default]
    Diagonal,
    /// `max(dx, dy)`.
    Chebyshev,
}

/// Per-search parameters.
///
/// Passed by value into every search so a [`Pathfinder`](crate::Pathfinder)
/// holds no mutable state and can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    /// Allow 8-way movement. Diagonal steps never cut a blocked corner.
    pub allow_diagonal: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Diagonal,
            allow_diagonal: true,
        }
    }
}

impl SearchConfig {
    /// 4-way movement with the Manhattan heuristic.
    pub const CARDINAL: Self = Self {
        heuristic: Heuristic::Manhattan,
        allow_diagonal: false,
    };

    /// Replace the heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Enable or disable diagonal movement.
    pub fn with_diagonal(mut self, allow_diagonal: bool) -> Self {
        self.allow_diagonal = allow_diagonal;
        self
    }
}

/// Default number of paths kept by a [`PathfindingSystem`](crate::PathfindingSystem).
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Path cache parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CacheConfig {
    /// Maximum number of stored paths. `0` disables caching.
    pub capacity: usize,
    /// Smoothing flag used by
    /// [`find_path_default`](crate::PathfindingSystem::find_path_default).
    pub smooth_by_default: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            smooth_by_default: true,
        }
    }
}

impl CacheConfig {
    /// Default configuration with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = SearchConfig::default();
        assert_eq!(s.heuristic, Heuristic::Diagonal);
        assert!(s.allow_diagonal);

        let c = CacheConfig::default();
        assert_eq!(c.capacity, 100);
        assert!(c.smooth_by_default);
    }

    #[test]
    fn builders() {
        let s = SearchConfig::default()
            .with_heuristic(Heuristic::Euclidean)
            .with_diagonal(false);
        assert_eq!(s.heuristic, Heuristic::Euclidean);
        assert!(!s.allow_diagonal);
        assert_eq!(CacheConfig::with_capacity(3).capacity, 3);
    }
}
