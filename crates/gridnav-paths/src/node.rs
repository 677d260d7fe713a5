use std::cmp::Ordering;

use gridnav_core::Point;

// ---------------------------------------------------------------------------
// Search tree nodes
// ---------------------------------------------------------------------------

/// A node of the A* search tree.
///
/// Nodes live in a [`NodeArena`] owned by a single search; `parent` is an
/// index into the same arena, `None` for the root.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PathNode {
    pub(crate) pos: Point,
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) parent: Option<usize>,
}

impl PathNode {
    /// `g + h`, the key used to order the open set.
    #[inline]
    pub(crate) fn priority(&self) -> f64 {
        self.g + self.h
    }
}

/// Growable node storage for one search.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<PathNode>,
}

impl NodeArena {
    pub(crate) fn push(&mut self, node: PathNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> PathNode {
        self.nodes[idx]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walk parent links from `idx` back to the root; the result runs
    /// root first.
    pub(crate) fn path_to(&self, idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(idx);
        while let Some(i) = cur {
            let node = &self.nodes[i];
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}

// ---------------------------------------------------------------------------
// Open-set entries
// ---------------------------------------------------------------------------

/// Reference into the arena, ordered for use in a `BinaryHeap`.
///
/// Lower priority pops first; equal priorities pop in insertion order
/// (lower `seq` first).
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) priority: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys so the max-heap yields the smallest entry.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}
