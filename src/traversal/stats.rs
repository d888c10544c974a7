use std::time::Duration;

/// Timing and shape statistics of one traversal.
///
/// Levels are numbered from 0 (the root alone). `level_sizes[k]` is the number of nodes
/// expanded at level `k`, so `level_sizes.iter().sum()` equals the number of visited
/// nodes of a completed traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Wall-clock time spent inside the traversal loop
    pub elapsed: Duration,
    /// Number of nodes expanded per level
    pub level_sizes: Vec<usize>,
    /// Total neighbor entries inspected, duplicates and self-loops included
    pub edges_scanned: usize,
    /// Worker threads used; 1 for the sequential reference
    pub workers: usize,
}

impl TraversalStats {
    /// Returns the number of levels expanded.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.level_sizes.len()
    }

    /// Returns the size of the widest level, or 0 if nothing was expanded.
    #[must_use]
    pub fn max_frontier(&self) -> usize {
        self.level_sizes.iter().copied().max().unwrap_or(0)
    }

    /// Returns the number of nodes expanded across all levels.
    #[must_use]
    pub fn expanded(&self) -> usize {
        self.level_sizes.iter().sum()
    }
}
