use crate::traversal::CancellationToken;

/// Configuration for a [`TraversalScheduler`](crate::traversal::TraversalScheduler).
///
/// # Presets
///
/// - [`TraversalConfig::default`] - one worker per available CPU
/// - [`TraversalConfig::with_workers`] - an explicit worker count
/// - [`TraversalConfig::single_worker`] - one worker, useful as a baseline against the
///   multi-worker runs
///
/// # Examples
///
/// ```rust
/// use parbfs::traversal::{CancellationToken, TraversalConfig};
///
/// let config = TraversalConfig::with_workers(8)
///     .with_min_chunk(256)
///     .with_cancellation(CancellationToken::new());
/// assert_eq!(config.workers, 8);
/// assert_eq!(config.min_chunk, 256);
/// ```
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Number of worker threads in the pool (must be at least 1)
    pub workers: usize,

    /// Smallest number of frontier nodes handed to one worker at a time
    /// Larger values reduce scheduling overhead on narrow levels
    pub min_chunk: usize,

    /// Optional token checked at every level boundary
    pub cancel: Option<CancellationToken>,
}

/// Default value of [`TraversalConfig::min_chunk`].
pub const DEFAULT_MIN_CHUNK: usize = 64;

impl Default for TraversalConfig {
    fn default() -> Self {
        let workers = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        Self::with_workers(workers)
    }
}

impl TraversalConfig {
    /// Creates a configuration with `workers` threads and default chunking.
    #[must_use]
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers,
            min_chunk: DEFAULT_MIN_CHUNK,
            cancel: None,
        }
    }

    /// Creates a one-worker configuration.
    #[must_use]
    pub fn single_worker() -> Self {
        Self::with_workers(1)
    }

    /// Sets the minimum chunk length.
    #[must_use]
    pub fn with_min_chunk(mut self, min_chunk: usize) -> Self {
        self.min_chunk = min_chunk.max(1);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_workers() {
        let config = TraversalConfig::default();
        assert!(config.workers >= 1);
        assert_eq!(config.min_chunk, DEFAULT_MIN_CHUNK);
        assert!(config.cancel.is_none());
    }

    #[test]
    fn test_min_chunk_clamped() {
        let config = TraversalConfig::single_worker().with_min_chunk(0);
        assert_eq!(config.workers, 1);
        assert_eq!(config.min_chunk, 1);
    }
}
