use thiserror::Error;

use crate::traversal::VisitationResult;

macro_rules! parse_error {
    // Single string version
    ($line:expr, $msg:expr) => {
        crate::Error::Parse {
            line: $line,
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($line:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::Parse {
            line: $line,
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Input Validation Errors
/// - [`Error::InvalidNode`] - An edge endpoint lies outside `[0, node_count)`
/// - [`Error::InvalidRoot`] - The traversal root lies outside `[0, node_count)`
/// - [`Error::InvalidWorkerCount`] - A traversal was configured with zero workers
/// - [`Error::GraphTooLarge`] - The node count exceeds what can be allocated
/// - [`Error::Parse`] - An edge-list file could not be parsed
///
/// ## Traversal Errors
/// - [`Error::OutOfRange`] - A neighbor lookup referenced a node the graph does not contain
/// - [`Error::AlreadyRunning`] - A scheduler was asked to run a second time
/// - [`Error::Cancelled`] - The caller cancelled the traversal; carries the partial result
///
/// ## External Errors
/// - [`Error::FileError`] - Filesystem I/O errors
/// - [`Error::ThreadPool`] - The worker pool could not be created
///
/// # Examples
///
/// ```rust
/// use parbfs::{graph::GraphStore, traversal, Error};
///
/// let graph = GraphStore::build([(0, 1)], 2)?;
/// match traversal::run(&graph, -1, 2) {
///     Err(Error::InvalidRoot { root, .. }) => assert_eq!(root, -1),
///     other => panic!("unexpected: {other:?}"),
/// }
/// # Ok::<(), parbfs::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An edge references a node identifier outside `[0, node_count)`.
    ///
    /// Raised by [`GraphStore::build`](crate::graph::GraphStore::build) before any storage
    /// is allocated, so a graph that fails validation is never traversed.
    #[error("Edge endpoint {node} is outside the valid node range [0, {node_count})")]
    InvalidNode {
        /// The offending identifier as it appeared in the input
        node: i64,
        /// The declared node count of the graph
        node_count: usize,
    },

    /// The traversal root is outside `[0, node_count)`.
    #[error("Root {root} is outside the valid node range [0, {node_count})")]
    InvalidRoot {
        /// The requested root as supplied by the caller
        root: i64,
        /// The node count of the graph being traversed
        node_count: usize,
    },

    /// The declared node count is more than this process can allocate.
    ///
    /// Raised while building a [`GraphStore`](crate::graph::GraphStore) or the per-traversal
    /// node tables, before any partial structure is handed out.
    #[error("Graph with {node_count} nodes is too large to allocate")]
    GraphTooLarge {
        /// The requested node count
        node_count: usize,
    },

    /// A neighbor lookup was made for a node the graph does not contain.
    ///
    /// Node identifiers handed out by a validated [`GraphStore`](crate::graph::GraphStore)
    /// are always in range, so this error indicates a misuse bug such as mixing
    /// identifiers from two different graphs.
    #[error("Node {node} is out of range for a graph with {node_count} nodes")]
    OutOfRange {
        /// The requested node index
        node: usize,
        /// The node count of the graph that was queried
        node_count: usize,
    },

    /// The scheduler has already been started.
    ///
    /// A [`TraversalScheduler`](crate::traversal::TraversalScheduler) completes exactly one
    /// traversal; both a concurrent second call and a call after termination are rejected.
    #[error("Traversal already started on this scheduler")]
    AlreadyRunning,

    /// The traversal was cancelled through its
    /// [`CancellationToken`](crate::traversal::CancellationToken).
    ///
    /// Cancellation is an expected outcome rather than a fault: the boxed
    /// [`VisitationResult`] holds every mark made up to the last completed level. Use
    /// [`Error::into_partial`] to recover it.
    #[error("Traversal cancelled after {} level(s)", .0.levels())]
    Cancelled(Box<VisitationResult>),

    /// A traversal was configured with zero workers.
    #[error("Worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    /// An edge-list file is malformed.
    ///
    /// # Fields
    ///
    /// * `line` - 1-based line of the input where the problem was found
    /// * `message` - Description of what was malformed
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// File I/O error.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// The worker thread pool could not be built.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    /// Returns the partial result carried by [`Error::Cancelled`], if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parbfs::{graph::GraphStore, traversal::{CancellationToken, TraversalConfig, TraversalScheduler}};
    ///
    /// let graph = GraphStore::build([(0, 1)], 2)?;
    /// let token = CancellationToken::new();
    /// token.cancel();
    ///
    /// let config = TraversalConfig::with_workers(2).with_cancellation(token);
    /// let err = TraversalScheduler::new(&graph, config)?.run(0).unwrap_err();
    /// let partial = err.into_partial().expect("cancelled runs carry a partial result");
    /// assert_eq!(partial.levels(), 0);
    /// # Ok::<(), parbfs::Error>(())
    /// ```
    #[must_use]
    pub fn into_partial(self) -> Option<VisitationResult> {
        match self {
            Error::Cancelled(partial) => Some(*partial),
            _ => None,
        }
    }

    /// Returns `true` if this error reports a caller-requested cancellation.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled(_))
    }
}
