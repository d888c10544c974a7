//! # parbfs Prelude
//!
//! The types needed for the common load-then-traverse workflow.
//!
//! ```rust
//! use parbfs::prelude::*;
//!
//! let graph = GraphStore::build([(0, 1)], 2)?;
//! let result = TraversalScheduler::new(&graph, TraversalConfig::single_worker())?.run(0)?;
//! assert!(result.is_visited(NodeId::new(1)));
//! # Ok::<(), parbfs::Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all parbfs operations
pub use crate::Error;

/// The result type used throughout parbfs
pub use crate::Result;

// ================================================================================================
// Graph Storage
// ================================================================================================

/// Immutable adjacency store, node ids and the traversal-facing graph trait
pub use crate::graph::{GraphStore, Neighbors, NodeId};

/// Edge-list ingestion
pub use crate::graph::{load_graph, parse_graph, EdgeList};

// ================================================================================================
// Traversal
// ================================================================================================

/// Parallel scheduler and its configuration
pub use crate::traversal::{CancellationToken, TraversalConfig, TraversalScheduler};

/// Traversal outcome
pub use crate::traversal::{TraversalStats, VisitState, VisitationResult};

/// Sequential reference traversal
pub use crate::traversal::sequential_bfs;
