// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # parbfs
//!
//! Level-synchronous parallel breadth-first search over large undirected graphs.
//!
//! `parbfs` expands each BFS level's frontier on a fixed pool of worker threads. Workers
//! never share a lock: a node enters the next frontier only through a single atomic
//! compare-and-swap on its visitation cell, and the frontier itself is a lock-free
//! append-only buffer that is drained once per level.
//!
//! ## Quick Start
//!
//! ```rust
//! use parbfs::prelude::*;
//!
//! // 0 - 1 - 3, 0 - 2 - 3, plus an isolated node 4 with a self-loop
//! let graph = GraphStore::build([(0, 1), (0, 2), (1, 3), (2, 3), (4, 4)], 5)?;
//!
//! let result = parbfs::traversal::run(&graph, 0, 4)?;
//! assert_eq!(result.visited_nodes(), vec![NodeId::new(0), NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
//! assert!(!result.is_visited(NodeId::new(4)));
//! # Ok::<(), parbfs::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The immutable adjacency store, node identifiers, edge-list loading,
//!   display helpers and synthetic graph generators
//! - [`traversal`] - The parallel scheduler, the shared visitation state, the frontier
//!   queue and the sequential reference traversal
//! - [`Error`] and [`Result`] - Error handling shared by every fallible operation
//!
//! ### Execution model
//!
//! Each level runs in three steps:
//!
//! 1. The current frontier is drained into an immutable snapshot
//! 2. The snapshot is split across the worker pool; every worker claims unvisited
//!    neighbors and appends the ones it won to the next frontier
//! 3. The pool joins, which acts as the level barrier, and the next frontier becomes current
//!
//! The traversal stops when a level discovers nothing new. See
//! [`traversal::TraversalScheduler`] for the details.
//!
//! ## Error Handling
//!
//! ```rust
//! use parbfs::{graph::GraphStore, Error};
//!
//! match GraphStore::build([(0, 3)], 3) {
//!     Err(Error::InvalidNode { node, node_count }) => {
//!         assert_eq!((node, node_count), (3, 3));
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: one `debug` record per level and an `info`
//! record when a traversal finishes or is cancelled. Install any logger to see them.

#[macro_use]
pub(crate) mod error;

/// Shared fixtures used by the unit tests.
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// ```rust
/// use parbfs::prelude::*;
///
/// let graph = GraphStore::build([(0, 1)], 2)?;
/// let result = TraversalScheduler::new(&graph, TraversalConfig::with_workers(2))?.run(0)?;
/// assert_eq!(result.visited_count(), 2);
/// # Ok::<(), parbfs::Error>(())
/// ```
pub mod prelude;

/// Immutable adjacency storage and graph ingestion.
///
/// The [`graph::GraphStore`] is built once from an edge list, validated eagerly, and then
/// shared read-only by every worker. The module also hosts the text loader for edge-list
/// files, the adjacency display used by the CLI, and deterministic graph generators.
pub mod graph;

/// Parallel and sequential breadth-first traversal.
///
/// # Key Types
///
/// - [`traversal::TraversalScheduler`] - Drives one level-synchronous parallel traversal
/// - [`traversal::VisitationState`] - Per-node three-state atomic marks
/// - [`traversal::Frontier`] - Multi-producer frontier queue
/// - [`traversal::VisitationResult`] - Final (or partial) per-node states and statistics
///
/// # Main Functions
///
/// - [`traversal::run`] - One-call parallel traversal
/// - [`traversal::sequential_bfs`] - Single-threaded reference traversal
pub mod traversal;

pub(crate) mod utils;

/// `parbfs` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `parbfs` Error type
///
/// The main error type for all operations in this crate. See [`Error`] for the variants.
pub use error::Error;

pub use utils::{BitSet, BitSetIter};
