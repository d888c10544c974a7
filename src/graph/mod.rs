//! Graph storage and ingestion.
//!
//! # Components
//!
//! - [`NodeId`] - Strongly-typed node index
//! - [`GraphStore`] - Immutable CSR adjacency, validated at construction
//! - [`Neighbors`] - The read-only view traversal algorithms are generic over
//! - [`EdgeList`] - Parsed edge-list text (whitespace-separated node count, then pairs)
//! - [`generate`] - Deterministic synthetic graphs
//!
//! # Examples
//!
//! ```rust
//! use parbfs::graph::{generate, parse_graph, NodeId};
//!
//! let graph = parse_graph("4\n0 1\n1 2\n")?;
//! assert_eq!(graph.degree(NodeId::new(1))?, 2);
//! assert_eq!(graph.degree(NodeId::new(3))?, 0);
//!
//! let tree = generate::binary_tree(15).into_graph()?;
//! assert_eq!(tree.edge_count(), 14);
//! # Ok::<(), parbfs::Error>(())
//! ```

mod display;
pub mod generate;
mod loader;
mod node;
mod store;

pub use display::AdjacencyDisplay;
pub use loader::{load_graph, parse_graph, EdgeList};
pub use node::NodeId;
pub use store::{GraphStore, Neighbors};
