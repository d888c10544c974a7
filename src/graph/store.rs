//! Immutable adjacency storage.
//!
//! [`GraphStore`] holds an undirected graph in compressed sparse row form: one offsets
//! array of length `node_count + 1` and one targets array holding every neighbor list
//! back to back. Each input edge `(a, b)` contributes `b` to `a`'s list and `a` to `b`'s
//! list, in input order, so duplicate edges and self-loops are preserved verbatim.
//!
//! The store is validated completely before it is returned and never changes afterwards,
//! which is what lets every traversal worker read it without synchronization.

use crate::{graph::NodeId, Error, Result};

/// Read access to the neighbor lists of a graph.
///
/// Traversal algorithms are generic over this trait. Implementations used with the
/// parallel scheduler must also be [`Sync`], since every worker reads the same instance.
pub trait Neighbors {
    /// Returns the number of nodes, i.e. the exclusive upper bound of valid node indices.
    fn node_count(&self) -> usize;

    /// Returns the neighbors of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a node of this graph.
    fn neighbors(&self, node: NodeId) -> Result<&[NodeId]>;
}

/// An immutable undirected graph in compressed sparse row layout.
///
/// # Construction
///
/// Use [`GraphStore::build`] with an edge list and a node count. Every endpoint is checked
/// against `[0, node_count)` and the first violation aborts construction with
/// [`Error::InvalidNode`].
///
/// # Examples
///
/// ```rust
/// use parbfs::graph::{GraphStore, NodeId};
///
/// let graph = GraphStore::build([(0, 1), (0, 2), (1, 2)], 3)?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.neighbors(NodeId::new(0))?, &[NodeId::new(1), NodeId::new(2)]);
/// # Ok::<(), parbfs::Error>(())
/// ```
///
/// # Thread Safety
///
/// `GraphStore` is [`Send`] and [`Sync`]; it has no interior mutability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStore {
    /// `offsets[v]..offsets[v + 1]` is the range of `v`'s neighbors in `targets`
    offsets: Vec<usize>,
    /// All neighbor lists, concatenated in node order
    targets: Vec<NodeId>,
    /// Number of input edges, duplicates and self-loops included
    edge_count: usize,
}

impl GraphStore {
    /// Builds a graph from an edge list.
    ///
    /// # Arguments
    ///
    /// * `edges` - Undirected edges as pairs of raw node identifiers
    /// * `node_count` - Number of nodes; valid identifiers are `0..node_count`
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidNode`] for the first endpoint outside `[0, node_count)`
    /// - [`Error::GraphTooLarge`] if the adjacency arrays for `node_count` nodes cannot be
    ///   allocated
    pub fn build<I>(edges: I, node_count: usize) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let check = |raw: i64| {
            NodeId::checked(raw, node_count).ok_or(Error::InvalidNode {
                node: raw,
                node_count,
            })
        };

        let mut validated = Vec::new();
        for (a, b) in edges {
            validated.push((check(a)?, check(b)?));
        }

        Self::from_validated(&validated, node_count)
    }

    /// Assembles the CSR arrays from edges whose endpoints are known to be in range.
    ///
    /// Both arrays are reserved up front, so a node count the process cannot hold is
    /// reported as [`Error::GraphTooLarge`] instead of aborting.
    fn from_validated(edges: &[(NodeId, NodeId)], node_count: usize) -> Result<Self> {
        let too_large = || Error::GraphTooLarge { node_count };

        let offset_len = node_count.checked_add(1).ok_or_else(too_large)?;
        let target_len = edges.len().checked_mul(2).ok_or_else(too_large)?;

        let mut offsets = Vec::new();
        offsets
            .try_reserve_exact(offset_len)
            .map_err(|_| too_large())?;
        offsets.resize(offset_len, 0usize);

        let mut targets = Vec::new();
        targets
            .try_reserve_exact(target_len)
            .map_err(|_| too_large())?;

        for &(a, b) in edges {
            offsets[a.index() + 1] += 1;
            offsets[b.index() + 1] += 1;
        }
        for i in 0..node_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = Vec::new();
        cursor
            .try_reserve_exact(node_count)
            .map_err(|_| too_large())?;
        cursor.extend_from_slice(&offsets[..node_count]);

        targets.resize(target_len, NodeId::new(0));
        for &(a, b) in edges {
            targets[cursor[a.index()]] = b;
            cursor[a.index()] += 1;
            targets[cursor[b.index()]] = a;
            cursor[b.index()] += 1;
        }

        Ok(GraphStore {
            offsets,
            targets,
            edge_count: edges.len(),
        })
    }

    /// Creates a graph with `node_count` nodes and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphTooLarge`] if the node table cannot be allocated.
    pub fn isolated(node_count: usize) -> Result<Self> {
        Self::from_validated(&[], node_count)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the number of input edges, counting duplicates and self-loops.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Returns `true` if `node` is a node of this graph.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Returns the neighbors of `node` in edge-insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a node of this graph.
    pub fn neighbors(&self, node: NodeId) -> Result<&[NodeId]> {
        if !self.contains(node) {
            return Err(Error::OutOfRange {
                node: node.index(),
                node_count: self.node_count(),
            });
        }

        let start = self.offsets[node.index()];
        let end = self.offsets[node.index() + 1];
        Ok(&self.targets[start..end])
    }

    /// Returns the number of neighbor entries of `node` (a self-loop counts twice).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a node of this graph.
    pub fn degree(&self, node: NodeId) -> Result<usize> {
        self.neighbors(node).map(<[NodeId]>::len)
    }

    /// Returns an iterator over every node identifier.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count()).map(NodeId::new)
    }

    /// Reconstructs the input edges, each reported once with the smaller endpoint first.
    ///
    /// Edges are grouped by their smaller endpoint, so the result is not necessarily in
    /// input order.
    #[must_use]
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for node in self.nodes() {
            let start = self.offsets[node.index()];
            let end = self.offsets[node.index() + 1];

            // Each self-loop contributes two entries to its owner's list.
            let mut loops = 0usize;
            for &neighbor in &self.targets[start..end] {
                if node < neighbor {
                    edges.push((node, neighbor));
                } else if node == neighbor {
                    if loops % 2 == 0 {
                        edges.push((node, node));
                    }
                    loops += 1;
                }
            }
        }
        edges
    }
}

impl Neighbors for GraphStore {
    fn node_count(&self) -> usize {
        GraphStore::node_count(self)
    }

    fn neighbors(&self, node: NodeId) -> Result<&[NodeId]> {
        GraphStore::neighbors(self, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::ids;

    #[test]
    fn test_build_undirected() {
        let graph = GraphStore::build([(0, 1), (1, 2)], 3).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(NodeId::new(0)).unwrap(), ids(&[1]).as_slice());
        assert_eq!(graph.neighbors(NodeId::new(1)).unwrap(), ids(&[0, 2]).as_slice());
        assert_eq!(graph.neighbors(NodeId::new(2)).unwrap(), ids(&[1]).as_slice());
    }

    #[test]
    fn test_build_keeps_duplicates_and_self_loops() {
        let graph = GraphStore::build([(0, 1), (0, 1), (2, 2)], 3).unwrap();

        assert_eq!(graph.neighbors(NodeId::new(0)).unwrap(), ids(&[1, 1]).as_slice());
        assert_eq!(graph.neighbors(NodeId::new(1)).unwrap(), ids(&[0, 0]).as_slice());
        assert_eq!(graph.neighbors(NodeId::new(2)).unwrap(), ids(&[2, 2]).as_slice());
        assert_eq!(graph.degree(NodeId::new(2)).unwrap(), 2);
    }

    #[test]
    fn test_build_rejects_endpoint_equal_to_count() {
        let err = GraphStore::build([(0, 1), (1, 5)], 5).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidNode {
                node: 5,
                node_count: 5
            }
        ));
    }

    #[test]
    fn test_build_rejects_negative_endpoint() {
        let err = GraphStore::build([(-3, 1)], 5).unwrap_err();
        assert!(matches!(err, Error::InvalidNode { node: -3, .. }));
    }

    #[test]
    fn test_build_empty() {
        let graph = GraphStore::build(std::iter::empty(), 0).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(GraphStore::build([(0, 0)], 0).is_err());
    }

    #[test]
    fn test_build_rejects_unallocatable_node_count() {
        assert!(matches!(
            GraphStore::build(std::iter::empty(), usize::MAX),
            Err(Error::GraphTooLarge {
                node_count: usize::MAX
            })
        ));
        assert!(matches!(
            GraphStore::build([(0, 1)], usize::MAX / 2),
            Err(Error::GraphTooLarge { .. })
        ));
        assert!(matches!(
            GraphStore::isolated(usize::MAX),
            Err(Error::GraphTooLarge { .. })
        ));
    }

    #[test]
    fn test_neighbors_out_of_range() {
        let graph = GraphStore::isolated(2).unwrap();
        assert!(graph.neighbors(NodeId::new(1)).unwrap().is_empty());

        let err = graph.neighbors(NodeId::new(2)).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                node: 2,
                node_count: 2
            }
        ));
    }

    #[test]
    fn test_edges_roundtrip_counts() {
        let input = [(0, 1), (2, 1), (0, 1), (3, 3), (3, 3)];
        let graph = GraphStore::build(input, 4).unwrap();

        let mut edges = graph.edges();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (NodeId::new(0), NodeId::new(1)),
                (NodeId::new(0), NodeId::new(1)),
                (NodeId::new(1), NodeId::new(2)),
                (NodeId::new(3), NodeId::new(3)),
                (NodeId::new(3), NodeId::new(3)),
            ]
        );
        assert_eq!(edges.len(), graph.edge_count());
    }

    #[test]
    fn test_neighbors_trait_object() {
        let graph = GraphStore::build([(0, 1)], 2).unwrap();
        let view: &dyn Neighbors = &graph;

        assert_eq!(view.node_count(), 2);
        assert_eq!(view.neighbors(NodeId::new(1)).unwrap(), ids(&[0]).as_slice());
    }
}
