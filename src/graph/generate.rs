//! Deterministic synthetic graphs.
//!
//! Generators return an [`EdgeList`] so the result can either be written to disk in the
//! edge-list format or turned into a [`GraphStore`](crate::graph::GraphStore) with
//! [`EdgeList::into_graph`]. All generated endpoints are in range by construction.

use crate::graph::EdgeList;

/// A path `0 - 1 - ... - (n-1)`.
#[must_use]
pub fn path(n: usize) -> EdgeList {
    let edges = (1..n).map(|i| ((i - 1) as i64, i as i64)).collect();
    EdgeList::new(n, edges)
}

/// The complete graph on `n` nodes, one edge per unordered pair.
///
/// # Panics
///
/// Panics if the edge list cannot be allocated.
#[must_use]
pub fn complete(n: usize) -> EdgeList {
    let mut edges = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)) / 2);
    for a in 0..n {
        for b in (a + 1)..n {
            edges.push((a as i64, b as i64));
        }
    }
    EdgeList::new(n, edges)
}

/// A complete binary tree in heap layout: node `i` has children `2i + 1` and `2i + 2`.
#[must_use]
pub fn binary_tree(n: usize) -> EdgeList {
    let edges = (1..n).map(|i| (((i - 1) / 2) as i64, i as i64)).collect();
    EdgeList::new(n, edges)
}

/// A `width x height` grid; node `(x, y)` has identifier `y * width + x`.
///
/// # Panics
///
/// Panics if `width * height` overflows `usize`.
#[must_use]
pub fn grid(width: usize, height: usize) -> EdgeList {
    let Some(node_count) = width.checked_mul(height) else {
        panic!("a {width}x{height} grid has more nodes than usize can count");
    };
    let id = |x: usize, y: usize| (y * width + x) as i64;

    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push((id(x, y), id(x + 1, y)));
            }
            if y + 1 < height {
                edges.push((id(x, y), id(x, y + 1)));
            }
        }
    }
    EdgeList::new(node_count, edges)
}

/// Places `second` next to `first`, renumbering its nodes after `first`'s.
#[must_use]
pub fn disjoint_union(first: EdgeList, second: &EdgeList) -> EdgeList {
    let shift = first.node_count as i64;
    let mut edges = first.edges;
    edges.extend(second.edges.iter().map(|&(a, b)| (a + shift, b + shift)));
    EdgeList::new(first.node_count + second.node_count, edges)
}
