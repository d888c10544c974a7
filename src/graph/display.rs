//! Human-readable and Graphviz renderings of a [`GraphStore`].

use std::fmt::{self, Write};

use crate::{
    graph::GraphStore,
    traversal::{VisitState, VisitationResult},
    utils::escape_dot,
};

/// [`fmt::Display`] adaptor listing a graph's adjacency, returned by [`GraphStore::display`].
///
/// One line per node that has at least one neighbor, formatted `v->n1 n2 ... `.
pub struct AdjacencyDisplay<'a> {
    graph: &'a GraphStore,
}

impl fmt::Display for AdjacencyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.graph.nodes() {
            let neighbors = self.graph.neighbors(node).map_err(|_| fmt::Error)?;
            if neighbors.is_empty() {
                continue;
            }

            write!(f, "{node}->")?;
            for neighbor in neighbors {
                write!(f, "{neighbor} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl GraphStore {
    /// Returns a displayable adjacency listing of this graph.
    ///
    /// Nodes without neighbors are omitted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parbfs::graph::GraphStore;
    ///
    /// let graph = GraphStore::build([(0, 1), (0, 2)], 4)?;
    /// assert_eq!(graph.display().to_string(), "0->1 2 \n1->0 \n2->0 \n");
    /// # Ok::<(), parbfs::Error>(())
    /// ```
    #[must_use]
    pub fn display(&self) -> AdjacencyDisplay<'_> {
        AdjacencyDisplay { graph: self }
    }

    /// Renders the graph in DOT format for Graphviz.
    ///
    /// Each input edge is emitted once. When `result` is supplied, visited nodes are filled
    /// green and nodes still waiting in a frontier (partial results) are filled yellow.
    ///
    /// # Arguments
    ///
    /// * `title` - Optional title for the graph
    /// * `result` - Optional traversal result used to color nodes
    #[must_use]
    pub fn to_dot(&self, title: Option<&str>, result: Option<&VisitationResult>) -> String {
        let mut dot = String::new();

        dot.push_str("graph G {\n");
        if let Some(name) = title {
            let _ = writeln!(dot, "    label=\"{}\";", escape_dot(name));
            dot.push_str("    labelloc=t;\n");
        }
        dot.push_str("    node [shape=circle, fontname=\"Courier\", fontsize=10];\n\n");

        for node in self.nodes() {
            let style = match result.map(|r| r.state(node)) {
                Some(VisitState::Visited) => " [style=filled, fillcolor=lightgreen]",
                Some(VisitState::Enqueued) => " [style=filled, fillcolor=lightyellow]",
                _ => "",
            };
            let _ = writeln!(dot, "    {node}{style};");
        }

        dot.push('\n');

        for (a, b) in self.edges() {
            let _ = writeln!(dot, "    {a} -- {b};");
        }

        dot.push_str("}\n");
        dot
    }
}
