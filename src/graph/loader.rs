//! Edge-list text format.
//!
//! The format is a stream of whitespace-separated integers. The first integer is the node
//! count; every following pair `a b` is one undirected edge. Line breaks carry no meaning
//! beyond error reporting, and everything after a `#` on a line is a comment.
//!
//! ```text
//! # five nodes, a diamond plus a self-loop
//! 5
//! 0 1
//! 0 2
//! 1 3
//! 2 3
//! 4 4
//! ```
//!
//! Parsing only checks the syntax; endpoint ranges are validated by
//! [`GraphStore::build`] when the list is turned into a graph.

use std::{io::Write, path::Path};

use crate::{graph::GraphStore, Result};

/// A parsed, not yet validated, edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    /// Declared number of nodes
    pub node_count: usize,
    /// Raw edges in input order
    pub edges: Vec<(i64, i64)>,
}

impl EdgeList {
    /// Creates an edge list from its parts.
    #[must_use]
    pub fn new(node_count: usize, edges: Vec<(i64, i64)>) -> Self {
        EdgeList { node_count, edges }
    }

    /// Parses the text format described in the module documentation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`](crate::Error::Parse) with the offending line for a missing
    /// or negative node count, a token that is not an integer, or a trailing unpaired
    /// endpoint.
    pub fn parse(input: &str) -> Result<Self> {
        let mut node_count: Option<usize> = None;
        let mut edges = Vec::new();
        let mut pending: Option<i64> = None;
        let mut last_line = 1;

        for (index, line) in input.lines().enumerate() {
            let line_no = index + 1;
            let content = line.split_once('#').map_or(line, |(before, _)| before);

            for token in content.split_whitespace() {
                last_line = line_no;
                let value: i64 = token
                    .parse()
                    .map_err(|_| parse_error!(line_no, "expected an integer, found `{}`", token))?;

                match (node_count, pending.take()) {
                    (None, _) => {
                        let count = usize::try_from(value).map_err(|_| {
                            parse_error!(line_no, "node count must not be negative, found {}", value)
                        })?;
                        node_count = Some(count);
                    }
                    (Some(_), None) => pending = Some(value),
                    (Some(_), Some(a)) => edges.push((a, value)),
                }
            }
        }

        let Some(node_count) = node_count else {
            return Err(parse_error!(last_line, "missing node count"));
        };
        if let Some(dangling) = pending {
            return Err(parse_error!(
                last_line,
                "edge starting at {} has no second endpoint",
                dangling
            ));
        }

        log::debug!(
            "parsed edge list: {} nodes, {} edges",
            node_count,
            edges.len()
        );
        Ok(EdgeList { node_count, edges })
    }

    /// Reads and parses an edge-list file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileError`](crate::Error::FileError) if the file cannot be read, or
    /// any error of [`EdgeList::parse`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::parse(&input)
    }

    /// Validates the list and builds the graph.
    ///
    /// # Errors
    ///
    /// Any error of [`GraphStore::build`]: an out-of-range endpoint, or a declared node
    /// count too large to allocate.
    pub fn into_graph(self) -> Result<GraphStore> {
        GraphStore::build(self.edges, self.node_count)
    }

    /// Writes the list in the text format, one edge per line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileError`](crate::Error::FileError) if writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", self.node_count)?;
        for (a, b) in &self.edges {
            writeln!(writer, "{a} {b}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl From<&GraphStore> for EdgeList {
    fn from(graph: &GraphStore) -> Self {
        let edges = graph
            .edges()
            .into_iter()
            .map(|(a, b)| (a.index() as i64, b.index() as i64))
            .collect();
        EdgeList::new(graph.node_count(), edges)
    }
}

/// Parses edge-list text and builds the graph in one step.
///
/// # Errors
///
/// Returns any error of [`EdgeList::parse`] or [`EdgeList::into_graph`].
///
/// # Examples
///
/// ```rust
/// use parbfs::graph::parse_graph;
///
/// let graph = parse_graph("3\n0 1\n1 2\n")?;
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), parbfs::Error>(())
/// ```
pub fn parse_graph(input: &str) -> Result<GraphStore> {
    EdgeList::parse(input)?.into_graph()
}

/// Loads an edge-list file and builds the graph in one step.
///
/// # Errors
///
/// Returns any error of [`EdgeList::from_path`] or [`EdgeList::into_graph`].
pub fn load_graph(path: &Path) -> Result<GraphStore> {
    EdgeList::from_path(path)?.into_graph()
}
