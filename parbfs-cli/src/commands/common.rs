use std::path::Path;

use anyhow::Context;
use parbfs::graph::{load_graph, GraphStore};

/// Load and validate an edge-list file.
pub fn load(path: &Path) -> anyhow::Result<GraphStore> {
    load_graph(path).with_context(|| format!("failed to load graph: {}", path.display()))
}

/// Extract a display-friendly filename from a path.
pub fn file_display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
        .to_string()
}
