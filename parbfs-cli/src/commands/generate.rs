use std::{fs::File, io::BufWriter, path::Path, process::ExitCode};

use anyhow::Context;
use parbfs::graph::{generate, EdgeList};
use serde::Serialize;

use crate::{
    app::{GlobalOptions, GraphKind},
    output::print_output,
};

#[derive(Debug, Serialize)]
struct GenerateSummary {
    kind: String,
    nodes: usize,
    edges: usize,
    output: String,
}

/// Node and edge counts of the requested graph, or `None` if either overflows.
fn planned_size(kind: GraphKind, size: usize) -> Option<(usize, usize)> {
    match kind {
        GraphKind::Path | GraphKind::Tree => Some((size, size.saturating_sub(1))),
        GraphKind::Complete => {
            let pairs = size.checked_mul(size.saturating_sub(1))? / 2;
            Some((size, pairs))
        }
        GraphKind::Grid => {
            let nodes = size.checked_mul(size)?;
            // Each of the `size` rows and columns has `size - 1` edges
            let edges = size.saturating_sub(1).checked_mul(size)?.checked_mul(2)?;
            Some((nodes, edges))
        }
    }
}

fn build(kind: GraphKind, size: usize) -> anyhow::Result<EdgeList> {
    let edge_bytes = std::mem::size_of::<(i64, i64)>();
    let fits = planned_size(kind, size).is_some_and(|(nodes, edges)| {
        i64::try_from(nodes).is_ok()
            && edges
                .checked_mul(edge_bytes)
                .is_some_and(|bytes| isize::try_from(bytes).is_ok())
    });
    if !fits {
        anyhow::bail!("a {kind:?} graph of size {size} is too large to generate");
    }

    Ok(match kind {
        GraphKind::Path => generate::path(size),
        GraphKind::Complete => generate::complete(size),
        GraphKind::Tree => generate::binary_tree(size),
        GraphKind::Grid => generate::grid(size, size),
    })
}

pub fn run(
    kind: GraphKind,
    size: usize,
    output: Option<&Path>,
    opts: &GlobalOptions,
) -> anyhow::Result<ExitCode> {
    let edges = build(kind, size)?;

    let Some(path) = output else {
        edges.write_to(std::io::stdout().lock())?;
        return Ok(ExitCode::SUCCESS);
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create output file: {}", path.display()))?;
    edges.write_to(BufWriter::new(file))?;

    let summary = GenerateSummary {
        kind: format!("{kind:?}").to_lowercase(),
        nodes: edges.node_count,
        edges: edges.edges.len(),
        output: path.display().to_string(),
    };
    print_output(&summary, opts, |s| {
        println!(
            "Wrote {} graph with {} node(s) and {} edge(s) to {}",
            s.kind, s.nodes, s.edges, s.output
        );
    })?;
    Ok(ExitCode::SUCCESS)
}
