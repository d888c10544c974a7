use std::{path::Path, process::ExitCode};

use parbfs::graph::GraphStore;
use serde::Serialize;

use crate::{
    app::{GlobalOptions, ShowFormat},
    commands::common::{file_display_name, load},
    output::print_output,
};

#[derive(Debug, Serialize)]
struct AdjacencyOutput {
    nodes: usize,
    edges: usize,
    adjacency: Vec<Vec<usize>>,
}

#[derive(Debug, Serialize)]
struct DotOutput {
    dot: String,
}

impl DotOutput {
    fn new(graph: &GraphStore, path: &Path) -> Self {
        DotOutput {
            dot: graph.to_dot(Some(&file_display_name(path)), None),
        }
    }
}

pub fn run(path: &Path, format: ShowFormat, opts: &GlobalOptions) -> anyhow::Result<ExitCode> {
    let graph = load(path)?;

    if format == ShowFormat::Dot {
        let data = DotOutput::new(&graph, path);
        print_output(&data, opts, |d| print!("{}", d.dot))?;
        return Ok(ExitCode::SUCCESS);
    }

    let adjacency = graph
        .nodes()
        .map(|node| {
            graph
                .neighbors(node)
                .map(|list| list.iter().map(|n| n.index()).collect())
        })
        .collect::<parbfs::Result<Vec<Vec<usize>>>>()?;

    let data = AdjacencyOutput {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        adjacency,
    };

    print_output(&data, opts, |_| {
        print!("{}", graph.display());
    })?;
    Ok(ExitCode::SUCCESS)
}
