use std::{path::Path, process::ExitCode};

use parbfs::{
    traversal::{
        sequential_bfs, CancellationToken, TraversalConfig, TraversalScheduler, VisitState,
        VisitationResult,
    },
    Error,
};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{file_display_name, load},
    output::{millis, print_output},
};

pub struct RunOptions {
    pub root: i64,
    pub threads: Option<usize>,
    pub chunk: usize,
    pub compare: bool,
    pub cancel: CancellationToken,
}

#[derive(Debug, Serialize)]
struct RunReport {
    file: String,
    nodes: usize,
    edges: usize,
    root: i64,
    threads: usize,
    complete: bool,
    visited: usize,
    pending: usize,
    levels: usize,
    max_frontier: usize,
    edges_scanned: usize,
    elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    sequential: Option<SequentialReport>,
}

#[derive(Debug, Serialize)]
struct SequentialReport {
    elapsed_ms: f64,
    matches: bool,
}

pub fn run(path: &Path, options: &RunOptions, opts: &GlobalOptions) -> anyhow::Result<ExitCode> {
    let graph = load(path)?;

    let mut config = match options.threads {
        Some(threads) => TraversalConfig::with_workers(threads),
        None => TraversalConfig::default(),
    };
    config = config
        .with_min_chunk(options.chunk)
        .with_cancellation(options.cancel.clone());
    let threads = config.workers;

    let scheduler = TraversalScheduler::new(&graph, config)?;
    let result = match scheduler.run(options.root) {
        Ok(result) => result,
        Err(Error::Cancelled(partial)) => *partial,
        Err(error) => return Err(error.into()),
    };

    let sequential = if options.compare && result.is_complete() {
        let reference = sequential_bfs(&graph, options.root)?;
        Some(SequentialReport {
            elapsed_ms: millis(reference.stats().elapsed),
            matches: same_outcome(&result, &reference),
        })
    } else {
        None
    };

    let stats = result.stats();
    let report = RunReport {
        file: file_display_name(path),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        root: options.root,
        threads,
        complete: result.is_complete(),
        visited: result.visited_count(),
        pending: result.state_counts()[VisitState::Enqueued as usize],
        levels: result.levels(),
        max_frontier: stats.max_frontier(),
        edges_scanned: stats.edges_scanned,
        elapsed_ms: millis(stats.elapsed),
        sequential,
    };

    print_output(&report, opts, |r| {
        println!("Graph:      {} ({} nodes, {} edges)", r.file, r.nodes, r.edges);
        println!("Root:       {}", r.root);
        println!("Visited:    {} node(s) in {} level(s)", r.visited, r.levels);
        println!("Widest:     {} node(s)", r.max_frontier);
        println!("Scanned:    {} neighbor entries", r.edges_scanned);
        println!("Parallel BFS: {:.3} ms with {} th", r.elapsed_ms, r.threads);
        if let Some(seq) = &r.sequential {
            println!("Serial BFS:   {:.3} ms", seq.elapsed_ms);
            if seq.matches {
                println!("Results match.");
            }
        }
        if !r.complete {
            println!("Cancelled with {} node(s) still pending.", r.pending);
        }
    })?;

    if !report.complete {
        return Ok(ExitCode::from(130));
    }
    if report.sequential.as_ref().is_some_and(|seq| !seq.matches) {
        anyhow::bail!("parallel and sequential traversals disagree");
    }
    Ok(ExitCode::SUCCESS)
}

/// Visited sets and per-level sizes must both agree.
fn same_outcome(parallel: &VisitationResult, sequential: &VisitationResult) -> bool {
    parallel.states() == sequential.states() && parallel.level_sizes() == sequential.level_sizes()
}
