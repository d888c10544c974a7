#![no_main]

use libfuzzer_sys::fuzz_target;
use parbfs::graph::EdgeList;
use parbfs::traversal::{self, sequential_bfs};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(list) = EdgeList::parse(text) else {
        return;
    };
    // Large but allocatable tables only exhaust the fuzzer's memory limit. Counts past
    // the address space still run and must fail cleanly.
    let unallocatable = list.node_count > isize::MAX as usize / std::mem::size_of::<usize>();
    if list.node_count > 1 << 16 && !unallocatable {
        return;
    }
    let Ok(graph) = list.into_graph() else {
        return;
    };
    if graph.is_empty() {
        return;
    }

    let parallel = traversal::run(&graph, 0, 2).expect("valid root on a validated graph");
    let reference = sequential_bfs(&graph, 0).expect("valid root on a validated graph");
    assert_eq!(parallel.states(), reference.states());
    assert_eq!(parallel.level_sizes(), reference.level_sizes());
});
