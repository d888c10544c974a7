//! Integration tests for loading edge-list files from disk and traversing them.

use std::{fs, io::Write};

use parbfs::{
    graph::{generate, load_graph, EdgeList},
    prelude::*,
    traversal,
};
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_load_and_traverse_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "# diamond with a detached self-loop")?;
    writeln!(file, "5")?;
    writeln!(file, "0 1  0 2   # two edges on one line")?;
    writeln!(file, "1 3")?;
    writeln!(file, "2 3")?;
    writeln!(file, "4 4")?;

    let graph = load_graph(file.path())?;
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 5);

    let result = traversal::run(&graph, 0, 2)?;
    assert_eq!(
        result.visited_nodes(),
        vec![NodeId::new(0), NodeId::new(1), NodeId::new(2), NodeId::new(3)]
    );
    assert!(!result.is_visited(NodeId::new(4)));
    Ok(())
}

#[test]
fn test_generated_file_reloads() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("tree.txt");

    generate::binary_tree(31).write_to(fs::File::create(&path)?)?;
    let list = EdgeList::from_path(&path)?;
    assert_eq!(list, generate::binary_tree(31));

    let result = traversal::run(&list.into_graph()?, 0, 4)?;
    assert_eq!(result.level_sizes(), &[1, 2, 4, 8, 16]);
    Ok(())
}

#[test]
fn test_out_of_range_endpoint_in_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "3\n0 1\n1 3\n")?;

    assert!(matches!(
        load_graph(file.path()),
        Err(Error::InvalidNode { node: 3, node_count: 3 })
    ));
    Ok(())
}

#[test]
fn test_parse_error_reports_line() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "3\n0 1\n1 x\n")?;

    let error = load_graph(file.path()).unwrap_err();
    assert!(matches!(error, Error::Parse { line: 3, .. }));
    assert!(error.to_string().starts_with("Parse error on line 3:"));
    Ok(())
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        load_graph(&dir.path().join("absent.txt")),
        Err(Error::FileError(_))
    ));
}
