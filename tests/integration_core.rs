// tests/integration_core.rs
//! End-to-end: files on disk through to the written report.

use seqrank_core::cli::{handlers, Cli};
use seqrank_core::exit::SeqRankExit;
use seqrank_core::graph::{GraphEngine, PageRankConfig};
use seqrank_core::{input, report};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn cli(input: PathBuf, output: Option<PathBuf>) -> Cli {
    Cli {
        input,
        output,
        jump: None,
        tolerance: None,
        max_iterations: None,
        prefix: None,
        config: None,
        verbose: false,
    }
}

#[test]
fn test_three_cycle_report() {
    let analysis = GraphEngine::analyze_str("A\tB\nB\tC\nC\tA\n", PageRankConfig::default()).unwrap();
    let text = report::render(&analysis).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Number of components: 1");
    assert_eq!(lines[1], "Number of edges: 3");
    assert_eq!(lines[2], "Number of nodes: 3");
    assert_eq!(lines[3], "Random jump factor: 0.15");
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "PageRank of nodes, in descending order:");

    let nodes: Vec<&str> = lines[6..]
        .iter()
        .map(|l| l.split('\t').nth(1).unwrap())
        .collect();
    assert_eq!(nodes, ["A", "B", "C"]);
    for line in &lines[6..] {
        let score: f64 = line.split('\t').next().unwrap().parse().unwrap();
        assert!((score - 1.0 / 3.0).abs() < 1e-6);
    }
}

#[test]
fn test_isolated_node_report() {
    let analysis = GraphEngine::analyze_str("D\n", PageRankConfig::default()).unwrap();
    let text = report::render(&analysis).unwrap();
    assert!(text.starts_with("Number of components: 1\nNumber of edges: 0\nNumber of nodes: 1\n"));
    assert!(text.ends_with("1\tD\n"));
}

#[test]
fn test_empty_input_report() {
    let analysis = GraphEngine::analyze_str("", PageRankConfig::default()).unwrap();
    let text = report::render(&analysis).unwrap();
    assert!(text.contains("Number of nodes: 0"));
    assert!(text.ends_with("PageRank of nodes, in descending order:\n"));
}

#[test]
fn test_report_is_byte_identical_across_runs() {
    let src = "1\t[2, 3]\n2\t[3, 4]\n3\t[1]\n4\n5\t[5]\n";
    let a = report::render(&GraphEngine::analyze_str(src, PageRankConfig::default()).unwrap()).unwrap();
    let b = report::render(&GraphEngine::analyze_str(src, PageRankConfig::default()).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_directory_reads_only_part_files_in_name_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("part-00001"), "C\tA\n").unwrap();
    fs::write(dir.path().join("part-00000"), "A\tB\nB\tC\n").unwrap();
    fs::write(dir.path().join("_SUCCESS"), "").unwrap();
    fs::write(dir.path().join("notes.txt"), "X\tY\n").unwrap();
    fs::create_dir(dir.path().join("part-dir")).unwrap();

    let files = input::input_files(dir.path(), "part").unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["part-00000", "part-00001"]);

    let (graph, _) = input::load_graph(dir.path(), "part").unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.node_id("X"), None);
    let labels: Vec<_> = graph.labels().collect();
    assert_eq!(labels, ["A", "B", "C"]);
}

#[cfg(unix)]
#[test]
fn test_symlinked_part_file_is_read() {
    let dir = TempDir::new().unwrap();
    let real = dir.path().join("real.txt");
    fs::write(&real, "A\tB\n").unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    std::os::unix::fs::symlink(&real, out.join("part-00000")).unwrap();

    let files = input::input_files(&out, "part").unwrap();
    assert_eq!(files, [out.join("part-00000")]);

    let (graph, _) = input::load_graph(&out, "part").unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_directory_without_parts_is_empty_graph() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.tsv"), "A\tB\n").unwrap();
    let (graph, _) = input::load_graph(dir.path(), "part").unwrap();
    assert!(graph.is_empty());
}

#[test]
fn test_missing_input_is_error() {
    let dir = TempDir::new().unwrap();
    let err = input::load_graph(&dir.path().join("nope"), "part").unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn test_handle_run_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let graph_file = dir.path().join("graph.txt");
    let out_file = dir.path().join("report.txt");
    fs::write(&graph_file, "A\tB\nB\tC\nC\tA\n").unwrap();

    let code = handlers::handle_run(cli(graph_file, Some(out_file.clone()))).unwrap();
    assert_eq!(code, SeqRankExit::Success);

    let written = fs::read_to_string(out_file).unwrap();
    assert!(written.starts_with("Number of components: 1\n"));
    assert_eq!(written.lines().count(), 9);
}

#[test]
fn test_handle_run_honours_config_file_and_flags() {
    let dir = TempDir::new().unwrap();
    let input_dir = dir.path().join("out");
    fs::create_dir(&input_dir).unwrap();
    fs::write(input_dir.join("shard-0"), "A\tB\n").unwrap();
    let config = dir.path().join("seqrank.toml");
    fs::write(&config, "[pagerank]\njump = 0.3\n\n[input]\nprefix = \"shard\"\n").unwrap();
    let out_file = dir.path().join("report.txt");

    let mut args = cli(input_dir, Some(out_file.clone()));
    args.config = Some(config);
    args.jump = Some(0.25);
    handlers::handle_run(args).unwrap();

    let written = fs::read_to_string(out_file).unwrap();
    assert!(written.contains("Number of nodes: 2"));
    assert!(written.contains("Random jump factor: 0.25"));
}

#[test]
fn test_bad_jump_maps_to_invalid_config_exit() {
    let dir = TempDir::new().unwrap();
    let graph_file = dir.path().join("graph.txt");
    fs::write(&graph_file, "A\tB\n").unwrap();

    let mut args = cli(graph_file, None);
    args.jump = Some(2.0);
    let err = handlers::handle_run(args).unwrap_err();
    assert_eq!(SeqRankExit::from(&err), SeqRankExit::InvalidConfig);
}

#[test]
fn test_missing_config_file_maps_to_invalid_config_exit() {
    let dir = TempDir::new().unwrap();
    let graph_file = dir.path().join("graph.txt");
    fs::write(&graph_file, "A\tB\n").unwrap();

    let mut args = cli(graph_file, None);
    args.config = Some(dir.path().join("absent.toml"));
    let err = handlers::handle_run(args).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
    assert_eq!(SeqRankExit::from(&err), SeqRankExit::InvalidConfig);
}

#[test]
fn test_unreadable_input_maps_to_error_exit() {
    let dir = TempDir::new().unwrap();
    let err = handlers::handle_run(cli(dir.path().join("missing"), None)).unwrap_err();
    assert_eq!(SeqRankExit::from(&err), SeqRankExit::Error);
}
