use clique_counter::graph::algorithms::erdos_renyi;
use clique_counter::prelude::*;
use clique_counter::storage;
use clique_counter::{Error, InvalidGraphError};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn edge_list_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    let mut rng = StdRng::seed_from_u64(5);
    let graph = erdos_renyi(12, 0.3, &mut rng);

    storage::save_edge_list(&graph, &path).unwrap();
    assert_eq!(storage::load_edge_list(&path, true).unwrap(), graph);
}

#[test]
fn snapshot_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.bin");
    let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();

    storage::save_graph_snapshot(&graph, &path).unwrap();
    assert_eq!(storage::load_graph_snapshot(&path).unwrap(), graph);
}

#[test]
fn analysis_json_contains_counts_and_scores() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("results");
    let output_dir = output_dir.to_str().unwrap();

    let triangle = Graph::from_edges(4, &[(0, 1), (1, 2), (0, 2)]).unwrap();
    let analysis = RamseyAnalyzer::new(AnalyzerConfig::default())
        .unwrap()
        .analyze(&triangle);
    storage::save_analysis(&analysis, true, output_dir).unwrap();

    let text = std::fs::read_to_string(dir.path().join("results").join("analysis.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["ramsey_number"], 3);
    assert_eq!(json["balance_score"], 1);
    assert_eq!(json["engine"], "inductive");
    assert_eq!(json["graph"]["counts"][1], serde_json::json!([1, 1, 1, 0]));
    assert_eq!(json["complement"]["clique_number"], 2);
    assert_eq!(json["complement"]["normalized"][0][3], 1.0);
}

#[test]
fn corrupt_snapshots_are_rejected_as_invalid_graphs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.bin");

    std::fs::write(&path, bincode::serialize(&(2usize, vec![(0u32, 0u32)])).unwrap()).unwrap();
    let err = storage::load_graph_snapshot(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidGraph(InvalidGraphError::SelfLoop(0))));

    std::fs::write(&path, bincode::serialize(&(3usize, vec![(0u32, 7u32)])).unwrap()).unwrap();
    let err = storage::load_graph_snapshot(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidGraph(InvalidGraphError::NodeOutOfRange { v: 7, node_count: 3, .. })
    ));

    std::fs::write(&path, bincode::serialize(&(3usize, vec![(0u32, 1u32), (1u32, 0u32)])).unwrap()).unwrap();
    let err = storage::load_graph_snapshot(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidGraph(InvalidGraphError::DuplicateEdge(1, 0))));
}

#[test]
fn oversized_edge_list_header_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.txt");
    std::fs::write(&path, "n 18446744073709551615\n0 1\n").unwrap();

    let err = storage::load_edge_list(&path, false).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 1, .. }));
}
