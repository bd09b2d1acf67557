use std::io::Write;

use df_core::NodeId;
use df_graph::{DuplicatePolicy, is_acyclic};
use df_io::*;
use df_solver::{SolverConfig, max_flow};
use df_synth::{SynthConfig, generate};
use tempfile::{NamedTempFile, tempdir};

#[test]
fn synthesized_dag_survives_a_file_round_trip() {
    let dag = generate(&SynthConfig::new(40, 120).with_seed(11)).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("dag.txt");

    write_edge_list(&path, dag.num_nodes, &dag.edges).unwrap();
    let list = read_edge_list(&path).unwrap();
    assert_eq!(list.num_nodes, 40);
    assert_eq!(list.edges, dag.edges);

    let graph = list.to_graph(DuplicatePolicy::LastWins).unwrap();
    assert!(is_acyclic(&graph));
}

#[test]
fn flow_file_lists_every_edge() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, "4\n0 1 10\n0 2 5\n1 3 10\n2 3 5\n").unwrap();
    let graph = read_edge_list(input.path())
        .unwrap()
        .to_graph(DuplicatePolicy::default())
        .unwrap();

    let flow = max_flow(
        &graph,
        NodeId::from_index(0),
        NodeId::from_index(3),
        &SolverConfig::default(),
    )
    .unwrap();
    assert_eq!(flow.value, 15);

    let out = NamedTempFile::new().unwrap();
    write_flow_assignment(out.path(), &flow).unwrap();
    let text = std::fs::read_to_string(out.path()).unwrap();
    assert_eq!(text, "0 1 10\n0 2 5\n1 3 10\n2 3 5\n");
}

#[test]
fn config_save_then_load() {
    let mut config = RunConfig::default();
    config.synth = SynthConfig::new(10, 20).with_seed(3);
    config.solver = SolverConfig::default().with_max_augmentations(8);
    config.ingest.reverse_policy = ReversePolicy::KeepFirstSeen;

    let dir = tempdir().unwrap();
    let path = dir.path().join("run.yaml");
    save_config(&path, &config).unwrap();
    assert_eq!(load_config(&path).unwrap(), config);
}

#[test]
fn missing_input_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let err = read_edge_list(&path).unwrap_err();
    assert!(matches!(err, IoError::Read { .. }));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn routes_to_solvable_graph() {
    let routes = "1 2 4\n2 1 4\n2 3 6\n3 2 1\n1 3 2\n";
    let options = RouteOptions {
        one_based: true,
        reverse_policy: ReversePolicy::KeepFirstSeen,
        num_nodes: None,
    };
    let conv = convert_routes(routes, &options).unwrap();
    assert_eq!(conv.dropped_reverse, 2);

    let graph = conv.edge_list.to_graph(DuplicatePolicy::default()).unwrap();
    assert!(is_acyclic(&graph));
    let flow = max_flow(
        &graph,
        NodeId::from_index(0),
        NodeId::from_index(2),
        &SolverConfig::default(),
    )
    .unwrap();
    assert_eq!(flow.value, 6);
}

#[test]
fn written_files_match_formatted_text() {
    let dag = generate(&SynthConfig::new(12, 20).with_seed(4)).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("dag.txt");
    write_edge_list(&path, dag.num_nodes, &dag.edges).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        format_edge_list(dag.num_nodes, &dag.edges)
    );

    let graph = dag.to_graph().unwrap();
    let flow = max_flow(&graph, dag.source(), dag.sink(), &SolverConfig::default()).unwrap();
    let flows = dir.path().join("flows.txt");
    write_flow_assignment(&flows, &flow).unwrap();
    assert_eq!(
        std::fs::read_to_string(&flows).unwrap(),
        format_flow_assignment(&flow)
    );
}
