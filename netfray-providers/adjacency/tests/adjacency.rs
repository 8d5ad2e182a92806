//! Integration tests for loading adjacency lists.
use std::io::{Cursor, Write as _};

use netfray_core::{GraphError, in_degree_distribution};
use netfray_providers_adjacency::{AdjacencyProvider, AdjacencyProviderError};
use netfray_test_support::tracing::RecordingLayer;
use rstest::rstest;

const CITATIONS: &str = "0 1 2 3 \n1 2 \n2 \n   wrapped continuation 9 9\n\n3 1\n";

#[rstest]
fn loads_nodes_and_edges() {
    let provider = AdjacencyProvider::try_from_reader("citations", Cursor::new(CITATIONS))
        .expect("provider must build");
    let graph = provider.graph();

    assert_eq!(provider.name(), "citations");
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.degree(2), Some(0));

    let distribution = in_degree_distribution(graph);
    assert_eq!(distribution.count(1), 1);
    assert_eq!(distribution.count(2), 2);
}

#[rstest]
fn duplicate_node_line_replaces_and_warns() {
    let (provider, layer) = RecordingLayer::capture(|| {
        AdjacencyProvider::try_from_reader("dup", Cursor::new("0 1\n1\n0 2\n2\n"))
            .expect("provider must build")
    });

    let graph = provider.into_graph();
    assert_eq!(
        graph.neighbors(0).map(|set| set.iter().copied().collect::<Vec<_>>()),
        Some(vec![2])
    );
    let warnings = layer.events_at(tracing::Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("node"), Some("0"));
    assert_eq!(warnings[0].field("line"), Some("3"));
}

#[rstest]
#[case::empty("")]
#[case::only_continuations("  1 2\n\t3\n\n")]
fn rejects_input_without_node_lines(#[case] raw: &str) {
    let err = AdjacencyProvider::try_from_reader("empty", Cursor::new(raw))
        .expect_err("empty input must fail");
    assert!(matches!(err, AdjacencyProviderError::EmptyInput));
}

#[rstest]
fn rejects_self_loops() {
    let err = AdjacencyProvider::try_from_reader("loop", Cursor::new("0 1\n1 1\n"))
        .expect_err("self-loop must fail");
    assert!(matches!(
        err,
        AdjacencyProviderError::Graph(GraphError::SelfLoop { node: 1 })
    ));
}

#[rstest]
fn reports_invalid_token_position() {
    let err = AdjacencyProvider::try_from_reader("bad", Cursor::new("0 1\n1 two\n"))
        .expect_err("bad token must fail");
    assert_eq!(err.to_string(), "line 2: `two` is not a node identifier");
}

#[rstest]
fn loads_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(CITATIONS.as_bytes()).expect("write fixture");

    let provider =
        AdjacencyProvider::try_from_path("disk", file.path()).expect("provider must build");
    assert_eq!(provider.graph().node_count(), 4);
}

#[rstest]
fn missing_path_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = AdjacencyProvider::try_from_path("missing", dir.path().join("absent.txt"))
        .expect_err("missing file must fail");
    assert!(matches!(err, AdjacencyProviderError::Io(_)));
}

#[rstest]
fn propagates_read_errors() {
    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("boom"))
        }
    }

    impl std::io::BufRead for FailingReader {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::other("boom"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    let err = AdjacencyProvider::try_from_reader("failing", FailingReader)
        .expect_err("read failure must surface");
    assert!(matches!(err, AdjacencyProviderError::Io(_)));
}
