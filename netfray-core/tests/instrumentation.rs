//! Span coverage for the instrumented graph operations.

use netfray_core::{
    AttachmentParams, AttackStrategy, ErdosRenyiParams, ResilienceStudyBuilder, Undirected,
    UndirectedGraph, compute_resilience, erdos_renyi, upa,
};
use netfray_test_support::tracing::RecordingLayer;
use rand::{SeedableRng, rngs::SmallRng};

#[test]
fn upa_records_generator_span() {
    let (graph, layer) = RecordingLayer::capture(|| {
        let params = AttachmentParams::new(2, 12).expect("valid sizes");
        upa(params, &mut SmallRng::seed_from_u64(3)).expect("generation succeeds")
    });

    assert_eq!(graph.node_count(), 12);
    let span = layer.span_named("generators.upa").expect("upa span");
    assert_eq!(span.field("initial_size"), Some("2"));
    assert_eq!(span.field("end_size"), Some("12"));
}

#[test]
fn erdos_renyi_records_generator_span() {
    let (_, layer) = RecordingLayer::capture(|| {
        let params = ErdosRenyiParams::new(6, 0.5).expect("valid probability");
        erdos_renyi::<Undirected, _>(&params, &mut SmallRng::seed_from_u64(1))
    });

    assert!(layer.span_named("generators.erdos_renyi").is_some());
}

#[test]
fn resilience_span_reports_removal_count() {
    let graph = UndirectedGraph::complete(5);
    let (curve, layer) =
        RecordingLayer::capture(|| compute_resilience(&graph, &[4, 2]).expect("nodes exist"));

    assert_eq!(curve.sizes(), &[5, 4, 3]);
    let span = layer.span_named("resilience.compute").expect("resilience span");
    assert_eq!(span.field("nodes"), Some("5"));
    assert_eq!(span.field("removals"), Some("2"));
}

#[test]
fn failed_resilience_run_records_error_event() {
    let graph = UndirectedGraph::complete(3);
    let (result, layer) = RecordingLayer::capture(|| compute_resilience(&graph, &[7]));

    assert!(result.is_err());
    let errors = layer.events_at(tracing::Level::ERROR);
    assert!(
        errors
            .iter()
            .any(|event| event.field("error") == Some("node 7 is not present in the graph")),
        "expected error event, got {errors:?}"
    );
}

#[test]
fn study_run_records_strategy_field() {
    let graph = UndirectedGraph::complete(4);
    let (_, layer) = RecordingLayer::capture(|| {
        ResilienceStudyBuilder::new()
            .with_strategy(AttackStrategy::Targeted)
            .build()
            .run(&graph)
            .expect("complete graph is well-formed")
    });

    let span = layer.span_named("study.run").expect("study span");
    assert_eq!(span.field("strategy"), Some("targeted"));
    assert!(layer.span_named("resilience.targeted_order").is_some());
}
