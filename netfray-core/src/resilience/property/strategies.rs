//! Strategy builders for resilience property tests.
//!
//! Each fixture is derived from a proptest-chosen family and seed, then built
//! with a seeded `SmallRng` so shrinking stays deterministic.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AttachmentParams, ErdosRenyiParams, Undirected, UndirectedGraph, erdos_renyi, upa};

use super::types::{GraphFamily, GraphFixture};

/// Upper bound for generated node counts.
const MAX_NODES: usize = 48;

/// Generates fixtures across every [`GraphFamily`].
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphFamily>(), any::<u64>()).prop_map(|(family, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(family, &mut rng)
    })
}

/// Builds a fixture for an explicit family, for rstest cases.
pub(super) fn generate_fixture(family: GraphFamily, rng: &mut SmallRng) -> GraphFixture {
    let graph = match family {
        GraphFamily::SparseRandom => random_graph(rng, (0.01, 0.08)),
        GraphFamily::DenseRandom => random_graph(rng, (0.5, 0.95)),
        GraphFamily::Attachment => attachment_graph(rng),
        GraphFamily::Cliques => cliques(rng),
    };
    GraphFixture { graph, family }
}

fn random_graph(rng: &mut SmallRng, probability_range: (f64, f64)) -> UndirectedGraph {
    let node_count = rng.gen_range(0..=MAX_NODES);
    let probability = rng.gen_range(probability_range.0..=probability_range.1);
    match ErdosRenyiParams::new(node_count, probability) {
        Ok(params) => erdos_renyi::<Undirected, _>(&params, rng),
        Err(err) => panic!("strategy produced invalid Erdos-Renyi parameters: {err}"),
    }
}

fn attachment_graph(rng: &mut SmallRng) -> UndirectedGraph {
    let initial_size = rng.gen_range(1..=5);
    let end_size = rng.gen_range(initial_size..=MAX_NODES);
    let generated =
        AttachmentParams::new(initial_size, end_size).and_then(|params| upa(params, rng));
    match generated {
        Ok(graph) => graph,
        Err(err) => panic!("strategy produced an invalid UPA graph: {err}"),
    }
}

fn cliques(rng: &mut SmallRng) -> UndirectedGraph {
    let clique_count = rng.gen_range(1..=5);
    let mut graph = UndirectedGraph::new();
    let mut next = 0;
    for _ in 0..clique_count {
        let size = rng.gen_range(1..=8);
        let members: Vec<usize> = (next..next + size).collect();
        for (offset, &node) in members.iter().enumerate() {
            let earlier = members.iter().take(offset).copied();
            if let Err(err) = graph.add_node(node, earlier) {
                panic!("clique construction failed: {err}");
            }
        }
        next += size;
    }
    graph
}
