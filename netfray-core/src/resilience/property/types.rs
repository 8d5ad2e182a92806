//! Fixture types for resilience property tests.

use test_strategy::Arbitrary;

use crate::UndirectedGraph;

/// Family of undirected graphs produced by the strategies.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphFamily {
    /// Erdos-Renyi graph with low edge probability; many small components.
    #[weight(3)]
    SparseRandom,
    /// Erdos-Renyi graph with high edge probability; many degree ties.
    #[weight(2)]
    DenseRandom,
    /// UPA graph with a heavy-tailed degree sequence.
    #[weight(3)]
    Attachment,
    /// Disjoint union of complete graphs of varying size.
    #[weight(2)]
    Cliques,
}

/// Generated graph plus the family it came from, for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// The generated graph.
    pub graph: UndirectedGraph,
    /// Family used during generation.
    pub family: GraphFamily,
}
