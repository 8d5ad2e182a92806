//! Erdos-Renyi random graphs.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result},
    graph::{Graph, Orientation},
};

/// Validated parameters for [`erdos_renyi`].
///
/// # Examples
/// ```
/// use netfray_core::ErdosRenyiParams;
///
/// let params = ErdosRenyiParams::new(100, 0.1).expect("parameters must be valid");
/// assert_eq!(params.node_count(), 100);
/// assert!(ErdosRenyiParams::new(10, 1.5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErdosRenyiParams {
    node_count: usize,
    probability: f64,
}

impl ErdosRenyiParams {
    /// Creates a parameter set for `node_count` nodes and edge probability
    /// `probability`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArgument`] when `probability` is not a
    /// finite value in `[0, 1]`.
    pub fn new(node_count: usize, probability: f64) -> Result<Self> {
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(GraphError::invalid_argument(format!(
                "edge probability must lie in [0, 1] (got {probability})"
            )));
        }
        Ok(Self {
            node_count,
            probability,
        })
    }

    /// Returns the number of nodes to generate.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the independent per-edge probability.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

/// Generates an Erdos-Renyi graph on nodes `0..node_count`.
///
/// Directed graphs flip one coin per ordered pair, so `i -> j` and `j -> i`
/// are independent. Undirected graphs flip one coin per unordered pair and
/// add both adjacency entries together.
///
/// # Examples
/// ```
/// use netfray_core::{ErdosRenyiParams, UndirectedGraph, Undirected, erdos_renyi};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let params = ErdosRenyiParams::new(5, 1.0).expect("valid");
/// let graph = erdos_renyi::<Undirected, _>(&params, &mut rng);
/// assert_eq!(graph, UndirectedGraph::complete(5));
/// ```
#[instrument(
    name = "generators.erdos_renyi",
    skip(params, rng),
    fields(
        orientation = O::LABEL,
        nodes = params.node_count,
        probability = params.probability,
    ),
)]
pub fn erdos_renyi<O, R>(params: &ErdosRenyiParams, rng: &mut R) -> Graph<O>
where
    O: Orientation,
    R: Rng + ?Sized,
{
    let node_count = params.node_count;
    let mut graph = Graph::<O>::isolated(node_count);
    for source in 0..node_count {
        let first_target = if O::DIRECTED { 0 } else { source + 1 };
        for target in first_target..node_count {
            if target != source && rng.gen_bool(params.probability) {
                graph.connect(source, target);
            }
        }
    }

    super::record_generated(node_count);
    debug!(edges = graph.edge_count(), "erdos-renyi graph generated");
    graph
}
