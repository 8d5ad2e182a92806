//! Preferential attachment generators (DPA and UPA).
//!
//! Both start from a complete graph on `initial_size` nodes and grow it one
//! node at a time. A node pool holds one entry per unit of attachment weight;
//! sampling distinct pool entries uniformly therefore favours nodes that
//! already have many edges, approximating the probability
//! `(degree(node) + 1) / (total_degree + node_count)`.

use std::collections::BTreeSet;

use rand::{Rng, seq::index};
use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result},
    graph::{DirectedGraph, Graph, NodeId, Orientation, UndirectedGraph},
};

/// Validated parameters for [`dpa`] and [`upa`].
///
/// # Examples
/// ```
/// use netfray_core::AttachmentParams;
///
/// let params = AttachmentParams::new(3, 50).expect("parameters must be valid");
/// assert_eq!(params.initial_size(), 3);
/// assert!(AttachmentParams::new(0, 50).is_err());
/// assert!(AttachmentParams::new(6, 5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttachmentParams {
    initial_size: usize,
    end_size: usize,
}

impl AttachmentParams {
    /// Creates a parameter set growing a complete graph of `initial_size`
    /// nodes to `end_size` nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArgument`] unless
    /// `0 < initial_size <= end_size`.
    pub fn new(initial_size: usize, end_size: usize) -> Result<Self> {
        if initial_size == 0 {
            return Err(GraphError::invalid_argument(
                "initial_size must be greater than zero",
            ));
        }
        if initial_size > end_size {
            return Err(GraphError::invalid_argument(format!(
                "initial_size ({initial_size}) must be <= end_size ({end_size})"
            )));
        }
        Ok(Self {
            initial_size,
            end_size,
        })
    }

    /// Returns the size of the seed complete graph, which is also the number
    /// of pool samples drawn per new node.
    #[must_use]
    pub fn initial_size(&self) -> usize {
        self.initial_size
    }

    /// Returns the final node count.
    #[must_use]
    pub fn end_size(&self) -> usize {
        self.end_size
    }
}

/// Multiset of node ids weighted by current attachment weight.
struct NodePool {
    entries: Vec<NodeId>,
}

impl NodePool {
    fn seeded(initial_size: usize, end_size: usize) -> Self {
        let capacity = initial_size
            .saturating_mul(initial_size)
            .saturating_add(end_size.saturating_mul(initial_size + 1));
        let mut entries = Vec::with_capacity(capacity);
        for node in 0..initial_size {
            entries.extend(std::iter::repeat_n(node, initial_size));
        }
        Self { entries }
    }

    /// Draws `amount` distinct entries without replacement and returns the
    /// distinct node ids among them.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, amount: usize) -> BTreeSet<NodeId> {
        let amount = amount.min(self.entries.len());
        index::sample(rng, self.entries.len(), amount)
            .iter()
            .filter_map(|position| self.entries.get(position).copied())
            .collect()
    }

    fn record(&mut self, new_node: NodeId, neighbours: &BTreeSet<NodeId>) {
        self.entries.extend(neighbours.iter().copied());
        self.entries.push(new_node);
    }
}

fn grow<O, R, F>(params: AttachmentParams, rng: &mut R, mut attach: F) -> Result<Graph<O>>
where
    O: Orientation,
    R: Rng + ?Sized,
    F: FnMut(&mut Graph<O>, NodeId, BTreeSet<NodeId>) -> Result<()>,
{
    let AttachmentParams {
        initial_size,
        end_size,
    } = params;
    let mut graph = Graph::<O>::complete(initial_size);
    let mut pool = NodePool::seeded(initial_size, end_size);

    for new_node in initial_size..end_size {
        let neighbours = pool.sample(rng, initial_size);
        pool.record(new_node, &neighbours);
        attach(&mut graph, new_node, neighbours)?;
    }

    super::record_generated(end_size);
    debug!(
        edges = graph.edge_count(),
        pool_entries = pool.entries.len(),
        "preferential attachment graph generated"
    );
    Ok(graph)
}

/// Generates a directed preferential attachment (DPA) graph.
///
/// Each new node receives at most `initial_size` outgoing edges to existing
/// nodes; existing nodes gain no outgoing edges.
///
/// # Errors
/// Propagates [`GraphError`] from node insertion, which cannot occur for
/// validated parameters.
///
/// # Examples
/// ```
/// use netfray_core::{AttachmentParams, dpa};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let params = AttachmentParams::new(3, 40).expect("valid");
/// let graph = dpa(params, &mut SmallRng::seed_from_u64(1)).expect("generation succeeds");
/// assert_eq!(graph.node_count(), 40);
/// assert!(graph.nodes().skip(3).all(|node| graph.degree(node) <= Some(3)));
/// ```
#[instrument(
    name = "generators.dpa",
    err,
    skip(params, rng),
    fields(initial_size = params.initial_size, end_size = params.end_size),
)]
pub fn dpa<R: Rng + ?Sized>(params: AttachmentParams, rng: &mut R) -> Result<DirectedGraph> {
    grow(params, rng, |graph: &mut DirectedGraph, node, neighbours| {
        graph.insert_node(node, neighbours)
    })
}

/// Generates an undirected preferential attachment (UPA) graph.
///
/// Each new node joins with at most `initial_size` edges; the chosen
/// neighbours record the new node back so the graph stays symmetric.
///
/// # Errors
/// Propagates [`GraphError`] from node insertion, which cannot occur for
/// validated parameters.
#[instrument(
    name = "generators.upa",
    err,
    skip(params, rng),
    fields(initial_size = params.initial_size, end_size = params.end_size),
)]
pub fn upa<R: Rng + ?Sized>(params: AttachmentParams, rng: &mut R) -> Result<UndirectedGraph> {
    grow(params, rng, |graph: &mut UndirectedGraph, node, neighbours| {
        graph.add_node(node, neighbours)
    })
}
