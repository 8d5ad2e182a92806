//! Attack orders: random and maximum-degree-first node removal sequences.

use std::collections::BTreeSet;

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result},
    graph::{NodeId, UndirectedGraph},
};

/// Returns the graph's nodes in uniformly random order.
pub fn random_attack_order<R: Rng + ?Sized>(graph: &UndirectedGraph, rng: &mut R) -> Vec<NodeId> {
    let mut order: Vec<NodeId> = graph.nodes().collect();
    order.shuffle(rng);
    order
}

/// Repeatedly removes a node of maximum current degree.
///
/// Ties go to the smallest node id. Each round rescans the remaining nodes,
/// so the cost is quadratic in the node count.
///
/// # Errors
/// Propagates [`GraphError`] from node deletion, which cannot occur for a
/// well-formed graph.
///
/// # Examples
/// ```
/// use netfray_core::{UndirectedGraph, targeted_attack_order_quadratic};
///
/// let mut graph = UndirectedGraph::isolated(3);
/// graph.add_node(3, [0, 1, 2]).expect("leaves exist");
/// let order = targeted_attack_order_quadratic(&graph).expect("well-formed graph");
/// assert_eq!(order, vec![3, 0, 1, 2]);
/// ```
#[instrument(
    name = "resilience.targeted_order",
    err,
    skip(graph),
    fields(nodes = graph.node_count()),
)]
pub fn targeted_attack_order_quadratic(graph: &UndirectedGraph) -> Result<Vec<NodeId>> {
    let mut remaining = graph.clone();
    let mut order = Vec::with_capacity(remaining.node_count());
    while let Some(victim) = highest_degree_node(&remaining) {
        remaining.delete_node(victim)?;
        order.push(victim);
    }
    Ok(order)
}

fn highest_degree_node(graph: &UndirectedGraph) -> Option<NodeId> {
    graph
        .iter()
        .max_by(|(left, left_set), (right, right_set)| {
            left_set
                .len()
                .cmp(&right_set.len())
                .then_with(|| right.cmp(left))
        })
        .map(|(node, _)| node)
}

/// Degree-indexed buckets of node ids, one per degree in `0..node_count`.
struct DegreeBuckets {
    buckets: Vec<BTreeSet<NodeId>>,
}

impl DegreeBuckets {
    fn for_graph(graph: &UndirectedGraph) -> Result<Self> {
        let mut buckets = Self {
            buckets: vec![BTreeSet::new(); graph.node_count()],
        };
        for (node, neighbours) in graph.iter() {
            buckets.bucket_mut(neighbours.len())?.insert(node);
        }
        Ok(buckets)
    }

    fn bucket_mut(&mut self, degree: usize) -> Result<&mut BTreeSet<NodeId>> {
        let bucket_count = self.buckets.len();
        self.buckets
            .get_mut(degree)
            .ok_or(GraphError::InvariantViolation {
                invariant: "node degree must be below the node count",
                degree,
                bucket_count,
            })
    }

    /// Moves `node` from the `degree` bucket to the `degree - 1` bucket.
    fn demote(&mut self, node: NodeId, degree: usize) -> Result<()> {
        self.bucket_mut(degree)?.remove(&node);
        let lower = degree
            .checked_sub(1)
            .ok_or(GraphError::InvariantViolation {
                invariant: "a node with a present neighbour has positive degree",
                degree,
                bucket_count: self.buckets.len(),
            })?;
        self.bucket_mut(lower)?.insert(node);
        Ok(())
    }
}

/// Maximum-degree-first removal order using degree buckets.
///
/// Drains the highest non-empty bucket; before a node is deleted each of its
/// remaining neighbours moves one bucket down. Ties are broken by bucket
/// order (smallest id first), which need not match
/// [`targeted_attack_order_quadratic`].
///
/// # Errors
/// Returns [`GraphError::InvariantViolation`] if a degree falls outside the
/// bucket table, which the no-self-loop invariant rules out.
#[instrument(
    name = "resilience.fast_targeted_order",
    err,
    skip(graph),
    fields(nodes = graph.node_count()),
)]
pub fn targeted_attack_order_linear(graph: &UndirectedGraph) -> Result<Vec<NodeId>> {
    let mut remaining = graph.clone();
    let mut buckets = DegreeBuckets::for_graph(&remaining)?;
    let mut order = Vec::with_capacity(remaining.node_count());

    for degree in (0..buckets.buckets.len()).rev() {
        loop {
            let Some(victim) = buckets.bucket_mut(degree)?.pop_first() else {
                break;
            };
            let neighbours = remaining
                .neighbors(victim)
                .ok_or(GraphError::NodeNotFound { node: victim })?
                .iter()
                .copied()
                .collect::<Vec<_>>();
            for neighbour in neighbours {
                let neighbour_degree = remaining
                    .degree(neighbour)
                    .ok_or(GraphError::NodeNotFound { node: neighbour })?;
                buckets.demote(neighbour, neighbour_degree)?;
            }
            remaining.delete_node(victim)?;
            order.push(victim);
        }
    }

    debug!(removed = order.len(), "fast targeted order computed");
    Ok(order)
}
