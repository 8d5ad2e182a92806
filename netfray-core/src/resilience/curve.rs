//! Resilience curves: largest component size under sequential node removal.

use tracing::{debug, instrument};

use crate::{
    error::Result,
    graph::{NodeId, UndirectedGraph},
};

use super::components::largest_component_size;

/// Largest connected-component size after each removal step.
///
/// Entry `k` is the size after removing the first `k` nodes of the attack
/// order; entry 0 is the size of the intact graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResilienceCurve {
    sizes: Vec<usize>,
}

impl ResilienceCurve {
    /// Returns the raw sequence of component sizes.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the number of recorded steps (attack order length + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always `false`: a curve records at least the intact graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Returns the largest component size before any removal.
    #[must_use]
    pub fn initial(&self) -> usize {
        self.sizes.first().copied().unwrap_or(0)
    }

    /// Returns the largest component size after the last removal.
    #[must_use]
    pub fn last(&self) -> usize {
        self.sizes.last().copied().unwrap_or(0)
    }

    /// Returns `(nodes removed, largest component size)` plot points.
    pub fn points(&self) -> impl ExactSizeIterator<Item = (usize, usize)> + '_ {
        self.sizes.iter().copied().enumerate()
    }

    /// Consumes the curve and returns the raw sequence.
    #[must_use]
    pub fn into_sizes(self) -> Vec<usize> {
        self.sizes
    }
}

/// Computes the resilience curve of `graph` under `attack_order`.
///
/// Works on a private copy; `graph` is never modified.
///
/// # Errors
/// Returns [`crate::GraphError::NodeNotFound`] when a node in `attack_order`
/// is not present at the time of its removal, including repeated entries.
///
/// # Examples
/// ```
/// use netfray_core::{UndirectedGraph, compute_resilience};
///
/// let graph = UndirectedGraph::complete(4);
/// let curve = compute_resilience(&graph, &[0, 1, 2, 3]).expect("all nodes exist");
/// assert_eq!(curve.sizes(), &[4, 3, 2, 1, 0]);
/// ```
#[instrument(
    name = "resilience.compute",
    err,
    skip(graph, attack_order),
    fields(nodes = graph.node_count(), removals = attack_order.len()),
)]
pub fn compute_resilience(
    graph: &UndirectedGraph,
    attack_order: &[NodeId],
) -> Result<ResilienceCurve> {
    let mut remaining = graph.clone();
    let mut sizes = Vec::with_capacity(attack_order.len() + 1);
    sizes.push(largest_component_size(&remaining));
    for &node in attack_order {
        remaining.delete_node(node)?;
        sizes.push(largest_component_size(&remaining));
    }

    record_removals(attack_order.len());
    debug!(
        initial = sizes.first().copied().unwrap_or(0),
        last = sizes.last().copied().unwrap_or(0),
        "resilience curve computed"
    );
    Ok(ResilienceCurve { sizes })
}

#[cfg(feature = "metrics")]
fn record_removals(removals: usize) {
    metrics::counter!("resilience_removals_total").increment(removals as u64);
}

#[cfg(not(feature = "metrics"))]
fn record_removals(_removals: usize) {}
