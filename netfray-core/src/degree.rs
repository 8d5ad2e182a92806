//! In-degree analysis and distribution normalisation.
//!
//! The normalised distribution is the input for log-log degree plots: see
//! [`NormalizedDistribution::points`].

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result},
    graph::{Graph, NodeId, Orientation},
};

/// Node to in-degree mapping. Only nodes that are the target of at least one
/// edge appear as keys.
pub type InDegrees = BTreeMap<NodeId, usize>;

/// Counts incoming edges per node by scanning every adjacency set.
///
/// For undirected graphs every edge is seen from both ends, so the result is
/// the ordinary degree of every non-isolated node.
///
/// # Examples
/// ```
/// use netfray_core::{DirectedGraph, in_degrees};
///
/// let degrees = in_degrees(&DirectedGraph::complete(3));
/// assert_eq!(degrees.get(&0), Some(&2));
/// ```
#[must_use]
pub fn in_degrees<O: Orientation>(graph: &Graph<O>) -> InDegrees {
    let mut degrees = InDegrees::new();
    for (_, targets) in graph.iter() {
        for &target in targets {
            *degrees.entry(target).or_insert(0) += 1;
        }
    }
    degrees
}

/// Unnormalised degree distribution: degree value to number of nodes.
///
/// # Examples
/// ```
/// use netfray_core::{DirectedGraph, in_degree_distribution};
///
/// let distribution = in_degree_distribution(&DirectedGraph::complete(4));
/// assert_eq!(distribution.count(3), 4);
/// assert_eq!(distribution.total(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeDistribution {
    counts: BTreeMap<usize, usize>,
}

impl DegreeDistribution {
    /// Wraps explicit `degree -> count` pairs. Zero counts are dropped so only
    /// observed degrees remain.
    #[must_use]
    pub fn from_counts(counts: BTreeMap<usize, usize>) -> Self {
        let counts = counts.into_iter().filter(|&(_, count)| count > 0).collect();
        Self { counts }
    }

    /// Returns the number of nodes with the given degree.
    #[must_use]
    pub fn count(&self, degree: usize) -> usize {
        self.counts.get(&degree).copied().unwrap_or(0)
    }

    /// Returns the sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns `true` when no degree has been observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(degree, count)` pairs in ascending degree order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&degree, &count)| (degree, count))
    }

    /// Divides every count by the total of all counts.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyInput`] when the distribution is empty.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeMap;
    /// use netfray_core::DegreeDistribution;
    ///
    /// let distribution = DegreeDistribution::from_counts(BTreeMap::from([(1, 3), (2, 1)]));
    /// let normalized = distribution.normalize().expect("distribution is not empty");
    /// assert_eq!(normalized.points(), vec![(1, 0.75), (2, 0.25)]);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "Probability mass is defined as a floating-point ratio of counts."
    )]
    pub fn normalize(&self) -> Result<NormalizedDistribution> {
        if self.counts.is_empty() {
            return Err(GraphError::EmptyInput {
                what: "degree distribution",
            });
        }
        let total = self.total() as f64;
        let mass = self
            .counts
            .iter()
            .map(|(&degree, &count)| (degree, count as f64 / total))
            .collect();
        Ok(NormalizedDistribution { mass })
    }
}

/// Probability mass over observed degrees. Values sum to 1.0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedDistribution {
    mass: BTreeMap<usize, f64>,
}

impl NormalizedDistribution {
    /// Returns the probability of `degree`, or `None` when it was not observed.
    #[must_use]
    pub fn probability(&self, degree: usize) -> Option<f64> {
        self.mass.get(&degree).copied()
    }

    /// Returns the number of observed degrees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mass.len()
    }

    /// Returns `true` when no degree was observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mass.is_empty()
    }

    /// Returns `(degree, frequency)` plot points in ascending degree order.
    #[must_use]
    pub fn points(&self) -> Vec<(usize, f64)> {
        self.mass.iter().map(|(&degree, &p)| (degree, p)).collect()
    }
}

/// Computes the unnormalised in-degree distribution of `graph`.
///
/// Nodes with in-degree zero are not counted.
#[instrument(
    name = "degree.in_degree_distribution",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count()),
)]
#[must_use]
pub fn in_degree_distribution<O: Orientation>(graph: &Graph<O>) -> DegreeDistribution {
    let mut counts = BTreeMap::new();
    for degree in in_degrees(graph).into_values() {
        *counts.entry(degree).or_insert(0) += 1;
    }
    debug!(distinct_degrees = counts.len(), "in-degree distribution computed");
    DegreeDistribution { counts }
}

/// Normalises `distribution`; see [`DegreeDistribution::normalize`].
///
/// # Errors
/// Returns [`GraphError::EmptyInput`] when the distribution is empty.
pub fn normalize(distribution: &DegreeDistribution) -> Result<NormalizedDistribution> {
    distribution.normalize()
}
