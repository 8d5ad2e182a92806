//! Resilience studies: attack an undirected graph with one or more strategies
//! and collect the resulting curves.
//!
//! A study pairs an [`AttackStrategy`] with an RNG seed so random attacks are
//! reproducible. [`ResilienceStudy::compare`] runs several strategies against
//! the same graph; with the `parallel` feature the runs fan out over Rayon.

use rand::{SeedableRng, rngs::SmallRng};
use tracing::instrument;

use crate::{
    NodeId, Result, UndirectedGraph,
    resilience::{
        ResilienceCurve, compute_resilience, random_attack_order, targeted_attack_order_linear,
        targeted_attack_order_quadratic,
    },
};

/// Selects how attack orders are produced.
///
/// # Examples
/// ```
/// use netfray_core::AttackStrategy;
///
/// assert_eq!(AttackStrategy::default(), AttackStrategy::FastTargeted);
/// assert_eq!(AttackStrategy::Random.label(), "random");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AttackStrategy {
    /// Uniformly random permutation of the nodes.
    Random,
    /// Maximum-degree-first order, rescanning every node on each step.
    Targeted,
    /// Maximum-degree-first order maintained with degree buckets.
    #[default]
    FastTargeted,
}

impl AttackStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 3] = [Self::Random, Self::Targeted, Self::FastTargeted];

    /// Stable lowercase name used in logs and CLI output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Targeted => "targeted",
            Self::FastTargeted => "fast-targeted",
        }
    }
}

/// Seed applied when the caller does not provide one.
const DEFAULT_RNG_SEED: u64 = 0x5EED_F4A7;

/// Configures and constructs [`ResilienceStudy`] instances.
///
/// # Examples
/// ```
/// use netfray_core::{AttackStrategy, ResilienceStudyBuilder};
///
/// let study = ResilienceStudyBuilder::new()
///     .with_strategy(AttackStrategy::Random)
///     .with_rng_seed(7)
///     .build();
/// assert_eq!(study.strategy(), AttackStrategy::Random);
/// assert_eq!(study.rng_seed(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct ResilienceStudyBuilder {
    strategy: AttackStrategy,
    rng_seed: u64,
}

impl Default for ResilienceStudyBuilder {
    fn default() -> Self {
        Self {
            strategy: AttackStrategy::default(),
            rng_seed: DEFAULT_RNG_SEED,
        }
    }
}

impl ResilienceStudyBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the attack strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: AttackStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Overrides the seed used for random attack orders.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Constructs the configured [`ResilienceStudy`].
    #[must_use]
    pub fn build(self) -> ResilienceStudy {
        ResilienceStudy {
            strategy: self.strategy,
            rng_seed: self.rng_seed,
        }
    }
}

/// Outcome of attacking a graph with one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResilienceReport {
    strategy: AttackStrategy,
    order: Vec<NodeId>,
    curve: ResilienceCurve,
}

impl ResilienceReport {
    /// Strategy that produced the attack order.
    #[must_use]
    pub fn strategy(&self) -> AttackStrategy {
        self.strategy
    }

    /// Nodes in removal order.
    #[must_use]
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Largest component size before and after each removal.
    #[must_use]
    pub fn curve(&self) -> &ResilienceCurve {
        &self.curve
    }
}

/// Runs resilience analyses with a fixed strategy and seed.
#[derive(Debug, Clone)]
pub struct ResilienceStudy {
    strategy: AttackStrategy,
    rng_seed: u64,
}

impl ResilienceStudy {
    /// Returns the configured attack strategy.
    #[must_use]
    pub fn strategy(&self) -> AttackStrategy {
        self.strategy
    }

    /// Returns the seed used for random attack orders.
    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Attacks `graph` with the configured strategy.
    ///
    /// The caller's graph is left untouched.
    ///
    /// # Errors
    /// Propagates [`crate::GraphError::InvariantViolation`] from the
    /// bucketed targeted order; other failures indicate a malformed graph.
    ///
    /// # Examples
    /// ```
    /// use netfray_core::{AttackStrategy, ResilienceStudyBuilder, UndirectedGraph};
    ///
    /// let graph = UndirectedGraph::complete(4);
    /// let report = ResilienceStudyBuilder::new()
    ///     .with_strategy(AttackStrategy::Targeted)
    ///     .build()
    ///     .run(&graph)?;
    /// assert_eq!(report.order(), &[0, 1, 2, 3]);
    /// assert_eq!(report.curve().sizes(), &[4, 3, 2, 1, 0]);
    /// # Ok::<(), netfray_core::GraphError>(())
    /// ```
    pub fn run(&self, graph: &UndirectedGraph) -> Result<ResilienceReport> {
        self.run_strategy(graph, self.strategy)
    }

    /// Attacks `graph` once per strategy and returns the reports in input
    /// order. Each run works on its own copy and RNG.
    ///
    /// # Errors
    /// Returns the first failure encountered by any run.
    pub fn compare(
        &self,
        graph: &UndirectedGraph,
        strategies: &[AttackStrategy],
    ) -> Result<Vec<ResilienceReport>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            strategies
                .par_iter()
                .map(|&strategy| self.run_strategy(graph, strategy))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            strategies
                .iter()
                .map(|&strategy| self.run_strategy(graph, strategy))
                .collect()
        }
    }

    #[instrument(
        name = "study.run",
        err,
        skip(self, graph, strategy),
        fields(strategy = strategy.label(), nodes = graph.node_count(), seed = self.rng_seed),
    )]
    fn run_strategy(
        &self,
        graph: &UndirectedGraph,
        strategy: AttackStrategy,
    ) -> Result<ResilienceReport> {
        let order = match strategy {
            AttackStrategy::Random => {
                let mut rng = SmallRng::seed_from_u64(self.rng_seed);
                random_attack_order(graph, &mut rng)
            }
            AttackStrategy::Targeted => targeted_attack_order_quadratic(graph)?,
            AttackStrategy::FastTargeted => targeted_attack_order_linear(graph)?,
        };
        let curve = compute_resilience(graph, &order)?;
        Ok(ResilienceReport {
            strategy,
            order,
            curve,
        })
    }
}
