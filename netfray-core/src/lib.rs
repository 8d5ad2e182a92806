//! Netfray core library: graph storage, synthetic generators, degree
//! analysis, and resilience under node removal.
//!
//! # Examples
//! ```
//! use netfray_core::{
//!     AttachmentParams, AttackStrategy, ResilienceStudyBuilder, in_degree_distribution, upa,
//! };
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let mut rng = SmallRng::seed_from_u64(11);
//! let graph = upa(AttachmentParams::new(3, 40)?, &mut rng)?;
//! let degrees = in_degree_distribution(&graph).normalize()?;
//! assert!(!degrees.is_empty());
//!
//! let report = ResilienceStudyBuilder::new()
//!     .with_strategy(AttackStrategy::FastTargeted)
//!     .build()
//!     .run(&graph)?;
//! assert_eq!(report.curve().initial(), 40);
//! assert_eq!(report.curve().last(), 0);
//! # Ok::<(), netfray_core::GraphError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod degree;
mod error;
mod generators;
mod graph;
mod resilience;
mod study;
#[cfg(test)]
mod test_utils;

pub use crate::{
    degree::{
        DegreeDistribution, InDegrees, NormalizedDistribution, in_degree_distribution,
        in_degrees, normalize,
    },
    error::{GraphError, GraphErrorCode, Result},
    generators::{AttachmentParams, ErdosRenyiParams, dpa, erdos_renyi, upa},
    graph::{
        Adjacency, Directed, DirectedGraph, Graph, GraphSummary, NodeId, Orientation, Undirected,
        UndirectedGraph,
    },
    resilience::{
        ResilienceCurve, bfs_component, compute_resilience, connected_components,
        largest_component_size, random_attack_order, targeted_attack_order_linear,
        targeted_attack_order_quadratic,
    },
    study::{AttackStrategy, ResilienceReport, ResilienceStudy, ResilienceStudyBuilder},
};
