//! Seeded graph fixtures shared by the benchmarks.
//!
//! Fixtures are generated once per parameter set, outside the timed region,
//! so every benchmark iteration sees the same graph.

use netfray_core::{AttachmentParams, UndirectedGraph, upa};
use rand::{SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::AttachmentBenchParams};

/// Seed used for every fixture.
pub const FIXTURE_SEED: u64 = 42;

/// Builds a seeded UPA graph, the heavy-tailed topology the attack
/// benchmarks target.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when the parameters are invalid and
/// [`BenchSetupError::Fixture`] when the result has fewer than two nodes.
pub fn scale_free_graph(params: AttachmentBenchParams) -> Result<UndirectedGraph, BenchSetupError> {
    let attachment = AttachmentParams::new(params.initial_size, params.end_size)?;
    let graph = upa(attachment, &mut SmallRng::seed_from_u64(FIXTURE_SEED))?;
    if graph.node_count() < 2 {
        return Err(BenchSetupError::Fixture {
            fixture: "scale_free_graph",
            reason: "attack benchmarks need at least two nodes",
        });
    }
    Ok(graph)
}
