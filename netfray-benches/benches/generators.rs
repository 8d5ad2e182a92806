//! Graph generator benchmarks.
//!
//! Measures Erdos-Renyi generation, which is quadratic in the node count, and
//! DPA/UPA growth, whose cost is dominated by node-pool sampling.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

use netfray_benches::{
    error::BenchSetupError,
    fixtures::FIXTURE_SEED,
    params::{AttachmentBenchParams, ErdosRenyiBenchParams},
};
use netfray_core::{AttachmentParams, Directed, ErdosRenyiParams, dpa, erdos_renyi, upa};

/// Node counts for Erdos-Renyi graphs.
const ER_NODE_COUNTS: &[usize] = &[100, 500, 1_000];

/// Edge probability for Erdos-Renyi graphs.
const ER_PROBABILITY: f64 = 0.05;

/// Attachment parameter sets.
const ATTACHMENT_PARAMS: &[AttachmentBenchParams] = &[
    AttachmentBenchParams { initial_size: 3, end_size: 1_000 },
    AttachmentBenchParams { initial_size: 3, end_size: 10_000 },
    AttachmentBenchParams { initial_size: 13, end_size: 10_000 },
];

fn erdos_renyi_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("erdos_renyi_directed");
    group.sample_size(20);

    for &node_count in ER_NODE_COUNTS {
        let params = ErdosRenyiParams::new(node_count, ER_PROBABILITY)?;
        let label = ErdosRenyiBenchParams {
            node_count,
            probability: ER_PROBABILITY,
        };
        group.bench_with_input(BenchmarkId::from_parameter(label), &params, |b, params| {
            let mut rng = SmallRng::seed_from_u64(FIXTURE_SEED);
            b.iter(|| erdos_renyi::<Directed, _>(params, &mut rng));
        });
    }

    group.finish();
    Ok(())
}

fn attachment_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("preferential_attachment");
    group.sample_size(20);

    for &bench_params in ATTACHMENT_PARAMS {
        let params = AttachmentParams::new(bench_params.initial_size, bench_params.end_size)?;
        group.bench_with_input(BenchmarkId::new("dpa", bench_params), &params, |b, &params| {
            let mut rng = SmallRng::seed_from_u64(FIXTURE_SEED);
            b.iter(|| dpa(params, &mut rng));
        });
        group.bench_with_input(BenchmarkId::new("upa", bench_params), &params, |b, &params| {
            let mut rng = SmallRng::seed_from_u64(FIXTURE_SEED);
            b.iter(|| upa(params, &mut rng));
        });
    }

    group.finish();
    Ok(())
}

fn erdos_renyi_generation(c: &mut Criterion) {
    if let Err(err) = erdos_renyi_impl(c) {
        panic!("erdos_renyi benchmark setup failed: {err}");
    }
}

fn attachment_generation(c: &mut Criterion) {
    if let Err(err) = attachment_impl(c) {
        panic!("preferential attachment benchmark setup failed: {err}");
    }
}

criterion_group!(benches, erdos_renyi_generation, attachment_generation);
criterion_main!(benches);
