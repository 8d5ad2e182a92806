//! Synthetic graph generators.
//!
//! Every generator draws randomness from a caller-supplied [`rand::Rng`], so a
//! seeded `SmallRng` reproduces the same graph on every run.

mod attachment;
mod random;

pub use self::{
    attachment::{AttachmentParams, dpa, upa},
    random::{ErdosRenyiParams, erdos_renyi},
};

#[cfg(feature = "metrics")]
fn record_generated(nodes: usize) {
    metrics::counter!("generated_nodes_total").increment(nodes as u64);
}

#[cfg(not(feature = "metrics"))]
fn record_generated(_nodes: usize) {}
