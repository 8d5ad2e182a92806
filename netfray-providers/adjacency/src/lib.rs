//! Adjacency-list provider: loads whitespace-separated node lines into a
//! [`netfray_core::DirectedGraph`].
mod errors;
mod provider;

pub use errors::AdjacencyProviderError;
pub use provider::AdjacencyProvider;
