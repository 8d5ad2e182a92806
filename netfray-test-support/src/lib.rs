//! Shared test utilities used across netfray crates.

pub mod ci;
pub mod tracing;
