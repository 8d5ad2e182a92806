//! Benchmark support crate for netfray.
//!
//! Provides seeded graph fixtures and parameter types used by the Criterion
//! benchmarks for generation, attack ordering, and resilience curves.

pub mod error;
pub mod fixtures;
pub mod params;
