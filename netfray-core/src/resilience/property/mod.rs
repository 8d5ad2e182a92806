//! Property-based tests for component discovery and attack orders.
//!
//! Checks that components partition the node set, that resilience curves
//! start at the intact size and reach zero under a full attack, and that both
//! targeted orders always remove a node of maximum remaining degree.

mod invariants;
mod strategies;
mod types;
