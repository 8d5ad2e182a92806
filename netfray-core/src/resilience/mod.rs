//! Network resilience analysis.
//!
//! Measures how the largest connected component of an undirected graph
//! shrinks as nodes are removed in a given attack order. Attack orders are
//! random permutations or maximum-degree-first sequences; the latter comes in
//! a quadratic rescanning form and a degree-bucketed form.

mod attack;
mod components;
mod curve;
#[cfg(test)]
mod property;

pub use self::{
    attack::{random_attack_order, targeted_attack_order_linear, targeted_attack_order_quadratic},
    components::{bfs_component, connected_components, largest_component_size},
    curve::{ResilienceCurve, compute_resilience},
};
