//! Property bodies shared by the proptest and rstest runners.
//!
//! - **Partition**: components are disjoint, non-empty, and cover every node.
//! - **Curve shape**: starts at the intact largest component, never grows,
//!   and ends at zero when every node is removed.
//! - **Maximum-degree-first**: each targeted removal takes a node whose
//!   degree equals the maximum among remaining nodes, and the two targeted
//!   orders agree step for step.

use std::collections::BTreeSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    NodeId, UndirectedGraph, compute_resilience, connected_components, largest_component_size,
    targeted_attack_order_linear, targeted_attack_order_quadratic,
};

use super::types::GraphFixture;

/// Components must partition the node set.
pub(super) fn run_component_partition_property(fixture: &GraphFixture) -> TestCaseResult {
    let components = connected_components(&fixture.graph);
    let mut seen = BTreeSet::new();
    for component in &components {
        if component.is_empty() {
            return Err(TestCaseError::fail(format!(
                "empty component reported (family={:?})",
                fixture.family
            )));
        }
        for &node in component {
            if !seen.insert(node) {
                return Err(TestCaseError::fail(format!(
                    "node {node} appears in two components (family={:?})",
                    fixture.family
                )));
            }
        }
    }

    let nodes: BTreeSet<NodeId> = fixture.graph.nodes().collect();
    if seen != nodes {
        return Err(TestCaseError::fail(format!(
            "components cover {} nodes but graph has {} (family={:?})",
            seen.len(),
            nodes.len(),
            fixture.family
        )));
    }

    let largest = components.iter().map(BTreeSet::len).max().unwrap_or(0);
    if largest != largest_component_size(&fixture.graph) {
        return Err(TestCaseError::fail(format!(
            "largest component mismatch: partition={largest}, reported={}",
            largest_component_size(&fixture.graph)
        )));
    }
    Ok(())
}

/// A full targeted attack yields a non-increasing curve ending at zero.
pub(super) fn run_curve_shape_property(fixture: &GraphFixture) -> TestCaseResult {
    let order = targeted_attack_order_linear(&fixture.graph)
        .map_err(|err| TestCaseError::fail(format!("linear order failed: {err}")))?;
    let curve = compute_resilience(&fixture.graph, &order)
        .map_err(|err| TestCaseError::fail(format!("resilience failed: {err}")))?;

    if curve.len() != order.len() + 1 {
        return Err(TestCaseError::fail(format!(
            "curve has {} entries for {} removals",
            curve.len(),
            order.len()
        )));
    }
    if curve.initial() != largest_component_size(&fixture.graph) {
        return Err(TestCaseError::fail(format!(
            "curve starts at {} but intact graph has largest component {}",
            curve.initial(),
            largest_component_size(&fixture.graph)
        )));
    }
    if curve.last() != 0 {
        return Err(TestCaseError::fail(format!(
            "curve ends at {} after removing every node (family={:?})",
            curve.last(),
            fixture.family
        )));
    }
    if let Some(step) = curve.sizes().windows(2).position(|pair| pair[1] > pair[0]) {
        return Err(TestCaseError::fail(format!(
            "largest component grew at removal {} (family={:?})",
            step + 1,
            fixture.family
        )));
    }
    Ok(())
}

/// Both targeted orders always remove a node of maximum remaining degree.
pub(super) fn run_maximum_degree_first_property(fixture: &GraphFixture) -> TestCaseResult {
    let quadratic = targeted_attack_order_quadratic(&fixture.graph)
        .map_err(|err| TestCaseError::fail(format!("quadratic order failed: {err}")))?;
    let linear = targeted_attack_order_linear(&fixture.graph)
        .map_err(|err| TestCaseError::fail(format!("linear order failed: {err}")))?;

    let quadratic_degrees = removal_degrees(&fixture.graph, &quadratic)?;
    let linear_degrees = removal_degrees(&fixture.graph, &linear)?;
    if quadratic_degrees != linear_degrees {
        return Err(TestCaseError::fail(format!(
            "per-step degrees differ: quadratic={quadratic_degrees:?}, linear={linear_degrees:?}"
        )));
    }
    if quadratic != linear {
        return Err(TestCaseError::fail(format!(
            "orders diverge despite ascending tie-breaking: quadratic={quadratic:?}, linear={linear:?}"
        )));
    }
    Ok(())
}

/// Replays `order`, checking each victim has maximum degree when removed, and
/// returns the degree observed at each step.
fn removal_degrees(graph: &UndirectedGraph, order: &[NodeId]) -> Result<Vec<usize>, TestCaseError> {
    let mut remaining = graph.clone();
    let mut degrees = Vec::with_capacity(order.len());
    for &victim in order {
        let maximum = remaining
            .nodes()
            .filter_map(|node| remaining.degree(node))
            .max()
            .unwrap_or(0);
        let degree = remaining.degree(victim).ok_or_else(|| {
            TestCaseError::fail(format!("victim {victim} missing or removed twice"))
        })?;
        if degree != maximum {
            return Err(TestCaseError::fail(format!(
                "victim {victim} had degree {degree} while maximum was {maximum}"
            )));
        }
        remaining
            .delete_node(victim)
            .map_err(|err| TestCaseError::fail(format!("delete failed: {err}")))?;
        degrees.push(degree);
    }
    if !remaining.is_empty() {
        return Err(TestCaseError::fail(format!(
            "{} nodes survived a full targeted attack",
            remaining.node_count()
        )));
    }
    Ok(degrees)
}
