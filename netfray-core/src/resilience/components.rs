//! Breadth-first connected-component discovery.

use std::collections::{BTreeSet, VecDeque};

use crate::{
    error::{GraphError, Result},
    graph::{NodeId, UndirectedGraph},
};

/// Returns every node reachable from `start`, including `start`.
///
/// # Errors
/// Returns [`GraphError::NodeNotFound`] when `start` is absent.
///
/// # Examples
/// ```
/// use netfray_core::{UndirectedGraph, bfs_component};
///
/// let mut graph = UndirectedGraph::complete(3);
/// graph.add_node(3, []).expect("isolated node");
/// let component = bfs_component(&graph, 0).expect("node 0 exists");
/// assert_eq!(component.len(), 3);
/// assert!(!component.contains(&3));
/// ```
pub fn bfs_component(graph: &UndirectedGraph, start: NodeId) -> Result<BTreeSet<NodeId>> {
    if !graph.contains(start) {
        return Err(GraphError::NodeNotFound { node: start });
    }
    Ok(visit_from(graph, start))
}

fn visit_from(graph: &UndirectedGraph, start: NodeId) -> BTreeSet<NodeId> {
    let mut visited = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        let Some(neighbours) = graph.neighbors(node) else {
            continue;
        };
        for &neighbour in neighbours {
            if visited.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }
    visited
}

/// Partitions the graph into connected components.
///
/// Components are pairwise disjoint and their union is the full node set.
/// Each component is discovered from its smallest unvisited node, so the
/// list is ordered by smallest member.
#[must_use]
pub fn connected_components(graph: &UndirectedGraph) -> Vec<BTreeSet<NodeId>> {
    let mut unvisited: BTreeSet<NodeId> = graph.nodes().collect();
    let mut components = Vec::new();
    while let Some(start) = unvisited.pop_first() {
        let component = visit_from(graph, start);
        for node in &component {
            unvisited.remove(node);
        }
        components.push(component);
    }
    components
}

/// Returns the size of the largest connected component, or 0 for the empty
/// graph.
#[must_use]
pub fn largest_component_size(graph: &UndirectedGraph) -> usize {
    connected_components(graph)
        .iter()
        .map(BTreeSet::len)
        .max()
        .unwrap_or(0)
}
