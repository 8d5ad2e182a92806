//! Adjacency-set graph store.
//!
//! A [`Graph`] maps each node identifier to the set of its neighbours.
//! Directedness lives in the type parameter: [`DirectedGraph`] stores
//! outgoing edges only, while [`UndirectedGraph`] keeps a symmetric adjacency
//! set. Every construction and mutation path rejects self-loops, so a node's
//! degree never exceeds `node_count - 1`.
//!
//! Adjacency is held in ordered collections. Node enumeration is therefore
//! ascending and deterministic, which keeps seeded generators and attack
//! orders reproducible across runs.

mod orientation;

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    marker::PhantomData,
};

use tracing::instrument;

use crate::error::{GraphError, Result};

pub use self::orientation::{Directed, Orientation, Undirected};

/// Identifier of a node within a [`Graph`].
pub type NodeId = usize;

/// Raw adjacency map: node to neighbour set.
pub type Adjacency = BTreeMap<NodeId, BTreeSet<NodeId>>;

/// Graph storing outgoing edges only.
pub type DirectedGraph = Graph<Directed>;

/// Graph storing a symmetric adjacency set.
pub type UndirectedGraph = Graph<Undirected>;

/// An in-memory graph held as adjacency sets.
///
/// `Clone` performs a deep copy of every adjacency set: mutating a clone never
/// affects the original.
///
/// # Examples
/// ```
/// use netfray_core::UndirectedGraph;
///
/// let original = UndirectedGraph::complete(3);
/// let mut copy = original.clone();
/// copy.delete_node(0).expect("node 0 exists");
/// assert_eq!(original.node_count(), 3);
/// assert_eq!(copy.node_count(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Graph<O: Orientation> {
    adjacency: Adjacency,
    orientation: PhantomData<O>,
}

impl<O: Orientation> Default for Graph<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Orientation> fmt::Debug for Graph<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("orientation", &O::LABEL)
            .field("adjacency", &self.adjacency)
            .finish()
    }
}

impl<O: Orientation> Graph<O> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: Adjacency::new(),
            orientation: PhantomData,
        }
    }

    /// Creates a graph with nodes `0..node_count` and no edges.
    #[must_use]
    pub fn isolated(node_count: usize) -> Self {
        Self {
            adjacency: (0..node_count).map(|node| (node, BTreeSet::new())).collect(),
            orientation: PhantomData,
        }
    }

    /// Creates the complete graph on nodes `0..node_count`.
    ///
    /// Every ordered pair (directed) or unordered pair (undirected) of
    /// distinct nodes is an edge. `node_count == 0` yields the empty graph.
    ///
    /// # Examples
    /// ```
    /// use netfray_core::{DirectedGraph, UndirectedGraph};
    ///
    /// assert_eq!(DirectedGraph::complete(4).edge_count(), 12);
    /// assert_eq!(UndirectedGraph::complete(4).edge_count(), 6);
    /// assert!(UndirectedGraph::complete(0).is_empty());
    /// ```
    #[must_use]
    pub fn complete(node_count: usize) -> Self {
        let adjacency = (0..node_count)
            .map(|node| {
                let neighbours = (0..node_count).filter(|&other| other != node).collect();
                (node, neighbours)
            })
            .collect();
        Self {
            adjacency,
            orientation: PhantomData,
        }
    }

    /// Builds a graph from an explicit adjacency map.
    ///
    /// Directed graphs may list targets that are not keys of the map; such
    /// targets only ever appear as edge endpoints. Undirected graphs must be
    /// closed and symmetric.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when a node lists itself. For
    /// undirected graphs, returns [`GraphError::NodeNotFound`] when a neighbour
    /// is not a key and [`GraphError::AsymmetricEdge`] when an edge is listed
    /// in one direction only.
    #[instrument(
        name = "graph.from_adjacency",
        level = "debug",
        err,
        skip(adjacency),
        fields(orientation = O::LABEL, nodes = adjacency.len()),
    )]
    pub fn from_adjacency(adjacency: Adjacency) -> Result<Self> {
        for (&node, neighbours) in &adjacency {
            if neighbours.contains(&node) {
                return Err(GraphError::SelfLoop { node });
            }
            if O::DIRECTED {
                continue;
            }
            for &neighbour in neighbours {
                let back = adjacency
                    .get(&neighbour)
                    .ok_or(GraphError::NodeNotFound { node: neighbour })?;
                if !back.contains(&node) {
                    return Err(GraphError::AsymmetricEdge {
                        from: node,
                        to: neighbour,
                    });
                }
            }
        }
        Ok(Self {
            adjacency,
            orientation: PhantomData,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` when `node` is present.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Iterates over node identifiers in ascending order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates over `(node, neighbours)` pairs in ascending node order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeId, &BTreeSet<NodeId>)> + '_ {
        self.adjacency
            .iter()
            .map(|(&node, neighbours)| (node, neighbours))
    }

    /// Returns the neighbour set of `node`, or `None` when it is absent.
    ///
    /// For directed graphs this is the outgoing set.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> Option<&BTreeSet<NodeId>> {
        self.adjacency.get(&node)
    }

    /// Returns the degree (out-degree for directed graphs) of `node`.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> Option<usize> {
        self.adjacency.get(&node).map(BTreeSet::len)
    }

    /// Returns the number of edges.
    ///
    /// Directed graphs count every outgoing entry; undirected graphs count
    /// each symmetric pair once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(BTreeSet::len).sum();
        if O::DIRECTED { entries } else { entries / 2 }
    }

    /// Returns node and edge counts for reporting.
    #[must_use]
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            orientation: O::LABEL,
            nodes: self.node_count(),
            edges: self.edge_count(),
        }
    }

    /// Borrows the underlying adjacency map.
    #[must_use]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Consumes the graph and returns its adjacency map.
    #[must_use]
    pub fn into_adjacency(self) -> Adjacency {
        self.adjacency
    }

    /// Adds the edge `source -> target`, and `target -> source` when
    /// undirected. Both endpoints must already be present and distinct.
    pub(crate) fn connect(&mut self, source: NodeId, target: NodeId) {
        debug_assert_ne!(source, target, "self-loops are never generated");
        if let Some(neighbours) = self.adjacency.get_mut(&source) {
            neighbours.insert(target);
        }
        if !O::DIRECTED {
            if let Some(neighbours) = self.adjacency.get_mut(&target) {
                neighbours.insert(source);
            }
        }
    }

    /// Checks that `node` may be inserted with `neighbours`, leaving the graph
    /// untouched.
    fn validate_insertion(&self, node: NodeId, neighbours: &BTreeSet<NodeId>) -> Result<()> {
        if self.contains(node) {
            return Err(GraphError::invalid_argument(format!(
                "node {node} is already present"
            )));
        }
        if neighbours.contains(&node) {
            return Err(GraphError::SelfLoop { node });
        }
        if let Some(&missing) = neighbours.iter().find(|&&n| !self.contains(n)) {
            return Err(GraphError::NodeNotFound { node: missing });
        }
        Ok(())
    }
}

impl Graph<Undirected> {
    /// Inserts `node` adjacent to every node in `neighbors`, adding `node`
    /// back into each neighbour's set.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when a neighbour is absent,
    /// [`GraphError::SelfLoop`] when `node` lists itself, and
    /// [`GraphError::InvalidArgument`] when `node` already exists. The graph
    /// is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use netfray_core::UndirectedGraph;
    ///
    /// let mut graph = UndirectedGraph::complete(2);
    /// graph.add_node(2, [0, 1]).expect("neighbours exist");
    /// assert_eq!(graph.edge_count(), 3);
    /// assert!(graph.neighbors(0).is_some_and(|set| set.contains(&2)));
    /// ```
    pub fn add_node(
        &mut self,
        node: NodeId,
        neighbors: impl IntoIterator<Item = NodeId>,
    ) -> Result<()> {
        let neighbours: BTreeSet<NodeId> = neighbors.into_iter().collect();
        self.validate_insertion(node, &neighbours)?;
        for &neighbour in &neighbours {
            if let Some(back) = self.adjacency.get_mut(&neighbour) {
                back.insert(node);
            }
        }
        self.adjacency.insert(node, neighbours);
        Ok(())
    }

    /// Removes `node` and every edge touching it, returning its former
    /// neighbours.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `node` is absent.
    pub fn delete_node(&mut self, node: NodeId) -> Result<BTreeSet<NodeId>> {
        let neighbours = self
            .adjacency
            .remove(&node)
            .ok_or(GraphError::NodeNotFound { node })?;
        for neighbour in &neighbours {
            if let Some(back) = self.adjacency.get_mut(neighbour) {
                back.remove(&node);
            }
        }
        Ok(neighbours)
    }
}

impl Graph<Directed> {
    /// Inserts `node` with outgoing edges to every node in `targets`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when a target is absent,
    /// [`GraphError::SelfLoop`] when `node` targets itself, and
    /// [`GraphError::InvalidArgument`] when `node` already exists.
    pub fn insert_node(
        &mut self,
        node: NodeId,
        targets: impl IntoIterator<Item = NodeId>,
    ) -> Result<()> {
        let targets: BTreeSet<NodeId> = targets.into_iter().collect();
        self.validate_insertion(node, &targets)?;
        self.adjacency.insert(node, targets);
        Ok(())
    }

    /// Returns the symmetric closure of this graph.
    ///
    /// Every edge target becomes a node, including targets that had no
    /// adjacency entry of their own.
    ///
    /// # Examples
    /// ```
    /// use std::collections::{BTreeMap, BTreeSet};
    /// use netfray_core::DirectedGraph;
    ///
    /// let adjacency = BTreeMap::from([(0, BTreeSet::from([1, 2]))]);
    /// let directed = DirectedGraph::from_adjacency(adjacency).expect("no self-loops");
    /// let undirected = directed.to_undirected();
    /// assert_eq!(undirected.node_count(), 3);
    /// assert_eq!(undirected.edge_count(), 2);
    /// ```
    #[must_use]
    pub fn to_undirected(&self) -> UndirectedGraph {
        let mut adjacency = self.adjacency.clone();
        for (&source, targets) in &self.adjacency {
            for &target in targets {
                adjacency.entry(target).or_default().insert(source);
            }
        }
        Graph {
            adjacency,
            orientation: PhantomData,
        }
    }
}

/// Node and edge counts of a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphSummary {
    /// `"directed"` or `"undirected"`.
    pub orientation: &'static str,
    /// Number of nodes.
    pub nodes: usize,
    /// Number of edges.
    pub edges: usize,
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} graph with {} nodes and {} edges",
            self.orientation, self.nodes, self.edges
        )
    }
}
