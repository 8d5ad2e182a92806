//! Adjacency-list loader producing directed graphs.
use std::{
    collections::BTreeSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use netfray_core::{Adjacency, DirectedGraph, NodeId};
use tracing::{debug, instrument, warn};

use crate::errors::AdjacencyProviderError;

/// Directed graph loaded from a whitespace-separated adjacency list.
///
/// Each line that starts with a node identifier lists that node followed by
/// the targets of its outgoing edges. Blank lines and lines starting with
/// whitespace are skipped.
#[derive(Debug, Clone)]
pub struct AdjacencyProvider {
    name: String,
    graph: DirectedGraph,
}

impl AdjacencyProvider {
    /// Loads an adjacency list from a file on disk.
    ///
    /// # Errors
    /// Returns [`AdjacencyProviderError::Io`] when the file cannot be opened
    /// or read, plus every error of [`Self::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, AdjacencyProviderError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Loads an adjacency list from any buffered reader.
    ///
    /// A later line for an already seen node replaces its earlier targets.
    ///
    /// # Errors
    /// Returns [`AdjacencyProviderError::InvalidToken`] for tokens that are
    /// not non-negative integers, [`AdjacencyProviderError::EmptyInput`] when
    /// no node lines were read, and [`AdjacencyProviderError::Graph`] when a
    /// node lists itself.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use netfray_providers_adjacency::AdjacencyProvider;
    ///
    /// let provider = AdjacencyProvider::try_from_reader("demo", Cursor::new("0 1 2\n1 2\n2\n"))?;
    /// assert_eq!(provider.graph().node_count(), 3);
    /// assert_eq!(provider.graph().edge_count(), 3);
    /// # Ok::<(), netfray_providers_adjacency::AdjacencyProviderError>(())
    /// ```
    #[instrument(name = "providers.adjacency.load", err, skip(name, reader), fields(name))]
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, AdjacencyProviderError> {
        let name = name.into();
        tracing::Span::current().record("name", name.as_str());

        let mut adjacency = Adjacency::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let Some((node, targets)) = parse_line(index + 1, &line)? else {
                continue;
            };
            if adjacency.insert(node, targets).is_some() {
                warn!(node, line = index + 1, "duplicate node line replaces earlier targets");
            }
        }
        if adjacency.is_empty() {
            return Err(AdjacencyProviderError::EmptyInput);
        }

        let graph = DirectedGraph::from_adjacency(adjacency)?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "adjacency list loaded"
        );
        Ok(Self { name, graph })
    }

    /// Returns the provider's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the loaded graph.
    #[must_use]
    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    /// Consumes the provider and returns the loaded graph.
    #[must_use]
    pub fn into_graph(self) -> DirectedGraph {
        self.graph
    }
}

/// Parses one input line. Returns `None` for skipped lines.
fn parse_line(
    line_number: usize,
    line: &str,
) -> Result<Option<(NodeId, BTreeSet<NodeId>)>, AdjacencyProviderError> {
    if line.trim().is_empty() || line.starts_with(char::is_whitespace) {
        return Ok(None);
    }
    let mut tokens = line
        .split_whitespace()
        .map(|token| parse_node(line_number, token));
    let Some(node) = tokens.next().transpose()? else {
        return Ok(None);
    };
    let targets = tokens.collect::<Result<BTreeSet<_>, _>>()?;
    Ok(Some((node, targets)))
}

fn parse_node(line: usize, token: &str) -> Result<NodeId, AdjacencyProviderError> {
    token
        .parse()
        .map_err(|_| AdjacencyProviderError::InvalidToken {
            line,
            token: token.to_owned(),
        })
}
