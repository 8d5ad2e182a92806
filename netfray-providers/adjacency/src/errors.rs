use netfray_core::GraphError;
use thiserror::Error;

/// Failures raised while loading an adjacency-list file.
#[derive(Debug, Error)]
pub enum AdjacencyProviderError {
    #[error("line {line}: `{token}` is not a node identifier")]
    InvalidToken { line: usize, token: String },
    #[error("adjacency input contains no node lines")]
    EmptyInput,
    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
