use thiserror::Error;

/// Possible errors that arise when clustering a distance matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// The distance matrix or the clustering parameters are malformed: the matrix is empty,
    /// not square, not symmetric, contains negative or NaN distances, or the requested number
    /// of clusters or start node is out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Prim's algorithm could not reach every point from the start node, because some
    /// distances are infinite (absent edges).
    #[error("Graph is disconnected: only {reached} of {n_samples} points are reachable")]
    DisconnectedGraph { reached: usize, n_samples: usize },
}
