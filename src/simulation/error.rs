//! Error type for resource graph operations.

use thiserror::Error;

use super::types::NodeId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("invalid graph construction: {0}")]
    InvalidConstruction(String),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("no edge from node {0} to node {1}")]
    EdgeNotFound(NodeId, NodeId),

    #[error("capacity exceeded on edge ({0}, {1})")]
    CapacityExceeded(NodeId, NodeId),

    #[error("path must contain at least two nodes, got {0}")]
    PathTooShort(usize),

    #[error("node {node} would hold {people} people and {cars} cars, outside its capacity")]
    NodeCapacityViolated { node: NodeId, people: i64, cars: i64 },

    #[error("elapsed time must be finite and non-negative, got {0}")]
    InvalidElapsedTime(f64),
}

/// Shorthand result type for resource graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
