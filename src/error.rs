//! Error types for graph construction, persistence and configuration

use thiserror::Error;

/// Malformed graph input, raised before any clique computation starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGraphError {
    #[error("edge ({u}, {v}) references a node outside 0..{node_count}")]
    NodeOutOfRange { u: usize, v: usize, node_count: usize },

    #[error("self-loop on node {0}")]
    SelfLoop(usize),

    #[error("duplicate edge ({0}, {1})")]
    DuplicateEdge(usize, usize),

    #[error("graph has {node_count} nodes, limit is {limit}")]
    TooManyNodes { node_count: usize, limit: usize },

    #[error("one-hot encoding has length {actual}, expected {expected} for {node_count} nodes")]
    EncodingLength {
        node_count: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] InvalidGraphError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
