//! Graph-arena error type.

use thiserror::Error;

use crate::ids::NodeId;

/// Errors produced by `pace-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;
