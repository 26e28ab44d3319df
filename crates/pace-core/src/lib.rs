//! `pace-core`: path-network graph arena and typed records.
//!
//! The acquisition pipeline (outside this workspace) produces a walkable or
//! runnable street network with edge lengths, edge grades, and node
//! elevations already populated.  This crate holds that network as plain
//! indexed records so downstream passes (`pace-metrics`) can read node data
//! and write derived edge attributes with no hashing or locking.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `EdgeId`                                    |
//! | [`node`]    | `PathNode`                                            |
//! | [`edge`]    | `PathEdge`, `EdgeAttributes`, `EdgeMetrics`           |
//! | [`graph`]   | `PathGraph` multigraph arena                          |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod edge;
pub mod error;
pub mod graph;
pub mod ids;
pub mod node;

#[cfg(test)]
mod tests;

pub use edge::{EdgeAttributes, EdgeMetrics, PathEdge};
pub use error::{GraphError, GraphResult};
pub use graph::PathGraph;
pub use ids::{EdgeId, NodeId};
pub use node::PathNode;
