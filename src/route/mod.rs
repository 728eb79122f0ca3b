//! Route planning across floors
//!
//! Composes single-floor searches through vertical-transfer nodes.

pub mod planner;

use crate::graph::{GraphError, NodeId};
use thiserror::Error;

pub use planner::RoutePlanner;

/// Errors that can occur while routing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// Search exhausted without reaching the goal, or no transfer node on
    /// the departure floor could be reached
    #[error("No path found from {from} to {to}")]
    NoPathFound { from: NodeId, to: NodeId },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type RouteResult<T> = Result<T, RouteError>;
