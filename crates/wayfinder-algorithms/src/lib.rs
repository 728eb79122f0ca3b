pub mod common;
pub mod pathfinding;

pub use common::{GraphView, Metric, NodeId, Position};
pub use pathfinding::{a_star, PathResult};
