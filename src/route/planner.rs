//! Cross-floor route planner
//!
//! Same-floor requests go straight to A*. For a different floor the planner
//! searches from the start to every transfer node on the start's floor and
//! keeps the cheapest. The returned route ends at that transfer node: the
//! leg on the destination floor is not planned.

use super::{RouteError, RouteResult};
use crate::algo::{build_view, find_path_in, PathResult};
use crate::config::NavigatorConfig;
use crate::graph::{GraphError, GraphStore, NodeId};
use tracing::debug;
use wayfinder_algorithms::GraphView;

/// Plans routes over one snapshot of a [`GraphStore`]
///
/// The view is built once on construction, so a planner should not outlive
/// a mutation of the store it borrows (the borrow checker enforces this).
pub struct RoutePlanner<'a> {
    store: &'a GraphStore,
    view: GraphView,
    config: &'a NavigatorConfig,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(store: &'a GraphStore, config: &'a NavigatorConfig) -> Self {
        Self {
            store,
            view: build_view(store),
            config,
        }
    }

    /// Single-floor search between two nodes
    pub fn find_path(&self, from: NodeId, to: NodeId) -> RouteResult<PathResult> {
        find_path_in(&self.view, from, to, self.config.cost_metric)
    }

    /// Route from `from` towards `to`
    ///
    /// When the floors differ the result stops at the cheapest reachable
    /// transfer node on the departure floor.
    pub fn plan(&self, from: NodeId, to: NodeId) -> RouteResult<PathResult> {
        let start = self.store.get_node(from).ok_or(GraphError::NodeNotFound(from))?;
        let goal = self.store.get_node(to).ok_or(GraphError::NodeNotFound(to))?;

        if start.floor == goal.floor {
            return self.find_path(from, to);
        }

        let transfers = self
            .store
            .find_by_tag(&self.config.transfer_tag, &start.floor);
        debug!(
            "Routing {} (floor {}) -> {} (floor {}) via {} transfer candidate(s)",
            from,
            start.floor,
            to,
            goal.floor,
            transfers.len()
        );

        // Unreachable candidates simply contribute no route
        let mut candidates: Vec<PathResult> = transfers
            .into_iter()
            .filter_map(|transfer| self.find_path(from, transfer).ok())
            .collect();

        if candidates.len() == 1 {
            return Ok(candidates.remove(0));
        }

        cheapest(candidates).ok_or(RouteError::NoPathFound { from, to })
    }
}

/// The first route with the lowest terminal cost
fn cheapest(routes: Vec<PathResult>) -> Option<PathResult> {
    let mut best: Option<PathResult> = None;
    for route in routes {
        match &best {
            Some(current) if route.cost >= current.cost => {}
            _ => best = Some(route),
        }
    }
    best
}
