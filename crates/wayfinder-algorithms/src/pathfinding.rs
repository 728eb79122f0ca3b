//! Pathfinding algorithms
//!
//! A* search over a [`GraphView`]. Edge cost and heuristic both come from
//! the same [`Metric`]; with the default squared metric the heuristic is
//! not admissible, so the returned path is a close approximation rather
//! than a guaranteed optimum on graphs with uneven edge lengths.

use super::common::{GraphView, Metric, NodeId};
use std::collections::HashMap;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    pub path: Vec<NodeId>,
    /// Accumulated cost of the terminal node (its `f`, where `h` is zero)
    pub cost: f64,
}

/// Transient per-node search fields, scoped to one invocation
#[derive(Debug, Clone, Copy)]
struct SearchRecord {
    g: f64,
    h: f64,
    f: f64,
    parent: Option<usize>,
}

/// Index into `open` of the entry with the least `f`.
///
/// Ties go to the first entry encountered, so results depend only on
/// insertion order and never on hashing.
fn least_f(open: &[usize], records: &HashMap<usize, SearchRecord>) -> usize {
    let mut best = 0;
    let mut best_f = f64::INFINITY;
    for (i, idx) in open.iter().enumerate() {
        let f = records.get(idx).map_or(f64::INFINITY, |r| r.f);
        if f < best_f {
            best_f = f;
            best = i;
        }
    }
    best
}

/// A* shortest path between two nodes of the view.
///
/// Returns `None` if either node is not in the view or the open set empties
/// before the target is dequeued. A node already scheduled keeps its
/// predecessor unless a strictly cheaper `g` is found later.
pub fn a_star(
    view: &GraphView,
    source: NodeId,
    target: NodeId,
    metric: Metric,
) -> Option<PathResult> {
    let source_idx = *view.node_to_index.get(&source)?;
    let target_idx = *view.node_to_index.get(&target)?;

    if source_idx == target_idx {
        return Some(PathResult {
            source,
            target,
            path: vec![source],
            cost: 0.0,
        });
    }

    let goal = view.position(target_idx);
    let mut records: HashMap<usize, SearchRecord> = HashMap::new();
    let mut closed = vec![false; view.node_count];
    let mut open = vec![source_idx];

    let h = metric.distance(view.position(source_idx), goal);
    records.insert(source_idx, SearchRecord { g: 0.0, h, f: h, parent: None });

    while !open.is_empty() {
        // Vec::remove keeps the remaining order intact for the tie-break
        let current = open.remove(least_f(&open, &records));
        let current_g = records.get(&current).map_or(0.0, |r| r.g);

        if current == target_idx {
            let mut path = Vec::new();
            let mut curr = Some(target_idx);
            while let Some(idx) = curr {
                path.push(view.index_to_node[idx]);
                curr = records.get(&idx).and_then(|r| r.parent);
            }
            path.reverse();
            return Some(PathResult {
                source,
                target,
                path,
                cost: records.get(&target_idx).map_or(current_g, |r| r.f),
            });
        }

        closed[current] = true;
        let here = view.position(current);

        for &next in view.neighbors(current) {
            if closed[next] {
                continue;
            }

            let g = current_g + metric.distance(here, view.position(next));
            if let Some(existing) = records.get(&next) {
                if existing.g <= g {
                    continue;
                }
            }

            let h = metric.distance(view.position(next), goal);
            records.insert(next, SearchRecord { g, h, f: g + h, parent: Some(current) });

            if !open.contains(&next) {
                open.push(next);
            }
        }
    }

    None
}
