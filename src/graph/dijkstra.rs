use super::*;
use crate::{CancelToken, Error, Path, Result};

use log::{debug, trace};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the frontier. Orders by lowest Cost first, then by name.
#[derive(PartialEq, Eq)]
struct Element<'a> {
    id: NodeId,
    cost: OrderedFloat<f64>,
    name: &'a str,
}
impl PartialOrd for Element<'_> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Element<'_> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.cost
            .cmp(&self.cost)
            .then_with(|| rhs.name.cmp(self.name))
    }
}

/// Best known Cost and predecessor of a Node during a single search.
///
/// Nodes without an entry have not been reached yet (Cost = infinity, no predecessor).
#[derive(Clone, Copy, Debug)]
struct Visit {
    cost: f64,
    prev: Option<NodeId>,
}

/// Searches the shortest Path from `start` to `goal` using
/// [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// All search state lives in this call, so any number of searches may run on the same
/// `nodes` at once. Between Paths of equal Cost, the one settling lexicographically smaller
/// names first wins, which makes the result deterministic.
///
/// Returns `Ok(None)` if `goal` cannot be reached and [`Error::Cancelled`] as soon as
/// `cancel` is set.
pub(crate) fn dijkstra_search(
    nodes: &NodeList,
    start: NodeId,
    goal: NodeId,
    cancel: &CancelToken,
) -> Result<Option<Path<NodeId>>> {
    let mut visited = node_id_map_with_cap::<Visit>(nodes.len());
    let mut settled = NodeIdSet::default();
    let mut next = BinaryHeap::new();

    visited.insert(
        start,
        Visit {
            cost: 0.0,
            prev: None,
        },
    );
    next.push(Element {
        id: start,
        cost: OrderedFloat(0.0),
        name: nodes[start].name(),
    });

    while let Some(Element { id: current_id, cost, .. }) = next.pop() {
        if cancel.is_cancelled() {
            debug!("search from {} cancelled after {} nodes", nodes[start], settled.len());
            return Err(Error::Cancelled);
        }
        let current_cost = cost.into_inner();
        if current_cost > visited[&current_id].cost || !settled.insert(current_id) {
            // outdated entry
            continue;
        }
        trace!("settled {} at {:.2}", nodes[current_id], current_cost);

        if current_id == goal {
            break;
        }

        for edge in nodes.incident(current_id) {
            let other_id = edge.other(current_id);
            if settled.contains(&other_id) {
                continue;
            }
            let other_cost = current_cost + edge.length();

            let improved = match visited.get_mut(&other_id) {
                Some(visit) if visit.cost <= other_cost => false,
                Some(visit) => {
                    visit.cost = other_cost;
                    visit.prev = Some(current_id);
                    true
                }
                None => {
                    visited.insert(
                        other_id,
                        Visit {
                            cost: other_cost,
                            prev: Some(current_id),
                        },
                    );
                    true
                }
            };

            if improved {
                next.push(Element {
                    id: other_id,
                    cost: OrderedFloat(other_cost),
                    name: nodes[other_id].name(),
                });
            }
        }
    }

    if !settled.contains(&goal) {
        debug!(
            "no path from {} to {}, settled {} nodes",
            nodes[start],
            nodes[goal],
            settled.len()
        );
        return Ok(None);
    }

    let steps = {
        let mut steps = vec![goal];
        let mut current = goal;

        while let Some(prev) = visited[&current].prev {
            steps.push(prev);
            current = prev;
        }
        steps.reverse();
        steps
    };

    let cost = visited[&goal].cost;
    debug!(
        "path from {} to {}: {} nodes, {:.2}m, settled {} nodes",
        nodes[start],
        nodes[goal],
        steps.len(),
        cost,
        settled.len()
    );
    Ok(Some(Path::new(steps, cost)))
}
