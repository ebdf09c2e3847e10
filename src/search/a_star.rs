use super::{HeuristicElement, NodeArena, SearchNode};
use crate::{Path, Point, PointSet, SpatialGraph};

use log::{debug, trace};
use ordered_float::OrderedFloat;
use std::collections::BinaryHeap;

/// Searches `graph` for the cheapest route from `start` to `goal` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
/// straight-line distance to `goal` as the Heuristic.
///
/// The returned Path runs from `start` to `goal` inclusive, and its Cost is
/// the sum of the traversed Edge weights. If `start` or `goal` is not a
/// Vertex of the Graph, or no route connects them, the
/// [`unreachable`](Path::unreachable) sentinel is returned instead; the two
/// cases are not distinguished. `a_star_search(p, p)` for any Vertex `p`
/// yields the single-element Path `[p]` with Cost `0`.
///
/// The Path is optimal as long as every Edge weight is at least the
/// straight-line distance between its endpoints. When several Paths share
/// the optimal Cost, which of them is returned is unspecified.
///
/// ## Examples
/// Basic usage:
/// ```
/// use spatial_pathfinding::{search::a_star_search, Point, SpatialGraph};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// let c = Point::new(2.0, 0.0);
///
/// let mut graph = SpatialGraph::new();
/// graph.add_edge(a, b);
/// graph.add_edge(b, c);
///
/// let path = a_star_search(&graph, a, c);
/// assert_eq!(path.path, vec![a, b, c]);
/// assert_eq!(path.cost, 2.0);
/// ```
pub fn a_star_search(graph: &SpatialGraph, start: Point, goal: Point) -> Path<Point> {
    if !graph.has_vertex(start) || !graph.has_vertex(goal) {
        debug!("search endpoints {} -> {} not both in the graph", start, goal);
        return Path::unreachable();
    }

    let size_hint = graph.vertex_count();
    let mut nodes = NodeArena::with_capacity(size_hint);
    let mut closed = PointSet::with_capacity(size_hint);
    let mut open = BinaryHeap::with_capacity(size_hint / 2);

    let start_id = nodes.insert(SearchNode::new(start, 0.0, start.distance_to(goal), None));
    open.push(HeuristicElement(start_id, OrderedFloat(nodes[start_id].f)));

    while let Some(HeuristicElement(current_id, _)) = open.pop() {
        let current = nodes[current_id];

        if current.point == goal {
            trace!(
                "reached {} after finalizing {} of {} discovered vertices",
                goal,
                closed.len(),
                nodes.len()
            );
            return reconstruct(&nodes, current_id);
        }

        // a stale frontier entry for an already finalized Vertex
        if !closed.insert(current.point) {
            continue;
        }

        for &(neighbor, edge_cost) in graph.neighbors(current.point) {
            if closed.contains(&neighbor) {
                continue;
            }
            let tentative_g = current.g + edge_cost;

            match nodes.id_at(neighbor) {
                None => {
                    let node =
                        SearchNode::new(neighbor, tentative_g, neighbor.distance_to(goal), Some(current_id));
                    let id = nodes.insert(node);
                    open.push(HeuristicElement(id, OrderedFloat(node.f)));
                }
                Some(id) => {
                    if tentative_g >= nodes[id].g {
                        continue;
                    }
                    // cheaper route found: update in place and push a fresh
                    // frontier entry, leaving the stale one to be skipped
                    nodes[id].relax(tentative_g, neighbor.distance_to(goal), current_id);
                    open.push(HeuristicElement(id, OrderedFloat(nodes[id].f)));
                }
            }
        }
    }

    debug!("frontier exhausted, {} is unreachable from {}", goal, start);
    Path::unreachable()
}

/// Walks the parent links from `goal_id` back to the start and reverses the
/// result into start -> goal order.
fn reconstruct(nodes: &NodeArena, goal_id: usize) -> Path<Point> {
    let mut steps = vec![];
    let mut current = Some(goal_id);

    while let Some(id) = current {
        steps.push(nodes[id].point);
        current = nodes[id].parent;
    }
    steps.reverse();

    Path::new(steps, nodes[goal_id].g)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A     B--2--E
    // |\
    // | \
    // 1  9
    // |   \
    // |    \
    // C--6--D
    fn diamond() -> (SpatialGraph, [Point; 5]) {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(0.0, 1.0);
        let d = Point::new(3.0, 1.0);
        let e = Point::new(6.0, 0.0);

        let mut graph = SpatialGraph::new();
        graph.add_edge_with_cost(a, c, 1.0);
        graph.add_edge_with_cost(a, d, 9.0);
        graph.add_edge_with_cost(c, d, 6.0);
        graph.add_edge_with_cost(b, e, 2.0);

        (graph, [a, b, c, d, e])
    }

    #[test]
    fn basic() {
        let (graph, [a, _, c, d, _]) = diamond();

        let path = a_star_search(&graph, a, d);

        assert_eq!(path.path, vec![a, c, d]);
        assert_eq!(path.cost, 7.0);
    }

    #[test]
    fn unreachable_goal() {
        let (graph, [a, _, _, _, e]) = diamond();

        let path = a_star_search(&graph, a, e);

        assert!(path.is_unreachable());
        assert!(path.path.is_empty());
    }

    #[test]
    fn unknown_vertex() {
        let (graph, [a, ..]) = diamond();
        let nowhere = Point::new(100.0, 100.0);

        assert!(a_star_search(&graph, a, nowhere).is_unreachable());
        assert!(a_star_search(&graph, nowhere, a).is_unreachable());
    }

    #[test]
    fn start_is_goal() {
        let (graph, [a, ..]) = diamond();

        let path = a_star_search(&graph, a, a);

        assert_eq!(path.path, vec![a]);
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn edge_weight_beats_heuristic() {
        // one Edge of weight 5 over a straight-line distance of 3: the
        // stored weight defines the Cost, not the Heuristic
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 3.0);
        let mut graph = SpatialGraph::new();
        graph.add_edge_with_cost(a, b, 5.0);

        let path = a_star_search(&graph, a, b);

        assert_eq!(path.path, vec![a, b]);
        assert_eq!(path.cost, 5.0);
    }

    #[test]
    fn detour_is_cheaper_than_direct() {
        // direct Edge is overpriced, the two-step route wins
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 0.0);
        let mid = Point::new(1.0, 0.0);
        let mut graph = SpatialGraph::new();
        graph.add_edge_with_cost(a, b, 10.0);
        graph.add_edge(a, mid);
        graph.add_edge(mid, b);

        let path = a_star_search(&graph, a, b);

        assert_eq!(path.path, vec![a, mid, b]);
        assert_eq!(path.cost, 2.0);
    }

    #[test]
    fn parallel_edges_use_the_cheaper() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let mut graph = SpatialGraph::new();
        graph.add_edge_with_cost(a, b, 5.0);
        graph.add_edge_with_cost(a, b, 2.0);

        let path = a_star_search(&graph, a, b);

        assert_eq!(path.path, vec![a, b]);
        assert_eq!(path.cost, 2.0);
    }
}
