use spatial_pathfinding::prelude::*;

/// The 3x3 lattice of Points at integer coordinates (0,0)..(2,2), each
/// horizontally/vertically adjacent pair connected with an Edge of weight 1.
fn lattice() -> (SpatialGraph, Vec<Point>) {
    let points: Vec<Point> = (0..9)
        .map(|i| Point::new((i % 3) as f64, (i / 3) as f64))
        .collect();

    let mut graph = SpatialGraph::new();
    for y in 0..3 {
        for x in 0..2 {
            graph.add_edge_with_cost(points[y * 3 + x], points[y * 3 + x + 1], 1.0);
            graph.add_edge_with_cost(points[x * 3 + y], points[(x + 1) * 3 + y], 1.0);
        }
    }
    (graph, points)
}

/// Every consecutive pair of the Path must be a recorded Edge of the Graph;
/// returns the sum of the traversed Edge weights (cheapest where parallel).
fn traversal_cost(graph: &SpatialGraph, path: &[Point]) -> f64 {
    path.windows(2)
        .map(|step| {
            graph
                .neighbors(step[0])
                .iter()
                .filter(|&&(p, _)| p == step[1])
                .map(|&(_, cost)| cost)
                .fold(None, |best: Option<f64>, cost| {
                    Some(best.map_or(cost, |b| b.min(cost)))
                })
                .unwrap_or_else(|| panic!("{} -> {} is not an edge", step[0], step[1]))
        })
        .sum()
}

#[test]
fn lattice_corner_to_corner() {
    let (graph, points) = lattice();
    let finder = PathFinder::new(&graph);

    let path = finder.find_path(points[0], points[8]);

    assert_eq!(path.len(), 5);
    assert_eq!(path.cost, 4.0);
    assert_eq!(path[0], points[0]);
    assert_eq!(path[4], points[8]);
    assert_eq!(traversal_cost(&graph, &path), path.cost);
}

#[test]
fn lattice_same_start_and_goal() {
    let (graph, points) = lattice();
    let finder = PathFinder::new(&graph);

    for &p in &points {
        let path = finder.find_path(p, p);
        assert_eq!(path.path, vec![p]);
        assert_eq!(path.cost, 0.0);
    }
}

#[test]
fn lattice_all_pairs_are_connected_and_optimal() {
    let (graph, points) = lattice();
    let finder = PathFinder::new(&graph);

    for &start in &points {
        for &goal in &points {
            let path = finder.find_path(start, goal);

            assert_eq!(path[0], start);
            assert_eq!(path[path.len() - 1], goal);
            assert_eq!(traversal_cost(&graph, &path), path.cost);

            // unit edges: the optimal cost is the manhattan distance
            let manhattan = (start.x - goal.x).abs() + (start.y - goal.y).abs();
            assert_eq!(path.cost, manhattan);
        }
    }
}

#[test]
fn disconnected_components() {
    let mut graph = SpatialGraph::new();
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 0.0);
    let x = Point::new(10.0, 10.0);
    let y = Point::new(11.0, 10.0);
    graph.add_edge(a, b);
    graph.add_edge(x, y);

    let finder = PathFinder::new(&graph);
    let path = finder.find_path(a, y);

    assert!(path.is_unreachable());
    assert!(path.path.is_empty());
    assert!(path.cost.is_infinite());
}

#[test]
fn endpoints_outside_the_graph() {
    let (graph, points) = lattice();
    let finder = PathFinder::new(&graph);
    let outside = Point::new(7.0, 7.0);

    assert!(finder.find_path(points[0], outside).is_unreachable());
    assert!(finder.find_path(outside, points[0]).is_unreachable());
    assert!(finder.find_path(outside, outside).is_unreachable());
}

#[test]
fn stored_weight_defines_the_cost() {
    // straight-line distance 3, stored weight 5
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 0.0);
    let mut graph = SpatialGraph::new();
    graph.add_edge_with_cost(a, b, 5.0);

    let path = PathFinder::new(&graph).find_path(a, b);

    assert_eq!(path.path, vec![a, b]);
    assert_eq!(path.cost, 5.0);
}

#[test]
fn default_weights_follow_the_geometry() {
    // an L of two default-weighted edges vs. an explicit shortcut
    let a = Point::new(0.0, 0.0);
    let corner = Point::new(3.0, 0.0);
    let b = Point::new(3.0, 4.0);
    let mut graph = SpatialGraph::new();
    graph.add_edge(a, corner); // 3.0
    graph.add_edge(corner, b); // 4.0
    graph.add_edge_with_cost(a, b, 6.5);

    let path = PathFinder::new(&graph).find_path(a, b);

    assert_eq!(path.path, vec![a, b]);
    assert_eq!(path.cost, 6.5);
}

#[test]
fn parallel_edges_take_the_cheaper_one() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 0.0);
    let mut graph = SpatialGraph::new();
    graph.add_edge_with_cost(a, b, 9.0);
    graph.add_edge_with_cost(a, b, 4.0);

    let path = PathFinder::new(&graph).find_path(a, b);

    assert_eq!(path.cost, 4.0);
}

#[test]
fn graph_is_reusable_across_searches() {
    let (graph, points) = lattice();
    let finder = PathFinder::new(&graph);

    let first = finder.find_path(points[0], points[8]);
    let second = finder.find_path(points[0], points[8]);
    assert_eq!(first, second);

    // searches leave no trace on the graph
    assert_eq!(finder.graph().vertex_count(), 9);
}
