use crate::{Cost, Point, PointMap};

/// An undirected Graph of [`Point`]s in the 2D plane with weighted Edges.
///
/// The Graph is built incrementally with [`add_edge`](SpatialGraph::add_edge)
/// and [`add_edge_with_cost`](SpatialGraph::add_edge_with_cost); Vertices are
/// created implicitly as Edge endpoints. Once built, the Graph is read-only
/// during searches and may be shared between any number of concurrent
/// [`PathFinder`](crate::PathFinder)s, as long as no `add_edge` call races
/// with them.
///
/// Adjacency is always symmetric: inserting an Edge adds each endpoint to the
/// other's neighbor list with the same Cost. Neighbor lists keep insertion
/// order. Nothing is deduplicated: adding the same pair twice produces two
/// parallel Edges, and both are considered by the search (the cheaper one
/// wins).
///
/// ## Examples
/// Basic usage:
/// ```
/// use spatial_pathfinding::{Point, SpatialGraph};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
///
/// let mut graph = SpatialGraph::new();
/// graph.add_edge(a, b);
///
/// assert!(graph.has_vertex(a));
/// assert_eq!(graph.neighbors(a), &[(b, 5.0)]);
/// assert_eq!(graph.neighbors(b), &[(a, 5.0)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpatialGraph {
    adjacency: PointMap<Vec<(Point, Cost)>>,
}

impl SpatialGraph {
    /// Creates a new, empty SpatialGraph.
    pub fn new() -> SpatialGraph {
        Default::default()
    }

    /// Adds an undirected Edge between `a` and `b`, weighted by the Euclidean
    /// distance between them.
    ///
    /// Both Points become Vertices of the Graph if they weren't already.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use spatial_pathfinding::{Point, SpatialGraph};
    /// let mut graph = SpatialGraph::new();
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(1.0, 1.0);
    /// graph.add_edge(a, b);
    ///
    /// assert_eq!(graph.neighbors(a)[0].1, 2.0_f64.sqrt());
    /// ```
    pub fn add_edge(&mut self, a: Point, b: Point) {
        let cost = a.distance_to(b);
        self.add_edge_with_cost(a, b, cost);
    }

    /// Adds an undirected Edge between `a` and `b` with an explicit Cost.
    ///
    /// Use this when the travel Cost differs from the straight-line distance,
    /// e.g. a road with curves or a tunnel. The Cost is not validated: a Cost
    /// smaller than the Euclidean distance between the endpoints is accepted,
    /// but makes the search Heuristic inadmissible, so returned Paths are no
    /// longer guaranteed to be optimal.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use spatial_pathfinding::{Point, SpatialGraph};
    /// let mut graph = SpatialGraph::new();
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(0.0, 3.0);
    /// graph.add_edge_with_cost(a, b, 5.0); // a winding road
    ///
    /// assert_eq!(graph.neighbors(b), &[(a, 5.0)]);
    /// ```
    pub fn add_edge_with_cost(&mut self, a: Point, b: Point, cost: Cost) {
        self.adjacency.entry(a).or_default().push((b, cost));
        self.adjacency.entry(b).or_default().push((a, cost));
    }

    /// The neighbor list of `point`: every `(neighbor, cost)` pair recorded
    /// for it, in insertion order.
    ///
    /// Returns an empty slice if `point` is not a Vertex of the Graph.
    pub fn neighbors(&self, point: Point) -> &[(Point, Cost)] {
        self.adjacency.get(&point).map_or(&[], |list| list.as_slice())
    }

    /// `true` if `point` is a Vertex of this Graph.
    ///
    /// Note that Vertex identity is bit-exact, see [`Point`].
    pub fn has_vertex(&self, point: Point) -> bool {
        self.adjacency.contains_key(&point)
    }

    /// The number of Vertices in the Graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// An Iterator over all Vertices of the Graph, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.adjacency.keys().copied()
    }
}
