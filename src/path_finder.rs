use crate::{search, Path, Point, SpatialGraph};

/// The query front of the crate: finds Paths on a [`SpatialGraph`].
///
/// A PathFinder borrows the Graph and holds no other state, so it can be
/// created on the fly, copied freely and used for any number of independent
/// searches. Several PathFinders may search the same Graph from different
/// threads at the same time, as long as no
/// [`add_edge`](SpatialGraph::add_edge) call races with them.
///
/// ## Examples
/// Basic usage:
/// ```
/// use spatial_pathfinding::{PathFinder, Point, SpatialGraph};
///
/// // A 3x3 city block:
/// //
/// // G --- H --- I
/// // |     |     |
/// // D --- E --- F
/// // |     |     |
/// // A --- B --- C
/// let points: Vec<Point> = (0..9)
///     .map(|i| Point::new((i % 3) as f64, (i / 3) as f64))
///     .collect();
///
/// let mut graph = SpatialGraph::new();
/// for y in 0..3 {
///     for x in 0..2 {
///         graph.add_edge(points[y * 3 + x], points[y * 3 + x + 1]);
///         graph.add_edge(points[x * 3 + y], points[(x + 1) * 3 + y]);
///     }
/// }
///
/// let finder = PathFinder::new(&graph);
/// let path = finder.find_path(points[0], points[8]); // A to I
///
/// assert_eq!(path.len(), 5); // 4 unit steps
/// assert_eq!(path.cost, 4.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'g> {
    graph: &'g SpatialGraph,
}

impl<'g> PathFinder<'g> {
    /// Creates a PathFinder searching `graph`.
    pub fn new(graph: &'g SpatialGraph) -> PathFinder<'g> {
        PathFinder { graph }
    }

    /// The Graph this PathFinder searches.
    pub fn graph(&self) -> &'g SpatialGraph {
        self.graph
    }

    /// Finds the cheapest Path from `start` to `goal`.
    ///
    /// See [`a_star_search`](search::a_star_search) for the full contract;
    /// in short: the Path runs from `start` to `goal` inclusive, its Cost is
    /// the sum of the traversed Edge weights, and both "not a Vertex" and
    /// "no route" come back as [`Path::unreachable`].
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use spatial_pathfinding::{PathFinder, Point, SpatialGraph};
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// let mut graph = SpatialGraph::new();
    /// graph.add_edge(a, b);
    ///
    /// let path = PathFinder::new(&graph).find_path(a, b);
    ///
    /// assert_eq!(path.path, vec![a, b]);
    /// assert_eq!(path.cost, 5.0);
    /// ```
    pub fn find_path(&self, start: Point, goal: Point) -> Path<Point> {
        search::a_star_search(self.graph, start, goal)
    }
}
