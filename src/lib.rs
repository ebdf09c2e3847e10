#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate for finding shortest Paths between Points on a weighted Graph
//! embedded in 2D space.
//!
//! ## Introduction
//! The Graph in this crate is a road-network style structure: Vertices are
//! [`Point`]s in the plane, and Edges are bidirectional connections between
//! them carrying a Cost. The Cost of an Edge defaults to the straight-line
//! (Euclidean) distance between its endpoints, but callers may supply their
//! own (a winding road is longer than the straight line; a highway across
//! the same distance may be cheaper to travel).
//!
//! Searches use the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! with the straight-line distance to the goal as the Heuristic. As long as
//! every Edge Cost is at least the straight-line distance between its
//! endpoints (always true for default-weighted Edges), the Heuristic never
//! overestimates and the returned Path is optimal.
//!
//! ## Examples
//! Building a Graph and finding a Path:
//! ```
//! use spatial_pathfinding::{PathFinder, Point, SpatialGraph};
//!
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(1.0, 0.0);
//! let c = Point::new(1.0, 1.0);
//!
//! let mut graph = SpatialGraph::new();
//! graph.add_edge(a, b); // weighted by distance: 1.0
//! graph.add_edge(b, c); // 1.0
//!
//! let finder = PathFinder::new(&graph);
//! let path = finder.find_path(a, c);
//!
//! assert_eq!(path.path, vec![a, b, c]);
//! assert_eq!(path.cost, 2.0);
//! ```
//!
//! There is no "not found" error: searching to or from a Point that is not
//! part of the Graph, or between two disconnected regions, returns an empty
//! Path with infinite Cost:
//! ```
//! # use spatial_pathfinding::{PathFinder, Point, SpatialGraph};
//! let mut graph = SpatialGraph::new();
//! graph.add_edge(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
//!
//! let finder = PathFinder::new(&graph);
//! let path = finder.find_path(Point::new(0.0, 0.0), Point::new(5.0, 5.0));
//!
//! assert!(path.is_unreachable());
//! assert!(path.cost.is_infinite());
//! ```
//!
//! ## Vertex identity
//! Points are compared and hashed by the bit patterns of their coordinates.
//! Two Points are the same Vertex exactly when both coordinates are
//! bit-identical; there is no epsilon tolerance. See [`Point`] for the
//! details of this contract.

/// The type used to measure Edge weights and Path Costs.
pub type Cost = f64;

mod point;
pub use self::point::Point;

mod graph;
pub use self::graph::SpatialGraph;

mod path;
pub use self::path::Path;

pub mod search;

mod path_finder;
pub use self::path_finder::PathFinder;

pub(crate) type PointMap<V> = hashbrown::HashMap<Point, V>;
pub(crate) type PointSet = hashbrown::HashSet<Point>;

/// Convenience imports for the common use case
pub mod prelude {
    pub use crate::{Path, PathFinder, Point, SpatialGraph};
}
