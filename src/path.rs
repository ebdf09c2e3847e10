use crate::Cost;

/// A Path through a Graph.
///
/// Stores a sequence of Vertices in `path` and the total Cost of traversing
/// them in `cost`. Note that the individual Costs of the steps within the
/// Path cannot be retrieved through this struct.
///
/// A search that found no route returns the
/// [`unreachable`](Path::unreachable) sentinel: an empty sequence with
/// infinite Cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    /// the sequence of Vertices, from start to goal inclusive
    pub path: Vec<P>,
    /// the total Cost of the Path
    pub cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Vertices and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use spatial_pathfinding::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 42.0);
    ///
    /// assert_eq!(path.path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost, 42.0);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// creates the "no Path exists" sentinel: an empty sequence with Cost
    /// `+inf`
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use spatial_pathfinding::Path;
    /// let path: Path<char> = Path::unreachable();
    ///
    /// assert!(path.path.is_empty());
    /// assert!(path.cost.is_infinite());
    /// ```
    pub fn unreachable() -> Path<P> {
        Path {
            path: Vec::new(),
            cost: Cost::INFINITY,
        }
    }

    /// `true` if this Path is the [`unreachable`](Path::unreachable) sentinel
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use spatial_pathfinding::Path;
    /// assert!(Path::<char>::unreachable().is_unreachable());
    /// assert!(!Path::new(vec!['a'], 0.0).is_unreachable());
    /// ```
    pub fn is_unreachable(&self) -> bool {
        self.cost.is_infinite()
    }

    /// appends a Vertex to the Path, adding its Cost to the total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use spatial_pathfinding::Path;
    /// let mut path = Path::new(vec!['a', 'b', 'c'], 42.0);
    /// path.append('d', 5.0);
    ///
    /// assert_eq!(path.path, vec!['a', 'b', 'c', 'd']);
    /// assert_eq!(path.cost, 47.0);
    /// ```
    pub fn append(&mut self, vertex: P, cost: Cost) -> &mut Self {
        self.path.push(vertex);
        self.cost += cost;
        self
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        Some(self.cost.total_cmp(&other.cost))
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
