use crate::Cost;

/// A position in the 2D plane, used as the Vertex type of a
/// [`SpatialGraph`](crate::SpatialGraph).
///
/// ## Equality and hashing
/// Points are plain values: two independently constructed Points with the
/// same coordinates are the same Vertex. Comparison and hashing use the bit
/// patterns of both coordinates, so coordinates must be **bit-identical** to
/// collide; there is no epsilon tolerance. Values that are numerically close
/// (or equal after rounding in display) but not bit-identical are distinct
/// Vertices. In particular `0.0` and `-0.0` are different Points under this
/// contract, even though `0.0 == -0.0` holds for `f64`.
///
/// Coordinates are expected to be finite. Non-finite coordinates are not
/// rejected, but distances involving them are meaningless.
///
/// ## Examples
/// Basic usage:
/// ```
/// use spatial_pathfinding::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
///
/// assert_eq!(a.distance_to(b), 5.0);
/// assert_eq!(b, Point::new(3.0, 4.0));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    /// the x coordinate
    pub x: f64,
    /// the y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a new Point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// The Euclidean (straight-line) distance from this Point to `other`.
    ///
    /// This is the default Edge weight of a [`SpatialGraph`](crate::SpatialGraph)
    /// and the Heuristic of the A* search.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use spatial_pathfinding::Point;
    /// let a = Point::new(1.0, 1.0);
    /// let b = Point::new(4.0, 5.0);
    ///
    /// assert_eq!(a.distance_to(b), 5.0);
    /// assert_eq!(b.distance_to(a), 5.0);
    /// assert_eq!(a.distance_to(a), 0.0);
    /// ```
    pub fn distance_to(self, other: Point) -> Cost {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}
impl Eq for Point {}

use std::hash::{Hash, Hasher};
impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.x.to_bits());
        state.write_u64(self.y.to_bits());
    }
}

use std::fmt;
impl fmt::Display for Point {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.x, self.y)
    }
}
