//! The A* search over a [`SpatialGraph`](crate::SpatialGraph).
//!
//! The entry point is [`a_star_search`]; [`PathFinder`](crate::PathFinder)
//! is a thin front for it. All search state (the node arena, the frontier,
//! the closed set) lives inside a single call and is discarded when it
//! returns.

mod node;
pub(crate) use self::node::{NodeArena, SearchNode};

mod a_star;
pub use self::a_star::a_star_search;

use crate::Cost;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Frontier entry: arena key of a node and its f-cost at push time.
/// Ordered as a min-heap by f-cost; entries with outdated f-costs stay in
/// the heap and are discarded via the closed set when popped.
#[derive(PartialEq, Eq)]
pub(crate) struct HeuristicElement(pub usize, pub OrderedFloat<Cost>);
impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.cmp(&self.1)
    }
}
