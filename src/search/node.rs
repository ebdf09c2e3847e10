use crate::{Cost, Point, PointMap};

/// Cost bookkeeping for a single Vertex discovered during one search.
///
/// `parent` is the arena key of the node this one was best reached from.
/// Parents always point at earlier-discovered nodes, so following them from
/// any node reaches the start without cycles.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode {
    pub point: Point,
    /// best known Cost from the start to this Vertex
    pub g: Cost,
    /// straight-line distance from this Vertex to the goal
    pub h: Cost,
    /// `g + h`, the frontier priority
    pub f: Cost,
    pub parent: Option<usize>,
}

impl SearchNode {
    pub fn new(point: Point, g: Cost, h: Cost, parent: Option<usize>) -> SearchNode {
        SearchNode {
            point,
            g,
            h,
            f: g + h,
            parent,
        }
    }

    /// Records a cheaper route to this Vertex.
    pub fn relax(&mut self, g: Cost, h: Cost, parent: usize) {
        self.g = g;
        self.h = h;
        self.f = g + h;
        self.parent = Some(parent);
    }
}

/// Arena of the [`SearchNode`]s of one search, with a Point -> key lookup.
///
/// Nodes are created lazily as the frontier first discovers their Vertex and
/// are dropped with the arena when the search returns.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeArena {
    nodes: slab::Slab<SearchNode>,
    ids: PointMap<usize>,
}

impl NodeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: slab::Slab::with_capacity(capacity),
            ids: PointMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn insert(&mut self, node: SearchNode) -> usize {
        let point = node.point;
        let id = self.nodes.insert(node);
        self.ids.insert(point, id);
        id
    }

    pub fn id_at(&self, point: Point) -> Option<usize> {
        self.ids.get(&point).copied()
    }
}

use std::ops::{Index, IndexMut};
impl Index<usize> for NodeArena {
    type Output = SearchNode;
    #[track_caller]
    fn index(&self, index: usize) -> &SearchNode {
        &self.nodes[index]
    }
}
impl IndexMut<usize> for NodeArena {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut SearchNode {
        &mut self.nodes[index]
    }
}
