//! Undirected edge values.

use std::fmt;

use super::index::{MeshIndex, VertexId};

/// An unordered pair of vertex handles.
///
/// Edges are always held in canonical orientation with the smaller handle
/// first, so `Edge::new(a, b) == Edge::new(b, a)` and the derived ordering is
/// by smaller endpoint, then larger endpoint.
///
/// A self-loop (`a == b`) can be built as a value but is never stored by an
/// [`EdgeIndex`](super::EdgeIndex) and never matches a face.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Edge<I: MeshIndex = u32> {
    v1: VertexId<I>,
    v2: VertexId<I>,
}

impl<I: MeshIndex> Edge<I> {
    /// Create an edge between two vertices, in either order.
    #[inline]
    pub fn new(a: VertexId<I>, b: VertexId<I>) -> Self {
        if a <= b {
            Self { v1: a, v2: b }
        } else {
            Self { v1: b, v2: a }
        }
    }

    /// Build an edge without reordering. Only used for range bounds.
    #[inline]
    pub(crate) const fn raw(v1: VertexId<I>, v2: VertexId<I>) -> Self {
        Self { v1, v2 }
    }

    /// The smaller endpoint.
    #[inline]
    pub fn v1(&self) -> VertexId<I> {
        self.v1
    }

    /// The larger endpoint.
    #[inline]
    pub fn v2(&self) -> VertexId<I> {
        self.v2
    }

    /// Both endpoints, smaller first.
    #[inline]
    pub fn vertices(&self) -> [VertexId<I>; 2] {
        [self.v1, self.v2]
    }

    /// Whether both endpoints are the same vertex.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.v1 == self.v2
    }

    /// Whether `v` is one of the endpoints.
    #[inline]
    pub fn contains(&self, v: VertexId<I>) -> bool {
        self.v1 == v || self.v2 == v
    }

    /// The endpoint opposite `v`, if `v` is an endpoint.
    pub fn opposite(&self, v: VertexId<I>) -> Option<VertexId<I>> {
        if self.v1 == v {
            Some(self.v2)
        } else if self.v2 == v {
            Some(self.v1)
        } else {
            None
        }
    }
}

impl<I: MeshIndex> fmt::Debug for Edge<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E({}, {})", self.v1, self.v2)
    }
}

impl<I: MeshIndex> From<(VertexId<I>, VertexId<I>)> for Edge<I> {
    fn from((a, b): (VertexId<I>, VertexId<I>)) -> Self {
        Self::new(a, b)
    }
}

/// Panics if a handle does not fit the index type, like [`VertexId::new`].
impl<I: MeshIndex> From<(usize, usize)> for Edge<I> {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(VertexId::new(a), VertexId::new(b))
    }
}
