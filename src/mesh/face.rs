//! Oriented triangle values.

use std::fmt;

use super::edge::Edge;
use super::index::{MeshIndex, VertexId};

/// An oriented triangle.
///
/// The cyclic order `v1 -> v2 -> v3 -> v1` encodes the winding. Faces are
/// held in canonical rotation, starting at the smallest handle, which keeps
/// the winding: `(a, b, c)`, `(b, c, a)` and `(c, a, b)` are the same face
/// while `(c, b, a)` is its reverse and a different face.
///
/// ```
/// use trindex::mesh::Face;
///
/// let f: Face = Face::from((5, 2, 9));
/// assert_eq!(f, Face::from((2, 9, 5)));
/// assert_ne!(f, f.reversed());
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Face<I: MeshIndex = u32> {
    v: [VertexId<I>; 3],
}

impl<I: MeshIndex> Face<I> {
    /// Create a face from three vertices in winding order.
    pub fn new(a: VertexId<I>, b: VertexId<I>, c: VertexId<I>) -> Self {
        let v = if b < a && b < c {
            [b, c, a]
        } else if c < a && c < b {
            [c, a, b]
        } else {
            [a, b, c]
        };
        Self { v }
    }

    /// Build a face without rotating. Only used for range bounds.
    #[inline]
    pub(crate) const fn raw(v1: VertexId<I>, v2: VertexId<I>, v3: VertexId<I>) -> Self {
        Self { v: [v1, v2, v3] }
    }

    /// First corner (the smallest handle).
    #[inline]
    pub fn v1(&self) -> VertexId<I> {
        self.v[0]
    }

    /// Second corner.
    #[inline]
    pub fn v2(&self) -> VertexId<I> {
        self.v[1]
    }

    /// Third corner.
    #[inline]
    pub fn v3(&self) -> VertexId<I> {
        self.v[2]
    }

    /// The corners in canonical winding order.
    #[inline]
    pub fn vertices(&self) -> [VertexId<I>; 3] {
        self.v
    }

    /// Whether two corners share a vertex.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.v;
        a == b || b == c || c == a
    }

    /// The same triangle with opposite winding.
    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.v;
        Self::new(a, c, b)
    }

    /// The three boundary edges `(v1, v2)`, `(v2, v3)`, `(v3, v1)`.
    pub fn edges(&self) -> [Edge<I>; 3] {
        let [a, b, c] = self.v;
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }

    /// Whether `v` is a corner of this face.
    #[inline]
    pub fn contains(&self, v: VertexId<I>) -> bool {
        self.v.contains(&v)
    }

    /// Whether both endpoints of `edge` are corners of this face.
    ///
    /// Self-loops never match.
    #[inline]
    pub fn contains_edge(&self, edge: &Edge<I>) -> bool {
        !edge.is_loop() && self.contains(edge.v1()) && self.contains(edge.v2())
    }
}

impl<I: MeshIndex> fmt::Debug for Face<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F({}, {}, {})", self.v[0], self.v[1], self.v[2])
    }
}

impl<I: MeshIndex> From<[VertexId<I>; 3]> for Face<I> {
    fn from([a, b, c]: [VertexId<I>; 3]) -> Self {
        Self::new(a, b, c)
    }
}

/// Panics if a handle does not fit the index type, like [`VertexId::new`].
impl<I: MeshIndex> From<(usize, usize, usize)> for Face<I> {
    fn from((a, b, c): (usize, usize, usize)) -> Self {
        Self::new(VertexId::new(a), VertexId::new(b), VertexId::new(c))
    }
}

impl<I: MeshIndex> From<[usize; 3]> for Face<I> {
    fn from([a, b, c]: [usize; 3]) -> Self {
        Self::from((a, b, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(f: &Face) -> [usize; 3] {
        f.vertices().map(|v| v.index())
    }

    #[test]
    fn test_rotation_starts_at_minimum() {
        assert_eq!(ids(&Face::from((3, 1, 2))), [1, 2, 3]);
        assert_eq!(ids(&Face::from((2, 3, 1))), [1, 2, 3]);
        assert_eq!(ids(&Face::from((1, 2, 3))), [1, 2, 3]);
        assert_eq!(ids(&Face::from((1, 3, 2))), [1, 3, 2]);
    }

    #[test]
    fn test_reversed_winding_differs() {
        let f: Face = Face::from((30950, 30454, 30462));
        assert_ne!(f, Face::from((30462, 30454, 30950)));
        assert_eq!(f.reversed(), Face::from((30462, 30454, 30950)));
        assert_eq!(f.reversed().reversed(), f);
    }

    #[test]
    fn test_degenerate() {
        assert!(Face::<u32>::from((1, 1, 2)).is_degenerate());
        assert!(Face::<u32>::from((4, 2, 4)).is_degenerate());
        assert!(!Face::<u32>::from((1, 2, 3)).is_degenerate());
    }

    #[test]
    fn test_edges() {
        let f: Face = Face::from((4, 0, 9));
        let edges = f.edges();
        assert!(edges.contains(&Edge::from((0, 4))));
        assert!(edges.contains(&Edge::from((0, 9))));
        assert!(edges.contains(&Edge::from((4, 9))));
        for e in &edges {
            assert!(f.contains_edge(e));
        }
        assert!(!f.contains_edge(&Edge::from((0, 5))));
        assert!(!f.contains_edge(&Edge::from((4, 4))));
    }

    #[test]
    #[should_panic(expected = "too large for u16")]
    fn test_out_of_range_handle_panics() {
        let _: Face<u16> = Face::from((70_000, 1, 2));
    }
}
