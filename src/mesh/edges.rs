//! Two-key edge storage.

use std::collections::BTreeSet;

use super::edge::Edge;
use super::index::{MeshIndex, VertexId};

/// A set of undirected edges searchable by either endpoint.
///
/// The primary ordering sorts edges by smaller then larger endpoint. A second
/// ordering keyed `(larger, smaller)` gives range access by the larger
/// endpoint. Both always hold the same edges.
///
/// # Example
///
/// ```
/// use trindex::mesh::{Edge, EdgeIndex, VertexId};
///
/// let mut edges: EdgeIndex = EdgeIndex::new();
/// edges.insert(Edge::from((2, 1)));
/// edges.insert(Edge::from((1, 3)));
/// edges.insert(Edge::from((3, 2)));
///
/// assert_eq!(edges.search(VertexId::new(2)).len(), 2);
/// edges.erase_vertex(VertexId::new(1));
/// assert_eq!(edges.to_vec(), vec![Edge::from((2, 3))]);
/// ```
#[derive(Debug, Clone)]
pub struct EdgeIndex<I: MeshIndex = u32> {
    by_v1: BTreeSet<Edge<I>>,
    by_v2: BTreeSet<(VertexId<I>, VertexId<I>)>,
}

impl<I: MeshIndex> Default for EdgeIndex<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshIndex> EdgeIndex<I> {
    /// Create an empty edge index.
    pub fn new() -> Self {
        Self {
            by_v1: BTreeSet::new(),
            by_v2: BTreeSet::new(),
        }
    }

    /// Insert an edge. Self-loops are ignored.
    ///
    /// Returns `true` if the edge was not already present.
    pub fn insert(&mut self, edge: Edge<I>) -> bool {
        if edge.is_loop() {
            log::trace!("rejected self-loop {:?}", edge);
            return false;
        }
        if !self.by_v1.insert(edge) {
            return false;
        }
        self.by_v2.insert((edge.v2(), edge.v1()));
        true
    }

    /// Remove one edge. Returns `true` if it was present.
    pub fn erase(&mut self, edge: Edge<I>) -> bool {
        if !self.by_v1.remove(&edge) {
            return false;
        }
        self.by_v2.remove(&(edge.v2(), edge.v1()));
        true
    }

    /// Remove every edge incident to `v`. Returns how many were removed.
    pub fn erase_vertex(&mut self, v: VertexId<I>) -> usize {
        let lower: Vec<Edge<I>> = self.lower_range(v).copied().collect();
        for edge in &lower {
            self.by_v1.remove(edge);
            self.by_v2.remove(&(edge.v2(), edge.v1()));
        }

        let upper: Vec<(VertexId<I>, VertexId<I>)> = self.upper_range(v).copied().collect();
        for &(v2, v1) in &upper {
            self.by_v2.remove(&(v2, v1));
            self.by_v1.remove(&Edge::raw(v1, v2));
        }

        lower.len() + upper.len()
    }

    /// Whether the edge is present, in either endpoint order.
    #[inline]
    pub fn contains(&self, edge: Edge<I>) -> bool {
        self.by_v1.contains(&edge)
    }

    /// All edges incident to `v`.
    pub fn search(&self, v: VertexId<I>) -> BTreeSet<Edge<I>> {
        let mut found: BTreeSet<Edge<I>> = self.lower_range(v).copied().collect();
        found.extend(self.upper_range(v).map(|&(v2, v1)| Edge::raw(v1, v2)));
        found
    }

    /// Number of stored edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_v1.len()
    }

    /// Whether no edge is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_v1.is_empty()
    }

    /// Remove every edge.
    pub fn clear(&mut self) {
        self.by_v1.clear();
        self.by_v2.clear();
    }

    /// Iterate over edges in canonical `(smaller, larger)` order.
    pub fn iter(&self) -> impl Iterator<Item = Edge<I>> + '_ {
        self.by_v1.iter().copied()
    }

    /// Copy out every edge in canonical order.
    pub fn to_vec(&self) -> Vec<Edge<I>> {
        self.by_v1.iter().copied().collect()
    }

    /// Edges whose smaller endpoint is `v`.
    fn lower_range(&self, v: VertexId<I>) -> impl Iterator<Item = &Edge<I>> + '_ {
        self.by_v1
            .range(Edge::raw(v, VertexId::MIN)..=Edge::raw(v, VertexId::MAX))
    }

    /// Edges whose larger endpoint is `v`, as `(larger, smaller)`.
    fn upper_range(
        &self,
        v: VertexId<I>,
    ) -> impl Iterator<Item = &(VertexId<I>, VertexId<I>)> + '_ {
        self.by_v2.range((v, VertexId::MIN)..=(v, VertexId::MAX))
    }
}

impl<I: MeshIndex> Extend<Edge<I>> for EdgeIndex<I> {
    fn extend<T: IntoIterator<Item = Edge<I>>>(&mut self, iter: T) {
        for edge in iter {
            self.insert(edge);
        }
    }
}

impl<I: MeshIndex> FromIterator<Edge<I>> for EdgeIndex<I> {
    fn from_iter<T: IntoIterator<Item = Edge<I>>>(iter: T) -> Self {
        let mut edges = Self::new();
        edges.extend(iter);
        edges
    }
}

impl<I: MeshIndex> PartialEq for EdgeIndex<I> {
    fn eq(&self, other: &Self) -> bool {
        self.by_v1 == other.by_v1
    }
}

impl<I: MeshIndex> Eq for EdgeIndex<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    fn e(a: usize, b: usize) -> Edge {
        Edge::from((a, b))
    }

    fn assert_views_agree(edges: &EdgeIndex) {
        assert_eq!(edges.by_v1.len(), edges.by_v2.len());
        for edge in &edges.by_v1 {
            assert!(edges.by_v2.contains(&(edge.v2(), edge.v1())));
        }
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut edges: EdgeIndex = EdgeIndex::new();
        assert!(edges.insert(e(1, 2)));
        assert!(!edges.insert(e(2, 1)));
        assert_eq!(edges.len(), 1);
        assert_views_agree(&edges);
    }

    #[test]
    fn test_rejects_self_loop() {
        let mut edges: EdgeIndex = EdgeIndex::new();
        assert!(!edges.insert(e(3, 3)));
        assert!(edges.is_empty());
    }

    #[test]
    fn test_contains_any_order() {
        let mut edges: EdgeIndex = EdgeIndex::new();
        edges.insert(e(5, 2));
        assert!(edges.contains(e(2, 5)));
        assert!(edges.contains(e(5, 2)));
        assert!(!edges.contains(e(2, 6)));
    }

    #[test]
    fn test_search_merges_both_orderings() {
        let edges: EdgeIndex = [e(0, 5), e(5, 9), e(3, 5), e(1, 2)].into_iter().collect();
        let found = edges.search(v(5));
        assert_eq!(found, BTreeSet::from([e(0, 5), e(3, 5), e(5, 9)]));
        assert!(edges.search(v(7)).is_empty());
    }

    #[test]
    fn test_erase_vertex() {
        let mut edges: EdgeIndex = [e(0, 5), e(5, 9), e(3, 5), e(1, 2), e(0, 9)]
            .into_iter()
            .collect();
        assert_eq!(edges.erase_vertex(v(5)), 3);
        assert_eq!(edges.to_vec(), vec![e(0, 9), e(1, 2)]);
        assert_views_agree(&edges);

        assert_eq!(edges.erase_vertex(v(5)), 0);
    }

    #[test]
    fn test_erase_edge() {
        let mut edges: EdgeIndex = [e(0, 1), e(1, 2)].into_iter().collect();
        assert!(edges.erase(e(2, 1)));
        assert!(!edges.erase(e(2, 1)));
        assert_eq!(edges.to_vec(), vec![e(0, 1)]);
        assert_views_agree(&edges);
    }

    #[test]
    fn test_export_order() {
        let edges: EdgeIndex = [e(4, 1), e(0, 3), e(1, 2), e(0, 1)].into_iter().collect();
        assert_eq!(edges.to_vec(), vec![e(0, 1), e(0, 3), e(1, 2), e(1, 4)]);
    }
}
