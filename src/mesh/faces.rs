//! Three-key face storage with cascading removal.
//!
//! [`FaceIndex`] keeps every face under three views, keyed by the canonical
//! first, second and third corner, so all faces touching a vertex or an edge
//! are found with a handful of range scans. It also owns the rules that keep a
//! companion [`EdgeIndex`] equal to the edges of the stored faces.
//!
//! # Views
//!
//! View 1 is the authoritative `Face -> payload` map. Views 2 and 3 are ordered
//! `(corner, face)` key sets derived from it. Every mutation goes through one
//! internal link/unlink pair that touches all three views together.
//!
//! # Edge maintenance
//!
//! The `*_with_edges` variants update an edge index incrementally. After any
//! sequence of them the edge index holds exactly the edges of the remaining
//! faces, which is also what a single [`FaceIndex::sync`] produces:
//!
//! - inserting a face inserts its three edges;
//! - erasing a vertex drops every edge incident to it unconditionally;
//! - any other edge of a removed face is dropped only if no remaining face
//!   still contains both of its endpoints.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use super::edge::Edge;
use super::edges::EdgeIndex;
use super::face::Face;
use super::index::{MeshIndex, VertexId};

/// Oriented faces with caller-owned payloads, searchable by vertex and edge.
///
/// The payload `P` is opaque to the index: it is stored, handed back, and
/// dropped when its face is erased, never inspected. Use `()` when faces carry
/// nothing.
///
/// # Example
///
/// ```
/// use trindex::mesh::{Edge, EdgeIndex, Face, FaceIndex};
///
/// let mut faces: FaceIndex = FaceIndex::new();
/// let mut edges: EdgeIndex = EdgeIndex::new();
/// faces.insert_with_edges(Face::from((0, 1, 2)), (), &mut edges);
/// faces.insert_with_edges(Face::from((0, 2, 3)), (), &mut edges);
/// assert_eq!(edges.len(), 5);
///
/// // Both triangles share the diagonal.
/// assert_eq!(faces.search_edge(&Edge::from((2, 0))).len(), 2);
///
/// faces.erase_with_edges(&Face::from((1, 2, 0)), &mut edges);
/// assert_eq!(faces.len(), 1);
/// assert_eq!(edges, faces.edges());
/// ```
#[derive(Debug, Clone)]
pub struct FaceIndex<I: MeshIndex = u32, P = ()> {
    by_v1: BTreeMap<Face<I>, P>,
    by_v2: BTreeSet<(VertexId<I>, Face<I>)>,
    by_v3: BTreeSet<(VertexId<I>, Face<I>)>,
}

impl<I: MeshIndex, P> Default for FaceIndex<I, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshIndex, P> FaceIndex<I, P> {
    /// Create an empty face index.
    pub fn new() -> Self {
        Self {
            by_v1: BTreeMap::new(),
            by_v2: BTreeSet::new(),
            by_v3: BTreeSet::new(),
        }
    }

    // ==================== Insertion ====================

    /// Store a face with its payload.
    ///
    /// Degenerate faces are ignored. If the face is already stored (in any
    /// rotation) only its payload is replaced.
    ///
    /// Returns `true` if a new face was stored.
    pub fn insert(&mut self, face: Face<I>, payload: P) -> bool {
        if face.is_degenerate() {
            log::trace!("rejected degenerate face {:?}", face);
            return false;
        }
        self.link(face, payload).is_none()
    }

    /// Store a face and add its three edges to `edges`.
    pub fn insert_with_edges(&mut self, face: Face<I>, payload: P, edges: &mut EdgeIndex<I>) -> bool {
        if face.is_degenerate() {
            log::trace!("rejected degenerate face {:?}", face);
            return false;
        }
        edges.extend(face.edges());
        self.link(face, payload).is_none()
    }

    /// Store faces in iteration order with default payloads.
    ///
    /// Returns the number of new faces stored.
    pub fn extend_faces<F, It>(&mut self, faces: It) -> usize
    where
        P: Default,
        F: Into<Face<I>>,
        It: IntoIterator<Item = F>,
    {
        faces
            .into_iter()
            .map(|f| self.insert(f.into(), P::default()))
            .filter(|&added| added)
            .count()
    }

    // ==================== Lookup ====================

    /// The payload of `face`, if stored. Any rotation matches; the reversed
    /// winding does not.
    #[inline]
    pub fn get(&self, face: &Face<I>) -> Option<&P> {
        self.by_v1.get(face)
    }

    /// Mutable access to the payload of `face`.
    #[inline]
    pub fn get_mut(&mut self, face: &Face<I>) -> Option<&mut P> {
        self.by_v1.get_mut(face)
    }

    /// Whether `face` is stored.
    #[inline]
    pub fn contains(&self, face: &Face<I>) -> bool {
        self.by_v1.contains_key(face)
    }

    /// All faces with `v` as a corner.
    pub fn search_vertex(&self, v: VertexId<I>) -> BTreeMap<Face<I>, &P> {
        self.with_payloads(self.vertex_faces(v))
    }

    /// All faces containing both endpoints of `edge`.
    pub fn search_edge(&self, edge: &Edge<I>) -> BTreeMap<Face<I>, &P> {
        self.with_payloads(self.edge_faces(edge))
    }

    /// Whether any stored face contains both endpoints of `edge`.
    pub fn is_edge_referenced(&self, edge: &Edge<I>) -> bool {
        self.edge_face_iter(edge).next().is_some()
    }

    // ==================== Removal ====================

    /// Remove exactly `face` and return its payload.
    ///
    /// Any rotation matches. The reversed winding is a different face and is
    /// left alone.
    pub fn erase(&mut self, face: &Face<I>) -> Option<P> {
        self.unlink(face)
    }

    /// Remove `face` and drop each of its edges from `edges` unless another
    /// face still uses it.
    pub fn erase_with_edges(&mut self, face: &Face<I>, edges: &mut EdgeIndex<I>) -> Option<P> {
        let payload = self.unlink(face);
        self.release_edges(face.edges(), edges);
        payload
    }

    /// Remove every face with `v` as a corner. Returns how many were removed.
    pub fn erase_vertex(&mut self, v: VertexId<I>) -> usize {
        let doomed = self.vertex_faces(v);
        self.unlink_all(&doomed);
        log::debug!("erased {} faces around {:?}", doomed.len(), v);
        doomed.len()
    }

    /// Remove every face around `v` and update `edges`.
    ///
    /// Every edge incident to `v` is dropped. The opposite edge of each removed
    /// face is dropped unless another face still uses it.
    pub fn erase_vertex_with_edges(&mut self, v: VertexId<I>, edges: &mut EdgeIndex<I>) -> usize {
        let doomed = self.vertex_faces(v);
        self.unlink_all(&doomed);
        edges.erase_vertex(v);
        self.release_edges(
            doomed.iter().flat_map(|f| f.edges()).filter(|e| !e.contains(v)),
            edges,
        );
        log::debug!("erased {} faces around {:?}", doomed.len(), v);
        doomed.len()
    }

    /// Remove every face containing both endpoints of `edge`. Returns how many
    /// were removed.
    pub fn erase_edge(&mut self, edge: &Edge<I>) -> usize {
        let doomed = self.edge_faces(edge);
        self.unlink_all(&doomed);
        log::debug!("erased {} faces along {:?}", doomed.len(), edge);
        doomed.len()
    }

    /// Remove every face along `edge` and update `edges`.
    ///
    /// `edge` itself, and every other edge of a removed face, is dropped only
    /// if no remaining face contains both of its endpoints.
    pub fn erase_edge_with_edges(&mut self, edge: &Edge<I>, edges: &mut EdgeIndex<I>) -> usize {
        let doomed = self.edge_faces(edge);
        self.unlink_all(&doomed);
        self.release_edges(
            std::iter::once(*edge).chain(doomed.iter().flat_map(|f| f.edges())),
            edges,
        );
        log::debug!("erased {} faces along {:?}", doomed.len(), edge);
        doomed.len()
    }

    /// Remove every face.
    pub fn clear(&mut self) {
        self.by_v1.clear();
        self.by_v2.clear();
        self.by_v3.clear();
    }

    // ==================== Edges ====================

    /// Rebuild `edges` from scratch out of the stored faces.
    pub fn sync(&self, edges: &mut EdgeIndex<I>) {
        edges.clear();
        edges.extend(self.by_v1.keys().flat_map(|f| f.edges()));
    }

    /// A fresh edge index holding the edges of the stored faces.
    pub fn edges(&self) -> EdgeIndex<I> {
        self.by_v1.keys().flat_map(|f| f.edges()).collect()
    }

    // ==================== Export ====================

    /// Number of stored faces.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_v1.len()
    }

    /// Whether no face is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_v1.is_empty()
    }

    /// Iterate over `(face, payload)` in canonical face order.
    pub fn iter(&self) -> impl Iterator<Item = (Face<I>, &P)> + '_ {
        self.by_v1.iter().map(|(&f, p)| (f, p))
    }

    /// Copy out every face in canonical order.
    pub fn faces(&self) -> Vec<Face<I>> {
        self.by_v1.keys().copied().collect()
    }

    /// Copy out every `(face, payload)` pair in canonical order.
    pub fn to_vec(&self) -> Vec<(Face<I>, P)>
    where
        P: Clone,
    {
        self.by_v1.iter().map(|(&f, p)| (f, p.clone())).collect()
    }

    /// Check that the three views hold the same faces.
    pub fn is_valid(&self) -> bool {
        if self.by_v2.len() != self.by_v1.len() || self.by_v3.len() != self.by_v1.len() {
            return false;
        }
        self.by_v1.keys().all(|f| {
            !f.is_degenerate()
                && f.v1() < f.v2()
                && f.v1() < f.v3()
                && self.by_v2.contains(&(f.v2(), *f))
                && self.by_v3.contains(&(f.v3(), *f))
        })
    }

    // ==================== Internals ====================

    /// Insert into all three views, or replace the payload of an existing face.
    fn link(&mut self, face: Face<I>, payload: P) -> Option<P> {
        match self.by_v1.entry(face) {
            Entry::Occupied(mut slot) => Some(slot.insert(payload)),
            Entry::Vacant(slot) => {
                slot.insert(payload);
                self.by_v2.insert((face.v2(), face));
                self.by_v3.insert((face.v3(), face));
                None
            }
        }
    }

    /// Remove from all three views.
    fn unlink(&mut self, face: &Face<I>) -> Option<P> {
        let payload = self.by_v1.remove(face)?;
        self.by_v2.remove(&(face.v2(), *face));
        self.by_v3.remove(&(face.v3(), *face));
        Some(payload)
    }

    fn unlink_all(&mut self, faces: &[Face<I>]) {
        for face in faces {
            self.unlink(face);
        }
    }

    /// Drop each candidate edge that no stored face references.
    fn release_edges<It>(&self, candidates: It, edges: &mut EdgeIndex<I>)
    where
        It: IntoIterator<Item = Edge<I>>,
    {
        for edge in candidates {
            if !self.is_edge_referenced(&edge) {
                edges.erase(edge);
            }
        }
    }

    fn with_payloads(&self, faces: Vec<Face<I>>) -> BTreeMap<Face<I>, &P> {
        faces
            .into_iter()
            .filter_map(|f| self.by_v1.get(&f).map(|p| (f, p)))
            .collect()
    }

    /// Faces with `v` in any position, each listed once.
    fn vertex_faces(&self, v: VertexId<I>) -> Vec<Face<I>> {
        let mut found: Vec<Face<I>> = self.first_range(v).copied().collect();
        found.extend(self.second_range(v));
        found.extend(self.third_range(v));
        found
    }

    fn edge_faces(&self, edge: &Edge<I>) -> Vec<Face<I>> {
        self.edge_face_iter(edge).collect()
    }

    /// Faces containing both endpoints of `edge`.
    ///
    /// With `a < b`, a face holding both either starts at `a`, or starts below
    /// `a` and holds `a` and `b` as its last two corners in some order. Stored
    /// faces are never degenerate, so a self-loop matches nothing.
    fn edge_face_iter<'a>(&'a self, edge: &Edge<I>) -> impl Iterator<Item = Face<I>> + 'a {
        let (a, b) = (edge.v1(), edge.v2());

        let starts_at_a = self.first_range(a).copied().filter(move |f| f.v2() == b || f.v3() == b);
        let a_then_b = self.second_range(a).filter(move |f| f.v3() == b);
        let b_then_a = self.second_range(b).filter(move |f| f.v3() == a);

        starts_at_a.chain(a_then_b).chain(b_then_a)
    }

    fn first_range(&self, v: VertexId<I>) -> impl Iterator<Item = &Face<I>> + '_ {
        self.by_v1
            .range(Face::raw(v, VertexId::MIN, VertexId::MIN)..=Face::raw(v, VertexId::MAX, VertexId::MAX))
            .map(|(f, _)| f)
    }

    fn second_range(&self, v: VertexId<I>) -> impl Iterator<Item = Face<I>> + '_ {
        Self::corner_range(&self.by_v2, v)
    }

    fn third_range(&self, v: VertexId<I>) -> impl Iterator<Item = Face<I>> + '_ {
        Self::corner_range(&self.by_v3, v)
    }

    fn corner_range(
        view: &BTreeSet<(VertexId<I>, Face<I>)>,
        v: VertexId<I>,
    ) -> impl Iterator<Item = Face<I>> + '_ {
        let lo = Face::raw(VertexId::MIN, VertexId::MIN, VertexId::MIN);
        let hi = Face::raw(VertexId::MAX, VertexId::MAX, VertexId::MAX);
        view.range((v, lo)..=(v, hi)).map(|&(_, f)| f)
    }
}

impl<I: MeshIndex, P: PartialEq> PartialEq for FaceIndex<I, P> {
    fn eq(&self, other: &Self) -> bool {
        self.by_v1 == other.by_v1
    }
}

impl<I: MeshIndex, P: Eq> Eq for FaceIndex<I, P> {}
