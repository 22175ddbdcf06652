//! Property-based tests for the topology indices.
//!
//! This module uses proptest to verify:
//! - Canonical forms of edges and faces (rotation, swap, reversal)
//! - Cascading removal counts
//! - Incremental edge maintenance matching a full rebuild
//! - Exact round trips through the flat file format

use proptest::prelude::*;
use trindex::io::csv;
use trindex::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

const MAX_HANDLE: usize = 24;

fn distinct_triple() -> impl Strategy<Value = (usize, usize, usize)> {
    (0..MAX_HANDLE, 0..MAX_HANDLE, 0..MAX_HANDLE)
        .prop_filter("corners must be distinct", |&(a, b, c)| a != b && b != c && a != c)
}

fn face_set() -> impl Strategy<Value = Vec<(usize, usize, usize)>> {
    prop::collection::vec(distinct_triple(), 0..60)
}

#[derive(Debug, Clone)]
enum Op {
    Insert(usize, usize, usize),
    EraseVertex(usize),
    EraseEdge(usize, usize),
    EraseFace(usize, usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..MAX_HANDLE, 0..MAX_HANDLE, 0..MAX_HANDLE).prop_map(|(a, b, c)| Op::Insert(a, b, c)),
        (0..MAX_HANDLE).prop_map(Op::EraseVertex),
        (0..MAX_HANDLE, 0..MAX_HANDLE).prop_map(|(a, b)| Op::EraseEdge(a, b)),
        (0..MAX_HANDLE, 0..MAX_HANDLE, 0..MAX_HANDLE).prop_map(|(a, b, c)| Op::EraseFace(a, b, c)),
    ]
}

fn non_nan_coordinate() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("NaN does not compare", |x| !x.is_nan())
}

fn build(faces: &[(usize, usize, usize)]) -> FaceIndex {
    let mut index = FaceIndex::new();
    index.extend_faces(faces.iter().copied().map(Face::from));
    index
}

// =============================================================================
// CANONICAL FORMS
// =============================================================================

proptest! {
    /// Property: every rotation of a face is the same face
    #[test]
    fn prop_face_rotation_invariant((a, b, c) in distinct_triple()) {
        let f: Face = Face::from((a, b, c));
        prop_assert_eq!(f, Face::from((b, c, a)));
        prop_assert_eq!(f, Face::from((c, a, b)));
    }

    /// Property: reversing the winding gives a different face
    #[test]
    fn prop_face_reversal_distinct((a, b, c) in distinct_triple()) {
        let f: Face = Face::from((a, b, c));
        prop_assert_ne!(f, Face::from((c, b, a)));
        prop_assert_eq!(f.reversed(), Face::from((c, b, a)));
    }

    /// Property: canonical faces start at their smallest corner
    #[test]
    fn prop_face_starts_at_minimum((a, b, c) in distinct_triple()) {
        let f: Face = Face::from((a, b, c));
        prop_assert_eq!(f.v1().index(), a.min(b).min(c));
    }

    /// Property: edge endpoint order is irrelevant
    #[test]
    fn prop_edge_swap_invariant(a in 0..MAX_HANDLE, b in 0..MAX_HANDLE) {
        let e: Edge = Edge::from((a, b));
        prop_assert_eq!(e, Edge::from((b, a)));
        prop_assert!(e.v1() <= e.v2());
    }
}

// =============================================================================
// CASCADES
// =============================================================================

proptest! {
    /// Property: erasing a vertex removes exactly its incident faces
    #[test]
    fn prop_erase_vertex_count(faces in face_set(), v in 0..MAX_HANDLE) {
        let mut index = build(&faces);
        let v = VertexId::new(v);
        let before = index.len();
        let incident = index.search_vertex(v).len();

        prop_assert_eq!(index.erase_vertex(v), incident);
        prop_assert_eq!(index.len(), before - incident);
        prop_assert!(index.search_vertex(v).is_empty());
        prop_assert!(index.is_valid());
    }

    /// Property: erasing an edge removes exactly the faces holding both endpoints
    #[test]
    fn prop_erase_edge_count(faces in face_set(), a in 0..MAX_HANDLE, b in 0..MAX_HANDLE) {
        let mut index = build(&faces);
        let e: Edge = Edge::from((a, b));
        let before = index.len();
        let expected = index.iter().filter(|(f, _)| f.contains_edge(&e)).count();

        prop_assert_eq!(index.search_edge(&e).len(), expected);
        prop_assert_eq!(index.erase_edge(&e), expected);
        prop_assert_eq!(index.len(), before - expected);
        prop_assert!(!index.is_edge_referenced(&e));
        prop_assert!(index.is_valid());
    }

    /// Property: a face erases in any rotation, never by its reversal
    #[test]
    fn prop_erase_face_winding(faces in face_set(), (a, b, c) in distinct_triple()) {
        let mut index = build(&faces);
        index.insert(Face::from((a, b, c)), ());
        index.erase(&Face::from((c, b, a)));
        let before = index.len();

        prop_assert!(index.erase(&Face::from((b, c, a))).is_some());
        prop_assert_eq!(index.len(), before - 1);
        prop_assert!(index.erase(&Face::from((a, b, c))).is_none());
        prop_assert!(index.is_valid());
    }

    /// Property: incremental edge maintenance equals one rebuild at the end
    #[test]
    fn prop_incremental_matches_sync(
        faces in face_set(),
        ops in prop::collection::vec(op(), 0..40),
        swap in any::<bool>(),
    ) {
        let mut incremental = build(&faces);
        let mut deferred = incremental.clone();
        let mut edges = incremental.edges();

        for op in &ops {
            match *op {
                Op::Insert(a, b, c) => {
                    incremental.insert_with_edges(Face::from((a, b, c)), (), &mut edges);
                    deferred.insert(Face::from((a, b, c)), ());
                }
                Op::EraseVertex(v) => {
                    incremental.erase_vertex_with_edges(VertexId::new(v), &mut edges);
                    deferred.erase_vertex(VertexId::new(v));
                }
                Op::EraseEdge(a, b) => {
                    let (x, y) = if swap { (b, a) } else { (a, b) };
                    incremental.erase_edge_with_edges(&Edge::from((a, b)), &mut edges);
                    deferred.erase_edge(&Edge::from((x, y)));
                }
                Op::EraseFace(a, b, c) => {
                    let rotated = if swap { (b, c, a) } else { (a, b, c) };
                    incremental.erase_with_edges(&Face::from((a, b, c)), &mut edges);
                    deferred.erase(&Face::from(rotated));
                }
            }
        }

        let mut rebuilt = EdgeIndex::new();
        deferred.sync(&mut rebuilt);

        prop_assert_eq!(&incremental, &deferred);
        prop_assert_eq!(edges.to_vec(), rebuilt.to_vec());
        prop_assert!(incremental.is_valid());
    }
}

// =============================================================================
// VERTICES AND ROUND TRIPS
// =============================================================================

proptest! {
    /// Property: k copies of a point give k handles, all found by search
    #[test]
    fn prop_duplicate_points_found(
        coords in prop::array::uniform3(non_nan_coordinate()),
        copies in 1usize..6,
    ) {
        let mut verts: VertexIndex = VertexIndex::new();
        verts.insert(Point::new(f64::INFINITY, 0.0, 0.0));
        let ids: Vec<VertexId> = (0..copies).map(|_| verts.insert(Point::from(coords))).collect();

        let found = verts.search(&Point::from(coords));
        if coords == [f64::INFINITY, 0.0, 0.0] {
            prop_assert_eq!(found.len(), copies + 1);
        } else {
            prop_assert_eq!(found.len(), copies);
        }
        for id in ids {
            prop_assert!(found.contains(&id));
        }
    }

    /// Property: vertices survive a write/read round trip bit for bit
    #[test]
    fn prop_vertex_round_trip(points in prop::collection::vec(prop::array::uniform3(non_nan_coordinate()), 0..30)) {
        let mut verts: VertexIndex = VertexIndex::new();
        verts.extend_points(points.iter().copied());

        let mut buf = Vec::new();
        csv::write_vertices(&verts, &mut buf).unwrap();
        let mut reloaded: VertexIndex = VertexIndex::new();
        csv::read_vertices(buf.as_slice(), &mut reloaded).unwrap();

        let bits = |v: &VertexIndex| -> Vec<[u64; 3]> {
            v.points().iter().map(|p| p.coords().map(f64::to_bits)).collect()
        };
        prop_assert_eq!(bits(&verts), bits(&reloaded));
    }

    /// Property: faces and edges survive a write/read round trip
    #[test]
    fn prop_face_round_trip(faces in face_set()) {
        let index = build(&faces);

        let mut buf = Vec::new();
        csv::write_faces(&index, &mut buf).unwrap();
        let mut reloaded: FaceIndex = FaceIndex::new();
        csv::read_faces(buf.as_slice(), &mut reloaded).unwrap();
        prop_assert_eq!(&index, &reloaded);

        let mut buf = Vec::new();
        csv::write_edges(&index.edges(), &mut buf).unwrap();
        let mut edges: EdgeIndex = EdgeIndex::new();
        csv::read_edges(buf.as_slice(), &mut edges).unwrap();
        prop_assert_eq!(edges, index.edges());
    }
}
