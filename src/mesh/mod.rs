//! Core mesh topology structures.
//!
//! This module provides the value types of a triangle mesh and the three
//! indices that store them.
//!
//! # Overview
//!
//! - [`Point`] - an exactly ordered 3D position
//! - [`VertexId`] - a type-safe vertex handle, generic over [`MeshIndex`]
//! - [`Edge`] - an unordered vertex pair in canonical orientation
//! - [`Face`] - an oriented triangle in canonical rotation
//! - [`VertexIndex`] - handle to point and point to handles
//! - [`EdgeIndex`] - edges searchable by either endpoint
//! - [`FaceIndex`] - faces searchable by any corner or edge, with cascading
//!   removal and edge maintenance
//!
//! # Example
//!
//! ```
//! use trindex::mesh::{Edge, EdgeIndex, FaceIndex, Point, VertexId, VertexIndex};
//!
//! let mut verts: VertexIndex = VertexIndex::new();
//! verts.extend_points([
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [1.0, 1.0, 0.0],
//!     [0.0, 1.0, 0.0],
//! ]);
//!
//! let mut faces: FaceIndex = FaceIndex::new();
//! faces.extend_faces([[0, 1, 2], [0, 2, 3]]);
//!
//! let mut edges = EdgeIndex::new();
//! faces.sync(&mut edges);
//! assert_eq!(edges.len(), 5);
//!
//! faces.erase_vertex_with_edges(VertexId::new(1), &mut edges);
//! assert_eq!(faces.len(), 1);
//! assert_eq!(edges.len(), 3);
//! assert!(edges.contains(Edge::from((0, 2))));
//! assert_eq!(verts.get(VertexId::new(2)), Some(&Point::new(1.0, 1.0, 0.0)));
//! ```

mod edge;
mod edges;
mod face;
mod faces;
mod index;
mod point;
mod vertices;

pub use edge::Edge;
pub use edges::EdgeIndex;
pub use face::Face;
pub use faces::FaceIndex;
pub use index::{MeshIndex, VertexId};
pub use point::Point;
pub use vertices::{HandleAllocation, VertexIndex, VertexIndexOptions};
