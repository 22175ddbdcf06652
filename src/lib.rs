//! # Trindex
//!
//! An in-memory topology index for triangle meshes.
//!
//! Trindex stores the vertices, edges and oriented faces of a triangulated
//! surface in ordered indices that answer "what touches this vertex or edge"
//! with range scans, and keep every view consistent when elements are removed.
//!
//! ## Features
//!
//! - **Exact vertex lookup**: find every handle sharing a point, no tolerance
//! - **Canonical edges and faces**: endpoint order and face rotation never
//!   matter, face winding always does
//! - **Cascading removal**: erase by vertex, edge or exact face
//! - **Edge maintenance**: keep an edge index in step with the faces either
//!   incrementally or by one rebuild, with identical results
//! - **Caller-owned payloads**: attach any value to a face
//! - **Flat file I/O**: comma-separated vertex, edge and face files
//!
//! ## Quick Start
//!
//! ```
//! use trindex::prelude::*;
//!
//! let mut verts: VertexIndex = VertexIndex::new();
//! verts.extend_points([
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [-1.0, 0.0, 0.0],
//!     [0.0, -1.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//!
//! // A square pyramid without its base.
//! let mut faces: FaceIndex = FaceIndex::new();
//! faces.extend_faces([[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]]);
//!
//! let mut edges = EdgeIndex::new();
//! faces.sync(&mut edges);
//! assert_eq!(edges.len(), 8);
//!
//! // The apex touches every face.
//! assert_eq!(faces.search_vertex(VertexId::new(4)).len(), 4);
//!
//! // Removing one side edge takes both adjacent faces with it.
//! assert_eq!(faces.erase_edge_with_edges(&Edge::from((4, 1)), &mut edges), 2);
//! assert_eq!(faces.len(), 2);
//! assert_eq!(edges, faces.edges());
//! ```
//!
//! ## Winding
//!
//! ```
//! use trindex::prelude::*;
//!
//! let mut faces: FaceIndex = FaceIndex::new();
//! faces.insert(Face::from((0, 1, 2)), ());
//!
//! // Rotations are the same face, the reversed winding is not.
//! assert!(faces.contains(&Face::from((1, 2, 0))));
//! assert!(faces.erase(&Face::from((2, 1, 0))).is_none());
//! assert!(faces.erase(&Face::from((2, 0, 1))).is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types:
///
/// ```
/// use trindex::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        Edge, EdgeIndex, Face, FaceIndex, HandleAllocation, MeshIndex, Point, VertexId,
        VertexIndex, VertexIndexOptions,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
