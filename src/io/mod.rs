//! Mesh file I/O.
//!
//! Meshes are exchanged as flat comma-separated text files, one for vertices,
//! one for faces and optionally one for edges. See [`csv`] for the format.
//!
//! # Usage
//!
//! ```no_run
//! use trindex::io;
//! use trindex::mesh::{FaceIndex, VertexIndex};
//!
//! let (verts, faces): (VertexIndex, FaceIndex) = io::load("verts.txt", "faces.txt").unwrap();
//! io::save(&verts, &faces, "out_verts.txt", "out_faces.txt").unwrap();
//! ```

pub mod csv;

use std::path::Path;

use crate::error::Result;
use crate::mesh::{FaceIndex, MeshIndex, VertexIndex};

/// Load a vertex file and a face file into fresh indices.
///
/// Vertices get handles `0..n` in file order, which is what the face file
/// refers to. Faces get default payloads.
pub fn load<V, F, I, P>(vertices: V, faces: F) -> Result<(VertexIndex<I>, FaceIndex<I, P>)>
where
    V: AsRef<Path>,
    F: AsRef<Path>,
    I: MeshIndex,
    P: Default,
{
    let mut verts = VertexIndex::new();
    let mut face_index = FaceIndex::new();
    csv::load_vertices(vertices, &mut verts)?;
    csv::load_faces(faces, &mut face_index)?;
    Ok((verts, face_index))
}

/// Save vertices and faces to two files.
pub fn save<V, F, I, P>(
    verts: &VertexIndex<I>,
    faces: &FaceIndex<I, P>,
    vertices_path: V,
    faces_path: F,
) -> Result<()>
where
    V: AsRef<Path>,
    F: AsRef<Path>,
    I: MeshIndex,
{
    csv::save_vertices(verts, vertices_path)?;
    csv::save_faces(faces, faces_path)?;
    Ok(())
}
