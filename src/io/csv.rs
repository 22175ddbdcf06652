//! Flat comma-separated mesh files.
//!
//! Three line-oriented files describe a mesh, one record per line:
//!
//! | File | Record | Order |
//! |------|--------|-------|
//! | vertices | `x,y,z` | handle order |
//! | faces | `v1,v2,v3` | canonical face order |
//! | edges | `a,b` | canonical edge order |
//!
//! Coordinates are written with the shortest representation that reads back
//! to the same `f64`, so a save/load round trip is exact. Blank lines and
//! whitespace around fields are ignored; CRLF line endings are accepted.
//!
//! Readers parse the whole input before touching the index, so a malformed
//! file leaves the index unchanged.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::{Edge, EdgeIndex, Face, FaceIndex, MeshIndex, Point, VertexId, VertexIndex};

/// Read `x,y,z` records and insert them in file order.
///
/// Returns the handles assigned, in file order. On an empty index with the
/// default allocation these are `0..n`. A file with more points than free
/// handles fails with [`MeshError::HandlesExhausted`].
///
/// # Example
///
/// ```
/// use trindex::io::csv;
/// use trindex::mesh::VertexIndex;
///
/// let mut verts: VertexIndex = VertexIndex::new();
/// let ids = csv::read_vertices("0,0,0\n1.5,-2,3e-3\n".as_bytes(), &mut verts).unwrap();
/// assert_eq!(ids.len(), 2);
/// assert_eq!(verts.get(ids[1]).unwrap().z(), 3e-3);
/// ```
pub fn read_vertices<R: BufRead, I: MeshIndex>(
    reader: R,
    verts: &mut VertexIndex<I>,
) -> Result<Vec<VertexId<I>>> {
    let mut points = Vec::new();
    for record in records::<_, 3>(reader) {
        let (line, fields) = record?;
        let mut coords = [0.0; 3];
        for (c, field) in coords.iter_mut().zip(fields) {
            *c = field
                .parse::<f64>()
                .map_err(|e| MeshError::parse(line, format!("bad coordinate {:?}: {}", field, e)))?;
        }
        points.push(Point::from(coords));
    }
    verts.try_extend_points(points)
}

/// Read `v1,v2,v3` records and insert them with default payloads.
///
/// Degenerate faces are skipped like any other insert. Returns the number of
/// new faces stored.
pub fn read_faces<R: BufRead, I: MeshIndex, P: Default>(
    reader: R,
    faces: &mut FaceIndex<I, P>,
) -> Result<usize> {
    let mut parsed = Vec::new();
    for record in records::<_, 3>(reader) {
        let (line, [a, b, c]) = record?;
        parsed.push(Face::new(
            parse_handle(line, &a)?,
            parse_handle(line, &b)?,
            parse_handle(line, &c)?,
        ));
    }
    Ok(faces.extend_faces(parsed))
}

/// Read `a,b` records into an edge index.
///
/// Self-loops are skipped. Returns the number of new edges stored.
pub fn read_edges<R: BufRead, I: MeshIndex>(reader: R, edges: &mut EdgeIndex<I>) -> Result<usize> {
    let mut parsed = Vec::new();
    for record in records::<_, 2>(reader) {
        let (line, [a, b]) = record?;
        parsed.push(Edge::new(parse_handle(line, &a)?, parse_handle(line, &b)?));
    }
    Ok(parsed.into_iter().filter(|&e| edges.insert(e)).count())
}

/// Write every point as `x,y,z` in handle order.
pub fn write_vertices<W: Write, I: MeshIndex>(verts: &VertexIndex<I>, mut writer: W) -> Result<()> {
    for (_, p) in verts.iter() {
        writeln!(writer, "{},{},{}", p.x(), p.y(), p.z())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write every edge as `a,b` in canonical order.
pub fn write_edges<W: Write, I: MeshIndex>(edges: &EdgeIndex<I>, mut writer: W) -> Result<()> {
    for e in edges.iter() {
        writeln!(writer, "{},{}", e.v1(), e.v2())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write every face as `v1,v2,v3` in canonical order. Payloads are not written.
pub fn write_faces<W: Write, I: MeshIndex, P>(faces: &FaceIndex<I, P>, mut writer: W) -> Result<()> {
    for (f, _) in faces.iter() {
        writeln!(writer, "{},{},{}", f.v1(), f.v2(), f.v3())?;
    }
    writer.flush()?;
    Ok(())
}

/// Load a vertex file into `verts`.
pub fn load_vertices<Q: AsRef<Path>, I: MeshIndex>(
    path: Q,
    verts: &mut VertexIndex<I>,
) -> Result<Vec<VertexId<I>>> {
    let path = path.as_ref();
    let ids = open(path).and_then(|r| read_vertices(r, verts)).map_err(|e| load_error(path, e))?;
    log::debug!("loaded {} vertices from {}", ids.len(), path.display());
    Ok(ids)
}

/// Load a face file into `faces`.
pub fn load_faces<Q: AsRef<Path>, I: MeshIndex, P: Default>(
    path: Q,
    faces: &mut FaceIndex<I, P>,
) -> Result<usize> {
    let path = path.as_ref();
    let added = open(path).and_then(|r| read_faces(r, faces)).map_err(|e| load_error(path, e))?;
    log::debug!("loaded {} faces from {}", added, path.display());
    Ok(added)
}

/// Load an edge file into `edges`.
pub fn load_edges<Q: AsRef<Path>, I: MeshIndex>(path: Q, edges: &mut EdgeIndex<I>) -> Result<usize> {
    let path = path.as_ref();
    let added = open(path).and_then(|r| read_edges(r, edges)).map_err(|e| load_error(path, e))?;
    log::debug!("loaded {} edges from {}", added, path.display());
    Ok(added)
}

/// Save `verts` to a vertex file.
pub fn save_vertices<Q: AsRef<Path>, I: MeshIndex>(verts: &VertexIndex<I>, path: Q) -> Result<()> {
    let path = path.as_ref();
    create(path)
        .and_then(|w| write_vertices(verts, w))
        .map_err(|e| save_error(path, e))?;
    log::debug!("saved {} vertices to {}", verts.len(), path.display());
    Ok(())
}

/// Save `edges` to an edge file.
pub fn save_edges<Q: AsRef<Path>, I: MeshIndex>(edges: &EdgeIndex<I>, path: Q) -> Result<()> {
    let path = path.as_ref();
    create(path)
        .and_then(|w| write_edges(edges, w))
        .map_err(|e| save_error(path, e))?;
    log::debug!("saved {} edges to {}", edges.len(), path.display());
    Ok(())
}

/// Save `faces` to a face file.
pub fn save_faces<Q: AsRef<Path>, I: MeshIndex, P>(faces: &FaceIndex<I, P>, path: Q) -> Result<()> {
    let path = path.as_ref();
    create(path)
        .and_then(|w| write_faces(faces, w))
        .map_err(|e| save_error(path, e))?;
    log::debug!("saved {} faces to {}", faces.len(), path.display());
    Ok(())
}

fn open(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

fn load_error(path: &Path, source: MeshError) -> MeshError {
    MeshError::LoadError {
        path: path.to_path_buf(),
        source: Box::new(source),
    }
}

fn save_error(path: &Path, source: MeshError) -> MeshError {
    MeshError::SaveError {
        path: path.to_path_buf(),
        source: Box::new(source),
    }
}

/// Non-blank lines split into exactly `N` trimmed fields, with 1-based line numbers.
fn records<R: BufRead, const N: usize>(
    reader: R,
) -> impl Iterator<Item = Result<(usize, [String; N])>> {
    reader.lines().enumerate().filter_map(|(i, line)| {
        let line_no = i + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let fields: Vec<String> = trimmed.split(',').map(|f| f.trim().to_string()).collect();
        Some(fields.try_into().map(|f| (line_no, f)).map_err(|f: Vec<String>| {
            MeshError::parse(line_no, format!("expected {} fields, found {}", N, f.len()))
        }))
    })
}

fn parse_handle<I: MeshIndex>(line: usize, field: &str) -> Result<VertexId<I>> {
    let raw = field
        .parse::<usize>()
        .map_err(|e| MeshError::parse(line, format!("bad vertex index {:?}: {}", field, e)))?;
    VertexId::try_new(raw)
        .ok_or_else(|| MeshError::parse(line, format!("vertex index {} out of range", raw)))
}
