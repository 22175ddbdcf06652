//! Trindex CLI - mesh topology command-line tool.
//!
//! Usage: trindex <COMMAND> [OPTIONS] <INPUT>...
//!
//! Run `trindex --help` for available commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

use trindex::error::MeshError;
use trindex::io::{self, csv};
use trindex::mesh::{Edge, EdgeIndex, Face, FaceIndex, VertexId, VertexIndex};

#[derive(Parser)]
#[command(name = "trindex")]
#[command(author, version, about = "Mesh topology index CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh counts
    Info {
        /// Vertex file (x,y,z per line)
        vertices: PathBuf,

        /// Face file (v1,v2,v3 per line)
        faces: PathBuf,
    },

    /// Derive the edge set of a face file
    Edges {
        /// Face file
        faces: PathBuf,

        /// Output edge file
        output: PathBuf,
    },

    /// List the faces around a vertex or along an edge
    Search {
        /// Face file
        faces: PathBuf,

        /// Vertex handle
        #[arg(long, conflicts_with = "edge", required_unless_present = "edge")]
        vertex: Option<usize>,

        /// Edge as `A,B`
        #[arg(long, value_parser = parse_edge)]
        edge: Option<(usize, usize)>,
    },

    /// Erase faces by vertex, edge or exact face and write the result
    ///
    /// Vertices are erased first, then edges, then faces. The edge file is
    /// maintained incrementally and checked against a full rebuild. The vertex
    /// file is written unchanged so face handles stay valid.
    Erase {
        /// Vertex file
        vertices: PathBuf,

        /// Face file
        faces: PathBuf,

        /// Output directory for vertices.txt, edges.txt and faces.txt
        out_dir: PathBuf,

        /// Erase every face around this vertex (repeatable)
        #[arg(long = "vertex")]
        vertices_to_erase: Vec<usize>,

        /// Erase every face along this edge, given as `A,B` (repeatable)
        #[arg(long = "edge", value_parser = parse_edge)]
        edges_to_erase: Vec<(usize, usize)>,

        /// Erase this exact face, given as `A,B,C` in winding order (repeatable)
        #[arg(long = "face", value_parser = parse_face)]
        faces_to_erase: Vec<(usize, usize, usize)>,
    },

    /// List points held by more than one vertex
    Duplicates {
        /// Vertex file
        vertices: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { vertices, faces } => {
            cmd_info(&vertices, &faces)?;
        }

        Commands::Edges { faces, output } => {
            cmd_edges(&faces, &output)?;
        }

        Commands::Search { faces, vertex, edge } => {
            cmd_search(&faces, vertex, edge)?;
        }

        Commands::Erase {
            vertices,
            faces,
            out_dir,
            vertices_to_erase,
            edges_to_erase,
            faces_to_erase,
        } => {
            cmd_erase(
                &vertices,
                &faces,
                &out_dir,
                &vertices_to_erase,
                &edges_to_erase,
                &faces_to_erase,
            )?;
        }

        Commands::Duplicates { vertices } => {
            cmd_duplicates(&vertices)?;
        }
    }

    Ok(())
}

fn parse_edge(s: &str) -> Result<(usize, usize), String> {
    match parse_handles(s)?.as_slice() {
        &[a, b] => Ok((a, b)),
        other => Err(format!("expected 2 vertex handles, found {}", other.len())),
    }
}

fn parse_face(s: &str) -> Result<(usize, usize, usize), String> {
    match parse_handles(s)?.as_slice() {
        &[a, b, c] => Ok((a, b, c)),
        other => Err(format!("expected 3 vertex handles, found {}", other.len())),
    }
}

fn parse_handles(s: &str) -> Result<Vec<usize>, String> {
    s.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<usize>()
                .map_err(|e| format!("bad vertex handle {:?}: {}", part, e))
        })
        .collect()
}

fn vertex_id(raw: usize) -> Result<VertexId, MeshError> {
    VertexId::try_new(raw).ok_or_else(|| MeshError::invalid_param("vertex", raw, "out of range"))
}

fn edge(raw: (usize, usize)) -> Result<Edge, MeshError> {
    Ok(Edge::new(vertex_id(raw.0)?, vertex_id(raw.1)?))
}

fn face(raw: (usize, usize, usize)) -> Result<Face, MeshError> {
    Ok(Face::new(vertex_id(raw.0)?, vertex_id(raw.1)?, vertex_id(raw.2)?))
}

fn load_faces(path: &Path) -> Result<FaceIndex, MeshError> {
    let mut faces = FaceIndex::new();
    csv::load_faces(path, &mut faces)?;
    Ok(faces)
}

fn print_faces<P>(faces: &std::collections::BTreeMap<Face, &P>) {
    if faces.is_empty() {
        println!("  No faces found.");
        return;
    }
    for f in faces.keys() {
        println!("  {},{},{}", f.v1(), f.v2(), f.v3());
    }
}

fn cmd_info(vertices: &Path, faces: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (verts, faces): (VertexIndex, FaceIndex) = io::load(vertices, faces)?;
    let edges = faces.edges();

    println!("Vertices: {}", verts.len());
    println!("Edges: {}", edges.len());
    println!("Faces: {}", faces.len());

    let euler = verts.len() as i64 - edges.len() as i64 + faces.len() as i64;
    println!("Euler characteristic: {}", euler);

    let duplicated = verts.duplicates().count();
    if duplicated == 0 {
        println!("Duplicate points: none");
    } else {
        println!("Duplicate points: {}", duplicated);
    }

    let unreferenced = verts
        .iter()
        .filter(|&(v, _)| faces.search_vertex(v).is_empty())
        .count();
    println!("Vertices without faces: {}", unreferenced);

    Ok(())
}

fn cmd_edges(faces: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let faces = load_faces(faces)?;
    println!("Loaded: {} faces", faces.len());

    let start = Instant::now();
    let edges = faces.edges();
    let elapsed = start.elapsed();

    csv::save_edges(&edges, output)?;
    println!("Saved: {} edges to {} ({:.2?})", edges.len(), output.display(), elapsed);

    Ok(())
}

fn cmd_search(
    faces: &Path,
    vertex: Option<usize>,
    edge_arg: Option<(usize, usize)>,
) -> Result<(), Box<dyn std::error::Error>> {
    let faces = load_faces(faces)?;

    if let Some(raw) = vertex {
        let found = faces.search_vertex(vertex_id(raw)?);
        println!("Faces around vertex {}: {}", raw, found.len());
        print_faces(&found);
    } else if let Some(raw) = edge_arg {
        let found = faces.search_edge(&edge(raw)?);
        println!("Faces along edge {},{}: {}", raw.0, raw.1, found.len());
        print_faces(&found);
    }

    Ok(())
}

fn cmd_erase(
    vertices: &Path,
    faces: &Path,
    out_dir: &Path,
    vertices_to_erase: &[usize],
    edges_to_erase: &[(usize, usize)],
    faces_to_erase: &[(usize, usize, usize)],
) -> Result<(), Box<dyn std::error::Error>> {
    let (verts, mut incremental): (VertexIndex, FaceIndex) = io::load(vertices, faces)?;
    let mut deferred = incremental.clone();
    let mut edges = EdgeIndex::new();
    incremental.sync(&mut edges);

    println!(
        "Loaded: {} vertices, {} edges, {} faces",
        verts.len(),
        edges.len(),
        incremental.len()
    );

    let start = Instant::now();
    for &raw in vertices_to_erase {
        let v = vertex_id(raw)?;
        let before = incremental.len();
        incremental.erase_vertex_with_edges(v, &mut edges);
        deferred.erase_vertex(v);
        println!("  vertex {}: {} -> {} faces", raw, before, incremental.len());
    }
    for &raw in edges_to_erase {
        let e = edge(raw)?;
        let before = incremental.len();
        incremental.erase_edge_with_edges(&e, &mut edges);
        deferred.erase_edge(&e);
        println!("  edge {},{}: {} -> {} faces", raw.0, raw.1, before, incremental.len());
    }
    for &raw in faces_to_erase {
        let f = face(raw)?;
        let before = incremental.len();
        incremental.erase_with_edges(&f, &mut edges);
        deferred.erase(&f);
        println!(
            "  face {},{},{}: {} -> {} faces",
            raw.0,
            raw.1,
            raw.2,
            before,
            incremental.len()
        );
    }
    let elapsed = start.elapsed();

    let mut rebuilt = EdgeIndex::new();
    deferred.sync(&mut rebuilt);
    if rebuilt.to_vec() != edges.to_vec() {
        return Err(MeshError::InvalidState(format!(
            "incremental edges ({}) differ from rebuilt edges ({})",
            edges.len(),
            rebuilt.len()
        ))
        .into());
    }
    log::info!("incremental and rebuilt edge sets agree ({} edges)", edges.len());

    println!(
        "Result: {} edges, {} faces ({:.2?})",
        edges.len(),
        incremental.len(),
        elapsed
    );

    std::fs::create_dir_all(out_dir)?;
    csv::save_vertices(&verts, out_dir.join("vertices.txt"))?;
    csv::save_edges(&edges, out_dir.join("edges.txt"))?;
    csv::save_faces(&incremental, out_dir.join("faces.txt"))?;
    println!("Saved: {}", out_dir.display());

    Ok(())
}

fn cmd_duplicates(vertices: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut verts: VertexIndex = VertexIndex::new();
    csv::load_vertices(vertices, &mut verts)?;

    let mut count = 0;
    for (p, ids) in verts.duplicates() {
        count += 1;
        let ids: Vec<String> = ids.iter().map(|v| v.to_string()).collect();
        println!("({}, {}, {}): {}", p.x(), p.y(), p.z(), ids.join(","));
    }
    if count == 0 {
        println!("No duplicate points among {} vertices.", verts.len());
    }

    Ok(())
}
