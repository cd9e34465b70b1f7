// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry importer
//!
//! A path names either a single STL file or a directory whose STL files
//! together form one scene.

use crate::geometry::{Mesh, Triangle, Vertex};
use log::debug;
use nalgebra::{Point3, Vector3};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("geometry path not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported geometry format: {0} (expected .stl)")]
    UnsupportedFormat(PathBuf),

    #[error("failed to read geometry {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk geometry directory")]
    Walk(#[from] walkdir::Error),

    #[error("no geometry found in {0}")]
    Empty(PathBuf),
}

fn is_stl(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("stl"))
}

/// Load a single STL file into a mesh
pub fn load_stl(path: &Path) -> Result<Mesh, GeometryError> {
    if !path.exists() {
        return Err(GeometryError::NotFound(path.to_path_buf()));
    }
    if !is_stl(path) {
        return Err(GeometryError::UnsupportedFormat(path.to_path_buf()));
    }

    let parse_error = |source| GeometryError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(parse_error)?;
    let stl = stl_io::read_stl(&mut BufReader::new(file)).map_err(parse_error)?;

    let mut mesh = Mesh::with_capacity(stl.faces.len() * 3, stl.faces.len());
    for face in &stl.faces {
        let normal = Vector3::new(
            face.normal[0] as f64,
            face.normal[1] as f64,
            face.normal[2] as f64,
        );
        let indices = face.vertices.map(|index| {
            let v = &stl.vertices[index];
            mesh.add_vertex(Vertex::new(
                Point3::new(v[0] as f64, v[1] as f64, v[2] as f64),
                normal,
            ))
        });
        mesh.add_triangle(Triangle::new(indices));
    }

    debug!(
        "loaded {}: {} triangles",
        path.display(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Load every geometry under `path`, in file name order for directories
pub fn load_scene(path: &Path) -> Result<Vec<Mesh>, GeometryError> {
    if !path.exists() {
        return Err(GeometryError::NotFound(path.to_path_buf()));
    }

    if !path.is_dir() {
        return Ok(vec![load_stl(path)?]);
    }

    let mut meshes = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_stl(entry.path()) {
            meshes.push(load_stl(entry.path())?);
        }
    }

    if meshes.is_empty() {
        return Err(GeometryError::Empty(path.to_path_buf()));
    }
    Ok(meshes)
}

/// Load a scene and combine all of its geometries into one mesh
pub fn load_geometry(path: &Path) -> Result<Mesh, GeometryError> {
    let meshes = load_scene(path)?;
    let mesh = Mesh::concatenate(&meshes);
    if mesh.is_empty() {
        return Err(GeometryError::Empty(path.to_path_buf()));
    }
    debug!(
        "combined {} geometries into {} vertices",
        meshes.len(),
        mesh.vertex_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, Builder};

    #[test]
    fn test_missing_file() {
        let err = load_geometry(Path::new("does/not/exist.stl")).unwrap_err();
        assert!(matches!(err, GeometryError::NotFound(_)));
    }

    #[test]
    fn test_unsupported_extension() -> anyhow::Result<()> {
        let mut file = Builder::new().suffix(".obj").tempfile()?;
        writeln!(file, "v 0 0 0")?;

        let err = load_geometry(file.path()).unwrap_err();
        assert!(matches!(err, GeometryError::UnsupportedFormat(_)));
        Ok(())
    }

    #[test]
    fn test_garbage_stl() -> anyhow::Result<()> {
        let mut file = Builder::new().suffix(".stl").tempfile()?;
        file.write_all(b"not an stl")?;

        let err = load_stl(file.path()).unwrap_err();
        assert!(matches!(err, GeometryError::Parse { .. }));
        Ok(())
    }

    #[test]
    fn test_directory_without_stl() -> anyhow::Result<()> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("notes.txt"), "nothing here")?;

        let err = load_geometry(dir.path()).unwrap_err();
        assert!(matches!(err, GeometryError::Empty(_)));
        Ok(())
    }
}
