// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry loading and extents tests

use anyhow::Result;
use bezkit::geometry::{BoundingBox, Mesh, Triangle, Vertex};
use bezkit::{io, load_with_extents, mesh_extents, GeometryError};
use nalgebra::{Point3, Vector3};
use std::path::Path;
use tempfile::tempdir;

/// Axis-aligned box spanning `min..max` as 12 triangles
fn box_mesh(min: [f64; 3], max: [f64; 3]) -> Mesh {
    let mut mesh = Mesh::new();
    for i in 0..8 {
        let corner = Point3::new(
            if i & 1 == 0 { min[0] } else { max[0] },
            if i & 2 == 0 { min[1] } else { max[1] },
            if i & 4 == 0 { min[2] } else { max[2] },
        );
        mesh.add_vertex(Vertex::new(corner, Vector3::zeros()));
    }
    let faces = [
        [0, 2, 1], [1, 2, 3], // -z
        [4, 5, 6], [5, 7, 6], // +z
        [0, 1, 4], [1, 5, 4], // -y
        [2, 6, 3], [3, 6, 7], // +y
        [0, 4, 2], [2, 4, 6], // -x
        [1, 3, 5], [3, 7, 5], // +x
    ];
    for face in faces {
        mesh.add_triangle(Triangle::new(face));
    }
    mesh
}

fn write_box(path: &Path, min: [f64; 3], max: [f64; 3]) -> Result<()> {
    io::export_stl(&box_mesh(min, max), path)
}

#[test]
fn test_single_stl_extents() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("part.stl");
    write_box(&path, [-1.0, -2.0, -3.0], [1.5, 2.5, 10.0])?;

    let mesh = io::load_geometry(&path)?;
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.vertex_count(), 36);
    assert_eq!(mesh.max_extents(), Some(Point3::new(1.5, 2.5, 10.0)));
    let expected = BoundingBox::new(Point3::new(-1.0, -2.0, -3.0), Point3::new(1.5, 2.5, 10.0));
    assert!(mesh.bounding_box().approx_eq(&expected, 1e-6));

    let (loaded, max) = load_with_extents(&path)?;
    assert_eq!(loaded.vertex_count(), mesh.vertex_count());
    assert_eq!(max, Point3::new(1.5, 2.5, 10.0));
    Ok(())
}

#[test]
fn test_directory_scene_is_combined() -> Result<()> {
    let dir = tempdir()?;
    write_box(&dir.path().join("a.stl"), [0.0, 0.0, 0.0], [4.0, 1.0, 1.0])?;
    write_box(&dir.path().join("b.STL"), [-5.0, 0.0, 0.0], [1.0, 8.0, 0.5])?;
    std::fs::write(dir.path().join("readme.txt"), "ignored")?;

    let scene = io::load_scene(dir.path())?;
    assert_eq!(scene.len(), 2);

    let combined = io::load_geometry(dir.path())?;
    assert_eq!(combined.triangle_count(), 24);
    assert_eq!(mesh_extents(dir.path())?, Point3::new(4.0, 8.0, 1.0));
    Ok(())
}

#[test]
fn test_load_failures_propagate() -> Result<()> {
    let dir = tempdir()?;

    let missing = dir.path().join("missing.stl");
    assert!(matches!(
        io::load_geometry(&missing),
        Err(GeometryError::NotFound(_))
    ));

    let obj = dir.path().join("model.obj");
    std::fs::write(&obj, "v 0 0 0\n")?;
    assert!(matches!(
        io::load_geometry(&obj),
        Err(GeometryError::UnsupportedFormat(_))
    ));

    assert!(mesh_extents(&missing).is_err());
    Ok(())
}

#[test]
fn test_preview_png() -> Result<()> {
    let dir = tempdir()?;
    let png = dir.path().join("preview.png");
    io::preview_png(&box_mesh([0.0; 3], [1.0; 3]), &png)?;

    let image = image::open(&png)?;
    assert_eq!(image.width(), 1024);
    assert_eq!(image.height(), 768);
    Ok(())
}
