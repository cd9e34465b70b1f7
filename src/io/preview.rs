// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.
//
//! Static preview of a mesh
//!
//! Stands in for an interactive viewer: the mesh is rotated to a fixed
//! three-quarter view, projected orthographically and rasterized with a
//! depth buffer and flat shading.
//
use crate::geometry::Mesh;
use anyhow::{bail, Context, Result};
use image::{Rgb, RgbImage};
use nalgebra::{Rotation3, Vector2, Vector3};
use std::path::Path;

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 768;

/// Render `mesh` into a PNG at `output_png`
pub fn preview_png(mesh: &Mesh, output_png: &Path) -> Result<()> {
    let image = render_preview(mesh, DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
    image
        .save(output_png)
        .with_context(|| format!("Failed to save PNG to {}", output_png.display()))?;
    Ok(())
}

pub fn render_preview(mesh: &Mesh, width: u32, height: u32) -> Result<RgbImage> {
    if mesh.triangles.is_empty() {
        bail!("Mesh does not contain any triangles to render");
    }

    let rotation = Rotation3::from_euler_angles(-0.9, 0.8, 0.3);
    let transformed: Vec<Vector3<f64>> = mesh
        .vertices
        .iter()
        .map(|v| rotation * v.position.coords)
        .collect();

    let projected = project_vertices(&transformed, width, height);
    let depths: Vec<f64> = transformed.iter().map(|p| -p.z).collect();

    let mut image = RgbImage::from_pixel(width, height, Rgb([15, 18, 26]));
    let mut depth_buffer = vec![f64::NEG_INFINITY; (width * height) as usize];
    let light_dir = Vector3::new(0.35, 0.55, 1.0).normalize();

    for triangle in &mesh.triangles {
        let [i0, i1, i2] = triangle.indices;
        let (v0, v1, v2) = (transformed[i0], transformed[i1], transformed[i2]);

        let normal = (v1 - v0).cross(&(v2 - v0));
        if normal.norm_squared() < 1e-12 {
            continue;
        }
        let intensity = normal.normalize().dot(&light_dir).abs().clamp(0.05, 1.0);

        rasterize_triangle(
            &mut image,
            &mut depth_buffer,
            [projected[i0], projected[i1], projected[i2]],
            [depths[i0], depths[i1], depths[i2]],
            intensity,
        );
    }

    Ok(image)
}

fn project_vertices(points: &[Vector3<f64>], width: u32, height: u32) -> Vec<Vector2<f64>> {
    let (min, max) = points.iter().fold(
        (
            Vector2::repeat(f64::INFINITY),
            Vector2::repeat(f64::NEG_INFINITY),
        ),
        |(min, max), p| (min.inf(&p.xy()), max.sup(&p.xy())),
    );

    let span = (max - min).map(|s| s.max(1e-3));
    let scale = 0.9 * (width as f64 / span.x).min(height as f64 / span.y);
    let x_offset = (width as f64 - span.x * scale) * 0.5;
    let y_offset = (height as f64 - span.y * scale) * 0.5;

    points
        .iter()
        .map(|p| {
            Vector2::new(
                (p.x - min.x) * scale + x_offset,
                (max.y - p.y) * scale + y_offset,
            )
        })
        .collect()
}

fn rasterize_triangle(
    image: &mut RgbImage,
    depth_buffer: &mut [f64],
    points: [Vector2<f64>; 3],
    depths: [f64; 3],
    intensity: f64,
) {
    let width = image.width() as i64;
    let height = image.height() as i64;

    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min).floor().max(0.0) as i64;
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max).ceil() as i64;
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min).floor().max(0.0) as i64;
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max).ceil() as i64;
    let (max_x, max_y) = (max_x.min(width - 1), max_y.min(height - 1));

    let area = edge(points[0], points[1], points[2]);
    if area.abs() < 1e-6 {
        return;
    }
    let inv_area = 1.0 / area;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vector2::new(x as f64 + 0.5, y as f64 + 0.5);
            let w0 = edge(points[1], points[2], p);
            let w1 = edge(points[2], points[0], p);
            let w2 = edge(points[0], points[1], p);

            let inside = (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0)
                || (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0);
            if !inside {
                continue;
            }

            let depth = (w0 * depths[0] + w1 * depths[1] + w2 * depths[2]) * inv_area;
            let idx = (y * width + x) as usize;
            if depth > depth_buffer[idx] {
                depth_buffer[idx] = depth;
                let shade = (intensity * 205.0 + 40.0).clamp(0.0, 255.0) as u8;
                let color = Rgb([
                    shade,
                    (shade as f64 * 0.92) as u8,
                    (shade as f64 * 0.78 + 20.0).min(255.0) as u8,
                ]);
                image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

fn edge(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> f64 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}
