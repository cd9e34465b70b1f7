// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bezkit
//!
//! Cubic Bezier curve evaluation in matrix form, uniform sampling with
//! plot/export helpers, and per-axis extents of STL geometry.

pub mod cli;
pub mod config;
pub mod geometry;
pub mod io;
pub mod utils;

pub use config::CurveConfig;
pub use geometry::{sample, BoundingBox, CubicBezierCurve, CurveSample, Mesh, SampledCurve};
pub use io::{load_geometry, GeometryError};

use anyhow::{anyhow, Context, Result};
use nalgebra::Point3;
use std::path::Path;

/// Sample the curve described by a config
pub fn sample_curve(config: &CurveConfig) -> Result<SampledCurve> {
    let curve = config.curve()?;
    Ok(sample(&curve, config.samples))
}

/// Load the geometry at `path` as one mesh along with its per-axis maximum
/// vertex coordinate
pub fn load_with_extents(path: impl AsRef<Path>) -> Result<(Mesh, Point3<f64>)> {
    let path = path.as_ref();
    let mesh = load_geometry(path)
        .with_context(|| format!("Failed to load geometry: {}", path.display()))?;
    let max = mesh
        .max_extents()
        .ok_or_else(|| anyhow!("Geometry has no vertices: {}", path.display()))?;
    Ok((mesh, max))
}

/// Per-axis maximum vertex coordinate of the geometry at `path`
pub fn mesh_extents(path: impl AsRef<Path>) -> Result<Point3<f64>> {
    load_with_extents(path).map(|(_, max)| max)
}
