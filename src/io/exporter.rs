// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Sample and mesh exporters

use super::plot::{plot_png, PlotOptions};
use crate::geometry::{Mesh, SampledCurve};
use anyhow::{bail, Context, Result};
use log::debug;
use nalgebra::{Point2, Vector3};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output formats for sampled curves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Png,
    Svg,
    Csv,
    Json,
}

impl SampleFormat {
    /// Pick a format from the file extension of `path`
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => bail!(
                "Unsupported output format for {} (expected png, svg, csv or json)",
                path.display()
            ),
        }
    }
}

/// Write samples to `path`, choosing the format from its extension
pub fn export_samples(samples: &SampledCurve, path: &Path, options: &PlotOptions) -> Result<()> {
    let format = SampleFormat::from_path(path)?;
    debug!("exporting {} samples as {:?}", samples.len(), format);

    match format {
        SampleFormat::Png => plot_png(samples, path, options),
        SampleFormat::Svg => write_svg(samples, path),
        SampleFormat::Csv => write_csv(samples, path),
        SampleFormat::Json => write_json(samples, path),
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// `t,x,y` rows preceded by a header line
pub fn write_csv(samples: &SampledCurve, path: &Path) -> Result<()> {
    let mut writer = create(path)?;
    writeln!(writer, "t,x,y")?;
    for s in &samples.samples {
        writeln!(writer, "{},{},{}", s.t, s.point.x, s.point.y)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json(samples: &SampledCurve, path: &Path) -> Result<()> {
    let mut writer = create(path)?;
    serde_json::to_writer_pretty(&mut writer, samples).context("Failed to serialize samples")?;
    writer.flush()?;
    Ok(())
}

/// Render samples as an SVG polyline, y axis pointing up
pub fn write_svg(samples: &SampledCurve, path: &Path) -> Result<()> {
    let mut writer = create(path)?;
    writer.write_all(to_svg(samples).as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn to_svg(samples: &SampledCurve) -> String {
    let (min, max) = samples
        .bounds()
        .unwrap_or((Point2::origin(), Point2::origin()));
    let width = (max.x - min.x).max(1e-9);
    let height = (max.y - min.y).max(1e-9);
    let stroke = width.max(height) / 200.0;

    let points: Vec<String> = samples
        .samples
        .iter()
        .map(|s| format!("{},{}", s.point.x, s.point.y))
        .collect();

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n  \
         <g transform=\"scale(1,-1)\">\n    \
         <polyline points=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"{}\"/>\n  \
         </g>\n</svg>\n",
        min.x,
        -max.y,
        width,
        height,
        points.join(" "),
        stroke
    )
}

/// Export mesh to binary STL
pub fn export_stl(mesh: &Mesh, path: &Path) -> Result<()> {
    use stl_io::{Normal, Triangle as StlTriangle, Vertex as StlVertex};

    let triangles: Vec<StlTriangle> = mesh
        .triangles
        .iter()
        .map(|tri| {
            let [v0, v1, v2] = tri.indices.map(|i| mesh.vertices[i].position);
            let normal = (v1 - v0)
                .cross(&(v2 - v0))
                .try_normalize(1e-12)
                .unwrap_or_else(Vector3::zeros);

            StlTriangle {
                normal: Normal::new([normal.x as f32, normal.y as f32, normal.z as f32]),
                vertices: [v0, v1, v2].map(|v| StlVertex::new([v.x as f32, v.y as f32, v.z as f32])),
            }
        })
        .collect();

    let mut writer = create(path)?;
    stl_io::write_stl(&mut writer, triangles.iter())
        .with_context(|| format!("Failed to write STL: {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
