// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.
//
//! Line plot rendering for sampled curves
//
use crate::geometry::SampledCurve;
use anyhow::{bail, Context, Result};
use image::{Rgb, RgbImage};
use nalgebra::{Point2, Vector2};
use std::path::Path;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const CURVE: Rgb<u8> = Rgb([31, 119, 180]);
const POLYGON: Rgb<u8> = Rgb([190, 190, 190]);
const CONTROL: Rgb<u8> = Rgb([214, 39, 40]);

/// Canvas settings for [`plot_png`]
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    /// Blank border in pixels around the plotted data
    pub margin: u32,
    /// Drawn as a grey polygon with marked vertices when non-empty
    pub control_points: Vec<Point2<f64>>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            margin: 32,
            control_points: Vec::new(),
        }
    }
}

/// Plot the sampled polyline into a PNG at `path`
pub fn plot_png(samples: &SampledCurve, path: &Path, options: &PlotOptions) -> Result<()> {
    let image = render_plot(samples, options)?;
    image
        .save(path)
        .with_context(|| format!("Failed to save PNG to {}", path.display()))?;
    Ok(())
}

/// Rasterize the plot in memory
pub fn render_plot(samples: &SampledCurve, options: &PlotOptions) -> Result<RgbImage> {
    if samples.is_empty() {
        bail!("Nothing to plot: curve has no samples");
    }
    if options.width <= 2 * options.margin || options.height <= 2 * options.margin {
        bail!(
            "Plot of {}x{} leaves no room inside a {}px margin",
            options.width,
            options.height,
            options.margin
        );
    }

    let points = samples.points();
    let projection = Projection::fit(points.iter().chain(&options.control_points), options);
    let mut image = RgbImage::from_pixel(options.width, options.height, BACKGROUND);

    if !options.control_points.is_empty() {
        let polygon: Vec<Vector2<f64>> = options
            .control_points
            .iter()
            .map(|p| projection.apply(p))
            .collect();
        for pair in polygon.windows(2) {
            draw_line(&mut image, pair[0], pair[1], POLYGON);
        }
        for p in &polygon {
            draw_marker(&mut image, *p, CONTROL);
        }
    }

    let projected: Vec<Vector2<f64>> = points.iter().map(|p| projection.apply(p)).collect();
    if let [single] = projected.as_slice() {
        draw_marker(&mut image, *single, CURVE);
    }
    for pair in projected.windows(2) {
        draw_line(&mut image, pair[0], pair[1], CURVE);
    }

    Ok(image)
}

/// Maps data coordinates to pixels, preserving aspect ratio, y up
struct Projection {
    min: Point2<f64>,
    max_y: f64,
    scale: f64,
    offset: Vector2<f64>,
}

impl Projection {
    fn fit<'a>(points: impl Iterator<Item = &'a Point2<f64>>, options: &PlotOptions) -> Self {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points.filter(|p| p.x.is_finite() && p.y.is_finite()) {
            min = min.inf(p);
            max = max.sup(p);
        }
        if min.x > max.x {
            min = Point2::origin();
            max = Point2::origin();
        }

        let inner_w = (options.width - 2 * options.margin) as f64;
        let inner_h = (options.height - 2 * options.margin) as f64;
        let span_x = (max.x - min.x).max(1e-9);
        let span_y = (max.y - min.y).max(1e-9);
        let scale = (inner_w / span_x).min(inner_h / span_y);

        let offset = Vector2::new(
            options.margin as f64 + (inner_w - (max.x - min.x) * scale) * 0.5,
            options.margin as f64 + (inner_h - (max.y - min.y) * scale) * 0.5,
        );

        Self {
            min,
            max_y: max.y,
            scale,
            offset,
        }
    }

    fn apply(&self, p: &Point2<f64>) -> Vector2<f64> {
        Vector2::new(
            (p.x - self.min.x) * self.scale + self.offset.x,
            (self.max_y - p.y) * self.scale + self.offset.y,
        )
    }
}

fn put(image: &mut RgbImage, x: f64, y: f64, color: Rgb<u8>) {
    if x < 0.0 || y < 0.0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < image.width() && y < image.height() {
        image.put_pixel(x, y, color);
    }
}

fn draw_line(image: &mut RgbImage, a: Vector2<f64>, b: Vector2<f64>, color: Rgb<u8>) {
    let delta = b - a;
    if !delta.x.is_finite() || !delta.y.is_finite() {
        return;
    }
    let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let p = a + delta * (i as f64 / steps as f64);
        put(image, p.x, p.y, color);
    }
}

fn draw_marker(image: &mut RgbImage, center: Vector2<f64>, color: Rgb<u8>) {
    for dy in -2..=2 {
        for dx in -2..=2 {
            put(image, center.x + dx as f64, center.y + dy as f64, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{sample, CubicBezierCurve};

    fn curve() -> CubicBezierCurve {
        CubicBezierCurve::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.5),
            Point2::new(0.5, 0.5),
            Point2::new(0.5, 1.0),
        )
    }

    #[test]
    fn test_plot_dimensions() -> Result<()> {
        let options = PlotOptions {
            width: 200,
            height: 100,
            ..Default::default()
        };
        let image = render_plot(&sample(&curve(), 101), &options)?;
        assert_eq!(image.dimensions(), (200, 100));
        assert!(image.pixels().any(|p| *p == CURVE));
        Ok(())
    }

    #[test]
    fn test_curve_spans_inner_height() -> Result<()> {
        let options = PlotOptions::default();
        let image = render_plot(&sample(&curve(), 101), &options)?;

        // The curve spans 0.5 x 1.0, so it fills the full inner height.
        let bottom = options.height - options.margin;
        let top = options.margin;
        assert!((0..options.width).any(|x| *image.get_pixel(x, bottom) == CURVE));
        assert!((0..options.width).any(|x| *image.get_pixel(x, top) == CURVE));
        Ok(())
    }

    #[test]
    fn test_control_points_are_marked() -> Result<()> {
        let c = curve();
        let options = PlotOptions {
            control_points: c.control_points().to_vec(),
            ..Default::default()
        };
        let image = render_plot(&sample(&c, 11), &options)?;
        assert!(image.pixels().any(|p| *p == CONTROL));
        Ok(())
    }

    #[test]
    fn test_rejects_empty_samples() {
        assert!(render_plot(&SampledCurve::default(), &PlotOptions::default()).is_err());
    }
}
