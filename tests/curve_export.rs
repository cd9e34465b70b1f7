// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Exporting sampled curves to files

use anyhow::Result;
use bezkit::io::{self, PlotOptions};
use bezkit::{sample_curve, CurveConfig};
use tempfile::tempdir;

#[test]
fn test_export_by_extension() -> Result<()> {
    let dir = tempdir()?;
    let samples = sample_curve(&CurveConfig::default())?;

    for name in ["curve.png", "curve.svg", "curve.csv", "curve.json"] {
        let path = dir.path().join(name);
        io::export_samples(&samples, &path, &PlotOptions::default())?;
        assert!(path.metadata()?.len() > 0, "{} is empty", name);
    }

    let csv = std::fs::read_to_string(dir.path().join("curve.csv"))?;
    assert_eq!(csv.lines().count(), 102);

    let svg = std::fs::read_to_string(dir.path().join("curve.svg"))?;
    assert!(svg.contains("<polyline"));
    Ok(())
}

#[test]
fn test_png_has_requested_size() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("curve.png");
    let config = CurveConfig {
        samples: 21,
        ..Default::default()
    };
    let curve = config.curve()?;
    let options = PlotOptions {
        width: 320,
        height: 240,
        margin: 10,
        control_points: curve.control_points().to_vec(),
    };

    io::plot_png(&sample_curve(&config)?, &path, &options)?;

    let image = image::open(&path)?;
    assert_eq!((image.width(), image.height()), (320, 240));
    Ok(())
}

#[test]
fn test_unknown_extension_is_rejected() -> Result<()> {
    let dir = tempdir()?;
    let samples = sample_curve(&CurveConfig::default())?;
    let path = dir.path().join("curve.gif");

    assert!(io::export_samples(&samples, &path, &PlotOptions::default()).is_err());
    assert!(!path.exists());
    Ok(())
}
