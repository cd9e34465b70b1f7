// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Curve job configuration
//!
//! Read from `bezkit.toml` when present, then overridden by the
//! `BEZKIT_SAMPLES` and `BEZKIT_OUTPUT` environment variables.

use crate::geometry::CubicBezierCurve;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "bezkit.toml";
pub const SAMPLES_ENV: &str = "BEZKIT_SAMPLES";
pub const OUTPUT_ENV: &str = "BEZKIT_OUTPUT";

/// Curve sampling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Control points c1..c4 as `[x, y]` pairs
    pub control_points: Vec<[f64; 2]>,
    /// Number of evenly spaced parameters over [0, 1]
    pub samples: usize,
    /// Where to write the samples; format follows the extension
    pub output: Option<PathBuf>,
    /// Draw the control polygon in PNG plots
    pub show_control_points: bool,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            control_points: vec![[0.0, 0.0], [0.0, 0.5], [0.5, 0.5], [0.5, 1.0]],
            samples: 101,
            output: None,
            show_control_points: false,
        }
    }
}

impl CurveConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: CurveConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `bezkit.toml` from the working directory, or defaults, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from a key lookup, normally the process environment
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(samples) = lookup(SAMPLES_ENV) {
            self.samples = samples
                .trim()
                .parse()
                .with_context(|| format!("{} must be a sample count, got {:?}", SAMPLES_ENV, samples))?;
        }

        if let Some(output) = lookup(OUTPUT_ENV) {
            self.output = Some(PathBuf::from(output));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Build the configured curve
    pub fn curve(&self) -> Result<CubicBezierCurve> {
        CubicBezierCurve::from_slice(&self.control_points).context("Invalid control points in config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_reference_curve() -> Result<()> {
        let config = CurveConfig::default();
        assert_eq!(config.samples, 101);
        let curve = config.curve()?;
        assert_eq!(curve.end(), nalgebra::Point2::new(0.5, 1.0));
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bezkit.toml");

        let config = CurveConfig {
            control_points: vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]],
            samples: 17,
            output: Some(PathBuf::from("curve.svg")),
            show_control_points: true,
        };
        config.save(&path)?;

        assert_eq!(CurveConfig::from_file(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bezkit.toml");
        std::fs::write(&path, "samples = 5\n")?;

        let config = CurveConfig::from_file(&path)?;
        assert_eq!(config.samples, 5);
        assert_eq!(config.control_points, CurveConfig::default().control_points);
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<()> {
        let env: HashMap<&str, &str> = [(SAMPLES_ENV, "33"), (OUTPUT_ENV, "out.csv")].into();
        let mut config = CurveConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()))?;

        assert_eq!(config.samples, 33);
        assert_eq!(config.output, Some(PathBuf::from("out.csv")));
        Ok(())
    }

    #[test]
    fn test_bad_sample_override() {
        let mut config = CurveConfig::default();
        let result = config.apply_overrides(|key| (key == SAMPLES_ENV).then(|| "many".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_point_count() {
        let config = CurveConfig {
            control_points: vec![[0.0, 0.0]; 3],
            ..Default::default()
        };
        assert!(config.curve().is_err());
    }
}
