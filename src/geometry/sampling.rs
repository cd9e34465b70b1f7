// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Uniform parameter sampling of curves

use super::CubicBezierCurve;
use crate::utils::math::linspace;
use nalgebra::Point2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A curve point together with the parameter it was evaluated at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    pub t: f64,
    pub point: Point2<f64>,
}

/// Ordered sequence of samples, first sample at t = 0
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampledCurve {
    pub samples: Vec<CurveSample>,
}

impl SampledCurve {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&CurveSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&CurveSample> {
        self.samples.last()
    }

    pub fn points(&self) -> Vec<Point2<f64>> {
        self.samples.iter().map(|s| s.point).collect()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.point.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.point.y).collect()
    }

    /// Min and max corners of the sampled points, `None` when empty
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let first = self.samples.first()?.point;
        let bounds = self.samples.iter().fold((first, first), |(min, max), s| {
            (
                Point2::new(min.x.min(s.point.x), min.y.min(s.point.y)),
                Point2::new(max.x.max(s.point.x), max.y.max(s.point.y)),
            )
        });
        Some(bounds)
    }
}

/// Evaluate `curve` at `count` evenly spaced parameters spanning `[0, 1]`
pub fn sample(curve: &CubicBezierCurve, count: usize) -> SampledCurve {
    let samples = linspace(0.0, 1.0, count)
        .into_iter()
        .map(|t| CurveSample {
            t,
            point: curve.evaluate(t),
        })
        .collect();
    SampledCurve { samples }
}

/// Same as [`sample`], evaluated across the rayon thread pool
pub fn sample_par(curve: &CubicBezierCurve, count: usize) -> SampledCurve {
    let samples = linspace(0.0, 1.0, count)
        .into_par_iter()
        .map(|t| CurveSample {
            t,
            point: curve.evaluate(t),
        })
        .collect();
    SampledCurve { samples }
}
