// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Cubic Bezier curve in matrix form
//!
//! A point on the curve is `P(t) = T · M · C` where `T = [t³, t², t, 1]`,
//! `M` is the cubic Bezier basis matrix and `C` stacks the four control
//! points as rows.

use nalgebra::{Matrix4, Matrix4x2, Point2, RowVector4};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cubic Bezier basis matrix, shared by every curve
pub const BASIS: Matrix4<f64> = Matrix4::new(
    -1.0, 3.0, -3.0, 1.0, //
    3.0, -6.0, 3.0, 0.0, //
    -3.0, 3.0, 0.0, 0.0, //
    1.0, 0.0, 0.0, 0.0,
);

/// Errors raised while building a curve from loosely shaped input
#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("a cubic Bezier curve needs exactly 4 control points, got {found}")]
    ControlPointCount { found: usize },
}

/// Cubic Bezier curve defined by four 2D control points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezierCurve {
    control_points: [Point2<f64>; 4],
}

impl CubicBezierCurve {
    pub fn new(c1: Point2<f64>, c2: Point2<f64>, c3: Point2<f64>, c4: Point2<f64>) -> Self {
        Self {
            control_points: [c1, c2, c3, c4],
        }
    }

    /// Build a curve from `[x, y]` pairs, e.g. parsed from a config file
    pub fn from_slice(points: &[[f64; 2]]) -> Result<Self, CurveError> {
        match points {
            [c1, c2, c3, c4] => Ok(Self::new(
                Point2::from(*c1),
                Point2::from(*c2),
                Point2::from(*c3),
                Point2::from(*c4),
            )),
            _ => Err(CurveError::ControlPointCount {
                found: points.len(),
            }),
        }
    }

    pub fn control_points(&self) -> &[Point2<f64>; 4] {
        &self.control_points
    }

    pub fn start(&self) -> Point2<f64> {
        self.control_points[0]
    }

    pub fn end(&self) -> Point2<f64> {
        self.control_points[3]
    }

    /// Control points stacked row-wise into the 4×2 matrix `C`
    pub fn control_matrix(&self) -> Matrix4x2<f64> {
        let [c1, c2, c3, c4] = self.control_points;
        Matrix4x2::new(
            c1.x, c1.y, //
            c2.x, c2.y, //
            c3.x, c3.y, //
            c4.x, c4.y,
        )
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// Any real `t` is accepted. Values outside `[0, 1]` extrapolate the
    /// polynomial and non-finite input propagates through the arithmetic.
    pub fn evaluate(&self, t: f64) -> Point2<f64> {
        let monomials = RowVector4::new(t * t * t, t * t, t, 1.0);
        let p = monomials * BASIS * self.control_matrix();
        Point2::new(p[0], p[1])
    }
}
