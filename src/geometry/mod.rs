// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - curves, meshes and bounds

mod bbox;
mod bezier;
mod mesh;
pub mod sampling;

pub use bbox::BoundingBox;
pub use bezier::{CubicBezierCurve, CurveError, BASIS};
pub use mesh::{Mesh, Triangle, Vertex};
pub use sampling::{sample, sample_par, CurveSample, SampledCurve};
