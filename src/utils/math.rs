// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

/// Linear interpolation
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// `count` evenly spaced values over `[start, end]`, both ends included.
///
/// A single value yields `start`; the last value is always exactly `end`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let div = (count - 1) as f64;
            let mut values: Vec<f64> = (0..count)
                .map(|i| lerp(start, end, i as f64 / div))
                .collect();
            values[count - 1] = end;
            values
        }
    }
}
