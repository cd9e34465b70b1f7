// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::geometry::{BoundingBox, SampledCurve};
use colored::*;
use nalgebra::Point3;
use std::path::Path;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a sampled curve and where it was written
    pub fn report_curve(samples: &SampledCurve, output: Option<&Path>, duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Sampled:".bold(), format!("{} points", samples.len()).cyan());
        println!("{}", "━".repeat(80).bright_black());

        if let (Some(first), Some(last)) = (samples.first(), samples.last()) {
            println!(
                "  {} ({}, {})",
                "Start:".bright_black(),
                first.point.x,
                first.point.y
            );
            println!(
                "  {} ({}, {})",
                "End:".bright_black(),
                last.point.x,
                last.point.y
            );
        }
        if let Some(path) = output {
            println!("  {} {}", "Output:".bright_black(), path.display().to_string().cyan());
        }
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Plain `x y` rows, one per sample
    pub fn print_samples(samples: &SampledCurve) {
        for s in &samples.samples {
            println!("{} {}", s.point.x, s.point.y);
        }
    }

    /// Report the extents of a combined mesh
    pub fn report_extents(
        file: &str,
        vertices: usize,
        triangles: usize,
        bbox: &BoundingBox,
        duration: Duration,
    ) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Loaded:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Vertices:".bright_black(),
            vertices.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Triangles:".bright_black(),
            triangles.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Min:".bright_black(),
            Self::format_extents(&bbox.min)
        );
        println!(
            "  {} {}",
            "Max:".bright_black(),
            Self::format_extents(&bbox.max).green()
        );
        let size = bbox.size();
        println!(
            "  {} {} x {} x {}",
            "Size:".bright_black(),
            size.x,
            size.y,
            size.z
        );
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Format a 3-vector as `[x y z]`
    pub fn format_extents(p: &Point3<f64>) -> String {
        format!("[{} {} {}]", p.x, p.y, p.z)
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(
            Reporter::format_duration(Duration::from_micros(500)),
            "500µs"
        );
        assert_eq!(
            Reporter::format_duration(Duration::from_millis(5)),
            "5.00ms"
        );
        assert_eq!(Reporter::format_duration(Duration::from_secs(2)), "2.00s");
    }

    #[test]
    fn test_format_extents() {
        assert_eq!(
            Reporter::format_extents(&Point3::new(1.5, -2.0, 10.0)),
            "[1.5 -2 10]"
        );
    }
}
