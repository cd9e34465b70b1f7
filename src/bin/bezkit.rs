// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bezkit CLI

use anyhow::{Context, Result};
use bezkit::cli::Reporter;
use bezkit::config::CurveConfig;
use bezkit::geometry::{sample, sample_par};
use bezkit::io::{self, PlotOptions};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "bezkit")]
#[command(about = "Bezkit - cubic Bezier sampling and mesh extents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a cubic Bezier curve and plot or dump the points
    Curve {
        /// TOML config file (defaults to ./bezkit.toml when present)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Control point as `x,y`; give exactly four, in order
        #[arg(short, long = "point", value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
        points: Vec<[f64; 2]>,

        /// Number of evenly spaced samples over [0, 1]
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Output file (png, svg, csv or json); prints points when omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Draw the control polygon in PNG plots
        #[arg(long)]
        control_points: bool,

        /// Evaluate samples on the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },

    /// Print the per-axis maximum vertex coordinate of a geometry
    Extents {
        /// STL file, or directory of STL files forming one scene
        input: PathBuf,

        /// Write a shaded PNG preview of the combined mesh
        #[arg(long, value_name = "PNG")]
        preview: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn parse_point(value: &str) -> Result<[f64; 2], String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got {:?}", value))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate {:?}: {}", s, e))
    };
    Ok([parse(x)?, parse(y)?])
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Curve {
            config,
            points,
            samples,
            output,
            control_points,
            parallel,
        } => curve_command(config, points, samples, output, control_points, parallel, cli.verbose),
        Commands::Extents { input, preview } => {
            extents_command(&input, preview.as_deref(), cli.verbose)
        }
        Commands::Version => {
            println!("Bezkit v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    if let Err(err) = result {
        Reporter::report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn curve_command(
    config_path: Option<PathBuf>,
    points: Vec<[f64; 2]>,
    samples: Option<usize>,
    output: Option<PathBuf>,
    control_points: bool,
    parallel: bool,
    verbose: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => {
            let mut config = CurveConfig::from_file(&path)?;
            config.apply_overrides(|key| std::env::var(key).ok())?;
            config
        }
        None => CurveConfig::load()?,
    };

    if !points.is_empty() {
        config.control_points = points;
    }
    if let Some(samples) = samples {
        config.samples = samples;
    }
    if output.is_some() {
        config.output = output;
    }
    config.show_control_points |= control_points;
    debug!("curve config: {:?}", config);

    let curve = config.curve()?;
    let start = Instant::now();
    let sampled = if parallel {
        sample_par(&curve, config.samples)
    } else {
        sample(&curve, config.samples)
    };
    info!("sampled {} points", sampled.len());

    match &config.output {
        Some(path) => {
            let options = PlotOptions {
                control_points: if config.show_control_points {
                    curve.control_points().to_vec()
                } else {
                    Vec::new()
                },
                ..Default::default()
            };
            io::export_samples(&sampled, path, &options)
                .with_context(|| format!("Failed to export samples to {}", path.display()))?;
        }
        None => Reporter::print_samples(&sampled),
    }

    if verbose {
        Reporter::report_curve(&sampled, config.output.as_deref(), start.elapsed());
    } else if let Some(path) = &config.output {
        Reporter::success(&format!("Wrote {} samples to {}", sampled.len(), path.display()));
    }

    Ok(())
}

fn extents_command(input: &Path, preview: Option<&Path>, verbose: bool) -> Result<()> {
    let start = Instant::now();
    let (mesh, max) = bezkit::load_with_extents(input)?;

    if verbose {
        Reporter::report_extents(
            &input.display().to_string(),
            mesh.vertex_count(),
            mesh.triangle_count(),
            &mesh.bounding_box(),
            start.elapsed(),
        );
    } else {
        println!("{}", Reporter::format_extents(&max));
    }

    if let Some(png) = preview {
        io::preview_png(&mesh, png)?;
        Reporter::report_info(&format!("Preview written to {}", png.display()));
    }

    Ok(())
}
