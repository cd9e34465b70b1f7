// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - geometry import, sample export, plotting and previews

mod exporter;
mod importer;
mod plot;
mod preview;

pub use exporter::{export_samples, export_stl, to_svg, write_csv, write_json, write_svg, SampleFormat};
pub use importer::{load_geometry, load_scene, load_stl, GeometryError};
pub use plot::{plot_png, render_plot, PlotOptions};
pub use preview::{preview_png, render_preview};
