// Dweve SimBench - Simulator Benchmark Visualization
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Chart rendering.
//!
//! Figures are described backend-independently in [`figure`], laid out by
//! [`layout`] and drawn with plotters in [`draw`]. [`render_charts`] writes
//! every available figure to the configured output directory.

pub mod draw;
pub mod figure;
pub mod layout;

pub use draw::draw_chart;
pub use figure::{backend_color, Bar, BarChart, BarSeries, Figure, PALETTE};
pub use layout::{log_range, GroupLayout};

use crate::config::{ChartFormat, ReportConfig};
use crate::dataset::ReportData;
use crate::error::{ReportError, Result};
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Renders every figure with data to `config.output_dir`.
///
/// Returns the written file paths in render order. The lowered figure is
/// skipped when no lowered measurements were loaded.
pub fn render_charts(data: &ReportData, config: &ReportConfig) -> Result<Vec<PathBuf>> {
    config.validate()?;
    fs::create_dir_all(&config.output_dir)
        .map_err(|e| ReportError::io_error(&config.output_dir, e))?;

    let mut written = Vec::new();
    for figure in Figure::ALL {
        let Some(chart) = figure.build(data)? else {
            debug!("Skipping {} chart: no data", figure.file_stem());
            continue;
        };
        let path = config.output_dir.join(format!(
            "{}.{}",
            figure.file_stem(),
            config.chart_format.extension()
        ));
        render_chart(&chart, &path, config.chart_format, config.chart_size)?;
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Renders one chart to `path`.
pub fn render_chart(
    chart: &BarChart,
    path: &Path,
    format: ChartFormat,
    size: (u32, u32),
) -> Result<()> {
    match format {
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_chart(&root, chart).map_err(|e| ReportError::chart(path, e))
        }
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_chart(&root, chart).map_err(|e| ReportError::chart(path, e))
        }
    }
}
