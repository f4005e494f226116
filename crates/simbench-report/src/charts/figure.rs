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

//! Chart contents, independent of the drawing backend.
//!
//! Each [`Figure`] turns a [`ReportData`] into a [`BarChart`]: category
//! labels, bar series with their slot in each group, optional error bars
//! and an optional reference line.

use super::layout::{log_range, GroupLayout};
use crate::dataset::ReportData;
use crate::error::Result;
use simbench_core::{Backend, MeasurementSeries, SeriesKind};
use std::ops::Range;

/// Qualitative palette, one color per backend.
pub const PALETTE: [(u8, u8, u8); 4] = [
    (102, 194, 165),
    (252, 141, 98),
    (141, 160, 203),
    (231, 138, 195),
];

/// Bar color of a backend.
pub fn backend_color(backend: Backend) -> (u8, u8, u8) {
    match backend {
        Backend::Icarus => PALETTE[0],
        Backend::Verilator => PALETTE[1],
        Backend::Interpreter => PALETTE[2],
        Backend::LoweredInterpreter => PALETTE[3],
    }
}

const SLOWDOWN_AXIS: &str = "Slowdown vs. interpreter simulation";

/// The charts a report can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Figure {
    /// Compilation stacked under simulation, normalized.
    EndToEnd,
    /// Simulation only, normalized, with error bars.
    Simulation,
    /// Lowered interpreter, normalized.
    Lowered,
    /// Absolute simulation times of every backend.
    Absolute,
}

impl Figure {
    /// All figures in render order.
    pub const ALL: [Figure; 4] = [
        Figure::EndToEnd,
        Figure::Simulation,
        Figure::Lowered,
        Figure::Absolute,
    ];

    /// Output file name without extension.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Figure::EndToEnd => "end_to_end",
            Figure::Simulation => "simulation",
            Figure::Lowered => "lowered",
            Figure::Absolute => "absolute",
        }
    }

    /// Builds the chart, or `None` when its data is absent.
    pub fn build(&self, data: &ReportData) -> Result<Option<BarChart>> {
        match self {
            Figure::EndToEnd => end_to_end(data).map(Some),
            Figure::Simulation => simulation(data).map(Some),
            Figure::Lowered => lowered(data),
            Figure::Absolute => Ok(Some(absolute(data))),
        }
    }
}

/// One bar. `low` of `None` means the bar starts at the axis floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Bottom edge, for stacked bars.
    pub low: Option<f64>,
    /// Top edge.
    pub high: f64,
    /// Half-height of the error bar around `high`.
    pub error: Option<f64>,
}

impl Bar {
    fn plain(high: f64) -> Self {
        Self {
            low: None,
            high,
            error: None,
        }
    }

    fn with_error(high: f64, error: f64) -> Self {
        Self {
            low: None,
            high,
            error: Some(error),
        }
    }
}

/// A legend entry and its bars, one per category.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Legend label.
    pub label: String,
    /// Fill or outline color.
    pub color: (u8, u8, u8),
    /// Filled bars; outlined otherwise.
    pub filled: bool,
    /// Position within each group.
    pub slot: usize,
    /// Bars in category order.
    pub bars: Vec<Bar>,
}

/// Backend-independent description of a grouped bar chart on a log axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    /// Which figure this is.
    pub figure: Figure,
    /// Caption.
    pub title: String,
    /// Y axis description.
    pub y_desc: String,
    /// Category labels on the x axis.
    pub categories: Vec<String>,
    /// Bar series.
    pub series: Vec<BarSeries>,
    /// Horizontal reference line.
    pub reference: Option<f64>,
}

impl BarChart {
    /// Layout with one slot per distinct series slot.
    pub fn layout(&self) -> GroupLayout {
        let slots = self.series.iter().map(|s| s.slot + 1).max().unwrap_or(1);
        GroupLayout::new(self.categories.len(), slots)
    }

    /// Log y range covering every bar edge, error bar and the reference.
    pub fn y_range(&self) -> Range<f64> {
        let bars = self.series.iter().flat_map(|s| s.bars.iter());
        let edges = bars.flat_map(|bar| {
            let error = bar.error.unwrap_or(0.0);
            [
                bar.low.unwrap_or(bar.high),
                bar.high,
                bar.high + error,
                bar.high - error,
            ]
        });
        log_range(edges.chain(self.reference))
    }
}

fn end_to_end(data: &ReportData) -> Result<BarChart> {
    let baseline = data.baseline();
    let mut series = Vec::with_capacity(data.backends().len() * 2);

    for (slot, backend) in data.backends().iter().enumerate() {
        let color = backend_color(backend.backend);
        let compilation = backend.compilation_ratio(baseline)?;
        let total = backend.end_to_end_ratio(baseline)?;

        series.push(BarSeries {
            label: SeriesKind::compilation(backend.backend).label(),
            color,
            filled: true,
            slot,
            bars: compilation.ratios().iter().map(|&r| Bar::plain(r)).collect(),
        });
        series.push(BarSeries {
            label: SeriesKind::simulation(backend.backend).label(),
            color,
            filled: false,
            slot,
            bars: compilation
                .ratios()
                .iter()
                .zip(total.ratios())
                .map(|(&low, &high)| Bar {
                    low: Some(low),
                    high,
                    error: None,
                })
                .collect(),
        });
    }

    Ok(BarChart {
        figure: Figure::EndToEnd,
        title: "End-to-end time relative to interpreter simulation".to_string(),
        y_desc: SLOWDOWN_AXIS.to_string(),
        categories: data.display_names().to_vec(),
        series,
        reference: Some(1.0),
    })
}

fn simulation(data: &ReportData) -> Result<BarChart> {
    let baseline = data.baseline();
    let series = data
        .backends()
        .iter()
        .enumerate()
        .map(|(slot, backend)| -> Result<BarSeries> {
            let ratios = backend.simulation_ratio(baseline)?;
            let errors = backend.simulation_error(baseline)?;
            Ok(BarSeries {
                label: backend.backend.label().to_string(),
                color: backend_color(backend.backend),
                filled: true,
                slot,
                bars: ratios
                    .ratios()
                    .iter()
                    .zip(errors)
                    .map(|(&r, e)| Bar::with_error(r, e))
                    .collect(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BarChart {
        figure: Figure::Simulation,
        title: "Simulation time relative to the interpreter".to_string(),
        y_desc: SLOWDOWN_AXIS.to_string(),
        categories: data.display_names().to_vec(),
        series,
        reference: Some(1.0),
    })
}

fn lowered(data: &ReportData) -> Result<Option<BarChart>> {
    let Some(lowered) = data.lowered() else {
        return Ok(None);
    };
    let ratios = lowered.normalize_against(data.baseline())?;
    let errors = lowered.stddevs_normalized_by(data.baseline())?;

    Ok(Some(BarChart {
        figure: Figure::Lowered,
        title: "Lowered interpreter relative to the interpreter".to_string(),
        y_desc: SLOWDOWN_AXIS.to_string(),
        categories: data.display_names().to_vec(),
        series: vec![BarSeries {
            label: Backend::LoweredInterpreter.label().to_string(),
            color: backend_color(Backend::LoweredInterpreter),
            filled: true,
            slot: 0,
            bars: ratios
                .ratios()
                .iter()
                .zip(errors)
                .map(|(&r, e)| Bar::with_error(r, e))
                .collect(),
        }],
        reference: Some(1.0),
    }))
}

fn absolute(data: &ReportData) -> BarChart {
    let mut measured: Vec<&MeasurementSeries> =
        data.backends().iter().map(|b| &b.simulation).collect();
    measured.push(data.baseline());
    measured.extend(data.lowered());

    let series = measured
        .into_iter()
        .enumerate()
        .map(|(slot, m)| BarSeries {
            label: m.kind().backend.label().to_string(),
            color: backend_color(m.kind().backend),
            filled: true,
            slot,
            bars: m
                .means()
                .iter()
                .zip(m.stddevs())
                .map(|(&mean, &sd)| Bar::with_error(mean, sd))
                .collect(),
        })
        .collect();

    BarChart {
        figure: Figure::Absolute,
        title: "Simulation time".to_string(),
        y_desc: "Time (s)".to_string(),
        categories: data.display_names().to_vec(),
        series,
        reference: None,
    }
}
