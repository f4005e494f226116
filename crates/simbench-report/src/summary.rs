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

//! Slowdown summary reports.
//!
//! A [`SummaryReport`] holds, for every comparison against the interpreter
//! baseline, the geometric-mean slowdown, the worst case and the
//! per-benchmark ratios. Excluded benchmarks get their own section.

use crate::config::ReportConfig;
use crate::dataset::{display_names, split_order, BackendSeries, ReportData};
use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use simbench_core::{
    Backend, BenchmarkOrder, RatioSeries, ResultTables, SeriesKind, SimbenchError,
};
use tracing::{debug, warn};

/// What is being compared against interpreter simulation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Simulation time alone.
    Simulation,
    /// Compilation plus simulation time.
    EndToEnd,
}

impl Metric {
    /// Lowercase name used in labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Simulation => "simulation",
            Metric::EndToEnd => "end-to-end",
        }
    }
}

/// Ratio of one benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRatio {
    /// Benchmark name as loaded.
    pub benchmark: String,
    /// Name shown on charts.
    pub display_name: String,
    /// Slowdown relative to the baseline.
    pub ratio: f64,
}

/// Summary of one backend/metric pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Backend compared.
    pub backend: Backend,
    /// Metric compared.
    pub metric: Metric,
    /// Heading, e.g. `"Icarus simulation"`.
    pub label: String,
    /// Geometric mean of all ratios.
    pub geometric_mean: f64,
    /// Largest ratio and its benchmark (first occurrence on ties).
    pub worst: BenchmarkRatio,
    /// Ratios in benchmark order.
    pub ratios: Vec<BenchmarkRatio>,
}

impl Comparison {
    /// Summarizes a ratio series.
    ///
    /// # Panics
    ///
    /// Panics if `display_names` is not aligned with `ratios`.
    pub fn from_ratios(
        backend: Backend,
        metric: Metric,
        ratios: &RatioSeries,
        display_names: &[String],
    ) -> Result<Self> {
        assert_eq!(ratios.len(), display_names.len(), "one display name per ratio");

        let summary = ratios.summarize()?;
        let entries: Vec<BenchmarkRatio> = ratios
            .iter()
            .zip(display_names)
            .map(|((benchmark, ratio), display_name)| BenchmarkRatio {
                benchmark: benchmark.to_string(),
                display_name: display_name.clone(),
                ratio,
            })
            .collect();

        Ok(Self {
            backend,
            metric,
            label: format!("{} {}", backend.label(), metric.as_str()),
            geometric_mean: summary.geometric_mean,
            worst: entries[summary.max_index].clone(),
            ratios: entries,
        })
    }
}

/// Comparisons for benchmarks left out of the headline numbers.
///
/// Excluded benchmarks may lack measurements. A comparison whose series is
/// incomplete for them is left out of [`comparisons`](Self::comparisons).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedSection {
    /// Excluded benchmarks, in load order.
    pub benchmarks: Vec<String>,
    /// Comparisons over the excluded benchmarks only.
    pub comparisons: Vec<Comparison>,
}

/// Complete slowdown summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Report title.
    pub title: String,
    /// Report timestamp.
    pub timestamp: String,
    /// Series every ratio is normalized against.
    pub baseline: String,
    /// Headline benchmarks, in load order.
    pub benchmarks: Vec<String>,
    /// Headline comparisons.
    pub comparisons: Vec<Comparison>,
    /// Excluded benchmarks, if any were named and loaded.
    pub excluded: Option<ExcludedSection>,
    /// Additional notes.
    pub notes: Vec<String>,
}

impl SummaryReport {
    /// Creates an empty report stamped with the current time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            baseline: SeriesKind::BASELINE.label(),
            benchmarks: Vec::new(),
            comparisons: Vec::new(),
            excluded: None,
            notes: Vec::new(),
        }
    }

    /// Builds the report for loaded tables.
    ///
    /// # Errors
    ///
    /// Fails when a headline benchmark lacks a required measurement or a
    /// headline ratio cannot be summarized, including when every benchmark
    /// is excluded. Excluded benchmarks never fail the build.
    pub fn build(tables: &ResultTables, config: &ReportConfig) -> Result<Self> {
        config.validate()?;
        let (kept, excluded) = split_order(tables, config);

        let headline = ReportData::from_tables(tables, &kept, config)?;
        let mut report = Self::new(config.title.clone());
        report.benchmarks = kept.names().to_vec();
        report.comparisons = comparisons(&headline)?;

        if !excluded.is_empty() {
            report.excluded = Some(ExcludedSection {
                benchmarks: excluded.names().to_vec(),
                comparisons: excluded_comparisons(tables, &excluded, config),
            });
        }

        if config.include_lowered && headline.lowered().is_none() {
            report.add_note("No lowered interpreter measurements were loaded");
        }

        Ok(report)
    }

    /// Adds a note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Looks up a headline comparison.
    pub fn comparison(&self, backend: Backend, metric: Metric) -> Option<&Comparison> {
        self.comparisons
            .iter()
            .find(|c| c.backend == backend && c.metric == metric)
    }

    /// Number of headline benchmarks.
    pub fn benchmark_count(&self) -> usize {
        self.benchmarks.len()
    }
}

/// Comparisons for one selection: simulation per backend, end-to-end per
/// backend, then the lowered interpreter.
pub fn comparisons(data: &ReportData) -> Result<Vec<Comparison>> {
    let names = data.display_names();
    let baseline = data.baseline();
    let mut out = Vec::with_capacity(data.backends().len() * 2 + 1);

    for series in data.backends() {
        let ratios = series.simulation_ratio(baseline)?;
        out.push(Comparison::from_ratios(
            series.backend,
            Metric::Simulation,
            &ratios,
            names,
        )?);
    }
    for series in data.backends() {
        let ratios = series.end_to_end_ratio(baseline)?;
        out.push(Comparison::from_ratios(
            series.backend,
            Metric::EndToEnd,
            &ratios,
            names,
        )?);
    }
    if let Some(ratios) = data.lowered_ratio() {
        out.push(Comparison::from_ratios(
            Backend::LoweredInterpreter,
            Metric::Simulation,
            &ratios?,
            names,
        )?);
    }

    if out.is_empty() {
        return Err(SimbenchError::domain("nothing to compare").into());
    }
    Ok(out)
}

/// Comparisons over excluded benchmarks, in the same order as
/// [`comparisons`], keeping only those whose series are complete.
fn excluded_comparisons(
    tables: &ResultTables,
    order: &BenchmarkOrder,
    config: &ReportConfig,
) -> Vec<Comparison> {
    let baseline = match tables.series(SeriesKind::BASELINE, order) {
        Ok(baseline) => baseline,
        Err(err) => {
            debug!(error = %err, "no baseline for excluded benchmarks");
            return Vec::new();
        }
    };
    let names = display_names(order, config);

    let mut candidates: Vec<(Backend, Metric, Result<RatioSeries>)> = Vec::new();
    for &backend in &config.backends {
        let ratios = tables
            .series(SeriesKind::simulation(backend), order)
            .and_then(|series| series.normalize_against(&baseline))
            .map_err(ReportError::from);
        candidates.push((backend, Metric::Simulation, ratios));
    }
    for &backend in &config.backends {
        let ratios = BackendSeries::from_tables(tables, backend, order)
            .and_then(|series| series.end_to_end_ratio(&baseline));
        candidates.push((backend, Metric::EndToEnd, ratios));
    }
    if config.include_lowered && tables.has(SeriesKind::LOWERED) {
        let ratios = tables
            .series(SeriesKind::LOWERED, order)
            .and_then(|series| series.normalize_against(&baseline))
            .map_err(ReportError::from);
        candidates.push((Backend::LoweredInterpreter, Metric::Simulation, ratios));
    }

    candidates
        .into_iter()
        .filter_map(|(backend, metric, ratios)| {
            match ratios.and_then(|r| Comparison::from_ratios(backend, metric, &r, &names)) {
                Ok(comparison) => Some(comparison),
                Err(err) => {
                    warn!(
                        backend = %backend,
                        metric = metric.as_str(),
                        error = %err,
                        "skipping comparison for excluded benchmarks"
                    );
                    None
                }
            }
        })
        .collect()
}
