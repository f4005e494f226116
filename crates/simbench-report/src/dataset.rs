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

//! Series derived from loaded tables for one benchmark selection.
//!
//! A [`ReportData`] fixes the benchmark order once and extracts every
//! measurement series a report needs against it, so all charts and
//! statistics built from it stay index-aligned.

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use simbench_core::{
    display_name_with, Backend, BenchmarkOrder, MeasurementSeries, RatioSeries, ResultTables,
    SeriesKind, SimbenchError,
};
use tracing::{debug, warn};

/// Compilation and simulation series of one compiled backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendSeries {
    /// Backend measured.
    pub backend: Backend,
    /// Compilation times.
    pub compilation: MeasurementSeries,
    /// Simulation times.
    pub simulation: MeasurementSeries,
}

impl BackendSeries {
    /// Extracts both series of `backend` for `order`.
    ///
    /// # Errors
    ///
    /// Returns [`SimbenchError::MissingKey`] when a benchmark lacks either
    /// measurement.
    pub fn from_tables(
        tables: &ResultTables,
        backend: Backend,
        order: &BenchmarkOrder,
    ) -> Result<Self> {
        Ok(Self {
            backend,
            compilation: tables.series(SeriesKind::compilation(backend), order)?,
            simulation: tables.series(SeriesKind::simulation(backend), order)?,
        })
    }

    /// Simulation time over interpreter simulation time.
    pub fn simulation_ratio(&self, baseline: &MeasurementSeries) -> Result<RatioSeries> {
        Ok(self.simulation.normalize_against(baseline)?)
    }

    /// Compilation time over interpreter simulation time.
    pub fn compilation_ratio(&self, baseline: &MeasurementSeries) -> Result<RatioSeries> {
        Ok(self.compilation.normalize_against(baseline)?)
    }

    /// Compilation plus simulation time over interpreter simulation time.
    pub fn end_to_end_ratio(&self, baseline: &MeasurementSeries) -> Result<RatioSeries> {
        let compilation = self.compilation_ratio(baseline)?;
        let simulation = self.simulation_ratio(baseline)?;
        Ok(compilation.stacked_with(
            &simulation,
            format!(
                "{} End-to-end / {}",
                self.backend.label(),
                SeriesKind::BASELINE.label()
            ),
        ))
    }

    /// Simulation standard deviations scaled by the baseline means.
    pub fn simulation_error(&self, baseline: &MeasurementSeries) -> Result<Vec<f64>> {
        Ok(self.simulation.stddevs_normalized_by(baseline)?)
    }
}

/// Every series a report draws from, aligned to one benchmark order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportData {
    order: BenchmarkOrder,
    display_names: Vec<String>,
    baseline: MeasurementSeries,
    backends: Vec<BackendSeries>,
    lowered: Option<MeasurementSeries>,
}

impl ReportData {
    /// Extracts the series for `order` from `tables`.
    ///
    /// The lowered series is included when the configuration asks for it
    /// and the lowered table contributed any rows.
    ///
    /// # Errors
    ///
    /// Returns [`SimbenchError::Domain`] for an empty order, and
    /// [`SimbenchError::MissingKey`] when a benchmark lacks a required
    /// measurement.
    pub fn from_tables(
        tables: &ResultTables,
        order: &BenchmarkOrder,
        config: &ReportConfig,
    ) -> Result<Self> {
        if order.is_empty() {
            return Err(SimbenchError::domain("no benchmarks to report").into());
        }

        let baseline = tables.series(SeriesKind::BASELINE, order)?;
        let backends = config
            .backends
            .iter()
            .map(|&backend| BackendSeries::from_tables(tables, backend, order))
            .collect::<Result<Vec<_>>>()?;

        let lowered = if !config.include_lowered {
            None
        } else if tables.has(SeriesKind::LOWERED) {
            Some(tables.series(SeriesKind::LOWERED, order)?)
        } else {
            debug!("No lowered interpreter measurements loaded");
            None
        };

        let display_names = display_names(order, config);

        Ok(Self {
            order: order.clone(),
            display_names,
            baseline,
            backends,
            lowered,
        })
    }

    /// Benchmark order shared by every series.
    pub fn order(&self) -> &BenchmarkOrder {
        &self.order
    }

    /// Chart labels, aligned with [`order`](Self::order).
    pub fn display_names(&self) -> &[String] {
        &self.display_names
    }

    /// Interpreter simulation times.
    pub fn baseline(&self) -> &MeasurementSeries {
        &self.baseline
    }

    /// Compiled backends, in configured order.
    pub fn backends(&self) -> &[BackendSeries] {
        &self.backends
    }

    /// Lowered interpreter simulation times, if included.
    pub fn lowered(&self) -> Option<&MeasurementSeries> {
        self.lowered.as_ref()
    }

    /// Lowered interpreter time over interpreter simulation time.
    pub fn lowered_ratio(&self) -> Option<Result<RatioSeries>> {
        self.lowered
            .as_ref()
            .map(|lowered| lowered.normalize_against(&self.baseline).map_err(ReportError::from))
    }
}

/// Chart labels for `order` with the configured prefixes stripped.
pub fn display_names(order: &BenchmarkOrder, config: &ReportConfig) -> Vec<String> {
    order
        .iter()
        .map(|name| display_name_with(name, &config.strip_prefixes).to_string())
        .collect()
}

/// Splits the loaded order into headline and excluded benchmarks.
///
/// Excluded names that never appear in the tables are logged and ignored.
pub fn split_order(
    tables: &ResultTables,
    config: &ReportConfig,
) -> (BenchmarkOrder, BenchmarkOrder) {
    for name in &config.excluded {
        if !tables.order().contains(name) {
            warn!("Excluded benchmark '{}' does not appear in the results", name);
        }
    }
    tables.order().partition(&config.excluded)
}
