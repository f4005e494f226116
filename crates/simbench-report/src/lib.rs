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

//! Slowdown charts and summary reports for SimBench.
//!
//! Turns loaded [`ResultTables`](simbench_core::ResultTables) into:
//!
//! - charts on a log axis ([`charts`]): end-to-end time with compilation
//!   stacked under simulation, simulation time with error bars, the lowered
//!   interpreter, and absolute simulation times;
//! - a [`SummaryReport`] with geometric-mean and worst-case slowdowns,
//!   exportable as text, Markdown or JSON ([`reporters`]).
//!
//! # Examples
//!
//! ```
//! use simbench_core::{Backend, ResultTablesBuilder, SeriesKind, StageMeasurement};
//! use simbench_report::{Metric, ReportConfig, SummaryReport};
//!
//! let mut builder = ResultTablesBuilder::new();
//! builder.insert(SeriesKind::compilation(Backend::Verilator), "A", StageMeasurement::new(10.0, 1.0));
//! builder.insert(SeriesKind::BASELINE, "A", StageMeasurement::new(2.0, 0.1));
//! builder.insert(SeriesKind::simulation(Backend::Verilator), "A", StageMeasurement::new(4.0, 0.2));
//! let tables = builder.build();
//!
//! let config = ReportConfig::default().with_backends(vec![Backend::Verilator]);
//! let report = SummaryReport::build(&tables, &config).unwrap();
//!
//! let sim = report.comparison(Backend::Verilator, Metric::Simulation).unwrap();
//! assert!((sim.geometric_mean - 2.0).abs() < 1e-12);
//! let e2e = report.comparison(Backend::Verilator, Metric::EndToEnd).unwrap();
//! assert_eq!(e2e.worst.ratio, 7.0);
//! ```

pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod reporters;
pub mod summary;

pub use charts::{render_chart, render_charts, BarChart, Figure};
pub use config::{ChartFormat, ExportFormat, ReportConfig, DEFAULT_CHART_SIZE, DEFAULT_OUTPUT_DIR};
pub use dataset::{display_names, split_order, BackendSeries, ReportData};
pub use error::{ReportError, Result};
pub use summary::{BenchmarkRatio, Comparison, ExcludedSection, Metric, SummaryReport};
