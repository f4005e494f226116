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

//! Benchmark result aggregation for hardware-simulation backends.
//!
//! This crate holds the typed model behind SimBench reports: timing
//! measurements of an interpreter, Icarus Verilog, Verilator and a lowered
//! interpreter variant, the fixed benchmark ordering that keeps derived
//! series index-aligned, and the slowdown statistics computed from them.
//!
//! The pipeline is linear:
//!
//! ```text
//! CSV files ──► ResultTables ──► MeasurementSeries ──► RatioSeries ──► Summary
//!   (simbench-csv)     │                 │                   │
//!                   order()         normalize_against()   summarize()
//! ```
//!
//! # Examples
//!
//! ```
//! use simbench_core::{Backend, ResultTablesBuilder, SeriesKind, StageMeasurement};
//!
//! let mut builder = ResultTablesBuilder::new();
//! builder.insert(SeriesKind::compilation(Backend::Verilator), "A", StageMeasurement::new(10.0, 1.0));
//! builder.insert(SeriesKind::BASELINE, "A", StageMeasurement::new(2.0, 0.1));
//! builder.insert(SeriesKind::simulation(Backend::Verilator), "A", StageMeasurement::new(4.0, 0.2));
//! let tables = builder.build();
//!
//! let order = tables.order();
//! let baseline = tables.series(SeriesKind::BASELINE, order).unwrap();
//! let verilator = tables
//!     .series(SeriesKind::simulation(Backend::Verilator), order)
//!     .unwrap();
//!
//! let slowdown = verilator.normalize_against(&baseline).unwrap();
//! assert_eq!(slowdown.ratios(), [2.0]);
//! ```

pub mod display;
pub mod error;
pub mod model;
pub mod order;
pub mod series;
pub mod stats;
pub mod tables;

pub use display::{display_name, display_name_with, LINEAR_ALGEBRA_PREFIX};
pub use error::{Result, SimbenchError};
pub use model::{Backend, Phase, SeriesKind, Stage, StageMeasurement, Table};
pub use order::BenchmarkOrder;
pub use series::{MeasurementSeries, RatioSeries};
pub use stats::{geometric_mean, normalize, summarize, Summary};
pub use tables::{ResultTables, ResultTablesBuilder};
