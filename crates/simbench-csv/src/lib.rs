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

//! Loading of benchmark result tables from CSV.
//!
//! The benchmark runner writes three tables:
//!
//! | File | Columns |
//! |------|---------|
//! | `compilation-results.csv` | `compilation`, `stage`, `mean`, `median`, `stddev` |
//! | `simulation-results.csv` | `simulation`, `stage`, `mean`, `stddev` |
//! | `simulation-fully-lowered-results.csv` | `simulation-fully-lowered`, `mean`, `stddev` |
//!
//! This crate reads them into [`simbench_core::ResultTables`]. Columns are
//! located by header name, so their order does not matter and extra columns
//! are ignored. Rows whose `stage` is not one of `icarus-verilog`, `verilog`
//! or `interpreter` are skipped without error.
//!
//! # Examples
//!
//! ```no_run
//! use simbench_csv::{load_files, FromCsvConfig, InputFiles};
//!
//! let tables = load_files(&InputFiles::default(), &FromCsvConfig::default()).unwrap();
//! println!("{} benchmarks", tables.order().len());
//! ```

mod error;
mod from_csv;

pub use error::{CsvError, Result};
pub use from_csv::{
    load, load_files, load_with_config, FromCsvConfig, InputFiles, ResultLoader,
    DEFAULT_COMPILATION_PATH, DEFAULT_LOWERED_PATH, DEFAULT_SIMULATION_PATH,
};
