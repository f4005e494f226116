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

//! Reading result tables into [`ResultTables`].

use crate::error::{CsvError, Result};
use simbench_core::{
    ResultTables, ResultTablesBuilder, SeriesKind, Stage, StageMeasurement, Table,
};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default file of the compilation-results table.
pub const DEFAULT_COMPILATION_PATH: &str = "statistics/compilation-results.csv";

/// Default file of the simulation-results table.
pub const DEFAULT_SIMULATION_PATH: &str = "statistics/simulation-results.csv";

/// Default file of the fully-lowered simulation table.
pub const DEFAULT_LOWERED_PATH: &str = "statistics/simulation-fully-lowered-results.csv";

/// Configuration for reading result tables.
///
/// # Examples
///
/// ```
/// use simbench_csv::FromCsvConfig;
///
/// let config = FromCsvConfig {
///     delimiter: b';',
///     ..Default::default()
/// };
/// assert!(config.trim);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromCsvConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,

    /// Trim whitespace around fields and headers (default: `true`).
    pub trim: bool,

    /// Maximum number of records per table (default: 1,000,000).
    ///
    /// Result tables hold a few hundred rows; the limit stops a wrong file
    /// from being read into memory wholesale.
    pub max_rows: usize,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: 1_000_000,
        }
    }
}

/// Locations of the three input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFiles {
    /// Compilation-results table.
    pub compilation: PathBuf,
    /// Simulation-results table.
    pub simulation: PathBuf,
    /// Fully-lowered simulation table; `None` skips it.
    pub lowered: Option<PathBuf>,
}

impl Default for InputFiles {
    fn default() -> Self {
        Self {
            compilation: PathBuf::from(DEFAULT_COMPILATION_PATH),
            simulation: PathBuf::from(DEFAULT_SIMULATION_PATH),
            lowered: Some(PathBuf::from(DEFAULT_LOWERED_PATH)),
        }
    }
}

/// Loads the three tables from CSV text with the default configuration.
///
/// Tables are read in argument order. The first table with recognized rows,
/// normally the compilation table, fixes [`ResultTables::order`]; rows of
/// later tables for benchmarks it does not list are ignored.
///
/// # Errors
///
/// Returns a format-class [`CsvError`] for a missing column, an empty
/// benchmark name, a malformed record or a non-numeric or negative duration.
///
/// # Examples
///
/// ```
/// use simbench_core::{Backend, SeriesKind};
/// use simbench_csv::load;
///
/// let tables = load(
///     "compilation,stage,mean,median,stddev\nA,verilog,10,10,1\n",
///     "simulation,stage,mean,stddev\nA,interpreter,2,0.1\nA,verilog,4,0.2\n",
///     "simulation-fully-lowered,mean,stddev\n",
/// )
/// .unwrap();
///
/// let order = tables.order();
/// let verilator = tables.series(SeriesKind::simulation(Backend::Verilator), order).unwrap();
/// assert_eq!(verilator.means(), [4.0]);
/// ```
pub fn load(compilation: &str, simulation: &str, lowered: &str) -> Result<ResultTables> {
    load_with_config(compilation, simulation, lowered, &FromCsvConfig::default())
}

/// Loads the three tables from CSV text.
pub fn load_with_config(
    compilation: &str,
    simulation: &str,
    lowered: &str,
    config: &FromCsvConfig,
) -> Result<ResultTables> {
    Ok(ResultLoader::new(config.clone())
        .read(Table::Compilation, compilation.as_bytes())?
        .read(Table::Simulation, simulation.as_bytes())?
        .read(Table::LoweredSimulation, lowered.as_bytes())?
        .finish())
}

/// Loads the tables named by `files`.
///
/// Each file is opened, read to completion and closed before the next one.
///
/// # Errors
///
/// Returns [`CsvError::Io`] if a file cannot be opened or read, otherwise
/// the same errors as [`load`].
pub fn load_files(files: &InputFiles, config: &FromCsvConfig) -> Result<ResultTables> {
    let mut loader = ResultLoader::new(config.clone())
        .read_file(Table::Compilation, &files.compilation)?
        .read_file(Table::Simulation, &files.simulation)?;
    if let Some(lowered) = &files.lowered {
        loader = loader.read_file(Table::LoweredSimulation, lowered)?;
    }
    Ok(loader.finish())
}

/// Incremental table reader.
///
/// # Examples
///
/// ```
/// use simbench_core::Table;
/// use simbench_csv::{FromCsvConfig, ResultLoader};
///
/// let tables = ResultLoader::new(FromCsvConfig::default())
///     .read(Table::Simulation, "simulation,stage,mean,stddev\nA,interpreter,2,0.1\n".as_bytes())
///     .unwrap()
///     .finish();
/// assert_eq!(tables.order().names(), ["A"]);
/// ```
#[derive(Debug, Default)]
pub struct ResultLoader {
    config: FromCsvConfig,
    builder: ResultTablesBuilder,
}

/// Column positions resolved from a table header.
struct Columns {
    key: usize,
    stage: Option<usize>,
    mean: usize,
    stddev: usize,
}

impl ResultLoader {
    /// Creates a loader.
    pub fn new(config: FromCsvConfig) -> Self {
        Self {
            config,
            builder: ResultTablesBuilder::new(),
        }
    }

    /// Opens and reads one table file.
    pub fn read_file(self, table: Table, path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| CsvError::io_error(path, e))?;
        let loader = self.read_source(table, path, file)?;
        info!(table = %table, path = %path.display(), "loaded result table");
        Ok(loader)
    }

    /// Reads one table from `reader`.
    pub fn read<R: Read>(self, table: Table, reader: R) -> Result<Self> {
        self.read_source(table, Path::new(table.as_str()), reader)
    }

    /// Finishes loading and returns the immutable tables.
    pub fn finish(self) -> ResultTables {
        self.builder.build()
    }

    fn read_source<R: Read>(mut self, table: Table, source: &Path, reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .trim(if self.config.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| CsvError::from_csv(table, source, 1, e))?
            .clone();
        let columns = resolve_columns(table, &headers)?;

        let mut loaded = 0usize;
        let mut skipped = 0usize;
        for (record_idx, result) in csv_reader.records().enumerate() {
            if record_idx >= self.config.max_rows {
                return Err(CsvError::SecurityLimit {
                    table,
                    limit: self.config.max_rows,
                });
            }

            let fallback_line = record_idx as u64 + 2;
            let record = result.map_err(|e| CsvError::from_csv(table, source, fallback_line, e))?;
            let line = record.position().map_or(fallback_line, |pos| pos.line());

            let benchmark = record.get(columns.key).unwrap_or_default();
            if benchmark.is_empty() {
                return Err(CsvError::EmptyKey { table, line });
            }

            let kind = match columns.stage {
                Some(stage_idx) => {
                    let stage_text = record.get(stage_idx).unwrap_or_default();
                    match Stage::parse(stage_text).and_then(|stage| series_kind(table, stage)) {
                        Some(kind) => kind,
                        None => {
                            debug!(
                                table = %table,
                                line,
                                stage = stage_text,
                                "skipping row with unrecognized stage"
                            );
                            skipped += 1;
                            continue;
                        }
                    }
                }
                None => SeriesKind::LOWERED,
            };

            let mean = parse_duration(table, line, "mean", record.get(columns.mean))?;
            let stddev = parse_duration(table, line, "stddev", record.get(columns.stddev))?;
            self.builder
                .insert(kind, benchmark, StageMeasurement::new(mean, stddev));
            loaded += 1;
        }

        debug!(table = %table, loaded, skipped, "finished reading table");
        Ok(self)
    }
}

/// Measurement kind recorded by a row of `table` with `stage`.
///
/// The compilation table has no interpreter stage; such rows are ignored
/// like any other unrecognized stage.
fn series_kind(table: Table, stage: Stage) -> Option<SeriesKind> {
    match (table, stage) {
        (Table::Compilation, Stage::Interpreter) => None,
        (Table::Compilation, stage) => Some(SeriesKind::compilation(stage.backend())),
        (Table::Simulation, stage) => Some(SeriesKind::simulation(stage.backend())),
        (Table::LoweredSimulation, _) => Some(SeriesKind::LOWERED),
    }
}

fn resolve_columns(table: Table, headers: &csv::StringRecord) -> Result<Columns> {
    let find = |column: &str| {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| CsvError::MissingColumn {
                table,
                column: column.to_string(),
            })
    };

    for column in table.required_columns() {
        find(column)?;
    }

    Ok(Columns {
        key: find(table.key_column())?,
        stage: if table.has_stage() {
            Some(find("stage")?)
        } else {
            None
        },
        mean: find("mean")?,
        stddev: find("stddev")?,
    })
}

fn parse_duration(table: Table, line: u64, column: &str, field: Option<&str>) -> Result<f64> {
    let text = field.unwrap_or_default();
    let value: f64 = text.parse().map_err(|_| CsvError::TypeMismatch {
        table,
        line,
        column: column.to_string(),
        value: text.to_string(),
    })?;

    let reason = if !value.is_finite() {
        "durations must be finite"
    } else if value < 0.0 {
        "durations must be non-negative"
    } else {
        return Ok(value);
    };
    Err(CsvError::InvalidValue {
        table,
        line,
        column: column.to_string(),
        value,
        reason,
    })
}
