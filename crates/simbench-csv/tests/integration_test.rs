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

//! Integration tests for simbench-csv.

use approx::assert_relative_eq;
use simbench_core::{Backend, SeriesKind, Table};
use simbench_csv::{load, load_files, CsvError, FromCsvConfig, InputFiles};
use simbench_test::fixtures::{self, errors, ResultCsvBuilder, SUITE};
use simbench_test::{assert_ratios_eq, InputSet};

fn load_set(inputs: &InputSet) -> simbench_csv::Result<simbench_core::ResultTables> {
    load(&inputs.compilation, &inputs.simulation, &inputs.lowered)
}

#[test]
fn test_verilator_only_example() {
    let tables = load_set(&fixtures::verilator_only()).unwrap();
    let order = tables.order();
    assert_eq!(order.names(), ["A"]);

    let compilation = tables
        .series(SeriesKind::compilation(Backend::Verilator), order)
        .unwrap();
    let simulation = tables
        .series(SeriesKind::simulation(Backend::Verilator), order)
        .unwrap();
    let interpreter = tables.series(SeriesKind::BASELINE, order).unwrap();

    assert_eq!(compilation.means(), [10.0]);
    assert_eq!(compilation.stddevs(), [1.0]);
    assert_eq!(simulation.means(), [4.0]);
    assert_eq!(interpreter.means(), [2.0]);

    let slowdown = simulation.normalize_against(&interpreter).unwrap();
    assert_eq!(slowdown.ratios(), [2.0]);

    // Icarus was never measured, so requesting it fails loudly
    let err = tables
        .series(SeriesKind::compilation(Backend::Icarus), order)
        .unwrap_err();
    assert!(err.is_missing_key());
}

#[test]
fn test_suite_order_and_alignment() {
    let tables = load_set(&fixtures::suite()).unwrap();
    let order = tables.order();
    assert_eq!(order.names().to_vec(), fixtures::suite_names());

    for kind in [
        SeriesKind::compilation(Backend::Icarus),
        SeriesKind::compilation(Backend::Verilator),
        SeriesKind::simulation(Backend::Icarus),
        SeriesKind::simulation(Backend::Verilator),
        SeriesKind::BASELINE,
        SeriesKind::LOWERED,
    ] {
        let series = tables.series(kind, order).unwrap();
        assert_eq!(series.len(), order.len(), "{:?} misaligned", kind);
    }
}

#[test]
fn test_suite_ratios() {
    let tables = load_set(&fixtures::suite()).unwrap();
    let order = tables.order();
    let baseline = tables.series(SeriesKind::BASELINE, order).unwrap();
    let icarus = tables
        .series(SeriesKind::simulation(Backend::Icarus), order)
        .unwrap();
    let ratios = icarus.normalize_against(&baseline).unwrap();
    assert_ratios_eq(ratios.ratios(), &[4.0, 4.0, 2.0, 4.0, 500.0]);

    let headline = order.excluding(&[fixtures::SUITE_OUTLIER]);
    let baseline = tables.series(SeriesKind::BASELINE, &headline).unwrap();
    let icarus = tables
        .series(SeriesKind::simulation(Backend::Icarus), &headline)
        .unwrap();
    let summary = icarus.normalize_against(&baseline).unwrap().summarize().unwrap();
    assert_relative_eq!(summary.geometric_mean, 128f64.powf(0.25), epsilon = 1e-9);
    assert_relative_eq!(summary.max, 4.0, epsilon = 1e-9);
}

#[test]
fn test_order_comes_from_compilation_table() {
    let compilation = ResultCsvBuilder::compilation()
        .row("A", "icarus-verilog", "1", "0.1")
        .build();
    let simulation = ResultCsvBuilder::simulation()
        .row("A", "interpreter", "2", "0.1")
        .row("A", "icarus-verilog", "4", "0.2")
        .row("Extra", "interpreter", "3", "0.1")
        .build();
    let lowered = ResultCsvBuilder::lowered().row("Extra", "", "1", "0.1").build();

    let tables = load(&compilation, &simulation, &lowered).unwrap();
    assert_eq!(tables.order().names(), ["A"]);
    assert_eq!(tables.order_table(), Some(Table::Compilation));

    let icarus = tables
        .series(SeriesKind::compilation(Backend::Icarus), tables.order())
        .unwrap();
    assert_eq!(icarus.means(), [1.0]);
    assert!(tables.get(SeriesKind::BASELINE, "Extra").is_none());
}

#[test]
fn test_order_falls_back_to_simulation_table() {
    let compilation = ResultCsvBuilder::compilation()
        .row("A", "firrtl", "1", "0.1")
        .build();
    let simulation = ResultCsvBuilder::simulation()
        .row("B", "interpreter", "2", "0.1")
        .row("A", "interpreter", "3", "0.1")
        .build();
    let lowered = ResultCsvBuilder::lowered().build();

    let tables = load(&compilation, &simulation, &lowered).unwrap();
    assert_eq!(tables.order().names(), ["B", "A"]);
    assert_eq!(tables.order_table(), Some(Table::Simulation));
}

#[test]
fn test_unrecognized_stage_does_not_leak() {
    let tables = load_set(&fixtures::suite()).unwrap();
    let ntt = tables
        .get(SeriesKind::compilation(Backend::Icarus), "NTT 64")
        .unwrap();
    assert_relative_eq!(ntt.mean, SUITE[2].icarus_compilation.0);
}

#[test]
fn test_missing_interpreter_is_missing_key() {
    let tables = load_set(&errors::missing_interpreter()).unwrap();
    let err = tables
        .series(SeriesKind::BASELINE, tables.order())
        .unwrap_err();
    assert!(err.is_missing_key());
    assert!(err.to_string().contains("'A'"));
    assert!(err.to_string().contains("simulation-results"));
}

#[test]
fn test_non_numeric_mean_is_format_error() {
    let err = load_set(&errors::non_numeric_mean()).unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.table(), Some(Table::Simulation));
    let format = err.to_format_error().unwrap();
    assert!(format.is_format());
    assert!(format.to_string().contains("N/A"));
}

#[test]
fn test_missing_column_is_format_error() {
    let err = load_set(&errors::missing_stddev_column()).unwrap_err();
    assert!(matches!(err, CsvError::MissingColumn { ref column, .. } if column == "stddev"));
}

#[test]
fn test_negative_duration_rejected() {
    let err = load_set(&errors::negative_duration()).unwrap_err();
    assert_eq!(err.table(), Some(Table::LoweredSimulation));
}

#[test]
fn test_load_files_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let paths = fixtures::suite().write_to(dir.path()).unwrap();
    let files = InputFiles {
        compilation: paths.compilation,
        simulation: paths.simulation,
        lowered: Some(paths.lowered),
    };
    let tables = load_files(&files, &FromCsvConfig::default()).unwrap();
    assert_eq!(tables.order().len(), SUITE.len());
    assert!(tables.has(SeriesKind::LOWERED));
}

#[test]
fn test_load_files_without_lowered() {
    let dir = tempfile::tempdir().unwrap();
    let paths = fixtures::suite().write_to(dir.path()).unwrap();
    let files = InputFiles {
        compilation: paths.compilation,
        simulation: paths.simulation,
        lowered: None,
    };
    let tables = load_files(&files, &FromCsvConfig::default()).unwrap();
    assert!(!tables.has(SeriesKind::LOWERED));
}

#[test]
fn test_load_files_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let files = InputFiles {
        compilation: dir.path().join("nope.csv"),
        simulation: dir.path().join("nope-either.csv"),
        lowered: None,
    };
    let err = load_files(&files, &FromCsvConfig::default()).unwrap_err();
    assert!(!err.is_format());
    assert!(err.to_string().contains("nope.csv"));
}
