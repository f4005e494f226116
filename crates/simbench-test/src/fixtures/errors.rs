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

//! Malformed inputs for error-path tests.

use super::builders::ResultCsvBuilder;
use super::inputs::{verilator_only, InputSet};

/// Simulation table with a non-numeric `mean`.
pub fn non_numeric_mean() -> InputSet {
    InputSet {
        simulation: ResultCsvBuilder::simulation()
            .row("A", "interpreter", "N/A", "0.1")
            .row("A", "verilog", "4", "0.2")
            .build(),
        ..verilator_only()
    }
}

/// Simulation table without an `interpreter` row for benchmark `A`.
pub fn missing_interpreter() -> InputSet {
    InputSet {
        simulation: ResultCsvBuilder::simulation()
            .row("A", "verilog", "4", "0.2")
            .build(),
        ..verilator_only()
    }
}

/// Compilation table whose header lacks `stddev`.
pub fn missing_stddev_column() -> InputSet {
    InputSet {
        compilation: ResultCsvBuilder::compilation()
            .header(&["compilation", "stage", "mean", "median"])
            .raw_row(&["A", "verilog", "10", "10"])
            .build(),
        ..verilator_only()
    }
}

/// Lowered table with a negative duration.
pub fn negative_duration() -> InputSet {
    InputSet {
        lowered: ResultCsvBuilder::lowered().row("A", "", "-1", "0.05").build(),
        ..verilator_only()
    }
}

/// Every malformed input set with a short name.
pub fn all() -> Vec<(&'static str, InputSet)> {
    vec![
        ("non_numeric_mean", non_numeric_mean()),
        ("missing_interpreter", missing_interpreter()),
        ("missing_stddev_column", missing_stddev_column()),
        ("negative_duration", negative_duration()),
    ]
}
