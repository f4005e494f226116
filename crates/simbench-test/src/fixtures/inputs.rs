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

//! Canonical sets of the three input tables.

use super::builders::ResultCsvBuilder;
use simbench_core::Stage;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Text of the three input tables of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSet {
    /// Compilation-results CSV.
    pub compilation: String,
    /// Simulation-results CSV.
    pub simulation: String,
    /// Fully-lowered simulation CSV.
    pub lowered: String,
}

/// Paths of an [`InputSet`] written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    /// Compilation-results file.
    pub compilation: PathBuf,
    /// Simulation-results file.
    pub simulation: PathBuf,
    /// Fully-lowered simulation file.
    pub lowered: PathBuf,
}

impl InputSet {
    /// Writes the tables into `dir` under their conventional file names.
    pub fn write_to(&self, dir: &Path) -> io::Result<InputPaths> {
        fs::create_dir_all(dir)?;
        let paths = InputPaths {
            compilation: dir.join("compilation-results.csv"),
            simulation: dir.join("simulation-results.csv"),
            lowered: dir.join("simulation-fully-lowered-results.csv"),
        };
        fs::write(&paths.compilation, &self.compilation)?;
        fs::write(&paths.simulation, &self.simulation)?;
        fs::write(&paths.lowered, &self.lowered)?;
        Ok(paths)
    }
}

/// One benchmark's timings across every backend, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuiteEntry {
    /// Benchmark name.
    pub name: &'static str,
    /// Icarus compilation (mean, stddev).
    pub icarus_compilation: (f64, f64),
    /// Verilator compilation (mean, stddev).
    pub verilator_compilation: (f64, f64),
    /// Interpreter simulation (mean, stddev).
    pub interpreter: (f64, f64),
    /// Icarus simulation (mean, stddev).
    pub icarus_simulation: (f64, f64),
    /// Verilator simulation (mean, stddev).
    pub verilator_simulation: (f64, f64),
    /// Lowered interpreter simulation (mean, stddev).
    pub lowered: (f64, f64),
}

/// Benchmark excluded from headline charts in the suite.
pub const SUITE_OUTLIER: &str = "Outlier";

/// A five-benchmark suite. Simulation slowdowns relative to the interpreter
/// are 4, 4, 2, 4 and 500 for Icarus and 0.25 (four times) and 20 for
/// Verilator; the last benchmark is [`SUITE_OUTLIER`].
pub const SUITE: [SuiteEntry; 5] = [
    SuiteEntry {
        name: "Linear Algebra Matmul",
        icarus_compilation: (1.2, 0.05),
        verilator_compilation: (9.5, 0.3),
        interpreter: (2.0, 0.1),
        icarus_simulation: (8.0, 0.4),
        verilator_simulation: (0.5, 0.02),
        lowered: (1.5, 0.05),
    },
    SuiteEntry {
        name: "Linear Algebra LU",
        icarus_compilation: (1.0, 0.04),
        verilator_compilation: (8.0, 0.2),
        interpreter: (4.0, 0.2),
        icarus_simulation: (16.0, 0.5),
        verilator_simulation: (1.0, 0.03),
        lowered: (3.0, 0.1),
    },
    SuiteEntry {
        name: "NTT 64",
        icarus_compilation: (0.8, 0.02),
        verilator_compilation: (7.5, 0.25),
        interpreter: (1.0, 0.05),
        icarus_simulation: (2.0, 0.1),
        verilator_simulation: (0.25, 0.01),
        lowered: (0.5, 0.02),
    },
    SuiteEntry {
        name: "FFT 256",
        icarus_compilation: (1.1, 0.03),
        verilator_compilation: (9.0, 0.3),
        interpreter: (8.0, 0.3),
        icarus_simulation: (32.0, 1.0),
        verilator_simulation: (2.0, 0.05),
        lowered: (6.0, 0.2),
    },
    SuiteEntry {
        name: SUITE_OUTLIER,
        icarus_compilation: (0.9, 0.02),
        verilator_compilation: (12.0, 0.4),
        interpreter: (0.01, 0.001),
        icarus_simulation: (5.0, 0.2),
        verilator_simulation: (0.2, 0.01),
        lowered: (0.02, 0.001),
    },
];

/// The suite as CSV tables.
///
/// The compilation table also carries a row with an unrecognized stage,
/// which loaders must skip.
pub fn suite() -> InputSet {
    let mut compilation = ResultCsvBuilder::compilation();
    let mut simulation = ResultCsvBuilder::simulation();
    let mut lowered = ResultCsvBuilder::lowered();

    for entry in &SUITE {
        let (name, (ic, ic_sd), (vc, vc_sd)) = (
            entry.name,
            entry.icarus_compilation,
            entry.verilator_compilation,
        );
        compilation = compilation
            .measurement(name, Stage::IcarusVerilog, ic, ic_sd)
            .measurement(name, Stage::Verilog, vc, vc_sd);

        let ((interp, interp_sd), (is, is_sd), (vs, vs_sd)) = (
            entry.interpreter,
            entry.icarus_simulation,
            entry.verilator_simulation,
        );
        simulation = simulation
            .measurement(name, Stage::Interpreter, interp, interp_sd)
            .measurement(name, Stage::IcarusVerilog, is, is_sd)
            .measurement(name, Stage::Verilog, vs, vs_sd);

        lowered = lowered.lowered_measurement(name, entry.lowered.0, entry.lowered.1);
    }
    compilation = compilation.row("NTT 64", "firrtl", "3.5", "0.1");

    InputSet {
        compilation: compilation.build(),
        simulation: simulation.build(),
        lowered: lowered.build(),
    }
}

/// Names of the suite benchmarks, in file order.
pub fn suite_names() -> Vec<&'static str> {
    SUITE.iter().map(|e| e.name).collect()
}

/// The single-benchmark example: Verilator only, benchmark `A`.
///
/// Verilator compilation 10 s, Verilator simulation 4 s, interpreter 2 s.
pub fn verilator_only() -> InputSet {
    InputSet {
        compilation: ResultCsvBuilder::compilation()
            .row("A", "verilog", "10", "1")
            .build(),
        simulation: ResultCsvBuilder::simulation()
            .row("A", "interpreter", "2", "0.1")
            .row("A", "verilog", "4", "0.2")
            .build(),
        lowered: ResultCsvBuilder::lowered().row("A", "", "1", "0.05").build(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_shape() {
        let inputs = suite();
        // header + 2 rows per benchmark + 1 unrecognized stage
        assert_eq!(inputs.compilation.lines().count(), 1 + 2 * SUITE.len() + 1);
        assert_eq!(inputs.simulation.lines().count(), 1 + 3 * SUITE.len());
        assert_eq!(inputs.lowered.lines().count(), 1 + SUITE.len());
        assert!(inputs.compilation.contains("firrtl"));
    }

    #[test]
    fn test_suite_names() {
        assert_eq!(suite_names().last(), Some(&SUITE_OUTLIER));
    }
}
