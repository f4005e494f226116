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

//! Typed records for benchmark measurements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three input tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Table {
    /// Per-backend compilation timings.
    Compilation,
    /// Interpreter and compiled-backend simulation timings.
    Simulation,
    /// Simulation timings of the fully lowered design on the interpreter.
    LoweredSimulation,
}

impl Table {
    /// Name of the column holding the benchmark identifier.
    pub fn key_column(&self) -> &'static str {
        match self {
            Table::Compilation => "compilation",
            Table::Simulation => "simulation",
            Table::LoweredSimulation => "simulation-fully-lowered",
        }
    }

    /// Whether rows carry an explicit `stage` column.
    pub fn has_stage(&self) -> bool {
        !matches!(self, Table::LoweredSimulation)
    }

    /// Columns every row of this table must provide.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Table::Compilation => &["compilation", "stage", "mean", "median", "stddev"],
            Table::Simulation => &["simulation", "stage", "mean", "stddev"],
            Table::LoweredSimulation => &["simulation-fully-lowered", "mean", "stddev"],
        }
    }

    /// Conventional file stem of the table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Compilation => "compilation-results",
            Table::Simulation => "simulation-results",
            Table::LoweredSimulation => "simulation-fully-lowered-results",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized values of the `stage` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Icarus Verilog event-driven simulator.
    IcarusVerilog,
    /// Verilator compiled simulator.
    Verilog,
    /// Reference interpreter.
    Interpreter,
}

impl Stage {
    /// All recognized stages.
    pub const ALL: [Stage; 3] = [Stage::IcarusVerilog, Stage::Verilog, Stage::Interpreter];

    /// Parses a `stage` column value. Unrecognized values yield `None`.
    ///
    /// ```
    /// use simbench_core::Stage;
    ///
    /// assert_eq!(Stage::parse("verilog"), Some(Stage::Verilog));
    /// assert_eq!(Stage::parse("firrtl"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.as_str() == value)
    }

    /// Column value for this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::IcarusVerilog => "icarus-verilog",
            Stage::Verilog => "verilog",
            Stage::Interpreter => "interpreter",
        }
    }

    /// Backend measured by rows with this stage.
    pub fn backend(&self) -> Backend {
        match self {
            Stage::IcarusVerilog => Backend::Icarus,
            Stage::Verilog => Backend::Verilator,
            Stage::Interpreter => Backend::Interpreter,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A simulation pipeline being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Icarus Verilog (compiled backend A).
    Icarus,
    /// Verilator (compiled backend B).
    Verilator,
    /// The reference interpreter.
    Interpreter,
    /// The interpreter running the fully lowered design.
    LoweredInterpreter,
}

impl Backend {
    /// Backends that have both a compilation and a simulation stage.
    pub const COMPILED: [Backend; 2] = [Backend::Icarus, Backend::Verilator];

    /// All backends in chart order.
    pub const ALL: [Backend; 4] = [
        Backend::Icarus,
        Backend::Verilator,
        Backend::Interpreter,
        Backend::LoweredInterpreter,
    ];

    /// Human-readable label used in legends and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Backend::Icarus => "Icarus",
            Backend::Verilator => "Verilator",
            Backend::Interpreter => "Interpreter",
            Backend::LoweredInterpreter => "Interpreter (lowered)",
        }
    }

    /// Stage value identifying this backend in the input tables, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Backend::Icarus => Some(Stage::IcarusVerilog),
            Backend::Verilator => Some(Stage::Verilog),
            Backend::Interpreter => Some(Stage::Interpreter),
            Backend::LoweredInterpreter => None,
        }
    }

    /// Whether the backend has a compilation stage.
    pub fn is_compiled(&self) -> bool {
        Self::COMPILED.contains(self)
    }

    /// Parses a backend name as accepted on the command line.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "icarus" | "icarus-verilog" => Some(Backend::Icarus),
            "verilator" | "verilog" => Some(Backend::Verilator),
            "interpreter" => Some(Backend::Interpreter),
            "lowered" | "lowered-interpreter" => Some(Backend::LoweredInterpreter),
            _ => None,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pipeline phase of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Translating the design into a runnable simulator.
    Compilation,
    /// Running the simulation.
    Simulation,
}

impl Phase {
    /// Lowercase name of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Compilation => "compilation",
            Phase::Simulation => "simulation",
        }
    }
}

/// Identifies one measurement column: a backend in a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesKind {
    /// Backend measured.
    pub backend: Backend,
    /// Phase measured.
    pub phase: Phase,
}

impl SeriesKind {
    /// Interpreter simulation, the normalization baseline.
    pub const BASELINE: SeriesKind = SeriesKind::simulation(Backend::Interpreter);

    /// Lowered interpreter simulation.
    pub const LOWERED: SeriesKind = SeriesKind::simulation(Backend::LoweredInterpreter);

    /// Compilation measurement of `backend`.
    pub const fn compilation(backend: Backend) -> Self {
        Self {
            backend,
            phase: Phase::Compilation,
        }
    }

    /// Simulation measurement of `backend`.
    pub const fn simulation(backend: Backend) -> Self {
        Self {
            backend,
            phase: Phase::Simulation,
        }
    }

    /// Table this kind of measurement is read from.
    pub fn table(&self) -> Table {
        match (self.backend, self.phase) {
            (_, Phase::Compilation) => Table::Compilation,
            (Backend::LoweredInterpreter, Phase::Simulation) => Table::LoweredSimulation,
            (_, Phase::Simulation) => Table::Simulation,
        }
    }

    /// Short description used in error messages, e.g. `"verilog compilation"`.
    pub fn describe(&self) -> String {
        let source = match self.backend.stage() {
            Some(stage) => stage.as_str(),
            None => "fully-lowered",
        };
        format!("{} {}", source, self.phase.as_str())
    }

    /// Legend label, e.g. `"Verilator Compilation"`.
    pub fn label(&self) -> String {
        let phase = match self.phase {
            Phase::Compilation => "Compilation",
            Phase::Simulation => "Simulation",
        };
        format!("{} {}", self.backend.label(), phase)
    }
}

/// Mean and standard deviation of one (benchmark, stage) timing, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageMeasurement {
    /// Mean duration.
    pub mean: f64,
    /// Standard deviation of the duration.
    pub stddev: f64,
}

impl StageMeasurement {
    /// Creates a measurement.
    pub fn new(mean: f64, stddev: f64) -> Self {
        Self { mean, stddev }
    }
}
