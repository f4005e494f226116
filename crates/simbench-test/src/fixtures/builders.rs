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

//! Builders for result tables in the on-disk CSV layout.

use simbench_core::{Stage, Table};

/// Builder for one result table as CSV text.
///
/// Numeric fields are taken as text so fixtures can inject malformed values.
///
/// # Examples
///
/// ```
/// use simbench_test::fixtures::builders::ResultCsvBuilder;
///
/// let csv = ResultCsvBuilder::simulation()
///     .row("A", "interpreter", "2", "0.1")
///     .row("A", "verilog", "4", "0.2")
///     .build();
///
/// assert!(csv.starts_with("simulation,stage,mean,stddev\n"));
/// assert!(csv.contains("A,verilog,4,0.2"));
/// ```
#[derive(Debug, Clone)]
pub struct ResultCsvBuilder {
    table: Table,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultCsvBuilder {
    /// Creates a builder with the standard header of `table`.
    pub fn new(table: Table) -> Self {
        Self {
            table,
            header: table
                .required_columns()
                .iter()
                .map(|c| c.to_string())
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Compilation-results table.
    pub fn compilation() -> Self {
        Self::new(Table::Compilation)
    }

    /// Simulation-results table.
    pub fn simulation() -> Self {
        Self::new(Table::Simulation)
    }

    /// Fully-lowered simulation table.
    pub fn lowered() -> Self {
        Self::new(Table::LoweredSimulation)
    }

    /// Replaces the header, e.g. to drop a required column.
    pub fn header(mut self, columns: &[&str]) -> Self {
        self.header = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Adds a row. `stage` is ignored for the lowered table; the compilation
    /// table's `median` repeats `mean`.
    pub fn row(mut self, benchmark: &str, stage: &str, mean: &str, stddev: &str) -> Self {
        let row = match self.table {
            Table::Compilation => vec![benchmark, stage, mean, mean, stddev],
            Table::Simulation => vec![benchmark, stage, mean, stddev],
            Table::LoweredSimulation => vec![benchmark, mean, stddev],
        };
        self.rows.push(row.into_iter().map(String::from).collect());
        self
    }

    /// Adds a row with numeric fields.
    pub fn measurement(self, benchmark: &str, stage: Stage, mean: f64, stddev: f64) -> Self {
        self.row(benchmark, stage.as_str(), &mean.to_string(), &stddev.to_string())
    }

    /// Adds a lowered-table row with numeric fields.
    pub fn lowered_measurement(self, benchmark: &str, mean: f64, stddev: f64) -> Self {
        self.row(benchmark, "", &mean.to_string(), &stddev.to_string())
    }

    /// Adds a row verbatim.
    pub fn raw_row(mut self, fields: &[&str]) -> Self {
        self.rows.push(fields.iter().map(|f| f.to_string()).collect());
        self
    }

    /// Renders the CSV text.
    pub fn build(&self) -> String {
        let mut out = String::new();
        push_record(&mut out, &self.header);
        for row in &self.rows {
            push_record(&mut out, row);
        }
        out
    }
}

fn push_record(out: &mut String, fields: &[String]) {
    let line: Vec<String> = fields.iter().map(|f| quote(f)).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compilation_median_repeats_mean() {
        let csv = ResultCsvBuilder::compilation()
            .row("A", "verilog", "10", "1")
            .build();
        assert_eq!(csv, "compilation,stage,mean,median,stddev\nA,verilog,10,10,1\n");
    }

    #[test]
    fn test_lowered_has_no_stage() {
        let csv = ResultCsvBuilder::lowered().lowered_measurement("A", 1.5, 0.25).build();
        assert_eq!(csv, "simulation-fully-lowered,mean,stddev\nA,1.5,0.25\n");
    }

    #[test]
    fn test_quoting() {
        let csv = ResultCsvBuilder::simulation()
            .row("Matmul, 8x8", "interpreter", "1", "0")
            .build();
        assert!(csv.contains("\"Matmul, 8x8\",interpreter"));
    }
}
