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

//! Immutable lookup tables built from the three result files.

use crate::error::{Result, SimbenchError};
use crate::model::{SeriesKind, StageMeasurement, Table};
use crate::order::BenchmarkOrder;
use crate::series::MeasurementSeries;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// All measurements of a run, keyed by series kind and benchmark name.
///
/// Built once through [`ResultTablesBuilder`] and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ResultTables {
    order: BenchmarkOrder,
    order_table: Option<Table>,
    entries: HashMap<SeriesKind, HashMap<String, StageMeasurement>>,
}

impl ResultTables {
    /// Benchmark order, as first listed by the ordering table.
    pub fn order(&self) -> &BenchmarkOrder {
        &self.order
    }

    /// Table that fixed the benchmark order: the first one with any
    /// recognized rows.
    pub fn order_table(&self) -> Option<Table> {
        self.order_table
    }

    /// Looks up a measurement.
    pub fn get(&self, kind: SeriesKind, benchmark: &str) -> Option<&StageMeasurement> {
        self.entries.get(&kind).and_then(|table| table.get(benchmark))
    }

    /// Looks up a measurement that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`SimbenchError::MissingKey`] naming the benchmark and table.
    pub fn require(&self, kind: SeriesKind, benchmark: &str) -> Result<&StageMeasurement> {
        self.get(kind, benchmark)
            .ok_or_else(|| SimbenchError::MissingKey {
                benchmark: benchmark.to_string(),
                entry: kind.describe(),
                table: kind.table(),
            })
    }

    /// Number of benchmarks with a measurement of `kind`.
    pub fn count(&self, kind: SeriesKind) -> usize {
        self.entries.get(&kind).map_or(0, HashMap::len)
    }

    /// Whether any measurement of `kind` was loaded.
    pub fn has(&self, kind: SeriesKind) -> bool {
        self.count(kind) > 0
    }

    /// Derives the series of `kind` aligned with `order`.
    ///
    /// # Errors
    ///
    /// Returns [`SimbenchError::MissingKey`] for the first benchmark in
    /// `order` without a measurement of `kind`.
    pub fn series(&self, kind: SeriesKind, order: &BenchmarkOrder) -> Result<MeasurementSeries> {
        let measurements = order
            .iter()
            .map(|name| self.require(kind, name).copied())
            .collect::<Result<Vec<_>>>()?;
        Ok(MeasurementSeries::new(
            kind,
            order.names().to_vec(),
            measurements,
        ))
    }
}

/// Accumulates measurements while tables are read.
///
/// The table of the first recorded measurement fixes the benchmark order.
/// Measurements of benchmarks that table never lists are dropped on
/// [`build`](Self::build). The first measurement recorded for a (kind,
/// benchmark) pair is kept; later duplicates are reported and dropped.
#[derive(Debug, Default)]
pub struct ResultTablesBuilder {
    order_table: Option<Table>,
    order: Vec<String>,
    seen: HashSet<String>,
    entries: HashMap<SeriesKind, HashMap<String, StageMeasurement>>,
}

impl ResultTablesBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a measurement. Returns `false` if it was a duplicate.
    pub fn insert(
        &mut self,
        kind: SeriesKind,
        benchmark: &str,
        measurement: StageMeasurement,
    ) -> bool {
        let order_table = *self.order_table.get_or_insert(kind.table());
        if kind.table() == order_table && self.seen.insert(benchmark.to_string()) {
            self.order.push(benchmark.to_string());
        }

        let table = self.entries.entry(kind).or_default();
        if table.contains_key(benchmark) {
            warn!(
                benchmark,
                entry = %kind.describe(),
                table = %kind.table(),
                "duplicate measurement ignored, keeping the first one"
            );
            return false;
        }
        table.insert(benchmark.to_string(), measurement);
        true
    }

    /// Freezes the accumulated measurements.
    pub fn build(self) -> ResultTables {
        let Self {
            order_table,
            order,
            seen,
            mut entries,
        } = self;

        for (kind, rows) in entries.iter_mut() {
            rows.retain(|benchmark, _| {
                let listed = seen.contains(benchmark);
                if !listed {
                    debug!(
                        benchmark = %benchmark,
                        entry = %kind.describe(),
                        table = %kind.table(),
                        "ignoring benchmark outside the ordering table"
                    );
                }
                listed
            });
        }

        ResultTables {
            order: BenchmarkOrder::new(order),
            order_table,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Backend, Table};

    fn m(mean: f64) -> StageMeasurement {
        StageMeasurement::new(mean, mean / 10.0)
    }

    #[test]
    fn test_order_is_first_occurrence() {
        let mut builder = ResultTablesBuilder::new();
        builder.insert(SeriesKind::compilation(Backend::Icarus), "b", m(1.0));
        builder.insert(SeriesKind::compilation(Backend::Verilator), "a", m(1.0));
        builder.insert(SeriesKind::compilation(Backend::Verilator), "b", m(1.0));
        let tables = builder.build();
        assert_eq!(tables.order().names(), ["b", "a"]);
        assert_eq!(tables.order_table(), Some(Table::Compilation));
    }

    #[test]
    fn test_later_tables_do_not_extend_order() {
        let mut builder = ResultTablesBuilder::new();
        builder.insert(SeriesKind::compilation(Backend::Icarus), "A", m(1.0));
        builder.insert(SeriesKind::BASELINE, "A", m(2.0));
        builder.insert(SeriesKind::BASELINE, "Extra", m(2.0));
        builder.insert(SeriesKind::LOWERED, "Lonely", m(2.0));
        let tables = builder.build();

        assert_eq!(tables.order().names(), ["A"]);
        assert!(tables.get(SeriesKind::BASELINE, "Extra").is_none());
        assert_eq!(tables.count(SeriesKind::BASELINE), 1);
        assert!(!tables.has(SeriesKind::LOWERED));
        let series = tables
            .series(SeriesKind::compilation(Backend::Icarus), tables.order())
            .unwrap();
        assert_eq!(series.means(), [1.0]);
    }

    #[test]
    fn test_order_falls_back_to_simulation() {
        let mut builder = ResultTablesBuilder::new();
        builder.insert(SeriesKind::BASELINE, "x", m(1.0));
        builder.insert(SeriesKind::simulation(Backend::Verilator), "y", m(1.0));
        builder.insert(SeriesKind::LOWERED, "x", m(1.0));
        let tables = builder.build();
        assert_eq!(tables.order().names(), ["x", "y"]);
        assert_eq!(tables.order_table(), Some(Table::Simulation));
        assert!(tables.has(SeriesKind::LOWERED));
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let mut builder = ResultTablesBuilder::new();
        assert!(builder.insert(SeriesKind::BASELINE, "a", m(1.0)));
        assert!(!builder.insert(SeriesKind::BASELINE, "a", m(9.0)));
        let tables = builder.build();
        assert_eq!(tables.get(SeriesKind::BASELINE, "a").map(|m| m.mean), Some(1.0));
        assert_eq!(tables.count(SeriesKind::BASELINE), 1);
    }

    #[test]
    fn test_require_missing() {
        let tables = ResultTablesBuilder::new().build();
        let err = tables.require(SeriesKind::BASELINE, "x").unwrap_err();
        assert_eq!(
            err,
            SimbenchError::MissingKey {
                benchmark: "x".to_string(),
                entry: "interpreter simulation".to_string(),
                table: Table::Simulation,
            }
        );
    }

    #[test]
    fn test_series_alignment() {
        let mut builder = ResultTablesBuilder::new();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            builder.insert(SeriesKind::BASELINE, name, m(i as f64 + 1.0));
        }
        let tables = builder.build();
        let series = tables.series(SeriesKind::BASELINE, tables.order()).unwrap();
        assert_eq!(series.len(), tables.order().len());
        assert_eq!(series.means(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_series_missing_key() {
        let mut builder = ResultTablesBuilder::new();
        builder.insert(SeriesKind::compilation(Backend::Icarus), "a", m(1.0));
        builder.insert(SeriesKind::compilation(Backend::Icarus), "b", m(1.0));
        builder.insert(SeriesKind::simulation(Backend::Icarus), "a", m(1.0));
        let tables = builder.build();
        let err = tables
            .series(SeriesKind::simulation(Backend::Icarus), tables.order())
            .unwrap_err();
        assert!(err.is_missing_key());
        assert!(err.to_string().contains("'b'"));
        assert!(!tables.has(SeriesKind::LOWERED));
    }
}
