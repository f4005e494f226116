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

//! Index-aligned numeric series derived from the result tables.

use crate::error::{Result, SimbenchError};
use crate::model::{SeriesKind, StageMeasurement};
use crate::stats::{normalize, summarize, Summary};

/// Means and deviations of one series kind, aligned with a benchmark order.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSeries {
    kind: SeriesKind,
    names: Vec<String>,
    means: Vec<f64>,
    stddevs: Vec<f64>,
}

impl MeasurementSeries {
    /// Creates a series from parallel names and measurements.
    ///
    /// # Panics
    ///
    /// Panics if `names` and `measurements` differ in length.
    pub fn new(kind: SeriesKind, names: Vec<String>, measurements: Vec<StageMeasurement>) -> Self {
        assert_eq!(names.len(), measurements.len(), "one measurement per benchmark");
        let means = measurements.iter().map(|m| m.mean).collect();
        let stddevs = measurements.iter().map(|m| m.stddev).collect();
        Self {
            kind,
            names,
            means,
            stddevs,
        }
    }

    /// Kind of measurement held.
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    /// Benchmark names, in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Mean durations, in order.
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Standard deviations, in order.
    pub fn stddevs(&self) -> &[f64] {
        &self.stddevs
    }

    /// Number of benchmarks.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Slowdown of this series relative to `baseline`, benchmark by benchmark.
    ///
    /// # Panics
    ///
    /// Panics if the two series are not aligned with the same order.
    ///
    /// # Errors
    ///
    /// Returns [`SimbenchError::Domain`] naming the benchmark whose baseline
    /// mean is not positive.
    pub fn normalize_against(&self, baseline: &MeasurementSeries) -> Result<RatioSeries> {
        let ratios = self.checked_ratio(&self.means, baseline)?;
        Ok(RatioSeries::new(self.label_over(baseline), self.names.clone(), ratios))
    }

    /// Standard deviations scaled by the baseline means, for error bars on
    /// normalized charts.
    pub fn stddevs_normalized_by(&self, baseline: &MeasurementSeries) -> Result<Vec<f64>> {
        self.checked_ratio(&self.stddevs, baseline)
    }

    fn checked_ratio(&self, values: &[f64], baseline: &MeasurementSeries) -> Result<Vec<f64>> {
        assert_eq!(
            self.names, baseline.names,
            "series must share one benchmark order"
        );
        normalize(values, &baseline.means).map_err(|err| match err {
            SimbenchError::Domain { .. } => {
                let culprit = baseline
                    .means
                    .iter()
                    .position(|&b| !(b > 0.0))
                    .and_then(|i| baseline.names.get(i))
                    .map(String::as_str)
                    .unwrap_or("?");
                SimbenchError::domain(format!(
                    "cannot normalize {} of '{}': {} baseline is not positive",
                    self.kind.describe(),
                    culprit,
                    baseline.kind.describe()
                ))
            }
            other => other,
        })
    }

    fn label_over(&self, baseline: &MeasurementSeries) -> String {
        format!("{} / {}", self.kind.label(), baseline.kind.label())
    }
}

/// Named per-benchmark ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioSeries {
    label: String,
    names: Vec<String>,
    ratios: Vec<f64>,
}

impl RatioSeries {
    /// Creates a ratio series.
    ///
    /// # Panics
    ///
    /// Panics if `names` and `ratios` differ in length.
    pub fn new(label: impl Into<String>, names: Vec<String>, ratios: Vec<f64>) -> Self {
        assert_eq!(names.len(), ratios.len(), "one ratio per benchmark");
        Self {
            label: label.into(),
            names,
            ratios,
        }
    }

    /// Description of what was divided by what.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Benchmark names, in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Ratios, in order.
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Number of ratios.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Pairs of (benchmark, ratio).
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.ratios.iter().copied())
    }

    /// Elementwise sum with another aligned ratio series, used for stacked
    /// end-to-end bars.
    pub fn stacked_with(&self, top: &RatioSeries, label: impl Into<String>) -> RatioSeries {
        assert_eq!(self.names, top.names, "series must share one benchmark order");
        let ratios = self
            .ratios
            .iter()
            .zip(&top.ratios)
            .map(|(a, b)| a + b)
            .collect();
        RatioSeries::new(label, self.names.clone(), ratios)
    }

    /// Geometric mean and worst case.
    pub fn summarize(&self) -> Result<Summary> {
        summarize(&self.ratios).map_err(|err| match err {
            SimbenchError::Domain { message } => {
                SimbenchError::domain(format!("{} ({})", message, self.label))
            }
            other => other,
        })
    }

    /// Benchmark with the largest ratio.
    pub fn worst(&self) -> Option<(&str, f64)> {
        self.iter()
            .fold(None, |best: Option<(&str, f64)>, (name, ratio)| match best {
                Some((_, r)) if r >= ratio => best,
                _ => Some((name, ratio)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Backend;
    use approx::assert_relative_eq;

    fn series(kind: SeriesKind, values: &[(&str, f64, f64)]) -> MeasurementSeries {
        MeasurementSeries::new(
            kind,
            values.iter().map(|(n, _, _)| n.to_string()).collect(),
            values
                .iter()
                .map(|(_, mean, sd)| StageMeasurement::new(*mean, *sd))
                .collect(),
        )
    }

    #[test]
    fn test_normalize_against() {
        let sim = series(SeriesKind::simulation(Backend::Verilator), &[("A", 4.0, 0.2)]);
        let interp = series(SeriesKind::BASELINE, &[("A", 2.0, 0.1)]);
        let ratios = sim.normalize_against(&interp).unwrap();
        assert_eq!(ratios.ratios(), [2.0]);
        assert_eq!(ratios.label(), "Verilator Simulation / Interpreter Simulation");
        let err_bars = sim.stddevs_normalized_by(&interp).unwrap();
        assert_relative_eq!(err_bars[0], 0.1);
    }

    #[test]
    fn test_zero_baseline_names_benchmark() {
        let sim = series(
            SeriesKind::simulation(Backend::Icarus),
            &[("A", 1.0, 0.0), ("B", 1.0, 0.0)],
        );
        let interp = series(SeriesKind::BASELINE, &[("A", 1.0, 0.0), ("B", 0.0, 0.0)]);
        let err = sim.normalize_against(&interp).unwrap_err();
        assert!(err.is_domain());
        assert!(err.to_string().contains("'B'"));
    }

    #[test]
    #[should_panic(expected = "one benchmark order")]
    fn test_misaligned_series_panics() {
        let a = series(SeriesKind::BASELINE, &[("A", 1.0, 0.0)]);
        let b = series(SeriesKind::BASELINE, &[("B", 1.0, 0.0)]);
        let _ = a.normalize_against(&b);
    }

    #[test]
    fn test_stacked_and_worst() {
        let comp = RatioSeries::new("c", vec!["A".into(), "B".into()], vec![1.0, 3.0]);
        let sim = RatioSeries::new("s", vec!["A".into(), "B".into()], vec![4.0, 0.5]);
        let total = comp.stacked_with(&sim, "e2e");
        assert_eq!(total.ratios(), [5.0, 3.5]);
        assert_eq!(total.worst(), Some(("A", 5.0)));
        assert_eq!(RatioSeries::new("x", vec![], vec![]).worst(), None);
    }

    #[test]
    fn test_summarize_reports_label() {
        let ratios = RatioSeries::new(
            "Icarus Simulation / Interpreter Simulation",
            vec!["A".into()],
            vec![0.0],
        );
        let err = ratios.summarize().unwrap_err();
        assert!(err.to_string().contains("Icarus Simulation"));
    }
}
