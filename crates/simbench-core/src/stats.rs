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

//! Slowdown ratios and their summary statistics.

use crate::error::{Result, SimbenchError};
use serde::{Deserialize, Serialize};

/// Elementwise ratio `series[i] / baseline[i]`.
///
/// Ratios are not rounded and may be below 1.0 (faster than the baseline).
///
/// # Panics
///
/// Panics if the two slices differ in length. Series derived from the same
/// [`BenchmarkOrder`](crate::BenchmarkOrder) always have equal lengths.
///
/// # Errors
///
/// Returns [`SimbenchError::Domain`] if a baseline value is zero, negative or
/// not a number.
///
/// ```
/// use simbench_core::normalize;
///
/// assert_eq!(normalize(&[4.0, 3.0], &[2.0, 6.0]).unwrap(), vec![2.0, 0.5]);
/// ```
pub fn normalize(series: &[f64], baseline: &[f64]) -> Result<Vec<f64>> {
    assert_eq!(
        series.len(),
        baseline.len(),
        "normalize: series and baseline must be index-aligned"
    );

    series
        .iter()
        .zip(baseline)
        .enumerate()
        .map(|(index, (&value, &base))| {
            if base > 0.0 {
                Ok(value / base)
            } else {
                Err(SimbenchError::domain(format!(
                    "baseline value {} at position {} is not positive",
                    base, index
                )))
            }
        })
        .collect()
}

/// Aggregate statistics of a ratio series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Geometric mean of all ratios.
    pub geometric_mean: f64,
    /// Largest ratio (worst-case slowdown).
    pub max: f64,
    /// Position of the first occurrence of `max`.
    pub max_index: usize,
    /// Number of ratios summarized.
    pub count: usize,
}

/// Geometric mean and maximum of a positive ratio series.
///
/// # Errors
///
/// Returns [`SimbenchError::Domain`] if the series is empty or holds a value
/// that is not a positive finite number.
///
/// ```
/// use simbench_core::summarize;
///
/// let summary = summarize(&[2.0, 8.0]).unwrap();
/// assert!((summary.geometric_mean - 4.0).abs() < 1e-12);
/// assert_eq!(summary.max, 8.0);
/// ```
pub fn summarize(ratios: &[f64]) -> Result<Summary> {
    let geometric_mean = geometric_mean(ratios)?;

    let mut max_index = 0;
    for (index, &ratio) in ratios.iter().enumerate() {
        if ratio > ratios[max_index] {
            max_index = index;
        }
    }

    Ok(Summary {
        geometric_mean,
        max: ratios[max_index],
        max_index,
        count: ratios.len(),
    })
}

/// Geometric mean of positive values, computed in log space.
///
/// # Errors
///
/// Same conditions as [`summarize`].
pub fn geometric_mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(SimbenchError::domain(
            "geometric mean of an empty series is undefined",
        ));
    }

    let mut log_sum = 0.0;
    for (index, &value) in values.iter().enumerate() {
        if !(value > 0.0 && value.is_finite()) {
            return Err(SimbenchError::domain(format!(
                "geometric mean undefined for value {} at position {}",
                value, index
            )));
        }
        log_sum += value.ln();
    }

    Ok((log_sum / values.len() as f64).exp())
}
