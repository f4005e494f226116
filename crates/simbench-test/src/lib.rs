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

//! Shared test fixtures for SimBench crates.
//!
//! Provides result tables in the exact CSV layout produced by the benchmark
//! runner, so loader, report and CLI tests all exercise the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use simbench_test::fixtures;
//!
//! let inputs = fixtures::suite();
//! assert!(inputs.simulation.starts_with("simulation,stage,mean,stddev"));
//!
//! let dir = std::env::temp_dir().join("simbench-doc-fixture");
//! let paths = inputs.write_to(&dir).unwrap();
//! assert!(paths.compilation.exists());
//! ```

use approx::relative_eq;

/// Canonical test fixtures.
pub mod fixtures;

pub use fixtures::{suite, verilator_only, InputPaths, InputSet};

/// Relative tolerance for comparing ratios computed through `f64` division.
pub const RATIO_EPSILON: f64 = 1e-9;

/// Asserts that two ratio slices agree within [`RATIO_EPSILON`].
///
/// # Panics
///
/// Panics with both slices in the message if they differ.
pub fn assert_ratios_eq(actual: &[f64], expected: &[f64]) {
    let close = actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(a, e)| relative_eq!(*a, *e, max_relative = RATIO_EPSILON));
    assert!(close, "ratios differ: actual {:?}, expected {:?}", actual, expected);
}
