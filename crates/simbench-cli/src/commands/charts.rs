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

//! Charts command - render slowdown charts

use super::load_inputs;
use crate::cli::InputArgs;
use crate::error::CliError;
use colored::Colorize;
use simbench_report::{render_charts, split_order, ReportConfig, ReportData};

/// Render every chart for the headline benchmarks.
///
/// Excluded benchmarks are left out of all charts.
///
/// # Errors
///
/// Returns `Err` if the inputs cannot be loaded, a required measurement is
/// missing, or a chart cannot be written.
pub fn charts(inputs: &InputArgs, config: &ReportConfig) -> Result<(), CliError> {
    let tables = load_inputs(inputs)?;
    let (kept, _) = split_order(&tables, config);
    let data = ReportData::from_tables(&tables, &kept, config)?;

    for path in render_charts(&data, config)? {
        println!("{} {}", "✓".green().bold(), path.display());
    }
    Ok(())
}
