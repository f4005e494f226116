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

//! Check command - verify the input tables

use super::load_inputs;
use crate::cli::InputArgs;
use crate::error::CliError;
use colored::Colorize;
use simbench_core::{Backend, SeriesKind};
use simbench_report::{split_order, SummaryReport};

/// Load the tables and derive every series and statistic.
///
/// Prints the number of measurements per series. Fails on the first
/// problem: unreadable or malformed tables, a benchmark missing a required
/// measurement, or a ratio that cannot be summarized.
pub fn check(inputs: &InputArgs) -> Result<(), CliError> {
    let tables = match load_inputs(inputs) {
        Ok(tables) => tables,
        Err(e) => {
            println!("{} failed to load tables", "✗".red().bold());
            return Err(e);
        }
    };

    println!("Benchmarks: {}", tables.order().len());
    let mut kinds: Vec<SeriesKind> = Backend::COMPILED
        .iter()
        .flat_map(|&b| [SeriesKind::compilation(b), SeriesKind::simulation(b)])
        .collect();
    kinds.push(SeriesKind::BASELINE);
    kinds.push(SeriesKind::LOWERED);
    for kind in kinds {
        println!("  {:<28} {}", kind.label(), tables.count(kind));
    }

    let config = inputs.report_config();
    let (kept, excluded) = split_order(&tables, &config);
    match SummaryReport::build(&tables, &config) {
        Ok(report) => {
            println!(
                "{} {} headline, {} excluded, {} comparisons",
                "✓".green().bold(),
                kept.len(),
                excluded.len(),
                report.comparisons.len()
            );
            Ok(())
        }
        Err(e) => {
            println!("{} series derivation failed", "✗".red().bold());
            Err(e.into())
        }
    }
}
