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

//! Console reporter for slowdown summaries.

use crate::summary::{Comparison, SummaryReport};
use std::fmt::Write;

/// Formats the full report as plain text.
pub fn format_report(report: &SummaryReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(80);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "SLOWDOWN SUMMARY: {}", report.title);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Generated: {}", report.timestamp);
    let _ = writeln!(out, "Baseline: {}", report.baseline);
    let _ = writeln!(out, "Benchmarks: {}", report.benchmark_count());

    if !report.notes.is_empty() {
        let _ = writeln!(out, "\nNotes:");
        for note in &report.notes {
            let _ = writeln!(out, "  - {}", note);
        }
    }

    for comparison in &report.comparisons {
        write_comparison(&mut out, comparison);
    }

    if let Some(excluded) = &report.excluded {
        let _ = writeln!(out, "\n{}", rule);
        let _ = writeln!(out, "EXCLUDED: {}", excluded.benchmarks.join(", "));
        let _ = writeln!(out, "{}", rule);
        for comparison in &excluded.comparisons {
            write_comparison(&mut out, comparison);
        }
    }

    let _ = writeln!(out, "{}", rule);
    out
}

fn write_comparison(out: &mut String, comparison: &Comparison) {
    let _ = writeln!(out, "\n{}", "-".repeat(80));
    let _ = writeln!(out, "{}", comparison.label.to_uppercase());
    let _ = writeln!(out, "{}", "-".repeat(80));
    let _ = writeln!(out, "Geometric mean: {:.3}x", comparison.geometric_mean);
    let _ = writeln!(
        out,
        "Worst case:     {:.3}x ({})",
        comparison.worst.ratio, comparison.worst.display_name
    );
    for entry in &comparison.ratios {
        let _ = writeln!(out, "  {:<40} {:>10.3}x", entry.display_name, entry.ratio);
    }
}

/// Prints the full report to stdout.
pub fn print_report(report: &SummaryReport) {
    print!("{}", format_report(report));
}

/// Prints only the geometric means and worst cases.
pub fn print_summary(report: &SummaryReport) {
    println!("\n{}", "=".repeat(60));
    println!("SUMMARY: {}", report.title);
    println!("{}", "=".repeat(60));
    for comparison in &report.comparisons {
        println!(
            "{:<36} geomean {:>9.3}x  worst {:>9.3}x",
            comparison.label, comparison.geometric_mean, comparison.worst.ratio
        );
    }
    println!("{}\n", "=".repeat(60));
}
