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

//! Markdown export for slowdown summaries.

use crate::summary::{Comparison, SummaryReport};
use std::fs;
use std::io;
use std::path::Path;

/// Renders the report as Markdown.
///
/// Headline results form one table with a row per benchmark and a column
/// per comparison, followed by geometric-mean and worst-case rows.
pub fn render_markdown(report: &SummaryReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", report.title));
    md.push_str(&format!("**Generated:** {}\n\n", report.timestamp));
    md.push_str(&format!(
        "All values are ratios to {} time.\n\n",
        report.baseline.to_lowercase()
    ));

    if !report.notes.is_empty() {
        md.push_str("## Notes\n\n");
        for note in &report.notes {
            md.push_str(&format!("- {}\n", note));
        }
        md.push('\n');
    }

    md.push_str("## Slowdown\n\n");
    push_table(&mut md, &report.comparisons);

    if let Some(excluded) = &report.excluded {
        md.push_str("\n## Excluded benchmarks\n\n");
        md.push_str(&format!(
            "Not included above: {}\n\n",
            excluded.benchmarks.join(", ")
        ));
        push_table(&mut md, &excluded.comparisons);
    }

    md
}

fn push_table(md: &mut String, comparisons: &[Comparison]) {
    let Some(first) = comparisons.first() else {
        return;
    };

    md.push_str("| Benchmark |");
    for comparison in comparisons {
        md.push_str(&format!(" {} |", comparison.label));
    }
    md.push_str("\n|-----------|");
    for _ in comparisons {
        md.push_str("---:|");
    }
    md.push('\n');

    for (row, entry) in first.ratios.iter().enumerate() {
        md.push_str(&format!("| {} |", entry.display_name));
        for comparison in comparisons {
            md.push_str(&format!(" {:.3} |", comparison.ratios[row].ratio));
        }
        md.push('\n');
    }

    md.push_str("| **Geometric mean** |");
    for comparison in comparisons {
        md.push_str(&format!(" **{:.3}** |", comparison.geometric_mean));
    }
    md.push_str("\n| **Worst case** |");
    for comparison in comparisons {
        md.push_str(&format!(
            " {:.3} ({}) |",
            comparison.worst.ratio, comparison.worst.display_name
        ));
    }
    md.push('\n');
}

/// Exports the report as Markdown.
///
/// # Arguments
///
/// * `report` - The summary report to export
/// * `path` - Output file path
pub fn export_markdown(report: &SummaryReport, path: &Path) -> io::Result<()> {
    fs::write(path, render_markdown(report))
}
