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

//! JSON export for slowdown summaries.

use crate::summary::SummaryReport;
use std::fs;
use std::io;
use std::path::Path;

/// Renders the report as pretty-printed JSON.
pub fn render_json(report: &SummaryReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Exports the report as JSON.
///
/// # Arguments
///
/// * `report` - The summary report to export
/// * `path` - Output file path
pub fn export_json(report: &SummaryReport, path: &Path) -> io::Result<()> {
    let json = render_json(report).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_json() {
        let mut report = SummaryReport::new("Test");
        report.add_note("note");
        let temp = NamedTempFile::new().unwrap();

        export_json(&report, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        let parsed: SummaryReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_render_json_fields() {
        let report = SummaryReport::new("Test");
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Test");
        assert_eq!(value["baseline"], "Interpreter Simulation");
        assert!(value["excluded"].is_null());
        assert!(value["comparisons"].as_array().unwrap().is_empty());
    }
}
