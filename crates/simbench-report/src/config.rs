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

//! Report configuration.
//!
//! Provides the settings shared by chart rendering and summary export:
//! output location and format, chart size, display-name prefixes, excluded
//! benchmarks and the compiled backends to compare.

use crate::error::{ReportError, Result};
use simbench_core::{Backend, LINEAR_ALGEBRA_PREFIX};
use std::fmt;
use std::path::PathBuf;

/// Default chart size in pixels (width, height).
pub const DEFAULT_CHART_SIZE: (u32, u32) = (1000, 800);

/// Default directory for chart files.
pub const DEFAULT_OUTPUT_DIR: &str = "charts";

/// Image format of rendered charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartFormat {
    /// Scalable vector graphics.
    #[default]
    Svg,
    /// Portable network graphics.
    Png,
}

impl ChartFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Svg => "svg",
            ChartFormat::Png => "png",
        }
    }

    /// Parses a format name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "svg" => Some(ChartFormat::Svg),
            "png" => Some(ChartFormat::Png),
            _ => None,
        }
    }
}

impl fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Export format options for summary reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Plain text for the terminal.
    Text,
    /// Markdown tables for documentation.
    Markdown,
    /// JSON for machine consumption.
    Json,
}

impl ExportFormat {
    /// Parses a format name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "console" => Some(ExportFormat::Text),
            "markdown" | "md" => Some(ExportFormat::Markdown),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// Settings for deriving and rendering reports.
///
/// # Example
///
/// ```
/// use simbench_core::Backend;
/// use simbench_report::{ChartFormat, ReportConfig};
///
/// let config = ReportConfig::default()
///     .with_output_dir("figures")
///     .with_chart_format(ChartFormat::Png)
///     .with_excluded("Outlier")
///     .with_backends(vec![Backend::Verilator]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Report title.
    pub title: String,
    /// Directory chart files are written to.
    pub output_dir: PathBuf,
    /// Image format of charts.
    pub chart_format: ChartFormat,
    /// Chart size in pixels (width, height).
    pub chart_size: (u32, u32),
    /// Prefixes stripped from benchmark names on charts and in reports.
    pub strip_prefixes: Vec<String>,
    /// Benchmarks left out of headline charts and statistics.
    pub excluded: Vec<String>,
    /// Compiled backends compared against the interpreter.
    pub backends: Vec<Backend>,
    /// Whether to include the lowered interpreter when its data is loaded.
    pub include_lowered: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Simulator slowdown relative to the interpreter".to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            chart_format: ChartFormat::Svg,
            chart_size: DEFAULT_CHART_SIZE,
            strip_prefixes: vec![LINEAR_ALGEBRA_PREFIX.to_string()],
            excluded: Vec::new(),
            backends: Backend::COMPILED.to_vec(),
            include_lowered: true,
        }
    }
}

impl ReportConfig {
    /// Sets the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the chart format.
    pub fn with_chart_format(mut self, format: ChartFormat) -> Self {
        self.chart_format = format;
        self
    }

    /// Sets the chart size.
    pub fn with_chart_size(mut self, width: u32, height: u32) -> Self {
        self.chart_size = (width, height);
        self
    }

    /// Adds a display-name prefix to strip.
    pub fn with_strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !self.strip_prefixes.contains(&prefix) {
            self.strip_prefixes.push(prefix);
        }
        self
    }

    /// Replaces all display-name prefixes.
    pub fn with_strip_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.strip_prefixes = prefixes;
        self
    }

    /// Excludes a benchmark from headline charts.
    pub fn with_excluded(mut self, benchmark: impl Into<String>) -> Self {
        let benchmark = benchmark.into();
        if !self.excluded.contains(&benchmark) {
            self.excluded.push(benchmark);
        }
        self
    }

    /// Sets the compiled backends to compare.
    pub fn with_backends(mut self, backends: Vec<Backend>) -> Self {
        self.backends = backends;
        self
    }

    /// Enables or disables the lowered interpreter.
    pub fn with_lowered(mut self, include: bool) -> Self {
        self.include_lowered = include;
        self
    }

    /// Checks that the configuration can produce a report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidConfig`] for an empty or non-compiled
    /// backend selection, a duplicate backend, or a zero chart dimension.
    pub fn validate(&self) -> Result<()> {
        if self.backends.is_empty() {
            return Err(ReportError::InvalidConfig(
                "at least one compiled backend must be selected".to_string(),
            ));
        }
        for (i, backend) in self.backends.iter().enumerate() {
            if !backend.is_compiled() {
                return Err(ReportError::InvalidConfig(format!(
                    "'{}' has no compilation stage and cannot be compared",
                    backend
                )));
            }
            if self.backends[..i].contains(backend) {
                return Err(ReportError::InvalidConfig(format!(
                    "backend '{}' selected twice",
                    backend
                )));
            }
        }
        if self.chart_size.0 == 0 || self.chart_size.1 == 0 {
            return Err(ReportError::InvalidConfig(format!(
                "chart size {}x{} has a zero dimension",
                self.chart_size.0, self.chart_size.1
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.backends, vec![Backend::Icarus, Backend::Verilator]);
        assert_eq!(config.strip_prefixes, vec!["Linear Algebra ".to_string()]);
        assert_eq!(config.chart_format, ChartFormat::Svg);
        assert!(config.include_lowered);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_excluded_deduplicated() {
        let config = ReportConfig::default()
            .with_excluded("Outlier")
            .with_excluded("Outlier");
        assert_eq!(config.excluded, vec!["Outlier".to_string()]);
    }

    #[test]
    fn test_invalid_backends() {
        let config = ReportConfig::default().with_backends(vec![]);
        assert!(config.validate().is_err());

        let config = ReportConfig::default().with_backends(vec![Backend::Interpreter]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("no compilation stage"));

        let config =
            ReportConfig::default().with_backends(vec![Backend::Icarus, Backend::Icarus]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_chart_size() {
        let config = ReportConfig::default().with_chart_size(0, 600);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(ChartFormat::parse("PNG"), Some(ChartFormat::Png));
        assert_eq!(ChartFormat::parse("pdf"), None);
        assert_eq!(ExportFormat::parse("md"), Some(ExportFormat::Markdown));
        assert_eq!(ExportFormat::parse("json"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::parse("html"), None);
    }
}
