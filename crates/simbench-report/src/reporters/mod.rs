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

//! Summary reporters for various output formats.
//!
//! # Modules
//!
//! - `console`: plain-text output for the terminal
//! - `json`: JSON export
//! - `markdown`: Markdown export

pub mod console;
pub mod json;
pub mod markdown;

pub use console::{format_report, print_report, print_summary};
pub use json::{export_json, render_json};
pub use markdown::{export_markdown, render_markdown};

use crate::config::ExportFormat;
use crate::error::Result;
use crate::summary::SummaryReport;

/// Renders the report in `format`.
pub fn render(report: &SummaryReport, format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Text => format_report(report),
        ExportFormat::Markdown => render_markdown(report),
        ExportFormat::Json => render_json(report)?,
    })
}
