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

//! Report commands: charts, summary and check.

use super::args::InputArgs;
use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use simbench_report::{ChartFormat, ExportFormat, DEFAULT_CHART_SIZE, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

/// Report commands.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Render slowdown charts
    ///
    /// Writes end-to-end, simulation, lowered-interpreter and absolute-time
    /// charts into the output directory.
    Charts {
        #[command(flatten)]
        inputs: InputArgs,

        /// Directory to write charts to
        #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Image format (svg, png)
        #[arg(short, long, default_value = "svg", value_parser = parse_chart_format)]
        format: ChartFormat,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_SIZE.0)]
        width: u32,

        /// Chart height in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_SIZE.1)]
        height: u32,
    },

    /// Print geometric-mean and worst-case slowdowns
    Summary {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format (text, markdown, json)
        #[arg(short, long, default_value = "text", value_parser = parse_export_format)]
        format: ExportFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Load the tables and verify every series can be derived
    Check {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

impl ReportCommands {
    /// Execute the report command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ReportCommands::Charts {
                inputs,
                output_dir,
                format,
                width,
                height,
            } => {
                let config = inputs
                    .report_config()
                    .with_output_dir(output_dir)
                    .with_chart_format(format)
                    .with_chart_size(width, height);
                commands::charts(&inputs, &config)
            }
            ReportCommands::Summary {
                inputs,
                format,
                output,
            } => commands::summary(&inputs, format, output.as_deref()),
            ReportCommands::Check { inputs } => commands::check(&inputs),
        }
    }
}

fn parse_chart_format(value: &str) -> Result<ChartFormat, String> {
    ChartFormat::parse(value).ok_or_else(|| format!("unknown chart format '{}'", value))
}

fn parse_export_format(value: &str) -> Result<ExportFormat, String> {
    ExportFormat::parse(value).ok_or_else(|| format!("unknown summary format '{}'", value))
}
