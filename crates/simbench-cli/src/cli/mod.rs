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

//! CLI command definitions and argument parsing.
//!
//! Commands are organized into the following modules:
//!
//! - [`report`]: charts, summary and check
//! - [`utility`]: completion
//!
//! Arguments naming the input tables live in [`args`] and are flattened into
//! every report command.

pub mod args;
mod report;
mod utility;

use clap::{ArgAction, Parser, Subcommand};

pub use args::InputArgs;
pub use report::ReportCommands;
pub use utility::UtilityCommands;

/// SimBench - simulator benchmark visualization
///
/// Compares Icarus Verilog, Verilator and a lowered interpreter against the
/// reference interpreter, from the CSV tables written by the benchmark
/// runner.
///
/// # Examples
///
/// ```bash
/// # Render charts into ./charts
/// simbench charts --exclude Outlier
///
/// # Markdown summary of the Verilator backend only
/// simbench summary --backend verilator --format markdown
///
/// # Verify the input tables
/// simbench check
/// ```
#[derive(Parser)]
#[command(name = "simbench")]
#[command(author, version, about = "SimBench - simulator benchmark visualization", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Report (charts, summary, check)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Report commands - flattened to appear at top level
    #[command(flatten)]
    Report(ReportCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an input table cannot be read or parsed, a required
    /// measurement is missing, a statistic is undefined, or an output file
    /// cannot be written.
    pub fn execute(self) -> Result<(), crate::error::CliError> {
        match self {
            Commands::Report(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
