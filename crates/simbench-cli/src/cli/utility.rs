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

//! Utility commands for the SimBench CLI.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use clap_complete::Shell;

/// Commands that do not read result tables.
#[derive(Subcommand)]
pub enum UtilityCommands {
    /// Print a shell completion script for simbench
    Completion {
        /// Target shell
        #[arg(value_enum, ignore_case = true, value_name = "SHELL")]
        shell: Shell,

        /// Show how to install the script instead of printing it
        #[arg(short, long)]
        install: bool,
    },
}

impl UtilityCommands {
    /// Execute the utility command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            UtilityCommands::Completion { shell, install: true } => {
                print!("{}", commands::installation_instructions(shell));
                Ok(())
            }
            UtilityCommands::Completion { shell, install: false } => commands::completion(shell),
        }
    }
}
