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

//! SimBench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **charts**: render end-to-end, simulation, lowered-interpreter and
//!   absolute-time charts (SVG or PNG)
//! - **summary**: geometric-mean and worst-case slowdowns as text,
//!   Markdown or JSON
//! - **check**: load the tables and verify every series can be derived
//! - **completion**: generate shell completion scripts
//!
//! Every report command reads the three result tables, by default from
//! `statistics/`. See [`cli::InputArgs`].
//!
//! # Security
//!
//! Input files are size-checked before reading (configurable via
//! `SIMBENCH_MAX_FILE_SIZE`, default 64 MB).
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only report
//! output. Use `-v`/`-vv` or `RUST_LOG` to see more.

pub mod cli;
pub mod commands;
pub mod error;

use tracing_subscriber::EnvFilter;

/// Log filter for a `-v` count, used when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "simbench=warn",
        1 => "simbench=info",
        _ => "simbench=debug",
    }
}

/// Installs the stderr log subscriber.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
