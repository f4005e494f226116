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

//! Arguments shared by every command that reads result tables.

use crate::error::CliError;
use clap::Args;
use simbench_core::Backend;
use simbench_csv::{
    FromCsvConfig, InputFiles, DEFAULT_COMPILATION_PATH, DEFAULT_LOWERED_PATH,
    DEFAULT_SIMULATION_PATH,
};
use simbench_report::ReportConfig;
use std::path::PathBuf;
use tracing::debug;

/// Input tables and benchmark selection.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Compilation-results table
    #[arg(long, value_name = "FILE", default_value = DEFAULT_COMPILATION_PATH)]
    pub compilation: PathBuf,

    /// Simulation-results table
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SIMULATION_PATH)]
    pub simulation: PathBuf,

    /// Fully-lowered simulation table [default: statistics/simulation-fully-lowered-results.csv, if present]
    #[arg(long, value_name = "FILE", conflicts_with = "no_lowered")]
    pub lowered: Option<PathBuf>,

    /// Do not read the fully-lowered simulation table
    #[arg(long)]
    pub no_lowered: bool,

    /// Leave a benchmark out of headline charts and statistics (repeatable)
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Extra benchmark-name prefix to strip for display (repeatable)
    #[arg(long, value_name = "PREFIX")]
    pub strip_prefix: Vec<String>,

    /// Compiled backend to compare: icarus or verilator (repeatable) [default: both]
    #[arg(long = "backend", value_name = "BACKEND", value_parser = parse_backend)]
    pub backends: Vec<Backend>,

    /// Field delimiter of the input tables
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

impl InputArgs {
    /// Files to load.
    ///
    /// Without `--lowered`, the default lowered table is read only if it
    /// exists.
    pub fn files(&self) -> InputFiles {
        let lowered = if self.no_lowered {
            None
        } else if let Some(path) = &self.lowered {
            Some(path.clone())
        } else {
            let default = PathBuf::from(DEFAULT_LOWERED_PATH);
            if default.exists() {
                Some(default)
            } else {
                debug!("{} not found, skipping lowered table", default.display());
                None
            }
        };

        InputFiles {
            compilation: self.compilation.clone(),
            simulation: self.simulation.clone(),
            lowered,
        }
    }

    /// CSV reader settings.
    pub fn csv_config(&self) -> Result<FromCsvConfig, CliError> {
        if !self.delimiter.is_ascii() {
            return Err(CliError::invalid_input(format!(
                "delimiter '{}' must be a single ASCII character",
                self.delimiter
            )));
        }
        Ok(FromCsvConfig {
            delimiter: self.delimiter as u8,
            ..FromCsvConfig::default()
        })
    }

    /// Report settings for the selection made by these arguments.
    pub fn report_config(&self) -> ReportConfig {
        let mut config = ReportConfig::default().with_lowered(!self.no_lowered);
        for name in &self.exclude {
            config = config.with_excluded(name.as_str());
        }
        for prefix in &self.strip_prefix {
            config = config.with_strip_prefix(prefix.as_str());
        }
        if !self.backends.is_empty() {
            config = config.with_backends(self.backends.clone());
        }
        config
    }
}

fn parse_backend(value: &str) -> Result<Backend, String> {
    match Backend::parse(value) {
        Some(backend) if backend.is_compiled() => Ok(backend),
        Some(backend) => Err(format!("'{}' has no compilation stage", backend)),
        None => Err(format!(
            "unknown backend '{}' (expected icarus or verilator)",
            value
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        inputs: InputArgs,
    }

    fn parse(args: &[&str]) -> InputArgs {
        let mut argv = vec!["simbench"];
        argv.extend_from_slice(args);
        TestCli::parse_from(argv).inputs
    }

    #[test]
    fn test_defaults() {
        let inputs = parse(&[]);
        assert_eq!(inputs.compilation, PathBuf::from(DEFAULT_COMPILATION_PATH));
        assert_eq!(inputs.simulation, PathBuf::from(DEFAULT_SIMULATION_PATH));
        assert!(inputs.backends.is_empty());

        let config = inputs.report_config();
        assert_eq!(config.backends, Backend::COMPILED.to_vec());
        assert_eq!(inputs.csv_config().unwrap(), FromCsvConfig::default());
    }

    #[test]
    fn test_selection() {
        let inputs = parse(&[
            "--exclude",
            "Outlier",
            "--strip-prefix",
            "Crypto ",
            "--backend",
            "verilator",
            "--no-lowered",
        ]);
        let config = inputs.report_config();
        assert_eq!(config.excluded, vec!["Outlier".to_string()]);
        assert_eq!(
            config.strip_prefixes,
            vec!["Linear Algebra ".to_string(), "Crypto ".to_string()]
        );
        assert_eq!(config.backends, vec![Backend::Verilator]);
        assert!(!config.include_lowered);
        assert_eq!(inputs.files().lowered, None);
    }

    #[test]
    fn test_explicit_lowered() {
        let inputs = parse(&["--lowered", "other.csv"]);
        assert_eq!(inputs.files().lowered, Some(PathBuf::from("other.csv")));
    }

    #[test]
    fn test_interpreter_backend_rejected() {
        assert!(parse_backend("interpreter").is_err());
        assert!(parse_backend("bogus").is_err());
        assert_eq!(parse_backend("icarus-verilog"), Ok(Backend::Icarus));
    }

    #[test]
    fn test_delimiter() {
        let inputs = parse(&["--delimiter", ";"]);
        assert_eq!(inputs.csv_config().unwrap().delimiter, b';');

        let inputs = parse(&["--delimiter", "é"]);
        assert!(inputs.csv_config().is_err());
    }
}
