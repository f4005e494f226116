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

//! Structured error types for the SimBench CLI.
//!
//! All commands return `Result<(), CliError>`; `main` prints the message and
//! exits with a failure status.

use simbench_core::SimbenchError;
use simbench_csv::CsvError;
use simbench_report::ReportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for SimBench CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use simbench_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input file exceeds the maximum allowed size.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// A result table could not be read.
    #[error(transparent)]
    Csv(CsvError),

    /// Statistics could not be derived from the loaded tables.
    #[error(transparent)]
    Aggregate(#[from] SimbenchError),

    /// Chart rendering or report export failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Invalid command-line input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid-input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Malformed tables are reported as [`SimbenchError::Format`]; only I/O
/// failures stay [`CliError::Csv`].
impl From<CsvError> for CliError {
    fn from(err: CsvError) -> Self {
        match err.to_format_error() {
            Some(format) => Self::Aggregate(format),
            None => Self::Csv(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simbench_core::Table;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "statistics/simulation-results.csv",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("simulation-results.csv"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.csv", 200_000_000, 64 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.csv"));
        assert!(msg.contains("200000000 bytes"));
        assert!(msg.contains("64 MB"));
    }

    #[test]
    fn test_csv_format_error_becomes_aggregate() {
        let csv = CsvError::MissingColumn {
            table: Table::Simulation,
            column: "stddev".to_string(),
        };
        let err: CliError = csv.into();
        assert!(matches!(err, CliError::Aggregate(SimbenchError::Format { line: 1, .. })));
        assert_eq!(
            err.to_string(),
            "Format error in simulation-results at line 1: missing required column 'stddev'"
        );
    }

    #[test]
    fn test_csv_io_error_is_transparent() {
        let csv = CsvError::io_error(
            "nope.csv",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let err: CliError = csv.clone().into();
        assert!(matches!(err, CliError::Csv(_)));
        assert_eq!(err.to_string(), csv.to_string());
    }

    #[test]
    fn test_invalid_input_display() {
        let err = CliError::invalid_input("delimiter must be ASCII");
        assert_eq!(err.to_string(), "Invalid input: delimiter must be ASCII");
    }
}
