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

//! Error types for loading result tables.

use simbench_core::{SimbenchError, Table};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading result tables.
///
/// All variants except [`CsvError::Io`] describe malformed input and map to
/// [`SimbenchError::Format`] through [`CsvError::to_format_error`].
///
/// # Examples
///
/// ```
/// use simbench_csv::CsvError;
/// use simbench_core::Table;
///
/// let err = CsvError::TypeMismatch {
///     table: Table::Simulation,
///     line: 3,
///     column: "mean".to_string(),
///     value: "N/A".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "simulation-results line 3: column 'mean' expected a number, got 'N/A'"
/// );
/// assert!(err.is_format());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsvError {
    /// The header lacks a required column.
    #[error("{table}: missing required column '{column}'")]
    MissingColumn {
        /// Table being read.
        table: Table,
        /// Column name.
        column: String,
    },

    /// A numeric field does not parse as a number.
    #[error("{table} line {line}: column '{column}' expected a number, got '{value}'")]
    TypeMismatch {
        /// Table being read.
        table: Table,
        /// Line of the record (1-based).
        line: u64,
        /// Column name.
        column: String,
        /// Offending text.
        value: String,
    },

    /// A numeric field parsed but is not a valid duration.
    #[error("{table} line {line}: column '{column}' has invalid value {value}: {reason}")]
    InvalidValue {
        /// Table being read.
        table: Table,
        /// Line of the record (1-based).
        line: u64,
        /// Column name.
        column: String,
        /// Parsed value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// The benchmark identifier is empty.
    #[error("{table} line {line}: empty benchmark name")]
    EmptyKey {
        /// Table being read.
        table: Table,
        /// Line of the record (1-based).
        line: u64,
    },

    /// Malformed CSV structure, e.g. a row with the wrong number of fields.
    #[error("{table} line {line}: {message}")]
    ParseError {
        /// Table being read.
        table: Table,
        /// Line where the error was detected (1-based).
        line: u64,
        /// Message from the CSV reader.
        message: String,
    },

    /// More records than the configured maximum.
    #[error("{table}: row count exceeds security limit of {limit}")]
    SecurityLimit {
        /// Table being read.
        table: Table,
        /// Maximum allowed rows.
        limit: usize,
    },

    /// The input file could not be opened or read.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, CsvError>;

impl CsvError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Wraps a CSV reader error, keeping its line if known.
    pub(crate) fn from_csv(
        table: Table,
        source: &Path,
        fallback_line: u64,
        err: csv::Error,
    ) -> Self {
        let line = err.position().map_or(fallback_line, |pos| pos.line());
        match err.kind() {
            csv::ErrorKind::Io(io) => Self::Io {
                path: source.to_path_buf(),
                message: io.to_string(),
            },
            _ => Self::ParseError {
                table,
                line,
                message: err.to_string(),
            },
        }
    }

    /// Table the error refers to, if any.
    pub fn table(&self) -> Option<Table> {
        match self {
            CsvError::MissingColumn { table, .. }
            | CsvError::TypeMismatch { table, .. }
            | CsvError::InvalidValue { table, .. }
            | CsvError::EmptyKey { table, .. }
            | CsvError::ParseError { table, .. }
            | CsvError::SecurityLimit { table, .. } => Some(*table),
            CsvError::Io { .. } => None,
        }
    }

    /// Whether the error describes malformed input rather than I/O failure.
    pub fn is_format(&self) -> bool {
        !matches!(self, CsvError::Io { .. })
    }

    /// The equivalent [`SimbenchError::Format`], for format-class errors.
    pub fn to_format_error(&self) -> Option<SimbenchError> {
        let line = match self {
            CsvError::TypeMismatch { line, .. }
            | CsvError::InvalidValue { line, .. }
            | CsvError::EmptyKey { line, .. }
            | CsvError::ParseError { line, .. } => *line,
            CsvError::MissingColumn { .. } | CsvError::SecurityLimit { .. } => 1,
            CsvError::Io { .. } => return None,
        };
        let table = self.table()?;
        Some(SimbenchError::format(table, line, self.detail()))
    }

    // Message without the table and line prefix.
    fn detail(&self) -> String {
        match self {
            CsvError::MissingColumn { column, .. } => {
                format!("missing required column '{}'", column)
            }
            CsvError::TypeMismatch { column, value, .. } => {
                format!("column '{}' expected a number, got '{}'", column, value)
            }
            CsvError::InvalidValue {
                column,
                value,
                reason,
                ..
            } => format!("column '{}' has invalid value {}: {}", column, value, reason),
            CsvError::EmptyKey { .. } => "empty benchmark name".to_string(),
            CsvError::ParseError { message, .. } => message.clone(),
            CsvError::SecurityLimit { limit, .. } => {
                format!("row count exceeds security limit of {}", limit)
            }
            CsvError::Io { .. } => self.to_string(),
        }
    }
}
