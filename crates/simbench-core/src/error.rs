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

//! Error types for benchmark result aggregation.
//!
//! Every failure is fatal for a run. The three kinds mirror the three ways a
//! report can go wrong: a malformed input row, a benchmark that is missing
//! from a table it is required in, and a statistic that is undefined for the
//! values it was given.

use crate::model::Table;
use thiserror::Error;

/// Result type for aggregation operations.
pub type Result<T> = std::result::Result<T, SimbenchError>;

/// Errors raised while loading, deriving or summarizing benchmark results.
///
/// # Examples
///
/// ```
/// use simbench_core::{SimbenchError, Table};
///
/// let err = SimbenchError::MissingKey {
///     benchmark: "NTT 64".to_string(),
///     entry: "interpreter simulation".to_string(),
///     table: Table::Simulation,
/// };
/// assert_eq!(
///     err.to_string(),
///     "Benchmark 'NTT 64' has no interpreter simulation entry in simulation-results"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimbenchError {
    /// A row has a missing or malformed required field.
    #[error("Format error in {table} at line {line}: {message}")]
    Format {
        /// Table the row came from.
        table: Table,
        /// Line number of the offending record (1-based, header is line 1).
        line: u64,
        /// What was wrong with the row.
        message: String,
    },

    /// A benchmark required by the ordering has no entry in a table.
    #[error("Benchmark '{benchmark}' has no {entry} entry in {table}")]
    MissingKey {
        /// Benchmark name that was looked up.
        benchmark: String,
        /// Which measurement was requested, e.g. "verilog compilation".
        entry: String,
        /// Table the measurement should have come from.
        table: Table,
    },

    /// A statistic is undefined for its input.
    #[error("Domain error: {message}")]
    Domain {
        /// Description including the offending value.
        message: String,
    },
}

impl SimbenchError {
    /// Create a format error for a record in `table`.
    pub fn format(table: Table, line: u64, message: impl Into<String>) -> Self {
        Self::Format {
            table,
            line,
            message: message.into(),
        }
    }

    /// Create a domain error.
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }

    /// Returns `true` for [`SimbenchError::MissingKey`].
    pub fn is_missing_key(&self) -> bool {
        matches!(self, Self::MissingKey { .. })
    }

    /// Returns `true` for [`SimbenchError::Format`].
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Returns `true` for [`SimbenchError::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = SimbenchError::format(
            Table::Compilation,
            4,
            "column 'mean': expected number, got 'N/A'",
        );
        assert_eq!(
            err.to_string(),
            "Format error in compilation-results at line 4: column 'mean': expected number, got 'N/A'"
        );
        assert!(err.is_format());
    }

    #[test]
    fn test_missing_key_display() {
        let err = SimbenchError::MissingKey {
            benchmark: "Linear Algebra Matmul".to_string(),
            entry: "icarus-verilog compilation".to_string(),
            table: Table::Compilation,
        };
        let msg = err.to_string();
        assert!(msg.contains("Linear Algebra Matmul"));
        assert!(msg.contains("compilation-results"));
        assert!(err.is_missing_key());
    }

    #[test]
    fn test_domain_error_display() {
        let err = SimbenchError::domain("geometric mean of non-positive value -1");
        assert_eq!(
            err.to_string(),
            "Domain error: geometric mean of non-positive value -1"
        );
        assert!(err.is_domain());
        assert!(!err.is_format());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SimbenchError>();
    }
}
