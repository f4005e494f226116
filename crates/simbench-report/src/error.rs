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

//! Error types for report generation.

use simbench_core::SimbenchError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while deriving, rendering or exporting reports.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Missing measurements or undefined statistics.
    #[error(transparent)]
    Aggregate(#[from] SimbenchError),

    /// The charting backend failed.
    #[error("Chart rendering failed for '{path}': {message}")]
    Chart {
        /// Output file of the chart.
        path: PathBuf,
        /// Message from the drawing backend.
        message: String,
    },

    /// Writing an output file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Output path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Serializing the report failed.
    #[error("JSON serialization error: {0}")]
    Json(String),

    /// The report configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ReportError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a chart error from any backend error.
    pub fn chart(path: impl Into<PathBuf>, source: impl std::fmt::Display) -> Self {
        Self::Chart {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_is_transparent() {
        let err: ReportError = SimbenchError::domain("baseline is zero").into();
        assert_eq!(err.to_string(), "Domain error: baseline is zero");
    }

    #[test]
    fn test_chart_error_display() {
        let err = ReportError::chart("out/simulation.svg", "font not found");
        assert_eq!(
            err.to_string(),
            "Chart rendering failed for 'out/simulation.svg': font not found"
        );
    }

    #[test]
    fn test_io_error_display() {
        let err = ReportError::io_error(
            "out",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("denied"));
    }
}
