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

//! CLI command implementations

mod charts;
mod check;
mod completion;
mod summary;

pub use charts::charts;
pub use check::check;
pub use completion::{completion, installation_instructions, write_completion};
pub use summary::summary;

use crate::cli::InputArgs;
use crate::error::CliError;
use simbench_core::ResultTables;
use simbench_csv::load_files;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Default maximum input file size (64 MB).
/// Can be overridden via the SIMBENCH_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "SIMBENCH_MAX_FILE_SIZE";

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Checks that `path` exists and is within the size limit.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the metadata cannot be read and
/// [`CliError::FileTooLarge`] above the limit.
pub fn check_file_size(path: &Path) -> Result<u64, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    let max_file_size = get_max_file_size();

    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }
    Ok(metadata.len())
}

/// Loads the tables named by `inputs`, after size checks.
pub fn load_inputs(inputs: &InputArgs) -> Result<ResultTables, CliError> {
    let files = inputs.files();
    let config = inputs.csv_config()?;

    check_file_size(&files.compilation)?;
    check_file_size(&files.simulation)?;
    if let Some(lowered) = &files.lowered {
        check_file_size(lowered)?;
    }

    Ok(load_files(&files, &config)?)
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_check_file_size() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"compilation,stage,mean,median,stddev\n").unwrap();
        assert_eq!(check_file_size(file.path()).unwrap(), 37);
    }

    #[test]
    fn test_check_missing_file() {
        let err = check_file_size(Path::new("/nonexistent/compilation-results.csv")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_write_output_to_file() {
        let file = NamedTempFile::new().unwrap();
        write_output("hello", Some(file.path())).unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "hello");
    }
}
