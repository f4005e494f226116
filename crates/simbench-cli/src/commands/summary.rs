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

//! Summary command - geometric-mean and worst-case slowdowns

use super::{load_inputs, write_output};
use crate::cli::InputArgs;
use crate::error::CliError;
use simbench_report::reporters::render;
use simbench_report::{ExportFormat, SummaryReport};
use std::path::Path;
use tracing::info;

/// Build the summary report and write it to `output` or stdout.
///
/// # Errors
///
/// Returns `Err` if the inputs cannot be loaded, a statistic is undefined,
/// or the output cannot be written.
pub fn summary(
    inputs: &InputArgs,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let tables = load_inputs(inputs)?;
    let report = SummaryReport::build(&tables, &inputs.report_config())?;

    let mut content = render(&report, format)?;
    if format == ExportFormat::Json {
        content.push('\n');
    }
    write_output(&content, output)?;

    if let Some(path) = output {
        info!("Wrote {}", path.display());
    }
    Ok(())
}
