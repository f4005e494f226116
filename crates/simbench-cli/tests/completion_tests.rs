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

//! Integration tests for shell completion generation

use assert_cmd::Command;
use predicates::prelude::*;

fn simbench_bin() -> String {
    std::env::var("CARGO_BIN_EXE_simbench")
        .unwrap_or_else(|_| env!("CARGO_BIN_EXE_simbench").to_string())
}

#[test]
fn test_completion_bash() {
    let mut cmd = Command::new(simbench_bin());
    cmd.arg("completion").arg("bash");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_simbench()"))
        .stdout(predicate::str::contains("COMPREPLY"));
}

#[test]
fn test_completion_zsh() {
    let mut cmd = Command::new(simbench_bin());
    cmd.arg("completion").arg("zsh");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#compdef simbench"));
}

#[test]
fn test_completion_fish() {
    let mut cmd = Command::new(simbench_bin());
    cmd.arg("completion").arg("fish");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("complete -c simbench"));
}

#[test]
fn test_completion_install_instructions() {
    let mut cmd = Command::new(simbench_bin());
    cmd.arg("completion").arg("bash").arg("--install");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("simbench completion bash"));
}

#[test]
fn test_completion_shell_is_case_insensitive() {
    let mut cmd = Command::new(simbench_bin());
    cmd.arg("completion").arg("Fish");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("complete -c simbench"));
}

#[test]
fn test_completion_unsupported_shell() {
    let mut cmd = Command::new(simbench_bin());
    cmd.arg("completion").arg("tcsh");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'tcsh'"))
        .stderr(predicate::str::contains("bash"));
}
