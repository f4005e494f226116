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

//! Completion command - shell completion scripts for `simbench`

use crate::cli::Cli;
use crate::error::CliError;
use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator, Shell};
use std::io::{self, Write};

/// Prints the completion script for `shell` to stdout.
pub fn completion(shell: Shell) -> Result<(), CliError> {
    let mut cmd = Cli::command();
    let mut stdout = io::stdout().lock();
    write_completion(shell, &mut cmd, &mut stdout);
    stdout
        .flush()
        .map_err(|e| CliError::io_error("<stdout>", e))
}

/// Writes the completion script of `cmd` to `out`.
pub fn write_completion<G: Generator, W: Write>(generator: G, cmd: &mut Command, out: &mut W) {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, out);
}

/// How to make `shell` load the `simbench` completions.
///
/// ```
/// use clap_complete::Shell;
/// use simbench_cli::commands::installation_instructions;
///
/// assert!(installation_instructions(Shell::Zsh).contains("_simbench"));
/// ```
pub fn installation_instructions(shell: Shell) -> String {
    let steps = match shell {
        Shell::Bash => {
            "source <(simbench completion bash)\n\n\
             # or, to keep it:\n\
             simbench completion bash > ~/.local/share/bash-completion/completions/simbench"
        }
        Shell::Zsh => {
            "# pick a directory listed in $fpath\n\
             simbench completion zsh > ~/.zfunc/_simbench"
        }
        Shell::Fish => "simbench completion fish > ~/.config/fish/completions/simbench.fish",
        Shell::PowerShell => {
            "# append to $PROFILE\n\
             simbench completion powershell | Out-String | Invoke-Expression"
        }
        Shell::Elvish => {
            "# append to ~/.config/elvish/rc.elv\n\
             eval (simbench completion elvish | slurp)"
        }
        other => {
            return format!(
                "Save the output of `simbench completion {}` where {} looks for completions.",
                other, other
            );
        }
    };
    format!("# simbench completions for {}\n{}\n", shell, steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut out = Vec::new();
        write_completion(shell, &mut Cli::command(), &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bash_script_lists_subcommands() {
        let script = script(Shell::Bash);
        assert!(script.contains("_simbench()"));
        assert!(script.contains("summary"));
        assert!(script.contains("--compilation"));
    }

    #[test]
    fn test_fish_script() {
        assert!(script(Shell::Fish).contains("complete -c simbench"));
    }

    #[test]
    fn test_instructions_name_the_shell() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            let steps = installation_instructions(shell);
            assert!(steps.starts_with(&format!("# simbench completions for {}", shell)));
            assert!(steps.contains(&format!("simbench completion {}", shell)));
        }
    }
}
