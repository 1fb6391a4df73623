//! Completions for tabhook's own CLI.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::Cli;

/// Write a completion script for tabhook itself to stdout.
pub fn run(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
