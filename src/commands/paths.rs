//! Print conventional startup-file paths for a shell.

use crate::config::Config;
use crate::error::Result;
use crate::shell::{self, ShellKind};

/// Output the startup-file paths for the shell, one per line.
///
/// Paths are printed in preference order; no existence checks are made.
pub fn run(shell_flag: Option<ShellKind>, config: &Config) -> Result<()> {
    let kind = super::resolve_shell(shell_flag, config)?;

    for path in shell::startup_paths(kind)? {
        println!("{}", path.display());
    }
    Ok(())
}
