//! Print the completion-registration snippet for a command.

use crate::config::Config;
use crate::error::Result;
use crate::shell::{self, ShellKind};

/// Output the registration snippet for `command` to stdout.
///
/// The snippet is printed as-is so it can be appended verbatim to a startup
/// file or piped through `eval`/`source`.
pub fn run(command: &str, shell_flag: Option<ShellKind>, config: &Config) -> Result<()> {
    let kind = super::resolve_shell(shell_flag, config)?;
    let script = shell::registration_script(command, kind);

    print!("{}", script);
    Ok(())
}
