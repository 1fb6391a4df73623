//! CLI command implementations.
//!
//! Each subcommand is implemented in its own module.

pub mod completions;
pub mod detect;
pub mod paths;
pub mod script;

use crate::config::Config;
use crate::error::{Result, TabhookError};
use crate::shell::ShellKind;

/// Resolve the target shell from the --shell flag, falling back to the
/// `shell` config key.
pub fn resolve_shell(flag: Option<ShellKind>, config: &Config) -> Result<ShellKind> {
    flag.or(config.shell).ok_or(TabhookError::NoShell)
}
