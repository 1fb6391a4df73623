//! Shell classification and completion-hook generation.
//!
//! Everything here is a pure mapping from inputs to text or paths: classify a
//! shell identifier string, render the registration snippet for a command,
//! and resolve the startup files where the snippet is conventionally
//! installed. No file I/O and no process execution happen in this module.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{Result, TabhookError};

pub mod fish;
pub mod posix;

/// Supported shells for completion registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellKind {
    Bash,
    Zsh,
    Fish,
}

impl ShellKind {
    /// Classify a free-form shell identifier, typically a path like
    /// `/usr/bin/fish`.
    ///
    /// Substrings are checked in fixed order: fish, then zsh, then bash.
    /// Callers depend on this precedence for inputs matching more than one
    /// shell, so it must not be reordered.
    pub fn detect(raw: &str) -> Option<ShellKind> {
        if raw.contains("fish") {
            return Some(ShellKind::Fish);
        }

        if raw.contains("zsh") {
            return Some(ShellKind::Zsh);
        }

        if raw.contains("bash") {
            return Some(ShellKind::Bash);
        }

        None
    }

    /// Lowercase name as used on the CLI and in config files.
    pub fn name(self) -> &'static str {
        match self {
            ShellKind::Bash => "bash",
            ShellKind::Zsh => "zsh",
            ShellKind::Fish => "fish",
        }
    }

    /// Startup files for this shell, relative to the home directory.
    ///
    /// Bash lists both conventional locations, `.bashrc` first; callers
    /// append to whichever exists, or to both.
    pub fn startup_files(self) -> &'static [&'static str] {
        match self {
            ShellKind::Bash => &[".bashrc", ".bash_profile"],
            ShellKind::Zsh => &[".zshrc"],
            ShellKind::Fish => &[".config/fish/config.fish"],
        }
    }
}

impl std::fmt::Display for ShellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate the snippet that registers tab-completion for `command`.
///
/// The command is substituted verbatim (no escaping). The shell function
/// name is derived from it by replacing hyphens with underscores, since
/// hyphens are invalid in bash/zsh function names. Bash and zsh share one
/// template; fish has its own.
pub fn registration_script(command: &str, kind: ShellKind) -> String {
    let func = function_name(command);

    match kind {
        ShellKind::Bash | ShellKind::Zsh => posix::registration_script(&func, command),
        ShellKind::Fish => fish::registration_script(&func, command),
    }
}

/// Absolute startup-file paths for this shell under the user's home
/// directory.
///
/// Purely constructed from `$HOME` and fixed suffixes; no existence checks.
pub fn startup_paths(kind: ShellKind) -> Result<Vec<PathBuf>> {
    let home = std::env::var("HOME").map_err(|_| TabhookError::NoHome)?;

    Ok(kind
        .startup_files()
        .iter()
        .map(|suffix| PathBuf::from(&home).join(suffix))
        .collect())
}

/// Derive the shell function name for a command (`my-tool` -> `_my_tool`).
fn function_name(command: &str) -> String {
    format!("_{}", command.replace('-', "_"))
}
