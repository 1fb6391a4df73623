//! Classify a shell identifier string.

use crate::error::{Result, TabhookError};
use crate::shell::ShellKind;

/// Print the shell kind matching `raw`, or fail if none does.
pub fn run(raw: &str) -> Result<()> {
    match ShellKind::detect(raw) {
        Some(kind) => {
            println!("{}", kind.name());
            Ok(())
        }
        None => Err(TabhookError::UnknownShell(raw.to_string())),
    }
}
