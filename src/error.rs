//! Error types for the tabhook CLI.
//!
//! This module provides a unified error type for all tabhook operations.
//! Unrecognized shell input surfaces as `Option::None` at the detection
//! boundary and as a typed error at the CLI boundary.

use thiserror::Error;

/// Main error type for tabhook operations.
#[derive(Error, Debug)]
pub enum TabhookError {
    /// The shell identifier did not match any supported shell
    #[error("Unrecognized shell: {0}")]
    UnknownShell(String),

    /// No shell was given on the command line or in config
    #[error("No shell specified. Pass --shell or set `shell` in ~/.config/tabhook.toml")]
    NoShell,

    /// The home directory could not be determined
    #[error("HOME environment variable not set")]
    NoHome,

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for Results using TabhookError.
pub type Result<T> = std::result::Result<T, TabhookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_shell_display() {
        let err = TabhookError::UnknownShell("/bin/sh".to_string());
        assert_eq!(format!("{}", err), "Unrecognized shell: /bin/sh");
    }

    #[test]
    fn test_no_shell_display() {
        let err = TabhookError::NoShell;
        let display = format!("{}", err);
        assert!(display.contains("--shell"));
        assert!(display.contains("tabhook.toml"));
    }

    #[test]
    fn test_no_home_display() {
        let err = TabhookError::NoHome;
        assert_eq!(format!("{}", err), "HOME environment variable not set");
    }

    #[test]
    fn test_config_error_display() {
        let err = TabhookError::Config("bad toml".to_string());
        assert_eq!(format!("{}", err), "Config error: bad toml");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TabhookError>();
    }
}
