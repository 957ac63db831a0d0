//! CLI-specific error types

use thiserror::Error;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// The server could not be booted or failed while running.
    #[error("boot failed: {0}")]
    BootFailed(String),
}

impl CliError {
    /// Boot failure
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::BootFailed(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_failed_displays_its_message() {
        let error = CliError::boot_failed("address in use");
        assert_eq!(error.to_string(), "boot failed: address in use");
    }
}
