//! Error types for the `nls` command-line tool.

use nls::{ConfigError, I18nError};
use thiserror::Error;

/// Errors that end a CLI run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// `nls.toml` could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Table loading, locale parsing, or lookup failed.
    #[error(transparent)]
    I18n(#[from] I18nError),

    /// Secondary tables define keys the fallback table lacks.
    #[error("{count} orphaned key(s) found; remove them or add them to the fallback table")]
    OrphanedKeys {
        /// Total orphaned keys across all secondary tables.
        count: usize,
    },

    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Convenience alias for CLI results.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_errors_keep_their_message() {
        let error = CliError::from(I18nError::MissingMessage {
            key: String::from("menu-quit"),
            locale: String::from("en-US"),
        });

        assert!(error.to_string().contains("menu-quit"));
    }

    #[test]
    fn orphaned_keys_report_the_count() {
        let error = CliError::OrphanedKeys { count: 3 };

        assert!(error.to_string().starts_with("3 orphaned key(s)"));
    }
}
