//! Error type shared by the registry, providers, and consistency checks.

use thiserror::Error;

/// Error raised when localisation data cannot satisfy a caller request.
///
/// Table loading failures are fatal at initialisation: a registry is never
/// built from a partial set of tables. `MissingMessage` is the only variant
/// surfaced by lookups, and only when the fallback table lacks the key.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// Raised when the requested message key is missing from the fallback table.
    #[error("message `{key}` missing for locale `{locale}`")]
    MissingMessage {
        /// Key that was requested.
        key: String,
        /// Fallback locale that was consulted last.
        locale: String,
    },

    /// The provider has no resource for a declared supported locale.
    #[error("locale resource `{resource}` not found for `{locale}`")]
    TableNotFound {
        /// Locale whose table is missing.
        locale: String,
        /// Provider-specific resource name, e.g. a file path.
        resource: String,
    },

    /// The resource exists but could not be read.
    #[error("failed to read `{resource}` for `{locale}`: {reason}")]
    TableRead {
        /// Locale whose table failed to load.
        locale: String,
        /// Provider-specific resource name.
        resource: String,
        /// Underlying read failure.
        reason: String,
    },

    /// The resource was read but its contents are malformed.
    #[error("failed to parse `{resource}` for `{locale}`: {reason}")]
    TableParse {
        /// Locale whose table failed to parse.
        locale: String,
        /// Provider-specific resource name.
        resource: String,
        /// Parser diagnostics, joined.
        reason: String,
    },

    /// A locale tag could not be parsed into a language and region.
    #[error("invalid locale `{input}`: {reason}")]
    InvalidLocale {
        /// Raw text that was supplied.
        input: String,
        /// Why the tag was rejected.
        reason: String,
    },

    /// The registry was asked to start without any supported locale.
    #[error("no supported locales were declared")]
    NoSupportedLocales,

    /// Keys used by the application are absent from the fallback table.
    #[error("fallback locale `{locale}` is missing keys: {}", .keys.join(", "))]
    MissingFallbackKeys {
        /// The fallback locale.
        locale: String,
        /// Absent keys in sorted order.
        keys: Vec<String>,
    },
}

impl I18nError {
    /// Whether the error signals an untranslated key rather than a
    /// configuration problem.
    #[must_use]
    pub const fn is_missing_message(&self) -> bool {
        matches!(self, Self::MissingMessage { .. })
    }
}
