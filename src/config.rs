//! Shared configuration loaded from `nls.toml`.
//!
//! Applications keep their locale preference and, optionally, the location
//! of their Fluent tables in a small TOML file. `SharedConfig` captures
//! those settings; unknown keys are rejected so typos surface immediately
//! instead of silently falling back to defaults.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use nls_common::i18n::{
    BundledProvider, FluentDirectoryProvider, I18nError, LocaleId, StringTable,
    StringTableProvider, normalise_locale,
};
use serde::Deserialize;
use thiserror::Error;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "nls.toml";

/// Errors raised while reading `nls.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        /// Path that was being parsed.
        path: Utf8PathBuf,
        /// Underlying deserialisation failure.
        #[source]
        source: toml::de::Error,
    },
}

/// Shared configuration for locale selection and table loading.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SharedConfig {
    /// Preferred locale when neither an explicit override nor `NLS_LOCALE`
    /// is present.
    ///
    /// The resolver trims whitespace and ignores blank values, so
    /// configuration such as `locale = ""` falls back cleanly to the host
    /// default.
    pub locale: Option<String>,
    /// Directory holding `<tag>/messages.ftl` tables. The tables compiled
    /// into the binary are used when omitted.
    pub locales_dir: Option<Utf8PathBuf>,
}

impl SharedConfig {
    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents do not deserialise.
    pub fn load_from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |target| {
            fs::read_to_string(target).map_err(|source| ConfigError::Io {
                path: target.to_path_buf(),
                source,
            })
        })
    }

    /// Loads configuration using the supplied reader.
    ///
    /// The reader receives `path` and returns the raw TOML. This exists so
    /// tests can simulate files without touching the file system.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use nls::SharedConfig;
    ///
    /// let config = SharedConfig::load_with(Utf8Path::new("nls.toml"), |_| {
    ///     Ok(String::from("locale = \"zh-CN\"\n"))
    /// })
    /// .expect("configuration should parse");
    /// assert_eq!(config.locale(), Some("zh-CN"));
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates the reader's error, or returns [`ConfigError::Parse`] when
    /// the returned text does not deserialise.
    pub fn load_with<F>(path: &Utf8Path, reader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&Utf8Path) -> Result<String, ConfigError>,
    {
        let source = reader(path)?;
        toml::from_str(&source).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            source: error,
        })
    }

    /// Returns the configured locale override, if present.
    ///
    /// Whitespace-only values are treated as absent.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        normalise_locale(self.locale.as_deref())
    }

    /// Provider reading tables from the configured directory, or from the
    /// embedded tables when none is set.
    #[must_use]
    pub fn provider(&self) -> TableSource {
        self.locales_dir.as_ref().map_or(
            TableSource::Bundled(BundledProvider),
            |directory| TableSource::Directory(FluentDirectoryProvider::new(directory.clone())),
        )
    }
}

/// Where the registry reads its string tables from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableSource {
    /// Tables compiled into the binary.
    Bundled(BundledProvider),
    /// Tables under a directory on disk.
    Directory(FluentDirectoryProvider),
}

impl StringTableProvider for TableSource {
    fn resource_name(&self, locale: &LocaleId) -> String {
        match self {
            Self::Bundled(provider) => provider.resource_name(locale),
            Self::Directory(provider) => provider.resource_name(locale),
        }
    }

    fn load(&self, locale: &LocaleId) -> Result<StringTable, I18nError> {
        match self {
            Self::Bundled(provider) => provider.load(locale),
            Self::Directory(provider) => provider.load(locale),
        }
    }
}
