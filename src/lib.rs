//! Application-facing entry point for NLS string lookup.
//!
//! Re-exports the locale registry from `nls-common` and adds the shared
//! `nls.toml` configuration plus a [`bootstrap`] helper that builds the
//! registry and activates the preferred locale.

pub mod bootstrap;
pub mod config;

pub use bootstrap::{Bootstrapped, bootstrap, bootstrap_with};
pub use config::{CONFIG_FILE, ConfigError, SharedConfig, TableSource};
pub use nls_common::i18n;
pub use nls_common::{I18nError, LocaleApplication, LocaleId, LocaleRegistry, LocaleSelection};
