//! Locale registry and fallback string lookup.
//!
//! A [`LocaleRegistry`] owns the ordered list of supported locales, one
//! immutable [`StringTable`] per locale, the detected host locale, and the
//! currently active locale. Tables come from a [`StringTableProvider`] and
//! the host locale from a [`HostLocaleDetector`], both injected at
//! construction so initialisation order stays explicit.
//!
//! Lookups try the active (or explicitly named) locale first and then the
//! fallback locale, which is always the first supported locale. A key absent
//! from the fallback table surfaces as [`I18nError::MissingMessage`].
//!
//! Start-up locale choice is handled by [`resolve_locale`], which evaluates
//! explicit overrides, the environment, and configuration in priority order
//! before settling on the host default.

mod bundled;
mod consistency;
mod error;
mod fluent;
mod host;
mod locale;
mod provider;
mod registry;
mod selection;
mod table;
pub mod testing;

pub use bundled::BundledProvider;
pub use consistency::{ConsistencyReport, LocaleGaps};
pub use error::I18nError;
pub use fluent::{FluentDirectoryProvider, MESSAGES_FILE, parse_fluent_table};
pub use host::{HostLocaleDetector, SystemLocaleDetector};
pub use locale::LocaleId;
pub use provider::StringTableProvider;
pub use registry::{LocaleApplication, LocaleRegistry, default_supported_locales};
pub use selection::{
    LOCALE_ENV_VAR, LocaleSelection, LocaleSource, environment_locale, normalise_locale,
    resolve_locale,
};
pub use table::StringTable;
