//! Runtime localisation core: locale identifiers, immutable string tables,
//! and the [`i18n::LocaleRegistry`] that resolves message keys with fallback.

pub mod i18n;

pub use i18n::{
    BundledProvider, ConsistencyReport, FluentDirectoryProvider, HostLocaleDetector, I18nError,
    LOCALE_ENV_VAR, LocaleApplication, LocaleGaps, LocaleId, LocaleRegistry, LocaleSelection,
    LocaleSource, StringTable, StringTableProvider, SystemLocaleDetector,
    default_supported_locales, environment_locale, normalise_locale, resolve_locale,
};
