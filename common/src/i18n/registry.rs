//! Locale registry: supported locales, their tables, and the active locale.
//!
//! # Invariants
//!
//! 1. **Fallback exists**: the first supported locale is the fallback and its
//!    table is loaded before the registry is returned. Construction fails
//!    otherwise; there is no partially initialised registry.
//!
//! 2. **Active locale is always loaded**: [`LocaleRegistry::set_active_locale`]
//!    substitutes the fallback for unsupported requests instead of storing
//!    them.
//!
//! 3. **No torn reads**: the active locale and its table are swapped as one
//!    `Arc` through `arc-swap`, so a reader sees both halves from the same
//!    update.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Table not loadable | Provider error at start-up | `initialise` returns the error |
//! | Key missing in active/explicit table | Untranslated entry | Fallback table value |
//! | Key missing in fallback table | Key never added to base table | `I18nError::MissingMessage` |
//! | Unsupported locale requested | Stale settings, typo | Fallback used, reported via [`LocaleApplication`] |

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use arc_swap::ArcSwap;
use log::{debug, warn};
use unic_langid::{LanguageIdentifier, langid};

use super::consistency::{self, ConsistencyReport};
use super::host::detect_host_locale;
use super::selection::LocaleSelection;
use super::{HostLocaleDetector, I18nError, LocaleId, StringTable, StringTableProvider};

const LOG_TARGET: &str = "i18n::registry";

/// Locales shipped with the application, fallback first.
const DEFAULT_SUPPORTED: [LanguageIdentifier; 3] =
    [langid!("en-US"), langid!("zh-CN"), langid!("es-ES")];

/// The built-in ordered list of supported locales. `en-US` is the fallback.
#[must_use]
pub fn default_supported_locales() -> Vec<LocaleId> {
    DEFAULT_SUPPORTED.iter().map(LocaleId::from).collect()
}

/// Outcome of [`LocaleRegistry::set_active_locale`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocaleApplication {
    /// The requested locale is now active.
    Applied,
    /// The requested locale is unsupported; the fallback is now active.
    FellBack {
        /// Locale the caller asked for.
        requested: LocaleId,
    },
}

impl LocaleApplication {
    /// Whether the requested locale was activated as asked.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[derive(Debug)]
struct ActiveLocale {
    locale: LocaleId,
    table: StringTable,
}

/// Supported locales, their string tables, and the currently active locale.
///
/// The registry is built once through [`LocaleRegistry::initialise`] and then
/// shared, typically as `Arc<LocaleRegistry>`. Tables are read without
/// locking; only the active locale changes after start-up.
///
/// # Example
///
/// ```
/// use nls_common::i18n::{LocaleId, LocaleRegistry};
/// use nls_common::i18n::testing::{FixedHostLocale, MemoryProvider};
///
/// let en_us: LocaleId = "en-US".parse().expect("valid tag");
/// let zh_cn: LocaleId = "zh-CN".parse().expect("valid tag");
/// let provider = MemoryProvider::new()
///     .with_table(en_us.clone(), [("greeting", "Hello")])
///     .with_table(zh_cn.clone(), [("farewell", "再见")]);
///
/// let registry = LocaleRegistry::initialise(
///     &provider,
///     &FixedHostLocale::absent(),
///     vec![en_us, zh_cn.clone()],
/// )
/// .expect("tables should load");
///
/// registry.set_active_locale(&zh_cn);
/// assert_eq!(registry.lookup("greeting").expect("fallback"), "Hello");
/// assert_eq!(registry.lookup("farewell").expect("translated"), "再见");
/// ```
#[derive(Debug)]
pub struct LocaleRegistry {
    supported: Vec<LocaleId>,
    tables: HashMap<LocaleId, StringTable>,
    fallback_locale: LocaleId,
    fallback_table: StringTable,
    host_locale: Option<LocaleId>,
    active: ArcSwap<ActiveLocale>,
}

impl LocaleRegistry {
    /// Build a registry for `supported`, loading every table from `provider`.
    ///
    /// The first entry of `supported` becomes the fallback locale and the
    /// initial active locale. Duplicate entries are dropped, keeping the
    /// first occurrence. `detector` is queried once for the host locale.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::NoSupportedLocales`] for an empty list, or the
    /// provider's error for the first table that fails to load.
    pub fn initialise<P, D>(
        provider: &P,
        detector: &D,
        supported: Vec<LocaleId>,
    ) -> Result<Self, I18nError>
    where
        P: StringTableProvider + ?Sized,
        D: HostLocaleDetector + ?Sized,
    {
        let host_locale = detect_host_locale(detector);
        let supported = dedupe(supported);
        let fallback_locale = supported
            .first()
            .cloned()
            .ok_or(I18nError::NoSupportedLocales)?;

        let mut tables = HashMap::with_capacity(supported.len());
        for locale in &supported {
            let table = provider.load(locale)?;
            debug!(
                target: LOG_TARGET,
                "loaded {} entries for `{locale}` from `{}`",
                table.len(),
                provider.resource_name(locale),
            );
            tables.insert(locale.clone(), table);
        }

        let fallback_table = tables.get(&fallback_locale).cloned().unwrap_or_default();
        let active = ArcSwap::from_pointee(ActiveLocale {
            locale: fallback_locale.clone(),
            table: fallback_table.clone(),
        });

        Ok(Self {
            supported,
            tables,
            fallback_locale,
            fallback_table,
            host_locale,
            active,
        })
    }

    /// Build a registry for [`default_supported_locales`].
    ///
    /// # Errors
    ///
    /// Propagates the first table loading failure from `provider`.
    pub fn with_defaults<P, D>(provider: &P, detector: &D) -> Result<Self, I18nError>
    where
        P: StringTableProvider + ?Sized,
        D: HostLocaleDetector + ?Sized,
    {
        Self::initialise(provider, detector, default_supported_locales())
    }

    /// Resolve `key` in the active locale, falling back to the fallback table.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingMessage`] when the fallback table does not
    /// define `key` either.
    pub fn lookup(&self, key: &str) -> Result<String, I18nError> {
        let active = self.active.load();
        if let Some(value) = active.table.get(key) {
            return Ok(value.to_owned());
        }

        if active.locale != self.fallback_locale {
            debug!(
                target: LOG_TARGET,
                "`{key}` untranslated for `{}`; using `{}`",
                active.locale,
                self.fallback_locale,
            );
        }

        self.fallback_value(key)
    }

    /// Resolve `key` in `locale`, ignoring the active locale.
    ///
    /// An unloaded `locale` goes straight to the fallback table.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingMessage`] when the fallback table does not
    /// define `key`.
    pub fn lookup_in(&self, key: &str, locale: &LocaleId) -> Result<String, I18nError> {
        if let Some(value) = self.tables.get(locale).and_then(|table| table.get(key)) {
            return Ok(value.to_owned());
        }

        self.fallback_value(key)
    }

    fn fallback_value(&self, key: &str) -> Result<String, I18nError> {
        self.fallback_table
            .get(key)
            .map(str::to_owned)
            .ok_or_else(|| I18nError::MissingMessage {
                key: key.to_owned(),
                locale: self.fallback_locale.to_string(),
            })
    }

    /// Make `locale` the active locale.
    ///
    /// Unsupported locales activate the fallback instead; the returned
    /// [`LocaleApplication`] tells the caller which happened.
    pub fn set_active_locale(&self, locale: &LocaleId) -> LocaleApplication {
        if let Some((supported, table)) = self.tables.get_key_value(locale) {
            self.active.store(Arc::new(ActiveLocale {
                locale: supported.clone(),
                table: table.clone(),
            }));
            debug!(target: LOG_TARGET, "active locale set to `{supported}`");
            return LocaleApplication::Applied;
        }

        warn!(
            target: LOG_TARGET,
            "unsupported locale `{locale}` requested; activating `{}`",
            self.fallback_locale,
        );
        self.active.store(Arc::new(ActiveLocale {
            locale: self.fallback_locale.clone(),
            table: self.fallback_table.clone(),
        }));

        LocaleApplication::FellBack {
            requested: locale.clone(),
        }
    }

    /// Activate the locale chosen by a [`LocaleSelection`].
    pub fn apply_selection(&self, selection: &LocaleSelection) -> LocaleApplication {
        self.set_active_locale(selection.locale())
    }

    /// Supported locales in declaration order; the fallback is first.
    #[must_use]
    pub fn supported_locales(&self) -> &[LocaleId] {
        &self.supported
    }

    /// Whether `locale` has a loaded table.
    #[must_use]
    pub fn is_supported(&self, locale: &LocaleId) -> bool {
        self.tables.contains_key(locale)
    }

    /// The fallback locale.
    #[must_use]
    pub fn fallback_locale(&self) -> &LocaleId {
        &self.fallback_locale
    }

    /// The locale last activated, or the fallback if none was set.
    #[must_use]
    pub fn active_locale(&self) -> LocaleId {
        self.active.load().locale.clone()
    }

    /// The table of the active locale.
    #[must_use]
    pub fn active_table(&self) -> StringTable {
        self.active.load().table.clone()
    }

    /// The active locale and its table, read from a single update.
    #[must_use]
    pub fn active_snapshot(&self) -> (LocaleId, StringTable) {
        let active = self.active.load();
        (active.locale.clone(), active.table.clone())
    }

    /// The host locale if it is supported, otherwise the fallback locale.
    #[must_use]
    pub fn host_default_locale(&self) -> &LocaleId {
        self.host_locale
            .as_ref()
            .filter(|locale| self.is_supported(locale))
            .unwrap_or(&self.fallback_locale)
    }

    /// The raw detected host locale, supported or not.
    #[must_use]
    pub fn host_locale(&self) -> Option<&LocaleId> {
        self.host_locale.as_ref()
    }

    /// The loaded table for `locale`.
    #[must_use]
    pub fn table(&self, locale: &LocaleId) -> Option<&StringTable> {
        self.tables.get(locale)
    }

    /// Compare every secondary table against the fallback table.
    #[must_use]
    pub fn consistency_report(&self) -> ConsistencyReport {
        let secondary = self
            .supported
            .iter()
            .skip(1)
            .filter_map(|locale| self.tables.get(locale).map(|table| (locale, table)));

        consistency::compare_tables(&self.fallback_locale, &self.fallback_table, secondary)
    }

    /// Check that the fallback table defines every key in `keys`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingFallbackKeys`] listing the absent keys in
    /// sorted order.
    pub fn ensure_keys<'a, I>(&self, keys: I) -> Result<(), I18nError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let missing = consistency::missing_keys(&self.fallback_table, keys);
        if missing.is_empty() {
            return Ok(());
        }

        Err(I18nError::MissingFallbackKeys {
            locale: self.fallback_locale.to_string(),
            keys: missing,
        })
    }
}

fn dedupe(locales: Vec<LocaleId>) -> Vec<LocaleId> {
    let mut seen = HashSet::with_capacity(locales.len());
    locales
        .into_iter()
        .filter(|locale| seen.insert(locale.clone()))
        .collect()
}
