//! In-memory collaborators for tests and for embedders that build tables in
//! code.

use std::collections::HashMap;

use super::{HostLocaleDetector, I18nError, LocaleId, StringTable, StringTableProvider};

/// Provider serving tables held in memory.
///
/// Locales without a table report [`I18nError::TableNotFound`]; locales
/// registered through [`MemoryProvider::with_broken_table`] report
/// [`I18nError::TableParse`].
#[derive(Clone, Debug, Default)]
pub struct MemoryProvider {
    tables: HashMap<LocaleId, StringTable>,
    broken: HashMap<LocaleId, String>,
}

impl MemoryProvider {
    /// Create a provider with no tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `table` for `locale`.
    #[must_use]
    pub fn with_table(mut self, locale: LocaleId, table: impl Into<StringTable>) -> Self {
        self.broken.remove(&locale);
        self.tables.insert(locale, table.into());
        self
    }

    /// Fail to parse `locale` with `reason`.
    #[must_use]
    pub fn with_broken_table(mut self, locale: LocaleId, reason: impl Into<String>) -> Self {
        self.tables.remove(&locale);
        self.broken.insert(locale, reason.into());
        self
    }
}

impl StringTableProvider for MemoryProvider {
    fn resource_name(&self, locale: &LocaleId) -> String {
        format!("memory:{locale}")
    }

    fn load(&self, locale: &LocaleId) -> Result<StringTable, I18nError> {
        if let Some(reason) = self.broken.get(locale) {
            return Err(I18nError::TableParse {
                locale: locale.to_string(),
                resource: self.resource_name(locale),
                reason: reason.clone(),
            });
        }

        self.tables
            .get(locale)
            .cloned()
            .ok_or_else(|| I18nError::TableNotFound {
                locale: locale.to_string(),
                resource: self.resource_name(locale),
            })
    }
}

/// Host detector that always reports the same answer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedHostLocale(Option<String>);

impl FixedHostLocale {
    /// Report `locale` as the host locale.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self(Some(locale.into()))
    }

    /// Report no host locale.
    #[must_use]
    pub const fn absent() -> Self {
        Self(None)
    }
}

impl HostLocaleDetector for FixedHostLocale {
    fn detect(&self) -> Option<String> {
        self.0.clone()
    }
}
