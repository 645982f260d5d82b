//! Cross-table key checks.
//!
//! Lookups assume the fallback table defines every key the application
//! uses. These helpers make that assumption checkable at start-up or in
//! tests instead of leaving it to convention.

use std::collections::BTreeSet;

use super::{LocaleId, StringTable};

/// Key differences between one secondary table and the fallback table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleGaps {
    locale: LocaleId,
    orphaned: Vec<String>,
    untranslated: Vec<String>,
}

impl LocaleGaps {
    /// The secondary locale these gaps belong to.
    #[must_use]
    pub const fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// Keys defined here but absent from the fallback table, sorted.
    ///
    /// These are unreachable through fallback and usually indicate a renamed
    /// or deleted base key.
    #[must_use]
    pub fn orphaned(&self) -> &[String] {
        &self.orphaned
    }

    /// Fallback keys this table does not translate, sorted.
    #[must_use]
    pub fn untranslated(&self) -> &[String] {
        &self.untranslated
    }
}

/// Result of comparing all secondary tables against the fallback table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsistencyReport {
    fallback: LocaleId,
    locales: Vec<LocaleGaps>,
}

impl ConsistencyReport {
    /// The fallback locale every table was compared against.
    #[must_use]
    pub const fn fallback(&self) -> &LocaleId {
        &self.fallback
    }

    /// Per-locale gaps in supported-list order.
    #[must_use]
    pub fn locales(&self) -> &[LocaleGaps] {
        &self.locales
    }

    /// Gaps for a specific locale.
    #[must_use]
    pub fn gaps_for(&self, locale: &LocaleId) -> Option<&LocaleGaps> {
        self.locales.iter().find(|gaps| &gaps.locale == locale)
    }

    /// Total orphaned keys across all secondary tables.
    #[must_use]
    pub fn orphan_count(&self) -> usize {
        self.locales.iter().map(|gaps| gaps.orphaned.len()).sum()
    }

    /// True when no secondary table defines keys the fallback lacks.
    ///
    /// Untranslated keys do not affect consistency; they resolve through the
    /// fallback table.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.orphan_count() == 0
    }
}

pub(crate) fn compare_tables<'a, I>(
    fallback_locale: &LocaleId,
    fallback: &StringTable,
    secondary: I,
) -> ConsistencyReport
where
    I: IntoIterator<Item = (&'a LocaleId, &'a StringTable)>,
{
    let base: BTreeSet<&str> = fallback.keys().collect();

    let locales = secondary
        .into_iter()
        .map(|(locale, table)| {
            let keys: BTreeSet<&str> = table.keys().collect();
            LocaleGaps {
                locale: locale.clone(),
                orphaned: keys.difference(&base).map(|key| (*key).to_owned()).collect(),
                untranslated: base.difference(&keys).map(|key| (*key).to_owned()).collect(),
            }
        })
        .collect();

    ConsistencyReport {
        fallback: fallback_locale.clone(),
        locales,
    }
}

pub(crate) fn missing_keys<'a, I>(fallback: &StringTable, keys: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    keys.into_iter()
        .filter(|key| !fallback.contains_key(key))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
