//! Seam between the registry and whatever supplies raw string tables.

use super::{I18nError, LocaleId, StringTable};

/// Source of parsed string tables, keyed by locale.
///
/// The registry calls [`StringTableProvider::load`] once per supported
/// locale during initialisation and treats any error as fatal.
///
/// # Examples
///
/// ```
/// use nls_common::i18n::{LocaleId, StringTableProvider};
/// use nls_common::i18n::testing::MemoryProvider;
///
/// let en_us: LocaleId = "en-US".parse().expect("valid tag");
/// let provider = MemoryProvider::new().with_table(en_us.clone(), [("greeting", "Hello")]);
///
/// let table = provider.load(&en_us).expect("table should load");
/// assert_eq!(table.get("greeting"), Some("Hello"));
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait StringTableProvider {
    /// Name of the resource backing `locale`, used in logs and errors.
    fn resource_name(&self, locale: &LocaleId) -> String;

    /// Load and parse the table for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::TableNotFound`] when no resource exists,
    /// [`I18nError::TableRead`] when it cannot be read, and
    /// [`I18nError::TableParse`] when its contents are malformed.
    fn load(&self, locale: &LocaleId) -> Result<StringTable, I18nError>;
}
