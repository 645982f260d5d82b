//! Fluent tables compiled into the binary.
//!
//! The workspace `locales/` tree is embedded at build time, so an installed
//! binary resolves strings without access to the source checkout.

use rust_embed::RustEmbed;

use super::{
    I18nError, LocaleId, MESSAGES_FILE, StringTable, StringTableProvider, parse_fluent_table,
};

#[derive(RustEmbed)]
#[folder = "../locales/"]
struct BundledLocales;

/// Provider serving the `<tag>/messages.ftl` tables embedded in the binary.
///
/// ```
/// use nls_common::i18n::{BundledProvider, LocaleId, StringTableProvider};
///
/// let en_us: LocaleId = "en-US".parse().expect("valid tag");
/// let table = BundledProvider.load(&en_us).expect("bundled table should load");
/// assert!(table.contains_key("menu-file"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BundledProvider;

impl BundledProvider {
    /// Locale tags with an embedded table, sorted.
    #[must_use]
    pub fn available_tags() -> Vec<String> {
        let mut tags: Vec<String> = BundledLocales::iter()
            .filter_map(|path| {
                path.strip_suffix(MESSAGES_FILE)
                    .and_then(|directory| directory.strip_suffix('/'))
                    .map(str::to_owned)
            })
            .collect();
        tags.sort();
        tags
    }
}

impl StringTableProvider for BundledProvider {
    fn resource_name(&self, locale: &LocaleId) -> String {
        format!("{locale}/{MESSAGES_FILE}")
    }

    fn load(&self, locale: &LocaleId) -> Result<StringTable, I18nError> {
        let resource = self.resource_name(locale);
        let file = BundledLocales::get(&resource).ok_or_else(|| I18nError::TableNotFound {
            locale: locale.to_string(),
            resource: resource.clone(),
        })?;

        let source =
            String::from_utf8(file.data.into_owned()).map_err(|error| I18nError::TableRead {
                locale: locale.to_string(),
                resource: resource.clone(),
                reason: error.to_string(),
            })?;

        parse_fluent_table(locale, &resource, source)
    }
}
