//! Directory-backed provider that reads one Fluent file per locale.
//!
//! Tables live at `<root>/<tag>/messages.ftl`, the same layout as the
//! `locales/` tree compiled into [`super::BundledProvider`]. Only plain
//! message values are extracted: attributes are ignored, Unicode isolation
//! marks are disabled, and a message that needs arguments to format is
//! reported as a parse error so it is caught at startup rather than rendered
//! with a placeholder.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::{self, ErrorKind};

use camino::{Utf8Path, Utf8PathBuf};
use fluent_bundle::{FluentBundle, FluentResource};
use fluent_syntax::ast::Entry;
use log::debug;

use super::{I18nError, LocaleId, StringTable, StringTableProvider};

/// File name holding the messages for a locale directory.
pub const MESSAGES_FILE: &str = "messages.ftl";

/// Load string tables from `<root>/<tag>/messages.ftl`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FluentDirectoryProvider {
    root: Utf8PathBuf,
}

impl FluentDirectoryProvider {
    /// Read tables from `root`.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the provider reads from.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn path_for(&self, locale: &LocaleId) -> Utf8PathBuf {
        self.root.join(self.resource_name(locale))
    }
}

impl StringTableProvider for FluentDirectoryProvider {
    fn resource_name(&self, locale: &LocaleId) -> String {
        format!("{locale}/{MESSAGES_FILE}")
    }

    fn load(&self, locale: &LocaleId) -> Result<StringTable, I18nError> {
        let path = self.path_for(locale);
        let source = fs::read_to_string(&path).map_err(|error| read_error(locale, &path, &error))?;

        debug!(
            target: "i18n::fluent",
            "read {} bytes for `{locale}` from `{path}`",
            source.len(),
        );

        parse_fluent_table(locale, path.as_str(), source)
    }
}

fn read_error(locale: &LocaleId, path: &Utf8Path, error: &io::Error) -> I18nError {
    if error.kind() == ErrorKind::NotFound {
        I18nError::TableNotFound {
            locale: locale.to_string(),
            resource: path.to_string(),
        }
    } else {
        I18nError::TableRead {
            locale: locale.to_string(),
            resource: path.to_string(),
            reason: error.to_string(),
        }
    }
}

/// Parse Fluent `source` into a flat table of formatted message values.
///
/// `resource` only names the source in error messages.
///
/// # Errors
///
/// Returns [`I18nError::TableParse`] when the source contains syntax errors,
/// duplicate message identifiers, or messages that cannot be formatted
/// without arguments.
pub fn parse_fluent_table(
    locale: &LocaleId,
    resource: &str,
    source: String,
) -> Result<StringTable, I18nError> {
    let parse_error = |reason: String| I18nError::TableParse {
        locale: locale.to_string(),
        resource: resource.to_owned(),
        reason,
    };

    let fluent = FluentResource::try_new(source)
        .map_err(|(_, errors)| parse_error(join_errors(&errors)))?;

    let ids: Vec<String> = fluent
        .entries()
        .filter_map(|entry| match entry {
            Entry::Message(message) if message.value.is_some() => {
                Some(message.id.name.to_owned())
            }
            _ => None,
        })
        .collect();

    let mut bundle = FluentBundle::new(vec![locale.language_identifier()?]);
    bundle.set_use_isolating(false);
    bundle
        .add_resource(fluent)
        .map_err(|errors| parse_error(join_errors(&errors)))?;

    let mut entries = HashMap::with_capacity(ids.len());
    for id in ids {
        let Some(pattern) = bundle.get_message(&id).and_then(|message| message.value()) else {
            continue;
        };

        let mut errors = Vec::new();
        let text = bundle.format_pattern(pattern, None, &mut errors).into_owned();
        if !errors.is_empty() {
            return Err(parse_error(format!(
                "message `{id}`: {}",
                join_errors(&errors)
            )));
        }

        entries.insert(id, text);
    }

    Ok(StringTable::from(entries))
}

fn join_errors<E: fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
