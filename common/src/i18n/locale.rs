//! Locale identifiers keyed by language and optional region.
//!
//! Tags are parsed with `unic-langid`, so both `en-US` and `en_US` are
//! accepted and case is normalised (`EN_us` becomes `en-US`). POSIX suffixes
//! such as `.UTF-8` and `@euro` are stripped before parsing, which lets the
//! raw `LANG` value reported by the host be used directly. Script and variant
//! subtags are dropped: two identifiers are equal when their language and
//! region match.

use std::fmt;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use super::I18nError;

/// Language plus optional region identifying a translation target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleId {
    language: String,
    region: Option<String>,
}

impl LocaleId {
    /// Parse a locale tag such as `en-US`, `zh_CN`, or `es_ES.UTF-8`.
    ///
    /// ```
    /// use nls_common::i18n::LocaleId;
    ///
    /// let locale = LocaleId::parse("zh_cn.UTF-8").expect("valid tag");
    /// assert_eq!(locale.language(), "zh");
    /// assert_eq!(locale.region(), Some("CN"));
    /// assert_eq!(locale.to_string(), "zh-CN");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::InvalidLocale`] when the input is blank or not a
    /// well-formed language tag.
    pub fn parse(input: &str) -> Result<Self, I18nError> {
        let tag = strip_posix_suffixes(input.trim());
        if tag.is_empty() {
            return Err(I18nError::InvalidLocale {
                input: input.to_owned(),
                reason: String::from("empty locale tag"),
            });
        }

        tag.parse::<LanguageIdentifier>()
            .map(|identifier| Self::from(&identifier))
            .map_err(|error| I18nError::InvalidLocale {
                input: input.to_owned(),
                reason: error.to_string(),
            })
    }

    /// Lowercase language subtag, e.g. `en`.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase region subtag, e.g. `US`, when present.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Underscore-separated form used by POSIX environments, e.g. `en_US`.
    #[must_use]
    pub fn posix_tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}_{region}", self.language),
            None => self.language.clone(),
        }
    }

    /// Convert back into a `unic-langid` identifier for Fluent bundles.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::InvalidLocale`] if the stored subtags no longer
    /// form a valid tag, which cannot happen for identifiers built through
    /// [`LocaleId::parse`].
    pub fn language_identifier(&self) -> Result<LanguageIdentifier, I18nError> {
        let tag = self.to_string();
        tag.parse::<LanguageIdentifier>()
            .map_err(|error| I18nError::InvalidLocale {
                input: tag,
                reason: error.to_string(),
            })
    }
}

impl From<&LanguageIdentifier> for LocaleId {
    fn from(identifier: &LanguageIdentifier) -> Self {
        Self {
            language: identifier.language.as_str().to_owned(),
            region: identifier.region.map(|region| region.as_str().to_owned()),
        }
    }
}

impl From<LanguageIdentifier> for LocaleId {
    fn from(identifier: LanguageIdentifier) -> Self {
        Self::from(&identifier)
    }
}

impl FromStr for LocaleId {
    type Err = I18nError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(formatter, "{}-{region}", self.language),
            None => formatter.write_str(&self.language),
        }
    }
}

/// Drop `.codeset` and `@modifier` suffixes from POSIX locale strings.
fn strip_posix_suffixes(input: &str) -> &str {
    input
        .split(['.', '@'])
        .next()
        .unwrap_or(input)
        .trim()
}
