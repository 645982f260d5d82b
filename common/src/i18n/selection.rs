use std::env;
use std::fmt;

use log::{debug, warn};

use super::{LocaleId, LocaleRegistry};

/// Environment variable consulted for a locale override.
pub const LOCALE_ENV_VAR: &str = "NLS_LOCALE";

/// Source for a resolved locale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleSource {
    /// Locale supplied explicitly by the caller.
    ExplicitArgument,
    /// Locale sourced from the `NLS_LOCALE` environment variable.
    EnvironmentVariable,
    /// Locale taken from `nls.toml` configuration.
    Configuration,
    /// Host locale, or the fallback when the host locale is unsupported.
    HostDefault,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitArgument => formatter.write_str("explicit locale override"),
            Self::EnvironmentVariable => formatter.write_str(LOCALE_ENV_VAR),
            Self::Configuration => formatter.write_str("configuration locale"),
            Self::HostDefault => formatter.write_str("host default locale"),
        }
    }
}

/// Outcome of locale resolution including the chosen locale and provenance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleSelection {
    locale: LocaleId,
    source: LocaleSource,
    requested: Option<String>,
    fallback_used: bool,
}

impl LocaleSelection {
    const fn new(
        locale: LocaleId,
        source: LocaleSource,
        requested: Option<String>,
        fallback_used: bool,
    ) -> Self {
        Self {
            locale,
            source,
            requested,
            fallback_used,
        }
    }

    /// Returns the effective locale source.
    #[must_use]
    pub const fn source(&self) -> LocaleSource {
        self.source
    }

    /// Returns the locale requested by the resolved source, if any.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    /// Returns the resolved locale.
    #[must_use]
    pub const fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// Whether the fallback locale stood in for an absent or unsupported
    /// host locale.
    #[must_use]
    pub const fn used_fallback(&self) -> bool {
        self.fallback_used
    }

    /// Emit a debug log summarising the resolved locale.
    pub fn log_outcome(&self, target: &str) {
        debug!(
            target: target,
            "resolved {} to `{}`",
            self.source(),
            self.locale(),
        );
    }
}

/// Attempt to resolve a locale candidate from the given source.
fn try_resolve_candidate(
    registry: &LocaleRegistry,
    source: LocaleSource,
    raw: Option<&str>,
) -> Option<LocaleSelection> {
    let candidate = normalise_locale(raw)?;

    let locale = match LocaleId::parse(candidate) {
        Ok(locale) => locale,
        Err(error) => {
            warn!(
                target: "i18n::selection",
                "skipping invalid {source} `{candidate}`: {error}",
            );
            return None;
        }
    };

    if registry.is_supported(&locale) {
        return Some(LocaleSelection::new(
            locale,
            source,
            Some(candidate.to_owned()),
            false,
        ));
    }

    warn!(
        target: "i18n::selection",
        "skipping unsupported {source} `{candidate}`",
    );

    None
}

fn host_default(registry: &LocaleRegistry) -> LocaleSelection {
    let host = registry.host_locale();
    let fallback_used = !host.is_some_and(|locale| registry.is_supported(locale));

    LocaleSelection::new(
        registry.host_default_locale().clone(),
        LocaleSource::HostDefault,
        host.map(ToString::to_string),
        fallback_used,
    )
}

/// Resolve a locale using explicit, environment, and configuration overrides.
///
/// The resolver considers candidates in the following order:
///
/// 1. The explicit locale supplied by the caller.
/// 2. The `NLS_LOCALE` environment variable.
/// 3. The configuration file (`nls.toml`).
/// 4. The registry's host default locale, which is itself the fallback
///    locale when the host locale is unsupported.
///
/// Blank, malformed, and unsupported candidates are skipped with a warning.
#[must_use]
pub fn resolve_locale(
    registry: &LocaleRegistry,
    explicit: Option<&str>,
    environment: Option<String>,
    configuration: Option<&str>,
) -> LocaleSelection {
    let candidates = [
        (LocaleSource::ExplicitArgument, explicit),
        (LocaleSource::EnvironmentVariable, environment.as_deref()),
        (LocaleSource::Configuration, configuration),
    ];

    candidates
        .into_iter()
        .find_map(|(source, raw)| try_resolve_candidate(registry, source, raw))
        .unwrap_or_else(|| host_default(registry))
}

/// Read `NLS_LOCALE`, ignoring values that are not valid Unicode.
#[must_use]
pub fn environment_locale() -> Option<String> {
    env::var_os(LOCALE_ENV_VAR).and_then(|value| value.into_string().ok())
}

/// Trim whitespace and discard empty locale candidates.
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input
        .map(str::trim)
        .and_then(|value| if value.is_empty() { None } else { Some(value) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::testing::{FixedHostLocale, MemoryProvider};
    use rstest::rstest;

    fn registry_with_host(host: &FixedHostLocale) -> LocaleRegistry {
        let provider = MemoryProvider::new()
            .with_table("en-US".parse().expect("valid tag"), [("greeting", "Hello")])
            .with_table("zh-CN".parse().expect("valid tag"), [("greeting", "你好")])
            .with_table("es-ES".parse().expect("valid tag"), [("greeting", "Hola")]);

        LocaleRegistry::with_defaults(&provider, host).expect("tables should load")
    }

    #[rstest]
    #[case(None, None, None, LocaleSource::HostDefault, "en-US", true)]
    #[case(Some("zh_CN"), None, None, LocaleSource::ExplicitArgument, "zh-CN", false)]
    #[case(
        None,
        Some(String::from("es-ES")),
        None,
        LocaleSource::EnvironmentVariable,
        "es-ES",
        false
    )]
    #[case(None, None, Some("zh-CN"), LocaleSource::Configuration, "zh-CN", false)]
    #[case(
        Some("fr-FR"),
        Some(String::from("not a tag")),
        Some("es-ES"),
        LocaleSource::Configuration,
        "es-ES",
        false
    )]
    fn resolves_sources(
        #[case] explicit: Option<&str>,
        #[case] environment: Option<String>,
        #[case] configuration: Option<&str>,
        #[case] expected_source: LocaleSource,
        #[case] expected_locale: &str,
        #[case] expected_fallback: bool,
    ) {
        let registry = registry_with_host(&FixedHostLocale::absent());
        let selection = resolve_locale(&registry, explicit, environment, configuration);

        assert_eq!(selection.source(), expected_source);
        assert_eq!(selection.locale().to_string(), expected_locale);
        assert_eq!(selection.used_fallback(), expected_fallback);
    }

    #[rstest]
    #[case("es_ES.UTF-8", "es-ES", false)]
    #[case("fr_FR.UTF-8", "en-US", true)]
    fn host_default_reflects_detected_locale(
        #[case] host: &str,
        #[case] expected_locale: &str,
        #[case] expected_fallback: bool,
    ) {
        let registry = registry_with_host(&FixedHostLocale::new(host));
        let selection = resolve_locale(&registry, None, None, None);

        assert_eq!(selection.source(), LocaleSource::HostDefault);
        assert_eq!(selection.locale().to_string(), expected_locale);
        assert_eq!(selection.used_fallback(), expected_fallback);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("  "), None)]
    #[case(Some("zh-CN"), Some("zh-CN"))]
    #[case(Some(" zh-CN "), Some("zh-CN"))]
    fn normalises_candidates(#[case] input: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(normalise_locale(input), expected);
    }

    #[test]
    fn records_requested_value_verbatim() {
        let registry = registry_with_host(&FixedHostLocale::absent());
        let selection = resolve_locale(&registry, Some(" zh_cn "), None, None);

        assert_eq!(selection.requested(), Some("zh_cn"));
        assert_eq!(selection.locale().to_string(), "zh-CN");
    }
}
