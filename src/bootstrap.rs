//! Start-up wiring: configuration, environment, and host detection feed a
//! ready-to-use registry.

use std::sync::Arc;

use log::debug;
use nls_common::i18n::{
    HostLocaleDetector, I18nError, LocaleRegistry, LocaleSelection, SystemLocaleDetector,
    environment_locale, resolve_locale,
};

use crate::SharedConfig;

const LOG_TARGET: &str = "nls::bootstrap";

/// A loaded registry together with the locale selection applied to it.
#[derive(Debug)]
pub struct Bootstrapped {
    /// Registry shared with UI code.
    pub registry: Arc<LocaleRegistry>,
    /// How the active locale was chosen.
    pub selection: LocaleSelection,
}

/// Build the registry from `config`, then activate the preferred locale.
///
/// Precedence is `explicit`, then `NLS_LOCALE`, then the configured locale,
/// then the host default. The host locale comes from the operating system.
///
/// # Errors
///
/// Returns the provider error when any bundled or configured table fails to
/// load.
pub fn bootstrap(config: &SharedConfig, explicit: Option<&str>) -> Result<Bootstrapped, I18nError> {
    bootstrap_with(config, explicit, &SystemLocaleDetector, environment_locale())
}

/// [`bootstrap`] with an injected host detector and environment value.
///
/// # Errors
///
/// Returns the provider error when any table fails to load.
pub fn bootstrap_with<D>(
    config: &SharedConfig,
    explicit: Option<&str>,
    detector: &D,
    environment: Option<String>,
) -> Result<Bootstrapped, I18nError>
where
    D: HostLocaleDetector + ?Sized,
{
    let provider = config.provider();
    let registry = LocaleRegistry::with_defaults(&provider, detector)?;
    debug!(
        target: LOG_TARGET,
        "loaded {} locales; host default is `{}`",
        registry.supported_locales().len(),
        registry.host_default_locale(),
    );

    let selection = resolve_locale(&registry, explicit, environment, config.locale());
    selection.log_outcome(LOG_TARGET);

    // The resolver only yields supported locales or the host default.
    let application = registry.apply_selection(&selection);
    debug_assert!(application.is_applied(), "resolved locale must be supported");

    Ok(Bootstrapped {
        registry: Arc::new(registry),
        selection,
    })
}
