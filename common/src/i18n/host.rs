//! Host locale detection.

use log::debug;

use super::LocaleId;

/// Reports the operating environment's configured language and region.
#[cfg_attr(test, mockall::automock)]
pub trait HostLocaleDetector {
    /// Raw locale string, e.g. `en-US` or `de_DE.UTF-8`, if the host has one.
    fn detect(&self) -> Option<String>;
}

/// Detector backed by the platform locale APIs via `sys-locale`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLocaleDetector;

impl HostLocaleDetector for SystemLocaleDetector {
    fn detect(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Query `detector` once and parse its answer.
///
/// Unparseable answers are treated as "no host locale".
pub(crate) fn detect_host_locale<D>(detector: &D) -> Option<LocaleId>
where
    D: HostLocaleDetector + ?Sized,
{
    let raw = detector.detect()?;
    match LocaleId::parse(&raw) {
        Ok(locale) => {
            debug!(target: "i18n::host", "detected host locale `{locale}` from `{raw}`");
            Some(locale)
        }
        Err(error) => {
            debug!(target: "i18n::host", "ignoring host locale: {error}");
            None
        }
    }
}
