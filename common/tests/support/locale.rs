use std::convert::Infallible;
use std::str::FromStr;

use nls_common::i18n::LocaleId;

/// Quoted value supplied via a behaviour-driven test step.
#[derive(Clone, Debug)]
pub struct StepLocale {
    raw: String,
}

impl FromStr for StepLocale {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let raw = input
            .trim()
            .trim_matches(|candidate| matches!(candidate, '"' | '\''))
            .to_owned();

        Ok(Self { raw })
    }
}

impl StepLocale {
    /// Consumes the step value, yielding the unquoted string.
    pub fn into_inner(self) -> String {
        self.raw
    }

    /// Parses the step value as a locale, panicking on malformed input.
    pub fn locale(&self) -> LocaleId {
        self.raw
            .parse()
            .unwrap_or_else(|error| panic!("step locale `{}` should parse: {error}", self.raw))
    }
}
