//! Shared helpers for behaviour-driven suites.
//!
//! `StepLocale` strips quoting from step parameters so scenarios can write
//! `"zh-CN"` and hand plain text to the registry. The root package's suites
//! include this module by path.
pub mod locale;
