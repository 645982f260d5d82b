//! Shared helpers for the behaviour-driven suites in this package.
#[path = "../../common/tests/support/locale.rs"]
pub mod locale;
