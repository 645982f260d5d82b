//! Behaviour-driven tests for `nls.toml` loading.
//!
//! Scenarios write real files into a temporary directory so the loader,
//! the directory provider, and bootstrap run exactly as they do for an
//! installed application.

use std::cell::RefCell;
use std::fs;

mod support;

use camino::{Utf8Path, Utf8PathBuf};
use nls::i18n::BundledProvider;
use nls::i18n::testing::FixedHostLocale;
use nls::{Bootstrapped, CONFIG_FILE, SharedConfig, TableSource, bootstrap_with};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::locale::StepLocale;
use tempfile::TempDir;

struct ConfigWorld {
    directory: TempDir,
    load_result: RefCell<Option<Result<SharedConfig, String>>>,
    outcome: RefCell<Option<Bootstrapped>>,
}

impl ConfigWorld {
    fn root(&self) -> &Utf8Path {
        Utf8Path::from_path(self.directory.path())
            .unwrap_or_else(|| panic!("temporary directory should be UTF-8"))
    }

    fn config_path(&self) -> Utf8PathBuf {
        self.root().join(CONFIG_FILE)
    }

    fn tables_dir(&self) -> Utf8PathBuf {
        self.root().join("locales")
    }

    fn write_config(&self, contents: &str) {
        fs::write(self.config_path(), contents)
            .unwrap_or_else(|error| panic!("failed to write configuration: {error}"));
    }

    fn write_table(&self, locale: &str, key: &str, value: &str) {
        let directory = self.tables_dir().join(locale);
        fs::create_dir_all(&directory)
            .unwrap_or_else(|error| panic!("failed to create {directory}: {error}"));
        fs::write(directory.join("messages.ftl"), format!("{key} = {value}\n"))
            .unwrap_or_else(|error| panic!("failed to write {locale} table: {error}"));
    }

    fn loaded(&self) -> SharedConfig {
        let borrow = self.load_result.borrow();
        match borrow.as_ref() {
            Some(Ok(config)) => config.clone(),
            Some(Err(error)) => panic!("expected configuration loading to succeed: {error}"),
            None => panic!("configuration should be loaded"),
        }
    }
}

#[fixture]
fn world() -> ConfigWorld {
    ConfigWorld {
        directory: TempDir::new()
            .unwrap_or_else(|error| panic!("failed to create temporary directory: {error}")),
        load_result: RefCell::new(None),
        outcome: RefCell::new(None),
    }
}

#[given("the configuration file sets the locale to {locale}")]
fn config_with_locale(world: &ConfigWorld, locale: StepLocale) {
    world.write_config(&format!("locale = \"{}\"\n", locale.into_inner()));
}

#[given("the configuration file contains {source}")]
fn config_with_source(world: &ConfigWorld, source: StepLocale) {
    world.write_config(&format!("{}\n", source.into_inner()));
}

#[given("no configuration file exists")]
fn no_config(world: &ConfigWorld) {
    assert!(!world.config_path().exists());
}

#[given("a tables directory where {locale} defines {key} as {value}")]
fn fallback_table(world: &ConfigWorld, locale: StepLocale, key: StepLocale, value: StepLocale) {
    world.write_table(&locale.into_inner(), &key.into_inner(), &value.into_inner());
}

#[given("the tables directory maps {locale} {key} to {value}")]
fn secondary_table(world: &ConfigWorld, locale: StepLocale, key: StepLocale, value: StepLocale) {
    world.write_table(&locale.into_inner(), &key.into_inner(), &value.into_inner());
}

#[given("the configuration file points at the tables directory with locale {locale}")]
fn config_with_tables(world: &ConfigWorld, locale: StepLocale) {
    world.write_config(&format!(
        "locale = \"{}\"\nlocales_dir = \"{}\"\n",
        locale.into_inner(),
        world.tables_dir(),
    ));
}

#[when("the shared configuration is loaded")]
fn load_config(world: &ConfigWorld) {
    let outcome = SharedConfig::load_from_path(&world.config_path()).map_err(|error| error.to_string());
    world.load_result.borrow_mut().replace(outcome);
}

#[when("the application bootstraps from the configuration")]
fn bootstrap_from_config(world: &ConfigWorld) {
    let config = world.loaded();
    let outcome = bootstrap_with(&config, None, &FixedHostLocale::absent(), None)
        .unwrap_or_else(|error| panic!("configured tables should load: {error}"));
    world.outcome.borrow_mut().replace(outcome);
}

#[then("the configured locale is {expected}")]
fn assert_locale(world: &ConfigWorld, expected: StepLocale) {
    let expected = expected.into_inner();
    assert_eq!(world.loaded().locale(), Some(expected.as_str()));
}

#[then("the bundled tables are used")]
fn assert_bundled(world: &ConfigWorld) {
    assert_eq!(world.loaded().provider(), TableSource::Bundled(BundledProvider));
}

#[then("looking up {key} yields {expected}")]
fn assert_lookup(world: &ConfigWorld, key: StepLocale, expected: StepLocale) {
    let key = key.into_inner();
    let borrow = world.outcome.borrow();
    let outcome = borrow
        .as_ref()
        .unwrap_or_else(|| panic!("the application should have bootstrapped"));

    let value = outcome
        .registry
        .lookup(&key)
        .unwrap_or_else(|error| panic!("`{key}` should resolve: {error}"));
    assert_eq!(value, expected.into_inner());
}

#[then("a configuration error mentioning {snippet} is reported")]
fn assert_error_with_snippet(world: &ConfigWorld, snippet: StepLocale) {
    let snippet_value = snippet.into_inner();
    let borrow = world.load_result.borrow();
    match borrow.as_ref() {
        Some(Err(error)) => {
            assert!(
                error.contains(snippet_value.as_str()),
                "expected error '{error}' to mention '{snippet_value}'",
            );
        }
        Some(Ok(config)) => {
            panic!("expected configuration loading to fail but succeeded with {config:?}")
        }
        None => panic!("configuration should be loaded"),
    }
}

#[scenario("tests/features/config_loading.feature", index = 0)]
fn scenario_locale_preference(world: ConfigWorld) {
    let _ = world;
}

#[scenario("tests/features/config_loading.feature", index = 1)]
fn scenario_custom_tables(world: ConfigWorld) {
    let _ = world;
}

#[scenario("tests/features/config_loading.feature", index = 2)]
fn scenario_malformed(world: ConfigWorld) {
    let _ = world;
}

#[scenario("tests/features/config_loading.feature", index = 3)]
fn scenario_unknown_fields(world: ConfigWorld) {
    let _ = world;
}

#[scenario("tests/features/config_loading.feature", index = 4)]
fn scenario_missing_file(world: ConfigWorld) {
    let _ = world;
}
