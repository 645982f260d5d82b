//! Command execution for the `nls` tool.
//!
//! [`run`] loads configuration and bootstraps the registry; [`execute`]
//! takes an existing registry so tests can supply in-memory tables.

use std::io::Write;

use camino::Utf8Path;
use log::debug;
use nls::{Bootstrapped, CONFIG_FILE, LocaleId, LocaleRegistry, SharedConfig, bootstrap};

use crate::cli::{CheckArgs, Cli, Command, LookupArgs};
use crate::error::{CliError, Result};

/// Key whose value names a locale in its own language.
pub const LANGUAGE_NAME_KEY: &str = "language-name";

/// Resolve configuration from `--config`, `./nls.toml`, and `--locales-dir`.
///
/// An explicit `--config` path must exist. The default `nls.toml` is only
/// read when present in the working directory.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the file cannot be read or parsed.
pub fn load_config(cli: &Cli) -> Result<SharedConfig> {
    let mut config = match &cli.config {
        Some(path) => SharedConfig::load_from_path(path)?,
        None => {
            let default_path = Utf8Path::new(CONFIG_FILE);
            if default_path.is_file() {
                SharedConfig::load_from_path(default_path)?
            } else {
                debug!(target: "nls::cli", "no {CONFIG_FILE} found; using defaults");
                SharedConfig::default()
            }
        }
    };

    if let Some(directory) = &cli.locales_dir {
        config.locales_dir = Some(directory.clone());
    }

    Ok(config)
}

/// Run the parsed command line, writing results to `out`.
///
/// # Errors
///
/// Returns configuration, table loading, lookup, and consistency failures.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config = load_config(cli)?;
    let Bootstrapped { registry, .. } = bootstrap(&config, cli.locale.as_deref())?;
    execute(&cli.command, &registry, out)
}

/// Execute `command` against an initialised registry.
///
/// # Errors
///
/// See the individual commands.
pub fn execute(command: &Command, registry: &LocaleRegistry, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Lookup(args) => lookup(args, registry, out),
        Command::Locales => list_locales(registry, out),
        Command::Check(args) => check(args, registry, out),
    }
}

fn lookup(args: &LookupArgs, registry: &LocaleRegistry, out: &mut dyn Write) -> Result<()> {
    let value = match &args.target {
        Some(tag) => registry.lookup_in(&args.key, &LocaleId::parse(tag)?)?,
        None => registry.lookup(&args.key)?,
    };
    writeln!(out, "{value}")?;
    Ok(())
}

fn list_locales(registry: &LocaleRegistry, out: &mut dyn Write) -> Result<()> {
    let active = registry.active_locale();

    for locale in registry.supported_locales() {
        let name = registry
            .table(locale)
            .and_then(|table| table.get(LANGUAGE_NAME_KEY))
            .map_or_else(|| locale.to_string(), str::to_owned);

        let mut markers = Vec::new();
        if locale == registry.fallback_locale() {
            markers.push("fallback");
        }
        if *locale == active {
            markers.push("active");
        }
        if locale == registry.host_default_locale() {
            markers.push("host default");
        }

        if markers.is_empty() {
            writeln!(out, "{locale}\t{name}")?;
        } else {
            writeln!(out, "{locale}\t{name} ({})", markers.join(", "))?;
        }
    }

    Ok(())
}

fn check(args: &CheckArgs, registry: &LocaleRegistry, out: &mut dyn Write) -> Result<()> {
    let report = registry.consistency_report();

    writeln!(out, "fallback: {}", report.fallback())?;
    for gaps in report.locales() {
        writeln!(
            out,
            "{}: {} untranslated, {} orphaned",
            gaps.locale(),
            gaps.untranslated().len(),
            gaps.orphaned().len(),
        )?;
        for key in gaps.orphaned() {
            writeln!(out, "  orphaned: {key}")?;
        }
    }

    registry.ensure_keys(args.keys.iter().map(String::as_str))?;

    if report.is_consistent() {
        Ok(())
    } else {
        Err(CliError::OrphanedKeys {
            count: report.orphan_count(),
        })
    }
}
