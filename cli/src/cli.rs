//! CLI argument definitions for the `nls` tool.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use log::LevelFilter;

/// Look up and check localised strings.
#[derive(Parser, Debug)]
#[command(name = "nls")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Resolve a key in the active locale:\n",
    "    $ nls --locale zh-CN lookup menu-file\n\n",
    "  Resolve a key in a specific locale without switching:\n",
    "    $ nls lookup menu-view --in es-ES\n\n",
    "  List supported locales:\n",
    "    $ nls locales\n\n",
    "  Fail when tables drift or required keys are missing:\n",
    "    $ nls check app-title menu-file\n\n",
    "The active locale comes from --locale, then NLS_LOCALE, then nls.toml, ",
    "then the operating system.",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding `<tag>/messages.ftl` tables.
    #[arg(long, global = true, value_name = "DIR")]
    pub locales_dir: Option<Utf8PathBuf>,

    /// Configuration file [default: ./nls.toml when present].
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Locale to activate, overriding NLS_LOCALE and the configuration.
    #[arg(short, long, global = true, value_name = "TAG")]
    pub locale: Option<String>,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count
    )]
    pub verbosity: u8,
}

impl Cli {
    /// Log filter implied by the `-v` count.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the string for a key.
    Lookup(LookupArgs),

    /// List supported locales.
    Locales,

    /// Report keys that drift between the fallback and secondary tables.
    Check(CheckArgs),
}

/// Arguments for the lookup command.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct LookupArgs {
    /// Message key to resolve.
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Resolve in this locale instead of the active one.
    #[arg(long = "in", value_name = "TAG")]
    pub target: Option<String>,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckArgs {
    /// Keys the fallback table must define.
    #[arg(value_name = "KEY")]
    pub keys: Vec<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
