//! Library half of the `nls` command-line tool.
//!
//! The binary in `main.rs` only parses arguments and installs logging; the
//! commands live here so tests can drive them against in-memory registries.

pub mod cli;
pub mod commands;
pub mod error;
