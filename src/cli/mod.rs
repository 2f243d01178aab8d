// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envtier using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envtier [global options] <command>
//! version
//! options
//! tiers
//! show   [-t TIER] [--format env|json] [--origin]
//! run    [-t TIER] -- PROGRAM [ARGS...]
//! expand [-t TIER] FILE
//! ```

pub mod args;
pub mod global;


use crate::cli::args::{ExpandArgs, RunArgs, ShowArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Tiered environment defaults resolver.
///
/// Fills in environment variables a deployment tier expects, without
/// clobbering the ones the operator already set.
#[derive(Debug, Parser)]
#[command(
    name = "envtier",
    author,
    version,
    about = "Tiered environment defaults resolver",
    long_about = "envtier Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Resolves the default environment of a deployment tier against\n\
                  the current environment. Values already set win over defaults\n\
                  unless --precedence defaults is given.\n\n\
                  `envtier show -t stage` prints the resolved set, and\n\
                  `envtier run -t test -- cargo test` runs a program with it.",
    after_help = "DEFAULTS:\n\n\
                  Each tier folds the env files of its layers from left to right,\n\
                  the last file to define a key wins. Use `envtier tiers` to list\n\
                  the layers. Files are read from --env-dir (or resolver.env_dir)\n\
                  when given, otherwise the defaults built into the binary are used."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the tiers, their layers and where the defaults come from.
    Tiers,

    /// Prints the resolved environment of a tier.
    Show(ShowArgs),

    /// Runs a program with the resolved environment of a tier.
    Run(RunArgs),

    /// Expands `$VAR` references in a file against the resolved environment.
    Expand(ExpandArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
