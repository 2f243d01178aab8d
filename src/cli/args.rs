// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the tier commands.
//!
//! # Tier Selection
//!
//! ```text
//! -t/--tier TIER      ← explicit tier
//! (absent)            ← resolver.default_tier from config
//! --defaults FILE     ← extra layer on top of the tier (repeatable, last wins)
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::core::env::tier::Tier;

/// Tier selection shared by the tier commands.
#[derive(Debug, Clone, Default, Args)]
pub struct TierArg {
    /// Tier to resolve (common, dev, stage, test, e2e-test).
    #[arg(short = 't', long = "tier", value_name = "TIER")]
    pub tier: Option<Tier>,

    /// Extra `KEY=VALUE` file folded over the tier's files.
    /// Can be specified multiple times; later files win.
    #[arg(long = "defaults", value_name = "FILE", action = clap::ArgAction::Append)]
    pub defaults: Vec<PathBuf>,
}

/// Output format for `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// `KEY=VALUE` lines.
    #[default]
    Env,
    /// A JSON object.
    Json,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub tier: TierArg,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t)]
    pub format: ShowFormat,

    /// Also print whether each value came from the environment or a default.
    #[arg(long)]
    pub origin: bool,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub tier: TierArg,

    /// Program and arguments to run, after `--`.
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    pub command: Vec<String>,
}

/// Arguments for the `expand` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ExpandArgs {
    #[command(flatten)]
    pub tier: TierArg,

    /// File whose `$VAR` and `${VAR}` references are expanded.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
