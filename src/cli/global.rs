// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE        ← Additional config files (can repeat)
//! --log-level N        ← Console verbosity (0-6)
//! --file-log-level N   ← File verbosity (overrides --log-level)
//! --log-file FILE      ← global.log_file override
//! --env-dir DIR        ← resolver.env_dir override
//! --precedence P       ← resolver.precedence override
//!
//! Precedence: CLI flags > ENVTIER_* > --config > envtier.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::core::env::types::Precedence;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Directory holding the `<tier>.env` files.
    #[arg(short = 'd', long = "env-dir", value_name = "DIR")]
    pub env_dir: Option<PathBuf>,

    /// Whether values already in the environment win (existing) or the
    /// tier defaults do (defaults).
    #[arg(short = 'p', long = "precedence", value_name = "PRECEDENCE")]
    pub precedence: Option<Precedence>,

    /// Disables loading of ./envtier.toml, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, config::Value)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level", i64::from(level).into()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level", i64::from(level).into()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file", path.display().to_string().into()));
        }

        if let Some(ref dir) = self.env_dir {
            overrides.push(("resolver.env_dir", dir.display().to_string().into()));
        }

        if let Some(precedence) = self.precedence {
            overrides.push(("resolver.precedence", precedence.as_str().into()));
        }

        overrides
    }
}
