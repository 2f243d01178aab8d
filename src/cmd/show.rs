// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Show command implementation for envtier.
//!
//! ```text
//! --format env            KEY=VALUE
//! --format env --origin   KEY=VALUE # existing
//! --format json           {"KEY": "VALUE"}
//! --format json --origin  {"KEY": {"value": "VALUE", "origin": "default"}}
//! ```

use crate::cli::args::{ShowArgs, ShowFormat};
use crate::cmd::resolve_selected;
use crate::config::Config;
use crate::core::env::current_env;
use crate::core::env::resolve::ResolvedEnv;
use crate::error::Result;

/// Renders `resolved` as `KEY=VALUE` lines.
#[must_use]
pub fn format_env(resolved: &ResolvedEnv, with_origin: bool) -> Vec<String> {
    resolved
        .iter()
        .map(|(key, var)| {
            if with_origin {
                format!("{key}={} # {}", var.value, var.origin)
            } else {
                format!("{key}={}", var.value)
            }
        })
        .collect()
}

/// Renders `resolved` as a pretty-printed JSON object.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_json(resolved: &ResolvedEnv, with_origin: bool) -> Result<String> {
    let json = if with_origin {
        serde_json::to_string_pretty(resolved)?
    } else {
        serde_json::to_string_pretty(&resolved.to_map())?
    };
    Ok(json)
}

/// Main handler for show command.
///
/// # Errors
///
/// Returns an error if the tier defaults cannot be loaded.
pub fn run_show_command(args: &ShowArgs, config: &Config) -> Result<()> {
    let resolved = resolve_selected(&args.tier, config, &current_env())?;
    match args.format {
        ShowFormat::Env => {
            for line in format_env(&resolved, args.origin) {
                println!("{line}");
            }
        }
        ShowFormat::Json => println!("{}", format_json(&resolved, args.origin)?),
    }
    Ok(())
}
