// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Expand command implementation for envtier.

use anyhow::Context;

use crate::cli::args::ExpandArgs;
use crate::cmd::resolve_selected;
use crate::config::Config;
use crate::core::env::current_env;
use crate::core::env::expand::Expander;
use crate::core::env::resolve::apply;
use crate::error::Result;

/// Main handler for expand command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the tier cannot be
/// resolved.
pub fn run_expand_command(args: &ExpandArgs, config: &Config) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let mut env = current_env();
    let resolved = resolve_selected(&args.tier, config, &env)?;
    apply(&resolved, &mut env);

    print!("{}", Expander::new()?.expand(&text, &env));
    Ok(())
}
