// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   options, tiers, show, run, expand
//! ```

pub mod expand;
pub mod options;
pub mod run;
pub mod show;
pub mod tiers;

use anyhow::Context;

use crate::cli::args::TierArg;
use crate::config::Config;
use crate::core::env::resolve::ResolvedEnv;
use crate::core::env::set::EnvSet;
use crate::core::env::store::EnvStore;
use crate::core::env::tier::Tier;
use crate::error::Result;

/// Tier named on the command line, or the configured default.
#[must_use]
pub fn selected_tier(arg: &TierArg, config: &Config) -> Tier {
    arg.tier.unwrap_or(config.resolver.default_tier.0)
}

/// Reads the `--defaults` files, in the order given.
///
/// # Errors
///
/// Returns an error if a file cannot be read or is not UTF-8.
pub fn scenario_layers(arg: &TierArg) -> Result<Vec<EnvSet>> {
    arg.defaults
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read defaults file {}", path.display()))?;
            Ok(EnvSet::parse(&text))
        })
        .collect()
}

/// Resolves the selected tier, plus any `--defaults` files, against `store`
/// with the configured source and precedence.
///
/// # Errors
///
/// Returns an error if the defaults source or a `--defaults` file cannot be
/// opened or read.
pub fn resolve_selected<S: EnvStore + ?Sized>(
    arg: &TierArg,
    config: &Config,
    store: &S,
) -> Result<ResolvedEnv> {
    let tier = selected_tier(arg, config);
    let source = config.defaults_source()?;
    let scenario = scenario_layers(arg)?;
    let resolved = config.resolver().resolve_tier_with(
        tier,
        &*source,
        EnvSet::new(),
        scenario,
        store,
    )?;
    Ok(resolved)
}
