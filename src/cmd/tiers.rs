// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tiers command implementation for envtier.

use crate::config::Config;
use crate::core::env::source::DefaultsSource;
use crate::core::env::tier::Tier;
use crate::error::Result;

/// One line per tier: name, own file, then the layer chain.
#[must_use]
pub fn format_tiers(source: &dyn DefaultsSource) -> Vec<String> {
    let mut lines = vec![format!("defaults: {}", source.describe())];
    lines.extend(Tier::ALL.iter().map(|tier| {
        let chain: Vec<&str> = tier.layers().iter().map(Tier::as_str).collect();
        format!(
            "{:<8}  {:<12}  {}",
            tier.as_str(),
            tier.file_name(),
            chain.join(" > ")
        )
    }));
    lines
}

/// Main handler for tiers command.
///
/// # Errors
///
/// Returns an error if the configured defaults directory is invalid.
pub fn run_tiers_command(config: &Config) -> Result<()> {
    let source = config.defaults_source()?;
    for line in format_tiers(&*source) {
        println!("{line}");
    }
    Ok(())
}
