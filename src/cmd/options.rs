// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for envtier.

use crate::config::Config;
use crate::config::loader::ConfigSource;

/// Display current configuration options.
pub fn run_options_command(config: &Config, sources: &[ConfigSource]) {
    for line in config.format_options() {
        println!("{line}");
    }
    if !sources.is_empty() {
        println!();
        println!("loaded from:");
        for (i, source) in sources.iter().enumerate() {
            println!("  {}. {source}", i + 1);
        }
    }
}
