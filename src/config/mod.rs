// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envtier.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envtier.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. ENVTIER_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVTIER_GLOBAL__OUTPUT_LOG_LEVEL=4   → global.output_log_level = 4
//! ENVTIER_RESOLVER__PRECEDENCE=defaults → resolver.precedence = "defaults"
//! ENVTIER_RESOLVER__ENV_DIR=./env       → resolver.env_dir = "./env"
//! ```
//!
//! [`ConfigLoader::from_global`] assembles these layers from the parsed
//! global options.
//!
//! This is the tool's own configuration. The tier defaults it resolves come
//! from a [`DefaultsSource`].

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::env::resolve::Resolver;
use crate::core::env::source::{DefaultsSource, DirSource, EmbeddedSource};
use crate::error::{EnvTierResult, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, ResolverConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Resolver options.
    pub resolver: ResolverConfig,
}

impl Config {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        ConfigLoader::new().toml(content).build()
    }

    /// Resolver configured with this precedence.
    #[must_use]
    pub const fn resolver(&self) -> Resolver {
        Resolver::with_precedence(self.resolver.precedence)
    }

    /// Opens the configured defaults source.
    ///
    /// # Errors
    ///
    /// Returns an error if `resolver.env_dir` is set but is not a directory.
    pub fn defaults_source(&self) -> EnvTierResult<Box<dyn DefaultsSource>> {
        match &self.resolver.env_dir {
            Some(dir) => Ok(Box::new(DirSource::open(dir)?)),
            None => Ok(Box::new(EmbeddedSource)),
        }
    }

    /// Format configuration options for display, one `key = value` per line.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file",
            self.global
                .log_file
                .as_ref()
                .map_or_else(|| "<none>".to_string(), |p| p.display().to_string()),
        );
        options.insert("global.log_json", self.global.log_json.to_string());
        options.insert("resolver.precedence", self.resolver.precedence.to_string());
        options.insert(
            "resolver.env_dir",
            self.resolver
                .env_dir
                .as_ref()
                .map_or_else(|| "<embedded>".to_string(), |p| p.display().to_string()),
        );
        options.insert(
            "resolver.default_tier",
            self.resolver.default_tier.0.to_string(),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
