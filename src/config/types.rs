// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envtier.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ResolverConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::env::tier::Tier;
use crate::core::env::types::Precedence;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file log when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Emit console logs as JSON lines.
    pub log_json: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: None,
            log_json: false,
        }
    }
}

/// Resolver options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Whether operator-set values or defaults win.
    pub precedence: Precedence,
    /// Directory holding `<tier>.env` files; embedded defaults when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_dir: Option<PathBuf>,
    /// Tier used when a command does not name one.
    pub default_tier: DefaultTier,
}

/// Wrapper so the default tier defaults to `dev`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultTier(pub Tier);

impl Default for DefaultTier {
    fn default() -> Self {
        Self(Tier::Dev)
    }
}
