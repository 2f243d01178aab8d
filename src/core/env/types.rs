// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment resolution.
//!
//! ```text
//! Precedence: PreferExisting (default) | PreferDefaults
//! Origin:     Existing | Default
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which side wins when a key is both in the store and in the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Precedence {
    /// A value already present in the environment is kept (default)
    #[default]
    #[serde(rename = "existing")]
    PreferExisting,
    /// Defaults are applied unconditionally
    #[serde(rename = "defaults")]
    PreferDefaults,
}

impl Precedence {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PreferExisting => "existing",
            Self::PreferDefaults => "defaults",
        }
    }
}

impl std::fmt::Display for Precedence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Precedence {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "existing" => Ok(Self::PreferExisting),
            "defaults" => Ok(Self::PreferDefaults),
            _ => Err(ConfigError::InvalidValue {
                section: "resolver".to_string(),
                key: "precedence".to_string(),
                message: format!("expected 'existing' or 'defaults', got '{s}'"),
            }),
        }
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// The value was already set in the environment store
    Existing,
    /// The value was taken from the defaults set
    Default,
}

impl Origin {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Existing => "existing",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
