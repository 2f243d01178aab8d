// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Default tiers and their layer chains.
//!
//! ```text
//! common   = common
//! dev      = common -> dev
//! stage    = common -> stage
//! test     = common -> test
//! e2e-test = common -> dev -> stage -> test -> e2e-test
//! ```
//!
//! Layers fold left to right; a later layer wins on shared keys.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A named layer of default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Common,
    Dev,
    Stage,
    Test,
    #[serde(alias = "e2e_test")]
    E2eTest,
}

impl Tier {
    pub const ALL: [Self; 5] = [
        Self::Common,
        Self::Dev,
        Self::Stage,
        Self::Test,
        Self::E2eTest,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Dev => "dev",
            Self::Stage => "stage",
            Self::Test => "test",
            Self::E2eTest => "e2e-test",
        }
    }

    /// File holding this tier's own defaults.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Common => "common.env",
            Self::Dev => "dev.env",
            Self::Stage => "stage.env",
            Self::Test => "test.env",
            Self::E2eTest => "e2e_test.env",
        }
    }

    /// Tiers folded, in order, to build this tier's defaults.
    #[must_use]
    pub const fn layers(&self) -> &'static [Self] {
        match self {
            Self::Common => &[Self::Common],
            Self::Dev => &[Self::Common, Self::Dev],
            Self::Stage => &[Self::Common, Self::Stage],
            Self::Test => &[Self::Common, Self::Test],
            Self::E2eTest => &Self::ALL,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tier {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "common" => Ok(Self::Common),
            "dev" => Ok(Self::Dev),
            "stage" => Ok(Self::Stage),
            "test" => Ok(Self::Test),
            "e2e-test" => Ok(Self::E2eTest),
            _ => Err(ConfigError::InvalidValue {
                section: "resolver".to_string(),
                key: "tier".to_string(),
                message: format!(
                    "expected one of 'common', 'dev', 'stage', 'test', 'e2e-test', got '{s}'"
                ),
            }),
        }
    }
}
