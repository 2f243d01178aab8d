// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Where tier defaults come from.
//!
//! ```text
//! DefaultsSource::load(tier) -> Option<String>   (None = empty tier)
//!   DirSource       <dir>/<tier>.env on disk
//!   EmbeddedSource  env/*.env compiled into the binary
//!   MemorySource    caller-provided strings or bytes
//!
//! load_layers(source, tier) -> Vec<EnvSet>  (one per tier.layers())
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::set::EnvSet;
use super::tier::Tier;
use crate::error::{EnvTierResult, SourceError};

/// Supplies the raw `KEY=VALUE` text of a tier.
pub trait DefaultsSource {
    /// Returns the text for `tier`, or `None` if the source has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the text exists but cannot be read.
    fn load(&self, tier: Tier) -> EnvTierResult<Option<String>>;

    /// Human-readable description for logs and `envtier tiers`.
    fn describe(&self) -> String;
}

/// Loads and parses every layer of `tier`, in fold order.
///
/// Layers the source does not provide come back as empty sets.
///
/// # Errors
///
/// Returns the first error reported by the source.
pub fn load_layers<S: DefaultsSource + ?Sized>(
    source: &S,
    tier: Tier,
) -> EnvTierResult<Vec<EnvSet>> {
    tier.layers()
        .iter()
        .map(|layer| {
            let set = source
                .load(*layer)?
                .map_or_else(EnvSet::new, |text| EnvSet::parse(&text));
            debug!(tier = %layer, vars = set.len(), "loaded defaults layer");
            Ok(set)
        })
        .collect()
}

/// Reads `<dir>/<tier file name>` from disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    /// Opens a defaults directory.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NotADirectory` if `dir` does not exist or is not
    /// a directory.
    pub fn open(dir: impl AsRef<Path>) -> EnvTierResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(SourceError::NotADirectory(dir.display().to_string()).into());
        }
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DefaultsSource for DirSource {
    fn load(&self, tier: Tier) -> EnvTierResult<Option<String>> {
        let path = self.dir.join(tier.file_name());
        match std::fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes).map(Some).map_err(|_| {
                SourceError::InvalidUtf8 {
                    path: path.display().to_string(),
                }
                .into()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SourceError::ReadError {
                path: path.display().to_string(),
                source,
            }
            .into()),
        }
    }

    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }
}

/// Defaults bundled into the binary at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    const COMMON: &'static str = include_str!("../../../env/common.env");
    const DEV: &'static str = include_str!("../../../env/dev.env");
    const STAGE: &'static str = include_str!("../../../env/stage.env");
    const TEST: &'static str = include_str!("../../../env/test.env");
    const E2E_TEST: &'static str = include_str!("../../../env/e2e_test.env");

    #[must_use]
    pub const fn text(tier: Tier) -> &'static str {
        match tier {
            Tier::Common => Self::COMMON,
            Tier::Dev => Self::DEV,
            Tier::Stage => Self::STAGE,
            Tier::Test => Self::TEST,
            Tier::E2eTest => Self::E2E_TEST,
        }
    }
}

impl DefaultsSource for EmbeddedSource {
    fn load(&self, tier: Tier) -> EnvTierResult<Option<String>> {
        Ok(Some(Self::text(tier).to_owned()))
    }

    fn describe(&self) -> String {
        "embedded defaults".to_string()
    }
}

/// Tier text held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tiers: BTreeMap<Tier, String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, tier: Tier, text: impl Into<String>) -> Self {
        self.tiers.insert(tier, text.into());
        self
    }

    /// Adds a tier from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::InvalidUtf8` if `bytes` is not UTF-8.
    pub fn with_bytes(self, tier: Tier, bytes: &[u8]) -> EnvTierResult<Self> {
        let text = std::str::from_utf8(bytes).map_err(|_| SourceError::InvalidUtf8 {
            path: format!("<memory:{tier}>"),
        })?;
        Ok(self.with(tier, text))
    }
}

impl DefaultsSource for MemorySource {
    fn load(&self, tier: Tier) -> EnvTierResult<Option<String>> {
        Ok(self.tiers.get(&tier).cloned())
    }

    fn describe(&self) -> String {
        format!("{} in-memory tier(s)", self.tiers.len())
    }
}
