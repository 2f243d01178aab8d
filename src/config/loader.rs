// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Assembling [`Config`] from its layers.
//!
//! ```text
//! ConfigLoader::from_global(&GlobalOptions)
//!   default_file("envtier.toml")   skipped when absent or --no-default-config
//!   file(--config ...)             must exist
//!   environment("ENVTIER")         ENVTIER_<SECTION>__<KEY>
//!   overrides(CLI flags)
//!        |
//!        v
//!   build() --> Config          later layers win
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Config;
use crate::cli::global::GlobalOptions;
use crate::error::{ConfigError, Result};

/// Looked up in the working directory.
pub const DEFAULT_FILE: &str = "envtier.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ENVTIER";

/// A layer that contributed to the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// The optional file in the working directory.
    DefaultFile(PathBuf),
    /// A file named with `--config`.
    File(PathBuf),
    /// TOML text handed over directly.
    Inline,
    /// `<PREFIX>_*` environment variables.
    Environment(String),
    /// Command-line flags.
    CommandLine,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultFile(path) => write!(f, "{} (default)", path.display()),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline => f.write_str("<inline>"),
            Self::Environment(prefix) => write!(f, "{prefix}_* environment"),
            Self::CommandLine => f.write_str("command line"),
        }
    }
}

/// Ordered configuration layers for envtier.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            sources: Vec::new(),
        }
    }

    /// The layers `envtier` itself reads, in precedence order.
    ///
    /// # Errors
    ///
    /// Returns an error if a command-line override cannot be recorded.
    pub fn from_global(global: &GlobalOptions) -> Result<Self> {
        let mut loader = Self::new();
        if !global.no_default_config {
            loader = loader.default_file(DEFAULT_FILE);
        }
        for path in &global.configs {
            loader = loader.file(path);
        }
        loader
            .environment(ENV_PREFIX)
            .overrides(global.to_config_overrides())
    }

    /// Adds a TOML file that is skipped when it does not exist.
    #[must_use]
    pub fn default_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.is_file() {
            self.sources.push(ConfigSource::DefaultFile(path.to_path_buf()));
        }
        self
    }

    /// Adds a TOML file; `build()` fails if it is missing or invalid.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.sources.push(ConfigSource::File(path.to_path_buf()));
        self
    }

    /// Adds TOML text.
    #[must_use]
    pub fn toml(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables at this point in the order.
    #[must_use]
    pub fn environment(mut self, prefix: &str) -> Self {
        self.builder = self.builder.add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
        self.sources.push(ConfigSource::Environment(prefix.to_string()));
        self
    }

    /// Applies `(key, value)` overrides on top of every other layer.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is not a valid configuration path.
    pub fn overrides<'a, I>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, config::Value)>,
    {
        let mut any = false;
        for (key, value) in pairs {
            self.builder = self.builder.set_override(key, value).map_err(|e| {
                ConfigError::InvalidValue {
                    section: "cli".to_string(),
                    key: key.to_string(),
                    message: e.to_string(),
                }
            })?;
            any = true;
        }
        if any {
            self.sources.push(ConfigSource::CommandLine);
        }
        Ok(self)
    }

    /// Layers that contributed so far, lowest precedence first.
    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Merges every layer into a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, or the merged values do not fit [`Config`].
    pub fn build(self) -> Result<Config> {
        let origin = self
            .sources
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let config = self
            .builder
            .build()?
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError {
                path: origin,
                message: e.to_string(),
            })?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
