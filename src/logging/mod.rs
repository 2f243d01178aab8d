// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostics for envtier, on stderr and optionally a file.
//!
//! ```text
//! [global] output_log_level, file_log_level, log_file, log_json
//!        |
//!        v
//!   LogConfig::from_global
//!        |
//!        v
//!   init_logging --> registry + Vec<BoxedLayer>
//!                      stderr  text | json, per-layer EnvFilter
//!                      file    append, non_blocking, no ANSI
//!        |
//!        v
//!   LogGuard (flushes the file writer on drop)
//! ```
//!
//! stdout belongs to `show` and `expand`; nothing here writes to it.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::types::GlobalConfig;
use crate::error::{ConfigError, Result};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Verbosity, configured as a number from 0 to 6.
///
/// Levels 1-5 only raise envtier's own output; dependencies stay at `warn`
/// until [`LogLevel::Dump`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum LogLevel {
    Silent = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    /// Every applied variable.
    Debug = 4,
    /// Skipped lines while parsing defaults.
    Trace = 5,
    /// Trace for dependencies as well.
    Dump = 6,
}

impl LogLevel {
    const ALL: [Self; 7] = [
        Self::Silent,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
        Self::Dump,
    ];

    #[must_use]
    pub fn from_u8(level: u8) -> Option<Self> {
        Self::ALL.get(usize::from(level)).copied()
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// `EnvFilter` directive for this level.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Error => "envtier=error,warn",
            Self::Warn => "warn",
            Self::Info => "envtier=info,warn",
            Self::Debug => "envtier=debug,warn",
            Self::Trace => "envtier=trace,warn",
            Self::Dump => "trace",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::new(self.directive())
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(value).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("log level must be 0-6, got {value}"),
        })
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.as_u8()
    }
}

/// Where and how much to log.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(default)]
    pub console: LogLevel,
    #[builder(default = LogLevel::Trace)]
    pub file: LogLevel,
    pub log_file: Option<PathBuf>,
    #[builder(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    /// Takes the `[global]` section of the tool configuration.
    #[must_use]
    pub fn from_global(global: &GlobalConfig) -> Self {
        Self::builder()
            .console(global.output_log_level)
            .file(global.file_log_level)
            .maybe_log_file(global.log_file.clone())
            .json(global.log_json)
            .build()
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

fn console_layer(config: &LogConfig) -> BoxedLayer {
    let show_target = config.console >= LogLevel::Debug;
    if config.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(show_target)
            .with_filter(config.console.filter())
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(show_target)
            .with_filter(config.console.filter())
            .boxed()
    }
}

fn file_layer(path: &Path, level: LogLevel) -> Result<(BoxedLayer, WorkerGuard)> {
    let name = path
        .file_name()
        .with_context(|| format!("log file {} has no file name", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(level.filter())
        .boxed();
    Ok((layer, guard))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
///
/// # Example
///
/// ```no_run
/// use envtier::logging::{LogConfig, LogLevel, init_logging};
///
/// let config = LogConfig::builder()
///     .console(LogLevel::Debug)
///     .log_file("envtier.log".into())
///     .build();
/// let _guard = init_logging(&config)?;
/// tracing::debug!("logging ready");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let mut layers = vec![console_layer(config)];
    let file_guard = match &config.log_file {
        Some(path) => {
            let (layer, guard) = file_layer(path, config.file)?;
            layers.push(layer);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("failed to install the log subscriber")?;

    Ok(LogGuard { _file: file_guard })
}
