// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!     EnvTierError (16 bytes)
//!             |
//!   +---------+---------+
//!   |         |         |
//!   v         v         v
//! Source   Config   Process
//!  Box      Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Source  ReadError, InvalidUtf8, NotADirectory
//!   Config  ParseError, InvalidValue
//!   Process ExecutableNotFound, SpawnFailed, WaitFailed, Terminated
//! ```
//!
//! Resolution itself never fails: malformed lines and missing keys are not
//! errors. Everything here comes from the edges (files, config, processes).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvTierError`].
pub type EnvTierResult<T> = std::result::Result<T, EnvTierError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
#[derive(Debug, Error)]
pub enum EnvTierError {
    /// Defaults source could not be read.
    #[error("source error: {0}")]
    Source(#[from] Box<SourceError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvTierError {
                fn from(err: $error) -> Self {
                    EnvTierError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    SourceError => Source,
    ConfigError => Config,
    ProcessError => Process,
}

// --- Source Errors ---

/// Errors raised while loading tier defaults.
///
/// A missing tier file is not an error; it is an empty tier.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to read a defaults file.
    #[error("failed to read defaults file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Defaults file is not valid UTF-8.
    #[error("defaults file '{path}' is not valid UTF-8")]
    InvalidUtf8 { path: String },

    /// Configured defaults directory is not a directory.
    #[error("defaults directory '{0}' is not a directory")]
    NotADirectory(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in the resolved PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to wait for the process to exit.
    #[error("failed to wait for process '{command}': {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process was terminated by a signal and has no exit code.
    #[error("process '{command}' was terminated by a signal")]
    Terminated { command: String },
}
