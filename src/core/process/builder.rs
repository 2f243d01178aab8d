// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new / which_in(program, env)
//!  • args / env
//! ```
//!
//! The child always gets exactly the environment it is given: when an env is
//! set, the parent's environment is cleared first.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::core::env::container::MemoryEnv;
use crate::error::ProcessError;

/// Builder for configuring and running a process.
#[derive(Debug)]
pub struct ProcessBuilder {
    /// Path to the executable
    program: PathBuf,
    /// Command-line arguments
    args: Vec<String>,
    /// Full environment of the child
    env: Option<MemoryEnv>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// A bare name is looked up in the parent's PATH when the process spawns.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            env: None,
        }
    }

    /// Creates a builder after locating `program` on the `PATH` of `env`.
    ///
    /// The child runs with `env` as its whole environment, so the lookup uses
    /// the resolved `PATH`, not the parent's.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if the executable is not
    /// found.
    pub fn which_in(program: &str, env: MemoryEnv) -> std::result::Result<Self, ProcessError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        let path = env.get("PATH").or_else(|| env.get("Path"));

        which::which_in(program, path, cwd).map_or_else(
            |_| {
                Err(ProcessError::ExecutableNotFound {
                    name: program.to_string(),
                })
            },
            |resolved| Ok(Self::new(resolved).env(env)),
        )
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string_lossy().into_owned());
        }
        self
    }

    /// Sets the complete environment of the process.
    #[must_use]
    pub fn env(mut self, env: MemoryEnv) -> Self {
        self.env = Some(env);
        self
    }

    // Getters for field access within the process module

    /// Returns a reference to the program path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    pub(super) fn args_slice(&self) -> &[String] {
        &self.args
    }

    pub(super) const fn environment(&self) -> Option<&MemoryEnv> {
        self.env.as_ref()
    }
}
