// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()  args, env_clear + env, inherited stdio
//!   |
//!   v
//! spawn() --> wait, riding out Ctrl-C (the child gets it too)
//!   |
//!   v
//! exit code (no code => Terminated)
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::ProcessBuilder;
use crate::error::{EnvTierResult, ProcessError};

impl ProcessBuilder {
    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process with inherited stdio and waits for it.
    ///
    /// Returns the child's exit code; a non-zero code is not an error here.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The child is killed by a signal and has no exit code.
    pub async fn run(self) -> EnvTierResult<i32> {
        let cmd_line = self.command_line();

        debug!(cmd = %cmd_line, "exec");

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
        trace!(pid = ?child.id(), "spawned");

        let status = tokio::select! {
            status = child.wait() => status,
            interrupted = tokio::signal::ctrl_c() => {
                if interrupted.is_ok() {
                    debug!("interrupt received, waiting for child to exit");
                }
                child.wait().await
            }
        }
        .map_err(|source| ProcessError::WaitFailed {
            command: cmd_line.clone(),
            source,
        })?;

        let code = status
            .code()
            .ok_or(ProcessError::Terminated { command: cmd_line })?;
        trace!(exit_code = code, "completed");
        Ok(code)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(env) = self.environment() {
            command.env_clear();
            command.envs(env.iter());
        }

        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        command
    }
}
