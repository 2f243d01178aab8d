// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command implementation for envtier.
//!
//! ```text
//! current_env() --apply(resolved)--> MemoryEnv --> child process
//! ```
//!
//! The tool's own environment is left untouched; only the child sees the
//! resolved values.

use anyhow::anyhow;
use tracing::info;

use crate::cli::args::RunArgs;
use crate::cmd::{resolve_selected, selected_tier};
use crate::config::Config;
use crate::core::env::container::MemoryEnv;
use crate::core::env::current_env;
use crate::core::env::resolve::apply;
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

/// Builds the environment a child of `envtier run` receives.
///
/// # Errors
///
/// Returns an error if the tier defaults cannot be loaded.
pub fn child_env(args: &RunArgs, config: &Config, base: MemoryEnv) -> Result<MemoryEnv> {
    let mut env = base;
    let resolved = resolve_selected(&args.tier, config, &env)?;
    apply(&resolved, &mut env);
    Ok(env)
}

/// Main handler for run command. Returns the child's exit code.
///
/// # Errors
///
/// Returns an error if the tier cannot be resolved, the program cannot be
/// found or spawned, or it was terminated by a signal.
pub async fn run_run_command(args: &RunArgs, config: &Config) -> Result<i32> {
    let (program, rest) = args
        .command
        .split_first()
        .ok_or_else(|| anyhow!("no program given"))?;

    let env = child_env(args, config, current_env())?;
    info!(
        tier = %selected_tier(&args.tier, config),
        program = %program,
        "running with resolved environment"
    );

    let code = ProcessBuilder::which_in(program, env)?.args(rest).run().await?;
    Ok(code)
}
