// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Tiers | Show | Run | Expand
//! ```

use std::process::ExitCode;

use envtier::cli::{self, Command};
use envtier::cmd::expand::run_expand_command;
use envtier::cmd::options::run_options_command;
use envtier::cmd::run::run_run_command;
use envtier::cmd::show::run_show_command;
use envtier::cmd::tiers::run_tiers_command;
use envtier::config::Config;
use envtier::config::loader::{ConfigLoader, ConfigSource};
use envtier::error::Result;
use envtier::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;
use tracing::debug;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let loader = match ConfigLoader::from_global(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let sources = loader.sources().to_vec();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = LogConfig::from_global(&config.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(sources = ?sources, "configuration loaded");

    match dispatch_command(&cli, &config, &sources).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch_command(
    cli: &cli::Cli,
    config: &Config,
    sources: &[ConfigSource],
) -> Result<ExitCode> {
    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
        }
        Some(Command::Options) => run_options_command(config, sources),
        Some(Command::Tiers) => run_tiers_command(config)?,
        Some(Command::Show(args)) => run_show_command(args, config)?,
        Some(Command::Expand(args)) => run_expand_command(args, config)?,
        Some(Command::Run(args)) => {
            let code = run_run_command(args, config).await?;
            return Ok(exit_code(code));
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return Err(anyhow::anyhow!("No command specified"));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// Maps a child exit status onto the range a process can return.
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
