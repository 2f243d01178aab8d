// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launching a program inside a resolved environment.
//!
//! ```text
//! ProcessBuilder::which_in("app", env)
//!   .args()
//!   .run()
//!       --> tokio::process::Command (env_clear + env, inherited stdio)
//!           Ctrl-C reaches the child; we keep waiting for it
//!       --> ExitStatus -> exit code
//! ```

pub mod builder;
mod runner;
