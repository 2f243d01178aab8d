// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment resolution and process launch.
//!
//! ```text
//!            core
//!             |
//!       +-----+------+
//!       v            v
//!      env        process
//!       |            |
//!   EnvSet        ProcessBuilder
//!   Resolver      which() over resolved PATH
//!   Tier/Source   exit code passthrough
//! ```

pub mod env;
pub mod process;
