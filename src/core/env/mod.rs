// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment defaults and their resolution.
//!
//! # Architecture
//!
//! ```text
//! DefaultsSource (dir | embedded | memory)
//!        |  load_layers(tier)
//!        v
//! [EnvSet ...] --layered--> EnvSet
//!                             |
//!        EnvStore ----> Resolver::resolve (Precedence)
//!   (ProcessEnv | MemoryEnv)  |
//!        ^                    v
//!        +------ apply --- ResolvedEnv
//!
//! Expander: "$VAR" / "${VAR}" templates against any EnvStore
//! ```
//!
//! - **Existing values win** by default; [`types::Precedence::PreferDefaults`]
//!   flips that
//! - **Lenient parsing**: malformed lines are skipped, never reported
//! - **No enumeration**: only keys named by the defaults are touched

pub mod container;
pub mod expand;
pub mod resolve;
pub mod set;
pub mod source;
pub mod store;
pub mod tier;
pub mod types;

#[cfg(test)]
mod tests;

/// Captures the current process environment.
///
/// Variables whose name or value is not UTF-8 are left out.
#[must_use]
pub fn current_env() -> container::MemoryEnv {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
