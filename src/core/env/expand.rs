// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell-style variable expansion of text templates.
//!
//! ```text
//! "${HOST}:$PORT/$$x$"  with HOST=db PORT=5432
//!            |
//!            v
//! "db:5432/$x$"
//! ```
//!
//! Unset variables expand to the empty string. A `$` that does not start a
//! variable reference is kept as is.

use anyhow::Context;
use regex::{Captures, Regex};

use super::store::EnvStore;
use crate::error::Result;

/// Expands `$NAME`, `${NAME}` and `$$` against an environment store.
#[derive(Debug, Clone)]
pub struct Expander {
    pattern: Regex,
}

impl Expander {
    /// Compiles the variable pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"\$(?:(\$)|\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
            .context("failed to compile expansion regex")?;
        Ok(Self { pattern })
    }

    /// Returns `text` with every variable reference substituted.
    #[must_use]
    pub fn expand<S: EnvStore + ?Sized>(&self, text: &str, store: &S) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| {
                if caps.get(1).is_some() {
                    return "$".to_string();
                }
                caps.get(2)
                    .or_else(|| caps.get(3))
                    .and_then(|name| store.lookup(name.as_str()))
                    .unwrap_or_default()
            })
            .into_owned()
    }
}
