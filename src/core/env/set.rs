// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsed `KEY=VALUE` default sets.
//!
//! ```text
//! "A=1\nNOT_A_PAIR\n# note\nB=x=y"
//!        |
//!        v  split on first '='
//! EnvSet { A: "1", B: "x=y" }
//! ```
//!
//! Lines without `=` are skipped silently, as are blank lines, `#` comments
//! and lines with an empty key. Keys and values are taken verbatim.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::trace;

/// An immutable set of default environment values, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvSet {
    vars: BTreeMap<String, String>,
}

impl EnvSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Parses a newline-delimited `KEY=VALUE` block.
    ///
    /// Never fails. When a key repeats, the last line wins.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut vars = BTreeMap::new();

        for (index, raw) in text.split('\n').enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match line.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    vars.insert(key.to_owned(), value.to_owned());
                }
                _ => trace!(line = index + 1, "skipping malformed defaults line"),
            }
        }

        Self { vars }
    }

    /// Returns the set with `other` laid on top; `other` wins on shared keys.
    #[must_use]
    pub fn overlay(mut self, other: Self) -> Self {
        self.vars.extend(other.vars);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Returns an iterator over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.vars
    }
}

impl From<BTreeMap<String, String>> for EnvSet {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for EnvSet {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}
