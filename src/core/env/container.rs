// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory environment with copy-on-write semantics.
//!
//! ```text
//! MemoryEnv (copy-on-write)
//! data: Arc<BTreeMap<String, String>>
//! clone shares Arc until set()/remove() (Arc::make_mut)
//! ```
//!
//! Used for dry runs, for building child-process environments and as the fake
//! store in tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::store::EnvStore;

/// A set of environment variables with copy-on-write semantics.
///
/// # Thread Safety
/// `MemoryEnv` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    data: Arc<BTreeMap<String, String>>,
}

impl MemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            data: Arc::new(vars),
        }
    }

    /// Sets a variable, copying the shared data first if needed.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        Arc::make_mut(&mut self.data).insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> &mut Self {
        if self.data.contains_key(key) {
            Arc::make_mut(&mut self.data).remove(key);
        }
        self
    }

    /// Returns all variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        (*self.data).clone()
    }

    /// Returns an iterator over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this instance shares its data with a clone.
    #[cfg(test)]
    pub(crate) fn is_shared(&self) -> bool {
        Arc::strong_count(&self.data) > 1
    }
}

impl EnvStore for MemoryEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }

    fn set(&mut self, key: &str, value: &str) {
        Arc::make_mut(&mut self.data).insert(key.to_owned(), value.to_owned());
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
