// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment store capability.
//!
//! ```text
//! EnvStore { lookup(key), set(key, value) }
//!   ProcessEnv  -> std::env (process-wide, unsynchronized)
//!   MemoryEnv   -> copy-on-write map (see container.rs)
//! ```

use tracing::warn;

/// Get/set access to an environment by key.
///
/// The resolver only ever touches keys it was given defaults for; stores are
/// never enumerated or cleared.
pub trait EnvStore {
    /// Returns the current value of `key`, or `None` when unset.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`, replacing any existing value.
    fn set(&mut self, key: &str, value: &str);
}

impl<S: EnvStore + ?Sized> EnvStore for &mut S {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// The environment of the running process.
///
/// Only obtainable through the `unsafe` [`ProcessEnv::new`], since writing
/// the process environment races with any other thread reading it.
///
/// ```compile_fail
/// let env = envtier::core::env::store::ProcessEnv::new();
/// ```
#[derive(Debug)]
pub struct ProcessEnv {
    _private: (),
}

impl ProcessEnv {
    /// Creates a handle that reads and writes the process environment.
    ///
    /// # Safety
    ///
    /// While the returned value is alive, no other thread may read or write
    /// the process environment (`std::env::var`, `set_var`, `remove_var`, or
    /// C code calling `getenv`/`setenv`). In practice: create it on the main
    /// thread before spawning threads or starting an async runtime, and drop
    /// it once the environment is set up.
    ///
    /// ```
    /// use envtier::core::env::resolve::Resolver;
    /// use envtier::core::env::source::EmbeddedSource;
    /// use envtier::core::env::store::ProcessEnv;
    /// use envtier::core::env::tier::Tier;
    ///
    /// // SAFETY: single-threaded at this point
    /// let mut env = unsafe { ProcessEnv::new() };
    /// Resolver::new().setup(Tier::Dev, &EmbeddedSource, &mut env)?;
    /// # Ok::<(), envtier::error::EnvTierError>(())
    /// ```
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

/// Whether the OS can hold `key` as an environment variable name.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0'])
}

/// Whether the OS can hold `value` as an environment variable value.
#[must_use]
pub fn is_valid_value(value: &str) -> bool {
    !value.contains('\0')
}

impl EnvStore for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        if !is_valid_key(key) {
            return None;
        }
        // Non-UTF-8 values count as unset
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if !is_valid_key(key) || !is_valid_value(value) {
            warn!(key = %key.escape_debug(), "skipping variable the OS environment cannot hold");
            return;
        }
        // SAFETY: whoever created this ProcessEnv promised that no other
        // thread touches the environment while it is alive.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}
