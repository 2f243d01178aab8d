// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Default resolution against an environment store.
//!
//! ```text
//! [EnvSet, EnvSet, ...] --layered()--> EnvSet (last write wins)
//!                                         |
//!                        resolve(defaults, &store)
//!                        PreferExisting: store value if set, else default
//!                        PreferDefaults: default
//!                                         |
//!                                         v
//!                                    ResolvedEnv
//!                                         |
//!                           apply(&resolved, &mut store)
//! ```
//!
//! Keys not named by the defaults are never read, written or removed.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::set::EnvSet;
use super::source::{DefaultsSource, load_layers};
use super::store::EnvStore;
use super::tier::Tier;
use super::types::{Origin, Precedence};
use crate::error::EnvTierResult;

/// A resolved value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVar {
    pub value: String,
    pub origin: Origin,
}

/// Final mapping produced by [`Resolver::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedEnv {
    vars: BTreeMap<String, ResolvedVar>,
}

impl ResolvedEnv {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|v| v.value.as_str())
    }

    #[must_use]
    pub fn origin(&self, key: &str) -> Option<Origin> {
        self.vars.get(key).map(|v| v.origin)
    }

    /// Returns an iterator over resolved entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedVar)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the plain `key -> value` mapping.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.value.clone()))
            .collect()
    }

    /// Number of entries taken from the given origin.
    #[must_use]
    pub fn count(&self, origin: Origin) -> usize {
        self.vars.values().filter(|v| v.origin == origin).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Folds default sets left to right; later sets overwrite earlier ones.
///
/// Environment precedence is not involved at this stage.
#[must_use]
pub fn layered<I>(sets: I) -> EnvSet
where
    I: IntoIterator<Item = EnvSet>,
{
    sets.into_iter().fold(EnvSet::new(), EnvSet::overlay)
}

/// Writes every resolved entry into `store`, overwriting what is there.
pub fn apply<S: EnvStore + ?Sized>(resolved: &ResolvedEnv, store: &mut S) {
    for (key, var) in resolved.iter() {
        debug!(key, origin = %var.origin, "set");
        store.set(key, &var.value);
    }
}

/// Resolves defaults against an environment store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    precedence: Precedence,
}

impl Resolver {
    /// Creates a resolver where existing values win.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            precedence: Precedence::PreferExisting,
        }
    }

    #[must_use]
    pub const fn with_precedence(precedence: Precedence) -> Self {
        Self { precedence }
    }

    #[must_use]
    pub const fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Computes the final value of every key in `defaults`.
    ///
    /// Reads `store` but never modifies it.
    #[must_use]
    pub fn resolve<S: EnvStore + ?Sized>(&self, defaults: &EnvSet, store: &S) -> ResolvedEnv {
        let vars = defaults
            .iter()
            .map(|(key, default)| {
                let existing = match self.precedence {
                    Precedence::PreferExisting => store.lookup(key),
                    Precedence::PreferDefaults => None,
                };
                let var = existing.map_or_else(
                    || ResolvedVar {
                        value: default.to_owned(),
                        origin: Origin::Default,
                    },
                    |value| ResolvedVar {
                        value,
                        origin: Origin::Existing,
                    },
                );
                (key.to_owned(), var)
            })
            .collect();

        ResolvedEnv { vars }
    }

    /// Loads, folds and resolves the layers of `tier` without applying them.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load a layer.
    pub fn resolve_tier<D, S>(&self, tier: Tier, source: &D, store: &S) -> EnvTierResult<ResolvedEnv>
    where
        D: DefaultsSource + ?Sized,
        S: EnvStore + ?Sized,
    {
        self.resolve_tier_with(tier, source, EnvSet::new(), Vec::new(), store)
    }

    /// Like [`Resolver::resolve_tier`], with caller layers around the tier's.
    ///
    /// ```text
    /// seed -> tier layers (common .. tier) -> scenario[0] -> scenario[1] ...
    /// ```
    ///
    /// `seed` sits below the tier files, so a tier file overrides it.
    /// `scenario` sets sit above them and win over every file.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load a layer.
    pub fn resolve_tier_with<D, S>(
        &self,
        tier: Tier,
        source: &D,
        seed: EnvSet,
        scenario: Vec<EnvSet>,
        store: &S,
    ) -> EnvTierResult<ResolvedEnv>
    where
        D: DefaultsSource + ?Sized,
        S: EnvStore + ?Sized,
    {
        let scenario_layers = scenario.len();
        let defaults = layered(
            std::iter::once(seed)
                .chain(load_layers(source, tier)?)
                .chain(scenario),
        );
        let resolved = self.resolve(&defaults, store);
        debug!(
            %tier,
            precedence = %self.precedence,
            scenario_layers,
            defaults = resolved.count(Origin::Default),
            existing = resolved.count(Origin::Existing),
            "resolved tier"
        );
        Ok(resolved)
    }

    /// Resolves `tier` and applies the result to `store`.
    ///
    /// This is the bootstrap entry point: the environment ends up holding
    /// every default of the tier, minus whatever the operator already set
    /// (under [`Precedence::PreferExisting`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load a layer. Nothing is
    /// written to `store` in that case.
    pub fn setup<D, S>(&self, tier: Tier, source: &D, store: &mut S) -> EnvTierResult<ResolvedEnv>
    where
        D: DefaultsSource + ?Sized,
        S: EnvStore + ?Sized,
    {
        self.setup_with(tier, source, EnvSet::new(), Vec::new(), store)
    }

    /// Resolves `tier` with caller layers (see [`Resolver::resolve_tier_with`])
    /// and applies the result to `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load a layer. Nothing is
    /// written to `store` in that case.
    pub fn setup_with<D, S>(
        &self,
        tier: Tier,
        source: &D,
        seed: EnvSet,
        scenario: Vec<EnvSet>,
        store: &mut S,
    ) -> EnvTierResult<ResolvedEnv>
    where
        D: DefaultsSource + ?Sized,
        S: EnvStore + ?Sized,
    {
        let resolved = self.resolve_tier_with(tier, source, seed, scenario, &*store)?;
        apply(&resolved, store);
        Ok(resolved)
    }
}

/// Resolves with the default precedence (existing values win).
#[must_use]
pub fn resolve<S: EnvStore + ?Sized>(defaults: &EnvSet, store: &S) -> ResolvedEnv {
    Resolver::new().resolve(defaults, store)
}
