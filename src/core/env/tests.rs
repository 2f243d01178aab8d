// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::container::MemoryEnv;
use super::current_env;
use super::expand::Expander;
use super::resolve::{Resolver, apply, layered, resolve};
use super::set::EnvSet;
use super::source::{DefaultsSource, DirSource, EmbeddedSource, MemorySource, load_layers};
use super::store::{EnvStore, ProcessEnv, is_valid_key};
use super::tier::Tier;
use super::types::{Origin, Precedence};
use std::collections::BTreeMap;

fn set(pairs: &[(&str, &str)]) -> EnvSet {
    pairs.iter().copied().collect()
}

fn render(env: &BTreeMap<String, String>) -> String {
    env.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// --- Parsing ---

#[test]
fn test_parse_skips_malformed_lines() {
    let parsed = EnvSet::parse("NOT_A_PAIR\nA=1");
    assert_eq!(parsed, set(&[("A", "1")]));
}

#[test]
fn test_parse_splits_on_first_equals() {
    let parsed = EnvSet::parse("URL=postgres://u:p@h/db?sslmode=require\nEMPTY=");
    assert_eq!(parsed.get("URL"), Some("postgres://u:p@h/db?sslmode=require"));
    assert_eq!(parsed.get("EMPTY"), Some(""));
}

#[test]
fn test_parse_lenient_edge_cases() {
    let text =
        "# comment\n#C=3\n  #INDENTED=1\n\n   \n=no_key\r\nCRLF=yes\r\n  SPACED = kept \nDUP=1\nDUP=2\n";
    let parsed = EnvSet::parse(text);

    assert_eq!(parsed.get("CRLF"), Some("yes"));
    assert_eq!(parsed.get("DUP"), Some("2"));
    assert_eq!(parsed.get("  SPACED "), Some(" kept "));
    assert!(!parsed.contains_key(""));
    assert!(!parsed.contains_key("#C"));
    assert!(!parsed.keys().any(|k| k.trim_start().starts_with('#')));
    assert_eq!(parsed.len(), 3);
}

#[test]
fn test_parse_empty_text() {
    assert!(EnvSet::parse("").is_empty());
    assert!(EnvSet::parse("\n\n").is_empty());
}

// --- Layering ---

#[test]
fn test_layered_last_write_wins() {
    let combined = layered([set(&[("A", "1"), ("B", "2")]), set(&[("B", "3"), ("C", "4")])]);
    assert_eq!(combined, set(&[("A", "1"), ("B", "3"), ("C", "4")]));
}

#[test]
fn test_layered_empty_sequence() {
    assert!(layered(Vec::<EnvSet>::new()).is_empty());
}

// --- Resolution ---

#[test]
fn test_resolve_prefers_existing_values() {
    let store: MemoryEnv = [("TEST_OVERRIDE_VAR", "system_value")].into_iter().collect();
    let defaults = set(&[
        ("TEST_OVERRIDE_VAR", "file_value"),
        ("TEST_NEW_VAR", "new_value"),
    ]);

    let resolved = resolve(&defaults, &store);

    assert_eq!(resolved.get("TEST_OVERRIDE_VAR"), Some("system_value"));
    assert_eq!(resolved.origin("TEST_OVERRIDE_VAR"), Some(Origin::Existing));
    assert_eq!(resolved.get("TEST_NEW_VAR"), Some("new_value"));
    assert_eq!(resolved.origin("TEST_NEW_VAR"), Some(Origin::Default));
    assert_eq!(resolved.len(), 2);
}

#[test]
fn test_resolve_prefer_defaults_ignores_store() {
    let store: MemoryEnv = [("TEST_OVERRIDE_VAR", "system_value")].into_iter().collect();
    let defaults = set(&[("TEST_OVERRIDE_VAR", "file_value")]);

    let resolved = Resolver::with_precedence(Precedence::PreferDefaults).resolve(&defaults, &store);

    assert_eq!(resolved.get("TEST_OVERRIDE_VAR"), Some("file_value"));
    assert_eq!(resolved.count(Origin::Existing), 0);
}

#[test]
fn test_resolve_only_covers_default_keys() {
    let store: MemoryEnv = [("UNRELATED", "x"), ("A", "env")].into_iter().collect();
    let resolved = resolve(&set(&[("A", "default")]), &store);

    assert_eq!(resolved.get("UNRELATED"), None);
    assert_eq!(render(&resolved.to_map()), "A=env");
}

#[test]
fn test_resolve_existing_empty_value_wins() {
    let store: MemoryEnv = [("A", "")].into_iter().collect();
    let resolved = resolve(&set(&[("A", "default")]), &store);
    assert_eq!(resolved.get("A"), Some(""));
}

#[test]
fn test_apply_is_idempotent_and_leaves_other_keys() {
    let mut store: MemoryEnv = [("KEEP", "me"), ("A", "env")].into_iter().collect();
    let defaults = set(&[("A", "default"), ("B", "default")]);

    apply(&resolve(&defaults, &store), &mut store);
    let first = store.to_map();
    apply(&resolve(&defaults, &store), &mut store);

    assert_eq!(first, store.to_map());
    insta::assert_snapshot!(render(&first), @r"
    A=env
    B=default
    KEEP=me
    ");
}

#[test]
fn test_setup_with_memory_source() {
    let source = MemorySource::new()
        .with(Tier::Common, "APP=demo\nPORT=80")
        .with(Tier::Test, "PORT=8080\nDB=test");
    let mut store: MemoryEnv = [("DB", "operator")].into_iter().collect();

    let resolved = Resolver::new()
        .setup(Tier::Test, &source, &mut store)
        .unwrap();

    assert_eq!(resolved.count(Origin::Default), 2);
    assert_eq!(resolved.count(Origin::Existing), 1);
    insta::assert_snapshot!(render(&store.to_map()), @r"
    APP=demo
    DB=operator
    PORT=8080
    ");
}

#[test]
fn test_setup_with_seed_and_scenario_layers() {
    let source = MemorySource::new()
        .with(Tier::Common, "A=common\nB=common")
        .with(Tier::Dev, "B=dev");
    let seed = set(&[("A", "seed"), ("SEED_ONLY", "seed"), ("B", "seed")]);
    let scenario = vec![set(&[("B", "scenario"), ("S", "1")]), set(&[("S", "2")])];
    let mut store = MemoryEnv::new();

    let resolved = Resolver::new()
        .setup_with(Tier::Dev, &source, seed, scenario, &mut store)
        .unwrap();

    assert_eq!(resolved.len(), 4);
    insta::assert_snapshot!(render(&store.to_map()), @r"
    A=common
    B=scenario
    S=2
    SEED_ONLY=seed
    ");
}

#[test]
fn test_setup_with_empty_layers_matches_setup() {
    let source = MemorySource::new().with(Tier::Common, "A=1");
    let mut plain = MemoryEnv::new();
    let mut with = MemoryEnv::new();

    let a = Resolver::new().setup(Tier::Common, &source, &mut plain).unwrap();
    let b = Resolver::new()
        .setup_with(Tier::Common, &source, EnvSet::new(), Vec::new(), &mut with)
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(plain, with);
}

#[test]
fn test_process_env_scenario() {
    // SAFETY: keys are unique to this test; no other test touches them
    unsafe {
        std::env::set_var("TIERTEST_OVERRIDE_VAR", "system_value");
        std::env::remove_var("TIERTEST_NEW_VAR");
    }

    let defaults = set(&[
        ("TIERTEST_OVERRIDE_VAR", "file_value"),
        ("TIERTEST_NEW_VAR", "new_value"),
    ]);
    // SAFETY: the store only touches the TIERTEST_* keys above
    let mut store = unsafe { ProcessEnv::new() };
    apply(&resolve(&defaults, &store), &mut store);

    assert_eq!(
        std::env::var("TIERTEST_OVERRIDE_VAR").as_deref(),
        Ok("system_value")
    );
    assert_eq!(std::env::var("TIERTEST_NEW_VAR").as_deref(), Ok("new_value"));

    // SAFETY: same keys as above
    unsafe {
        std::env::remove_var("TIERTEST_OVERRIDE_VAR");
        std::env::remove_var("TIERTEST_NEW_VAR");
    }
}

#[test]
fn test_process_env_skips_unrepresentable_values() {
    // SAFETY: rejected writes never reach set_var
    let mut store = unsafe { ProcessEnv::new() };
    store.set("TIERTEST_NUL", "a\0b");
    assert_eq!(store.lookup("TIERTEST_NUL"), None);
    assert_eq!(store.lookup(""), None);
    assert!(!is_valid_key("A=B"));
    assert!(is_valid_key("A_B"));
}

// --- Stores ---

#[test]
fn test_memory_env_copy_on_write() {
    let mut env1 = MemoryEnv::new();
    env1.set("KEY1", "value1");

    let mut env2 = env1.clone();
    assert!(env1.is_shared());

    env2.set("KEY2", "value2");

    assert!(!env1.is_shared());
    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), Some("value1"));
    assert_eq!(env2.len(), 2);
}

#[test]
fn test_memory_env_remove() {
    let mut env: MemoryEnv = [("A", "1"), ("B", "2")].into_iter().collect();
    env.remove("A").remove("MISSING");
    assert_eq!(env.iter().collect::<Vec<_>>(), vec![("B", "2")]);
}

#[test]
fn test_current_env() {
    let env = current_env();
    assert!(
        env.get("PATH").is_some() || env.get("Path").is_some(),
        "PATH should exist in current environment"
    );
}

// --- Tiers and sources ---

#[test]
fn test_tier_layers() {
    let chains: Vec<String> = Tier::ALL
        .iter()
        .map(|tier| {
            let layers: Vec<_> = tier.layers().iter().map(Tier::as_str).collect();
            format!("{tier}: {}", layers.join(" -> "))
        })
        .collect();

    insta::assert_snapshot!(chains.join("\n"), @r"
    common: common
    dev: common -> dev
    stage: common -> stage
    test: common -> test
    e2e-test: common -> dev -> stage -> test -> e2e-test
    ");
}

#[test]
fn test_tier_parse() {
    assert_eq!("e2e_test".parse::<Tier>().unwrap(), Tier::E2eTest);
    assert_eq!("E2E-TEST".parse::<Tier>().unwrap(), Tier::E2eTest);
    assert_eq!("Stage".parse::<Tier>().unwrap(), Tier::Stage);
    assert!("prod".parse::<Tier>().is_err());
}

#[test]
fn test_precedence_parse() {
    assert_eq!(
        "existing".parse::<Precedence>().unwrap(),
        Precedence::PreferExisting
    );
    assert_eq!(
        "DEFAULTS".parse::<Precedence>().unwrap(),
        Precedence::PreferDefaults
    );
    assert!("both".parse::<Precedence>().is_err());
    assert_eq!(Precedence::default(), Precedence::PreferExisting);
}

#[test]
fn test_load_layers_missing_tiers_are_empty() {
    let source = MemorySource::new().with(Tier::E2eTest, "ONLY=e2e");
    let layers = load_layers(&source, Tier::E2eTest).unwrap();

    assert_eq!(layers.len(), 5);
    assert!(layers[..4].iter().all(EnvSet::is_empty));
    assert_eq!(layers[4].get("ONLY"), Some("e2e"));
}

#[test]
fn test_memory_source_rejects_invalid_utf8() {
    let err = MemorySource::new()
        .with_bytes(Tier::Dev, &[0x41, 0x3d, 0xff])
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"source error: defaults file '<memory:dev>' is not valid UTF-8");
}

#[test]
fn test_dir_source_reads_files_and_tolerates_missing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("common.env"), "A=common\nB=common").unwrap();
    std::fs::write(dir.path().join("stage.env"), "B=stage").unwrap();

    let source = DirSource::open(dir.path()).unwrap();
    assert_eq!(source.dir(), dir.path());
    assert!(source.load(Tier::Dev).unwrap().is_none());

    let resolved = Resolver::new()
        .resolve_tier(Tier::Stage, &source, &MemoryEnv::new())
        .unwrap();
    assert_eq!(render(&resolved.to_map()), "A=common\nB=stage");
}

#[test]
fn test_dir_source_rejects_non_directory() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert!(DirSource::open(file.path()).is_err());
}

#[test]
fn test_embedded_e2e_tier() {
    let resolved = Resolver::new()
        .resolve_tier(Tier::E2eTest, &EmbeddedSource, &MemoryEnv::new())
        .unwrap();

    assert_eq!(resolved.get("ENV"), Some("e2e"));
    assert_eq!(resolved.get("DB_NAME"), Some("app_test"));
    assert_eq!(resolved.get("HTTP_PORT"), Some("18098"));
    assert_eq!(resolved.get("METRIC_ENABLED"), Some("true"));
    assert_eq!(resolved.len(), 13);
}

// --- Expansion ---

#[test]
fn test_expand_variables() {
    let store: MemoryEnv = [("HOST", "db"), ("PORT", "5432")].into_iter().collect();
    let expander = Expander::new().unwrap();

    let cases = [
        "${HOST}:$PORT",
        "missing=[$NOPE] [${NOPE}]",
        "cost $$5 and $ alone, ${ not closed",
        "[$PORT_SUFFIX] vs ${PORT}_SUFFIX",
    ];
    let out: Vec<_> = cases.iter().map(|c| expander.expand(c, &store)).collect();

    insta::assert_snapshot!(out.join("\n"), @r"
    db:5432
    missing=[] []
    cost $5 and $ alone, ${ not closed
    [] vs 5432_SUFFIX
    ");
}
