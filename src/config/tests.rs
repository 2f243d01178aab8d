// envtier: Tiered Environment Defaults Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use super::loader::{ConfigLoader, ConfigSource};
use crate::core::env::tier::Tier;
use crate::core::env::types::Precedence;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::Info);
    assert_eq!(config.global.file_log_level, LogLevel::Trace);
    assert_eq!(config.global.log_file, None);
    assert_eq!(config.resolver.precedence, Precedence::PreferExisting);
    assert_eq!(config.resolver.default_tier.0, Tier::Dev);
    assert_eq!(config.resolver.env_dir, None);
}

#[test]
fn test_config_parse() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 4
log_json = true

[resolver]
precedence = "defaults"
env_dir = "deploy/env"
default_tier = "e2e-test"
"#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::Debug);
    assert!(config.global.log_json);
    assert_eq!(config.resolver.precedence, Precedence::PreferDefaults);
    assert_eq!(config.resolver.env_dir, Some(PathBuf::from("deploy/env")));
    assert_eq!(config.resolver.default_tier.0, Tier::E2eTest);
    assert_eq!(config.resolver().precedence(), Precedence::PreferDefaults);
}

#[test]
fn test_config_rejects_bad_values() {
    assert!(Config::parse("[resolver]\nprecedence = \"both\"").is_err());
    assert!(Config::parse("[resolver]\ndefault_tier = \"prod\"").is_err());
    assert!(Config::parse("[global]\noutput_log_level = 9").is_err());
}

#[test]
fn test_deny_unknown_fields_in_sections() {
    let result = Config::parse("[resolver]\nunknown_key = 1");
    assert!(result.is_err(), "unknown resolver key should be rejected");
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::parse("[resolver]\ndefault_tier = \"stage\"").unwrap();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    global.file_log_level   = 5
    global.log_file         = <none>
    global.log_json         = false
    global.output_log_level = 3
    resolver.default_tier   = stage
    resolver.env_dir        = <embedded>
    resolver.precedence     = existing
    ");
}

#[test]
fn test_defaults_source_selection() {
    let embedded = Config::default().defaults_source().unwrap();
    assert_eq!(embedded.describe(), "embedded defaults");

    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.resolver.env_dir = Some(dir.path().to_path_buf());
    let source = config.defaults_source().unwrap();
    assert!(source.describe().starts_with("directory "));

    config.resolver.env_dir = Some(dir.path().join("missing"));
    assert!(config.defaults_source().is_err());
}

// --- ConfigLoader Tests ---

#[test]
fn test_config_loader_lists_contributing_sources() {
    let loader = ConfigLoader::new()
        .toml("[global]\nlog_json = true")
        .default_file("/nonexistent/envtier.toml")
        .environment("ENVTIERNOTSET");
    insta::assert_snapshot!(
        loader.sources().iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"),
        @r"
    <inline>
    ENVTIERNOTSET_* environment
    "
    );
}

#[test]
fn test_config_loader_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(file, "[resolver]\nprecedence = \"defaults\"").unwrap();

    let config = ConfigLoader::new().file(file.path()).build().unwrap();
    assert_eq!(config.resolver.precedence, Precedence::PreferDefaults);
}

#[test]
fn test_config_loader_file_not_found() {
    let result = ConfigLoader::new()
        .file("/nonexistent/path/to/envtier.toml")
        .build();
    assert!(result.is_err(), "required missing file should fail");
}

#[test]
fn test_config_loader_later_sources_win() {
    let config = ConfigLoader::new()
        .toml("[resolver]\ndefault_tier = \"stage\"")
        .toml("[resolver]\ndefault_tier = \"test\"")
        .build()
        .unwrap();
    assert_eq!(config.resolver.default_tier.0, Tier::Test);
}

#[test]
fn test_config_loader_environment() {
    // SAFETY: the prefix is unique to this test
    unsafe {
        std::env::set_var("ENVTIERCFGTEST_RESOLVER__PRECEDENCE", "defaults");
        std::env::set_var("ENVTIERCFGTEST_GLOBAL__OUTPUT_LOG_LEVEL", "1");
    }

    let config = ConfigLoader::new()
        .toml("[resolver]\nprecedence = \"existing\"")
        .environment("ENVTIERCFGTEST")
        .build()
        .expect("build should succeed");

    // SAFETY: same keys as above
    unsafe {
        std::env::remove_var("ENVTIERCFGTEST_RESOLVER__PRECEDENCE");
        std::env::remove_var("ENVTIERCFGTEST_GLOBAL__OUTPUT_LOG_LEVEL");
    }

    assert_eq!(config.resolver.precedence, Precedence::PreferDefaults);
    assert_eq!(config.global.output_log_level, LogLevel::Error);
}

#[test]
fn test_config_loader_overrides_win() {
    let loader = ConfigLoader::new()
        .toml("[resolver]\nprecedence = \"existing\"")
        .overrides([("resolver.precedence", ::config::Value::from("defaults"))])
        .expect("override should be accepted");
    assert_eq!(loader.sources().last(), Some(&ConfigSource::CommandLine));

    let config = loader.build().expect("build should succeed");
    assert_eq!(config.resolver.precedence, Precedence::PreferDefaults);
}

#[test]
fn test_config_loader_no_overrides_no_command_line_source() {
    let loader = ConfigLoader::new().overrides(Vec::new()).unwrap();
    assert!(loader.sources().is_empty());
}
