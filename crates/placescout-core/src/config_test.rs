use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PLACESCOUT_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.scraper_timeout_secs, 15);
    assert_eq!(cfg.scraper_user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.max_review_candidates, 5);
    assert_eq!(cfg.rate_limit_per_minute, 60);
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = HashMap::new();
    map.insert("PLACESCOUT_ENV", "production");
    map.insert("PLACESCOUT_BIND_ADDR", "127.0.0.1:8080");
    map.insert("PLACESCOUT_SCRAPER_TIMEOUT_SECS", "30");
    map.insert("PLACESCOUT_SCRAPER_USER_AGENT", "placescout-test/0.1");
    map.insert("PLACESCOUT_MAX_REVIEW_CANDIDATES", "10");
    let cfg = build_app_config(lookup_from_map(&map)).expect("overrides should be valid");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.scraper_timeout_secs, 30);
    assert_eq!(cfg.scraper_user_agent, "placescout-test/0.1");
    assert_eq!(cfg.max_review_candidates, 10);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("PLACESCOUT_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACESCOUT_BIND_ADDR"),
        "expected InvalidEnvVar(PLACESCOUT_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_non_numeric_timeout() {
    let mut map = HashMap::new();
    map.insert("PLACESCOUT_SCRAPER_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACESCOUT_SCRAPER_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PLACESCOUT_SCRAPER_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("PLACESCOUT_SCRAPER_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACESCOUT_SCRAPER_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PLACESCOUT_SCRAPER_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_review_candidates() {
    let mut map = HashMap::new();
    map.insert("PLACESCOUT_MAX_REVIEW_CANDIDATES", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACESCOUT_MAX_REVIEW_CANDIDATES"),
        "expected InvalidEnvVar(PLACESCOUT_MAX_REVIEW_CANDIDATES), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_rate_limit() {
    let mut map = HashMap::new();
    map.insert("PLACESCOUT_RATE_LIMIT_PER_MINUTE", "0");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn config_errors_always_name_the_offending_variable() {
    let mut map = HashMap::new();
    map.insert("PLACESCOUT_RATE_LIMIT_PER_MINUTE", "many");
    let err = build_app_config(lookup_from_map(&map)).expect_err("non-numeric rate limit");

    assert_eq!(
        err.to_string(),
        "invalid value for PLACESCOUT_RATE_LIMIT_PER_MINUTE: invalid digit found in string"
    );
    let ConfigError::InvalidEnvVar { var, .. } = err;
    assert_eq!(var, "PLACESCOUT_RATE_LIMIT_PER_MINUTE");
}
