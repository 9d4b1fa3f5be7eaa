//! Unit tests for configuration parsing
//!
//! Tests environment variable parsing and default values.
//!
//! Note: These tests modify global environment variables and must run serially.

use std::time::Duration;

use craven::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use craven::{ConfigError, CravenError, ReportingClient};
use serial_test::serial;

fn clear_env() {
    std::env::remove_var("SENTRY_DSN");
    std::env::remove_var("CRAVEN_TIMEOUT_SECS");
}

#[test]
#[serial]
fn test_config_defaults() {
    clear_env();

    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config.dsn, "");
    assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
}

#[test]
#[serial]
fn test_config_custom_values() {
    std::env::set_var("SENTRY_DSN", "https://pk:sk@example.com/5");
    std::env::set_var("CRAVEN_TIMEOUT_SECS", "5");

    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config.dsn, "https://pk:sk@example.com/5");
    assert_eq!(config.timeout, Duration::from_secs(5));

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_timeout_uses_default() {
    std::env::set_var("CRAVEN_TIMEOUT_SECS", "not-a-number");

    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

    clear_env();
}

#[test]
#[serial]
fn test_config_zero_timeout_rejected() {
    std::env::set_var("CRAVEN_TIMEOUT_SECS", "0");

    let result = ClientConfig::from_env();

    assert_eq!(result, Err(ConfigError::InvalidTimeout));

    clear_env();
}

#[test]
#[serial]
fn test_client_from_env_without_dsn_is_inactive() {
    clear_env();

    let client = ReportingClient::from_env().unwrap();

    assert!(!client.is_active());
}

#[test]
#[serial]
fn test_client_from_env_reports_bad_dsn() {
    std::env::set_var("SENTRY_DSN", "not a dsn");

    let result = ReportingClient::from_env();

    assert!(matches!(result, Err(CravenError::Dsn(_))));

    clear_env();
}

#[test]
#[serial]
fn test_client_from_env_reports_bad_timeout() {
    std::env::set_var("CRAVEN_TIMEOUT_SECS", "0");

    let result = ReportingClient::from_env();

    assert!(matches!(result, Err(CravenError::Config(ConfigError::InvalidTimeout))));

    clear_env();
}

#[test]
fn test_config_builder() {
    let config = ClientConfig::new("https://pk:sk@example.com/5")
        .with_timeout(Duration::from_secs(2))
        .unwrap();

    assert_eq!(config.dsn, "https://pk:sk@example.com/5");
    assert_eq!(config.timeout, Duration::from_secs(2));
    assert_eq!(ClientConfig::default().dsn, "");
}

#[test]
fn test_config_builder_rejects_zero_timeout() {
    let result = ClientConfig::new("https://pk:sk@example.com/5").with_timeout(Duration::ZERO);

    assert_eq!(result, Err(ConfigError::InvalidTimeout));
}
