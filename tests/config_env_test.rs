// Integration tests for configuration from the process environment
// These mutate environment variables, so each test runs serially.

use flash_chat::config::{AppConfig, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_MOUSE, ENV_THEME, ENV_TICK_MS};
use flash_chat::error::ChatError;
use flash_chat::state::Theme;
use serial_test::serial;
use std::path::PathBuf;
use std::time::Duration;

const ALL_VARS: [&str; 5] = [ENV_THEME, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_TICK_MS, ENV_MOUSE];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.tick_interval(), Duration::from_millis(250));
}

#[test]
#[serial]
fn test_from_env_reads_every_variable() {
    clear_env();
    std::env::set_var(ENV_THEME, "dark");
    std::env::set_var(ENV_LOG_DIR, "/tmp/flash-chat-logs");
    std::env::set_var(ENV_LOG_LEVEL, "debug");
    std::env::set_var(ENV_TICK_MS, "100");
    std::env::set_var(ENV_MOUSE, "0");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.theme, Theme::Dark);
    assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/flash-chat-logs")));
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.tick_ms, 100);
    assert!(!config.mouse);
}

#[test]
#[serial]
fn test_tick_is_clamped_to_minimum() {
    clear_env();
    std::env::set_var(ENV_TICK_MS, "1");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.tick_ms, 16);
}

#[test]
#[serial]
fn test_invalid_value_names_variable() {
    clear_env();
    std::env::set_var(ENV_THEME, "sepia");

    let err = AppConfig::from_env().unwrap_err();
    clear_env();

    match err {
        ChatError::Config { key, .. } => assert_eq!(key, ENV_THEME),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_invalid_tick_and_mouse() {
    clear_env();
    std::env::set_var(ENV_TICK_MS, "fast");
    assert!(AppConfig::from_env().is_err());

    clear_env();
    std::env::set_var(ENV_MOUSE, "maybe");
    assert!(AppConfig::from_env().is_err());
    clear_env();
}
