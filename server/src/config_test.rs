use std::sync::Mutex;

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers hold `ENV_LOCK` so no other test touches the environment.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BACKEND_URL");
        std::env::remove_var("BACKEND_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.backend_timeout_secs, DEFAULT_BACKEND_TIMEOUT_SECS);
    assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8081");
        std::env::set_var("BACKEND_URL", "https://api.tigerlink.test/");
        std::env::set_var("BACKEND_TIMEOUT_SECS", "5");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.backend_url, "https://api.tigerlink.test");
    assert_eq!(cfg.backend_timeout_secs, 5);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "http");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_zero_timeout() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("BACKEND_TIMEOUT_SECS", "0");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BACKEND_TIMEOUT_SECS", .. }));

    unsafe { clear_server_env() };
}

#[test]
fn backend_url_requires_http_scheme() {
    assert!(matches!(
        parse_backend_url(Some("10.1.11.26:8080")),
        Err(ConfigError::Invalid { var: "BACKEND_URL", .. })
    ));
    assert_eq!(parse_backend_url(Some(" http://localhost:8080// ")).unwrap(), "http://localhost:8080");
    assert_eq!(parse_backend_url(None).unwrap(), DEFAULT_BACKEND_URL);
}
