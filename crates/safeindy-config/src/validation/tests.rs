use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&SafeIndyConfig::default()).is_ok());
}

#[test]
fn zero_request_timeout_is_rejected() {
    let mut config = SafeIndyConfig::default();
    config.service.request_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("service.request_timeout_secs"));
}

#[test]
fn non_http_base_url_is_rejected() {
    let mut config = SafeIndyConfig::default();
    config.service.base_url = "ftp://safeindy.example".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("service.base_url"));
}

#[test]
fn offline_mode_ignores_base_url() {
    let mut config = SafeIndyConfig::default();
    config.service.offline = true;
    config.service.base_url = String::new();
    assert!(validate(&config).is_ok());
}

#[test]
fn unknown_log_level_is_rejected() {
    let mut config = SafeIndyConfig::default();
    config.logging.level = "loud".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("logging.level"));
}

#[test]
fn log_level_is_case_insensitive() {
    let mut config = SafeIndyConfig::default();
    config.logging.level = "DEBUG".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn all_errors_are_collected() {
    let mut config = SafeIndyConfig::default();
    config.service.connect_timeout_secs = 0;
    config.session.fallback_reply = "   ".into();
    config.session.event_capacity = 0;

    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("service.connect_timeout_secs"));
    assert!(err.contains("session.fallback_reply"));
    assert!(err.contains("session.event_capacity"));
    assert_eq!(err.matches("; ").count(), 2);
}
