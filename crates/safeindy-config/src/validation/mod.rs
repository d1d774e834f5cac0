//! Full configuration validation.
//!
//! Checks numeric ranges, URLs, and enumerated values, collecting every
//! problem into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::{SafeIndyConfig, LOG_LEVELS};
use safeindy_common::ConfigError;

use helpers::{validate_non_empty, validate_one_of, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SafeIndyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_service(&mut errors, config);
    validate_session(&mut errors, config);
    validate_one_of(&mut errors, "logging.level", &config.logging.level, LOG_LEVELS);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_service(errors: &mut Vec<String>, config: &SafeIndyConfig) {
    let service = &config.service;
    if !service.offline {
        validate_non_empty(errors, "service.base_url", &service.base_url);
        let url = service.base_url.trim();
        if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!(
                "service.base_url = {url:?} must start with http:// or https://"
            ));
        }
    }
    validate_range(
        errors,
        "service.connect_timeout_secs",
        service.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "service.request_timeout_secs",
        service.request_timeout_secs,
        1,
        300,
    );
}

fn validate_session(errors: &mut Vec<String>, config: &SafeIndyConfig) {
    let session = &config.session;
    validate_non_empty(errors, "session.greeting_action", &session.greeting_action);
    validate_non_empty(errors, "session.fallback_reply", &session.fallback_reply);
    validate_range(
        errors,
        "session.event_capacity",
        session.event_capacity,
        1,
        4096,
    );
}
