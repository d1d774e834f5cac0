//! SafeIndy client configuration.
//!
//! TOML-based configuration with full validation. All sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use safeindy_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.service.chat_url());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LoggingConfig, SafeIndyConfig, ServiceConfig, SessionConfig};

use std::path::Path;

use safeindy_common::ConfigError;

/// Environment variable that overrides `service.base_url`.
pub const URL_ENV_VAR: &str = "SAFEINDY_URL";

/// Load config from the platform default path, apply environment
/// overrides, and validate the result.
pub fn load_config() -> Result<SafeIndyConfig, ConfigError> {
    let mut config = toml_loader::load_default()?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Same as [`load_config`] but reads an explicit file.
pub fn load_config_from(path: &Path) -> Result<SafeIndyConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let mut config = toml_loader::load_from_path(path)?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Apply `SAFEINDY_URL` on top of whatever the file said.
pub fn apply_env_overrides(config: &mut SafeIndyConfig) {
    if let Ok(url) = std::env::var(URL_ENV_VAR) {
        let url = url.trim();
        if !url.is_empty() {
            tracing::debug!("service.base_url overridden by {URL_ENV_VAR}");
            config.service.base_url = url.to_string();
        }
    }
}
