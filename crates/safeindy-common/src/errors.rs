use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SafeIndyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("transport error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("service.base_url is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: service.base_url is empty"
        );
    }

    #[test]
    fn safeindy_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: SafeIndyError = config_err.into();
        assert!(matches!(err, SafeIndyError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn safeindy_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed");
        let err: SafeIndyError = io_err.into();
        assert!(matches!(err, SafeIndyError::Io(_)));
        assert!(err.to_string().contains("stdin closed"));
    }

    #[test]
    fn safeindy_error_transport_display() {
        let err = SafeIndyError::Transport("invalid base url".into());
        assert_eq!(err.to_string(), "transport error: invalid base url");
    }
}
