//! HTTP transport configuration.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Full URL of the chat endpoint.
    pub url: String,
    /// Only the connect phase is bounded here; the session owns the
    /// exchange deadline.
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl HttpConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("safeindy-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_connect_timeout() {
        let config = HttpConfig::new("http://localhost:5000/api/chat")
            .with_connect_timeout(Duration::from_secs(3));
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert!(config.user_agent.starts_with("safeindy-client/"));
    }
}
