use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where and how to reach the chat service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Scheme, host and port of the chat service.
    pub base_url: String,
    /// Path of the chat endpoint, appended to `base_url`.
    pub chat_path: String,
    pub connect_timeout_secs: u32,
    /// Upper bound for one whole exchange. Expiry is treated as a failed
    /// exchange.
    pub request_timeout_secs: u32,
    /// Answer locally with the built-in assistant instead of the network.
    pub offline: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            chat_path: "/api/chat".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            offline: false,
        }
    }
}

impl ServiceConfig {
    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.chat_path.starts_with('/') {
            format!("{base}{}", self.chat_path)
        } else {
            format!("{base}/{}", self.chat_path)
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_secs))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.request_timeout_secs))
    }
}
