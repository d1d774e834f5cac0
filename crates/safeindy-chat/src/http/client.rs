//! HTTP transport struct and response decoding.

use crate::{ChatReply, TransportError};

use super::config::HttpConfig;

/// Longest slice of an error body kept in a `TransportError::Status`.
const ERROR_BODY_LIMIT: usize = 200;

/// `Transport` that talks to the chat service over HTTP.
pub struct HttpTransport {
    pub(crate) config: HttpConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn status_error(status: reqwest::StatusCode, body: &str) -> TransportError {
        let body = body.chars().take(ERROR_BODY_LIMIT).collect::<String>();
        TransportError::Status(format!("{status}: {body}"))
    }

    pub(crate) fn parse_reply(body: &str) -> Result<ChatReply, TransportError> {
        serde_json::from_str(body).map_err(|e| TransportError::Parse(e.to_string()))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_truncates_body() {
        let body = "x".repeat(1000);
        let err = HttpTransport::status_error(reqwest::StatusCode::BAD_GATEWAY, &body);
        let TransportError::Status(msg) = err else {
            panic!("expected status error");
        };
        assert!(msg.starts_with("502 Bad Gateway: "));
        assert_eq!(msg.len(), "502 Bad Gateway: ".len() + ERROR_BODY_LIMIT);
    }

    #[test]
    fn parse_reply_rejects_html() {
        let err = HttpTransport::parse_reply("<html>oops</html>").unwrap_err();
        assert!(matches!(err, TransportError::Parse(_)));
    }

    #[test]
    fn parse_reply_accepts_service_body() {
        let reply = HttpTransport::parse_reply(
            r#"{"session_id":"abc123","response":{"message":"hi","quick_actions":[]}}"#,
        )
        .unwrap();
        assert_eq!(reply.session_id.as_str(), "abc123");
        assert_eq!(reply.response.quick_actions.map(|a| a.len()), Some(0));
    }
}
