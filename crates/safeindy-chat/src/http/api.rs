//! Transport trait implementation for HttpTransport.

use async_trait::async_trait;
use tracing::debug;

use crate::{ChatReply, ChatRequest, Transport, TransportError};

use super::client::HttpTransport;

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        debug!(
            url = %self.config.url,
            has_session = request.session_id.is_some(),
            "chat request"
        );

        let response = self
            .http
            .post(&self.config.url)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &text));
        }

        let body = response.text().await?;
        Self::parse_reply(&body)
    }
}
