//! JSON bodies exchanged with the chat endpoint.

use safeindy_common::SessionToken;
use serde::{Deserialize, Serialize};

use crate::turn::QuickAction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// `null` until the service has issued a token.
    pub session_id: Option<SessionToken>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub session_id: SessionToken,
    pub response: ReplyBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyBody {
    pub message: String,
    /// Absent and `null` both mean "no shortcuts".
    #[serde(default)]
    pub quick_actions: Option<Vec<QuickAction>>,
}

impl ReplyBody {
    pub fn new(message: impl Into<String>, quick_actions: Vec<QuickAction>) -> Self {
        Self {
            message: message.into(),
            quick_actions: Some(quick_actions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_sends_null_session_id() {
        let request = ChatRequest {
            message: "Hello".into(),
            session_id: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "Hello", "session_id": null })
        );
    }

    #[test]
    fn later_requests_echo_the_token() {
        let request = ChatRequest {
            message: "hazard".into(),
            session_id: Some(SessionToken::from("abc123")),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["session_id"], "abc123");
    }

    #[test]
    fn reply_with_quick_actions() {
        let json = r#"{
            "session_id": "abc123",
            "response": {
                "message": "Hello!",
                "quick_actions": [
                    {"text": "Emergency Help", "action": "emergency"},
                    {"text": "Report Hazard", "action": "report_hazard"}
                ],
                "intent": "greeting",
                "confidence": 0.5
            }
        }"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.session_id.as_str(), "abc123");
        assert_eq!(reply.response.message, "Hello!");
        let actions = reply.response.quick_actions.unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].label, "Emergency Help");
        assert_eq!(actions[1].action_key, "report_hazard");
    }

    #[test]
    fn reply_without_quick_actions() {
        let json = r#"{"session_id": "s", "response": {"message": "ok"}}"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert!(reply.response.quick_actions.is_none());

        let json = r#"{"session_id": "s", "response": {"message": "ok", "quick_actions": null}}"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert!(reply.response.quick_actions.is_none());
    }

    #[test]
    fn reply_missing_session_id_is_malformed() {
        let json = r#"{"response": {"message": "ok"}}"#;
        assert!(serde_json::from_str::<ChatReply>(json).is_err());
    }

    #[test]
    fn reply_missing_message_is_malformed() {
        let json = r#"{"session_id": "s", "response": {}}"#;
        assert!(serde_json::from_str::<ChatReply>(json).is_err());
    }
}
