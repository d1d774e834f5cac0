use serde::{Deserialize, Serialize};

/// Conversation behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Quick-action key sent automatically when a session starts.
    pub greeting_action: String,
    /// Assistant text shown when an exchange fails.
    pub fallback_reply: String,
    /// Buffer size of the session event channel.
    pub event_capacity: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            greeting_action: "greeting".into(),
            fallback_reply: "Sorry, I encountered an error. Please try again.".into(),
            event_capacity: 64,
        }
    }
}
