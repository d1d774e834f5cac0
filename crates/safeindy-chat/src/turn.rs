//! Transcript entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

/// A labeled shortcut offered under an assistant turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    #[serde(rename = "text")]
    pub label: String,
    /// Resolved to an utterance through the quick-action table.
    #[serde(rename = "action")]
    pub action_key: String,
}

impl QuickAction {
    pub fn new(label: impl Into<String>, action_key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action_key: action_key.into(),
        }
    }
}

/// One message in the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub origin: Origin,
    pub text: String,
    /// Always empty on user turns.
    pub quick_actions: Vec<QuickAction>,
    /// Display only.
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            origin: Origin::User,
            text: text.into(),
            quick_actions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>, quick_actions: Vec<QuickAction>) -> Self {
        Self {
            origin: Origin::Assistant,
            text: text.into(),
            quick_actions,
            created_at: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}
