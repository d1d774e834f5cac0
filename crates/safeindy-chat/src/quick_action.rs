//! Static mapping from quick-action keys to the utterance they send.

/// Known action keys and their canned utterances.
pub const ACTION_UTTERANCES: &[(&str, &str)] = &[
    ("greeting", "Hello"),
    ("emergency", "I need emergency help"),
    ("report_hazard", "I want to report a hazard"),
    ("view_alerts", "Show me current alerts"),
    ("safety_info", "I need safety information"),
    ("call_911", "Call 911 immediately"),
    ("emergency_contacts", "Show emergency contacts"),
    ("safety_tips", "Give me safety tips"),
];

/// The canned utterance for `key`, if the key is known.
pub fn canned_utterance(key: &str) -> Option<&'static str> {
    ACTION_UTTERANCES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, utterance)| *utterance)
}

/// The utterance to send for `key`. Unknown keys are sent verbatim.
pub fn utterance_for(key: &str) -> &str {
    match canned_utterance(key) {
        Some(utterance) => utterance,
        None => {
            tracing::debug!(action = key, "unknown quick action, sending key as text");
            key
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_eq!(utterance_for("greeting"), "Hello");
        assert_eq!(utterance_for("emergency"), "I need emergency help");
        assert_eq!(utterance_for("call_911"), "Call 911 immediately");
    }

    #[test]
    fn unknown_key_is_literal() {
        assert_eq!(canned_utterance("not_a_real_key"), None);
        assert_eq!(utterance_for("not_a_real_key"), "not_a_real_key");
    }

    #[test]
    fn table_has_no_duplicate_keys_or_empty_utterances() {
        for (i, (key, utterance)) in ACTION_UTTERANCES.iter().enumerate() {
            assert!(!utterance.trim().is_empty(), "{key} has empty utterance");
            assert!(
                ACTION_UTTERANCES[i + 1..].iter().all(|(k, _)| k != key),
                "{key} listed twice"
            );
        }
    }
}
