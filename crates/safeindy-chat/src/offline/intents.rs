//! Intent classification by pattern-group scoring.

use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Emergency,
    HazardReport,
    Information,
    Alerts,
    Greeting,
    Fallback,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Emergency => "emergency",
            Intent::HazardReport => "hazard_report",
            Intent::Information => "information",
            Intent::Alerts => "alerts",
            Intent::Greeting => "greeting",
            Intent::Fallback => "fallback",
        }
    }
}

struct IntentRule {
    intent: Intent,
    patterns: Vec<Regex>,
    threshold: f64,
}

fn rule(intent: Intent, threshold: f64, patterns: &[&str]) -> IntentRule {
    IntentRule {
        intent,
        patterns: patterns
            .iter()
            .map(|p| Regex::new(&format!("(?i){p}")).expect("static intent pattern must compile"))
            .collect(),
        threshold,
    }
}

static EMERGENCY: LazyLock<IntentRule> = LazyLock::new(|| {
    rule(
        Intent::Emergency,
        0.8,
        &[
            r"\b(emergency|urgent|help|danger|911)\b",
            r"\b(fire|accident|injured|hurt|bleeding)\b",
            r"\b(robbery|assault|shooting|stabbing)\b",
            r"\b(heart attack|stroke|choking|overdose)\b",
        ],
    )
});

/// Non-emergency rules, in tie-break order.
static RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(|| {
    vec![
        rule(
            Intent::HazardReport,
            0.6,
            &[
                r"\b(report|hazard|problem|issue|pothole)\b",
                r"\b(broken|damaged|dangerous|unsafe)\b",
                r"\b(road|street|sidewalk|bridge|traffic)\b",
                r"\b(flooding|debris|obstruction)\b",
            ],
        ),
        rule(
            Intent::Information,
            0.5,
            &[
                r"\b(what|how|where|when|why)\b",
                r"\b(information|help|guide|tips)\b",
                r"\b(safety|prepare|prevention)\b",
                r"\b(contact|phone|number|address)\b",
            ],
        ),
        rule(
            Intent::Alerts,
            0.6,
            &[
                r"\b(alert|notification|warning|update)\b",
                r"\b(weather|traffic|emergency|news)\b",
                r"\b(current|active|recent)\b",
            ],
        ),
        rule(
            Intent::Greeting,
            0.7,
            &[
                r"\b(hello|hi|hey|good morning|good afternoon|good evening)\b",
                r"\b(start|begin|help me)\b",
            ],
        ),
    ]
});

/// Fraction of the rule's pattern groups that match.
fn score(rule: &IntentRule, message: &str) -> f64 {
    if rule.patterns.is_empty() {
        return 0.0;
    }
    let hits = rule.patterns.iter().filter(|p| p.is_match(message)).count();
    hits as f64 / rule.patterns.len() as f64
}

/// Classify a message, returning the intent and its confidence.
///
/// Emergency wins outright when it clears its threshold. Otherwise the
/// highest-scoring rule that clears its own threshold wins, earlier rules
/// taking ties; if none does, the result is `Fallback` with score 0.
pub fn classify(message: &str) -> (Intent, f64) {
    let emergency = score(&EMERGENCY, message);
    if emergency >= EMERGENCY.threshold {
        return (Intent::Emergency, emergency);
    }

    let mut best = (Intent::Fallback, 0.0);
    for rule in RULES.iter() {
        let s = score(rule, message);
        if s >= rule.threshold && s > best.1 {
            best = (rule.intent, s);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_emergency_signal_is_emergency() {
        let (intent, confidence) =
            classify("Help! There was a shooting, someone is bleeding and having a heart attack");
        assert_eq!(intent, Intent::Emergency);
        assert!((confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_emergency_signal_falls_through() {
        // 3 of 4 groups = 0.75, below the 0.8 bar.
        let (intent, _) = classify("emergency, a fire, someone was stabbing");
        assert_ne!(intent, Intent::Emergency);
    }

    #[test]
    fn hazard_report_needs_most_groups() {
        let (intent, confidence) = classify("I want to report a broken road");
        assert_eq!(intent, Intent::HazardReport);
        assert!((confidence - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn information_request() {
        let (intent, _) = classify("Where can I find safety tips?");
        assert_eq!(intent, Intent::Information);
    }

    #[test]
    fn alerts_request() {
        let (intent, _) = classify("Any current weather alert?");
        assert_eq!(intent, Intent::Alerts);
    }

    #[test]
    fn greeting_with_start() {
        let (intent, confidence) = classify("Hello, help me get started... start");
        assert_eq!(intent, Intent::Greeting);
        assert!((confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bare_hello_is_below_greeting_threshold() {
        assert_eq!(classify("Hello"), (Intent::Fallback, 0.0));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let (intent, _) = classify("REPORT A BROKEN ROAD");
        assert_eq!(intent, Intent::HazardReport);
    }

    #[test]
    fn gibberish_is_fallback() {
        assert_eq!(classify("qwerty zxcv"), (Intent::Fallback, 0.0));
    }
}
