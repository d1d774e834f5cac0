//! Entity extraction: emergency type, hazard category, and location.

use std::sync::LazyLock;

use regex::Regex;

use super::intents::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmergencyType {
    Medical,
    Fire,
    Crime,
    Accident,
}

impl EmergencyType {
    /// Types that get the high-priority emergency response.
    pub fn is_high_priority(self) -> bool {
        matches!(
            self,
            EmergencyType::Medical | EmergencyType::Fire | EmergencyType::Crime
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardCategory {
    RoadTraffic,
    Infrastructure,
    Environmental,
    PublicSafety,
}

impl HazardCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            HazardCategory::RoadTraffic => "Road/Traffic Hazard",
            HazardCategory::Infrastructure => "Infrastructure Issue",
            HazardCategory::Environmental => "Environmental Concern",
            HazardCategory::PublicSafety => "Public Safety Issue",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entities {
    pub emergency_type: Option<EmergencyType>,
    pub hazard_category: Option<HazardCategory>,
    /// The matched location phrase, as written.
    pub location: Option<String>,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("static entity pattern must compile")
}

static EMERGENCY_TYPES: LazyLock<Vec<(EmergencyType, Regex)>> = LazyLock::new(|| {
    vec![
        (
            EmergencyType::Medical,
            compile(r"\b(heart attack|stroke|choking|overdose|injured|hurt|bleeding|unconscious)\b"),
        ),
        (EmergencyType::Fire, compile(r"\b(fire|smoke|burning|explosion)\b")),
        (
            EmergencyType::Crime,
            compile(r"\b(robbery|assault|shooting|stabbing|theft|break.?in)\b"),
        ),
        (EmergencyType::Accident, compile(r"\b(accident|crash|collision|vehicle)\b")),
    ]
});

static HAZARD_CATEGORIES: LazyLock<Vec<(HazardCategory, Regex)>> = LazyLock::new(|| {
    vec![
        (
            HazardCategory::RoadTraffic,
            compile(r"\b(pothole|road|street|traffic|sign|light|intersection)\b"),
        ),
        (
            HazardCategory::Infrastructure,
            compile(r"\b(bridge|sidewalk|building|structure|utility|pipe|wire)\b"),
        ),
        (
            HazardCategory::Environmental,
            compile(r"\b(flooding|debris|tree|pollution|spill|waste)\b"),
        ),
        (
            HazardCategory::PublicSafety,
            compile(r"\b(lighting|security|vandalism|graffiti|suspicious)\b"),
        ),
    ]
});

/// Tried in order; the first match wins.
static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(\d+)\s+([A-Za-z\s]+(?:street|st|avenue|ave|road|rd|boulevard|blvd|drive|dr|lane|ln|way|circle|cir|court|ct))\b",
        r"\bnear\s+([A-Za-z\s]+)\b",
        r"\bat\s+([A-Za-z\s]+)\b",
        r"\bon\s+([A-Za-z\s]+(?:street|st|avenue|ave|road|rd))\b",
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
});

fn first_match<T: Copy>(table: &[(T, Regex)], message: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, re)| re.is_match(message))
        .map(|(value, _)| *value)
}

/// Pull the entities relevant to `intent` out of `message`. Location is
/// looked for regardless of intent.
pub fn extract_entities(message: &str, intent: Intent) -> Entities {
    let mut entities = Entities::default();

    match intent {
        Intent::Emergency => entities.emergency_type = first_match(&EMERGENCY_TYPES, message),
        Intent::HazardReport => {
            entities.hazard_category = first_match(&HAZARD_CATEGORIES, message)
        }
        _ => {}
    }

    entities.location = LOCATION_PATTERNS
        .iter()
        .find_map(|re| re.find(message))
        .map(|m| m.as_str().to_string());

    entities
}
