//! Indianapolis contact numbers and safety tips.
//!
//! Answered directly for the contacts and tips shortcuts; everything else
//! goes through intent scoring.

use crate::{QuickAction, ReplyBody};

pub struct Contact {
    pub name: &'static str,
    pub number: &'static str,
    pub description: &'static str,
}

const fn contact(name: &'static str, number: &'static str, description: &'static str) -> Contact {
    Contact {
        name,
        number,
        description,
    }
}

/// Contact groups in display order.
pub const EMERGENCY_CONTACTS: &[(&str, &[Contact])] = &[
    (
        "Emergency",
        &[contact(
            "Emergency Services (Police, Fire, EMS)",
            "911",
            "Life-threatening emergencies only",
        )],
    ),
    (
        "Non-Emergency",
        &[
            contact("IMPD Non-Emergency", "(317) 327-3811", "Non-emergency police matters"),
            contact("IFD Non-Emergency", "(317) 327-3811", "Non-emergency fire department"),
        ],
    ),
    (
        "City Services",
        &[
            contact("Mayor's Action Center", "(317) 327-4622", "City services and complaints"),
            contact("Public Works", "(317) 327-4622", "Road issues, potholes, infrastructure"),
        ],
    ),
    (
        "Crisis Support",
        &[
            contact("Crisis & Suicide Lifeline", "988", "24/7 mental health crisis support"),
            contact("Domestic Violence Hotline", "1-800-799-7233", "24/7 domestic violence support"),
        ],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipCategory {
    General,
    Weather,
    Traffic,
    Home,
}

impl TipCategory {
    /// Picks a category from words in the message; `General` otherwise.
    pub fn from_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));
        if mentions(&["weather", "storm", "tornado", "flood"]) {
            TipCategory::Weather
        } else if mentions(&["traffic", "driving", "road"]) {
            TipCategory::Traffic
        } else if mentions(&["home", "house"]) {
            TipCategory::Home
        } else {
            TipCategory::General
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TipCategory::General => "General",
            TipCategory::Weather => "Weather",
            TipCategory::Traffic => "Traffic",
            TipCategory::Home => "Home",
        }
    }

    pub fn tips(self) -> &'static [&'static str] {
        match self {
            TipCategory::General => &[
                "Always be aware of your surroundings",
                "Keep emergency contacts readily available",
                "Trust your instincts - if something feels wrong, seek help",
                "Stay informed about local alerts and warnings",
            ],
            TipCategory::Weather => &[
                "Monitor weather alerts and warnings",
                "Have an emergency kit ready",
                "Know your evacuation routes",
                "Stay indoors during severe weather",
            ],
            TipCategory::Traffic => &[
                "Always wear your seatbelt",
                "Don't text and drive",
                "Maintain safe following distance",
                "Report dangerous road conditions",
            ],
            TipCategory::Home => &[
                "Install smoke and carbon monoxide detectors",
                "Keep doors and windows locked",
                "Have a family emergency plan",
                "Know your neighbors",
            ],
        }
    }
}

/// The directory reply for `message`, if it asks for contacts or tips.
pub fn lookup(message: &str) -> Option<ReplyBody> {
    let lower = message.to_lowercase();
    if lower.contains("emergency contact") {
        Some(contacts_reply())
    } else if lower.contains("safety tip") {
        Some(tips_reply(TipCategory::from_message(message)))
    } else {
        None
    }
}

fn contacts_reply() -> ReplyBody {
    let mut message = String::from("📞 **Indianapolis Emergency Contacts**");
    for (group, contacts) in EMERGENCY_CONTACTS {
        message.push_str(&format!("\n\n**{group}**"));
        for c in *contacts {
            message.push_str(&format!("\n• {}: **{}** ({})", c.name, c.number, c.description));
        }
    }
    ReplyBody::new(
        message,
        vec![
            QuickAction::new("🚑 Call 911 Now", "call_911"),
            QuickAction::new("🛡️ Safety Tips", "safety_tips"),
        ],
    )
}

fn tips_reply(category: TipCategory) -> ReplyBody {
    let mut message = format!("🛡️ **{} Safety Tips**\n", category.title());
    for tip in category.tips() {
        message.push_str(&format!("\n• {tip}"));
    }
    ReplyBody::new(
        message,
        vec![
            QuickAction::new("📞 Emergency Contacts", "emergency_contacts"),
            QuickAction::new("📋 Report Hazard", "report_hazard"),
        ],
    )
}
