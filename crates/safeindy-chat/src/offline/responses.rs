//! Canned responses per intent.

use crate::{QuickAction, ReplyBody};

use super::entities::Entities;
use super::intents::Intent;

struct Template {
    message: &'static str,
    actions: &'static [(&'static str, &'static str)],
}

const EMERGENCY_HIGH: Template = Template {
    message: "🚨 **EMERGENCY DETECTED** 🚨\n\nIf this is a life-threatening emergency, **CALL 911 IMMEDIATELY**.\n\nI can provide guidance while you wait for help. What's the nature of the emergency?",
    actions: &[
        ("🚑 Call 911 Now", "call_911"),
        ("🩹 First Aid Guide", "first_aid"),
        ("📍 Share Location", "share_location"),
    ],
};

const EMERGENCY_MEDIUM: Template = Template {
    message: "I understand you need help. If this is a life-threatening emergency, please call 911 immediately.\n\nFor non-emergency assistance, I can help you:\n• Report safety concerns\n• Find emergency services\n• Get safety information\n\nWhat type of help do you need?",
    actions: &[
        ("📋 Report Issue", "report_hazard"),
        ("📞 Emergency Contacts", "emergency_contacts"),
        ("🏥 Find Services", "find_services"),
    ],
};

const HAZARD_REPORT: Template = Template {
    message: "I'll help you report a safety hazard. Please provide the following information:\n\n📍 **Location**: Where is the hazard?\n📝 **Description**: What type of hazard is it?\n📷 **Photo**: Can you take a picture? (optional)\n\nWhat type of hazard would you like to report?",
    actions: &[
        ("🚧 Road/Traffic Hazard", "report_road"),
        ("🏗️ Infrastructure Issue", "report_infrastructure"),
        ("🌳 Environmental Concern", "report_environmental"),
        ("👥 Public Safety Issue", "report_safety"),
    ],
};

const INFORMATION: Template = Template {
    message: "I can provide information about:\n\n🛡️ **Safety Tips & Guidelines**\n📞 **Emergency Contacts & Services**\n🏢 **City Services & Resources**\n🌦️ **Weather & Traffic Updates**\n📋 **How to Report Issues**\n\nWhat information are you looking for?",
    actions: &[
        ("🛡️ Safety Tips", "safety_tips"),
        ("📞 Emergency Contacts", "emergency_contacts"),
        ("🏢 City Services", "city_services"),
        ("🌦️ Current Alerts", "current_alerts"),
    ],
};

const ALERTS: Template = Template {
    message: "Here are the current alerts and notifications for Indianapolis:\n\nI can show you:\n• Active emergency alerts\n• Weather warnings\n• Traffic updates\n• Community notifications\n\nWhat type of alerts would you like to see?",
    actions: &[
        ("🚨 Emergency Alerts", "emergency_alerts"),
        ("🌦️ Weather Alerts", "weather_alerts"),
        ("🚗 Traffic Updates", "traffic_alerts"),
        ("📢 Community News", "community_alerts"),
    ],
};

const GREETING: Template = Template {
    message: "Hello! I'm **SafeIndy AI**, your 24/7 public safety assistant for Indianapolis. I'm here to help with:\n\n🚨 **Emergency Assistance**\n📋 **Hazard Reporting**\n📢 **Safety Alerts & Information**\n📞 **Emergency Contacts & Services**\n\nHow can I help keep you safe today?",
    actions: &[
        ("🚨 Emergency Help", "emergency"),
        ("📋 Report Hazard", "report_hazard"),
        ("📢 View Alerts", "view_alerts"),
        ("❓ Safety Info", "safety_info"),
    ],
};

const FALLBACK: Template = Template {
    message: "I'm not sure I understand. I'm SafeIndy AI, and I can help you with:\n\n• Emergency assistance and 911 guidance\n• Reporting safety hazards and issues\n• Current alerts and notifications\n• Safety information and resources\n\nCould you please rephrase your request or choose one of the options below?",
    actions: &[
        ("🚨 Emergency", "emergency"),
        ("📋 Report Issue", "report_hazard"),
        ("📢 Alerts", "view_alerts"),
        ("❓ Information", "safety_info"),
    ],
};

fn template_for(intent: Intent, entities: &Entities) -> &'static Template {
    match intent {
        Intent::Emergency => match entities.emergency_type {
            Some(kind) if kind.is_high_priority() => &EMERGENCY_HIGH,
            _ => &EMERGENCY_MEDIUM,
        },
        Intent::HazardReport => &HAZARD_REPORT,
        Intent::Information => &INFORMATION,
        Intent::Alerts => &ALERTS,
        Intent::Greeting => &GREETING,
        Intent::Fallback => &FALLBACK,
    }
}

/// Build the reply for a classified message.
pub fn respond(intent: Intent, entities: &Entities) -> ReplyBody {
    let template = template_for(intent, entities);
    let mut message = template.message.to_string();

    if let Some(location) = &entities.location {
        message.push_str(&format!("\n\n📍 **Location detected**: {location}"));
    }
    if let Some(category) = entities.hazard_category {
        message.push_str(&format!("\n\n📋 **Category**: {}", category.display_name()));
    }

    let actions = template
        .actions
        .iter()
        .map(|(label, key)| QuickAction::new(*label, *key))
        .collect();
    ReplyBody::new(message, actions)
}
