//! Built-in assistant that answers without a network.
//!
//! Mirrors the chat service's rule-based engine: a message is scored
//! against per-intent pattern groups, entities (emergency type, hazard
//! category, location) are pulled out, and a canned response with quick
//! actions is returned. Requests for emergency contacts or safety tips
//! are answered from a fixed directory before scoring. Lets the client
//! run end to end with no server.

mod directory;
mod entities;
mod intents;
mod responses;
mod transport;

pub use directory::lookup;
pub use entities::{extract_entities, EmergencyType, Entities, HazardCategory};
pub use intents::{classify, Intent};
pub use responses::respond;
pub use transport::OfflineTransport;
