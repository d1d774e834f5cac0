//! Configuration schema types for the SafeIndy client.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod service;
mod session;

pub use logging::*;
pub use service::*;
pub use session::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeIndyConfig {
    pub service: ServiceConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}
