//! Turns configuration into a ready-to-use transport and session settings.

use std::sync::Arc;

use safeindy_chat::{HttpConfig, HttpTransport, OfflineTransport, SessionSettings, Transport};
use safeindy_common::SafeIndyError;
use safeindy_config::SafeIndyConfig;
use tracing::info;

use crate::cli::Args;

/// Apply command-line overrides on top of the loaded config.
pub fn apply_args(config: &mut SafeIndyConfig, args: &Args) {
    if let Some(url) = &args.url {
        config.service.base_url = url.clone();
    }
    if args.offline {
        config.service.offline = true;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
}

pub fn session_settings(config: &SafeIndyConfig) -> SessionSettings {
    SessionSettings {
        greeting_action: config.session.greeting_action.clone(),
        fallback_reply: config.session.fallback_reply.clone(),
        request_timeout: config.service.request_timeout(),
        event_capacity: config.session.event_capacity as usize,
    }
}

pub fn build_transport(config: &SafeIndyConfig) -> safeindy_common::Result<Arc<dyn Transport>> {
    if config.service.offline {
        info!("using built-in offline assistant");
        return Ok(Arc::new(OfflineTransport::new()));
    }

    let url = config.service.chat_url();
    info!("chat endpoint: {url}");
    let http = HttpTransport::new(
        HttpConfig::new(url).with_connect_timeout(config.service.connect_timeout()),
    )
    .map_err(|e| SafeIndyError::Transport(e.to_string()))?;
    Ok(Arc::new(http))
}
