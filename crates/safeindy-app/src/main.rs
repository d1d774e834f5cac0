mod cli;
mod console;
mod setup;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use safeindy_chat::ConversationSession;
use safeindy_config::SafeIndyConfig;
use tracing_subscriber::EnvFilter;

/// Load environment variables from a `.env` file in the current directory
/// (KEY=VALUE lines). Existing variables win.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

fn init_logging(level: &str) {
    let directive = format!("safeindy={level}");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "safeindy=info".parse().expect("static directive")),
            ),
        )
        .init();
}

async fn run(config: SafeIndyConfig) -> safeindy_common::Result<()> {
    let transport = setup::build_transport(&config)?;
    let session = Arc::new(ConversationSession::new(
        transport,
        setup::session_settings(&config),
    ));
    console::run(session).await
}

fn main() -> ExitCode {
    // Before any threads exist.
    load_dotenv();

    let args = cli::parse();

    let loaded = match args.config.as_deref() {
        Some(path) => safeindy_config::load_config_from(Path::new(path)),
        None => safeindy_config::load_config(),
    };
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => {
            let mut config = SafeIndyConfig::default();
            safeindy_config::apply_env_overrides(&mut config);
            (config, Some(e))
        }
    };
    setup::apply_args(&mut config, &args);

    init_logging(&config.logging.level.to_ascii_lowercase());
    tracing::info!("SafeIndy v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(config)) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
