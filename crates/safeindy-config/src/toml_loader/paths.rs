//! Where the SafeIndy config file lives, and seeding it on first run.

use safeindy_common::ConfigError;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "safeindy";
const FILE_NAME: &str = "config.toml";

/// `{config_dir}/safeindy/config.toml` for the current platform.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| config_path_in(&dir))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory for safeindy".into()))
}

fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(FILE_NAME)
}

/// Seed `path` with the commented SafeIndy template.
///
/// An existing file is left alone, so a second client starting at the
/// same time cannot clobber the first one's edits.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {what} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err("create directory for", e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "config already present, not seeding");
            return Ok(());
        }
        Err(e) => return Err(io_err("create", e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_err("write template to", e))?;

    info!(path = %path.display(), "wrote default SafeIndy config");
    Ok(())
}
