use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{SECRET_DIR_NAME, TOKEN_FILE_ENV, TOKEN_FILE_NAME};
use crate::logging::{log_debug, log_error, log_info};

/// Resolve where the bearer token lives: `GISTCLIP_TOKEN_FILE` when set,
/// otherwise `~/.secret/gists`.
pub fn token_path() -> Result<PathBuf> {
    match env::var(TOKEN_FILE_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            log_debug(&format!("Using token file from {}", TOKEN_FILE_ENV));
            Ok(PathBuf::from(path.trim()))
        }
        _ => {
            let home_dir = dirs::home_dir().context("Could not find home directory")?;
            Ok(home_dir.join(SECRET_DIR_NAME).join(TOKEN_FILE_NAME))
        }
    }
}

pub fn read_token(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read credential file: {}", path.display()))?;

    let token = raw.trim();
    if token.is_empty() {
        log_error("Credential file is empty");
        anyhow::bail!("Credential file is empty: {}", path.display());
    }

    // Never log the token itself
    log_info(&format!("Loaded token ({} bytes)", token.len()));
    Ok(token.to_string())
}

pub fn load_token() -> Result<String> {
    let path = token_path()?;
    read_token(&path)
}
