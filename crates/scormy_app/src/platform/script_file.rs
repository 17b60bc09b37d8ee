//! Optional conversation script override, read from a RON file at startup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use scormy_core::{Script, ScriptError};
use scormy_logging::{chat_info, chat_warn};
use thiserror::Error;

const SCRIPT_FILENAME: &str = "scormy_script.ron";
const SCRIPT_PATH_ENV: &str = "SCORMY_SCRIPT";

#[derive(Debug, Error)]
pub enum ScriptLoadError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid script: {0}")]
    Invalid(#[from] ScriptError),
}

pub(crate) fn script_path() -> PathBuf {
    std::env::var_os(SCRIPT_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SCRIPT_FILENAME))
}

/// Reads and validates a script file. `Ok(None)` when the file does not exist.
pub(crate) fn read_script(path: &Path) -> Result<Option<Script>, ScriptLoadError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let script: Script = ron::from_str(&content)?;
    script.validate()?;
    Ok(Some(script))
}

/// Script for this run: the override file when usable, the built-in one otherwise.
pub(crate) fn load_script(path: &Path) -> Arc<Script> {
    match read_script(path) {
        Ok(Some(script)) => {
            chat_info!(
                "Loaded conversation script from {:?} ({} menus)",
                path,
                script.menus.len()
            );
            Arc::new(script)
        }
        Ok(None) => {
            chat_info!("No script at {:?}, using built-in portfolio script", path);
            Arc::new(Script::portfolio())
        }
        Err(err) => {
            chat_warn!(
                "Ignoring script at {:?}: {}. Using built-in portfolio script",
                path,
                err
            );
            Arc::new(Script::portfolio())
        }
    }
}
