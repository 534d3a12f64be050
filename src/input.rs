use crate::error::{Result, RiskError};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(RiskError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "read input");
    Ok(serde_json::from_str(&content)?)
}

pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), "wrote output");
    Ok(())
}
