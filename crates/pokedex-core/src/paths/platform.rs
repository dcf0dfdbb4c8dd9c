//! Data root resolution.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "POKEDEX_DATA_DIR";

const APP_DIR_NAME: &str = "pokedex";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `POKEDEX_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/pokedex`)
pub fn data_root() -> Result<PathBuf, PathError> {
    resolve_data_root(env::var(DATA_DIR_ENV).ok())
}

/// Pure form of [`data_root`] taking the override explicitly.
///
/// An empty override is ignored.
pub fn resolve_data_root(env_override: Option<String>) -> Result<PathBuf, PathError> {
    if let Some(path) = env_override.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join(APP_DIR_NAME))
}
