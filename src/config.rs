//! Configuration loading and data folder resolution

use crate::Result;
use std::path::{Path, PathBuf};

/// File name of the embedded database inside the data folder
pub const DATABASE_FILE_NAME: &str = "sake_map.db";

/// Environment variable overriding the data folder
pub const DATA_DIR_ENV_VAR: &str = "SAKEMAP_DATA_DIR";

/// Data folder resolution priority order:
/// 1. Explicit argument (highest priority)
/// 2. `SAKEMAP_DATA_DIR` environment variable
/// 3. `data_dir` key in the platform config file
/// 4. OS-dependent default (fallback)
pub fn resolve_data_dir(explicit: Option<&str>) -> Result<PathBuf> {
    // Priority 1: explicit argument
    if let Some(path) = explicit {
        return Ok(PathBuf::from(path));
    }

    // Priority 2: environment variable
    if let Ok(path) = std::env::var(DATA_DIR_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    // Priority 3: TOML config file
    if let Some(config_path) = config_file_path() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(data_dir) = config.get("data_dir").and_then(|v| v.as_str()) {
                    return Ok(PathBuf::from(data_dir));
                }
            }
        }
    }

    // Priority 4: OS-dependent default
    Ok(default_data_dir())
}

/// Full path of the database file inside a data folder
pub fn database_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DATABASE_FILE_NAME)
}

/// Platform config file (`<config dir>/sakemap/config.toml`), if it exists
fn config_file_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("sakemap").join("config.toml");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// OS-dependent default data folder
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("sakemap"))
        .unwrap_or_else(|| PathBuf::from("./sakemap_data"))
}
