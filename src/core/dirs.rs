use crate::core::error::LatrError;
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf, LatrError> {
    if let Ok(dir) = std::env::var("LATR_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join("latr"))
}

pub fn get_config_file() -> Result<PathBuf, LatrError> {
    Ok(get_config_directory()?.join("config.json"))
}
