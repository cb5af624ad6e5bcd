// src/infra/paths.rs — Path management for config, credential and downloads
//
// All paths respect the CHEMVIZ_HOME environment variable for isolation.
// When CHEMVIZ_HOME is set, everything lives under that directory; when
// unset, config uses ~/.chemviz and report downloads land in the platform
// downloads directory.

use std::path::PathBuf;

/// Returns the CHEMVIZ_HOME override, if set.
fn chemviz_home() -> Option<PathBuf> {
    std::env::var_os("CHEMVIZ_HOME").map(PathBuf::from)
}

/// Home directory
pub fn dirs_home() -> PathBuf {
    directories::BaseDirs::new()
        .expect("Could not determine home directory")
        .home_dir()
        .to_path_buf()
}

/// Configuration directory: $CHEMVIZ_HOME/ or ~/.chemviz/
pub fn config_dir() -> PathBuf {
    if let Some(home) = chemviz_home() {
        return home;
    }
    dirs_home().join(".chemviz")
}

/// Stored credential path (single bearer token)
pub fn credential_path() -> PathBuf {
    config_dir().join("credential")
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default directory for downloaded PDF reports: $CHEMVIZ_HOME/reports/ or
/// the platform downloads directory.
pub fn downloads_dir() -> PathBuf {
    if let Some(home) = chemviz_home() {
        return home.join("reports");
    }
    dirs::download_dir().unwrap_or_else(|| config_dir().join("reports"))
}

/// Ensure required directories exist
pub fn ensure_dirs() -> anyhow::Result<()> {
    std::fs::create_dir_all(config_dir())?;
    Ok(())
}
