// src/infra/paths.rs — Config and data locations
//
// All paths respect the AICHEF_HOME environment variable for isolation.
// When AICHEF_HOME is set, config and data live under that directory.
// When unset, config uses ~/.aichef/ and data uses XDG_DATA_HOME/aichef.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

fn aichef_home() -> Option<PathBuf> {
    std::env::var_os("AICHEF_HOME").map(PathBuf::from)
}

/// Home directory, falling back to the working directory when none exists.
fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration directory: $AICHEF_HOME/ or ~/.aichef/
pub fn config_dir() -> PathBuf {
    if let Some(home) = aichef_home() {
        return home;
    }
    dirs_home().join(".aichef")
}

/// Data directory: $AICHEF_HOME/data/ or ~/.local/share/aichef/
pub fn data_dir() -> PathBuf {
    if let Some(home) = aichef_home() {
        return home.join("data");
    }
    match ProjectDirs::from("", "", "aichef") {
        Some(dirs) => dirs.data_local_dir().to_path_buf(),
        None => config_dir().join("data"),
    }
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default favorites database path
pub fn db_path() -> PathBuf {
    data_dir().join("aichef.db")
}
