//! File System Utilities
//!
//! Platform directories for preferences and log files.

use crate::constants::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER};
use crate::error::{ProjectDirsSnafu, Result};
use directories::ProjectDirs;
use snafu::OptionExt;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME).context(ProjectDirsSnafu {
        qualifier: APP_QUALIFIER,
        organization: APP_ORGANIZATION,
        application: APP_NAME,
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/reception-desk/` or `$XDG_CONFIG_HOME/reception-desk/`
/// - **macOS**: `~/Library/Application Support/org.reception-desk.reception-desk/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\reception-desk\reception-desk\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the directory for rolling log files
///
/// Lives under the platform data directory, e.g. `~/.local/share/reception-desk/logs/`
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    ensure_dir(&project_dirs()?.data_dir().join("logs"))
}
