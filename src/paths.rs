//! Centralized path definitions for facegate
//!
//! Single source of truth for the filesystem layout:
//!
//! ```text
//! ~/.facegate/
//! ├── config.toml     # Backend URL, timeouts, capture preferences
//! └── session.toml    # Logged-in subject id and API token
//! ```
//!
//! `FACEGATE_HOME` overrides the base directory, which keeps integration
//! tests away from the real home directory.

use std::path::PathBuf;

/// Base directory name under the home directory
const FACEGATE_DIR: &str = ".facegate";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Session filename
const SESSION_FILE: &str = "session.toml";

/// Environment variable overriding the base directory
pub const HOME_ENV: &str = "FACEGATE_HOME";

/// Get the facegate base directory.
///
/// Returns `$FACEGATE_HOME` when set, otherwise `~/.facegate/`.
#[must_use]
pub fn base_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(FACEGATE_DIR)
}

/// Get the config file path.
///
/// Contains server URL, request timeout and capture preferences.
#[must_use]
pub fn config_file() -> PathBuf {
    base_dir().join(CONFIG_FILE)
}

/// Get the session file path.
///
/// Contains the logged-in subject id and the backend API token.
#[must_use]
pub fn session_file() -> PathBuf {
    base_dir().join(SESSION_FILE)
}
