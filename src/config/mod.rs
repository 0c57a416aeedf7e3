//! User configuration stored in `~/.config/cursor-launch/config.toml`.

mod ops;


use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default file name of the generated workspace manifest.
pub const DEFAULT_WORKSPACE_FILE: &str = "cursor.code-workspace";

/// User configuration, stored as TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where to find the Cursor executable.
    pub cursor: CursorConfig,
    /// Workspace manifest generation.
    pub workspace: WorkspaceConfig,
}

/// Executable discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Explicit executable path, checked before the conventional install locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Fall back to `cursor` on `PATH` when no install location matches.
    pub search_path: bool,
}

/// Workspace manifest settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Regenerate the manifest and open it alongside every target.
    pub enabled: bool,
    /// Manifest location; relative paths resolve against the solution root.
    pub file: PathBuf,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            path: None,
            search_path: true,
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: PathBuf::from(DEFAULT_WORKSPACE_FILE),
        }
    }
}
