//! Error type shared by the library.

use std::path::PathBuf;

/// Alias for `Result<T, cursor_launch::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while locating, preparing, or launching Cursor.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No candidate location contained the executable.
    #[error("Cursor executable not found (searched {} locations)", .searched.len())]
    NotFound {
        /// Every path that was checked, in order.
        searched: Vec<PathBuf>,
    },

    /// A filesystem operation on the workspace manifest failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File or directory being written.
        path: PathBuf,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// The workspace manifest could not be serialized.
    #[error("Failed to serialize workspace manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The OS refused to start the editor process.
    #[error("Failed to launch {}: {source}", .program.display())]
    Launch {
        /// Executable that was spawned.
        program: PathBuf,
        /// Underlying OS error.
        source: std::io::Error,
    },
}

impl Error {
    /// True for the locate miss, which callers treat as a warning rather than a failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
