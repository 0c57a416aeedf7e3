//! Discovery of the Cursor executable.
//!
//! A [`Locator`] checks an ordered list of candidate paths and remembers the
//! first regular file it finds for the rest of its lifetime. The remembered
//! path is never re-validated; a miss is not remembered, so installing the
//! editor later is picked up by the next call.

mod candidates;


use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::config::CursorConfig;
use crate::error::{Error, Result};

/// Finds and memoizes the editor executable.
#[derive(Debug)]
pub struct Locator {
    candidates: Vec<PathBuf>,
    search_path: bool,
    found: OnceLock<PathBuf>,
    scanning: Mutex<()>,
}

impl Locator {
    /// Build a locator from user config: the explicit override first, then the
    /// platform's conventional install locations, then `PATH` if enabled.
    #[must_use]
    pub fn new(config: &CursorConfig) -> Self {
        let mut candidates: Vec<PathBuf> = config.path.iter().cloned().collect();
        candidates.extend(candidates::platform_candidates());
        Self {
            candidates,
            search_path: config.search_path,
            found: OnceLock::new(),
            scanning: Mutex::new(()),
        }
    }

    /// Build a locator over a fixed list of paths, without a `PATH` fallback.
    #[must_use]
    pub const fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            search_path: false,
            found: OnceLock::new(),
            scanning: Mutex::new(()),
        }
    }

    /// Paths checked by [`Locator::locate`], in order. Excludes the `PATH` lookup.
    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Whether the `PATH` lookup runs after the candidates miss.
    #[must_use]
    pub const fn searches_path(&self) -> bool {
        self.search_path
    }

    /// Return the executable path, checking the candidates until the first hit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] listing every checked path when none is a
    /// regular file.
    pub fn locate(&self) -> Result<&Path> {
        if let Some(path) = self.found.get() {
            return Ok(path);
        }

        // Serialize first-time scans so concurrent callers do not scan twice.
        let guard = self.scanning.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(path) = self.found.get() {
            return Ok(path);
        }

        let Some(hit) = self.scan() else {
            drop(guard);
            tracing::debug!(
                searched = self.candidates.len(),
                "Cursor executable not found"
            );
            return Err(Error::NotFound {
                searched: self.candidates.clone(),
            });
        };
        let path = self.found.get_or_init(|| hit);
        drop(guard);

        tracing::info!(path = %path.display(), "located Cursor executable");
        Ok(path)
    }

    /// Whether the executable can be found.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.locate().is_ok()
    }

    fn scan(&self) -> Option<PathBuf> {
        if let Some(hit) = self.candidates.iter().find(|p| p.is_file()) {
            return Some(hit.clone());
        }
        if !self.search_path {
            return None;
        }
        which::which(candidates::PATH_COMMAND)
            .ok()
            .filter(|p| p.is_file())
    }
}
