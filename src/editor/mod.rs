//! The host-facing "open in Cursor" actions.


use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::launcher::{launch, LaunchRequest};
use crate::locator::Locator;
use crate::project::{ProjectRef, ProjectSource};
use crate::workspace::WorkspaceManifest;

/// Opens files, the solution, and addons in Cursor.
///
/// Owns the [`Locator`], so the executable is searched for at most once per
/// editor value no matter how many actions run through it. Active projects
/// are only queried when a workspace manifest is written.
///
/// Every action locates Cursor first, so a missing editor fails with
/// [`Error::NotFound`](crate::Error::NotFound) before anything is written.
#[derive(Debug)]
pub struct CursorEditor<P> {
    config: Config,
    root: PathBuf,
    locator: Locator,
    projects: P,
}

impl<P: ProjectSource> CursorEditor<P> {
    /// Create an editor for the solution at `root`, locating Cursor per `config`.
    #[must_use]
    pub fn new(config: Config, root: impl Into<PathBuf>, projects: P) -> Self {
        let locator = Locator::new(&config.cursor);
        Self::with_locator(config, root, locator, projects)
    }

    /// Create an editor with an explicit locator.
    #[must_use]
    pub fn with_locator(
        config: Config,
        root: impl Into<PathBuf>,
        locator: Locator,
        projects: P,
    ) -> Self {
        Self {
            config,
            root: root.into(),
            locator,
            projects,
        }
    }

    /// The locator used for every action.
    #[must_use]
    pub const fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Whether Cursor can be found.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.locator.is_installed()
    }

    /// Where the workspace manifest is written.
    #[must_use]
    pub fn workspace_path(&self) -> PathBuf {
        self.root.join(&self.config.workspace.file)
    }

    /// Open `path`, optionally at `line` and `column`.
    ///
    /// # Errors
    ///
    /// Fails when Cursor cannot be found, the manifest cannot be written, or
    /// the process does not start.
    pub fn open_file(&self, path: &Path, line: Option<u32>, column: Option<u32>) -> Result<()> {
        self.open(&LaunchRequest::new(path).at(line, column))
    }

    /// Open the solution root directory.
    ///
    /// # Errors
    ///
    /// Same as [`CursorEditor::open_file`].
    pub fn open_solution(&self) -> Result<()> {
        self.open(&LaunchRequest::new(&self.root))
    }

    /// Open an addon's root directory.
    ///
    /// # Errors
    ///
    /// Same as [`CursorEditor::open_file`].
    pub fn open_addon(&self, addon: &ProjectRef) -> Result<()> {
        self.open(&LaunchRequest::new(&addon.root))
    }

    /// Regenerate the workspace manifest from the active projects and return its path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when the manifest cannot be written.
    pub fn write_workspace(&self) -> Result<PathBuf> {
        let target = self.workspace_path();
        let projects = self.projects.active_projects();
        WorkspaceManifest::from_projects(&projects).write(&target)?;
        Ok(target)
    }

    fn open(&self, request: &LaunchRequest) -> Result<()> {
        let executable = self.locator.locate()?;
        let workspace = if self.config.workspace.enabled {
            Some(self.write_workspace()?)
        } else {
            None
        };
        launch(executable, &request.arguments(workspace.as_deref()))
    }
}
