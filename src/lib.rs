//! Delegate "open this file / solution / addon" actions to the Cursor editor.
//!
//! The pieces are usable on their own: [`locator::Locator`] finds the
//! executable, [`workspace::WorkspaceManifest`] writes the `.code-workspace`
//! file, and [`launcher::launch`] starts the process. [`CursorEditor`] ties
//! them together behind the actions a host application exposes.

pub mod config;
pub mod editor;
pub mod error;
pub mod launcher;
pub mod locator;
pub mod project;
pub mod workspace;

pub use config::Config;
pub use editor::CursorEditor;
pub use error::{Error, Result};
pub use launcher::LaunchRequest;
pub use project::{ProjectRef, ProjectSource, StaticProjects};
pub use workspace::WorkspaceManifest;
