//! The `.code-workspace` manifest handed to Cursor.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::project::ProjectRef;

/// Extensions Cursor suggests installing when the workspace opens.
pub const RECOMMENDED_EXTENSIONS: &[&str] = &[
    "ms-dotnettools.csharp",
    "ms-dotnettools.csdevkit",
    "editorconfig.editorconfig",
];

/// A workspace descriptor listing the active project folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceManifest {
    /// One entry per active project, in host order.
    pub folders: Vec<Folder>,
    /// Extension recommendations.
    pub extensions: Extensions,
    /// Editor settings applied to the workspace.
    pub settings: Settings,
}

/// A folder entry of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Folder {
    /// Display name.
    pub name: String,
    /// Folder path, as the host reported it.
    pub path: String,
}

/// The `extensions` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extensions {
    /// Extension identifiers.
    pub recommendations: Vec<String>,
}

/// The `settings` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Stops the C# tooling from picking a solution on its own.
    #[serde(rename = "dotnet.defaultSolution")]
    pub default_solution: String,
    /// Globs hidden from the explorer.
    #[serde(rename = "files.exclude")]
    pub files_exclude: BTreeMap<String, bool>,
    /// Globs skipped by search.
    #[serde(rename = "search.exclude")]
    pub search_exclude: BTreeMap<String, bool>,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            recommendations: RECOMMENDED_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_solution: "disable".to_string(),
            files_exclude: globs(&["**/.vs", "**/bin", "**/obj"]),
            search_exclude: globs(&["**/.sbox"]),
        }
    }
}

fn globs(patterns: &[&str]) -> BTreeMap<String, bool> {
    patterns.iter().map(|p| ((*p).to_string(), true)).collect()
}

impl From<&ProjectRef> for Folder {
    fn from(project: &ProjectRef) -> Self {
        Self {
            name: project.name.clone(),
            path: project.root.to_string_lossy().into_owned(),
        }
    }
}

impl WorkspaceManifest {
    /// Build the manifest for `projects` with the fixed extension and settings blocks.
    #[must_use]
    pub fn from_projects(projects: &[ProjectRef]) -> Self {
        Self {
            folders: projects.iter().map(Folder::from).collect(),
            extensions: Extensions::default(),
            settings: Settings::default(),
        }
    }

    /// Render as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest to `target`, replacing whatever is there.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the parent directory or the file cannot be
    /// written.
    pub fn write(&self, target: &Path) -> Result<()> {
        let mut json = self.to_json()?;
        json.push('\n');

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(target, json).map_err(|source| Error::Io {
            path: target.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %target.display(),
            folders = self.folders.len(),
            "wrote workspace manifest"
        );
        Ok(())
    }
}

/// Build the manifest for `projects` and write it to `target`.
///
/// # Errors
///
/// See [`WorkspaceManifest::write`].
pub fn write_manifest(projects: &[ProjectRef], target: &Path) -> Result<()> {
    WorkspaceManifest::from_projects(projects).write(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core() -> Vec<ProjectRef> {
        vec![ProjectRef::new("core", "/p/core")]
    }

    #[test]
    fn test_single_project_manifest() {
        let manifest = WorkspaceManifest::from_projects(&core());
        let json = manifest.to_json().unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "folders": [
            {
              "name": "core",
              "path": "/p/core"
            }
          ],
          "extensions": {
            "recommendations": [
              "ms-dotnettools.csharp",
              "ms-dotnettools.csdevkit",
              "editorconfig.editorconfig"
            ]
          },
          "settings": {
            "dotnet.defaultSolution": "disable",
            "files.exclude": {
              "**/.vs": true,
              "**/bin": true,
              "**/obj": true
            },
            "search.exclude": {
              "**/.sbox": true
            }
          }
        }
        "#);
    }

    #[test]
    fn test_backslashes_are_escaped() {
        let projects = vec![ProjectRef::new("core", r"C:\p\core")];
        let manifest = WorkspaceManifest::from_projects(&projects);
        let json = manifest.to_json().unwrap();
        assert!(json.contains(r#""path": "C:\\p\\core""#));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["folders"][0]["path"], r"C:\p\core");
    }

    #[test]
    fn test_folders_keep_host_order() {
        let projects = vec![
            ProjectRef::new("zeta", "/z"),
            ProjectRef::new("alpha", "/a"),
        ];
        let manifest = WorkspaceManifest::from_projects(&projects);
        let names: Vec<_> = manifest.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("cursor.code-workspace");

        write_manifest(&core(), &target).unwrap();
        let first = std::fs::read(&target).unwrap();
        write_manifest(&core(), &target).unwrap();
        let second = std::fs::read(&target).unwrap();

        assert_eq!(first, second);
        assert!(first.ends_with(b"}\n"));
    }

    #[test]
    fn test_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("ws").join("cursor.code-workspace");
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        let stale = r#"{"folders":[{"name":"stale","path":"/old"}],"extra":1}"#;
        std::fs::write(&target, stale).unwrap();

        write_manifest(&core(), &target).unwrap();
        let written = std::fs::read_to_string(&target).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["folders"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["folders"][0]["name"], "core");
        assert!(parsed.get("extra").is_none());
    }

    #[test]
    fn test_unwritable_target_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let target = blocker.join("cursor.code-workspace");
        let err = write_manifest(&core(), &target).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
