//! Projects the host has open, and how the host reports them.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// One project the host currently has open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    /// Stable identifier, shown as the folder name in the workspace.
    pub name: String,
    /// Root directory of the project.
    pub root: PathBuf,
}

impl ProjectRef {
    /// Create a project reference.
    #[must_use]
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Name a project after the last component of its root directory.
    ///
    /// A root without a final component, such as `/`, is named after the
    /// whole path.
    #[must_use]
    pub fn from_dir(root: &Path) -> Self {
        let name = root.file_name().map_or_else(
            || root.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        Self::new(name, root)
    }

    /// Parse a `NAME=DIR` pair, or a bare `DIR` named after its last component.
    ///
    /// # Errors
    ///
    /// Fails on an empty spec or a `NAME=DIR` pair with an empty half.
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.is_empty() {
            bail!("Invalid project: expected NAME=DIR or DIR");
        }
        match spec.split_once('=') {
            Some((name, root)) => {
                if name.is_empty() || root.is_empty() {
                    bail!("Invalid project {spec:?}: expected NAME=DIR");
                }
                Ok(Self::new(name, root))
            }
            None => Ok(Self::from_dir(Path::new(spec))),
        }
    }
}

/// Query for the host's currently active projects.
pub trait ProjectSource {
    /// Active projects in the order they should appear in the workspace.
    fn active_projects(&self) -> Vec<ProjectRef>;
}

/// A fixed project list, for hosts that know their projects up front.
#[derive(Debug, Clone, Default)]
pub struct StaticProjects(pub Vec<ProjectRef>);

impl ProjectSource for StaticProjects {
    fn active_projects(&self) -> Vec<ProjectRef> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named() {
        let p = ProjectRef::parse("core=/p/core").unwrap();
        assert_eq!(p, ProjectRef::new("core", "/p/core"));
    }

    #[test]
    fn test_parse_bare_dir_uses_last_component() {
        let p = ProjectRef::parse("/games/my_addon").unwrap();
        assert_eq!(p.name, "my_addon");
        assert_eq!(p.root, PathBuf::from("/games/my_addon"));
    }

    #[test]
    fn test_parse_rejects_empty_halves() {
        assert!(ProjectRef::parse("=/p").is_err());
        assert!(ProjectRef::parse("core=").is_err());
        assert!(ProjectRef::parse("").is_err());
    }

    #[test]
    fn test_filesystem_root_is_named_after_its_path() {
        let p = ProjectRef::from_dir(Path::new("/"));
        assert_eq!(p.name, "/");
        assert_eq!(p.root, PathBuf::from("/"));
    }

    #[test]
    fn test_static_projects_preserve_order() {
        let source = StaticProjects(vec![
            ProjectRef::new("beta", "/games/beta"),
            ProjectRef::new("alpha", "/games/alpha"),
        ]);
        let names: Vec<_> = source
            .active_projects()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["beta", "alpha"]);
    }
}
