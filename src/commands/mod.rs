pub mod config;
pub mod locate;
pub mod open;
pub mod workspace;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use cursor_launch::{Config, CursorEditor, Error, ProjectRef, StaticProjects};

/// Resolve `dir` (or the current directory) to an absolute solution root.
fn solution_root(dir: Option<PathBuf>) -> Result<PathBuf> {
    let Some(dir) = dir else {
        return std::env::current_dir().context("Could not determine current directory");
    };
    std::fs::canonicalize(&dir)
        .with_context(|| format!("Cannot open directory {}", dir.display()))
}

/// Active projects from `--project` flags, or the solution root alone.
fn active_projects(root: &Path, specs: &[String]) -> Result<StaticProjects> {
    let mut projects = specs
        .iter()
        .map(String::as_str)
        .map(ProjectRef::parse)
        .collect::<Result<Vec<_>>>()?;
    if projects.is_empty() {
        projects.push(ProjectRef::from_dir(root));
    }
    Ok(StaticProjects(projects))
}

fn build_editor(root: PathBuf, specs: &[String]) -> Result<CursorEditor<StaticProjects>> {
    let config = Config::load()?;
    let projects = active_projects(&root, specs)?;
    Ok(CursorEditor::new(config, root, projects))
}

/// A missing editor only aborts the action; every other failure is an error.
fn finish(result: cursor_launch::Result<()>) -> Result<()> {
    match result {
        Err(Error::NotFound { searched }) => {
            warn_not_found(&searched);
            Ok(())
        }
        other => other.map_err(Into::into),
    }
}

fn warn_not_found(searched: &[PathBuf]) {
    tracing::warn!("Cursor not found; run: cursor-launch config set cursor.path <PATH>");
    for path in searched {
        tracing::debug!(path = %path.display(), "searched");
    }
}
