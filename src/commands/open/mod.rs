use anyhow::Result;
use std::path::{Path, PathBuf};

use cursor_launch::ProjectRef;

use super::{build_editor, finish, solution_root};

pub fn cmd_file(
    path: &Path,
    line: Option<u32>,
    column: Option<u32>,
    projects: &[String],
) -> Result<()> {
    let editor = build_editor(solution_root(None)?, projects)?;
    finish(editor.open_file(path, line, column))
}

pub fn cmd_solution(dir: Option<PathBuf>, projects: &[String]) -> Result<()> {
    let editor = build_editor(solution_root(dir)?, projects)?;
    finish(editor.open_solution())
}

pub fn cmd_addon(dir: &Path, name: Option<String>, projects: &[String]) -> Result<()> {
    let root = solution_root(Some(dir.to_path_buf()))?;
    let addon = name.map_or_else(
        || ProjectRef::from_dir(&root),
        |name| ProjectRef::new(name, &root),
    );
    let editor = build_editor(solution_root(None)?, projects)?;
    finish(editor.open_addon(&addon))
}
