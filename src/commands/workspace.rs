use anyhow::Result;
use std::path::PathBuf;

use cursor_launch::{workspace::write_manifest, Config, ProjectSource};

use super::{active_projects, solution_root};

pub fn cmd_workspace(
    dir: Option<PathBuf>,
    output: Option<PathBuf>,
    projects: &[String],
) -> Result<()> {
    let root = solution_root(dir)?;
    let target = match output {
        Some(path) => path,
        None => root.join(Config::load()?.workspace.file),
    };
    let projects = active_projects(&root, projects)?.active_projects();
    write_manifest(&projects, &target)?;
    println!("{}", target.display());
    Ok(())
}
