use super::*;

use std::io;

#[test]
fn test_missing_editor_is_not_a_failure() {
    let searched = vec![PathBuf::from("/opt/cursor/cursor")];
    assert!(finish(Err(Error::NotFound { searched })).is_ok());
    assert!(finish(Ok(())).is_ok());
}

#[test]
fn test_launch_failure_is_reported() {
    let err = Error::Launch {
        program: PathBuf::from("/opt/cursor/cursor"),
        source: io::Error::other("exec format error"),
    };
    let report = finish(Err(err)).unwrap_err();
    assert!(report.to_string().contains("/opt/cursor/cursor"));
}

#[test]
fn test_filesystem_root_as_only_project() {
    let projects = active_projects(Path::new("/"), &[]).unwrap().0;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "/");
    assert_eq!(projects[0].root, Path::new("/"));
}

#[test]
fn test_default_project_is_named_after_root() {
    let projects = active_projects(Path::new("/p/my-game"), &[]).unwrap().0;
    assert_eq!(projects[0].name, "my-game");
}

#[test]
fn test_explicit_projects_replace_root() {
    let specs = ["core=/p/core".to_string(), "/p/addon".to_string()];
    let projects = active_projects(Path::new("/p/game"), &specs).unwrap().0;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "core");
    assert_eq!(projects[0].root, Path::new("/p/core"));
    assert_eq!(projects[1].name, "addon");
}

#[test]
fn test_bad_project_flag_is_rejected() {
    assert!(active_projects(Path::new("/p"), &[String::new()]).is_err());
}

#[test]
fn test_solution_root_is_canonical() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("game");
    std::fs::create_dir(&nested).unwrap();

    let root = solution_root(Some(nested.join("..").join("game"))).unwrap();
    assert_eq!(root, std::fs::canonicalize(&nested).unwrap());
    assert!(root.is_absolute());
}

#[test]
fn test_missing_solution_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let err = solution_root(Some(missing)).unwrap_err();
    assert!(err.to_string().contains("Cannot open directory"));
}
