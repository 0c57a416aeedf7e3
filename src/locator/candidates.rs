use std::path::PathBuf;

/// Conventional install locations for the current platform, most specific first.
#[cfg(target_os = "windows")]
pub(super) fn platform_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(local) = dirs::data_local_dir() {
        paths.push(local.join(r"Programs\cursor\Cursor.exe"));
    }
    for var in ["ProgramFiles", "ProgramFiles(x86)"] {
        if let Some(dir) = std::env::var_os(var) {
            paths.push(PathBuf::from(dir).join(r"Cursor\Cursor.exe"));
        }
    }
    paths
}

#[cfg(target_os = "macos")]
pub(super) fn platform_candidates() -> Vec<PathBuf> {
    const BUNDLE_EXE: &str = "Cursor.app/Contents/MacOS/Cursor";
    let mut paths = vec![PathBuf::from("/Applications").join(BUNDLE_EXE)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join("Applications").join(BUNDLE_EXE));
    }
    paths
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub(super) fn platform_candidates() -> Vec<PathBuf> {
    const SYSTEM: [&str; 4] = [
        "/usr/bin/cursor",
        "/usr/local/bin/cursor",
        "/opt/Cursor/cursor",
        "/opt/cursor/cursor",
    ];
    let home = dirs::home_dir();
    let mut paths = Vec::new();
    if let Some(home) = &home {
        paths.push(home.join(".local/bin/cursor"));
    }
    paths.extend(SYSTEM.into_iter().map(PathBuf::from));
    if let Some(home) = &home {
        paths.push(home.join("Applications/cursor.AppImage"));
    }
    paths
}

/// Name of the launcher command Cursor installs on `PATH`.
pub(super) const PATH_COMMAND: &str = "cursor";
