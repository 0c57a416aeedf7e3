use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Start `executable` with `args` and return immediately.
///
/// The child gets no stdio and, on Windows, no console window. It is not
/// waited on or tracked after a successful spawn.
///
/// # Errors
///
/// Returns [`Error::Launch`] when the OS cannot start the process.
pub fn launch(executable: &Path, args: &[OsString]) -> Result<()> {
    let mut cmd = Command::new(executable);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }

    let child = cmd.spawn().map_err(|source| Error::Launch {
        program: executable.to_path_buf(),
        source,
    })?;
    tracing::info!(
        program = %executable.display(),
        pid = child.id(),
        ?args,
        "launched editor"
    );
    Ok(())
}
