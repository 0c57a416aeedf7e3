//! Building Cursor's command line and starting it.

mod spawn;


pub use spawn::launch;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Cursor's flag for opening a `path:line[:column]` location.
pub const GOTO_FLAG: &str = "-g";

/// What to open, and where to put the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// File or directory to open.
    pub target: PathBuf,
    /// 1-based line to jump to.
    pub line: Option<u32>,
    /// 1-based column; only used together with `line`.
    pub column: Option<u32>,
}

impl LaunchRequest {
    /// Open `target` without a position.
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            line: None,
            column: None,
        }
    }

    /// Jump to `line` and, if given, `column`.
    #[must_use]
    pub const fn at(mut self, line: Option<u32>, column: Option<u32>) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// The positional token: `path`, `path:line` or `path:line:column`.
    #[must_use]
    pub fn target_token(&self) -> OsString {
        let mut token = self.target.as_os_str().to_os_string();
        if let Some(line) = self.line {
            token.push(format!(":{line}"));
            if let Some(column) = self.column {
                token.push(format!(":{column}"));
            }
        }
        token
    }

    /// Full argument list: the workspace file first when there is one, then
    /// the target, prefixed with [`GOTO_FLAG`] when it carries a position.
    #[must_use]
    pub fn arguments(&self, workspace: Option<&Path>) -> Vec<OsString> {
        let mut args = Vec::with_capacity(3);
        if let Some(ws) = workspace {
            args.push(ws.as_os_str().to_os_string());
        }
        if self.line.is_some() {
            args.push(OsString::from(GOTO_FLAG));
        }
        args.push(self.target_token());
        args
    }
}
