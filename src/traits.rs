//! Core traits that decouple the panel from sway and from the filesystem.
//!
//! The HTTP layer only ever talks to these two abstractions.  Concrete
//! backends live in [`sway`](crate::sway); tests substitute in-memory
//! doubles.

use std::io;

/// A source of the raw workspace-state document.
///
/// The document is the JSON array sway prints for `get_workspaces`.  It is
/// produced by something outside the panel and read fresh on every request.
pub trait StateSource: Send + Sync + 'static {
    /// Return the whole document as text.
    ///
    /// The error should say *where* the read was attempted (a path, a
    /// command) so it is useful when shown to the user verbatim.
    fn read_state(&self) -> io::Result<String>;
}

/// Something that can ask the window manager to focus a workspace.
///
/// Implementations only report what happened; deciding whether that counts
/// as success is done by [`switch_to`](crate::switch::switch_to).
pub trait SwitchTool: Send + Sync + 'static {
    /// Focus workspace `number`.
    ///
    /// Returns `Err` only if the tool could not be started at all.
    fn focus_workspace(&self, number: i64) -> io::Result<ToolOutput>;
}

/// What a [`SwitchTool`] invocation produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// Standard output followed by standard error.
    pub output: String,
}

impl ToolOutput {
    /// A silent run that exited with `0`.
    pub fn silent() -> Self {
        Self {
            code: Some(0),
            output: String::new(),
        }
    }

    /// Whether the process exited with status `0`.
    pub fn exited_ok(&self) -> bool {
        self.code == Some(0)
    }
}
