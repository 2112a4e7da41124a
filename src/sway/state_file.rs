//! [`StateSource`] that reads a workspace dump from disk.
//!
//! The file is written by something outside the panel, typically
//! `swaymsg -t get_workspaces > out.json` from a sway `exec` or a timer.

use crate::traits::StateSource;
use std::io;
use std::path::{Path, PathBuf};

/// Reads the workspace-state document from a fixed path.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Read from `path`.  Nothing is opened until the first request.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file that is read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateSource for StateFile {
    fn read_state(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| io::Error::new(e.kind(), format!("read {}: {}", self.path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Application;
    use crate::workspace::{current_application, StateError};
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Monotonic counter to generate unique file paths per test.
    static TEST_ID: AtomicU32 = AtomicU32::new(0);

    fn tmp_state_path() -> PathBuf {
        let id = TEST_ID.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "swaypanel-test-{}-{}.json",
            std::process::id(),
            id
        ))
    }

    #[test]
    fn reads_document_from_disk() {
        let path = tmp_state_path();
        std::fs::write(&path, r#"[{"num":0,"focused":true}]"#).unwrap();

        let source = StateFile::new(&path);
        let vis = current_application(&source).unwrap();
        assert_eq!(vis.active(), Application::Secondary);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_names_path_and_reason() {
        let path = tmp_state_path();
        let source = StateFile::new(&path);

        let err = current_application(&source).unwrap_err();
        assert!(matches!(err, StateError::Read(ref e) if e.kind() == io::ErrorKind::NotFound));
        let msg = err.to_string();
        assert!(msg.contains(&path.display().to_string()), "{}", msg);
        assert!(msg.contains("os error"), "{}", msg);
    }
}
