//! Switching the focused workspace.
//!
//! `swaymsg` is silent when a command succeeds.  A switch therefore only
//! counts as successful when the tool exits with `0` **and** prints
//! nothing; anything it says is treated as an error message.

use crate::application::Application;
use crate::traits::SwitchTool;
use log::{debug, warn};
use std::time::Duration;

/// Errors from a workspace switch.
#[derive(Debug, thiserror::Error)]
pub enum SwitchError {
    /// The tool could not be started.
    #[error("failed to run switch tool: {0}")]
    Spawn(#[from] std::io::Error),
    /// The tool exited non-zero or was killed.
    #[error("switch tool {status}: {output}")]
    Failed { status: String, output: String },
    /// The tool exited `0` but printed something.  Displays as the output
    /// verbatim.
    #[error("{0}")]
    UnexpectedOutput(String),
    /// The tool did not finish in time.
    #[error("switch tool did not finish within {0:?}")]
    TimedOut(Duration),
}

/// Ask `tool` to focus workspace `selector` and interpret the result.
///
/// Selectors other than the two known applications are passed through.
pub fn switch_to<T: SwitchTool + ?Sized>(tool: &T, selector: i64) -> Result<(), SwitchError> {
    match Application::from_workspace(selector) {
        Some(app) => debug!("switching to {} (workspace {})", app, selector),
        None => debug!("workspace {} is not a known application, passing through", selector),
    }

    let out = tool.focus_workspace(selector)?;

    if !out.exited_ok() {
        let status = match out.code {
            Some(code) => format!("exited with status {}", code),
            None => "was terminated by a signal".to_string(),
        };
        return Err(SwitchError::Failed {
            status,
            output: out.output,
        });
    }

    if !out.output.is_empty() {
        warn!("some error from switch tool: {}", out.output);
        return Err(SwitchError::UnexpectedOutput(out.output));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ToolOutput;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::io;
    use std::sync::{Mutex, Once};

    //  Log capture

    /// Collects every record logged while the tests run.
    struct CaptureLog(Mutex<Vec<(Level, String)>>);

    impl Log for CaptureLog {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            self.0
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLog = CaptureLog(Mutex::new(Vec::new()));
    static INSTALL: Once = Once::new();

    fn capture_logs() {
        INSTALL.call_once(|| {
            let _ = log::set_logger(&CAPTURE);
            log::set_max_level(LevelFilter::Trace);
        });
    }

    fn warned(needle: &str) -> bool {
        CAPTURE
            .0
            .lock()
            .unwrap()
            .iter()
            .any(|(level, msg)| *level == Level::Warn && msg.contains(needle))
    }

    /// Replays a fixed outcome and records the requested workspaces.
    struct ScriptedTool {
        outcome: fn() -> io::Result<ToolOutput>,
        calls: Mutex<Vec<i64>>,
    }

    impl ScriptedTool {
        fn new(outcome: fn() -> io::Result<ToolOutput>) -> Self {
            Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl SwitchTool for ScriptedTool {
        fn focus_workspace(&self, number: i64) -> io::Result<ToolOutput> {
            self.calls.lock().unwrap().push(number);
            (self.outcome)()
        }
    }

    #[test]
    fn silent_zero_exit_is_success() {
        let tool = ScriptedTool::new(|| Ok(ToolOutput::silent()));
        switch_to(&tool, 0).unwrap();
        switch_to(&tool, 1).unwrap();
        assert_eq!(*tool.calls.lock().unwrap(), vec![0, 1]);
    }

    #[test]
    fn unknown_selector_is_passed_through() {
        let tool = ScriptedTool::new(|| Ok(ToolOutput::silent()));
        switch_to(&tool, 42).unwrap();
        assert_eq!(*tool.calls.lock().unwrap(), vec![42]);
    }

    #[test]
    fn output_on_zero_exit_is_an_error() {
        let tool = ScriptedTool::new(|| {
            Ok(ToolOutput {
                code: Some(0),
                output: "Error: no such workspace\n".into(),
            })
        });
        let err = switch_to(&tool, 1).unwrap_err();
        assert!(matches!(err, SwitchError::UnexpectedOutput(_)));
        assert_eq!(err.to_string(), "Error: no such workspace\n");
    }

    #[test]
    fn output_on_zero_exit_is_logged() {
        capture_logs();
        let tool = ScriptedTool::new(|| {
            Ok(ToolOutput {
                code: Some(0),
                output: "Error: workspace 9 is on another output\n".into(),
            })
        });
        let err = switch_to(&tool, 9).unwrap_err();
        assert_eq!(err.to_string(), "Error: workspace 9 is on another output\n");
        assert!(warned("workspace 9 is on another output"));
    }

    #[test]
    fn whitespace_output_is_an_error() {
        let tool = ScriptedTool::new(|| {
            Ok(ToolOutput {
                code: Some(0),
                output: " \n".into(),
            })
        });
        let err = switch_to(&tool, 0).unwrap_err();
        assert_eq!(err.to_string(), " \n");
    }

    #[test]
    fn non_zero_exit_carries_output() {
        let tool = ScriptedTool::new(|| {
            Ok(ToolOutput {
                code: Some(2),
                output: "Unable to connect to sway socket".into(),
            })
        });
        let err = switch_to(&tool, 1).unwrap_err();
        assert!(matches!(err, SwitchError::Failed { .. }));
        let msg = err.to_string();
        assert!(msg.contains("status 2"), "{}", msg);
        assert!(msg.contains("Unable to connect to sway socket"), "{}", msg);
    }

    #[test]
    fn killed_tool_fails() {
        let tool = ScriptedTool::new(|| {
            Ok(ToolOutput {
                code: None,
                output: String::new(),
            })
        });
        let err = switch_to(&tool, 0).unwrap_err();
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn spawn_failure_keeps_reason() {
        let tool = ScriptedTool::new(|| {
            Err(io::Error::new(io::ErrorKind::NotFound, "swaymsg: not found"))
        });
        let err = switch_to(&tool, 0).unwrap_err();
        assert!(matches!(err, SwitchError::Spawn(_)));
        assert!(err.to_string().contains("swaymsg: not found"));
    }
}
