//! Running external tools (yt-dlp, notify-send) as blocking subprocesses.

use std::ffi::OsStr;
use std::io;
use std::process::{Command, Output};

/// An external tool could not be started or exited unsuccessfully.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("{program} could not start: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} failed (code={code:?}): {stderr}")]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl ToolError {
    /// True when the program itself is missing from PATH.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ToolError::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Runs `program` with `args`, waits for it, and returns stdout on success.
/// Stderr of a failed run is trimmed into the error.
pub fn run_tool<I, S>(program: &str, args: I) -> Result<Vec<u8>, ToolError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| ToolError::Spawn {
            program: program.to_string(),
            source,
        })?;
    check_status(program, output)
}

fn check_status(program: &str, output: Output) -> Result<Vec<u8>, ToolError> {
    if output.status.success() {
        return Ok(output.stdout);
    }
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    Err(ToolError::Failed {
        program: program.to_string(),
        code: output.status.code(),
        stderr: if stderr.is_empty() {
            "unknown error".to_string()
        } else {
            stderr
        },
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn stdout_of_successful_run() {
        let out = run_tool("sh", ["-c", "printf hello"]).unwrap();
        assert_eq!(out, b"hello");
    }

    #[test]
    fn failure_carries_code_and_stderr() {
        let err = run_tool("sh", ["-c", "echo boom >&2; exit 3"]).unwrap_err();
        match err {
            ToolError::Failed { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn silent_failure_has_placeholder() {
        let err = run_tool("sh", ["-c", "exit 1"]).unwrap_err();
        assert!(err.to_string().ends_with("unknown error"));
    }

    #[test]
    fn missing_program() {
        let err = run_tool("yank-test-no-such-program", ["x"]).unwrap_err();
        assert!(err.is_not_found());
    }
}
