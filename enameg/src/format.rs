//! Post-formatting through an external Go formatter.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::EnamegError;

/// Default formatter command.
pub const DEFAULT_FORMATTER: &str = "gofmt";

/// Pipes `code` through `command` and returns its standard output.
///
/// The call blocks until the formatter exits.
///
/// # Errors
///
/// Returns `EnamegError::FormatterIo` when the process cannot be spawned or
/// fed, and `EnamegError::FormatterFailure` when it exits unsuccessfully.
pub fn run_formatter(command: &str, code: &str) -> Result<String, EnamegError> {
    let io_err = |err| EnamegError::FormatterIo {
        command: command.to_owned(),
        source: err,
    };

    debug!(command, bytes = code.len(), "running formatter");
    let mut child = Command::new(command)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(io_err)?;

    if let Some(mut stdin) = child.stdin.take() {
        // A formatter that exits early closes the pipe; its status says why.
        match stdin.write_all(code.as_bytes()) {
            Err(err) if err.kind() != std::io::ErrorKind::BrokenPipe => return Err(io_err(err)),
            _ => {}
        }
    }
    let output = child.wait_with_output().map_err(io_err)?;

    if !output.status.success() {
        let status = output.status.code().unwrap_or(-1);
        let message = String::from_utf8_lossy(&output.stderr).trim_end().to_owned();
        return Err(EnamegError::FormatterFailure {
            command: command.to_owned(),
            status,
            message,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[cfg(unix)]
    #[rstest]
    fn returns_the_formatter_output() {
        let formatted = run_formatter("cat", "package p\n").expect("cat succeeds");
        assert_eq!(formatted, "package p\n");
    }

    #[cfg(unix)]
    #[rstest]
    fn non_zero_exit_is_an_error() {
        let err = run_formatter("false", "package p\n").expect_err("false fails");
        assert!(
            matches!(err, EnamegError::FormatterFailure { status: 1, .. }),
            "unexpected error: {err:?}"
        );
    }

    #[rstest]
    fn missing_formatter_is_an_error() {
        let err = run_formatter("enameg-no-such-formatter", "package p\n")
            .expect_err("spawn fails");
        assert!(
            matches!(err, EnamegError::FormatterIo { .. }),
            "unexpected error: {err:?}"
        );
    }
}
