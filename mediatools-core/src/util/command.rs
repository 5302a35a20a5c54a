//! External command execution with a wall-clock timeout.
//!
//! Commands are spawned with piped output, drained on reader threads, and
//! polled until they exit or the deadline passes. A process still running
//! at the deadline is killed and reported as a distinct timeout error.

use std::io::{BufRead, BufReader};
use std::process::{Command, Output, Stdio};
use std::time::{Duration, Instant};

use log::{debug, error};

use crate::error::{command_failed_error, command_start_error, CoreError, CoreResult};

/// Executes a command, enforcing a wall-clock deadline on its runtime.
///
/// Returns the full captured output on a zero exit status. A process that
/// outlives `timeout` is killed and reported as
/// [`CoreError::CommandTimeout`]; a non-zero exit status becomes
/// [`CoreError::CommandFailed`] with the captured stderr attached.
pub fn run_command_with_timeout(cmd: &mut Command, timeout: Duration) -> CoreResult<Output> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    debug!("Executing command: {} {}", program, args.join(" "));

    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            error!("Failed to spawn command '{}': {}", program, e);
            command_start_error(program.clone(), e)
        })?;

    let stdout = BufReader::new(child.stdout.take().unwrap());
    let stderr = BufReader::new(child.stderr.take().unwrap());

    // Drain both pipes on their own threads while polling for exit.
    let stdout_handle = std::thread::spawn(move || {
        let mut lines = Vec::new();
        for line in stdout.lines().map_while(Result::ok) {
            lines.push(line);
        }
        lines
    });

    let stderr_handle = std::thread::spawn(move || {
        let mut lines = Vec::new();
        for line in stderr.lines().map_while(Result::ok) {
            debug!("STDERR: {}", line);
            lines.push(line);
        }
        lines
    });

    let start = Instant::now();
    let mut status = None;

    while start.elapsed() < timeout {
        match child.try_wait() {
            Ok(Some(s)) => {
                status = Some(s);
                break;
            }
            Ok(None) => {
                // Process still running, sleep a bit
                std::thread::sleep(Duration::from_millis(100));
            }
            Err(e) => {
                return Err(CoreError::CommandWait(program, e));
            }
        }
    }

    let Some(status) = status else {
        let _ = child.kill();
        return Err(CoreError::CommandTimeout(program, timeout.as_secs()));
    };

    let all_stdout = stdout_handle.join().unwrap_or_default();
    let all_stderr = stderr_handle.join().unwrap_or_default();

    let output = Output {
        status,
        stdout: all_stdout.join("\n").into_bytes(),
        stderr: all_stderr.join("\n").into_bytes(),
    };

    if !output.status.success() {
        let stderr_text = String::from_utf8_lossy(&output.stderr).into_owned();
        error!(
            "Command '{}' failed with exit code {}: {}",
            program,
            output.status.code().unwrap_or(-1),
            stderr_text
        );
        return Err(command_failed_error(program, output.status, stderr_text));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_echo() {
        let mut cmd = Command::new("echo");
        cmd.arg("test");
        let result = run_command_with_timeout(&mut cmd, Duration::from_secs(5));
        assert!(result.is_ok());
        if let Ok(output) = result {
            let stdout = String::from_utf8_lossy(&output.stdout);
            assert_eq!(stdout.trim(), "test");
        }
    }

    #[test]
    fn test_run_command_timeout() {
        let mut cmd = Command::new("sleep");
        cmd.arg("5");
        let start = Instant::now();
        let err = run_command_with_timeout(&mut cmd, Duration::from_millis(300)).unwrap_err();
        assert!(matches!(err, CoreError::CommandTimeout(_, _)));
        // The child must have been killed well before its own runtime.
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_run_command_nonzero_exit() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("echo boom >&2; exit 3");
        let err = run_command_with_timeout(&mut cmd, Duration::from_secs(5)).unwrap_err();
        match err {
            CoreError::CommandFailed(program, status, stderr) => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(3));
                assert!(stderr.contains("boom"));
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_run_command_missing_binary() {
        let mut cmd = Command::new("definitely-not-a-real-binary");
        let err = run_command_with_timeout(&mut cmd, Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, CoreError::CommandStart(_, _)));
    }
}
