//! External command execution

use crate::error::ProcessError;
use crate::report::Reporter;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::time::timeout;

/// Run a command, streaming its output through the reporter.
///
/// The child is killed when `limit` elapses.
pub async fn run_with_timeout(
    program: &str,
    args: &[&str],
    cwd: &Path,
    limit: Duration,
    reporter: &dyn Reporter,
) -> Result<(), ProcessError> {
    let mut child = command(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ProcessError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let streamed = async {
        let mut stdout_lines = stdout.map(|s| BufReader::new(s).lines());
        let mut stderr_lines = stderr.map(|s| BufReader::new(s).lines());

        while stdout_lines.is_some() || stderr_lines.is_some() {
            tokio::select! {
                line = next_line(&mut stdout_lines), if stdout_lines.is_some() => match line {
                    Some(line) => reporter.info(&line),
                    None => stdout_lines = None,
                },
                line = next_line(&mut stderr_lines), if stderr_lines.is_some() => match line {
                    Some(line) => reporter.warn(&line),
                    None => stderr_lines = None,
                },
            }
        }

        child.wait().await
    };

    match timeout(limit, streamed).await {
        Ok(Ok(status)) if status.success() => Ok(()),
        Ok(Ok(status)) => Err(ProcessError::Failed {
            program: program.to_string(),
            code: status.code().unwrap_or(-1),
        }),
        Ok(Err(source)) => Err(ProcessError::Spawn {
            program: program.to_string(),
            source,
        }),
        Err(_) => {
            let _ = child.kill().await;
            Err(ProcessError::TimedOut {
                program: program.to_string(),
                timeout: limit,
            })
        }
    }
}

/// Run a command attached to the current terminal until it exits
pub async fn run_inherited(program: &str, args: &[&str], cwd: &Path) -> Result<(), ProcessError> {
    let status = command(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|source| ProcessError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ProcessError::Failed {
            program: program.to_string(),
            code: status.code().unwrap_or(-1),
        })
    }
}

async fn next_line<R>(reader: &mut Option<tokio::io::Lines<R>>) -> Option<String>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    match reader {
        Some(lines) => lines.next_line().await.ok().flatten(),
        None => None,
    }
}

// Node package managers ship as .cmd shims on Windows
#[cfg(windows)]
fn command(program: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(program);
    cmd
}

#[cfg(not(windows))]
fn command(program: &str) -> Command {
    Command::new(program)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::report::{Level, RecordingReporter};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_output_is_streamed_to_reporter() {
        let tmp = TempDir::new().unwrap();
        let reporter = RecordingReporter::new();
        run_with_timeout(
            "sh",
            &["-c", "echo hello; echo oops 1>&2"],
            tmp.path(),
            Duration::from_secs(10),
            &reporter,
        )
        .await
        .unwrap();

        assert_eq!(reporter.at(Level::Info), vec!["hello"]);
        assert_eq!(reporter.at(Level::Warn), vec!["oops"]);
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_failure() {
        let tmp = TempDir::new().unwrap();
        let result = run_inherited("sh", &["-c", "exit 3"], tmp.path()).await;
        assert!(matches!(result, Err(ProcessError::Failed { code: 3, .. })));
    }

    #[tokio::test]
    async fn test_timeout_kills_child() {
        let tmp = TempDir::new().unwrap();
        let reporter = RecordingReporter::new();
        let result = run_with_timeout(
            "sh",
            &["-c", "sleep 5"],
            tmp.path(),
            Duration::from_millis(200),
            &reporter,
        )
        .await;
        assert!(matches!(result, Err(ProcessError::TimedOut { .. })));
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let tmp = TempDir::new().unwrap();
        let result = run_inherited("nextcraft-definitely-missing-binary", &[], tmp.path()).await;
        assert!(matches!(result, Err(ProcessError::Spawn { .. })));
    }
}
