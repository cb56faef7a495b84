use crate::core::error::{PipMgrError, Result};
use std::ffi::OsStr;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// Captured result of a finished child process.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

pub struct ProcessExecutor;

impl ProcessExecutor {
    pub async fn capture<S: AsRef<OsStr>>(program: &OsStr, args: &[S]) -> Result<CapturedOutput> {
        debug!(
            "running {} {}",
            program.to_string_lossy(),
            args.iter()
                .map(|a| a.as_ref().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| {
                PipMgrError::CommandFailed(format!("{}: {}", program.to_string_lossy(), e))
            })?;

        let captured = CapturedOutput {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        debug!("exit code {}", captured.exit_code);

        Ok(captured)
    }

    pub fn check_command_exists(cmd: &str) -> bool {
        Self::locate(cmd).is_some()
    }

    /// Resolve a bare command name to its absolute path via `which` (`where` on Windows).
    pub fn locate(cmd: &str) -> Option<PathBuf> {
        let finder = if cfg!(windows) { "where" } else { "which" };
        let output = std::process::Command::new(finder).arg(cmd).output().ok()?;
        if !output.status.success() {
            return None;
        }

        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn capture_collects_streams_and_exit_code() {
        let out = ProcessExecutor::capture(
            OsStr::new("sh"),
            &["-c", "echo out; echo err >&2; exit 3"],
        )
        .await
        .unwrap();

        assert_eq!(out.exit_code, 3);
        assert!(!out.success());
        assert_eq!(out.stdout.trim(), "out");
        assert_eq!(out.stderr.trim(), "err");
    }

    #[tokio::test]
    async fn missing_program_is_command_failure() {
        let err = ProcessExecutor::capture(OsStr::new("pip-mgr-no-such-binary"), &["x"])
            .await
            .unwrap_err();

        assert!(matches!(err, PipMgrError::CommandFailed(_)));
        assert!(err.to_string().starts_with("Error: pip-mgr-no-such-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn locate_finds_sh() {
        let sh = ProcessExecutor::locate("sh").unwrap();
        assert!(sh.is_absolute());
        assert!(ProcessExecutor::check_command_exists("sh"));
        assert!(!ProcessExecutor::check_command_exists("pip-mgr-no-such-binary"));
    }
}
