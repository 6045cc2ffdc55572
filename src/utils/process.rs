//! Process execution utilities
//!
//! Runs external programs directly (no shell) and captures their output.

use crate::error::{HelperError, Result};
use serde::Serialize;
use std::{
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
    work_dir: PathBuf,
}

/// Result of a process execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// Exit status code; a child killed by a signal reports the negated signal number
    pub status: i32,
    /// Standard output with trailing whitespace removed
    pub stdout: String,
    /// Standard error with trailing whitespace removed
    pub stderr: String,
}

impl ExecutionResult {
    /// Whether the process exited with status 0
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

impl ProcessRunner {
    /// Create a new process runner that executes in `work_dir`
    #[must_use]
    pub fn new(debug: bool, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            debug,
            work_dir: work_dir.into(),
        }
    }

    /// Directory commands are executed in
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Run a command and capture its output
    #[instrument(skip(self))]
    pub fn execute(&self, command: &str, args: &[&str]) -> Result<ExecutionResult> {
        self.execute_with_env(command, args, &[])
    }

    /// Run a command with extra environment variables and capture its output.
    ///
    /// A non-zero exit is not an error; it is reported through [`ExecutionResult::status`].
    #[instrument(skip(self, env_vars))]
    pub fn execute_with_env(
        &self,
        command: &str,
        args: &[&str],
        env_vars: &[(String, String)],
    ) -> Result<ExecutionResult> {
        let cmd_str = format!("{} {}", command, args.join(" "));

        if self.debug {
            debug!("Running command: {} (in {})", cmd_str, self.work_dir.display());
            if !env_vars.is_empty() {
                debug!("Environment variables: {:?}", env_vars);
            }
        } else {
            info!("+ {}", cmd_str);
        }

        let mut cmd = Command::new(command);
        cmd.args(args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().map_err(|e| {
            let message = format!("Failed to execute command: {e}");
            HelperError::process(cmd_str.clone(), message, Some(e))
        })?;

        let result = ExecutionResult {
            status: exit_status_code(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).trim_end().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        };

        debug!(
            "Command finished: status={}, stdout_len={}, stderr_len={}",
            result.status,
            result.stdout.len(),
            result.stderr.len()
        );

        Ok(result)
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false, ".")
    }
}

#[cfg(unix)]
fn exit_status_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| -signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_status_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
