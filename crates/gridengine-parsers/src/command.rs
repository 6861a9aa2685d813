//! Command execution utilities for scheduler queries.

use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Error type for command execution.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to execute {command}: {error}")]
    Execution { command: String, error: String },
    #[error("{command} returned non zero ({status}): {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("{command} did not finish within {timeout:?}")]
    TimedOut { command: String, timeout: Duration },
}

impl CommandError {
    /// Name of the command that failed.
    pub fn command(&self) -> &str {
        match self {
            Self::Execution { command, .. }
            | Self::Failed { command, .. }
            | Self::TimedOut { command, .. } => command,
        }
    }
}

/// Execute a command and return stdout as a string.
///
/// The child is killed if it has not exited once `timeout` elapses. A non-zero
/// exit status is an error; stderr is carried in the error for diagnostics.
pub async fn run_command(
    cmd: &mut Command,
    name: &str,
    timeout: Duration,
) -> Result<String, CommandError> {
    cmd.kill_on_drop(true);
    tracing::debug!(command = name, ?timeout, "running command");

    let output = match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(result) => result.map_err(|e| CommandError::Execution {
            command: name.to_string(),
            error: e.to_string(),
        })?,
        Err(_) => {
            tracing::warn!(command = name, ?timeout, "command timed out");
            return Err(CommandError::TimedOut {
                command: name.to_string(),
                timeout,
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CommandError::Failed {
            command: name.to_string(),
            status: output.status,
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
