//! Subprocess spawning with optional stdin and captured stdout.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::error::ProcessError;

use super::CommandLine;

/// Trait for running external commands.
///
/// This abstraction lets the dispatcher be driven by a fake in tests.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `command`, writing `input` to its stdin first when given.
    ///
    /// Resolves with the complete, untrimmed stdout on exit code 0.
    async fn run(&self, command: &CommandLine, input: Option<&str>) -> Result<String, ProcessError>;
}

/// Runner that spawns real processes with tokio.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    working_dir: Option<PathBuf>,
    timeout: Duration,
}

impl ShellRunner {
    pub fn new(timeout: Duration) -> Self {
        Self {
            working_dir: None,
            timeout,
        }
    }

    /// Run every command from `dir` instead of the current directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

#[async_trait]
impl ProcessRunner for ShellRunner {
    async fn run(&self, command: &CommandLine, input: Option<&str>) -> Result<String, ProcessError> {
        let rendered = command.to_string();
        info!("Running: {}", rendered);

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: rendered.clone(),
            source,
        })?;
        let stdin = child.stdin.take();

        // Feed stdin while draining stdout so a chatty child never blocks on a full pipe.
        let write_input = async move {
            match (stdin, input) {
                (Some(mut stdin), Some(text)) => {
                    stdin.write_all(text.as_bytes()).await?;
                    stdin.shutdown().await
                }
                _ => Ok(()),
            }
        };

        let (write_result, output) = timeout(self.timeout, async {
            tokio::join!(write_input, child.wait_with_output())
        })
        .await
        .map_err(|_| ProcessError::Timeout {
            command: rendered.clone(),
            elapsed: self.timeout,
        })?;

        let output = output.map_err(|source| ProcessError::SpawnFailed {
            command: rendered.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let code = output.status.code().unwrap_or(-1);
            return Err(ProcessError::NonZeroExit {
                command: rendered,
                code,
                stderr,
            });
        }

        // A child that exits cleanly without reading its input is not a failure.
        if let Err(source) = write_result {
            if source.kind() != ErrorKind::BrokenPipe {
                return Err(ProcessError::StdinFailed {
                    command: rendered,
                    source,
                });
            }
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        debug!("`{}` produced {} bytes", rendered, stdout.len());
        Ok(stdout)
    }
}

/// Check that `program` is installed and on `PATH`.
///
/// Uses the `which` crate for cross-platform executable detection.
pub fn check_installed(program: &str) -> Result<(), ProcessError> {
    which::which(program)
        .map(|_| ())
        .map_err(|_| ProcessError::NotInstalled(program.to_string()))
}
