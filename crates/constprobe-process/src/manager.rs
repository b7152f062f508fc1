//! Process manager - runs a configured command to completion

use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::{
    config::ProcessConfig,
    error::{ProcessError, Result},
};

/// Runs processes one at a time
#[derive(Debug, Clone, Copy)]
pub struct ProcessManager;

impl ProcessManager {
    /// Create new process manager
    pub fn new() -> Self {
        Self
    }

    /// Run a process and wait for its exit status
    ///
    /// # Arguments
    /// * `config` - Process configuration
    ///
    /// # Returns
    /// Exit status of the process. Spawn failures are returned as
    /// `SpawnFailed`; a process that outlives its timeout is killed and
    /// reported as `Timeout`.
    ///
    /// # Examples
    /// ```no_run
    /// use constprobe_process::{ProcessManager, ProcessConfig};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let manager = ProcessManager::new();
    /// let config = ProcessConfig::new("echo").args(["hello"]);
    /// let status = manager.status(&config).await?;
    /// assert!(status.success());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn status(&self, config: &ProcessConfig) -> Result<ExitStatus> {
        debug!(command = %config.display_command(), "Spawning process");

        let mut cmd = Command::new(&config.command);
        cmd.args(&config.args);

        if let Some(ref dir) = config.working_dir {
            cmd.current_dir(dir);
        }

        cmd.stdin(Stdio::null());
        if config.silence_output {
            cmd.stdout(Stdio::null());
            cmd.stderr(Stdio::null());
        }
        cmd.kill_on_drop(true);

        let mut child = cmd.spawn()?;

        let status = match config.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, child.wait()).await {
                Ok(status) => status?,
                Err(_) => {
                    warn!(
                        command = %config.display_command(),
                        "Timeout waiting for process, killing it"
                    );
                    if let Err(e) = child.kill().await {
                        warn!(error = %e, "Failed to kill timed out process");
                    }
                    return Err(ProcessError::Timeout { timeout });
                }
            },
            None => child.wait().await?,
        };

        debug!(code = ?status.code(), "Process exited");
        Ok(status)
    }
}

impl Default for ProcessManager {
    fn default() -> Self {
        Self::new()
    }
}
