//! Process configuration

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for running a process
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// Executable command
    pub command: OsString,
    /// Command arguments
    pub args: Vec<OsString>,
    /// Working directory (None = current dir)
    pub working_dir: Option<PathBuf>,
    /// Timeout for process execution (None = no timeout)
    pub timeout: Option<Duration>,
    /// Discard stdout and stderr instead of passing them through
    pub silence_output: bool,
}

impl ProcessConfig {
    /// Create new process configuration
    pub fn new(command: impl Into<OsString>) -> Self {
        Self {
            command: command.into(),
            args: vec![],
            working_dir: None,
            timeout: None,
            silence_output: true,
        }
    }

    /// Set command arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set working directory
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Set timeout duration
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Enable/disable output suppression
    pub fn silence_output(mut self, silence: bool) -> Self {
        self.silence_output = silence;
        self
    }

    /// Render the command line for logging
    pub fn display_command(&self) -> String {
        std::iter::once(&self.command)
            .chain(&self.args)
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
