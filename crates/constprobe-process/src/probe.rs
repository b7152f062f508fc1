//! Compile-only probing of a single source snippet

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::{
    config::ProcessConfig,
    error::Result,
    launcher::Launcher,
    manager::ProcessManager,
    scratch::ScratchSource,
};

/// Compiler flags: no banner, compile without linking, UTF-8 sources
pub const COMPILE_ONLY_FLAGS: [&str; 3] = ["/nologo", "/c", "/utf-8"];

/// Compiles snippets and reports whether they were accepted
#[derive(Debug, Clone)]
pub struct CompilerProbe {
    compiler: PathBuf,
    launcher: Launcher,
    verbose: bool,
    timeout: Option<Duration>,
    work_dir: Option<PathBuf>,
    scratch_dir: Option<PathBuf>,
    manager: ProcessManager,
}

impl CompilerProbe {
    /// Create a probe for `compiler`, run through `launcher`
    pub fn new(compiler: impl Into<PathBuf>, launcher: Launcher) -> Self {
        Self {
            compiler: compiler.into(),
            launcher,
            verbose: false,
            timeout: None,
            work_dir: None,
            scratch_dir: None,
            manager: ProcessManager::new(),
        }
    }

    /// Let the compiler's own output through
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Kill compilations that run longer than `timeout`
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Working directory of the compiler, where its object files land
    pub fn work_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.work_dir = dir;
        self
    }

    /// Directory for scratch sources (default: system temp directory)
    pub fn scratch_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.scratch_dir = dir;
        self
    }

    /// Compiler executable
    pub fn compiler(&self) -> &Path {
        &self.compiler
    }

    /// Launcher policy
    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    /// Compile `source` without linking
    ///
    /// # Returns
    /// `true` when the compiler exits with status zero. Failing to start the
    /// compiler (or its launcher) is an error, not an invalid result. The
    /// scratch source is removed on every path.
    pub async fn probe(&self, source: &str) -> Result<bool> {
        let object_dir = self
            .work_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let scratch = match self.scratch_dir {
            Some(ref dir) => ScratchSource::create_in(dir, source, &object_dir)?,
            None => ScratchSource::create(source, &object_dir)?,
        };

        let config = self.command(scratch.path())?;
        let status = self.manager.status(&config).await?;
        let valid = status.success();

        debug!(path = %scratch.path().display(), valid, "Probe finished");
        Ok(valid)
    }

    /// Compiler invocation for one scratch source
    fn command(&self, source: &Path) -> Result<ProcessConfig> {
        let args = COMPILE_ONLY_FLAGS
            .into_iter()
            .map(OsString::from)
            .chain(std::iter::once(source.as_os_str().to_os_string()));

        let compiler = self.resolved_compiler()?;
        let mut config = self
            .launcher
            .command(compiler.as_os_str(), args)
            .silence_output(!self.verbose);
        if let Some(timeout) = self.timeout {
            config = config.timeout(timeout);
        }
        if let Some(ref dir) = self.work_dir {
            config = config.working_dir(dir);
        }
        Ok(config)
    }

    /// Compiler path as seen from the compiler's working directory
    ///
    /// A relative path to a file (`./cl.exe`, `bin/cl.exe`) is anchored to
    /// the current directory so it survives the switch into `work_dir`. Bare
    /// names that are not files here are left for `PATH` lookup.
    fn resolved_compiler(&self) -> Result<PathBuf> {
        let names_local_file =
            self.compiler.components().count() > 1 || self.compiler.is_file();
        if self.work_dir.is_none() || self.compiler.is_absolute() || !names_local_file {
            return Ok(self.compiler.clone());
        }
        Ok(std::env::current_dir()?.join(&self.compiler))
    }
}
