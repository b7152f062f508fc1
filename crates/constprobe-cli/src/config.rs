//! Layered probe settings
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file,
//! `CONSTPROBE_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use constprobe_process::{CompilerProbe, Launcher};
use serde::Deserialize;

use crate::{
    cli::Cli,
    error::{CliError, Result},
};

/// Configuration file picked up from the current directory
pub const DEFAULT_CONFIG_FILE: &str = "constprobe.toml";

/// Prefix of environment variables read into the settings
pub const ENV_PREFIX: &str = "CONSTPROBE";

/// Settings for one probe run
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// Compiler executable
    pub cl: Option<PathBuf>,
    /// Print every variant and pass compiler output through
    pub verbose: bool,
    /// Compatibility launcher program
    pub launcher: Option<String>,
    /// Run the compiler without any launcher
    pub native: bool,
    /// Per-probe timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Working directory of the compiler
    pub work_dir: Option<PathBuf>,
}

impl ProbeSettings {
    /// Overlay command-line flags on top of these settings
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(ref cl) = cli.cl {
            self.cl = Some(cl.clone());
        }
        if let Some(ref launcher) = cli.launcher {
            self.launcher = Some(launcher.clone());
            self.native = false;
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_secs = Some(timeout);
        }
        if let Some(ref dir) = cli.work_dir {
            self.work_dir = Some(dir.clone());
        }
        self.verbose |= cli.verbose;
        self.native |= cli.native;
        self
    }

    /// Launcher policy for this run
    pub fn launcher(&self) -> Launcher {
        if self.native {
            Launcher::Native
        } else if let Some(ref program) = self.launcher {
            Launcher::compat(program)
        } else {
            Launcher::for_host()
        }
    }

    /// Per-probe timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Build the compiler probe described by these settings
    pub fn probe(&self) -> Result<CompilerProbe> {
        let compiler = self.cl.as_ref().ok_or(CliError::MissingCompiler)?;

        Ok(CompilerProbe::new(compiler, self.launcher())
            .verbose(self.verbose)
            .timeout(self.timeout())
            .work_dir(self.work_dir.clone()))
    }
}

/// Loads settings from file and environment
pub struct SettingsLoader {
    /// Explicit configuration file (required to exist when set)
    config_path: Option<PathBuf>,
    /// Environment prefix
    env_prefix: String,
}

impl SettingsLoader {
    /// Loader reading `./constprobe.toml` (if present) and `CONSTPROBE_*`
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Read settings from an explicit file instead
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Use a different environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load settings from every configured source
    pub fn load(&self) -> Result<ProbeSettings> {
        let file = match self.config_path {
            Some(ref path) => File::from(path.as_path()).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(&self.env_prefix).try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Load settings and overlay the command line
    pub fn load_for(cli: &Cli) -> Result<ProbeSettings> {
        let loader = match cli.config {
            Some(ref path) => Self::new().with_path(path),
            None => Self::new(),
        };
        Ok(loader.load()?.merge_cli(cli))
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
