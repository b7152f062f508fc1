//! Launcher policy: how the compiler binary gets executed on this host

use std::ffi::{OsStr, OsString};

use crate::config::ProcessConfig;

/// Compatibility layer used when the compiler is not native to the host
pub const DEFAULT_COMPAT_LAUNCHER: &str = "wine";

/// How to run the compiler executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launcher {
    /// Run the compiler directly
    Native,
    /// Run the compiler through a binary compatibility layer
    Compat {
        /// Launcher executable, e.g. `wine`
        program: OsString,
    },
}

impl Launcher {
    /// Policy for the current host
    ///
    /// The compiler is a Windows binary: native on Windows, run through
    /// `wine` everywhere else.
    pub fn for_host() -> Self {
        if cfg!(windows) {
            Launcher::Native
        } else {
            Launcher::compat(DEFAULT_COMPAT_LAUNCHER)
        }
    }

    /// Compatibility launcher with a custom program
    pub fn compat(program: impl Into<OsString>) -> Self {
        Launcher::Compat {
            program: program.into(),
        }
    }

    /// Build the command line that runs `compiler` with `args`
    pub fn command<I, S>(&self, compiler: &OsStr, args: I) -> ProcessConfig
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        match self {
            Launcher::Native => ProcessConfig::new(compiler).args(args),
            Launcher::Compat { program } => ProcessConfig::new(program)
                .args(std::iter::once(compiler.to_os_string()).chain(args)),
        }
    }
}
