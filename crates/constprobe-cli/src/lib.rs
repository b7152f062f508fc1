//! # constprobe
//!
//! Probes which syntactic contexts a compiler accepts for the
//! `[[msvc::constexpr]]` attribute. Every template of the built-in catalog is
//! expanded into its variants, each variant is compiled, and the ones that
//! compile are printed.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod runner;

use std::io::Write;

use constprobe_templates::{VariantGenerator, CATALOG};

pub use cli::Cli;
pub use config::{ProbeSettings, SettingsLoader};
pub use error::{CliError, Result};
pub use report::Reporter;
pub use runner::{ProbeRunner, RunSummary};

/// Probe the built-in catalog, writing the report to `out`
pub async fn run_with_writer<W: Write>(settings: &ProbeSettings, out: W) -> Result<RunSummary> {
    let probe = settings.probe()?;
    let reporter = Reporter::new(out, settings.verbose);
    let mut runner = ProbeRunner::new(VariantGenerator::default(), probe, reporter);
    runner.run(&CATALOG).await
}

/// Probe the built-in catalog, writing the report to stdout
pub async fn run(settings: &ProbeSettings) -> Result<RunSummary> {
    run_with_writer(settings, std::io::stdout().lock()).await
}
