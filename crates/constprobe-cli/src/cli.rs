//! Command-line interface

use clap::Parser;
use std::path::PathBuf;

/// Probe which syntactic contexts the compiler accepts for [[msvc::constexpr]]
#[derive(Debug, Parser)]
#[command(name = "constprobe")]
#[command(version, about)]
pub struct Cli {
    /// Compiler executable to probe (cl.exe)
    #[arg(long, value_name = "PATH")]
    pub cl: Option<PathBuf>,

    /// Print every variant with its verdict and show compiler output
    #[arg(short, long)]
    pub verbose: bool,

    /// Compatibility launcher used to run the compiler (default: wine)
    #[arg(long, value_name = "PROGRAM", conflicts_with = "native")]
    pub launcher: Option<String>,

    /// Run the compiler directly, without a compatibility launcher
    #[arg(long)]
    pub native: bool,

    /// Kill a compilation after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Working directory for the compiler, where object files are cleaned up
    #[arg(long, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Configuration file (default: ./constprobe.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
