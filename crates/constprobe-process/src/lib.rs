//! # constprobe-process
//!
//! **Purpose**: Compiler invocation for constprobe
//!
//! Writes a snippet to a scratch source file, runs the compiler on it in
//! compile-only mode and reports whether it was accepted.
//!
//! ## Features
//!
//! - **Scratch Sources**: Uniquely named `.cpp` files removed on drop, along
//!   with the compiler's object file when one was produced
//! - **Launcher Policy**: Native execution on Windows, `wine` elsewhere
//! - **Timeout Support**: Optional per-probe timeout that kills the compiler
//! - **Output Control**: Compiler output silenced unless verbose
//!
//! ## Usage
//!
//! ```rust,no_run
//! use constprobe_process::{CompilerProbe, Launcher};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let probe = CompilerProbe::new("cl.exe", Launcher::for_host());
//! let valid = probe.probe("constexpr int x = 1;").await?;
//! println!("{}", if valid { "Valid" } else { "Invalid" });
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod launcher;
pub mod manager;
pub mod probe;
pub mod scratch;

pub use config::ProcessConfig;
pub use error::{ProcessError, Result};
pub use launcher::{Launcher, DEFAULT_COMPAT_LAUNCHER};
pub use manager::ProcessManager;
pub use probe::{CompilerProbe, COMPILE_ONLY_FLAGS};
pub use scratch::ScratchSource;
