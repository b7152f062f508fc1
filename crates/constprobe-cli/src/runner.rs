//! Probe run loop: expand, compile, report

use std::io::Write;

use constprobe_process::CompilerProbe;
use constprobe_templates::VariantGenerator;
use tracing::info;

use crate::{error::Result, report::Reporter};

/// Counts of a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Variants probed
    pub total: usize,
    /// Variants the compiler accepted
    pub valid: usize,
}

impl RunSummary {
    fn record(&mut self, valid: bool) {
        self.total += 1;
        if valid {
            self.valid += 1;
        }
    }
}

/// Drives every variant of a catalog through the compiler
pub struct ProbeRunner<W> {
    generator: VariantGenerator,
    probe: CompilerProbe,
    reporter: Reporter<W>,
}

impl<W: Write> ProbeRunner<W> {
    /// Create a runner
    pub fn new(generator: VariantGenerator, probe: CompilerProbe, reporter: Reporter<W>) -> Self {
        Self {
            generator,
            probe,
            reporter,
        }
    }

    /// Probe every variant of every template, in catalog order
    ///
    /// The whole catalog is validated before the first compiler runs.
    /// Variants are probed one at a time and dropped once reported.
    pub async fn run<S: AsRef<str>>(&mut self, catalog: &[S]) -> Result<RunSummary> {
        let plans = self.generator.plan(catalog)?;
        let mut summary = RunSummary::default();

        for plan in &plans {
            info!(
                template = plan.index(),
                variants = plan.variant_count(),
                "Probing template"
            );

            for variant in plan.variants() {
                let valid = self.probe.probe(&variant.source).await?;
                self.reporter.report(&variant.source, valid)?;
                summary.record(valid);
            }
        }

        info!(valid = summary.valid, total = summary.total, "Probe run finished");
        Ok(summary)
    }

    /// Recover the reporter's writer
    pub fn into_writer(self) -> W {
        self.reporter.into_inner()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::CliError;
    use constprobe_process::Launcher;
    use constprobe_templates::{CandidateTable, TemplateError, CATALOG};

    fn runner(compiler: &str, verbose: bool) -> ProbeRunner<Vec<u8>> {
        ProbeRunner::new(
            VariantGenerator::new(CandidateTable::with_attribute("[[attr]]")),
            CompilerProbe::new(compiler, Launcher::Native),
            Reporter::new(Vec::new(), verbose),
        )
    }

    #[tokio::test]
    async fn test_all_valid_quiet_prints_every_variant() {
        let mut runner = runner("true", false);
        let summary = runner.run(&["{fn} bool F();"]).await.unwrap();

        assert_eq!(summary, RunSummary { total: 3, valid: 3 });
        let output = String::from_utf8(runner.into_writer()).unwrap();
        assert_eq!(output.matches("// ").count(), 3);
        assert!(output.contains("[[attr]] bool F();"));
        assert!(!output.contains("> Valid"));
    }

    #[tokio::test]
    async fn test_all_invalid_quiet_prints_nothing() {
        let mut runner = runner("false", false);
        let summary = runner.run(&CATALOG).await.unwrap();

        assert_eq!(summary, RunSummary { total: 78, valid: 0 });
        assert!(runner.into_writer().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_verbose_prints_label() {
        let mut runner = runner("false", true);
        runner.run(&["{ret} return;"]).await.unwrap();

        let output = String::from_utf8(runner.into_writer()).unwrap();
        assert_eq!(output.matches("> Invalid").count(), 2);
        assert!(output.contains("[[attr]] return;\n> Invalid\n"));
    }

    #[tokio::test]
    async fn test_bad_catalog_fails_before_probing() {
        // Would fail to spawn if any probe ran
        let mut runner = runner("/nonexistent/constprobe-cl", true);
        let result = runner.run(&["{fn} bool F();", "{bogus} int x;"]).await;

        assert!(matches!(
            result,
            Err(CliError::Template(TemplateError::UnknownPlaceholder(_)))
        ));
        assert!(runner.into_writer().is_empty());
    }

    #[tokio::test]
    async fn test_missing_compiler_propagates() {
        let mut runner = runner("/nonexistent/constprobe-cl", false);
        let result = runner.run(&["{fn} bool F();"]).await;
        assert!(matches!(result, Err(CliError::Process(_))));
    }
}
