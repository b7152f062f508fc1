//! Report printing
//!
//! Each printed variant is a separator comment, the source, and in verbose
//! mode a verdict line. Quiet runs print only the variants that compiled.

use std::io::{self, Write};

/// Number of `*` in the separator line
pub const SEPARATOR_WIDTH: usize = 77;

/// Writes probe results in the report format
pub struct Reporter<W> {
    out: W,
    verbose: bool,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    /// Report one probed variant
    ///
    /// Returns whether anything was printed.
    pub fn report(&mut self, source: &str, valid: bool) -> io::Result<bool> {
        if !valid && !self.verbose {
            return Ok(false);
        }

        writeln!(self.out, "// {}", "*".repeat(SEPARATOR_WIDTH))?;
        writeln!(self.out, "{}", source)?;
        if self.verbose {
            writeln!(self.out, "> {}", if valid { "Valid" } else { "Invalid" })?;
        }
        self.out.flush()?;

        Ok(true)
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separator() -> String {
        format!("// {}", "*".repeat(77))
    }

    fn render(verbose: bool, results: &[(&str, bool)]) -> String {
        let mut reporter = Reporter::new(Vec::new(), verbose);
        for (source, valid) in results {
            reporter.report(source, *valid).unwrap();
        }
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_separator_shape() {
        let line = separator();
        assert_eq!(line.len(), 80);
        assert!(line.starts_with("// *"));
    }

    #[test]
    fn test_quiet_prints_valid_without_label() {
        let output = render(false, &[("constexpr int x = 1;", true)]);
        assert_eq!(output, format!("{}\nconstexpr int x = 1;\n", separator()));
    }

    #[test]
    fn test_quiet_skips_invalid() {
        let mut reporter = Reporter::new(Vec::new(), false);
        assert!(!reporter.report("int x", false).unwrap());
        assert!(reporter.into_inner().is_empty());
    }

    #[test]
    fn test_verbose_labels_every_variant() {
        let output = render(true, &[("a", true), ("b", false)]);
        assert_eq!(
            output,
            format!(
                "{sep}\na\n> Valid\n{sep}\nb\n> Invalid\n",
                sep = separator()
            )
        );
    }
}
