//! Scratch source files with guaranteed cleanup

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempPath};
use tracing::{debug, trace};

use crate::error::{ProcessError, Result};

/// Extension given to scratch sources
pub const SOURCE_SUFFIX: &str = ".cpp";

/// Extension of the object file the compiler leaves behind
pub const OBJECT_SUFFIX: &str = ".obj";

const SCRATCH_PREFIX: &str = "constprobe-";

/// A uniquely named source file that lives as long as this guard
///
/// Dropping the guard deletes the source file and makes a best-effort
/// attempt to delete `<object_dir>/<stem>.obj`. The object file name is a
/// compiler convention, not something the probe controls.
#[derive(Debug)]
pub struct ScratchSource {
    path: TempPath,
    object: PathBuf,
}

impl ScratchSource {
    /// Write `source` to a new file in the system temp directory
    pub fn create(source: &str, object_dir: &Path) -> Result<Self> {
        Self::create_in(&std::env::temp_dir(), source, object_dir)
    }

    /// Write `source` to a new file in `dir`
    pub fn create_in(dir: &Path, source: &str, object_dir: &Path) -> Result<Self> {
        let mut file = Builder::new()
            .prefix(SCRATCH_PREFIX)
            .suffix(SOURCE_SUFFIX)
            .tempfile_in(dir)
            .map_err(ProcessError::ScratchFile)?;

        file.write_all(source.as_bytes())
            .map_err(ProcessError::ScratchFile)?;
        file.flush().map_err(ProcessError::ScratchFile)?;

        // Close our handle so the compiler can open the file on any platform
        let path = file.into_temp_path();

        let mut object_name: OsString = path
            .file_stem()
            .map(|stem| stem.to_os_string())
            .unwrap_or_default();
        object_name.push(OBJECT_SUFFIX);
        let object = object_dir.join(object_name);

        debug!(path = %path.display(), "Created scratch source");

        Ok(Self { path, object })
    }

    /// Path of the source file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the compiler is expected to put its object file
    pub fn object_path(&self) -> &Path {
        &self.object
    }
}

impl Drop for ScratchSource {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.object) {
            trace!(path = %self.object.display(), error = %e, "Object file not removed");
        }
        // The source file itself is removed when `path` drops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_source_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = ScratchSource::create_in(dir.path(), "int x;", dir.path()).unwrap();

        assert!(scratch.path().starts_with(dir.path()));
        assert_eq!(
            scratch.path().extension().and_then(|e| e.to_str()),
            Some("cpp")
        );
        assert_eq!(fs::read_to_string(scratch.path()).unwrap(), "int x;");
    }

    #[test]
    fn test_utf8_source_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let source = "// ünïcødé\nint x;";
        let scratch = ScratchSource::create_in(dir.path(), source, dir.path()).unwrap();
        assert_eq!(fs::read(scratch.path()).unwrap(), source.as_bytes());
    }

    #[test]
    fn test_names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let a = ScratchSource::create_in(dir.path(), "", dir.path()).unwrap();
        let b = ScratchSource::create_in(dir.path(), "", dir.path()).unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn test_drop_removes_source_and_object() {
        let dir = tempfile::tempdir().unwrap();
        let objects = tempfile::tempdir().unwrap();
        let scratch = ScratchSource::create_in(dir.path(), "int x;", objects.path()).unwrap();

        let source = scratch.path().to_path_buf();
        let object = scratch.object_path().to_path_buf();
        assert_eq!(object.parent(), Some(objects.path()));
        assert_eq!(object.file_stem(), source.file_stem());
        fs::write(&object, b"obj").unwrap();

        drop(scratch);

        assert!(!source.exists());
        assert!(!object.exists());
    }

    #[test]
    fn test_drop_without_object_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = ScratchSource::create_in(dir.path(), "int x;", dir.path()).unwrap();
        let source = scratch.path().to_path_buf();

        drop(scratch);

        assert!(!source.exists());
    }

    #[test]
    fn test_missing_directory_is_scratch_error() {
        let result = ScratchSource::create_in(
            Path::new("/nonexistent/constprobe-scratch"),
            "int x;",
            Path::new("."),
        );
        assert!(matches!(result, Err(ProcessError::ScratchFile(_))));
    }
}
