use crate::errors::{HistogramError, Result};
use crate::settings::OUTPUT_DIR_NAME;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the running executable.
fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| HistogramError::io("<current executable>", e))?;
    // resolve symlinked installs to the real location
    let exe = fs::canonicalize(&exe).unwrap_or(exe);

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| HistogramError::io(&exe, std::io::Error::new(std::io::ErrorKind::NotFound, "executable has no parent directory")))
}

/// Create (if needed) the `output` directory next to the executable.
pub fn ensure_output_dir() -> Result<PathBuf> {
    ensure_output_dir_in(&program_dir()?)
}

/// Create (if needed) the `output` directory inside `base` and return its
/// absolute path. Safe to call repeatedly.
pub fn ensure_output_dir_in(base: &Path) -> Result<PathBuf> {
    let base = if base.is_absolute() {
        base.to_path_buf()
    } else {
        std::env::current_dir().map_err(|e| HistogramError::io(base, e))?.join(base)
    };
    let dir = base.join(OUTPUT_DIR_NAME);

    if !dir.is_dir() {
        fs::create_dir_all(&dir).map_err(|e| HistogramError::io(&dir, e))?;
        log::info!("Created output directory {:?}", dir);
    }

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provisioning_twice_returns_same_path() {
        let base = tempfile::tempdir().unwrap();

        let first = ensure_output_dir_in(base.path()).unwrap();
        let second = ensure_output_dir_in(base.path()).unwrap();

        assert_eq!(first, second);
        assert!(first.is_dir());
        assert!(first.is_absolute());
        assert_eq!(first.file_name().unwrap(), OUTPUT_DIR_NAME);
    }

    #[test]
    fn creates_missing_parents() {
        let base = tempfile::tempdir().unwrap();
        let deep = base.path().join("a").join("b");

        let dir = ensure_output_dir_in(&deep).unwrap();
        assert_eq!(dir, deep.join(OUTPUT_DIR_NAME));
        assert!(dir.is_dir());
    }

    #[test]
    fn blocked_by_regular_file_is_io_error() {
        let base = tempfile::tempdir().unwrap();
        fs::write(base.path().join(OUTPUT_DIR_NAME), b"in the way").unwrap();

        let err = ensure_output_dir_in(base.path()).unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }

    #[test]
    fn program_output_dir_sits_next_to_executable() {
        let dir = ensure_output_dir().unwrap();
        let exe_dir = fs::canonicalize(std::env::current_exe().unwrap()).unwrap();
        assert_eq!(dir.parent().unwrap(), exe_dir.parent().unwrap());
    }
}
