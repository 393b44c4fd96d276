use crate::errors::{HistogramError, Result};
use std::path::{Component, Path, PathBuf};

/// Rebuild `path` from its components with the platform separator,
/// collapsing redundant segments. Purely lexical, the filesystem is not
/// consulted. `/` is a separator on every platform, so rebuilding through
/// `components()` is what converts it.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    // number of Normal components currently in `out` that a `..` may remove
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => {
                out.push(name);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

/// Resolve `path` against the current working directory and make sure it exists.
pub fn resolve_absolute(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        normalize_path(path)
    } else {
        let cwd = std::env::current_dir().map_err(|e| HistogramError::io(path, e))?;
        normalize_path(&cwd.join(path))
    };

    if !absolute.exists() {
        return Err(HistogramError::FileNotFound { path: absolute });
    }

    Ok(absolute)
}

/// Check that the input path can be used. Failures are returned as
/// `ValidationError`; success is always `Ok(true)`.
pub fn validate(path: &Path) -> Result<bool> {
    let absolute = resolve_absolute(&normalize_path(path))
        .map_err(|e| validation_error(path, e))?;

    if !absolute.exists() {
        return Err(validation_error(path, HistogramError::FileNotFound { path: absolute }));
    }

    log::debug!("validated input {:?}", absolute);
    Ok(true)
}

fn validation_error(path: &Path, source: HistogramError) -> HistogramError {
    let message = match &source {
        HistogramError::FileNotFound { path: missing } => format!("{} was not found", missing.display()),
        other => format!("{} could not be resolved: {}", path.display(), other),
    };

    HistogramError::ValidationError { message, source: Box::new(source) }
}

/// Base name of `path` without its extension, used to name plot files.
/// Bytes that are not valid UTF-8 are replaced in the returned name.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "image".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::MAIN_SEPARATOR;

    #[test]
    fn normalize_collapses_redundant_segments() {
        let expected: PathBuf = ["a", "c", "d.png"].iter().collect();
        assert_eq!(normalize_path(Path::new("a//b/../c/./d.png")), expected);
        assert_eq!(normalize_path(Path::new("")), PathBuf::from("."));
        assert_eq!(normalize_path(Path::new("./")), PathBuf::from("."));
    }

    #[test]
    fn normalize_keeps_leading_parent_of_relative_path() {
        let expected: PathBuf = ["..", "..", "img.png"].iter().collect();
        assert_eq!(normalize_path(Path::new("../../img.png")), expected);
    }

    #[cfg(unix)]
    #[test]
    fn normalize_drops_parent_of_root() {
        assert_eq!(normalize_path(Path::new("/../tmp/x.png")), PathBuf::from("/tmp/x.png"));
    }

    #[test]
    fn forward_slashes_resolve_like_native_separators() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        let file = nested.join("pic.png");
        fs::write(&file, b"not really a png").unwrap();

        let forward = format!("{}/nested/pic.png", dir.path().to_string_lossy().replace(MAIN_SEPARATOR, "/"));
        let native = file.to_string_lossy().to_string();

        let from_forward = resolve_absolute(&normalize_path(Path::new(&forward))).unwrap();
        let from_native = resolve_absolute(&normalize_path(Path::new(&native))).unwrap();
        assert_eq!(from_forward, from_native);
        assert!(from_forward.is_absolute());
    }

    #[test]
    fn resolve_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");

        match resolve_absolute(&missing) {
            Err(HistogramError::FileNotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn validate_wraps_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate(&dir.path().join("nope.jpg")).unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("nope.jpg"));
    }

    #[test]
    fn validate_accepts_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate(file.path()).unwrap());
    }

    #[test]
    fn file_stem_strips_extension() {
        assert_eq!(file_stem(Path::new("/photos/sunset.final.jpg")), "sunset.final");
        assert_eq!(file_stem(Path::new("cat")), "cat");
        assert_eq!(file_stem(Path::new("/")), "image");
    }

    // macOS filesystems refuse names that are not UTF-8
    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_survive_resolution() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.png");
        let file = dir.path().join(name);
        fs::write(&file, b"bytes").unwrap();

        let normalized = normalize_path(&dir.path().join(".").join(name));
        assert_eq!(normalized.file_name(), Some(name));
        assert_eq!(resolve_absolute(&normalized).unwrap(), normalize_path(&file));
        assert!(validate(&file).unwrap());
        assert_eq!(file_stem(&file), "caf\u{FFFD}");
    }
}
