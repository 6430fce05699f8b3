// ABOUTME: Local file helpers shared by the checklist loader and the file acquisition path.
// ABOUTME: Provides the existence check and raw byte reads, mapped to GradeError.

use std::fs;
use std::path::Path;

use crate::error::GradeError;

/// Verifies that `path` exists, returning it unchanged.
///
/// A missing path yields a `MissingFile` error; the CLI turns that into
/// "`<path>` does not exist. Exiting." and status 1.
pub fn assert_file_exists(path: &Path) -> Result<&Path, GradeError> {
    if path.exists() {
        Ok(path)
    } else {
        Err(GradeError::missing_file(
            path.display().to_string(),
            "AssertExists",
        ))
    }
}

/// Reads the whole file at `path` into memory.
pub fn read_bytes(path: &Path, op: &str) -> Result<Vec<u8>, GradeError> {
    fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GradeError::missing_file(path.display().to_string(), op)
        } else {
            GradeError::read(path.display().to_string(), op, Some(e.into()))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn existing_file_passes_through() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "<html></html>").unwrap();

        assert_eq!(assert_file_exists(&path).unwrap(), path.as_path());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");

        let err = assert_file_exists(&path).unwrap_err();
        assert!(err.is_missing_file());
        assert!(err.target.ends_with("nope.json"));
    }

    #[test]
    fn read_bytes_of_missing_file_is_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_bytes(&dir.path().join("gone.html"), "ReadHtml").unwrap_err();
        assert!(err.is_missing_file());
    }

    #[test]
    fn read_bytes_of_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = read_bytes(dir.path(), "ReadHtml").unwrap_err();
        assert!(err.is_read());
    }
}
