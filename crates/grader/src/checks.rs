// ABOUTME: Checklist loader that decodes the JSON list of CSS selectors to look for.
// ABOUTME: Provides load_checks() for files and parse_checks() for in-memory buffers.

//! Checklist loading.
//!
//! A checklist is a JSON array of selector strings, for example
//! `["h1", "title", "img"]`. The order in the file is not significant:
//! evaluation sorts the selectors before querying the document.

use std::path::Path;

use crate::error::GradeError;
use crate::input::read_bytes;

/// Default checklist path used by the CLI.
pub const CHECKSFILE_DEFAULT: &str = "checks.json";

/// Decodes a checklist from raw JSON bytes.
///
/// `origin` names the source in error messages.
pub fn parse_checks(bytes: &[u8], origin: &str) -> Result<Vec<String>, GradeError> {
    serde_json::from_slice::<Vec<String>>(bytes)
        .map_err(|e| GradeError::checks(origin, "LoadChecks", Some(e.into())))
}

/// Reads and decodes the checklist at `path`.
pub fn load_checks(path: &Path) -> Result<Vec<String>, GradeError> {
    let bytes = read_bytes(path, "LoadChecks")?;
    let checks = parse_checks(&bytes, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), count = checks.len(), "loaded checklist");
    Ok(checks)
}
