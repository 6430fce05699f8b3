// ABOUTME: Error types for the grader including the ErrorCode enum and GradeError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing the different ways a grading run can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MissingFile,
    Read,
    Checks,
    Selector,
    InvalidUrl,
    Fetch,
    Config,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingFile => "file does not exist",
            ErrorCode::Read => "read error",
            ErrorCode::Checks => "invalid checklist",
            ErrorCode::Selector => "invalid selector",
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Config => "invalid configuration",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for grading operations.
///
/// `target` is the file path, URL or selector the failing operation worked on.
#[derive(Debug, thiserror::Error)]
pub struct GradeError {
    pub code: ErrorCode,
    pub target: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "grader: {} {}: {}", self.op, self.target, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl GradeError {
    fn new(
        code: ErrorCode,
        target: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            target: target.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a MissingFile error.
    pub fn missing_file(target: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingFile, target, op, None)
    }

    /// Create a Read error.
    pub fn read(
        target: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Read, target, op, source)
    }

    /// Create a Checks error (the checklist is not a JSON array of strings).
    pub fn checks(
        target: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Checks, target, op, source)
    }

    /// Create a Selector error.
    pub fn selector(
        target: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Selector, target, op, source)
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        target: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::InvalidUrl, target, op, source)
    }

    /// Create a Fetch error.
    pub fn fetch(
        target: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Fetch, target, op, source)
    }

    /// Create a Config error.
    pub fn config(
        target: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Config, target, op, source)
    }

    /// The innermost message, without the op/target prefix.
    ///
    /// Falls back to the error code description when there is no source.
    pub fn message(&self) -> String {
        match self.source {
            Some(ref src) => src.to_string(),
            None => self.code.to_string(),
        }
    }

    /// Returns true if this is a MissingFile error.
    pub fn is_missing_file(&self) -> bool {
        self.code == ErrorCode::MissingFile
    }

    /// Returns true if this is a Read error.
    pub fn is_read(&self) -> bool {
        self.code == ErrorCode::Read
    }

    /// Returns true if this is a Checks error.
    pub fn is_checks(&self) -> bool {
        self.code == ErrorCode::Checks
    }

    /// Returns true if this is a Selector error.
    pub fn is_selector(&self) -> bool {
        self.code == ErrorCode::Selector
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is a Config error.
    pub fn is_config(&self) -> bool {
        self.code == ErrorCode::Config
    }

    /// Returns true for errors raised while acquiring a document over HTTP.
    pub fn is_network(&self) -> bool {
        matches!(self.code, ErrorCode::Fetch | ErrorCode::InvalidUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_op_target_and_source() {
        let err = GradeError::fetch(
            "http://example.com",
            "Fetch",
            Some(anyhow::anyhow!("connection refused")),
        );
        assert_eq!(
            err.to_string(),
            "grader: Fetch http://example.com: fetch error: connection refused"
        );
    }

    #[test]
    fn message_prefers_source() {
        let err = GradeError::checks("checks.json", "LoadChecks", Some(anyhow::anyhow!("EOF")));
        assert_eq!(err.message(), "EOF");

        let err = GradeError::missing_file("checks.json", "AssertExists");
        assert_eq!(err.message(), "file does not exist");
    }

    #[test]
    fn predicates_match_code() {
        let err = GradeError::invalid_url("ftp://x", "Fetch", None);
        assert!(err.is_invalid_url());
        assert!(err.is_network());
        assert!(!err.is_fetch());

        let err = GradeError::selector("div[", "Evaluate", None);
        assert!(err.is_selector());
        assert!(!err.is_network());
    }
}
