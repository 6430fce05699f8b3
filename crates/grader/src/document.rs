// ABOUTME: Document acquisition helpers turning raw bytes or local files into parsed HTML.
// ABOUTME: Defines Source, the mutually exclusive choice between the file and URL paths.

use std::fmt;
use std::path::{Path, PathBuf};

use scraper::Html;

use crate::error::GradeError;
use crate::input::{assert_file_exists, read_bytes};
use crate::resource::decode_body;

/// Default HTML file checked by the CLI.
pub const HTMLFILE_DEFAULT: &str = "index.html";

/// Demo page used when `--url` is passed without an address.
pub const URL_DEFAULT: &str = "http://dry-shelf-1803.herokuapp.com";

/// Where the document under test comes from. Exactly one per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    /// Picks the URL path when an address was given, the file path otherwise.
    pub fn select(file: impl Into<PathBuf>, url: Option<String>) -> Self {
        match url {
            Some(url) => Source::Url(url),
            None => Source::File(file.into()),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Parses raw HTML bytes, detecting the charset when `content_type` has none.
pub fn parse_bytes(bytes: &[u8], content_type: Option<&str>) -> Html {
    Html::parse_document(&decode_body(bytes, content_type))
}

/// Reads and parses the HTML file at `path`.
pub fn load_file(path: &Path) -> Result<Html, GradeError> {
    let path = assert_file_exists(path)?;
    let bytes = read_bytes(path, "ReadHtml")?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read html file");
    Ok(parse_bytes(&bytes, None))
}
