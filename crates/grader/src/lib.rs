// ABOUTME: Main library entry point for the HTML selector grader.
// ABOUTME: Re-exports the public API: Grader, GraderBuilder, PresenceMap, GradeError, ErrorCode, Source.

//! Grader - checks HTML documents for the presence of CSS selectors.
//!
//! A checklist of selectors is evaluated against a document read from a local
//! file or fetched from a URL, producing a [`PresenceMap`] that is emitted as
//! 4-space-indented JSON.
//!
//! # Example
//!
//! ```no_run
//! use html_grader::{emit, Grader, GradeError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), GradeError> {
//!     let checks = vec!["h1".to_string(), "title".to_string()];
//!     let map = Grader::default().check_url("https://example.com", &checks).await?;
//!     emit::emit(&map).expect("stdout");
//!     Ok(())
//! }
//! ```

pub mod checks;
pub mod client;
pub mod document;
pub mod emit;
pub mod error;
pub mod input;
pub mod options;
pub mod presence;
pub mod resource;

pub use crate::checks::{load_checks, parse_checks};
pub use crate::client::Grader;
pub use crate::document::Source;
pub use crate::error::{ErrorCode, GradeError};
pub use crate::options::{GraderBuilder, Options};
pub use crate::presence::{evaluate, PresenceMap};
