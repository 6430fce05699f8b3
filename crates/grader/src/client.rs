// ABOUTME: The Grader struct that acquires a document from a file or URL and checks it.
// ABOUTME: Provides check_html(), check_html_file() and the async check_url() entry points.

use std::path::Path;

use scraper::Html;

use crate::document::{self, Source};
use crate::error::GradeError;
use crate::options::{GraderBuilder, Options};
use crate::presence::{evaluate, PresenceMap};
use crate::resource::{fetch, FetchOptions};

/// Checks HTML documents for the presence of CSS selectors.
#[derive(Debug, Clone)]
pub struct Grader {
    opts: Options,
    http_client: reqwest::Client,
}

impl Grader {
    /// Create a new GraderBuilder.
    pub fn builder() -> GraderBuilder {
        GraderBuilder::new()
    }

    /// Create a new Grader with the given options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built, e.g. when the User-Agent is
    /// not a valid header value. Use [`Grader::try_new`] for untrusted options.
    pub fn new(opts: Options) -> Self {
        Self::try_new(opts).expect("failed to build HTTP client")
    }

    /// Create a new Grader, reporting an unusable HTTP configuration as a Config error.
    pub fn try_new(opts: Options) -> Result<Self, GradeError> {
        let http_client = match opts.http_client.clone() {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder()
                    .user_agent(&opts.user_agent)
                    .gzip(true)
                    .brotli(true)
                    .deflate(true);
                if let Some(timeout) = opts.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(|e| {
                    GradeError::config(
                        &opts.user_agent,
                        "BuildClient",
                        Some(anyhow::anyhow!("failed to build HTTP client: {}", e)),
                    )
                })?
            }
        };

        Ok(Self { opts, http_client })
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Check an HTML string.
    pub fn check_html(&self, html: &str, checks: &[String]) -> Result<PresenceMap, GradeError> {
        evaluate(&Html::parse_document(html), checks)
    }

    /// Check the HTML file at `path`.
    pub fn check_html_file(
        &self,
        path: &Path,
        checks: &[String],
    ) -> Result<PresenceMap, GradeError> {
        let doc = document::load_file(path)?;
        evaluate(&doc, checks)
    }

    /// Fetch and parse the document at `url`.
    pub async fn fetch_document(&self, url: &str) -> Result<Html, GradeError> {
        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
            strict_status: self.opts.strict_status,
        };
        let fetched = fetch(&self.http_client, url, &fetch_opts).await?;
        Ok(document::parse_bytes(
            &fetched.body,
            fetched.content_type.as_deref(),
        ))
    }

    /// Fetch the document at `url` and check it.
    pub async fn check_url(&self, url: &str, checks: &[String]) -> Result<PresenceMap, GradeError> {
        let doc = self.fetch_document(url).await?;
        evaluate(&doc, checks)
    }

    /// Check whichever source was selected for this run.
    pub async fn check(&self, source: &Source, checks: &[String]) -> Result<PresenceMap, GradeError> {
        tracing::debug!(source = %source, checks = checks.len(), "checking document");
        match source {
            Source::File(path) => self.check_html_file(path, checks),
            Source::Url(url) => self.check_url(url, checks).await,
        }
    }
}

impl Default for Grader {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
