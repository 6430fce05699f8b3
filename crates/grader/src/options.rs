// ABOUTME: Configuration options for the grader and the GraderBuilder fluent API.
// ABOUTME: Controls the HTTP side of the URL path: user agent, headers, timeout, status policy.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Grader;
use crate::error::GradeError;

/// Configuration options for the grader.
#[derive(Debug, Clone)]
pub struct Options {
    /// No timeout by default; the request waits as long as the HTTP stack allows.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub strict_status: bool,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: concat!("grader/", env!("CARGO_PKG_VERSION")).to_string(),
            strict_status: false,
            http_client: None,
            headers: HashMap::new(),
        }
    }
}

/// Builder for constructing Grader instances with custom configuration.
#[derive(Debug, Clone)]
pub struct GraderBuilder {
    opts: Options,
}

impl GraderBuilder {
    /// Create a new GraderBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Treat non-2xx responses as fetch errors.
    pub fn strict_status(mut self, strict: bool) -> Self {
        self.opts.strict_status = strict;
        self
    }

    /// Use a custom HTTP client. Timeout and User-Agent settings are then ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Grader with the configured options.
    pub fn build(self) -> Grader {
        Grader::new(self.opts)
    }

    /// Build the Grader, returning a Config error instead of panicking.
    pub fn try_build(self) -> Result<Grader, GradeError> {
        Grader::try_new(self.opts)
    }
}

impl Default for GraderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
