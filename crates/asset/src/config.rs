//! Loader configuration.

use std::time::Duration;

/// Default prefix prepended to every requested file name.
pub const DEFAULT_BASE: &str = "static/shaders/";

/// Default timeout for HTTP connections (seconds)
const HTTP_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default timeout for whole HTTP requests (seconds)
const HTTP_READ_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Debug)]
pub struct LoaderConfig {
    /// Prefix joined to file names by plain concatenation.
    pub base: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            connect_timeout: Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(HTTP_READ_TIMEOUT_SECS),
            user_agent: format!("shaderfetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, total: Duration) -> Self {
        self.connect_timeout = connect;
        self.timeout = total;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Location of a file: `base + file_name`, no normalization.
    pub fn resolve(&self, file_name: &str) -> String {
        format!("{}{}", self.base, file_name)
    }

    /// `true` when the base points at an HTTP(S) server.
    pub fn is_remote(&self) -> bool {
        self.base.starts_with("http://") || self.base.starts_with("https://")
    }
}
