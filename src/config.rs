//! Startup configuration for the client.
//!
//! The original tool read its server address, token, and flags from process
//! globals; here they are gathered into a single [`Config`] value constructed
//! once by the binary and handed to [`crate::client::PlexClient`].

use crate::error::Error;
use regex::Regex;

/// Configuration fixed at startup and read-only afterwards
#[derive(Debug, Clone)]
pub struct Config {
    /// Server base URL with no trailing slash
    pub server: String,
    /// Access token appended to every request as `X-Plex-Token`
    pub token: String,
    /// Skip TLS certificate verification
    pub insecure: bool,
    /// Suppress printing of written file names
    pub quiet: bool,
    /// Request paths matching this pattern get their raw response body echoed
    pub debug_filter: Option<Regex>,
}

impl Config {
    /// Creates a configuration for the given server and token.
    ///
    /// Trailing slashes on the server URL are trimmed so request paths
    /// (which always start with `/`) concatenate cleanly.
    pub fn new(server: &str, token: &str) -> Self {
        Self {
            server: server.trim_end_matches('/').to_string(),
            token: token.to_string(),
            insecure: false,
            quiet: false,
            debug_filter: None,
        }
    }

    /// Disables TLS certificate verification when `insecure` is true
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Suppresses non-error output when `quiet` is true
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Sets the diagnostic filter from a regular expression pattern.
    ///
    /// An invalid pattern is a configuration error and fails the run before
    /// any request is made.
    pub fn debug_filter(mut self, pattern: &str) -> Result<Self, Error> {
        self.debug_filter = Some(Regex::new(pattern)?);
        Ok(self)
    }
}
