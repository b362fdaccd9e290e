//! HTTP client for the Plex API.
//!
//! [`PlexClient`] is the sole point of network I/O: every request goes through
//! [`PlexClient::get_raw`], which appends the access token, checks the status
//! code, and optionally echoes the raw body when the configured debug filter
//! matches the request path. [`PlexClient::get_xml`] layers XML decoding on
//! top for the structured endpoints.

use crate::config::Config;
use crate::error::Error;
use log::{debug, trace};
use serde::de::DeserializeOwned;

/// Authenticated client bound to one server for the duration of a run
pub struct PlexClient {
    http: reqwest::Client,
    config: Config,
}

impl PlexClient {
    /// Builds a client from the startup configuration.
    ///
    /// When `insecure` is set, TLS certificate verification is disabled
    /// entirely (trust-on-first-use convenience for self-hosted servers).
    pub fn new(config: Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .build()?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full URL for a server-relative path, with the token appended.
    ///
    /// Paths that already carry query parameters get the token joined with
    /// `&` instead of a second `?`.
    fn url_for(&self, path: &str) -> String {
        let sep = if path.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}X-Plex-Token={}",
            self.config.server, path, sep, self.config.token
        )
    }

    /// Performs a GET and returns the raw response body.
    ///
    /// A non-2xx status or a connection failure is fatal to the run; there is
    /// no retry. A zero-length body is a valid result (the server's way of
    /// saying "no artwork here").
    pub async fn get_raw(&self, path: &str) -> Result<Vec<u8>, Error> {
        debug!("GET {}", path);
        let resp = self.http.get(self.url_for(path)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                path: path.to_string(),
                status,
            });
        }
        let body = resp.bytes().await?.to_vec();
        trace!("GET {} returned {} bytes", path, body.len());

        if let Some(filter) = &self.config.debug_filter {
            if filter.is_match(path) {
                println!("{}", String::from_utf8_lossy(&body));
            }
        }

        Ok(body)
    }

    /// Performs a GET and decodes the XML body into `T`.
    ///
    /// A body that does not parse as the expected shape indicates a protocol
    /// mismatch and fails the run.
    pub async fn get_xml<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let body = self.get_raw(path).await?;
        quick_xml::de::from_reader(body.as_slice()).map_err(|source| Error::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(server: &str, token: &str) -> PlexClient {
        PlexClient::new(Config::new(server, token)).unwrap()
    }

    #[test]
    fn appends_token_with_question_mark() {
        let c = client("http://plex:32400", "abc");
        assert_eq!(
            c.url_for("/playlists"),
            "http://plex:32400/playlists?X-Plex-Token=abc"
        );
    }

    #[test]
    fn appends_token_with_ampersand_when_query_present() {
        let c = client("http://plex:32400", "abc");
        assert_eq!(
            c.url_for("/library/sections/1/all?type=1"),
            "http://plex:32400/library/sections/1/all?type=1&X-Plex-Token=abc"
        );
    }
}
