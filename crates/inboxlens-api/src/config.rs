//! Client configuration.

use std::time::Duration;

use tracing::warn;
use url::Url;

/// Default backend base URL, including the API version prefix.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding the base URL.
const ENV_BASE_URL: &str = "INBOXLENS_API_URL";

/// Environment variable overriding the timeout, in seconds.
const ENV_TIMEOUT_SECS: &str = "INBOXLENS_API_TIMEOUT_SECS";

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL that endpoint paths are appended to.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL with the default timeout.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Parses a base URL string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not an absolute URL that can carry
    /// path segments.
    pub fn parse(base_url: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(base_url.trim())?;
        if url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
        }
        Ok(Self::new(url))
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configuration pointing at [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in default URL fails to parse.
    pub fn local() -> Result<Self, url::ParseError> {
        Self::parse(DEFAULT_BASE_URL)
    }

    /// Reads the configuration from process environment variables.
    ///
    /// Invalid values are logged and replaced by defaults.
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in default URL fails to parse.
    pub fn from_env() -> Result<Self, url::ParseError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in default URL fails to parse.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, url::ParseError> {
        let mut config = Self::local()?;

        if let Some(raw) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            match Self::parse(&raw) {
                Ok(parsed) => config.base_url = parsed.base_url,
                Err(e) => warn!("Ignoring invalid {ENV_BASE_URL}={raw:?}: {e}"),
            }
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid {ENV_TIMEOUT_SECS}={raw:?}"),
            }
        }

        Ok(config)
    }

    /// Builds the URL for an endpoint under the base path.
    ///
    /// Segments are percent-encoded individually, so identifiers containing
    /// `/` or `?` cannot escape their path position.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
