//! Codeforces HTTP client implementation

use crate::error::CfError;
use crate::parser::{RemoteProblem, parse_user_status};
use std::time::Duration;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://codeforces.com";

/// Upper bound for the whole request, connect included
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The main Codeforces HTTP client
///
/// Wraps a blocking reqwest client pointed at the API host. Every request is
/// bounded by the configured timeout.
///
/// # Example
///
/// ```no_run
/// use cf_http_client::CfClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CfClient::new()?;
/// let solved = client.accepted_problems("tourist")?;
/// println!("{} problems solved", solved.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CfClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl CfClient {
    /// Create a new client with rustls-tls and the default timeout
    ///
    /// # Errors
    ///
    /// Returns `CfError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, CfError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cf_http_client::CfClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CfClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> CfClientBuilder {
        CfClientBuilder::new()
    }

    /// Fetch the problems `handle` has at least one accepted submission for
    ///
    /// Sends one GET to `<base>/api/user.status?handle=<handle>`. The result is
    /// deduplicated by `(contest_id, index)`, keeping the first occurrence in
    /// response order, and sorted by rating with unrated problems last.
    ///
    /// # Errors
    ///
    /// * `CfError::Request` - Network error or timeout
    /// * `CfError::Api` - The API reported a failure (e.g. unknown handle)
    /// * `CfError::InvalidStatus` - HTTP error without an API envelope
    /// * `CfError::Decode` - Body is not the expected JSON
    pub fn accepted_problems(&self, handle: &str) -> Result<Vec<RemoteProblem>, CfError> {
        // Construct URL using path segments
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CfError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&["api", "user.status"]);
        url.query_pairs_mut().append_pair("handle", handle);

        tracing::debug!(%url, "requesting submission history");
        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;

        // The API reports failures like unknown handles as 400 with a JSON
        // envelope, so decode first and only fall back to the HTTP status.
        match parse_user_status(&body) {
            Err(CfError::Decode(_)) if !status.is_success() => {
                Err(CfError::InvalidStatus { status })
            }
            other => other,
        }
    }

    /// API base URL this client sends requests to
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }
}

/// Builder for configuring a Codeforces HTTP client
///
/// # Example
///
/// ```no_run
/// use cf_http_client::CfClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CfClient::builder()
///     .base_url("http://localhost:1234")?
///     .timeout(Duration::from_secs(3))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CfClientBuilder {
    base_url: Option<reqwest::Url>,
    timeout: Duration,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl CfClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// This is useful for testing with mock servers. The URL is parsed and
    /// validated at builder time.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, CfError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set the request timeout
    ///
    /// Applied on top of any custom client builder.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom HTTP client builder (proxies, user agent, ...)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `CfError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<CfClient, CfError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| CfError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .timeout(self.timeout)
            .build()
            .map_err(|e| CfError::ClientInit(e.to_string()))?;

        Ok(CfClient { client, base_url })
    }
}

impl Default for CfClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
