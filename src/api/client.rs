use super::{ApiError, Credentials, Result};
use reqwest::{header, header::HeaderValue, redirect, Method};
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt, time::Duration};
use tracing::{debug, instrument};
use url::Url;

/// How long a single request may take before the transport gives up on it.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The media type of every body we send and accept.
const JSON: &str = "application/json";

/// Executes authenticated requests against a single CloudCenter endpoint.
///
/// Every operation in this crate funnels through [`ApiClient::execute`],
/// which is the only place authentication and status classification happen.
/// The client holds no mutable state; cloning it is cheap and shares the
/// underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    /// The transport, owned by this client rather than shared process-wide.
    http: reqwest::Client,
    /// Where the API lives, e.g. `https://cloudcenter.example.com`.
    base_url: Url,
    /// Kept around for diagnostics only.
    username: String,
    /// The precomputed `Authorization` header applied to every request.
    authorization: HeaderValue,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("authorization", &"[REDACTED]")
            .finish()
    }
}

/// Builder for an [`ApiClient`].
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    accept_invalid_certs: bool,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The base URL every resource path is appended to.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Overall deadline for each request. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Accept self-signed or otherwise invalid TLS certificates.
    ///
    /// CloudCenter appliances frequently ship with self-signed certificates.
    /// Only enable this against hosts you trust.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let Some(base_url) = self.base_url else {
            return Err(ApiError::Config("a base URL is required".to_string()));
        };
        let Some(credentials) = self.credentials else {
            return Err(ApiError::Config("credentials are required".to_string()));
        };

        let base_url = Url::parse(&base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "{base_url} cannot have resource paths appended to it"
            )));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("cloudcenter/{}", env!("CARGO_PKG_VERSION")));

        // Each request is exactly one round trip, so redirects are reported
        // back to the caller as a non-success status instead of followed.
        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(user_agent)
            .redirect(redirect::Policy::none())
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()
            .map_err(ApiError::Client)?;

        Ok(ApiClient {
            http,
            base_url,
            username: credentials.username().to_string(),
            authorization: credentials.authorization_header()?,
        })
    }
}

impl ApiClient {
    /// Creates a client with default transport settings.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self> {
        Self::builder()
            .base_url(base_url)
            .credentials(Credentials::new(username, secret))
            .build()
    }

    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Appends the given path segments to our base URL.
    ///
    /// Segments are percent-encoded individually. Empty, `.` and `..`
    /// segments are rejected, as they would otherwise be dropped or
    /// collapsed and leave the URL pointing at a parent path.
    pub fn url<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let segments: Vec<I::Item> = segments.into_iter().collect();
        for segment in &segments {
            let segment: &str = segment.as_ref();
            if matches!(segment, "" | "." | "..") {
                return Err(ApiError::Config(format!(
                    "{segment:?} is not a usable path segment"
                )));
            }
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Performs a single authenticated round trip, returning the raw body
    /// of a 2xx response.
    ///
    /// Anything else is classified: no response at all is a
    /// [`ApiError::Transport`], a non-2xx status is an [`ApiError::Status`]
    /// carrying the server's body, and failing to read a successful body is
    /// an [`ApiError::Body`]. Nothing is retried.
    #[instrument(skip_all, fields(method = %method, url = %url))]
    pub async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let mut request = self
            .http
            .request(method, url)
            .header(header::AUTHORIZATION, self.authorization.clone())
            .header(header::ACCEPT, JSON);
        if let Some(body) = body {
            request = request.header(header::CONTENT_TYPE, JSON).body(body);
        }

        let response = request.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        debug!(%status, "received response");

        if !status.is_success() {
            let body = error_body(response.text().await);
            return Err(ApiError::Status { status, body });
        }

        let body = response.bytes().await.map_err(ApiError::Body)?;
        Ok(body.to_vec())
    }

    /// Like [`ApiClient::execute`], but serializes the request body from
    /// and decodes the response body into typed values.
    pub async fn call<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = body
            .map(|body| serde_json::to_vec(body))
            .transpose()
            .map_err(ApiError::Encode)?;
        let response = self.execute(method, url, body).await?;
        serde_json::from_slice(&response).map_err(ApiError::Decode)
    }
}

/// The body of a non-success response is purely diagnostic. If we can't
/// read it, the status alone still tells the caller what happened.
fn error_body<E: fmt::Display>(body: std::result::Result<String, E>) -> String {
    body.unwrap_or_else(|error| {
        debug!(%error, "unable to read error response body");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(base_url, "admin", "secret").expect("should build a client")
    }

    #[test]
    fn segments_are_appended_to_the_base_url() {
        let client = client("https://cloudcenter.example.com");
        let url = client.url(["v1", "tenants", "1", "contracts"]).unwrap();
        assert_eq!(url.as_str(), "https://cloudcenter.example.com/v1/tenants/1/contracts");
    }

    #[test]
    fn base_url_paths_are_kept() {
        let client = client("https://example.com/cloudcenter/");
        let url = client.url(["v1", "users"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/cloudcenter/v1/users");
    }

    #[test]
    fn identifiers_are_percent_encoded() {
        let client = client("https://example.com");
        let url = client.url(["v1", "users", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/v1/users/a%2Fb%20c");
    }

    #[test]
    fn dot_segments_are_rejected() {
        let client = client("https://example.com");
        for segment in ["", ".", ".."] {
            assert!(
                matches!(client.url(["v1", "users", segment]), Err(ApiError::Config(_))),
                "{segment:?} should be rejected"
            );
        }
        // Dots within a segment are just characters.
        let url = client.url(["v1", "users", "a.b", "..."]).unwrap();
        assert_eq!(url.path(), "/v1/users/a.b/...");
    }

    #[test]
    #[traced_test]
    fn unreadable_error_bodies_are_traced() {
        assert_eq!(error_body(Ok::<_, &str>("boom".to_string())), "boom");
        assert_eq!(error_body(Err::<String, _>("connection reset")), "");
        assert!(logs_contain("unable to read error response body"));
        assert!(logs_contain("connection reset"));
    }

    #[test]
    fn username_is_exposed() {
        assert_eq!(client("https://example.com").username(), "admin");
    }

    #[test]
    fn unusable_base_urls_are_rejected() {
        assert!(matches!(
            ApiClient::new("mailto:admin@example.com", "admin", "secret"),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            ApiClient::new("not a url", "admin", "secret"),
            Err(ApiError::Url(_))
        ));
    }

    #[test]
    fn builder_requires_credentials() {
        let result = ApiClient::builder().base_url("https://example.com").build();
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn debug_output_redacts_authorization() {
        let printed = format!("{:?}", client("https://example.com"));
        assert!(printed.contains("admin"));
        assert!(!printed.contains("YWRtaW46c2VjcmV0"));
    }
}
