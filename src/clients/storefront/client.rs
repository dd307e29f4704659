//! Storefront client implementation.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, InvalidHttpRequestError,
    Transport,
};
use crate::config::StorefrontConfig;

/// Client used by every resource normalizer.
///
/// Provides `get` and `post` with path normalization and a per-call timeout.
/// The transport defaults to [`HttpClient`]; any [`Transport`] can be
/// supplied with [`StorefrontClient::with_transport`].
///
/// # Thread Safety
///
/// `StorefrontClient<HttpClient>` is `Send + Sync`. Concurrent calls share no
/// mutable state.
///
/// # Example
///
/// ```rust,ignore
/// let client = StorefrontClient::new(&config)?;
///
/// // GET request
/// let response = client.get("/category", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"blog": "b1", "comment": "Nice"});
/// let response = client.post("/blog-comment", body).await?;
/// ```
#[derive(Debug)]
pub struct StorefrontClient<T = HttpClient> {
    transport: T,
    timeout: Duration,
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

impl StorefrontClient<HttpClient> {
    /// Creates a client backed by a reqwest [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &StorefrontConfig) -> Result<Self, HttpError> {
        Ok(Self::with_transport(HttpClient::new(config)?, config))
    }
}

impl<T: Transport> StorefrontClient<T> {
    /// Creates a client over a custom transport, using the configured timeout.
    #[must_use]
    pub const fn with_transport(transport: T, config: &StorefrontConfig) -> Self {
        Self::with_timeout(transport, config.timeout())
    }

    /// Creates a client over a custom transport with an explicit timeout.
    #[must_use]
    pub const fn with_timeout(transport: T, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the upper bound applied to each call.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the path is empty,
    /// [`HttpError::Timeout`] if the transport does not answer in time, and
    /// whatever the transport reports otherwise.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, Some(body), None)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }
        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }
        let request = builder.build()?;

        match tokio::time::timeout(self.timeout, self.transport.send(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(HttpError::Timeout {
                millis: self.timeout.as_millis(),
            }),
        }
    }
}

/// Normalizes a resource path to a single leading `/` with no trailing `/`.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_path("category")?, "/category");
/// assert_eq!(normalize_path("//settings/delivery-charge/")?, "/settings/delivery-charge");
/// ```
fn normalize_path(path: &str) -> Result<String, HttpError> {
    let path = path.trim().trim_matches('/');
    if path.is_empty() {
        return Err(InvalidHttpRequestError::EmptyPath.into());
    }
    Ok(format!("/{path}"))
}

/// Percent-encodes a required path identifier.
///
/// Blank identifiers are rejected before any request is made.
pub(crate) fn encode_segment(name: &'static str, value: &str) -> Result<String, HttpError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InvalidHttpRequestError::MissingPathParameter { name }.into());
    }
    Ok(urlencoding::encode(value).into_owned())
}
