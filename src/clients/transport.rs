//! The seam between the normalizer layer and the network.

use std::future::Future;

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Performs a single backend call.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation. Anything that can answer an [`HttpRequest`] with an
/// [`HttpResponse`] or an [`HttpError`] can stand in for it, which is how
/// tests and alternative HTTP stacks plug into
/// [`StorefrontClient`](crate::clients::StorefrontClient).
///
/// Implementations should report non-2xx responses as
/// [`HttpError::Response`] so that the backend's `message` is available to
/// the error-message fallback chain.
///
/// # Example
///
/// ```rust
/// use std::future::Future;
/// use serde_json::json;
/// use storefront_data::clients::{HttpError, HttpRequest, HttpResponse, Transport};
///
/// struct Canned;
///
/// impl Transport for Canned {
///     fn send(
///         &self,
///         _request: HttpRequest,
///     ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
///         async { Ok(HttpResponse::from_json(200, json!({"success": true, "data": {}}))) }
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends the request and resolves with the response or a transport error.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}
