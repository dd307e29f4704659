//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type returned by a
//! [`Transport`](crate::clients::Transport).

use std::collections::HashMap;

/// An HTTP response from the storefront backend.
///
/// Contains the response status code, headers and the parsed JSON body.
/// Bodies that are empty or not valid JSON are represented as `{}`.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Creates a response with no headers. Handy for custom transports and tests.
    ///
    /// ```rust
    /// use storefront_data::clients::HttpResponse;
    /// use serde_json::json;
    ///
    /// let response = HttpResponse::from_json(200, json!({"success": true}));
    /// assert!(response.is_ok());
    /// ```
    #[must_use]
    pub fn from_json(code: u16, body: serde_json::Value) -> Self {
        Self::new(code, HashMap::new(), body)
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
