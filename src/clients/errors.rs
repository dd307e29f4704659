//! Transport error types.
//!
//! This module contains error types for HTTP operations: response errors,
//! request validation failures, network failures and timeouts.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the backend
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all transport failures
//!
//! These errors never reach UI consumers directly. The normalizers in
//! [`crate::rest`] turn them into a message using
//! [`HttpError::server_message`] and [`HttpError::transport_message`].
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::clients::{HttpError, StorefrontClient};
//!
//! match client.get("/category", None).await {
//!     Ok(response) => println!("Body: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("Backend error {}: {:?}", e.code, e.server_message),
//!     Err(HttpError::Timeout { millis }) => println!("Gave up after {millis}ms"),
//!     Err(e) => println!("Transport error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// # Example
///
/// ```rust
/// use storefront_data::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError::new(404, json!({"success": false, "message": "Page not found"}), None);
/// assert_eq!(error.server_message.as_deref(), Some("Page not found"));
/// assert_eq!(error.to_string(), "Request failed with status code 404");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Request failed with status code {code}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The `message` field of the response body, when the backend sent one.
    pub server_message: Option<String>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Reference ID for error reporting (from the X-Request-Id header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Creates a response error, extracting the backend's `message` field.
    #[must_use]
    pub fn new(code: u16, body: serde_json::Value, error_reference: Option<String>) -> Self {
        let server_message = body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from);

        Self {
            code,
            server_message,
            body,
            error_reference,
        }
    }
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty after normalization.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A required path identifier (blog id, page slug) is blank.
    #[error("Missing required path parameter '{name}'.")]
    MissingPathParameter {
        /// The name of the missing parameter.
        name: &'static str,
    },

    /// A GET request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all transport failures.
///
/// # Example
///
/// ```rust
/// use storefront_data::clients::HttpError;
///
/// let error = HttpError::Timeout { millis: 1500 };
/// assert_eq!(error.transport_message().as_deref(), Some("timeout of 1500ms exceeded"));
/// assert!(error.server_message().is_none());
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The call did not complete within the configured timeout.
    #[error("timeout of {millis}ms exceeded")]
    Timeout {
        /// The timeout that elapsed, in milliseconds.
        millis: u128,
    },

    /// A failure reported by a custom [`Transport`](crate::clients::Transport).
    ///
    /// The message may be empty when the transport has nothing to report.
    #[error("{0}")]
    Other(String),
}

impl HttpError {
    /// Returns the message the backend put in its error response, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.server_message.as_deref(),
            _ => None,
        }
    }

    /// Returns the transport-level description of this error.
    ///
    /// Returns `None` when the description is empty.
    #[must_use]
    pub fn transport_message(&self) -> Option<String> {
        let message = self.to_string();
        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }

    /// Returns the HTTP status code, for response errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
