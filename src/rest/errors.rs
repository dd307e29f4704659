//! Failure descriptions for resource normalizers.
//!
//! Normalizers never return an error value. Instead, every failure is reduced
//! to a message by [`failure_message`] (transport failures) or described by a
//! [`ShapeError`] (a response that arrived but could not be unwrapped), logged,
//! and folded into a failed [`ResourceResult`](crate::rest::ResourceResult).
//!
//! # Message Precedence
//!
//! For transport failures the message is chosen in this order:
//!
//! 1. the `message` the backend put in its error body
//! 2. the transport's own message (e.g., `"timeout of 30000ms exceeded"`)
//! 3. the resource-specific default (e.g., `"Failed to fetch static page"`)
//!
//! # Example
//!
//! ```rust
//! use storefront_data::clients::{HttpError, HttpResponseError};
//! use storefront_data::rest::failure_message;
//! use serde_json::json;
//!
//! let error = HttpError::Response(HttpResponseError::new(
//!     404,
//!     json!({"success": false, "message": "Page not found"}),
//!     None,
//! ));
//! assert_eq!(failure_message(&error, "Failed to fetch static page"), "Page not found");
//!
//! let error = HttpError::Other(String::new());
//! assert_eq!(failure_message(&error, "Failed to fetch static page"), "Failed to fetch static page");
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Chooses the message reported for a transport failure.
///
/// Applies the precedence server message, then transport message, then
/// `fallback`. The result is never empty as long as `fallback` is not.
#[must_use]
pub fn failure_message(error: &HttpError, fallback: &str) -> String {
    error
        .server_message()
        .map(String::from)
        .or_else(|| error.transport_message())
        .unwrap_or_else(|| fallback.to_string())
}

/// A response arrived but did not carry the expected resource.
///
/// Shape failures are reported to callers exactly like transport failures;
/// this type exists for the diagnostic log.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The body is not a `{ success, data, message }` envelope.
    #[error("Response body is not a resource envelope: {source}")]
    NotAnEnvelope {
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// The envelope reports `success: false`.
    #[error("Backend reported an unsuccessful response")]
    Unsuccessful,

    /// `data.<key>` is absent or `null`.
    #[error("Response is missing data.{key}")]
    MissingKey {
        /// The resource key that was expected.
        key: &'static str,
    },

    /// `data.<key>` is present but does not have the expected structure.
    #[error("Could not decode data.{key}: {source}")]
    Undecodable {
        /// The resource key that was decoded.
        key: &'static str,
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, InvalidHttpRequestError};
    use serde_json::json;

    const DEFAULT: &str = "Failed to fetch banner collections";

    #[test]
    fn test_server_message_wins() {
        let error = HttpError::Response(HttpResponseError::new(
            500,
            json!({"message": "Database unavailable"}),
            None,
        ));
        assert_eq!(failure_message(&error, DEFAULT), "Database unavailable");
    }

    #[test]
    fn test_transport_message_when_no_server_message() {
        let error = HttpError::Response(HttpResponseError::new(502, json!({}), None));
        assert_eq!(
            failure_message(&error, DEFAULT),
            "Request failed with status code 502"
        );

        let error = HttpError::Timeout { millis: 250 };
        assert_eq!(failure_message(&error, DEFAULT), "timeout of 250ms exceeded");

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingPathParameter {
            name: "slug",
        });
        assert_eq!(
            failure_message(&error, DEFAULT),
            "Missing required path parameter 'slug'."
        );
    }

    #[test]
    fn test_default_when_neither_message_exists() {
        assert_eq!(failure_message(&HttpError::Other(String::new()), DEFAULT), DEFAULT);
        assert_eq!(failure_message(&HttpError::Other("  ".into()), DEFAULT), DEFAULT);
    }

    #[test]
    fn test_shape_error_messages() {
        assert_eq!(
            ShapeError::MissingKey { key: "staticPage" }.to_string(),
            "Response is missing data.staticPage"
        );
        assert_eq!(
            ShapeError::Unsuccessful.to_string(),
            "Backend reported an unsuccessful response"
        );
    }
}
