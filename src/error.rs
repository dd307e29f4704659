//! Error types for storefront configuration.
//!
//! This module contains the error type used when building a
//! [`StorefrontConfig`](crate::StorefrontConfig) or one of its validated
//! newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Transport and normalization failures are reported
//! elsewhere: see [`HttpError`](crate::clients::HttpError) and
//! [`ResourceResult`](crate::rest::ResourceResult).
//!
//! # Example
//!
//! ```rust
//! use storefront_data::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("api.example.com");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the storefront data layer.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an http or https URL such as 'https://api.example.com/api/v1'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The currency symbol is empty.
    #[error("Currency symbol cannot be empty.")]
    EmptyCurrencySymbol,

    /// The placeholder image path is unusable.
    #[error("Invalid placeholder image '{path}'. Expected a rooted path or an http(s) URL.")]
    InvalidPlaceholderImage {
        /// The invalid path that was provided.
        path: String,
    },

    /// The request timeout is zero.
    #[error("Request timeout must be greater than zero.")]
    ZeroTimeout,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
