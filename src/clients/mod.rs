//! Transport types for storefront backend communication.
//!
//! This module provides the layer the normalizers call into. It handles
//! request construction, response parsing and error mapping, and owns the
//! per-call timeout.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The seam through which a backend call is made
//! - [`HttpClient`]: The reqwest-backed [`Transport`]
//! - [`StorefrontClient`]: Path normalization and timeouts over any [`Transport`]
//! - [`HttpRequest`]: A request to be sent to the backend
//! - [`HttpResponse`]: A parsed response from the backend
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`HttpError`]: Unified transport error
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::{StorefrontConfig, BaseUrl};
//! use storefront_data::clients::StorefrontClient;
//!
//! let config = StorefrontConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/api/v1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = StorefrontClient::new(&config)?;
//! let response = client.get("/settings/delivery-charge", None).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Each call is a single attempt; a failed call is reported once and
//! the caller decides what to render.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod storefront;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use storefront::StorefrontClient;
pub use transport::Transport;
