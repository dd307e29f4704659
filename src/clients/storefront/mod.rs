//! Resource-level client for the storefront backend.
//!
//! [`StorefrontClient`] sits between the normalizers in [`crate::rest`] and a
//! [`Transport`](crate::clients::Transport). It normalizes resource paths,
//! encodes path identifiers, and bounds every call with the configured
//! timeout so that a transport that never resolves still ends in a
//! [`HttpError::Timeout`](crate::clients::HttpError::Timeout).
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
//! let response = client.get("/banner-collection/active", None).await?;
//! ```

mod client;

pub use client::StorefrontClient;
pub(crate) use client::encode_segment;
