//! # Storefront Data
//!
//! The data-access and normalization layer between a storefront UI and its
//! backend REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StorefrontConfig`] and [`StorefrontConfigBuilder`]
//! - Validated newtypes for the API base URL and currency symbol
//! - An async HTTP transport with a per-call timeout ([`clients`])
//! - Resource normalizers that always return a [`ResourceResult`] ([`rest`])
//! - Display formatters for prices and categories ([`format`])
//! - The cart/wishlist interface the display layer reads ([`collections`])
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_data::{BaseUrl, CurrencySymbol, StorefrontConfig};
//!
//! let config = StorefrontConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/api/v1").unwrap())
//!     .currency_symbol(CurrencySymbol::new("৳").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let prices = config.currency_formatter();
//! assert_eq!(prices.format_price_range(Some(450.0), Some(900.0)), "৳450.00 - ৳900.00");
//! ```
//!
//! ## Fetching Resources
//!
//! Normalizers never return an error. Branch on
//! [`ResourceResult::success`] and render `data`, which is the resource's
//! empty value (`None` or `[]`) when the call failed:
//!
//! ```rust,ignore
//! use storefront_data::clients::StorefrontClient;
//! use storefront_data::rest::resources::{BannerCollection, Category};
//!
//! let client = StorefrontClient::new(&config)?;
//!
//! let (banners, categories) = tokio::join!(
//!     BannerCollection::active(&client, None),
//!     Category::all(&client, None),
//! );
//!
//! if !banners.success() {
//!     tracing::warn!("{}", banners.message().unwrap_or_default());
//! }
//!
//! let cards = config.category_formatter().format_all(&categories);
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (an `error` event for every failed
//! normalizer call, `debug` for requests and successful fetches) and installs
//! no subscriber.
//!
//! ## Design Principles
//!
//! - **No failures escape**: transport and shape failures end at the normalizer
//! - **No global state**: the currency symbol and placeholder image come from config
//! - **Fail-fast configuration**: newtypes validate on construction
//! - **Thread-safe**: all public types are `Send + Sync`

pub mod clients;
pub mod collections;
pub mod config;
pub mod error;
pub mod format;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, CurrencySymbol, StorefrontConfig, StorefrontConfigBuilder};
pub use error::ConfigError;

// Re-export transport types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, StorefrontClient, Transport,
};

// Re-export normalizer and formatter types
pub use format::{CategoryDisplay, CategoryFormatter, CurrencyFormatter};
pub use rest::ResourceResult;
