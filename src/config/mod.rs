//! Configuration types for the storefront data layer.
//!
//! This module provides the configuration used to construct transport
//! clients and display formatters.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StorefrontConfig`]: The configuration struct holding all settings
//! - [`StorefrontConfigBuilder`]: A builder for constructing [`StorefrontConfig`] instances
//! - [`BaseUrl`]: A validated backend API base URL
//! - [`CurrencySymbol`]: A validated currency symbol
//!
//! Settings that the display layer depends on (currency symbol, placeholder
//! image) live here rather than in module-level constants, so two storefronts
//! in one process can render with different settings.
//!
//! # Example
//!
//! ```rust
//! use storefront_data::{StorefrontConfig, BaseUrl, CurrencySymbol};
//!
//! let config = StorefrontConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/api/v1").unwrap())
//!     .currency_symbol(CurrencySymbol::new("€").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.currency_formatter().format_price(Some(5.0)), "€5.00");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, CurrencySymbol};

use std::time::Duration;

use crate::error::ConfigError;
use crate::format::{CategoryFormatter, CurrencyFormatter};

/// Default image path used when a category has no usable image.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/images/placeholder.png";

/// Default upper bound for a single backend call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the storefront data layer.
///
/// # Thread Safety
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use storefront_data::{StorefrontConfig, BaseUrl};
///
/// let config = StorefrontConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    base_url: BaseUrl,
    currency_symbol: CurrencySymbol,
    placeholder_image: String,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Returns the backend API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the currency symbol.
    #[must_use]
    pub const fn currency_symbol(&self) -> &CurrencySymbol {
        &self.currency_symbol
    }

    /// Returns the placeholder image path.
    #[must_use]
    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    /// Returns the upper bound for a single backend call.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns a price formatter bound to this configuration's currency symbol.
    #[must_use]
    pub fn currency_formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(self.currency_symbol.clone())
    }

    /// Returns a category formatter bound to this configuration's placeholder image.
    #[must_use]
    pub fn category_formatter(&self) -> CategoryFormatter {
        CategoryFormatter::new(self.placeholder_image.clone())
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// `base_url` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `currency_symbol`: `$`
/// - `placeholder_image`: [`DEFAULT_PLACEHOLDER_IMAGE`]
/// - `timeout`: [`DEFAULT_TIMEOUT`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    base_url: Option<BaseUrl>,
    currency_symbol: Option<CurrencySymbol>,
    placeholder_image: Option<String>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the currency symbol.
    #[must_use]
    pub fn currency_symbol(mut self, symbol: CurrencySymbol) -> Self {
        self.currency_symbol = Some(symbol);
        self
    }

    /// Sets the image path rendered when a record has no usable image.
    #[must_use]
    pub fn placeholder_image(mut self, path: impl Into<String>) -> Self {
        self.placeholder_image = Some(path.into());
        self
    }

    /// Sets the upper bound for a single backend call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StorefrontConfig`], validating the supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set,
    /// [`ConfigError::ZeroTimeout`] for a zero timeout, and
    /// [`ConfigError::InvalidPlaceholderImage`] for a placeholder that is
    /// neither a rooted path nor an http(s) URL.
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        let placeholder_image = self
            .placeholder_image
            .map_or_else(|| DEFAULT_PLACEHOLDER_IMAGE.to_string(), |p| p.trim().to_string());
        let usable = placeholder_image.starts_with('/')
            || placeholder_image.starts_with("http://")
            || placeholder_image.starts_with("https://");
        if !usable {
            return Err(ConfigError::InvalidPlaceholderImage {
                path: placeholder_image,
            });
        }

        Ok(StorefrontConfig {
            base_url,
            currency_symbol: self.currency_symbol.unwrap_or_default(),
            placeholder_image,
            timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> BaseUrl {
        BaseUrl::new("https://api.example.com").unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = StorefrontConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StorefrontConfig::builder()
            .base_url(base_url())
            .build()
            .unwrap();

        assert_eq!(config.currency_symbol().as_ref(), "$");
        assert_eq!(config.placeholder_image(), DEFAULT_PLACEHOLDER_IMAGE);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = StorefrontConfig::builder()
            .base_url(base_url())
            .timeout(Duration::ZERO)
            .build();

        assert!(matches!(result, Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn test_builder_rejects_relative_placeholder() {
        let result = StorefrontConfig::builder()
            .base_url(base_url())
            .placeholder_image("placeholder.png")
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidPlaceholderImage { path }) if path == "placeholder.png"
        ));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = StorefrontConfig::builder()
            .base_url(base_url())
            .currency_symbol(CurrencySymbol::new("৳").unwrap())
            .placeholder_image("https://cdn.example.com/none.png")
            .timeout(Duration::from_millis(750))
            .user_agent_prefix("ShopFront/2.1")
            .build()
            .unwrap();

        assert_eq!(config.currency_symbol().as_ref(), "৳");
        assert_eq!(config.placeholder_image(), "https://cdn.example.com/none.png");
        assert_eq!(config.timeout(), Duration::from_millis(750));
        assert_eq!(config.user_agent_prefix(), Some("ShopFront/2.1"));
    }

    #[test]
    fn test_formatters_use_configured_values() {
        let config = StorefrontConfig::builder()
            .base_url(base_url())
            .currency_symbol(CurrencySymbol::new("£").unwrap())
            .placeholder_image("/img/none.svg")
            .build()
            .unwrap();

        assert_eq!(config.currency_formatter().format_price(None), "£0.00");
        assert_eq!(config.category_formatter().placeholder(), "/img/none.svg");
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorefrontConfig>();
    }
}
