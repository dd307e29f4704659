//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated base URL for the storefront backend API.
///
/// The URL must use the `http` or `https` scheme and name a host. Any trailing
/// slashes are removed so that resource paths (which always start with `/`)
/// can be appended directly.
///
/// # Example
///
/// ```rust
/// use storefront_data::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com/api/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com/api/v1");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = url.get(host_start..).unwrap_or_default();
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end <= host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a rooted resource path onto this base URL.
    ///
    /// ```rust
    /// use storefront_data::BaseUrl;
    ///
    /// let url = BaseUrl::new("https://api.example.com/api/v1").unwrap();
    /// assert_eq!(
    ///     url.join("/banner-collection/active"),
    ///     "https://api.example.com/api/v1/banner-collection/active"
    /// );
    /// ```
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated currency symbol used by every price-displaying surface.
///
/// # Serialization
///
/// `CurrencySymbol` serializes to and deserializes from its plain string:
///
/// ```rust
/// use storefront_data::CurrencySymbol;
///
/// let symbol = CurrencySymbol::new("€").unwrap();
/// assert_eq!(serde_json::to_string(&symbol).unwrap(), r#""€""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurrencySymbol(String);

impl CurrencySymbol {
    /// Creates a new validated currency symbol.
    ///
    /// Surrounding whitespace is removed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCurrencySymbol`] if the symbol is blank.
    pub fn new(symbol: impl Into<String>) -> Result<Self, ConfigError> {
        let symbol = symbol.into();
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(ConfigError::EmptyCurrencySymbol);
        }
        Ok(Self(symbol.to_string()))
    }
}

impl Default for CurrencySymbol {
    fn default() -> Self {
        Self("$".to_string())
    }
}

impl AsRef<str> for CurrencySymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CurrencySymbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencySymbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
