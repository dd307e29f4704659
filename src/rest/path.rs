//! Endpoint descriptions for storefront resources.
//!
//! Every normalizer call is described by one [`ResourceEndpoint`]: the HTTP
//! method, the path template, the key the backend nests the payload under,
//! and the message reported when nothing better is available.
//!
//! # Path Templates
//!
//! Templates use `{name}` placeholders for path identifiers:
//! - `/banner-collection/active` - no identifiers
//! - `/static-page/slug/{slug}` - one identifier
//!
//! Identifier values are trimmed and percent-encoded. A blank or missing
//! identifier is an [`InvalidHttpRequestError::MissingPathParameter`].
//!
//! # Example
//!
//! ```rust
//! use storefront_data::rest::ResourceEndpoint;
//! use storefront_data::HttpMethod;
//!
//! const PAGE_BY_SLUG: ResourceEndpoint = ResourceEndpoint::new(
//!     "static page",
//!     HttpMethod::Get,
//!     "/static-page/slug/{slug}",
//!     "staticPage",
//!     "Failed to fetch static page",
//! );
//!
//! let path = PAGE_BY_SLUG.path(&[("slug", "privacy policy")]).unwrap();
//! assert_eq!(path, "/static-page/slug/privacy%20policy");
//! ```

use crate::clients::storefront::encode_segment;
use crate::clients::{HttpError, HttpMethod, InvalidHttpRequestError};

/// Describes one normalizer operation against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceEndpoint {
    /// Human-readable resource name used in logs (e.g., "banner collections").
    pub resource: &'static str,
    /// The HTTP method for this endpoint.
    pub http_method: HttpMethod,
    /// The path template with `{name}` placeholders.
    pub template: &'static str,
    /// The key under `data` that holds the payload (e.g., `bannerCollections`).
    pub key: &'static str,
    /// Message used when neither the server nor the transport supplies one.
    pub failure_message: &'static str,
}

impl ResourceEndpoint {
    /// Creates a new `ResourceEndpoint`.
    ///
    /// This is a `const fn` so endpoints can be declared as constants.
    #[must_use]
    pub const fn new(
        resource: &'static str,
        http_method: HttpMethod,
        template: &'static str,
        key: &'static str,
        failure_message: &'static str,
    ) -> Self {
        Self {
            resource,
            http_method,
            template,
            key,
            failure_message,
        }
    }

    /// Builds the request path, substituting and encoding identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingPathParameter`] if a
    /// placeholder has no value or a blank value.
    pub fn path(&self, params: &[(&'static str, &str)]) -> Result<String, HttpError> {
        let mut path = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            let name = &rest[open + 1..close];
            let value = params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(key, value)| encode_segment(key, value))
                .unwrap_or_else(|| {
                    Err(HttpError::InvalidRequest(
                        InvalidHttpRequestError::MissingPathParameter {
                            name: placeholder_name(self.template, name),
                        },
                    ))
                })?;

            path.push_str(&rest[..open]);
            path.push_str(&value);
            rest = &rest[close + 1..];
        }

        path.push_str(rest);
        Ok(path)
    }
}

/// Returns the `'static` slice of `template` that spells `name`.
fn placeholder_name(template: &'static str, name: &str) -> &'static str {
    template
        .find(name)
        .map_or("", |start| &template[start..start + name.len()])
}
