//! Static page resource (about, privacy policy, terms, ...).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{HttpMethod, StorefrontClient, Transport};
use crate::rest::{fetch, lenient, ResourceEndpoint, ResourceResult};

/// A CMS-managed page addressed by slug.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticPage {
    /// The backend identifier.
    #[serde(rename = "_id", default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Page title.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// URL slug (e.g., "privacy-policy").
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Page body, usually HTML.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// `<title>` override.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    /// `<meta name="description">` text.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// Whether the page is published.
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Last update timestamp as sent by the backend.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Fields this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StaticPage {
    /// `GET /static-page/slug/:slug`, payload under `staticPage`.
    pub const BY_SLUG: ResourceEndpoint = ResourceEndpoint::new(
        "static page",
        HttpMethod::Get,
        "/static-page/slug/{slug}",
        "staticPage",
        "Failed to fetch static page",
    );

    /// Fetches a page by slug.
    ///
    /// A blank slug fails without contacting the backend. Fails with `None`.
    pub async fn by_slug<T: Transport>(
        client: &StorefrontClient<T>,
        slug: &str,
    ) -> ResourceResult<Option<Self>> {
        fetch::<_, _, ()>(client, &Self::BY_SLUG, &[("slug", slug)], None).await
    }

    /// The document title: `meta_title`, else `title`.
    #[must_use]
    pub fn document_title(&self) -> Option<&str> {
        self.meta_title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .or(self.title.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_page() {
        let value = json!({
            "_id": "p1",
            "title": "Privacy Policy",
            "slug": "privacy-policy",
            "content": "<p>We respect your privacy.</p>",
            "isActive": true
        });

        let page: StaticPage = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(page.slug.as_deref(), Some("privacy-policy"));
        assert_eq!(serde_json::to_value(&page).unwrap(), value);
    }

    #[test]
    fn test_document_title_prefers_meta_title() {
        let mut page = StaticPage {
            title: Some("Terms".into()),
            ..Default::default()
        };
        assert_eq!(page.document_title(), Some("Terms"));

        page.meta_title = Some("  ".into());
        assert_eq!(page.document_title(), Some("Terms"));

        page.meta_title = Some("Terms of Service | Shop".into());
        assert_eq!(page.document_title(), Some("Terms of Service | Shop"));
    }

    #[test]
    fn test_by_slug_endpoint_encodes_slug() {
        assert_eq!(
            StaticPage::BY_SLUG.path(&[("slug", "about-us")]).unwrap(),
            "/static-page/slug/about-us"
        );
        assert!(StaticPage::BY_SLUG.path(&[("slug", " ")]).is_err());
    }
}
