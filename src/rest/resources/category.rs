//! Category resource.
//!
//! Categories feed the category grid and navigation. Use
//! [`CategoryFormatter`](crate::format::CategoryFormatter) to turn them into
//! display records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{HttpMethod, StorefrontClient, Transport};
use crate::rest::{fetch, lenient, ResourceEndpoint, ResourceResult};

/// A product category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// The backend identifier.
    #[serde(rename = "_id", default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URL slug.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Image path (relative or rooted) or absolute URL.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Short description.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of products in the category.
    #[serde(default, deserialize_with = "lenient::count", skip_serializing_if = "Option::is_none")]
    pub product_count: Option<u64>,

    /// Parent category, either its id or the populated category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Value>,

    /// Fields this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query parameters for [`Category::all`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryParams {
    /// Maximum number of categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only featured categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,

    /// Only children of this category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Category {
    /// `GET /category`, payload under `categories`.
    pub const ALL: ResourceEndpoint = ResourceEndpoint::new(
        "categories",
        HttpMethod::Get,
        "/category",
        "categories",
        "Failed to fetch categories",
    );

    /// Fetches categories.
    ///
    /// Fails with an empty `Vec`.
    pub async fn all<T: Transport>(
        client: &StorefrontClient<T>,
        params: Option<&CategoryParams>,
    ) -> ResourceResult<Vec<Self>> {
        fetch(client, &Self::ALL, &[], params).await
    }
}
