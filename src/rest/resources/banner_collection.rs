//! Banner collection resource.
//!
//! A banner collection is a named group of hero/promo banners shown together
//! (e.g., the home page slider). Only active collections are exposed to the
//! storefront.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::rest::resources::{BannerCollection, BannerCollectionParams};
//!
//! let params = BannerCollectionParams { position: Some("home".into()), ..Default::default() };
//! let result = BannerCollection::active(&client, Some(&params)).await;
//! for collection in result.iter() {
//!     println!("{} banners", collection.banners.as_ref().map_or(0, Vec::len));
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{HttpMethod, StorefrontClient, Transport};
use crate::rest::{fetch, lenient, ResourceEndpoint, ResourceResult};

/// A single banner inside a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    /// The backend identifier.
    #[serde(rename = "_id", default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Headline text.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Secondary text under the headline.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Image path or URL.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Where the banner links to.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Call-to-action label.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,

    /// Fields this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An active group of banners.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerCollection {
    /// The backend identifier.
    #[serde(rename = "_id", default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Collection name (e.g., "Summer Sale").
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Placement on the storefront (e.g., "home").
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Banners in display order.
    #[serde(default, deserialize_with = "lenient::records", skip_serializing_if = "Option::is_none")]
    pub banners: Option<Vec<Banner>>,

    /// Whether the backend marks this collection active.
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Fields this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query parameters for [`BannerCollection::active`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct BannerCollectionParams {
    /// Only collections for this placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Maximum number of collections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl BannerCollection {
    /// `GET /banner-collection/active`, payload under `bannerCollections`.
    pub const ACTIVE: ResourceEndpoint = ResourceEndpoint::new(
        "banner collections",
        HttpMethod::Get,
        "/banner-collection/active",
        "bannerCollections",
        "Failed to fetch banner collections",
    );

    /// Fetches the active banner collections.
    ///
    /// Fails with an empty `Vec`.
    pub async fn active<T: Transport>(
        client: &StorefrontClient<T>,
        params: Option<&BannerCollectionParams>,
    ) -> ResourceResult<Vec<Self>> {
        fetch(client, &Self::ACTIVE, &[], params).await
    }

    /// Returns the banners, or an empty slice when the collection has none.
    #[must_use]
    pub fn banners(&self) -> &[Banner] {
        self.banners.as_deref().unwrap_or_default()
    }
}
