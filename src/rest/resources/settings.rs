//! Store settings exposed to the storefront.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{HttpMethod, StorefrontClient, Transport};
use crate::rest::{fetch, lenient, ResourceEndpoint, ResourceResult};

/// Delivery charges configured by the store.
///
/// Amounts are in the store currency. Render them with
/// [`CurrencyFormatter`](crate::format::CurrencyFormatter).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCharge {
    /// The backend identifier.
    #[serde(rename = "_id", default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Charge for deliveries inside the store's city.
    #[serde(default, deserialize_with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub inside_city: Option<f64>,

    /// Charge for deliveries outside the store's city.
    #[serde(default, deserialize_with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub outside_city: Option<f64>,

    /// Order subtotal at or above which delivery is free.
    #[serde(default, deserialize_with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub free_delivery_threshold: Option<f64>,

    /// Fields this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeliveryCharge {
    /// `GET /settings/delivery-charge`, payload under `deliveryCharge`.
    pub const FETCH: ResourceEndpoint = ResourceEndpoint::new(
        "delivery charge",
        HttpMethod::Get,
        "/settings/delivery-charge",
        "deliveryCharge",
        "Failed to fetch delivery charge",
    );

    /// Fetches the delivery charge settings.
    ///
    /// Fails with `None`.
    pub async fn fetch<T: Transport>(client: &StorefrontClient<T>) -> ResourceResult<Option<Self>> {
        fetch::<_, _, ()>(client, &Self::FETCH, &[], None).await
    }

    /// The charge for an order with the given subtotal.
    ///
    /// Returns `0.0` once the subtotal reaches the free-delivery threshold,
    /// and `None` when the relevant charge is not configured.
    #[must_use]
    pub fn charge_for(&self, inside_city: bool, subtotal: f64) -> Option<f64> {
        if self
            .free_delivery_threshold
            .is_some_and(|threshold| threshold > 0.0 && subtotal >= threshold)
        {
            return Some(0.0);
        }

        if inside_city {
            self.inside_city
        } else {
            self.outside_city
        }
    }
}
