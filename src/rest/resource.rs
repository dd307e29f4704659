//! Generic envelope unwrapping shared by every resource family.
//!
//! The backend wraps every payload the same way:
//!
//! ```json
//! { "success": true, "data": { "staticPage": { ... } }, "message": "Fetched" }
//! ```
//!
//! [`normalize`] turns the outcome of a transport call into a
//! [`ResourceResult`], applying one policy for every resource: unwrap
//! `data.<key>` on success, otherwise log and return the resource's empty
//! value with a message. [`fetch`] and [`submit`] pair a
//! [`StorefrontClient`] call with [`normalize`].

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{HttpError, HttpResponse, StorefrontClient, Transport};
use crate::rest::{failure_message, ResourceEndpoint, ResourceResult, ShapeError};

/// The backend's response envelope.
///
/// `data` is kept as a raw map so the resource key can be located before the
/// payload is decoded into its typed record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the backend considers the call successful.
    ///
    /// An absent flag counts as success; only an explicit `false` fails.
    #[serde(default = "default_success")]
    pub success: bool,
    /// Resource payloads keyed by resource key.
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    /// Status or error text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

const fn default_success() -> bool {
    true
}

impl Envelope {
    /// Removes and decodes `data.<key>`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if the envelope is unsuccessful, the key is
    /// absent or `null`, or the value does not decode as `T`.
    pub fn take<T: DeserializeOwned>(&mut self, key: &'static str) -> Result<T, ShapeError> {
        if !self.success {
            return Err(ShapeError::Unsuccessful);
        }

        let value = self
            .data
            .as_mut()
            .and_then(|data| data.remove(key))
            .filter(|value| !value.is_null())
            .ok_or(ShapeError::MissingKey { key })?;

        serde_json::from_value(value).map_err(|source| ShapeError::Undecodable { key, source })
    }

    /// Returns the message, ignoring blank text.
    fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

/// Maps the outcome of a transport call to the uniform result.
///
/// - `Ok` with `data.<key>` present and decodable: success with the decoded
///   value and the envelope message.
/// - `Ok` with `success: false`: failure with the envelope message, or the
///   endpoint's default.
/// - `Ok` with anything else: failure with the endpoint's default.
/// - `Err`: failure with the message chosen by [`failure_message`].
///
/// Every failure is logged at `error` level with the resource name.
///
/// # Example
///
/// ```rust
/// use storefront_data::clients::{HttpMethod, HttpResponse};
/// use storefront_data::rest::{normalize, ResourceEndpoint, ResourceResult};
/// use serde_json::json;
///
/// const CHARGE: ResourceEndpoint = ResourceEndpoint::new(
///     "delivery charge",
///     HttpMethod::Get,
///     "/settings/delivery-charge",
///     "deliveryCharge",
///     "Failed to fetch delivery charge",
/// );
///
/// let body = json!({"success": true, "data": {"deliveryCharge": {"inside": 60}}});
/// let result: ResourceResult<Option<serde_json::Value>> =
///     normalize(Ok(HttpResponse::from_json(200, body)), &CHARGE);
/// assert!(result.success());
/// assert_eq!(result.data(), &Some(json!({"inside": 60})));
///
/// let result: ResourceResult<Option<serde_json::Value>> =
///     normalize(Ok(HttpResponse::from_json(200, json!({"success": true, "data": {}}))), &CHARGE);
/// assert!(!result.success());
/// assert_eq!(result.message(), Some("Failed to fetch delivery charge"));
/// ```
pub fn normalize<T>(
    outcome: Result<HttpResponse, HttpError>,
    endpoint: &ResourceEndpoint,
) -> ResourceResult<T>
where
    T: DeserializeOwned + Default,
{
    let response = match outcome {
        Ok(response) => response,
        Err(error) => {
            let message = failure_message(&error, endpoint.failure_message);
            tracing::error!(
                resource = endpoint.resource,
                error = %error,
                "{message}"
            );
            return ResourceResult::failure(message);
        }
    };

    let mut envelope = match serde_json::from_value::<Envelope>(response.body) {
        Ok(envelope) => envelope,
        Err(source) => {
            let error = ShapeError::NotAnEnvelope { source };
            tracing::error!(
                resource = endpoint.resource,
                error = %error,
                "{}",
                endpoint.failure_message
            );
            return ResourceResult::failure(endpoint.failure_message);
        }
    };

    match envelope.take::<T>(endpoint.key) {
        Ok(data) => {
            tracing::debug!(resource = endpoint.resource, "Fetched {}", endpoint.key);
            ResourceResult::ok(data, envelope.message.take())
        }
        Err(error) => {
            let message = match error {
                ShapeError::Unsuccessful => envelope.message(),
                _ => None,
            }
            .unwrap_or(endpoint.failure_message)
            .to_string();
            tracing::error!(
                resource = endpoint.resource,
                error = %error,
                "{message}"
            );
            ResourceResult::failure(message)
        }
    }
}

/// Performs a GET for `endpoint` and normalizes the outcome.
///
/// `ids` fills the endpoint's path placeholders; `params` is serialized into
/// query parameters (`None` fields are skipped).
pub async fn fetch<T, X, P>(
    client: &StorefrontClient<X>,
    endpoint: &ResourceEndpoint,
    ids: &[(&'static str, &str)],
    params: Option<&P>,
) -> ResourceResult<T>
where
    T: DeserializeOwned + Default,
    X: Transport,
    P: Serialize + ?Sized,
{
    let outcome = async {
        let path = endpoint.path(ids)?;
        let query = params
            .map(serialize_to_query)
            .transpose()?
            .filter(|query| !query.is_empty());
        client.get(&path, query).await
    }
    .await;

    normalize(outcome, endpoint)
}

/// Performs a POST of `body` for `endpoint` and normalizes the outcome.
///
/// The body is sent as given.
pub async fn submit<T, X>(
    client: &StorefrontClient<X>,
    endpoint: &ResourceEndpoint,
    body: Value,
) -> ResourceResult<T>
where
    T: DeserializeOwned + Default,
    X: Transport,
{
    let outcome = async {
        let path = endpoint.path(&[])?;
        client.post(&path, body).await
    }
    .await;

    normalize(outcome, endpoint)
}

/// Serializes a params struct to a query parameter map.
fn serialize_to_query<P: Serialize + ?Sized>(
    params: &P,
) -> Result<HashMap<String, String>, HttpError> {
    let value = serde_json::to_value(params)
        .map_err(|e| HttpError::Other(format!("Failed to serialize params: {e}")))?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
