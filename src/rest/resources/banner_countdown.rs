//! Banner countdown resource.
//!
//! The countdown banner advertises a time-limited campaign. At most one is
//! active at a time, so the payload is singular.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{HttpMethod, StorefrontClient, Transport};
use crate::rest::{fetch, lenient, ResourceEndpoint, ResourceResult};

/// The active countdown banner.
///
/// Dates are kept as the backend sent them; [`BannerCountdown::ends_at`]
/// parses the end date on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerCountdown {
    /// The backend identifier.
    #[serde(rename = "_id", default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Campaign headline.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Secondary text.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Background image path or URL.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Where the banner links to.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Call-to-action label.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,

    /// Campaign start (RFC 3339).
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Campaign end (RFC 3339).
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Whether the backend marks this countdown active.
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Fields this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query parameters for [`BannerCountdown::active`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct BannerCountdownParams {
    /// Only countdowns for this placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl BannerCountdown {
    /// `GET /banner-countdown/active`, payload under `bannerCountdown`.
    pub const ACTIVE: ResourceEndpoint = ResourceEndpoint::new(
        "banner countdown",
        HttpMethod::Get,
        "/banner-countdown/active",
        "bannerCountdown",
        "Failed to fetch banner countdown",
    );

    /// Fetches the active countdown banner.
    ///
    /// Fails with `None`.
    pub async fn active<T: Transport>(
        client: &StorefrontClient<T>,
        params: Option<&BannerCountdownParams>,
    ) -> ResourceResult<Option<Self>> {
        fetch(client, &Self::ACTIVE, &[], params).await
    }

    /// Parses the end date. Returns `None` if absent or not RFC 3339.
    #[must_use]
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        self.end_date
            .as_deref()
            .and_then(|date| DateTime::parse_from_rfc3339(date).ok())
            .map(|date| date.with_timezone(&Utc))
    }

    /// Time left until the end date, clamped at zero.
    ///
    /// Returns `None` when there is no usable end date.
    #[must_use]
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.ends_at()
            .map(|end| (end - now).max(Duration::zero()))
    }

    /// Returns `true` once the end date has passed.
    ///
    /// A countdown without an end date never expires.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.ends_at().is_some_and(|end| end <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn countdown(end_date: Option<&str>) -> BannerCountdown {
        BannerCountdown {
            end_date: end_date.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_deserializes_and_round_trips() {
        let value = json!({
            "_id": "c1",
            "title": "Flash sale",
            "endDate": "2026-01-01T00:00:00.000Z",
            "isActive": true,
            "discount": 30
        });

        let countdown: BannerCountdown = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(countdown.title.as_deref(), Some("Flash sale"));
        assert_eq!(countdown.extra.get("discount"), Some(&json!(30)));
        assert_eq!(serde_json::to_value(&countdown).unwrap(), value);
    }

    #[test]
    fn test_time_remaining() {
        let now = Utc.with_ymd_and_hms(2025, 12, 31, 23, 0, 0).unwrap();
        let countdown = countdown(Some("2026-01-01T00:00:00Z"));

        assert_eq!(countdown.time_remaining(now), Some(Duration::hours(1)));
        assert!(!countdown.is_expired(now));
    }

    #[test]
    fn test_time_remaining_clamps_after_end() {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        let countdown = countdown(Some("2026-01-01T00:00:00+06:00"));

        assert_eq!(countdown.time_remaining(now), Some(Duration::zero()));
        assert!(countdown.is_expired(now));
    }

    #[test]
    fn test_missing_or_invalid_end_date() {
        let now = Utc::now();
        for end in [None, Some("next tuesday")] {
            let countdown = countdown(end);
            assert_eq!(countdown.ends_at(), None);
            assert_eq!(countdown.time_remaining(now), None);
            assert!(!countdown.is_expired(now));
        }
    }

    #[test]
    fn test_active_endpoint() {
        assert_eq!(BannerCountdown::ACTIVE.key, "bannerCountdown");
        assert_eq!(
            BannerCountdown::ACTIVE.path(&[]).unwrap(),
            "/banner-countdown/active"
        );
    }
}
