//! Tolerant field decoders for resource records.
//!
//! The backend is loosely typed: counts arrive as `3.0`, flags as `"true"`,
//! ids as numbers. A field whose value cannot be read becomes `None` instead
//! of failing the whole record, so one odd field never empties a response.
//!
//! Use with `#[serde(default, deserialize_with = "lenient::...")]`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn raw<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Option::<Value>::deserialize(deserializer)
}

/// Strings as sent; numbers as their decimal text.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(raw(deserializer)?.and_then(|value| match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }))
}

/// Booleans, `"true"`/`"false"` in any case, and `1`/`0`.
pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(raw(deserializer)?.and_then(|value| match value {
        Value::Bool(flag) => Some(flag),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Value::Number(number) => match number.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }))
}

/// Finite numbers, also from numeric strings.
pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(raw(deserializer)?
        .and_then(|value| match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|amount| amount.is_finite()))
}

/// Non-negative whole numbers, including `3.0` and `"3"`.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(raw(deserializer)?.and_then(|value| match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().and_then(whole)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<u64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    }))
}

/// An array of records, skipping elements that do not decode.
pub fn records<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(raw(deserializer)?.and_then(|value| match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    }))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn whole(n: f64) -> Option<u64> {
    (n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64).then_some(n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        #[serde(default, deserialize_with = "text")]
        label: Option<String>,
        #[serde(default, deserialize_with = "flag")]
        is_active: Option<bool>,
        #[serde(default, deserialize_with = "amount")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "count")]
        product_count: Option<u64>,
        #[serde(default, deserialize_with = "records")]
        children: Option<Vec<Sample>>,
    }

    fn decode(value: serde_json::Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_and_null_fields_are_none() {
        let sample = decode(json!({"label": null}));
        assert_eq!(sample.label, None);
        assert_eq!(sample.is_active, None);
        assert_eq!(sample.product_count, None);
    }

    #[test]
    fn test_text_accepts_numbers() {
        assert_eq!(decode(json!({"label": "Shoes"})).label.as_deref(), Some("Shoes"));
        assert_eq!(decode(json!({"label": 42})).label.as_deref(), Some("42"));
        assert_eq!(decode(json!({"label": {"en": "Shoes"}})).label, None);
    }

    #[test]
    fn test_flag_accepts_strings_and_bits() {
        assert_eq!(decode(json!({"isActive": "true"})).is_active, Some(true));
        assert_eq!(decode(json!({"isActive": "FALSE"})).is_active, Some(false));
        assert_eq!(decode(json!({"isActive": 1})).is_active, Some(true));
        assert_eq!(decode(json!({"isActive": "yes"})).is_active, None);
    }

    #[test]
    fn test_amount_accepts_numeric_strings() {
        assert_eq!(decode(json!({"price": 60})).price, Some(60.0));
        assert_eq!(decode(json!({"price": " 99.5 "})).price, Some(99.5));
        assert_eq!(decode(json!({"price": "free"})).price, None);
    }

    #[test]
    fn test_count_accepts_whole_floats() {
        assert_eq!(decode(json!({"productCount": 3})).product_count, Some(3));
        assert_eq!(decode(json!({"productCount": 3.0})).product_count, Some(3));
        assert_eq!(decode(json!({"productCount": "7"})).product_count, Some(7));
        assert_eq!(decode(json!({"productCount": 2.5})).product_count, None);
        assert_eq!(decode(json!({"productCount": -1})).product_count, None);
    }

    #[test]
    fn test_records_skip_bad_elements() {
        let sample = decode(json!({"children": [{"label": "a"}, "junk", {"label": "b"}]}));
        let labels: Vec<_> = sample
            .children
            .unwrap()
            .into_iter()
            .filter_map(|child| child.label)
            .collect();
        assert_eq!(labels, ["a", "b"]);

        assert!(decode(json!({"children": "none"})).children.is_none());
    }
}
