//! Category display records.
//!
//! [`CategoryFormatter`] turns a category (typed or raw JSON) into a
//! [`CategoryDisplay`] whose fields are always populated:
//!
//! | Field | Source | Fallback |
//! |---|---|---|
//! | `id` | `_id`, then `id` | `""` |
//! | `imgSrc` | `image` | placeholder image |
//! | `alt` | `name` | `"Category image"` |
//! | `title` | `name` | `"Category"` |
//! | `count` | `productCount` | `"0 items"` |
//! | `slug` | `slug` | `""` |
//!
//! Text values that are blank, `"null"` or `"undefined"` count as missing.
//!
//! # Image resolution
//!
//! 1. Missing image: the placeholder.
//! 2. `http(s)://` URLs and rooted paths are used as is.
//! 3. Anything else is treated as a root-relative asset and gets a leading `/`.
//!
//! The missing check runs before the slash is added, so `"undefined"` never
//! becomes `"/undefined"`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::DEFAULT_PLACEHOLDER_IMAGE;
use crate::format::pluralize_items;
use crate::rest::resources::Category;

/// Alt text used when a category has no name.
pub const DEFAULT_ALT: &str = "Category image";

/// Title used when a category has no name.
pub const DEFAULT_TITLE: &str = "Category";

/// A category ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDisplay {
    /// Category identifier, `""` if unknown.
    pub id: String,
    /// Usable image path or URL. Never empty.
    pub img_src: String,
    /// Image alt text.
    pub alt: String,
    /// Card title.
    pub title: String,
    /// Product count label (e.g., `"1 item"`, `"12 items"`).
    pub count: String,
    /// URL slug, `""` if unknown.
    pub slug: String,
}

/// Builds [`CategoryDisplay`] records.
///
/// # Example
///
/// ```rust
/// use storefront_data::CategoryFormatter;
/// use serde_json::json;
///
/// let formatter = CategoryFormatter::default();
///
/// let display = formatter.format_value(&json!({
///     "_id": "c1",
///     "name": "Shoes",
///     "image": "uploads/shoes.png",
///     "productCount": 1
/// }));
/// assert_eq!(display.img_src, "/uploads/shoes.png");
/// assert_eq!(display.count, "1 item");
///
/// assert!(formatter.format_values(&json!("not-an-array")).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFormatter {
    placeholder: String,
}

impl Default for CategoryFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_IMAGE)
    }
}

impl CategoryFormatter {
    /// Creates a formatter that falls back to `placeholder` for missing images.
    ///
    /// A blank, `"null"` or `"undefined"` placeholder is replaced by
    /// [`DEFAULT_PLACEHOLDER_IMAGE`], so `img_src` is never empty.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        let placeholder = match usable(Some(placeholder.as_str())) {
            Some(path) => path.to_string(),
            None => DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        };
        Self { placeholder }
    }

    /// Returns the placeholder image path.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Formats a typed category.
    #[must_use]
    pub fn format(&self, category: &Category) -> CategoryDisplay {
        let name = usable(category.name.as_deref());

        CategoryDisplay {
            id: usable(category.id.as_deref())
                .map(String::from)
                .or_else(|| text_value(category.extra.get("id")))
                .unwrap_or_default(),
            img_src: self.resolve_image(category.image.as_deref()),
            alt: name.unwrap_or(DEFAULT_ALT).to_string(),
            title: name.unwrap_or(DEFAULT_TITLE).to_string(),
            count: pluralize_items(category.product_count.unwrap_or(0)),
            slug: usable(category.slug.as_deref()).unwrap_or_default().to_string(),
        }
    }

    /// Formats typed categories, preserving order.
    #[must_use]
    pub fn format_all(&self, categories: &[Category]) -> Vec<CategoryDisplay> {
        categories.iter().map(|category| self.format(category)).collect()
    }

    /// Formats a raw JSON category.
    ///
    /// Accepts numeric ids, string product counts, and records already
    /// produced by this formatter (`imgSrc`, `title`, `alt`, `count`), so
    /// formatting a display record again returns it unchanged.
    #[must_use]
    pub fn format_value(&self, value: &Value) -> CategoryDisplay {
        let name = text_field(value, "name");

        CategoryDisplay {
            id: text_field(value, "_id")
                .or_else(|| text_field(value, "id"))
                .unwrap_or_default(),
            img_src: self.resolve_image(
                usable(value.get("image").and_then(Value::as_str))
                    .or_else(|| value.get("imgSrc").and_then(Value::as_str)),
            ),
            alt: name
                .clone()
                .or_else(|| text_field(value, "alt"))
                .unwrap_or_else(|| DEFAULT_ALT.to_string()),
            title: name
                .or_else(|| text_field(value, "title"))
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            count: pluralize_items(product_count(value)),
            slug: text_field(value, "slug").unwrap_or_default(),
        }
    }

    /// Formats a raw JSON array of categories, preserving order.
    ///
    /// Anything other than an array yields an empty `Vec`.
    #[must_use]
    pub fn format_values(&self, value: &Value) -> Vec<CategoryDisplay> {
        value.as_array().map_or_else(Vec::new, |items| {
            items.iter().map(|item| self.format_value(item)).collect()
        })
    }

    fn resolve_image(&self, image: Option<&str>) -> String {
        match usable(image) {
            None => self.placeholder.clone(),
            Some(image) if image.starts_with('/') || has_http_scheme(image) => image.to_string(),
            Some(image) => format!("/{image}"),
        }
    }
}

/// Trims `text` and drops blank, `"null"` and `"undefined"` values.
fn usable(text: Option<&str>) -> Option<&str> {
    text.map(str::trim)
        .filter(|text| !text.is_empty() && *text != "null" && *text != "undefined")
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Reads a string or number field as usable text.
fn text_field(value: &Value, key: &str) -> Option<String> {
    text_value(value.get(key))
}

fn text_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => usable(Some(text.as_str())).map(String::from),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Reads `productCount`, falling back to the leading number of `count`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn product_count(value: &Value) -> u64 {
    let parse = |text: &str| {
        text.split_whitespace()
            .next()
            .and_then(|n| n.parse::<u64>().ok())
    };

    let count = match value.get("productCount") {
        Some(Value::Number(number)) => number
            .as_u64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|n| n.is_finite() && *n >= 0.0)
                    .map(|n| n as u64)
            }),
        Some(Value::String(text)) => parse(text.as_str()),
        _ => None,
    };

    count
        .or_else(|| value.get("count").and_then(Value::as_str).and_then(parse))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn formatter() -> CategoryFormatter {
        CategoryFormatter::new("/img/none.png")
    }

    #[test]
    fn test_count_pluralization() {
        let f = formatter();
        assert_eq!(f.format_value(&json!({"name": "Shoes", "productCount": 1})).count, "1 item");
        assert_eq!(f.format_value(&json!({"name": "Shoes", "productCount": 0})).count, "0 items");
        assert_eq!(f.format_value(&json!({"name": "Shoes", "productCount": 5})).count, "5 items");
        assert_eq!(f.format_value(&json!({"name": "Shoes"})).count, "0 items");
        assert_eq!(f.format_value(&json!({"productCount": "3"})).count, "3 items");
    }

    #[test]
    fn test_image_resolution() {
        let f = formatter();
        assert_eq!(f.format_value(&json!({"image": "foo.jpg"})).img_src, "/foo.jpg");
        assert_eq!(f.format_value(&json!({"image": "/foo.jpg"})).img_src, "/foo.jpg");
        assert_eq!(
            f.format_value(&json!({"image": "http://x/y.jpg"})).img_src,
            "http://x/y.jpg"
        );
        assert_eq!(
            f.format_value(&json!({"image": "HTTPS://cdn.example.com/a.png"})).img_src,
            "HTTPS://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_image_missing_values_use_placeholder() {
        let f = formatter();
        for value in [
            json!({}),
            json!({"image": null}),
            json!({"image": ""}),
            json!({"image": "  "}),
            json!({"image": "null"}),
            json!({"image": "undefined"}),
            json!({"image": 42}),
        ] {
            assert_eq!(f.format_value(&value).img_src, "/img/none.png", "{value}");
        }
    }

    #[test]
    fn test_text_fallbacks() {
        let display = formatter().format_value(&json!({"name": "undefined", "slug": null}));
        assert_eq!(display.id, "");
        assert_eq!(display.alt, DEFAULT_ALT);
        assert_eq!(display.title, DEFAULT_TITLE);
        assert_eq!(display.slug, "");
    }

    #[test]
    fn test_unusable_placeholder_falls_back_to_default() {
        for placeholder in ["", "   ", "null", "undefined"] {
            let f = CategoryFormatter::new(placeholder);
            assert_eq!(f.placeholder(), DEFAULT_PLACEHOLDER_IMAGE);
            assert_eq!(
                f.format_value(&json!({"image": null})).img_src,
                DEFAULT_PLACEHOLDER_IMAGE
            );
        }
        assert_eq!(CategoryFormatter::new(" /img/x.png ").placeholder(), "/img/x.png");
    }

    #[test]
    fn test_typed_category_falls_back_to_virtual_id() {
        let category: Category = serde_json::from_value(json!({"id": "v1"})).unwrap();
        assert_eq!(category.id, None);
        assert_eq!(formatter().format(&category).id, "v1");
    }

    #[test]
    fn test_id_sources() {
        let f = formatter();
        assert_eq!(f.format_value(&json!({"_id": "a", "id": "b"})).id, "a");
        assert_eq!(f.format_value(&json!({"id": "b"})).id, "b");
        assert_eq!(f.format_value(&json!({"id": 17})).id, "17");
    }

    #[test]
    fn test_typed_and_raw_agree() {
        let raw = json!({
            "_id": "c1",
            "name": "Bags",
            "slug": "bags",
            "image": "uploads/bags.png",
            "productCount": 4
        });
        let category: Category = serde_json::from_value(raw.clone()).unwrap();

        let f = formatter();
        assert_eq!(f.format(&category), f.format_value(&raw));
        assert_eq!(
            f.format(&category),
            CategoryDisplay {
                id: "c1".into(),
                img_src: "/uploads/bags.png".into(),
                alt: "Bags".into(),
                title: "Bags".into(),
                count: "4 items".into(),
                slug: "bags".into(),
            }
        );
    }

    #[test]
    fn test_formatting_display_output_is_stable() {
        let f = formatter();
        for raw in [
            json!({"_id": "c1", "name": "Bags", "image": "b.png", "productCount": 1, "slug": "bags"}),
            json!({"image": "undefined"}),
            json!({"id": 9, "productCount": 12}),
        ] {
            let once = f.format_value(&raw);
            let twice = f.format_value(&serde_json::to_value(&once).unwrap());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_batch_preserves_order_and_rejects_non_arrays() {
        let f = formatter();
        let displays = f.format_values(&json!([{"name": "A"}, {"name": "B"}, "junk"]));
        let titles: Vec<&str> = displays.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", DEFAULT_TITLE]);

        assert!(f.format_values(&json!("not-an-array")).is_empty());
        assert!(f.format_values(&json!({"name": "A"})).is_empty());
        assert!(f.format_values(&Value::Null).is_empty());
    }

    #[test]
    fn test_display_serializes_camel_case() {
        let display = formatter().format_value(&json!({}));
        let value = serde_json::to_value(display).unwrap();
        assert_eq!(value["imgSrc"], "/img/none.png");
        assert!(value.get("img_src").is_none());
    }
}
