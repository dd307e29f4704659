//! Display formatters.
//!
//! Pure functions from domain values to UI-ready values. Nothing here fails:
//! missing or invalid input resolves to a documented fallback.
//!
//! # Overview
//!
//! - [`CurrencyFormatter`]: prices and price ranges with a configured symbol
//! - [`CategoryFormatter`]: category records to [`CategoryDisplay`]
//! - [`pluralize_items`]: `"1 item"` / `"n items"`
//!
//! Formatters are built from [`StorefrontConfig`](crate::StorefrontConfig)
//! (see [`StorefrontConfig::currency_formatter`](crate::StorefrontConfig::currency_formatter))
//! or constructed directly.

mod category;
mod currency;

pub use category::{CategoryDisplay, CategoryFormatter, DEFAULT_ALT, DEFAULT_TITLE};
pub use currency::{CurrencyFormatter, DEFAULT_DECIMALS};

/// Renders an item count: exactly one is singular, everything else plural.
///
/// ```rust
/// use storefront_data::format::pluralize_items;
///
/// assert_eq!(pluralize_items(1), "1 item");
/// assert_eq!(pluralize_items(0), "0 items");
/// ```
#[must_use]
pub fn pluralize_items(count: u64) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}
