//! Price formatting.

use crate::config::CurrencySymbol;

/// Default number of decimals for prices.
pub const DEFAULT_DECIMALS: usize = 2;

/// Formats prices with one configured currency symbol.
///
/// Output is always non-empty and always starts with the symbol. Missing,
/// `NaN` and infinite amounts render as zero.
///
/// # Example
///
/// ```rust
/// use storefront_data::{CurrencyFormatter, CurrencySymbol};
///
/// let formatter = CurrencyFormatter::new(CurrencySymbol::new("৳").unwrap());
///
/// assert_eq!(formatter.format_price(Some(19.5)), "৳19.50");
/// assert_eq!(formatter.format_price(None), "৳0.00");
/// assert_eq!(formatter.format_price_range(Some(10.0), Some(20.0)), "৳10.00 - ৳20.00");
/// assert_eq!(formatter.format_price_range(Some(0.0), Some(20.0)), "৳20.00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: CurrencySymbol,
}

impl CurrencyFormatter {
    /// Creates a formatter for the given symbol.
    #[must_use]
    pub const fn new(symbol: CurrencySymbol) -> Self {
        Self { symbol }
    }

    /// Returns the currency symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        self.symbol.as_ref()
    }

    /// Formats an amount with two decimals.
    #[must_use]
    pub fn format_price(&self, amount: Option<f64>) -> String {
        self.format_price_with_decimals(amount, DEFAULT_DECIMALS)
    }

    /// Formats an amount with a fixed number of decimals.
    ///
    /// Rounding follows Rust's float formatting, so `19.555` at one decimal
    /// is `19.6`.
    #[must_use]
    pub fn format_price_with_decimals(&self, amount: Option<f64>, decimals: usize) -> String {
        let amount = amount.filter(|amount| amount.is_finite()).unwrap_or(0.0);
        // -0.0 would print as "-0.00"
        let amount = if amount == 0.0 { 0.0 } else { amount };
        format!("{}{amount:.decimals$}", self.symbol)
    }

    /// Formats a price range with two decimals.
    ///
    /// See [`format_price_range_with_decimals`](Self::format_price_range_with_decimals).
    #[must_use]
    pub fn format_price_range(&self, min: Option<f64>, max: Option<f64>) -> String {
        self.format_price_range_with_decimals(min, max, DEFAULT_DECIMALS)
    }

    /// Formats `"<symbol>min - <symbol>max"`.
    ///
    /// A bound that is missing, zero, `NaN` or infinite does not count. With
    /// one bound left, only that bound is formatted; with none, zero is.
    #[must_use]
    pub fn format_price_range_with_decimals(
        &self,
        min: Option<f64>,
        max: Option<f64>,
        decimals: usize,
    ) -> String {
        match (usable_bound(min), usable_bound(max)) {
            (Some(min), Some(max)) => format!(
                "{} - {}",
                self.format_price_with_decimals(Some(min), decimals),
                self.format_price_with_decimals(Some(max), decimals)
            ),
            (Some(bound), None) | (None, Some(bound)) => {
                self.format_price_with_decimals(Some(bound), decimals)
            }
            (None, None) => self.format_price_with_decimals(None, decimals),
        }
    }
}

fn usable_bound(amount: Option<f64>) -> Option<f64> {
    amount.filter(|amount| amount.is_finite() && *amount != 0.0)
}
