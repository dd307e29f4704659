//! The uniform result returned by every resource normalizer.
//!
//! [`ResourceResult<T>`] is the `{ success, data, message }` shape UI
//! consumers branch on. It never carries an error value: a failed call is a
//! `ResourceResult` whose `success` is `false`, whose `data` is the
//! resource's empty value, and whose `message` says what went wrong.
//!
//! # Empty values
//!
//! The empty value is `T::default()`:
//!
//! - singular resources use `T = Option<R>` and fail with `None`
//! - collection resources use `T = Vec<R>` and fail with an empty `Vec`
//!
//! Because the only way to build a failed result is
//! [`ResourceResult::failure`], a failed result can never carry partial data.
//!
//! # Deref Pattern
//!
//! `ResourceResult<T>` implements `Deref<Target = T>`:
//!
//! ```rust
//! use storefront_data::rest::ResourceResult;
//!
//! let result = ResourceResult::ok(vec!["summer", "winter"], None);
//! assert_eq!(result.len(), 2);
//!
//! let failed: ResourceResult<Vec<&str>> = ResourceResult::failure("Failed to fetch banners");
//! assert!(failed.is_empty());
//! ```

use std::ops::Deref;

use serde::Serialize;

/// The result of a resource normalizer call.
///
/// # Serialization
///
/// Serializes as `{ "success": bool, "data": T, "message"?: string }`:
///
/// ```rust
/// use storefront_data::rest::ResourceResult;
///
/// let failed: ResourceResult<Option<u32>> = ResourceResult::failure("Failed to fetch page");
/// assert_eq!(
///     serde_json::to_string(&failed).unwrap(),
///     r#"{"success":false,"data":null,"message":"Failed to fetch page"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceResult<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<T> ResourceResult<T> {
    /// Creates a successful result carrying the unwrapped payload.
    #[must_use]
    pub const fn ok(data: T, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            message,
        }
    }

    /// Returns `true` if the call produced the resource.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Returns a reference to the payload (the empty value on failure).
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the status or error message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Consumes the result and returns the payload.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }

    /// Converts into a standard `Result`, keeping the message as the error.
    ///
    /// # Errors
    ///
    /// Returns the failure message when `success` is `false`.
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.message.unwrap_or_default())
        }
    }
}

impl<T: Default> ResourceResult<T> {
    /// Creates a failed result with the resource's empty value.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: T::default(),
            message: Some(message.into()),
        }
    }
}

impl<T> Deref for ResourceResult<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
