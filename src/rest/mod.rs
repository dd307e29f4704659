//! Resource normalizers for the storefront backend.
//!
//! Every call in this module returns a [`ResourceResult<T>`] and never an
//! error: transport failures and unexpected response shapes are caught,
//! logged with `tracing`, and reported as a failed result carrying the
//! resource's empty value and a message.
//!
//! # Overview
//!
//! - [`ResourceResult`]: The `{ success, data, message }` contract
//! - [`Envelope`]: The backend's `{ success, data: { <key>: .. }, message }` wrapper
//! - [`ResourceEndpoint`]: Method, path template, resource key and default message
//! - [`normalize`]: One unwrapping policy shared by every resource
//! - [`failure_message`]: Server message, then transport message, then default
//! - [`resources`]: The resource families (banners, comments, pages, ...)
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::clients::StorefrontClient;
//! use storefront_data::rest::resources::StaticPage;
//!
//! let client = StorefrontClient::new(&config)?;
//! let page = StaticPage::by_slug(&client, "privacy-policy").await;
//!
//! if page.success() {
//!     if let Some(page) = page.data() {
//!         println!("{}", page.title.as_deref().unwrap_or_default());
//!     }
//! } else {
//!     eprintln!("{}", page.message().unwrap_or_default());
//! }
//! ```

mod errors;
mod lenient;
mod path;
mod resource;
mod response;
pub mod resources;

pub use errors::{failure_message, ShapeError};
pub use path::ResourceEndpoint;
pub use resource::{fetch, normalize, submit, Envelope};
pub use response::ResourceResult;
