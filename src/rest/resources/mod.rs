//! Storefront resource families.
//!
//! Each family declares its [`ResourceEndpoint`](crate::rest::ResourceEndpoint)
//! constants and exposes async associated functions that return a
//! [`ResourceResult`](crate::rest::ResourceResult):
//!
//! | Call | Endpoint | Empty value |
//! |---|---|---|
//! | [`BannerCollection::active`] | `GET /banner-collection/active` | `[]` |
//! | [`BannerCountdown::active`] | `GET /banner-countdown/active` | `None` |
//! | [`BlogComment::for_blog`] | `GET /blog-comment/blog/:blogId` | `[]` |
//! | [`BlogComment::create`] | `POST /blog-comment` | `None` |
//! | [`DeliveryCharge::fetch`] | `GET /settings/delivery-charge` | `None` |
//! | [`StaticPage::by_slug`] | `GET /static-page/slug/:slug` | `None` |
//! | [`Category::all`] | `GET /category` | `[]` |
//!
//! Records keep fields they do not model in `extra`, so nothing the backend
//! sends is dropped. `id` is read from `_id`; a virtual `id` sent alongside
//! it stays in `extra`.
//!
//! Field decoding is tolerant: a value of the wrong type (`productCount:
//! 3.0`, `isActive: "true"`) is coerced where the meaning is unambiguous and
//! otherwise read as `None`. It never fails the record. Malformed elements of
//! nested arrays are skipped.

mod banner_collection;
mod banner_countdown;
mod blog_comment;
mod category;
mod settings;
mod static_page;

pub use banner_collection::{Banner, BannerCollection, BannerCollectionParams};
pub use banner_countdown::{BannerCountdown, BannerCountdownParams};
pub use blog_comment::BlogComment;
pub use category::{Category, CategoryParams};
pub use settings::DeliveryCharge;
pub use static_page::StaticPage;
