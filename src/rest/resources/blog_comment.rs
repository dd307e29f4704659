//! Blog comment resource.
//!
//! Comments are listed per blog post and created from the comment form.
//! The create payload is forwarded as given; validating it is the form's job.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::rest::resources::BlogComment;
//! use serde_json::{json, Map, Value};
//!
//! let comments = BlogComment::for_blog(&client, "65f0c2a1").await;
//! let approved = comments.iter().filter(|c| c.is_approved()).count();
//!
//! let Value::Object(payload) = json!({
//!     "blog": "65f0c2a1",
//!     "name": "Rahim",
//!     "email": "rahim@example.com",
//!     "comment": "Great read!"
//! }) else { unreachable!() };
//! let created = BlogComment::create(&client, payload).await;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{HttpMethod, StorefrontClient, Transport};
use crate::rest::{fetch, lenient, submit, ResourceEndpoint, ResourceResult};

/// A reader comment on a blog post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogComment {
    /// The backend identifier.
    #[serde(rename = "_id", default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The blog post, either its id or the populated post.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<Value>,

    /// Commenter name.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Commenter email.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Comment text.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Moderation status (e.g., "pending", "approved").
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Moderation flag, sent by some backends instead of `status`.
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,

    /// Creation timestamp as sent by the backend.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Fields this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BlogComment {
    /// `GET /blog-comment/blog/:blogId`, payload under `comments`.
    pub const FOR_BLOG: ResourceEndpoint = ResourceEndpoint::new(
        "blog comments",
        HttpMethod::Get,
        "/blog-comment/blog/{blog_id}",
        "comments",
        "Failed to fetch blog comments",
    );

    /// `POST /blog-comment`, payload under `comment`.
    pub const CREATE: ResourceEndpoint = ResourceEndpoint::new(
        "blog comment",
        HttpMethod::Post,
        "/blog-comment",
        "comment",
        "Failed to create comment",
    );

    /// Fetches the comments for one blog post.
    ///
    /// A blank `blog_id` fails without contacting the backend. Fails with an
    /// empty `Vec`.
    pub async fn for_blog<T: Transport>(
        client: &StorefrontClient<T>,
        blog_id: &str,
    ) -> ResourceResult<Vec<Self>> {
        fetch::<_, _, ()>(client, &Self::FOR_BLOG, &[("blog_id", blog_id)], None).await
    }

    /// Creates a comment from the submitted form fields.
    ///
    /// Fails with `None`.
    pub async fn create<T: Transport>(
        client: &StorefrontClient<T>,
        payload: Map<String, Value>,
    ) -> ResourceResult<Option<Self>> {
        submit(client, &Self::CREATE, Value::Object(payload)).await
    }

    /// Returns `true` if the comment has passed moderation.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.is_approved.unwrap_or_else(|| {
            self.status
                .as_deref()
                .is_some_and(|status| status.eq_ignore_ascii_case("approved"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_populated_blog() {
        let value = json!({
            "_id": "c9",
            "blog": {"_id": "b1", "title": "Care guide"},
            "name": "Rahim",
            "comment": "Great read!",
            "status": "approved",
            "createdAt": "2024-06-01T08:00:00.000Z"
        });

        let comment: BlogComment = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(comment.blog.as_ref().unwrap()["title"], "Care guide");
        assert_eq!(serde_json::to_value(&comment).unwrap(), value);
    }

    #[test]
    fn test_is_approved_from_status_or_flag() {
        let by_status = BlogComment {
            status: Some("Approved".into()),
            ..Default::default()
        };
        assert!(by_status.is_approved());

        let by_flag = BlogComment {
            status: Some("approved".into()),
            is_approved: Some(false),
            ..Default::default()
        };
        assert!(!by_flag.is_approved());

        assert!(!BlogComment::default().is_approved());
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(
            BlogComment::FOR_BLOG.path(&[("blog_id", "b1")]).unwrap(),
            "/blog-comment/blog/b1"
        );
        assert_eq!(BlogComment::CREATE.http_method, HttpMethod::Post);
        assert_eq!(BlogComment::CREATE.path(&[]).unwrap(), "/blog-comment");
    }
}
