//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Request to create a post. Missing or null text fields deserialize as empty
/// strings so the server can answer with a validation error instead of a
/// parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Partial update of a post.
///
/// Only the editable fields are declared; `id`, `userId` and the timestamps
/// are dropped during deserialization if a client sends them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    // Tri-state:
    // - None: field missing (do not update)
    // - Some(None): null (clear)
    // - Some(Some(v)): set value
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Option<String>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query string of `GET /blogs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub author: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a successful `DELETE /blogs/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub id: Uuid,
    pub message: String,
}

impl DeletePostResponse {
    pub fn removed(id: Uuid) -> Self {
        Self {
            id,
            message: "Blog removed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_request_defaults_missing_fields() {
        let req: CreatePostRequest = serde_json::from_value(json!({ "title": "Hi" })).unwrap();

        assert_eq!(req.title, "Hi");
        assert!(req.category.is_empty());
        assert!(req.content.is_empty());
        assert_eq!(req.image, None);
    }

    #[test]
    fn test_create_request_treats_null_as_missing() {
        let req: CreatePostRequest = serde_json::from_value(json!({
            "title": null,
            "category": "Travel",
            "content": null,
        }))
        .unwrap();

        assert!(req.title.is_empty());
        assert_eq!(req.category, "Travel");
        assert!(req.content.is_empty());
    }

    #[test]
    fn test_update_request_distinguishes_null_from_missing() {
        let missing: UpdatePostRequest = serde_json::from_value(json!({})).unwrap();
        let null: UpdatePostRequest = serde_json::from_value(json!({ "image": null })).unwrap();
        let set: UpdatePostRequest =
            serde_json::from_value(json!({ "image": "https://img.example/x.png" })).unwrap();

        assert_eq!(missing.image, None);
        assert_eq!(null.image, Some(None));
        assert_eq!(set.image, Some(Some("https://img.example/x.png".to_string())));
    }

    #[test]
    fn test_update_request_drops_immutable_fields() {
        let req: UpdatePostRequest = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "_id": "abc",
            "userId": Uuid::new_v4(),
            "createdAt": "2020-01-01T00:00:00Z",
            "title": "Kept",
        }))
        .unwrap();

        assert_eq!(req.title.as_deref(), Some("Kept"));
        let reserialized = serde_json::to_value(&req).unwrap();
        assert_eq!(reserialized, json!({ "title": "Kept" }));
    }

    #[test]
    fn test_post_response_uses_camel_case() {
        let now = Utc::now();
        let body = serde_json::to_value(PostResponse {
            id: Uuid::nil(),
            title: "t".into(),
            category: "Food".into(),
            author: "Ada".into(),
            content: "c".into(),
            image: None,
            user_id: Uuid::nil(),
            created_at: now,
            updated_at: now,
        })
        .unwrap();

        assert!(body.get("userId").is_some());
        assert!(body.get("createdAt").is_some());
        assert!(body.get("image").is_none());
    }
}
