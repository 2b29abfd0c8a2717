use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CallerIdentity;
use crate::error::DomainError;

pub const MISSING_FIELDS: &str = "Please add all required fields";

/// Post entity - a single blog entry owned by the user who created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub category: String,
    /// Display name of the owner at creation time. Not kept in sync.
    pub author: String,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `caller`, with generated ID and timestamps.
    pub fn create(new: NewPost, caller: &CallerIdentity) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id: caller.id,
            title: new.title,
            category: new.category,
            author: caller.name.clone(),
            content: new.content,
            image: normalize_image(new.image),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, caller: &CallerIdentity) -> bool {
        self.owner_id == caller.id
    }

    /// Merge the supplied fields onto this post and bump `updated_at`.
    ///
    /// `id` and `owner_id` are not part of [`PostPatch`] and stay untouched.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(image) = patch.image {
            self.image = normalize_image(image);
        }

        // updated_at never moves backwards, even if the wall clock does.
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

/// Fields accepted when creating a post. Absent fields arrive as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub category: String,
    pub content: String,
    pub image: Option<String>,
}

impl NewPost {
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [&self.title, &self.category, &self.content];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(DomainError::Validation(MISSING_FIELDS.to_string()));
        }
        Ok(())
    }
}

/// Partial update of a post.
///
/// `image` is tri-state:
/// - None: do not update
/// - Some(None): clear
/// - Some(Some(v)): set v
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub image: Option<Option<String>>,
}

impl PostPatch {
    pub fn validate(&self) -> Result<(), DomainError> {
        let supplied = [&self.title, &self.category, &self.author, &self.content];
        if supplied
            .iter()
            .any(|value| value.as_ref().is_some_and(|v| v.trim().is_empty()))
        {
            return Err(DomainError::Validation(MISSING_FIELDS.to_string()));
        }
        Ok(())
    }
}

/// Exact-match filter for listing posts.
///
/// `author` matches the denormalized author name, not the owner id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub category: Option<String>,
    pub author: Option<String>,
}

impl PostFilter {
    /// Build a filter, treating empty values as "no filter".
    pub fn new(category: Option<String>, author: Option<String>) -> Self {
        Self {
            category: category.filter(|c| !c.trim().is_empty()),
            author: author.filter(|a| !a.trim().is_empty()),
        }
    }

    pub fn by_category(category: impl Into<String>) -> Self {
        Self::new(Some(category.into()), None)
    }

    pub fn by_author(author: impl Into<String>) -> Self {
        Self::new(None, Some(author.into()))
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.category.as_ref().is_none_or(|c| &post.category == c)
            && self.author.as_ref().is_none_or(|a| &post.author == a)
    }
}

fn normalize_image(image: Option<String>) -> Option<String> {
    image.filter(|url| !url.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller() -> CallerIdentity {
        CallerIdentity::new(Uuid::new_v4(), "Ada")
    }

    fn new_post() -> NewPost {
        NewPost {
            title: "Lisbon in spring".to_string(),
            category: "Travel".to_string(),
            content: "Trams and pastel de nata.".to_string(),
            image: Some("https://img.example/lisbon.jpg".to_string()),
        }
    }

    #[test]
    fn test_create_takes_owner_and_author_from_caller() {
        let caller = caller();
        let post = Post::create(new_post(), &caller);

        assert_eq!(post.owner_id, caller.id);
        assert_eq!(post.author, "Ada");
        assert_eq!(post.created_at, post.updated_at);
        assert!(post.is_owned_by(&caller));
    }

    #[test]
    fn test_create_drops_blank_image() {
        let mut new = new_post();
        new.image = Some(String::new());

        let post = Post::create(new, &caller());
        assert_eq!(post.image, None);
    }

    #[test]
    fn test_validate_rejects_blank_required_fields() {
        for blank in ["", "   "] {
            let mut new = new_post();
            new.category = blank.to_string();
            assert!(matches!(new.validate(), Err(DomainError::Validation(_))));
        }

        let missing_everything = NewPost::default();
        assert!(missing_everything.validate().is_err());
        assert!(new_post().validate().is_ok());
    }

    #[test]
    fn test_apply_merges_only_supplied_fields() {
        let caller = caller();
        let mut post = Post::create(new_post(), &caller);
        let (id, created_at) = (post.id, post.created_at);

        post.apply(PostPatch {
            title: Some("Porto in spring".to_string()),
            image: Some(None),
            ..Default::default()
        });

        assert_eq!(post.title, "Porto in spring");
        assert_eq!(post.category, "Travel");
        assert_eq!(post.image, None);
        assert_eq!(post.id, id);
        assert_eq!(post.owner_id, caller.id);
        assert_eq!(post.created_at, created_at);
        assert!(post.updated_at >= created_at);
    }

    #[test]
    fn test_patch_validate_rejects_blank_supplied_field() {
        let patch = PostPatch {
            content: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(
            matches!(patch.validate(), Err(DomainError::Validation(msg)) if msg == MISSING_FIELDS)
        );
        assert!(PostPatch::default().validate().is_ok());
    }

    #[test]
    fn test_filter_matches_exact_values() {
        let post = Post::create(new_post(), &caller());

        assert!(PostFilter::default().matches(&post));
        assert!(PostFilter::by_category("Travel").matches(&post));
        assert!(!PostFilter::by_category("travel").matches(&post));
        assert!(PostFilter::by_author("Ada").matches(&post));
        assert!(!PostFilter::new(Some("Travel".into()), Some("Grace".into())).matches(&post));
    }

    #[test]
    fn test_filter_ignores_empty_values() {
        let filter = PostFilter::new(Some(String::new()), Some(String::new()));
        assert_eq!(filter, PostFilter::default());
    }
}
