use serde::{Deserialize, Serialize};

/// A `{ "rendered": "..." }` field as returned by the REST API.
///
/// `raw` is only present for `context=edit` requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl Rendered {
    #[must_use]
    pub fn new(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
            raw: None,
        }
    }

    /// Source text for an editor: `raw` when the CMS sent it.
    #[must_use]
    pub fn editable(&self) -> &str {
        self.raw.as_deref().unwrap_or(&self.rendered)
    }
}

/// A post as returned by `GET /wp/v2/posts`.
///
/// Only `id` is required; everything else defaults so partially populated
/// responses (restricted fields, older plugins) still decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPost {
    pub id: u64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub author: u64,
    #[serde(default)]
    pub featured_media: u64,
    #[serde(default)]
    pub sticky: bool,
    #[serde(default)]
    pub categories: Vec<u64>,
    #[serde(default)]
    pub tags: Vec<u64>,
    #[serde(default, rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Embedded>,
}

/// Related entities inlined by `_embed=true`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Embedded {
    #[serde(default)]
    pub author: Vec<EmbeddedAuthor>,
    #[serde(default, rename = "wp:featuredmedia")]
    pub featured_media: Vec<FeaturedMedia>,
    /// Term groups: categories first, tags second.
    #[serde(default, rename = "wp:term")]
    pub terms: Vec<Vec<Term>>,
}

/// Embedded author. Restricted authors come back as an error object, which
/// decodes with an empty name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddedAuthor {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturedMedia {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub alt_text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Term {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub taxonomy: String,
}

/// A category as returned by `GET /wp/v2/categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent: u64,
}

/// Body for `POST /wp/v2/posts`.
#[derive(Debug, Clone, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub categories: Vec<u64>,
    pub status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<u64>,
}

/// Body for `PUT /wp/v2/posts/{id}`; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<u64>,
}

/// Publication status accepted by the authoring endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Pending,
    Publish,
    /// Scheduled for a later publish date.
    Future,
    Private,
}

impl PostStatus {
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Pending,
        Self::Publish,
        Self::Future,
        Self::Private,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Publish => "publish",
            Self::Future => "future",
            Self::Private => "private",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Uploaded media, trimmed to the fields the dashboard uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u64,
    #[serde(default)]
    pub source_url: String,
}

/// `GET /wp/v2/users/me?context=edit`.
#[derive(Debug, Clone, Deserialize)]
pub struct WpUser {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Response of the JWT authentication plugin's token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtToken {
    pub token: String,
    #[serde(default)]
    pub user_display_name: Option<String>,
}

/// Error body the REST API returns with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_post_with_embedded_expansions() {
        let json = r#"{
            "id": 42,
            "date": "2024-05-01T09:30:00",
            "slug": "budget-day",
            "sticky": true,
            "title": {"rendered": "Budget Day"},
            "content": {"rendered": "<p>Body</p>", "protected": false},
            "excerpt": {"rendered": "<p>Short</p>", "protected": false},
            "categories": [7],
            "tags": [3, 4],
            "_embedded": {
                "author": [{"id": 2, "name": "Sarah Mitchell", "slug": "sarah"}],
                "wp:featuredmedia": [{"id": 9, "source_url": "https://cdn.example.com/a.jpg"}],
                "wp:term": [
                    [{"id": 7, "name": "Business", "slug": "business", "taxonomy": "category"}],
                    [{"id": 3, "name": "economy", "slug": "economy", "taxonomy": "post_tag"}]
                ]
            }
        }"#;

        let post: RawPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 42);
        assert!(post.sticky);
        assert_eq!(post.title.rendered, "Budget Day");
        let embedded = post.embedded.unwrap();
        assert_eq!(embedded.author[0].name, "Sarah Mitchell");
        assert_eq!(
            embedded.featured_media[0].source_url.as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
        assert_eq!(embedded.terms[1][0].name, "economy");
    }

    #[test]
    fn test_raw_post_minimal() {
        let post: RawPost = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(post.id, 1);
        assert!(post.title.rendered.is_empty());
        assert!(post.embedded.is_none());
        assert!(post.categories.is_empty());
    }

    #[test]
    fn test_edit_context_prefers_raw() {
        let json = r#"{
            "id": 8,
            "title": {"raw": "Fish & Chips", "rendered": "Fish &#038; Chips"},
            "content": {"raw": "Body", "rendered": "<p>Body</p>\n", "protected": false}
        }"#;
        let post: RawPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.title.editable(), "Fish & Chips");
        assert_eq!(post.content.editable(), "Body");
        assert_eq!(Rendered::new("<p>x</p>").editable(), "<p>x</p>");
    }

    #[test]
    fn test_restricted_embedded_author_decodes() {
        let json = r#"{
            "id": 5,
            "_embedded": {
                "author": [{"code": "rest_user_invalid_id", "message": "Invalid user ID.", "data": {"status": 404}}]
            }
        }"#;
        let post: RawPost = serde_json::from_str(json).unwrap();
        assert!(post.embedded.unwrap().author[0].name.is_empty());
    }

    #[test]
    fn test_post_update_skips_unset_fields() {
        let update = PostUpdate {
            title: Some("New title".to_string()),
            status: Some(PostStatus::Publish),
            ..PostUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "New title", "status": "publish"})
        );
    }

    #[test]
    fn test_post_status_parse() {
        assert_eq!(PostStatus::parse("publish"), Some(PostStatus::Publish));
        assert_eq!(PostStatus::parse("draft"), Some(PostStatus::Draft));
        assert_eq!(PostStatus::parse("future"), Some(PostStatus::Future));
        assert_eq!(PostStatus::parse("trash"), None);
    }
}
