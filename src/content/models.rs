use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;

/// A post ready for rendering.
///
/// `views`, `is_trending` and `is_breaking` are decorative; see
/// [`crate::content::decorate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPost {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    /// Cleaned HTML body.
    pub content: String,
    pub category: String,
    /// CMS slug of `category`, empty when unknown.
    #[serde(skip)]
    pub category_slug: String,
    pub image: String,
    pub author: String,
    pub read_time: String,
    pub views: String,
    pub publish_date: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub is_trending: bool,
    pub is_breaking: bool,
}

impl DisplayPost {
    /// Path of the article page for this post.
    #[must_use]
    pub fn url(&self) -> String {
        format!("/article/{}", self.id)
    }

    /// Human-readable publish date, e.g. "May 1, 2024".
    #[must_use]
    pub fn display_date(&self) -> String {
        format_publish_date(&self.publish_date)
    }
}

/// Format a CMS timestamp as e.g. "May 1, 2024".
///
/// Accepts the CMS's timezone-less local timestamps as well as RFC 3339;
/// anything else is returned unchanged.
#[must_use]
pub fn format_publish_date(raw: &str) -> String {
    const FORMAT: &str = "%B %-d, %Y";

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format(FORMAT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_formats() {
        let mut post = DisplayPost {
            publish_date: "2024-05-01T09:30:00".to_string(),
            ..DisplayPost::default()
        };
        assert_eq!(post.display_date(), "May 1, 2024");

        post.publish_date = "2024-12-24T18:00:00+00:00".to_string();
        assert_eq!(post.display_date(), "December 24, 2024");

        post.publish_date = "yesterday".to_string();
        assert_eq!(post.display_date(), "yesterday");
    }

    #[test]
    fn test_serializes_camel_case() {
        let post = DisplayPost {
            id: 3,
            read_time: "2 min read".to_string(),
            is_breaking: true,
            ..DisplayPost::default()
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["readTime"], "2 min read");
        assert_eq!(json["isBreaking"], true);
        assert_eq!(json["publishDate"], "");
    }

    #[test]
    fn test_url() {
        let post = DisplayPost {
            id: 77,
            ..DisplayPost::default()
        };
        assert_eq!(post.url(), "/article/77");
    }
}
