//! Open Graph and Twitter Card metadata components.

use maud::{html, Markup};

use crate::content::DisplayPost;

pub const SITE_NAME: &str = "Maple Epoch";
pub const SITE_DESCRIPTION: &str = "Canadian news, culture and perspectives from across the world";

/// Open Graph metadata for social media previews.
///
/// Generates both Open Graph and Twitter Card meta tags.
#[derive(Debug, Clone)]
pub struct OpenGraphMetadata {
    /// Page title (og:title)
    pub title: String,
    /// Page description (og:description)
    pub description: String,
    /// Page URL (og:url)
    pub url: String,
    /// Open Graph type (og:type) - e.g., "website", "article"
    pub og_type: String,
    pub image: Option<String>,
    pub site_name: String,
    /// Twitter card type - "summary" or "summary_large_image"
    pub twitter_card: String,
    pub author: Option<String>,
    pub published_time: Option<String>,
    pub section: Option<String>,
}

impl Default for OpenGraphMetadata {
    fn default() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            url: "/".to_string(),
            og_type: "website".to_string(),
            image: None,
            site_name: SITE_NAME.to_string(),
            twitter_card: "summary".to_string(),
            author: None,
            published_time: None,
            section: None,
        }
    }
}

impl OpenGraphMetadata {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Article metadata: large image card, author, section and publish time.
    #[must_use]
    pub fn for_article(post: &DisplayPost) -> Self {
        Self {
            og_type: "article".to_string(),
            image: Some(post.image.clone()),
            twitter_card: "summary_large_image".to_string(),
            author: Some(post.author.clone()),
            published_time: Some(post.publish_date.clone()).filter(|d| !d.is_empty()),
            section: Some(post.category.clone()),
            ..Self::new(&post.title, truncate_text(&post.excerpt, 200), post.url())
        }
    }

    /// Render the metadata tags.
    pub fn render(&self) -> Markup {
        let title = &self.title;
        let description = &self.description;

        html! {
            // Open Graph metadata
            meta property="og:title" content=(title);
            meta property="og:description" content=(description);
            meta property="og:url" content=(&self.url);
            meta property="og:type" content=(&self.og_type);
            meta property="og:site_name" content=(&self.site_name);

            @if let Some(ref image_url) = self.image {
                meta property="og:image" content=(image_url);
                meta property="og:image:alt" content=(title);
            }

            @if let Some(ref author) = self.author {
                meta property="article:author" content=(author);
            }
            @if let Some(ref published) = self.published_time {
                meta property="article:published_time" content=(published);
            }
            @if let Some(ref section) = self.section {
                meta property="article:section" content=(section);
            }

            // Twitter Card metadata
            meta name="twitter:card" content=(&self.twitter_card);
            meta name="twitter:title" content=(title);
            meta name="twitter:description" content=(description);

            @if let Some(ref image_url) = self.image {
                meta name="twitter:image" content=(image_url);
            }

            meta name="description" content=(description);
        }
    }
}

/// Truncate text to at most `max_len` characters, ending with an ellipsis.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let mut truncated = text
            .chars()
            .take(max_len.saturating_sub(3))
            .collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metadata() {
        let meta = OpenGraphMetadata::default();
        assert_eq!(meta.title, SITE_NAME);
        assert_eq!(meta.og_type, "website");
        assert!(meta.image.is_none());
    }

    #[test]
    fn test_render_basic() {
        let meta = OpenGraphMetadata::new("Test Page", "A test page description", "/test");
        let html = meta.render().into_string();

        assert!(html.contains(r#"property="og:title" content="Test Page""#));
        assert!(html.contains(r#"property="og:description" content="A test page description""#));
        assert!(html.contains(r#"property="og:url" content="/test""#));
        assert!(html.contains(r#"name="twitter:card" content="summary""#));
        assert!(!html.contains("article:author"));
    }

    #[test]
    fn test_article_metadata() {
        let post = DisplayPost {
            id: 42,
            title: "Budget Day".to_string(),
            excerpt: "Numbers".to_string(),
            image: "https://cdn.example.com/a.jpg".to_string(),
            author: "Sarah Mitchell".to_string(),
            category: "Politics".to_string(),
            publish_date: "2024-05-01T09:30:00".to_string(),
            ..DisplayPost::default()
        };
        let html = OpenGraphMetadata::for_article(&post).render().into_string();

        assert!(html.contains(r#"property="og:type" content="article""#));
        assert!(html.contains(r#"property="og:url" content="/article/42""#));
        assert!(html.contains(r#"property="og:image" content="https://cdn.example.com/a.jpg""#));
        assert!(html.contains(r#"property="article:author" content="Sarah Mitchell""#));
        assert!(html.contains(r#"property="article:section" content="Politics""#));
        assert!(html.contains(r#"name="twitter:card" content="summary_large_image""#));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Hello", 10), "Hello");
        assert_eq!(truncate_text("Hello World", 8), "Hello...");
        assert_eq!(truncate_text("Test", 4), "Test");
        assert_eq!(truncate_text("Caf\u{e9} cr\u{e8}me", 7), "Caf\u{e9}...");
    }
}
