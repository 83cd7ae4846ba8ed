//! Mapping CMS posts onto [`DisplayPost`].
//!
//! Everything here is deterministic. Decorative fields are left at their
//! defaults and filled in by [`super::decorate`].

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use super::models::DisplayPost;
use crate::wordpress::RawPost;

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const DEFAULT_CATEGORY: &str = "General";
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=400";

/// Reading speed used for the read-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static LINE_ENDING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").expect("valid regex"));
// Two or more consecutive blank (or whitespace-only) lines.
static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").expect("valid regex"));

/// Map a CMS post to its display form. Never fails on missing embeds.
#[must_use]
pub fn normalize_post(post: &RawPost) -> DisplayPost {
    let embedded = post.embedded.as_ref();

    let author = embedded
        .and_then(|e| e.author.first())
        .map(|a| a.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_AUTHOR)
        .to_string();

    let image = embedded
        .and_then(|e| e.featured_media.first())
        .and_then(|m| m.source_url.as_deref())
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_string();

    let primary_term = embedded
        .and_then(|e| e.terms.first())
        .and_then(|group| group.first())
        .filter(|term| !term.name.is_empty());
    let category = primary_term
        .map_or(DEFAULT_CATEGORY, |term| term.name.as_str())
        .to_string();
    let category_slug = primary_term
        .map(|term| term.slug.clone())
        .unwrap_or_default();

    let tags = embedded
        .and_then(|e| e.terms.get(1))
        .map(|group| group.iter().map(|term| term.name.clone()).collect())
        .unwrap_or_default();

    let title = plain_text(&post.title.rendered);
    let excerpt = plain_text(&post.excerpt.rendered);
    let excerpt = if excerpt.is_empty() {
        title.clone()
    } else {
        excerpt
    };

    let content = clean_content(&post.content.rendered);
    let read_time = format_read_time(estimate_read_minutes(&content));

    DisplayPost {
        id: post.id,
        title,
        excerpt,
        content,
        category,
        category_slug,
        image,
        author,
        read_time,
        views: String::new(),
        publish_date: post.date.clone(),
        slug: post.slug.clone(),
        tags,
        featured: post.sticky,
        is_trending: false,
        is_breaking: false,
    }
}

/// Text content of an HTML fragment, entities decoded, trimmed.
#[must_use]
pub fn plain_text(html: &str) -> String {
    if !html.contains(['<', '&']) {
        return html.trim().to_string();
    }
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.trim().to_string()
}

/// Remove HTML tags, leaving a space where each tag was.
#[must_use]
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, " ").into_owned()
}

/// Normalize line endings and collapse runs of blank lines; markup is kept.
#[must_use]
pub fn clean_content(html: &str) -> String {
    let unix = LINE_ENDING_RE.replace_all(html, "\n");
    let collapsed = BLANK_RUN_RE.replace_all(&unix, "\n\n");
    collapsed.trim().to_string()
}

/// Minutes to read `html` at [`WORDS_PER_MINUTE`], rounded up, at least 1.
#[must_use]
pub fn estimate_read_minutes(html: &str) -> usize {
    let words = strip_tags(html).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

#[must_use]
pub fn format_read_time(minutes: usize) -> String {
    format!("{minutes} min read")
}
