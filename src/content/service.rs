use std::sync::{Arc, Mutex, PoisonError};

use futures_util::future::join_all;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::decorate::transform_post;
use super::fallback::{fallback_post, fallback_post_by_slug, fallback_posts, placeholder_article};
use super::hero::HeroLayout;
use super::models::DisplayPost;
use super::sections::{fetch_size, Section};
use crate::wordpress::{Listing, PostQuery, RawPost, WordPressClient};

/// Category slugs tried, in order, for the editors' picks section.
pub const EDITORS_PICKS_CATEGORIES: [&str; 2] = ["editors-picks", "editor-picks"];

/// Posts pulled for the hero before arranging.
const HERO_POOL: u32 = 20;

/// A hand-placed story: the first post in `category` whose title matches.
#[derive(Debug, Clone, Copy)]
pub struct FeaturedStory {
    pub slug: &'static str,
    pub category: &'static str,
    /// Match if the title contains any of these.
    pub any_of: &'static [&'static str],
    /// Match if the title contains all of these.
    pub all_of: &'static [&'static str],
    /// Fallback article shown when the category yields nothing.
    pub fallback_id: u64,
}

impl FeaturedStory {
    /// Case-insensitive title match.
    #[must_use]
    pub fn matches(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.any_of.iter().any(|k| title.contains(k))
            || (!self.all_of.is_empty() && self.all_of.iter().all(|k| title.contains(k)))
    }
}

pub const TECH_ENERGY_STORY: FeaturedStory = FeaturedStory {
    slug: "tech-energy-giants-pennsylvania-ai",
    category: "business",
    any_of: &["pennsylvania", "ai hub"],
    all_of: &["tech", "energy"],
    fallback_id: 2,
};

/// Everything pages read goes through here.
///
/// This is the only place where fallback data replaces remote content.
#[derive(Debug, Clone)]
pub struct ContentService {
    client: WordPressClient,
    rng: Arc<Mutex<StdRng>>,
}

impl ContentService {
    #[must_use]
    pub fn new(client: WordPressClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Use a specific RNG for decorative fields, e.g. a seeded one in tests.
    #[must_use]
    pub fn with_rng(client: WordPressClient, rng: StdRng) -> Self {
        Self {
            client,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    #[must_use]
    pub fn client(&self) -> &WordPressClient {
        &self.client
    }

    fn transform_all(&self, posts: &[RawPost]) -> Vec<DisplayPost> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        posts.iter().map(|p| transform_post(p, &mut *rng)).collect()
    }

    fn transform_one(&self, post: &RawPost) -> DisplayPost {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        transform_post(post, &mut *rng)
    }

    fn to_display(&self, listing: Listing<RawPost>, limit: u32) -> Listing<DisplayPost> {
        match listing {
            Listing::Found(mut posts) => {
                posts.truncate(limit as usize);
                Listing::Found(self.transform_all(&posts))
            }
            Listing::Empty => Listing::Empty,
            Listing::Unavailable(e) => Listing::Unavailable(e),
        }
    }

    /// The `limit` most recent posts.
    pub async fn latest_headlines(&self, limit: u32) -> Listing<DisplayPost> {
        let query = PostQuery::default().per_page(limit);
        let listing = Listing::from_result(self.client.get_posts(&query).await);
        self.to_display(listing, limit)
    }

    /// Up to `limit` posts from a category, picked from a larger fetch.
    pub async fn category_posts(&self, slug: &str, limit: u32) -> Listing<DisplayPost> {
        let listing = self
            .client
            .get_posts_by_category(slug, fetch_size(limit))
            .await;
        self.to_display(listing, limit)
    }

    /// Editors' picks: the first non-empty of the picks categories, sticky
    /// posts and the most recent posts. Every result is featured.
    pub async fn editors_picks(&self, limit: u32) -> Listing<DisplayPost> {
        let mut last = Listing::Empty;

        for slug in EDITORS_PICKS_CATEGORIES {
            let listing = self
                .client
                .get_posts_by_category(slug, fetch_size(limit))
                .await;
            if listing.is_found() {
                debug!(category = %slug, "Editors' picks from category");
                return self.to_display(listing, limit).map(mark_featured);
            }
            last = listing;
        }

        let stages = [
            ("sticky", PostQuery::default().sticky().per_page(fetch_size(limit))),
            ("recent", PostQuery::default().per_page(fetch_size(limit))),
        ];
        for (stage, query) in stages {
            let listing = Listing::from_result(self.client.get_posts(&query).await);
            if listing.is_found() {
                debug!(stage, "Editors' picks from posts");
                return self.to_display(listing, limit).map(mark_featured);
            }
            if let Listing::Unavailable(e) = &listing {
                warn!(stage, "Editors' picks stage failed: {e}");
            }
            last = listing;
        }

        match last {
            Listing::Unavailable(e) => Listing::Unavailable(e),
            _ => Listing::Empty,
        }
    }

    pub async fn section(&self, section: Section, limit: u32) -> Listing<DisplayPost> {
        let limit = limit.max(1);
        match section {
            Section::LatestHeadlines => self.latest_headlines(limit).await,
            Section::EditorsPicks => self.editors_picks(limit).await,
            other => {
                let slug = other.category_slug().unwrap_or(other.slug());
                self.category_posts(slug, limit).await
            }
        }
    }

    /// A section's posts, or fallback posts if it has none.
    pub async fn section_or_fallback(&self, section: Section, limit: u32) -> Vec<DisplayPost> {
        let limit = limit.max(1);
        match self.section(section, limit).await {
            Listing::Found(posts) => posts,
            Listing::Empty => {
                debug!(section = %section.slug(), "Section empty, using fallback posts");
                fallback_section(section, limit)
            }
            Listing::Unavailable(e) => {
                info!(section = %section.slug(), "Section unavailable, using fallback posts: {e}");
                fallback_section(section, limit)
            }
        }
    }

    /// Fetch several sections concurrently, each at its default limit.
    pub async fn sections(&self, sections: &[Section]) -> Vec<(Section, Vec<DisplayPost>)> {
        let posts = join_all(
            sections
                .iter()
                .map(|&s| self.section_or_fallback(s, s.default_limit())),
        )
        .await;
        sections.iter().copied().zip(posts).collect()
    }

    /// Article by id: remote post, else fallback entry, else a placeholder.
    pub async fn article(&self, id: u64) -> DisplayPost {
        match self.client.get_post(id).await {
            Ok(post) => return self.transform_one(&post),
            Err(e) if e.is_not_found() => debug!(id, "Post not found on CMS"),
            Err(e) => warn!(id, "Error fetching post: {e}"),
        }

        if let Some(post) = fallback_post(id) {
            return post.clone();
        }

        debug!(id, "Generating placeholder article");
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        placeholder_article(id, &mut *rng)
    }

    /// Article by slug: remote post, else fallback entry, else `None`.
    pub async fn article_by_slug(&self, slug: &str) -> Option<DisplayPost> {
        match self.client.get_post_by_slug(slug).await {
            Ok(post) => return Some(self.transform_one(&post)),
            Err(e) if e.is_not_found() => debug!(slug, "No post with slug"),
            Err(e) => warn!(slug, "Error fetching post by slug: {e}"),
        }
        fallback_post_by_slug(slug).cloned()
    }

    /// The first matching post in the story's category, else the first post
    /// there, else `None`.
    pub async fn featured_story(&self, story: &FeaturedStory) -> Option<DisplayPost> {
        let posts = self
            .client
            .get_posts_by_category(story.category, fetch_size(1))
            .await
            .into_vec();

        let chosen = posts
            .iter()
            .find(|p| story.matches(&p.title.rendered))
            .or_else(|| posts.first())?;
        Some(self.transform_one(chosen))
    }

    /// Hero arrangement of recent posts, or of the fallback set when no
    /// recent post is in a hero category.
    pub async fn hero(&self) -> Option<HeroLayout> {
        let recent = self.latest_headlines(HERO_POOL).await.into_vec();
        HeroLayout::arrange(&recent).or_else(|| HeroLayout::arrange(fallback_posts()))
    }
}

fn mark_featured(mut post: DisplayPost) -> DisplayPost {
    post.featured = true;
    post
}

fn fallback_section(section: Section, limit: u32) -> Vec<DisplayPost> {
    let posts = fallback_posts().iter().take(limit as usize).cloned();
    match section {
        Section::EditorsPicks => posts.map(mark_featured).collect(),
        _ => posts.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_energy_story_matching() {
        let story = TECH_ENERGY_STORY;
        assert!(story.matches("Pennsylvania lands a data center"));
        assert!(story.matches("State pitches itself as an AI Hub"));
        assert!(story.matches("Big Tech signs energy deals"));
        assert!(!story.matches("Tech earnings beat estimates"));
        assert!(!story.matches("Energy prices fall"));
    }

    #[test]
    fn test_fallback_section_respects_limit() {
        assert_eq!(fallback_section(Section::Canada, 1).len(), 1);
        assert_eq!(fallback_section(Section::DailyMaple, 3).len(), 3);
        assert_eq!(fallback_section(Section::DailyMaple, 50).len(), 6);
    }

    #[test]
    fn test_fallback_editors_picks_are_featured() {
        let picks = fallback_section(Section::EditorsPicks, 6);
        assert!(picks.iter().all(|p| p.featured));
    }
}
