//! Built-in articles shown when the CMS cannot be reached.

use once_cell::sync::Lazy;
use rand::Rng;

use super::decorate::format_views;
use super::models::DisplayPost;
use super::normalize::format_read_time;

const PLACEHOLDER_CATEGORIES: [&str; 6] = [
    "Politics",
    "Business",
    "Technology",
    "Health",
    "Sports",
    "Entertainment",
];

const PLACEHOLDER_AUTHORS: [&str; 6] = [
    "Sarah Mitchell",
    "Michael Chen",
    "Dr. Amanda Rodriguez",
    "David Park",
    "Emma Thompson",
    "Robert Wilson",
];

const PLACEHOLDER_IMAGES: [&str; 6] = [
    "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg",
    "https://images.pexels.com/photos/3861972/pexels-photo-3861972.jpeg",
    "https://images.pexels.com/photos/4386466/pexels-photo-4386466.jpeg",
    "https://images.pexels.com/photos/1884574/pexels-photo-1884574.jpeg",
    "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg",
    "https://images.pexels.com/photos/2990644/pexels-photo-2990644.jpeg",
];

struct Seed {
    id: u64,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    category: &'static str,
    image: &'static str,
    author: &'static str,
    minutes: usize,
    views: &'static str,
    slug: &'static str,
    tags: [&'static str; 3],
    featured: bool,
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: 1,
        title: "Federal Budget 2024: Major Infrastructure Investment Announced",
        excerpt: "Government unveils $50 billion infrastructure plan focusing on green energy, transportation, and digital connectivity across all provinces.",
        content: "<p>Government unveils major infrastructure investment...</p>",
        category: "Politics",
        image: "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=400",
        author: "Sarah Mitchell",
        minutes: 6,
        views: "15.2k views",
        slug: "federal-budget-2024",
        tags: ["politics", "budget", "infrastructure"],
        featured: true,
    },
    Seed {
        id: 2,
        title: "Canadian Tech Sector Sees Record Growth in Q4 2024",
        excerpt: "Technology companies report unprecedented expansion with AI and clean tech leading the surge in innovation and investment.",
        content: "<p>Technology companies report unprecedented expansion...</p>",
        category: "Business",
        image: "https://images.pexels.com/photos/3861972/pexels-photo-3861972.jpeg?auto=compress&cs=tinysrgb&w=400",
        author: "Michael Chen",
        minutes: 8,
        views: "12.8k views",
        slug: "tech-sector-growth",
        tags: ["business", "technology", "growth"],
        featured: true,
    },
    Seed {
        id: 3,
        title: "Universal Pharmacare Program Launches Nationwide",
        excerpt: "Historic healthcare expansion provides prescription drug coverage for all Canadians, marking a significant milestone in public health policy.",
        content: "<p>Historic healthcare expansion provides prescription drug coverage...</p>",
        category: "Health",
        image: "https://images.pexels.com/photos/4386466/pexels-photo-4386466.jpeg?auto=compress&cs=tinysrgb&w=400",
        author: "Dr. Amanda Rodriguez",
        minutes: 7,
        views: "18.5k views",
        slug: "universal-pharmacare",
        tags: ["health", "healthcare", "policy"],
        featured: true,
    },
    Seed {
        id: 4,
        title: "Canadian Olympic Team Prepares for Paris 2024 with Record Roster",
        excerpt: "Team Canada announces largest ever Olympic delegation with strong medal prospects across multiple disciplines.",
        content: "<p>Team Canada announces largest ever Olympic delegation with strong medal prospects across multiple disciplines. The 2024 Paris Olympics will see Canada represented by over 300 athletes competing in various sports.</p><h2>Record Participation</h2><p>This year's team represents the largest Canadian Olympic delegation in history, with athletes qualifying across traditional strongholds like swimming and hockey, as well as emerging sports like skateboarding and sport climbing.</p><h2>Medal Prospects</h2><p>Canadian Olympic officials are optimistic about medal prospects, with several athletes ranked among the world's top competitors in their respective disciplines.</p>",
        category: "Sports",
        image: "https://images.pexels.com/photos/1884574/pexels-photo-1884574.jpeg?auto=compress&cs=tinysrgb&w=400",
        author: "David Park",
        minutes: 5,
        views: "11.3k views",
        slug: "olympic-team-2024",
        tags: ["sports", "olympics", "canada"],
        featured: false,
    },
    Seed {
        id: 5,
        title: "Canadian Film Industry Celebrates International Recognition",
        excerpt: "Multiple Canadian productions receive major international awards, highlighting the country's growing influence in global entertainment.",
        content: "<p>Multiple Canadian productions receive major international awards, highlighting the country's growing influence in global entertainment. From documentaries to feature films, Canadian creators are making their mark on the world stage.</p><h2>Award Winners</h2><p>Several Canadian films and documentaries have received recognition at major international film festivals, showcasing the diversity and quality of Canadian storytelling.</p><h2>Industry Growth</h2><p>The Canadian film industry has seen significant growth in recent years, supported by government initiatives and increased international co-productions.</p>",
        category: "Entertainment",
        image: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=400",
        author: "Emma Thompson",
        minutes: 6,
        views: "8.9k views",
        slug: "canadian-film-recognition",
        tags: ["entertainment", "film", "awards"],
        featured: false,
    },
    Seed {
        id: 6,
        title: "Provincial Leaders Meet for Climate Action Summit",
        excerpt: "Premiers from across Canada gather to discuss coordinated response to climate change and sustainable development goals.",
        content: "<p>Premiers from across Canada gather to discuss coordinated response to climate change and sustainable development goals. The summit aims to align provincial policies with federal climate targets.</p><h2>Key Discussions</h2><p>The summit focuses on carbon pricing, renewable energy investments, and adaptation strategies for climate change impacts across different regions.</p><h2>Collaborative Approach</h2><p>Provincial leaders emphasize the importance of working together to address climate challenges while supporting economic growth and job creation.</p>",
        category: "Politics",
        image: "https://images.pexels.com/photos/2990644/pexels-photo-2990644.jpeg?auto=compress&cs=tinysrgb&w=400",
        author: "Robert Wilson",
        minutes: 9,
        views: "7.2k views",
        slug: "climate-action-summit",
        tags: ["politics", "climate", "environment"],
        featured: false,
    },
];

/// Dated at first use, so the fallback set always looks current.
static FALLBACK_POSTS: Lazy<Vec<DisplayPost>> = Lazy::new(|| {
    let now = chrono::Utc::now().to_rfc3339();
    SEEDS
        .iter()
        .map(|seed| DisplayPost {
            id: seed.id,
            title: seed.title.to_string(),
            excerpt: seed.excerpt.to_string(),
            content: seed.content.to_string(),
            category: seed.category.to_string(),
            category_slug: seed.category.to_lowercase(),
            image: seed.image.to_string(),
            author: seed.author.to_string(),
            read_time: format_read_time(seed.minutes),
            views: seed.views.to_string(),
            publish_date: now.clone(),
            slug: seed.slug.to_string(),
            tags: seed.tags.iter().map(ToString::to_string).collect(),
            featured: seed.featured,
            is_trending: false,
            is_breaking: false,
        })
        .collect()
});

#[must_use]
pub fn fallback_posts() -> &'static [DisplayPost] {
    &FALLBACK_POSTS
}

#[must_use]
pub fn fallback_post(id: u64) -> Option<&'static DisplayPost> {
    FALLBACK_POSTS.iter().find(|p| p.id == id)
}

#[must_use]
pub fn fallback_post_by_slug(slug: &str) -> Option<&'static DisplayPost> {
    FALLBACK_POSTS.iter().find(|p| p.slug == slug)
}

/// Synthesize a stand-in article for an id nothing else knows about.
///
/// Category, author and image are picked by `id`; read time and the
/// decorative fields are random.
pub fn placeholder_article<R: Rng + ?Sized>(id: u64, rng: &mut R) -> DisplayPost {
    let index = (id % PLACEHOLDER_CATEGORIES.len() as u64) as usize;
    let category = PLACEHOLDER_CATEGORIES[index];

    DisplayPost {
        id,
        title: format!("Article {id}: Updates in {category}"),
        excerpt: format!(
            "Brief overview of key developments in {}.",
            category.to_lowercase()
        ),
        content: format!("<p>This is a fallback article for {category}.</p>"),
        category: category.to_string(),
        category_slug: category.to_lowercase(),
        image: PLACEHOLDER_IMAGES[index].to_string(),
        author: PLACEHOLDER_AUTHORS[index].to_string(),
        read_time: format_read_time(rng.gen_range(4..=8)),
        views: format_views(rng.gen_range(10..110)),
        publish_date: chrono::Utc::now().to_rfc3339(),
        slug: format!("article-{id}"),
        tags: vec![category.to_lowercase(), "news".to_string()],
        featured: rng.gen_bool(0.3),
        is_trending: rng.gen_bool(0.2),
        is_breaking: rng.gen_bool(0.1),
    }
}
