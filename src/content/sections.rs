//! Site sections and the CMS categories behind them.

/// Category sections fetch at least this many posts so pages can pick from
/// a pool larger than what they display.
pub const MIN_SECTION_FETCH: u32 = 20;

/// Number of posts to request for a section displaying `limit` posts.
#[must_use]
pub fn fetch_size(limit: u32) -> u32 {
    limit.max(MIN_SECTION_FETCH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    LatestHeadlines,
    EditorsPicks,
    DailyMaple,
    MapleTravel,
    ThroughTheLens,
    FeaturedArticles,
    MapleVoices,
    ExploreCanada,
    Resources,
    Events,
    Continent,
    Canada,
    YouMayHaveMissed,
    Africa,
    Americas,
    Australia,
    Asia,
    Europe,
    Uk,
    BookNook,
    TheFridayPost,
    Lifestyle,
}

impl Section {
    pub const ALL: [Self; 22] = [
        Self::LatestHeadlines,
        Self::EditorsPicks,
        Self::DailyMaple,
        Self::MapleTravel,
        Self::ThroughTheLens,
        Self::FeaturedArticles,
        Self::MapleVoices,
        Self::ExploreCanada,
        Self::Resources,
        Self::Events,
        Self::Continent,
        Self::Canada,
        Self::YouMayHaveMissed,
        Self::Africa,
        Self::Americas,
        Self::Australia,
        Self::Asia,
        Self::Europe,
        Self::Uk,
        Self::BookNook,
        Self::TheFridayPost,
        Self::Lifestyle,
    ];

    /// World-news regions shown together on the home page.
    pub const WORLD: [Self; 6] = [
        Self::Africa,
        Self::Americas,
        Self::Australia,
        Self::Asia,
        Self::Europe,
        Self::Uk,
    ];

    /// URL slug. Matches the CMS category slug for category-backed sections.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::LatestHeadlines => "latest-headlines",
            Self::EditorsPicks => "editors-picks",
            Self::DailyMaple => "daily-maple",
            Self::MapleTravel => "maple-travel",
            Self::ThroughTheLens => "through-the-lens",
            Self::FeaturedArticles => "featured-articles",
            Self::MapleVoices => "maple-voices",
            Self::ExploreCanada => "explore-canada",
            Self::Resources => "resources",
            Self::Events => "events",
            Self::Continent => "continent",
            Self::Canada => "canada",
            Self::YouMayHaveMissed => "you-may-have-missed",
            Self::Africa => "africa",
            Self::Americas => "americas",
            Self::Australia => "australia",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Uk => "uk",
            Self::BookNook => "booknook",
            Self::TheFridayPost => "the-friday-post",
            Self::Lifestyle => "lifestyle",
        }
    }

    /// CMS category to list, or `None` for sections with their own query.
    #[must_use]
    pub fn category_slug(self) -> Option<&'static str> {
        match self {
            Self::LatestHeadlines | Self::EditorsPicks => None,
            other => Some(other.slug()),
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::LatestHeadlines => "Latest Headlines",
            Self::EditorsPicks => "Editor's Picks",
            Self::DailyMaple => "The Daily Maple",
            Self::MapleTravel => "Maple Travel",
            Self::ThroughTheLens => "Through the Lens",
            Self::FeaturedArticles => "Featured Articles",
            Self::MapleVoices => "Maple Voices",
            Self::ExploreCanada => "Explore Canada",
            Self::Resources => "Resources",
            Self::Events => "Events",
            Self::Continent => "Continent",
            Self::Canada => "Canada",
            Self::YouMayHaveMissed => "You May Have Missed",
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Australia => "Australia",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Uk => "UK",
            Self::BookNook => "BookNook",
            Self::TheFridayPost => "The Friday Post",
            Self::Lifestyle => "Lifestyle",
        }
    }

    /// Posts shown by default; single-story slots show one.
    #[must_use]
    pub fn default_limit(self) -> u32 {
        match self {
            Self::Canada
            | Self::Africa
            | Self::Americas
            | Self::Australia
            | Self::Asia
            | Self::Europe
            | Self::Uk => 1,
            _ => 3,
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}
