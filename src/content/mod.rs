//! Display-ready content: normalization, decoration, sections and fallbacks.

pub mod decorate;
pub mod fallback;
pub mod hero;
pub mod models;
pub mod normalize;
pub mod sections;
pub mod service;

pub use decorate::{transform_post, Decorations};
pub use fallback::{fallback_post, fallback_post_by_slug, fallback_posts, placeholder_article};
pub use hero::HeroLayout;
pub use models::DisplayPost;
pub use normalize::normalize_post;
pub use sections::Section;
pub use service::{ContentService, FeaturedStory, TECH_ENERGY_STORY};
