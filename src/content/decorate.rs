//! Decorative, non-deterministic presentation fields.
//!
//! View counts and trending/breaking badges are cosmetic and not backed by
//! analytics. They are rolled from an injected RNG, so every transform of
//! the same post may come out different; seeded RNGs make them repeatable.

use rand::Rng;

use super::models::DisplayPost;
use super::normalize::normalize_post;
use crate::wordpress::RawPost;

pub const TRENDING_PROBABILITY: f64 = 0.3;
pub const BREAKING_PROBABILITY: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorations {
    pub views: String,
    pub is_trending: bool,
    pub is_breaking: bool,
}

impl Decorations {
    /// Views in [1.0k, 6.0k), trending ~30%, breaking ~10%.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            views: format_views(rng.gen_range(10..60)),
            is_trending: rng.gen_bool(TRENDING_PROBABILITY),
            is_breaking: rng.gen_bool(BREAKING_PROBABILITY),
        }
    }
}

/// Format a view count given in hundreds, e.g. `23` -> `"2.3k views"`.
#[must_use]
pub fn format_views(hundreds: u32) -> String {
    format!("{}.{}k views", hundreds / 10, hundreds % 10)
}

impl DisplayPost {
    #[must_use]
    pub fn decorate(mut self, decorations: Decorations) -> Self {
        self.views = decorations.views;
        self.is_trending = decorations.is_trending;
        self.is_breaking = decorations.is_breaking;
        self
    }
}

/// Normalize a post and roll its decorative fields.
pub fn transform_post<R: Rng + ?Sized>(post: &RawPost, rng: &mut R) -> DisplayPost {
    normalize_post(post).decorate(Decorations::roll(rng))
}
