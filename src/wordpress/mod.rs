//! WordPress REST API access.
//!
//! - `cache`: request-signature keyed response cache with stale fallback
//! - `client`: cached reads of posts and categories
//! - `categories`: category slug resolution
//! - `authoring`: authenticated writes used by the dashboard
//! - `models`: wire types

pub mod authoring;
pub mod cache;
pub mod categories;
pub mod client;
pub mod error;
pub mod models;

pub use authoring::AuthorClient;
pub use cache::{CacheEntry, FetchCache, FetchOptions, DEFAULT_CACHE_TTL};
pub use categories::find_category_id;
pub use client::{PostQuery, WordPressClient};
pub use error::FetchError;
pub use models::{
    Category, Embedded, EmbeddedAuthor, FeaturedMedia, MediaItem, PostDraft, PostStatus,
    PostUpdate, RawPost, Rendered, Term, WpUser,
};

/// Outcome of a listing request.
///
/// Listings never fail outright: callers decide what an empty or
/// unavailable section turns into.
#[derive(Debug)]
pub enum Listing<T> {
    Found(Vec<T>),
    Empty,
    Unavailable(FetchError),
}

impl<T> Listing<T> {
    /// Classify a fetch result; an empty vector is [`Listing::Empty`].
    pub fn from_result(result: Result<Vec<T>, FetchError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Found(items),
            Err(e) => Self::Unavailable(e),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        match self {
            Self::Found(items) => Listing::Found(items.into_iter().map(f).collect()),
            Self::Empty => Listing::Empty,
            Self::Unavailable(e) => Listing::Unavailable(e),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The items, or an empty vector for anything but `Found`.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Found(items) => items,
            Self::Empty | Self::Unavailable(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_from_result() {
        assert!(matches!(
            Listing::<u8>::from_result(Ok(vec![])),
            Listing::Empty
        ));
        assert!(Listing::from_result(Ok(vec![1])).is_found());
        let failed: Listing<u8> =
            Listing::from_result(Err(FetchError::NotFound("posts".to_string())));
        assert!(matches!(failed, Listing::Unavailable(_)));
        assert!(failed.into_vec().is_empty());
    }

    #[test]
    fn test_listing_map() {
        let listing = Listing::Found(vec![1, 2, 3]).map(|n| n * 10);
        assert_eq!(listing.into_vec(), vec![10, 20, 30]);
    }
}
