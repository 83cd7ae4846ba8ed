//! Category slug resolution.

use tracing::warn;

use super::cache::FetchOptions;
use super::client::{endpoint, WordPressClient};
use super::error::FetchError;
use super::models::Category;

/// Find the id of the category with exactly this slug.
#[must_use]
pub fn find_category_id(categories: &[Category], slug: &str) -> Option<u64> {
    categories.iter().find(|c| c.slug == slug).map(|c| c.id)
}

impl WordPressClient {
    /// Fetch the category list (up to 100 entries).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails and nothing is cached.
    pub async fn get_categories(&self) -> Result<Vec<Category>, FetchError> {
        let mut url = endpoint(self.api_url(), "/categories")?;
        url.query_pairs_mut().append_pair("per_page", "100");

        let value = self
            .fetch_with_cache(url.as_str(), &FetchOptions::default())
            .await?;
        serde_json::from_value(value).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Resolve a category slug to its numeric id.
    ///
    /// Returns `Ok(None)` when the slug is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the category list cannot be fetched.
    pub async fn resolve_category(&self, slug: &str) -> Result<Option<u64>, FetchError> {
        let categories = self.get_categories().await?;
        let id = find_category_id(&categories, slug);

        if id.is_none() {
            let known: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
            warn!(category = %slug, available = ?known, "Category not found");
        }

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: u64, slug: &str) -> Category {
        Category {
            id,
            name: slug.to_string(),
            slug: slug.to_string(),
            ..Category::default()
        }
    }

    #[test]
    fn test_find_category_id() {
        let categories = vec![category(3, "politics"), category(7, "business")];

        assert_eq!(find_category_id(&categories, "business"), Some(7));
        assert_eq!(find_category_id(&categories, "nonexistent-slug"), None);
    }

    #[test]
    fn test_find_category_id_is_case_sensitive() {
        let categories = vec![category(7, "business")];
        assert_eq!(find_category_id(&categories, "Business"), None);
    }

    #[test]
    fn test_find_category_id_empty_list() {
        assert_eq!(find_category_id(&[], "business"), None);
    }
}
