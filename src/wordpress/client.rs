use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::cache::{FetchCache, FetchOptions};
use super::error::FetchError;
use super::models::RawPost;
use super::Listing;
use crate::config::Config;
use crate::constants::CMS_USER_AGENT;

/// Query for `GET /posts`.
#[derive(Debug, Clone)]
pub struct PostQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub categories: Option<u64>,
    pub search: Option<String>,
    pub embed: bool,
    pub sticky: bool,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            per_page: None,
            page: None,
            categories: None,
            search: None,
            embed: true,
            sticky: false,
        }
    }
}

impl PostQuery {
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn category(mut self, category_id: u64) -> Self {
        self.categories = Some(category_id);
        self
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }

    #[must_use]
    pub fn without_embed(mut self) -> Self {
        self.embed = false;
        self
    }

    /// Build the request URL. Results are always newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` is not a valid base URL.
    pub fn to_url(&self, api_url: &str) -> Result<Url, FetchError> {
        let mut url = endpoint(api_url, "/posts")?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(per_page) = self.per_page {
                pairs.append_pair("per_page", &per_page.to_string());
            }
            if let Some(page) = self.page {
                pairs.append_pair("page", &page.to_string());
            }
            if let Some(categories) = self.categories {
                pairs.append_pair("categories", &categories.to_string());
            }
            if let Some(search) = &self.search {
                pairs.append_pair("search", search);
            }
            if self.embed {
                pairs.append_pair("_embed", "true");
            }
            if self.sticky {
                pairs.append_pair("sticky", "true");
            }
            pairs.append_pair("orderby", "date");
            pairs.append_pair("order", "desc");
        }
        Ok(url)
    }
}

/// Parse `{api_url}{path}` into a URL.
pub(crate) fn endpoint(api_url: &str, path: &str) -> Result<Url, FetchError> {
    let raw = format!("{}{path}", api_url.trim_end_matches('/'));
    Url::parse(&raw).map_err(|source| FetchError::InvalidUrl { url: raw, source })
}

/// Read-only client for the public CMS endpoints.
///
/// Every read goes through the shared [`FetchCache`].
#[derive(Debug, Clone)]
pub struct WordPressClient {
    http: Client,
    api_url: String,
    cache: Arc<FetchCache>,
    timeout: Duration,
}

impl WordPressClient {
    /// Create a client for the configured CMS using the given cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config, cache: Arc<FetchCache>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(CMS_USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: config.wordpress_api_url.clone(),
            cache,
            timeout: config.request_timeout,
        })
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    #[must_use]
    pub fn cache(&self) -> &FetchCache {
        &self.cache
    }

    /// Fetch JSON from `url`, serving from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the live request fails and nothing is cached.
    pub async fn fetch_with_cache(
        &self,
        url: &str,
        options: &FetchOptions,
    ) -> Result<Value, FetchError> {
        let key = FetchCache::cache_key(url, options);
        self.cache
            .get_or_fetch(&key, || self.fetch_live(url, options))
            .await
    }

    /// One bounded request. The whole exchange, body included, must finish
    /// within the timeout; on expiry the request future is dropped.
    async fn fetch_live(&self, url: &str, options: &FetchOptions) -> Result<Value, FetchError> {
        debug!(url = %url, "Fetching from CMS");

        let result = tokio::time::timeout(self.timeout, async {
            let mut request = self
                .http
                .get(url)
                .header(reqwest::header::CONTENT_TYPE, "application/json");
            for (name, value) in &options.headers {
                request = request.header(name.as_str(), value.as_str());
            }

            let response = request.send().await.map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status,
                });
            }

            let body = response.bytes().await.map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;
            serde_json::from_slice::<Value>(&body).map_err(|source| FetchError::Decode {
                url: url.to_string(),
                source,
            })
        })
        .await;

        let result = result.unwrap_or_else(|_| {
            Err(FetchError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            })
        });

        if let Err(e) = &result {
            if e.is_timeout() {
                warn!(url = %url, "CMS request timed out");
            } else {
                warn!(url = %url, "CMS fetch error: {e}");
            }
        }

        result
    }

    async fn fetch_typed<T: DeserializeOwned>(&self, url: &Url) -> Result<T, FetchError> {
        let value = self
            .fetch_with_cache(url.as_str(), &FetchOptions::default())
            .await?;
        serde_json::from_value(value).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// List posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails and nothing is cached.
    pub async fn get_posts(&self, query: &PostQuery) -> Result<Vec<RawPost>, FetchError> {
        let url = query.to_url(&self.api_url)?;
        self.fetch_typed(&url).await
    }

    /// Fetch a single post with embedded expansions.
    ///
    /// # Errors
    ///
    /// Propagates every failure, including a 404 for unknown ids.
    pub async fn get_post(&self, id: u64) -> Result<RawPost, FetchError> {
        let mut url = endpoint(&self.api_url, &format!("/posts/{id}"))?;
        url.query_pairs_mut().append_pair("_embed", "true");
        self.fetch_typed(&url).await
    }

    /// Fetch a post by slug.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] if no post has this slug, and
    /// propagates request failures.
    pub async fn get_post_by_slug(&self, slug: &str) -> Result<RawPost, FetchError> {
        let mut url = endpoint(&self.api_url, "/posts")?;
        url.query_pairs_mut()
            .append_pair("slug", slug)
            .append_pair("_embed", "true");

        let posts: Vec<RawPost> = self.fetch_typed(&url).await?;
        posts
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound(format!("post with slug '{slug}'")))
    }

    /// Posts in the category with this slug.
    ///
    /// Never fails: an unknown category is [`Listing::Empty`] and a failed
    /// request is [`Listing::Unavailable`].
    pub async fn get_posts_by_category(&self, slug: &str, limit: u32) -> Listing<RawPost> {
        let category_id = match self.resolve_category(slug).await {
            Ok(Some(id)) => id,
            Ok(None) => return Listing::Empty,
            Err(e) => {
                warn!(category = %slug, "Error resolving category: {e}");
                return Listing::Unavailable(e);
            }
        };

        let query = PostQuery::default().category(category_id).per_page(limit);
        let listing = Listing::from_result(self.get_posts(&query).await);
        if let Listing::Unavailable(e) = &listing {
            warn!(category = %slug, "Error fetching posts for category: {e}");
        }
        listing
    }
}
