//! Authenticated write access to the CMS for the author dashboard.
//!
//! Requests carry the author's bearer token and bypass the response cache.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::client::endpoint;
use super::error::FetchError;
use super::models::{ApiErrorBody, MediaItem, PostDraft, PostUpdate, RawPost};
use crate::config::Config;
use crate::constants::CMS_USER_AGENT;

#[derive(Debug, Clone)]
pub struct AuthorClient {
    http: Client,
    api_url: String,
}

impl AuthorClient {
    /// Create a client for the configured CMS.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(CMS_USER_AGENT)
            .timeout(config.request_timeout.max(Duration::from_secs(30)))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: config.wordpress_api_url.clone(),
        })
    }

    /// Posts by `author_id` in every status, or all posts when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn list_posts(&self, token: &str, author_id: Option<u64>) -> Result<Vec<RawPost>, FetchError> {
        let mut url = endpoint(&self.api_url, "/posts")?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(author_id) = author_id {
                pairs.append_pair("author", &author_id.to_string());
            }
            pairs.append_pair("status", "any");
            pairs.append_pair("_embed", "true");
        }
        let request = self.http.get(url.clone()).bearer_auth(token);
        send_json(request, url.as_str()).await
    }

    /// Fetch a post for editing (raw fields, any status).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn get_post(&self, token: &str, id: u64) -> Result<RawPost, FetchError> {
        let mut url = endpoint(&self.api_url, &format!("/posts/{id}"))?;
        url.query_pairs_mut()
            .append_pair("context", "edit")
            .append_pair("_embed", "true");
        let request = self.http.get(url.clone()).bearer_auth(token);
        send_json(request, url.as_str()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn create_post(&self, token: &str, draft: &PostDraft) -> Result<RawPost, FetchError> {
        let url = endpoint(&self.api_url, "/posts")?;
        let request = self.http.post(url.clone()).bearer_auth(token).json(draft);
        let post: RawPost = send_json(request, url.as_str()).await?;
        info!(post_id = post.id, status = draft.status.as_str(), "Created post");
        Ok(post)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn update_post(
        &self,
        token: &str,
        id: u64,
        update: &PostUpdate,
    ) -> Result<RawPost, FetchError> {
        let url = endpoint(&self.api_url, &format!("/posts/{id}"))?;
        let request = self.http.put(url.clone()).bearer_auth(token).json(update);
        let post: RawPost = send_json(request, url.as_str()).await?;
        info!(post_id = id, "Updated post");
        Ok(post)
    }

    /// Move a post to the trash.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn delete_post(&self, token: &str, id: u64) -> Result<(), FetchError> {
        let url = endpoint(&self.api_url, &format!("/posts/{id}"))?;
        let request = self.http.delete(url.clone()).bearer_auth(token);
        let response = send(request, url.as_str()).await?;
        check_status(response).await?;
        info!(post_id = id, "Deleted post");
        Ok(())
    }

    /// Upload a file to the media library.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn upload_media(
        &self,
        token: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaItem, FetchError> {
        let url = endpoint(&self.api_url, "/media")?;
        let mime = mime_guess::from_path(filename).first_or_octet_stream();
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime.essence_str())
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let request = self
            .http
            .post(url.clone())
            .bearer_auth(token)
            .header(
                reqwest::header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename.replace('"', "")),
            )
            .multipart(Form::new().part("file", part));

        let media: MediaItem = send_json(request, url.as_str()).await?;
        info!(media_id = media.id, filename = %filename, "Uploaded media");
        Ok(media)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn get_media(&self, token: &str, id: u64) -> Result<MediaItem, FetchError> {
        let url = endpoint(&self.api_url, &format!("/media/{id}"))?;
        let request = self.http.get(url.clone()).bearer_auth(token);
        send_json(request, url.as_str()).await
    }
}

async fn send(request: RequestBuilder, url: &str) -> Result<Response, FetchError> {
    request.send().await.map_err(|source| FetchError::Network {
        url: url.to_string(),
        source,
    })
}

/// Turn a non-2xx response into [`FetchError::Rejected`], keeping the
/// CMS's own message when it sent one.
async fn check_status(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    warn!(status = %status, "CMS rejected authoring request: {message}");
    Err(FetchError::Rejected { status, message })
}

pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
) -> Result<T, FetchError> {
    let response = check_status(send(request, url).await?).await?;
    let body = response.bytes().await.map_err(|source| FetchError::Network {
        url: url.to_string(),
        source,
    })?;
    serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
