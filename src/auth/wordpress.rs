//! Login against the CMS's JWT authentication endpoint.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use super::session::SessionUser;
use crate::config::Config;
use crate::constants::CMS_USER_AGENT;
use crate::wordpress::authoring::send_json;
use crate::wordpress::client::endpoint;
use crate::wordpress::models::JwtToken;
use crate::wordpress::{FetchError, WpUser};

const TOKEN_PATH: &str = "/wp-json/jwt-auth/v1/token";

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// A successful login: the account and its bearer token.
#[derive(Debug, Clone)]
pub struct Login {
    pub user: SessionUser,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct WordPressAuthenticator {
    http: Client,
    site_url: String,
    api_url: String,
}

impl WordPressAuthenticator {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(CMS_USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            site_url: config.wordpress_site_url.clone(),
            api_url: config.wordpress_api_url.clone(),
        })
    }

    /// Exchange credentials for a token, then load the account behind it.
    ///
    /// # Errors
    ///
    /// Returns an error if either step fails or is rejected.
    pub async fn login(&self, username: &str, password: &str) -> Result<Login, FetchError> {
        let url = endpoint(&self.site_url, TOKEN_PATH)?;
        let request = self
            .http
            .post(url.clone())
            .json(&Credentials { username, password });
        let jwt: JwtToken = send_json(request, url.as_str())
            .await
            .inspect_err(|e| warn!(username = %username, "Login rejected: {e}"))?;

        let user = self.current_user(&jwt.token).await?;
        info!(user_id = user.id, roles = ?user.roles, "User signed in");

        Ok(Login {
            user,
            token: jwt.token,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the token is not accepted.
    pub async fn current_user(&self, token: &str) -> Result<SessionUser, FetchError> {
        let mut url = endpoint(&self.api_url, "/users/me")?;
        url.query_pairs_mut().append_pair("context", "edit");
        let request = self.http.get(url.clone()).bearer_auth(token);
        let user: WpUser = send_json(request, url.as_str())
            .await
            .inspect_err(|e| warn!("Failed to load signed-in user: {e}"))?;
        Ok(SessionUser::from(user))
    }
}
