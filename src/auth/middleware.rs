use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};

use super::session::{Session, SessionStore};
use crate::config::Config;
use crate::constants::SESSION_COOKIE;

/// Session token from the request's `Cookie` header, if any.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|cookie| {
                let (name, value) = cookie.trim().split_once('=')?;
                (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
            })
        })
}

/// Current session (if any).
/// Use this extractor when signing in is optional.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Session>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeSession
where
    S: Send + Sync,
    SessionStore: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let store = SessionStore::from_ref(state);
        let session = session_token(&parts.headers).and_then(|token| store.get(token));
        Ok(MaybeSession(session))
    }
}

/// Current session (required).
/// Redirects to the sign-in page, carrying the requested path, if not
/// signed in.
#[derive(Debug, Clone)]
pub struct RequireSession(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
    SessionStore: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let MaybeSession(session) = MaybeSession::from_request_parts(parts, state).await?;

        match session {
            Some(s) => Ok(RequireSession(s)),
            None => {
                let next = urlencoding::encode(parts.uri.path());
                Err(Redirect::to(&format!("/auth/signin?next={next}")).into_response())
            }
        }
    }
}

/// Signed-in user holding the dashboard role.
/// Redirects to `/unauthorized` when the role is missing.
#[derive(Debug, Clone)]
pub struct RequireAuthor(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuthor
where
    S: Send + Sync,
    SessionStore: FromRef<S>,
    Arc<Config>: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequireSession(session) = RequireSession::from_request_parts(parts, state).await?;
        let config = Arc::<Config>::from_ref(state);

        if !session.user.has_role(&config.dashboard_role) {
            tracing::debug!(user_id = session.user.id, roles = ?session.user.roles, "Dashboard access denied");
            return Err(Redirect::to("/unauthorized").into_response());
        }

        Ok(RequireAuthor(session))
    }
}
