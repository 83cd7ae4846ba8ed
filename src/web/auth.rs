use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::auth::{
    clear_session_cookie, session_cookie, session_token, verify_csrf_token, MaybeSession,
};
use crate::web::{pages, AppState};

/// Where a successful sign-in lands when no `next` was given.
const DEFAULT_LANDING: &str = "/dashboard";

#[derive(Debug, Deserialize)]
pub struct SigninQuery {
    next: Option<String>,
}

/// Sign-in form data.
#[derive(Debug, Deserialize)]
pub struct SigninForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignoutForm {
    #[serde(default)]
    csrf_token: String,
}

/// Only same-site absolute paths are followed after sign-in.
fn safe_next(next: Option<&str>) -> Option<&str> {
    next.filter(|n| n.starts_with('/') && !n.starts_with("//") && !n.contains('\\'))
}

/// GET /auth/signin - Show the sign-in form.
pub async fn signin_page(
    MaybeSession(session): MaybeSession,
    Query(query): Query<SigninQuery>,
) -> Response {
    let next = safe_next(query.next.as_deref());

    if session.is_some() {
        return Redirect::to(next.unwrap_or(DEFAULT_LANDING)).into_response();
    }

    Html(pages::render_signin_page(None, next).into_string()).into_response()
}

/// POST /auth/signin - Exchange credentials for a session.
pub async fn signin(State(state): State<AppState>, Form(form): Form<SigninForm>) -> Response {
    let next = safe_next(form.next.as_deref());
    let username = form.username.trim();

    if username.is_empty() || form.password.is_empty() {
        let html = pages::render_signin_page(Some("Enter your username and password."), next);
        return (StatusCode::BAD_REQUEST, Html(html.into_string())).into_response();
    }

    let login = match state.authenticator.login(username, &form.password).await {
        Ok(login) => login,
        Err(e) if e.is_unauthorized() => {
            let html = pages::render_signin_page(Some("Invalid username or password."), next);
            return (StatusCode::UNAUTHORIZED, Html(html.into_string())).into_response();
        }
        Err(e) => {
            tracing::error!("Sign-in failed: {e}");
            let html = pages::render_signin_page(
                Some("Sign-in is unavailable right now. Please try again later."),
                next,
            );
            return (StatusCode::BAD_GATEWAY, Html(html.into_string())).into_response();
        }
    };

    let token = state.sessions.create(login.user, login.token);
    let cookie = session_cookie(&token, state.sessions.ttl(), state.config.secure_cookies);

    (
        [(header::SET_COOKIE, cookie)],
        Redirect::to(next.unwrap_or(DEFAULT_LANDING)),
    )
        .into_response()
}

/// POST /auth/signout - End the session.
pub async fn signout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SignoutForm>,
) -> Response {
    if let Some(token) = session_token(&headers) {
        let Some(session) = state.sessions.get(token) else {
            // Already gone; just clear the cookie.
            return signed_out(state.config.secure_cookies);
        };
        if !verify_csrf_token(&session.csrf_token, &form.csrf_token) {
            tracing::warn!(user_id = session.user.id, "Sign-out with invalid CSRF token");
            return (StatusCode::FORBIDDEN, "Invalid CSRF token").into_response();
        }
        state.sessions.remove(token);
        tracing::info!(user_id = session.user.id, "User signed out");
    }

    signed_out(state.config.secure_cookies)
}

fn signed_out(secure: bool) -> Response {
    (
        [(header::SET_COOKIE, clear_session_cookie(secure))],
        Redirect::to("/"),
    )
        .into_response()
}

/// GET /unauthorized - Signed in without the dashboard role.
pub async fn unauthorized(MaybeSession(session): MaybeSession) -> Response {
    let html = pages::render_unauthorized_page(session.as_ref());
    (StatusCode::FORBIDDEN, Html(html.into_string())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_next() {
        assert_eq!(safe_next(Some("/dashboard/posts/new")), Some("/dashboard/posts/new"));
        assert_eq!(safe_next(Some("//evil.example.com")), None);
        assert_eq!(safe_next(Some("https://evil.example.com")), None);
        assert_eq!(safe_next(Some("/\\evil.example.com")), None);
        assert_eq!(safe_next(None), None);
    }
}
