use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use super::auth;
use super::dashboard;
use super::pages;
use super::AppState;
use crate::auth::{MaybeSession, Session};
use crate::content::{fallback_post, Section, TECH_ENERGY_STORY};

/// Largest `limit` the JSON section endpoint accepts.
const MAX_API_LIMIT: u32 = 100;

/// Posts shown on a full section page.
const SECTION_PAGE_LIMIT: u32 = 12;

/// Related stories under an article.
const RELATED_LIMIT: u32 = 4;

/// Main column of the front page, top to bottom.
const HOME_SECTIONS: [Section; 10] = [
    Section::LatestHeadlines,
    Section::EditorsPicks,
    Section::DailyMaple,
    Section::Canada,
    Section::MapleTravel,
    Section::ThroughTheLens,
    Section::MapleVoices,
    Section::Lifestyle,
    Section::BookNook,
    Section::YouMayHaveMissed,
];

/// Fixed slug of the featured tech and energy story.
const TECH_ENERGY_PATH: &str = "/article/tech-energy-giants-pennsylvania-ai";

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/section/:slug", get(section_page))
        .route(TECH_ENERGY_PATH, get(tech_energy_article))
        .route("/article/:id", get(article_page))
        .route("/api/sections/:slug", get(api_section))
        .route("/healthz", get(health))
        .route("/unauthorized", get(auth::unauthorized))
        // Authentication
        .route("/auth/signin", get(auth::signin_page).post(auth::signin))
        .route("/auth/signout", post(auth::signout))
        // Author dashboard
        .route("/dashboard", get(dashboard::index))
        .route(
            "/dashboard/posts/new",
            get(dashboard::new_post_form).post(dashboard::create_post),
        )
        .route(
            "/dashboard/posts/:id/edit",
            get(dashboard::edit_post_form).post(dashboard::update_post),
        )
        .route("/dashboard/posts/:id/delete", post(dashboard::delete_post))
        .route("/dashboard/media", post(dashboard::upload_media))
        .fallback(not_found)
}

// ========== HTML Routes ==========

async fn home(State(state): State<AppState>, MaybeSession(session): MaybeSession) -> Response {
    let (hero, sections, world) = tokio::join!(
        state.content.hero(),
        state.content.sections(&HOME_SECTIONS),
        state.content.sections(&Section::WORLD),
    );

    let html = pages::render_home_page(&pages::HomePageParams {
        hero: hero.as_ref(),
        sections: &sections,
        world: &world,
        session: session.as_ref(),
    });
    Html(html.into_string()).into_response()
}

async fn section_page(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Path(slug): Path<String>,
) -> Response {
    let Some(section) = Section::from_slug(&slug) else {
        return not_found_response(session.as_ref(), &format!("No section named '{slug}'"));
    };

    let posts = state
        .content
        .section_or_fallback(section, SECTION_PAGE_LIMIT)
        .await;

    let html = pages::render_section_page(&pages::SectionPageParams {
        section,
        posts: &posts,
        session: session.as_ref(),
    });
    Html(html.into_string()).into_response()
}

/// Numeric ids always render (placeholder as a last resort); anything else
/// is looked up as a slug.
async fn article_page(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Path(id): Path<String>,
) -> Response {
    let post = match id.parse::<u64>() {
        Ok(id) => state.content.article(id).await,
        Err(_) => match state.content.article_by_slug(&id).await {
            Some(post) => post,
            None => {
                return not_found_response(
                    session.as_ref(),
                    &format!("No article with slug '{id}'"),
                );
            }
        },
    };

    let related = if post.category_slug.is_empty() {
        Vec::new()
    } else {
        state
            .content
            .category_posts(&post.category_slug, RELATED_LIMIT + 1)
            .await
            .into_vec()
            .into_iter()
            .filter(|p| p.id != post.id)
            .take(RELATED_LIMIT as usize)
            .collect()
    };

    let html = pages::render_article_page(&pages::ArticlePageParams {
        post: &post,
        related: &related,
        session: session.as_ref(),
    });
    Html(html.into_string()).into_response()
}

async fn tech_energy_article(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Response {
    let post = match state.content.featured_story(&TECH_ENERGY_STORY).await {
        Some(post) => post,
        None => match fallback_post(TECH_ENERGY_STORY.fallback_id) {
            Some(post) => post.clone(),
            None => return not_found_response(session.as_ref(), "Story not available"),
        },
    };

    let html = pages::render_article_page(&pages::ArticlePageParams {
        post: &post,
        related: &[],
        session: session.as_ref(),
    });
    Html(html.into_string()).into_response()
}

async fn not_found(MaybeSession(session): MaybeSession) -> Response {
    not_found_response(
        session.as_ref(),
        "The page you were looking for does not exist.",
    )
}

async fn health() -> &'static str {
    "OK"
}

fn not_found_response(session: Option<&Session>, message: &str) -> Response {
    let html = pages::render_not_found_page(session, message);
    (StatusCode::NOT_FOUND, Html(html.into_string())).into_response()
}

// ========== JSON API ==========

#[derive(Debug, Deserialize)]
pub struct ApiSectionParams {
    limit: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ApiError {
    error: String,
}

/// Display posts for one section, with fallback content when the CMS has
/// nothing to offer.
async fn api_section(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ApiSectionParams>,
) -> Response {
    let Some(section) = Section::from_slug(&slug) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiError {
                error: format!("unknown section '{slug}'"),
            }),
        )
            .into_response();
    };

    let limit = params
        .limit
        .unwrap_or_else(|| section.default_limit())
        .clamp(1, MAX_API_LIMIT);

    Json(state.content.section_or_fallback(section, limit).await).into_response()
}
