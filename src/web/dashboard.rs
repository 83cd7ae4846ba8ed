//! Author dashboard handlers.
//!
//! Every handler requires the dashboard role, and every write checks the
//! session's CSRF token before talking to the CMS.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::auth::{verify_csrf_token, RequireAuthor, Session};
use crate::wordpress::{Category, FetchError, MediaItem, PostDraft, PostStatus, PostUpdate};
use crate::web::pages::{self, DashboardPageParams, EditorMode, PostEditorParams};
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    notice: Option<String>,
}

/// Create/edit form data.
///
/// Optional numeric fields arrive as possibly empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    featured_media: String,
    #[serde(default)]
    csrf_token: String,
}

impl PostForm {
    fn status(&self) -> PostStatus {
        PostStatus::parse(&self.status).unwrap_or_default()
    }

    fn category(&self) -> Option<u64> {
        self.category.trim().parse().ok()
    }

    fn featured_media(&self) -> Option<u64> {
        self.featured_media.trim().parse().ok()
    }

    fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            categories: self.category().into_iter().collect(),
            status: self.status(),
            featured_media: self.featured_media(),
        }
    }

    fn to_update(&self) -> PostUpdate {
        PostUpdate {
            title: Some(self.title.trim().to_string()),
            content: Some(self.content.clone()),
            categories: Some(self.category().into_iter().collect()),
            status: Some(self.status()),
            featured_media: self.featured_media(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CsrfForm {
    #[serde(default)]
    csrf_token: String,
}

fn notice_message(key: &str) -> Option<&'static str> {
    match key {
        "created" => Some("Post created."),
        "updated" => Some("Post updated."),
        "deleted" => Some("Post moved to the trash."),
        _ => None,
    }
}

fn csrf_rejected(session: &Session) -> Response {
    tracing::warn!(user_id = session.user.id, "Dashboard request with invalid CSRF token");
    (StatusCode::FORBIDDEN, "Invalid CSRF token").into_response()
}

/// Status code for a failed CMS call: the CMS's own answer when it gave
/// one, otherwise a gateway error.
fn error_status(e: &FetchError) -> StatusCode {
    match e {
        FetchError::Rejected { status, .. } | FetchError::Status { status, .. } => *status,
        FetchError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// User-facing text for a failed CMS call.
fn error_message(e: &FetchError) -> String {
    match e {
        FetchError::Rejected { message, .. } => message.clone(),
        FetchError::Timeout { .. } => "The CMS did not respond in time.".to_string(),
        _ => "The CMS request failed.".to_string(),
    }
}

async fn load_categories(state: &AppState) -> Vec<Category> {
    state
        .content
        .client()
        .get_categories()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load categories for editor: {e}");
            Vec::new()
        })
}

/// Render the dashboard index with the author's posts.
async fn render_index(
    state: &AppState,
    session: &Session,
    notice: Option<&str>,
    error: Option<&str>,
    uploaded: Option<&MediaItem>,
) -> Response {
    match state
        .authoring
        .list_posts(&session.cms_token, Some(session.user.id))
        .await
    {
        Ok(posts) => {
            let html = pages::render_dashboard_page(&DashboardPageParams {
                session,
                posts: &posts,
                notice,
                error,
                uploaded,
            });
            let status = if error.is_some() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::OK
            };
            (status, Html(html.into_string())).into_response()
        }
        Err(e) => {
            tracing::error!(user_id = session.user.id, "Failed to list posts: {e}");
            let message = error_message(&e);
            let html = pages::render_dashboard_page(&DashboardPageParams {
                session,
                posts: &[],
                notice,
                error: Some(error.unwrap_or(&message)),
                uploaded,
            });
            (error_status(&e), Html(html.into_string())).into_response()
        }
    }
}

/// GET /dashboard - The author's posts and the media upload form.
pub async fn index(
    State(state): State<AppState>,
    RequireAuthor(session): RequireAuthor,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let notice = query.notice.as_deref().and_then(notice_message);
    render_index(&state, &session, notice, None, None).await
}

/// GET /dashboard/posts/new - Empty editor.
pub async fn new_post_form(
    State(state): State<AppState>,
    RequireAuthor(session): RequireAuthor,
) -> Response {
    let categories = load_categories(&state).await;
    let html = pages::render_post_editor_page(&PostEditorParams {
        session: &session,
        mode: EditorMode::New,
        title: "",
        content: "",
        status: PostStatus::Draft,
        category: None,
        featured_media: None,
        categories: &categories,
        error: None,
    });
    Html(html.into_string()).into_response()
}

/// Re-render the editor with what the author submitted.
async fn editor_with_error(
    state: &AppState,
    session: &Session,
    mode: EditorMode,
    form: &PostForm,
    status: StatusCode,
    error: &str,
) -> Response {
    let categories = load_categories(state).await;
    let html = pages::render_post_editor_page(&PostEditorParams {
        session,
        mode,
        title: &form.title,
        content: &form.content,
        status: form.status(),
        category: form.category(),
        featured_media: form.featured_media(),
        categories: &categories,
        error: Some(error),
    });
    (status, Html(html.into_string())).into_response()
}

/// POST /dashboard/posts/new - Create a post.
pub async fn create_post(
    State(state): State<AppState>,
    RequireAuthor(session): RequireAuthor,
    Form(form): Form<PostForm>,
) -> Response {
    if !verify_csrf_token(&session.csrf_token, &form.csrf_token) {
        return csrf_rejected(&session);
    }

    if form.title.trim().is_empty() {
        return editor_with_error(
            &state,
            &session,
            EditorMode::New,
            &form,
            StatusCode::BAD_REQUEST,
            "A title is required.",
        )
        .await;
    }

    match state
        .authoring
        .create_post(&session.cms_token, &form.to_draft())
        .await
    {
        Ok(_) => Redirect::to("/dashboard?notice=created").into_response(),
        Err(e) => {
            tracing::error!(user_id = session.user.id, "Failed to create post: {e}");
            editor_with_error(
                &state,
                &session,
                EditorMode::New,
                &form,
                error_status(&e),
                &error_message(&e),
            )
            .await
        }
    }
}

/// GET /dashboard/posts/:id/edit - Editor filled from the CMS.
pub async fn edit_post_form(
    State(state): State<AppState>,
    RequireAuthor(session): RequireAuthor,
    Path(id): Path<u64>,
) -> Response {
    let post = match state.authoring.get_post(&session.cms_token, id).await {
        Ok(post) => post,
        Err(e) if e.is_not_found() => {
            let html = pages::render_not_found_page(Some(&session), &format!("No post with id {id}"));
            return (StatusCode::NOT_FOUND, Html(html.into_string())).into_response();
        }
        Err(e) => {
            tracing::error!(post_id = id, "Failed to load post for editing: {e}");
            return render_index(&state, &session, None, Some(&error_message(&e)), None).await;
        }
    };

    let categories = load_categories(&state).await;
    let html = pages::render_post_editor_page(&PostEditorParams {
        session: &session,
        mode: EditorMode::Edit(id),
        title: post.title.editable(),
        content: post.content.editable(),
        status: PostStatus::parse(&post.status).unwrap_or_default(),
        category: post.categories.first().copied(),
        featured_media: (post.featured_media != 0).then_some(post.featured_media),
        categories: &categories,
        error: None,
    });
    Html(html.into_string()).into_response()
}

/// POST /dashboard/posts/:id/edit - Save changes.
pub async fn update_post(
    State(state): State<AppState>,
    RequireAuthor(session): RequireAuthor,
    Path(id): Path<u64>,
    Form(form): Form<PostForm>,
) -> Response {
    if !verify_csrf_token(&session.csrf_token, &form.csrf_token) {
        return csrf_rejected(&session);
    }

    let mode = EditorMode::Edit(id);
    if form.title.trim().is_empty() {
        return editor_with_error(
            &state,
            &session,
            mode,
            &form,
            StatusCode::BAD_REQUEST,
            "A title is required.",
        )
        .await;
    }

    match state
        .authoring
        .update_post(&session.cms_token, id, &form.to_update())
        .await
    {
        Ok(_) => Redirect::to("/dashboard?notice=updated").into_response(),
        Err(e) => {
            tracing::error!(post_id = id, "Failed to update post: {e}");
            editor_with_error(
                &state,
                &session,
                mode,
                &form,
                error_status(&e),
                &error_message(&e),
            )
            .await
        }
    }
}

/// POST /dashboard/posts/:id/delete - Trash a post.
pub async fn delete_post(
    State(state): State<AppState>,
    RequireAuthor(session): RequireAuthor,
    Path(id): Path<u64>,
    Form(form): Form<CsrfForm>,
) -> Response {
    if !verify_csrf_token(&session.csrf_token, &form.csrf_token) {
        return csrf_rejected(&session);
    }

    match state.authoring.delete_post(&session.cms_token, id).await {
        Ok(()) => Redirect::to("/dashboard?notice=deleted").into_response(),
        Err(e) => {
            tracing::error!(post_id = id, "Failed to delete post: {e}");
            render_index(&state, &session, None, Some(&error_message(&e)), None).await
        }
    }
}

/// A file pulled out of the upload form.
struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// POST /dashboard/media - Upload a file to the media library.
pub async fn upload_media(
    State(state): State<AppState>,
    RequireAuthor(session): RequireAuthor,
    mut multipart: Multipart,
) -> Response {
    let mut csrf_token = String::new();
    let mut upload = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Malformed upload: {e}");
                return (StatusCode::BAD_REQUEST, "Malformed upload").into_response();
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "csrf_token" => match field.text().await {
                Ok(text) => csrf_token = text,
                Err(e) => {
                    tracing::warn!("Malformed upload: {e}");
                    return (StatusCode::BAD_REQUEST, "Malformed upload").into_response();
                }
            },
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => {
                        upload = Some(Upload {
                            filename,
                            bytes: bytes.to_vec(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read uploaded file: {e}");
                        return (StatusCode::BAD_REQUEST, "Failed to read uploaded file")
                            .into_response();
                    }
                }
            }
            _ => {}
        }
    }

    if !verify_csrf_token(&session.csrf_token, &csrf_token) {
        return csrf_rejected(&session);
    }

    let Some(upload) = upload.filter(|u| !u.bytes.is_empty() && !u.filename.is_empty()) else {
        return render_index(&state, &session, None, Some("Choose a file to upload."), None).await;
    };

    match state
        .authoring
        .upload_media(&session.cms_token, &upload.filename, upload.bytes)
        .await
    {
        Ok(media) => render_index(&state, &session, None, None, Some(&media)).await,
        Err(e) => {
            tracing::error!(filename = %upload.filename, "Failed to upload media: {e}");
            render_index(&state, &session, None, Some(&error_message(&e)), None).await
        }
    }
}
