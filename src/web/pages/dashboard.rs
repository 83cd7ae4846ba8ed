//! Author dashboard pages.

use maud::{html, Markup};

use super::layout;
use crate::auth::Session;
use crate::components::{
    Alert, EmptyState, Form, FormGroup, HiddenInput, Input, Select, SelectOption, StatusBadge,
    TextArea,
};
use crate::content::normalize::plain_text;
use crate::content::models::format_publish_date;
use crate::wordpress::{Category, MediaItem, PostStatus, RawPost};

/// Parameters for the dashboard index.
#[derive(Debug, Clone)]
pub struct DashboardPageParams<'a> {
    pub session: &'a Session,
    pub posts: &'a [RawPost],
    pub notice: Option<&'a str>,
    pub error: Option<&'a str>,
    pub uploaded: Option<&'a MediaItem>,
}

#[must_use]
pub fn render_dashboard_page(params: &DashboardPageParams<'_>) -> Markup {
    let session = params.session;
    let csrf = session.csrf_token.as_str();

    let upload_fields = html! {
        (HiddenInput::csrf(csrf))
        (FormGroup::new(
            "Image",
            "file",
            html! { (Input::file("file").id("file").required().accept("image/*")) },
        ))
        button type="submit" { "Upload" }
    };

    let content = html! {
        h1 { "Dashboard" }
        p { "Signed in as " strong { (session.user.name) } }

        @if let Some(notice) = params.notice {
            (Alert::success(notice))
        }
        @if let Some(error) = params.error {
            (Alert::error(error))
        }

        section {
            header {
                h2 { "Your posts" }
                a href="/dashboard/posts/new" role="button" { "New post" }
            }
            @if params.posts.is_empty() {
                (EmptyState::new("You have not written any posts yet."))
            } @else {
                table class="post-table" {
                    thead {
                        tr {
                            th { "Title" }
                            th { "Status" }
                            th { "Date" }
                            th { "" }
                        }
                    }
                    tbody {
                        @for post in params.posts {
                            (post_row(post, csrf))
                        }
                    }
                }
            }
        }

        section {
            h2 { "Media" }
            @if let Some(media) = params.uploaded {
                (Alert::success(&format!("Uploaded media #{}", media.id)))
                p { code { (media.source_url) } }
            }
            (Form::post("/dashboard/media", upload_fields).multipart())
        }
    };

    layout("Dashboard", Some(session)).render(content)
}

fn post_row(post: &RawPost, csrf: &str) -> Markup {
    let title = plain_text(&post.title.rendered);
    let title = if title.is_empty() {
        "(untitled)".to_string()
    } else {
        title
    };
    let date = format_publish_date(&post.date);

    html! {
        tr {
            td {
                a href=(format!("/dashboard/posts/{}/edit", post.id)) { (title) }
            }
            td { (StatusBadge::from_status(&post.status)) }
            td { (date) }
            td {
                form action=(format!("/dashboard/posts/{}/delete", post.id)) method="post" class="inline-form" {
                    (HiddenInput::csrf(csrf))
                    button type="submit" class="secondary" { "Delete" }
                }
            }
        }
    }
}

/// Whether the editor creates a post or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    New,
    Edit(u64),
}

impl EditorMode {
    #[must_use]
    pub fn action(self) -> String {
        match self {
            Self::New => "/dashboard/posts/new".to_string(),
            Self::Edit(id) => format!("/dashboard/posts/{id}/edit"),
        }
    }

    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::New => "New post",
            Self::Edit(_) => "Edit post",
        }
    }
}

/// Parameters for the create/edit form.
#[derive(Debug, Clone)]
pub struct PostEditorParams<'a> {
    pub session: &'a Session,
    pub mode: EditorMode,
    pub title: &'a str,
    pub content: &'a str,
    pub status: PostStatus,
    pub category: Option<u64>,
    pub featured_media: Option<u64>,
    pub categories: &'a [Category],
    pub error: Option<&'a str>,
}

#[must_use]
pub fn render_post_editor_page(params: &PostEditorParams<'_>) -> Markup {
    let heading = params.mode.heading();
    let action = params.mode.action();

    let category_options: Vec<SelectOption> = params
        .categories
        .iter()
        .map(|c| SelectOption::new(c.id.to_string(), c.name.clone()))
        .collect();
    let selected_category = params.category.map(|id| id.to_string());
    let featured_media = params.featured_media.map(|id| id.to_string());

    let mut category_select = Select::new("category")
        .id("category")
        .option("", "Uncategorized")
        .options(category_options);
    if let Some(selected) = selected_category.as_deref() {
        category_select = category_select.selected(selected);
    }

    let mut status_select = Select::new("status").id("status").selected(params.status.as_str());
    for status in PostStatus::ALL {
        status_select = status_select.option(status.as_str(), status_label(status));
    }

    let mut media_input = Input::text("featured_media").id("featured_media");
    if let Some(media) = featured_media.as_deref() {
        media_input = media_input.value(media);
    }

    let fields = html! {
        (HiddenInput::csrf(&params.session.csrf_token))
        (FormGroup::new(
            "Title",
            "title",
            html! { (Input::text("title").id("title").required().value(params.title)) },
        ))
        (FormGroup::new(
            "Content",
            "content",
            html! { (TextArea::new("content").id("content").rows(16).value(params.content)) },
        ).help("HTML is allowed."))
        (FormGroup::new("Category", "category", html! { (category_select) }))
        (FormGroup::new("Status", "status", html! { (status_select) }))
        (FormGroup::new("Featured image", "featured_media", html! { (media_input) })
            .help("Media id from an upload on the dashboard."))
        button type="submit" { "Save" }
    };

    let content = html! {
        h1 { (heading) }
        @if let Some(error) = params.error {
            (Alert::error(error))
        }
        (Form::post(&action, fields))
        p { a href="/dashboard" { "Back to dashboard" } }
    };

    layout(heading, Some(params.session)).render(content)
}

const fn status_label(status: PostStatus) -> &'static str {
    match status {
        PostStatus::Draft => "Draft",
        PostStatus::Pending => "Pending review",
        PostStatus::Publish => "Published",
        PostStatus::Future => "Scheduled",
        PostStatus::Private => "Private",
    }
}
