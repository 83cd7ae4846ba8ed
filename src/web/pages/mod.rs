//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod article;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod section;

pub use article::{render_article_page, ArticlePageParams};
pub use auth::{render_not_found_page, render_signin_page, render_unauthorized_page};
pub use dashboard::{
    render_dashboard_page, render_post_editor_page, DashboardPageParams, EditorMode,
    PostEditorParams,
};
pub use home::{render_home_page, HomePageParams};
pub use section::{render_section_page, SectionPageParams};

use crate::auth::Session;
use crate::components::BaseLayout;

/// Layout aware of the viewer's session.
fn layout<'a>(title: &'a str, session: Option<&'a Session>) -> BaseLayout<'a> {
    let layout = BaseLayout::new(title, session.map(|s| &s.user));
    match session {
        Some(s) => layout.with_csrf_token(&s.csrf_token),
        None => layout,
    }
}
