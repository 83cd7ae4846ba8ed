use maud::{html, Markup};

use super::layout;
use crate::auth::Session;
use crate::components::{ArticleGrid, EmptyState};
use crate::content::{DisplayPost, Section};

#[derive(Debug, Clone)]
pub struct SectionPageParams<'a> {
    pub section: Section,
    pub posts: &'a [DisplayPost],
    pub session: Option<&'a Session>,
}

#[must_use]
pub fn render_section_page(params: &SectionPageParams<'_>) -> Markup {
    let title = params.section.title();
    let content = html! {
        h1 { (title) }
        @if params.posts.is_empty() {
            (EmptyState::no_articles())
        } @else {
            (ArticleGrid::new(params.posts))
        }
    };

    layout(title, params.session).render(content)
}
