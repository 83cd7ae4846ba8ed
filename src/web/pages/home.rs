//! Front page.

use maud::{html, Markup};

use super::layout;
use crate::auth::Session;
use crate::components::{ArticleCard, HeroSection, OpenGraphMetadata, SectionBlock};
use crate::content::{DisplayPost, HeroLayout, Section};

/// Parameters for the home page.
#[derive(Debug, Clone)]
pub struct HomePageParams<'a> {
    pub hero: Option<&'a HeroLayout>,
    /// Main column sections, in display order.
    pub sections: &'a [(Section, Vec<DisplayPost>)],
    /// Single-story world region slots.
    pub world: &'a [(Section, Vec<DisplayPost>)],
    pub session: Option<&'a Session>,
}

#[must_use]
pub fn render_home_page(params: &HomePageParams<'_>) -> Markup {
    let content = html! {
        @if let Some(hero) = params.hero {
            (HeroSection::new(hero))
        }

        @for (section, posts) in params.sections {
            (SectionBlock::new(*section, posts))
        }

        @if !params.world.is_empty() {
            section class="world" {
                h2 { "Around the World" }
                div class="world-grid" {
                    @for (region, posts) in params.world {
                        div class="world-region" {
                            h3 {
                                a href=(format!("/section/{}", region.slug())) { (region.title()) }
                            }
                            @for post in posts {
                                (ArticleCard::new(post).compact())
                            }
                        }
                    }
                }
            }
        }
    };

    layout("Home", params.session)
        .with_og_metadata(OpenGraphMetadata::default())
        .render(content)
}
