//! Card components for displaying articles and sections.

use maud::{html, Markup, Render};

use crate::components::badge::{CategoryBadge, FlagBadge};
use crate::content::{DisplayPost, HeroLayout, Section};

/// An article card for lists and grids.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::ArticleCard;
///
/// let card = ArticleCard::new(&post).compact();
/// ```
#[derive(Debug, Clone)]
pub struct ArticleCard<'a> {
    pub post: &'a DisplayPost,
    /// Title and meta only, no image or excerpt.
    pub compact: bool,
}

impl<'a> ArticleCard<'a> {
    #[must_use]
    pub const fn new(post: &'a DisplayPost) -> Self {
        Self {
            post,
            compact: false,
        }
    }

    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

impl Render for ArticleCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let url = post.url();

        html! {
            article class="article-card" data-featured=[post.featured.then_some("true")] {
                @if !self.compact {
                    a href=(url) class="article-image" {
                        img src=(post.image) alt=(post.title) loading="lazy";
                    }
                }
                div class="article-badges" {
                    (CategoryBadge::new(&post.category))
                    @if post.is_breaking {
                        (FlagBadge::breaking())
                    }
                    @if post.is_trending {
                        (FlagBadge::trending())
                    }
                }
                h3 {
                    a href=(url) { (post.title) }
                }
                @if !self.compact {
                    p class="excerpt" { (post.excerpt) }
                }
                (ArticleMeta::new(post))
            }
        }
    }
}

/// Byline: author, date, read time and views.
#[derive(Debug, Clone)]
pub struct ArticleMeta<'a> {
    pub post: &'a DisplayPost,
}

impl<'a> ArticleMeta<'a> {
    #[must_use]
    pub const fn new(post: &'a DisplayPost) -> Self {
        Self { post }
    }
}

impl Render for ArticleMeta<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        html! {
            p class="meta" {
                span class="author" { "By " (post.author) }
                " \u{b7} "
                time datetime=(post.publish_date) { (post.display_date()) }
                " \u{b7} "
                span class="read-time" { (post.read_time) }
                @if !post.views.is_empty() {
                    " \u{b7} "
                    span class="views" { (post.views) }
                }
            }
        }
    }
}

/// A grid of article cards.
#[derive(Debug, Clone)]
pub struct ArticleGrid<'a> {
    pub posts: &'a [DisplayPost],
    pub compact: bool,
}

impl<'a> ArticleGrid<'a> {
    #[must_use]
    pub const fn new(posts: &'a [DisplayPost]) -> Self {
        Self {
            posts,
            compact: false,
        }
    }

    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

impl Render for ArticleGrid<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="article-grid" {
                @for post in self.posts {
                    @if self.compact {
                        (ArticleCard::new(post).compact())
                    } @else {
                        (ArticleCard::new(post))
                    }
                }
            }
        }
    }
}

/// A titled home-page block linking to the full section.
#[derive(Debug, Clone)]
pub struct SectionBlock<'a> {
    pub section: Section,
    pub posts: &'a [DisplayPost],
}

impl<'a> SectionBlock<'a> {
    #[must_use]
    pub const fn new(section: Section, posts: &'a [DisplayPost]) -> Self {
        Self { section, posts }
    }
}

impl Render for SectionBlock<'_> {
    fn render(&self) -> Markup {
        html! {
            section class="section-block" id=(self.section.slug()) {
                header {
                    h2 { (self.section.title()) }
                    a href=(format!("/section/{}", self.section.slug())) class="see-all" { "See all" }
                }
                @if self.posts.is_empty() {
                    (EmptyState::no_articles())
                } @else {
                    (ArticleGrid::new(self.posts))
                }
            }
        }
    }
}

/// Front-page hero: one lead story, a side column and a bottom row.
#[derive(Debug, Clone)]
pub struct HeroSection<'a> {
    pub layout: &'a HeroLayout,
}

impl<'a> HeroSection<'a> {
    #[must_use]
    pub const fn new(layout: &'a HeroLayout) -> Self {
        Self { layout }
    }
}

impl Render for HeroSection<'_> {
    fn render(&self) -> Markup {
        let main = &self.layout.main;
        html! {
            section class="hero" {
                article class="hero-main" {
                    a href=(main.url()) class="article-image" {
                        img src=(main.image) alt=(main.title);
                    }
                    div class="article-badges" {
                        (CategoryBadge::new(&main.category))
                        @if main.is_breaking {
                            (FlagBadge::breaking())
                        }
                    }
                    h1 { a href=(main.url()) { (main.title) } }
                    p class="excerpt" { (main.excerpt) }
                    (ArticleMeta::new(main))
                }
                @if !self.layout.side.is_empty() {
                    aside class="hero-side" {
                        @for post in &self.layout.side {
                            (ArticleCard::new(post).compact())
                        }
                    }
                }
                @if !self.layout.bottom.is_empty() {
                    div class="hero-bottom" {
                        (ArticleGrid::new(&self.layout.bottom).compact())
                    }
                }
            }
        }
    }
}

/// Placeholder for a list with nothing in it.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }

    #[must_use]
    pub const fn no_articles() -> Self {
        Self {
            message: "No articles yet.",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="empty-state" { (self.message) }
        }
    }
}
