//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, navigation, and footer.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::metadata::{OpenGraphMetadata, SITE_NAME};
use crate::auth::SessionUser;
use crate::content::Section;

/// Critical theme initialization script that runs in <head> to prevent flash of wrong theme.
/// Must be inline (not external) to execute before body renders.
const THEME_INIT_SCRIPT: &str = r#"(function() {
    var theme = localStorage.getItem('theme');
    if (theme) {
        document.documentElement.setAttribute('data-theme', theme);
    } else if (window.matchMedia('(prefers-color-scheme: dark)').matches) {
        document.documentElement.setAttribute('data-theme', 'dark');
    }
})();"#;

/// Sections linked from the main navigation.
const NAV_SECTIONS: [Section; 6] = [
    Section::DailyMaple,
    Section::MapleTravel,
    Section::MapleVoices,
    Section::ExploreCanada,
    Section::BookNook,
    Section::Lifestyle,
];

/// Base page layout builder.
///
/// The user is passed explicitly so the navigation always reflects the
/// sign-in state: `None` for anonymous visitors.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page", session.as_ref().map(|s| &s.user))
///     .render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    user: Option<&'a SessionUser>,
    og_metadata: Option<OpenGraphMetadata>,
    csrf_token: Option<&'a str>,
}

impl<'a> BaseLayout<'a> {
    #[must_use]
    pub fn new(title: &'a str, user: Option<&'a SessionUser>) -> Self {
        Self {
            title,
            user,
            og_metadata: None,
            csrf_token: None,
        }
    }

    /// Set the Open Graph metadata for social media previews.
    #[must_use]
    pub fn with_og_metadata(mut self, metadata: OpenGraphMetadata) -> Self {
        self.og_metadata = Some(metadata);
        self
    }

    /// CSRF token for the sign-out form in the navigation.
    #[must_use]
    pub fn with_csrf_token(mut self, token: &'a str) -> Self {
        self.csrf_token = Some(token);
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" data-theme="light" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="light dark";
                    title { (self.title) " - " (SITE_NAME) }

                    @if let Some(ref og) = self.og_metadata {
                        (og.render())
                    }

                    link rel="stylesheet" href="/static/css/style.css";
                    script { (PreEscaped(THEME_INIT_SCRIPT)) }
                }
                body {
                    (self.render_header())
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                    script src="/static/js/theme.js" {}
                }
            }
        }
    }

    fn render_header(&self) -> Markup {
        html! {
            header class="container" {
                nav {
                    ul {
                        li {
                            a href="/" {
                                strong class="site-logo" { (SITE_NAME) }
                            }
                        }
                    }
                    ul {
                        li { a href="/" { "Home" } }
                        @for section in NAV_SECTIONS {
                            li { a href=(format!("/section/{}", section.slug())) { (section.title()) } }
                        }
                        (self.render_auth_nav())
                        li {
                            button
                                id="theme-toggle"
                                class="theme-toggle"
                                title="Toggle dark mode"
                                aria-label="Toggle dark mode" { "🌓" }
                        }
                    }
                }
            }
        }
    }

    fn render_auth_nav(&self) -> Markup {
        match self.user {
            Some(user) => html! {
                li { a href="/dashboard" { "Dashboard" } }
                li {
                    form action="/auth/signout" method="post" class="inline-form" {
                        @if let Some(token) = self.csrf_token {
                            input type="hidden" name="csrf_token" value=(token);
                        }
                        button type="submit" class="link-button" title=(format!("Signed in as {}", user.name)) {
                            "Sign out"
                        }
                    }
                }
            },
            None => html! {
                li { a href="/auth/signin" { "Sign in" } }
            },
        }
    }

    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small {
                    (SITE_NAME) " | "
                    a href="/section/latest-headlines" { "Latest" }
                    " | "
                    a href="/section/editors-picks" { "Editor's Picks" }
                    " | "
                    a href="/section/resources" { "Resources" }
                    " | "
                    a href="/section/events" { "Events" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> SessionUser {
        SessionUser {
            id: 1,
            name: "Test Author".to_string(),
            slug: "tester".to_string(),
            roles: vec!["author".to_string()],
        }
    }

    #[test]
    fn test_base_layout_basic_structure() {
        let content = html! { h1 { "Test Content" } };
        let html = BaseLayout::new("Test Page", None).render(content).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en" data-theme="light">"#));
        assert!(html.contains("<title>Test Page - Maple Epoch</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/static/css/style.css">"#));
        assert!(html.contains("<h1>Test Content</h1>"));
        assert!(html.contains(r#"<main class="container">"#));
        assert!(html.contains("localStorage.getItem('theme')"));
    }

    #[test]
    fn test_base_layout_navigation() {
        let html = BaseLayout::new("Nav Test", None)
            .render(html! {})
            .into_string();

        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains(r#"<a href="/section/daily-maple">The Daily Maple</a>"#));
        assert!(html.contains(r#"<a href="/section/booknook">BookNook</a>"#));
    }

    #[test]
    fn test_base_layout_anonymous_user() {
        let html = BaseLayout::new("Anonymous", None)
            .render(html! {})
            .into_string();

        assert!(html.contains(r#"<a href="/auth/signin">Sign in</a>"#));
        assert!(!html.contains(r#"href="/dashboard""#));
        assert!(!html.contains("/auth/signout"));
    }

    #[test]
    fn test_base_layout_signed_in_user() {
        let user = test_user();
        let html = BaseLayout::new("Signed in", Some(&user))
            .with_csrf_token("tok")
            .render(html! {})
            .into_string();

        assert!(html.contains(r#"<a href="/dashboard">Dashboard</a>"#));
        assert!(html.contains(r#"action="/auth/signout""#));
        assert!(html.contains(r#"name="csrf_token" value="tok""#));
        assert!(html.contains("Signed in as Test Author"));
        assert!(!html.contains(r#"href="/auth/signin""#));
    }

    #[test]
    fn test_base_layout_with_og_metadata() {
        let html = BaseLayout::new("OG", None)
            .with_og_metadata(OpenGraphMetadata::new("OG Title", "Desc", "/x"))
            .render(html! {})
            .into_string();
        assert!(html.contains(r#"property="og:title" content="OG Title""#));
    }
}
