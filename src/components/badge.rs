//! Badge components for categories, story flags and post status.

use maud::{html, Markup, Render};

use crate::wordpress::PostStatus;

/// A category label.
#[derive(Debug, Clone)]
pub struct CategoryBadge<'a> {
    pub category: &'a str,
}

impl<'a> CategoryBadge<'a> {
    #[must_use]
    pub const fn new(category: &'a str) -> Self {
        Self { category }
    }

    /// CSS modifier derived from the category name, e.g. `category-politics`.
    #[must_use]
    pub fn css_class(&self) -> String {
        let slug: String = self
            .category
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        format!("category-badge category-{slug}")
    }
}

impl Render for CategoryBadge<'_> {
    fn render(&self) -> Markup {
        html! {
            span class=(self.css_class()) { (self.category) }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagVariant {
    Breaking,
    Trending,
    Featured,
}

impl FlagVariant {
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Breaking => "flag-badge flag-breaking",
            Self::Trending => "flag-badge flag-trending",
            Self::Featured => "flag-badge flag-featured",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breaking => "Breaking",
            Self::Trending => "Trending",
            Self::Featured => "Featured",
        }
    }
}

/// Breaking / trending / featured marker.
#[derive(Debug, Clone, Copy)]
pub struct FlagBadge {
    pub variant: FlagVariant,
}

impl FlagBadge {
    #[must_use]
    pub const fn breaking() -> Self {
        Self {
            variant: FlagVariant::Breaking,
        }
    }

    #[must_use]
    pub const fn trending() -> Self {
        Self {
            variant: FlagVariant::Trending,
        }
    }

    #[must_use]
    pub const fn featured() -> Self {
        Self {
            variant: FlagVariant::Featured,
        }
    }
}

impl Render for FlagBadge {
    fn render(&self) -> Markup {
        html! {
            span class=(self.variant.css_class()) { (self.variant.label()) }
        }
    }
}

/// Publication status of a post on the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct StatusBadge {
    pub status: Option<PostStatus>,
}

impl StatusBadge {
    /// Badge for a status string as the CMS reports it; unknown values
    /// render as-is without a modifier class.
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        Self {
            status: PostStatus::parse(status),
        }
    }
}

impl Render for StatusBadge {
    fn render(&self) -> Markup {
        match self.status {
            Some(status) => html! {
                span class=(format!("status-badge status-{}", status.as_str())) {
                    (status.as_str())
                }
            },
            None => html! {
                span class="status-badge" { "unknown" }
            },
        }
    }
}
