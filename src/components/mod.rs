//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout and navigation
//! - `badge`: Category, story flag and post status badges
//! - `alert`: Alert messages
//! - `card`: Article cards, grids, section blocks and the hero
//! - `form`: Form elements for sign-in and the dashboard
//! - `metadata`: Open Graph / Twitter Card tags
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{Alert, ArticleGrid, BaseLayout};
//!
//! fn my_page(posts: &[DisplayPost]) -> Markup {
//!     let content = html! {
//!         h1 { "Latest" }
//!         (Alert::info("Showing cached stories"))
//!         (ArticleGrid::new(posts))
//!     };
//!     BaseLayout::new("Latest", None).render(content)
//! }
//! ```

pub mod alert;
pub mod badge;
pub mod card;
pub mod form;
pub mod layout;
pub mod metadata;

pub use alert::{Alert, AlertVariant};
pub use badge::{CategoryBadge, FlagBadge, FlagVariant, StatusBadge};
pub use card::{ArticleCard, ArticleGrid, ArticleMeta, EmptyState, HeroSection, SectionBlock};
pub use form::{Form, FormGroup, HiddenInput, Input, Select, SelectOption, TextArea};
pub use layout::BaseLayout;
pub use metadata::{truncate_text, OpenGraphMetadata};

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
