//! Maple Epoch news front end.
//!
//! Renders a news site from a WordPress CMS over its REST API, with a
//! response cache, built-in fallback stories, and an author dashboard that
//! writes back to the CMS on the author's behalf.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod auth;
pub mod components;
pub mod config;
pub mod constants;
pub mod content;
pub mod web;
pub mod wordpress;
