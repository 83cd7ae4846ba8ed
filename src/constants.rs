//! Shared constants used across the application.

/// User agent string sent with every request to the CMS.
pub const CMS_USER_AGENT: &str = concat!("maple-epoch-news/", env!("CARGO_PKG_VERSION"));

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";
