use std::time::Duration;

use thiserror::Error;

/// Public origin of the CMS when `WORDPRESS_SITE_URL` is not set.
pub const DEFAULT_SITE_URL: &str = "https://mapleepoch.com";

/// Path of the WordPress core REST namespace below the site origin.
const REST_NAMESPACE: &str = "/wp-json/wp/v2";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to parse {name} as boolean: {value}")]
    ParseBool { name: String, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // CMS
    pub wordpress_site_url: String,
    pub wordpress_api_url: String,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,

    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Sessions
    pub session_ttl: Duration,
    pub session_cleanup_interval: Duration,
    pub secure_cookies: bool,
    pub dashboard_role: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required: a missing CMS URL falls back to the default origin.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let site_url = trim_trailing_slash(&env_or_default("WORDPRESS_SITE_URL", DEFAULT_SITE_URL));
        let api_url = optional_env("WORDPRESS_API_URL")
            .map_or_else(|| format!("{site_url}{REST_NAMESPACE}"), |u| trim_trailing_slash(&u));

        Ok(Self {
            // CMS
            wordpress_site_url: site_url,
            wordpress_api_url: api_url,
            cache_ttl: Duration::from_secs(parse_env_u64("CACHE_TTL_SECS", 300)?),
            request_timeout: Duration::from_secs(parse_env_u64("REQUEST_TIMEOUT_SECS", 10)?),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,

            // Sessions
            session_ttl: Duration::from_secs(parse_env_u64("SESSION_TTL_SECS", 86_400)?),
            session_cleanup_interval: Duration::from_secs(parse_env_u64(
                "SESSION_CLEANUP_INTERVAL_SECS",
                3600,
            )?),
            secure_cookies: parse_env_bool("SECURE_COOKIES", false)?,
            dashboard_role: env_or_default("DASHBOARD_ROLE", "author"),
        })
    }

    /// Configuration with defaults and no environment lookups, for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            wordpress_site_url: DEFAULT_SITE_URL.to_string(),
            wordpress_api_url: format!("{DEFAULT_SITE_URL}{REST_NAMESPACE}"),
            cache_ttl: Duration::from_secs(300),
            request_timeout: Duration::from_secs(10),
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
            session_ttl: Duration::from_secs(3600),
            session_cleanup_interval: Duration::from_secs(3600),
            secure_cookies: false,
            dashboard_role: "author".to_string(),
        }
    }

    /// Point both CMS URLs at a single origin (e.g. a mock server).
    #[must_use]
    pub fn with_site_url(mut self, site_url: &str) -> Self {
        self.wordpress_site_url = trim_trailing_slash(site_url);
        self.wordpress_api_url = format!("{}{REST_NAMESPACE}", self.wordpress_site_url);
        self
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("WORDPRESS_SITE_URL", &self.wordpress_site_url),
            ("WORDPRESS_API_URL", &self.wordpress_api_url),
        ] {
            if let Err(e) = url::Url::parse(value) {
                return Err(ConfigError::InvalidValue {
                    name: name.to_string(),
                    message: format!("'{value}' is not a valid URL: {e}"),
                });
            }
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "REQUEST_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.session_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "SESSION_TTL_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.dashboard_role.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "DASHBOARD_ROLE".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn trim_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::ParseBool {
                name: name.to_string(),
                value: val,
            }),
        },
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const VARS: &[&str] = &[
        "WORDPRESS_SITE_URL",
        "WORDPRESS_API_URL",
        "CACHE_TTL_SECS",
        "REQUEST_TIMEOUT_SECS",
        "SECURE_COOKIES",
    ];

    fn clear_vars() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_environment() {
        clear_vars();
        let config = Config::from_env().unwrap();

        assert_eq!(config.wordpress_site_url, "https://mapleepoch.com");
        assert_eq!(
            config.wordpress_api_url,
            "https://mapleepoch.com/wp-json/wp/v2"
        );
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(!config.secure_cookies);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_api_url_derived_from_site_url() {
        clear_vars();
        std::env::set_var("WORDPRESS_SITE_URL", "https://cms.example.org/");
        let config = Config::from_env().unwrap();
        clear_vars();

        assert_eq!(config.wordpress_site_url, "https://cms.example.org");
        assert_eq!(
            config.wordpress_api_url,
            "https://cms.example.org/wp-json/wp/v2"
        );
    }

    #[test]
    #[serial]
    fn test_explicit_api_url_wins() {
        clear_vars();
        std::env::set_var("WORDPRESS_API_URL", "https://api.example.org/wp/v2/");
        let config = Config::from_env().unwrap();
        clear_vars();

        assert_eq!(config.wordpress_api_url, "https://api.example.org/wp/v2");
    }

    #[test]
    #[serial]
    fn test_invalid_numbers_are_rejected() {
        clear_vars();
        std::env::set_var("CACHE_TTL_SECS", "five minutes");
        let result = Config::from_env();
        clear_vars();

        assert!(matches!(result, Err(ConfigError::ParseInt { .. })));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_env_bool("NONEXISTENT_VAR", true).unwrap());
        assert!(!parse_env_bool("NONEXISTENT_VAR", false).unwrap());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = Config::for_testing();
        config.wordpress_api_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_site_url() {
        let config = Config::for_testing().with_site_url("http://127.0.0.1:9999/");
        assert_eq!(config.wordpress_site_url, "http://127.0.0.1:9999");
        assert_eq!(
            config.wordpress_api_url,
            "http://127.0.0.1:9999/wp-json/wp/v2"
        );
    }
}
