use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, thread_rng, Rng};

use super::csrf::generate_csrf_token;
use crate::constants::SESSION_COOKIE;
use crate::wordpress::WpUser;

/// Generate a cryptographically secure random session token.
pub fn generate_session_token() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// The CMS account behind a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub roles: Vec<String>,
}

impl SessionUser {
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl From<WpUser> for SessionUser {
    fn from(user: WpUser) -> Self {
        let roles = if user.roles.is_empty() {
            vec!["subscriber".to_string()]
        } else {
            user.roles
        };
        let name = if user.name.is_empty() {
            user.slug.clone()
        } else {
            user.name
        };
        Self {
            id: user.id,
            name,
            slug: user.slug,
            roles,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub user: SessionUser,
    /// Bearer token for authoring requests on the user's behalf.
    pub cms_token: String,
    pub csrf_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// In-memory session store keyed by session token. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a session and return its token.
    pub fn create(&self, user: SessionUser, cms_token: String) -> String {
        let token = generate_session_token();
        let ttl = chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::days(1));
        let session = Session {
            user,
            cms_token,
            csrf_token: generate_csrf_token(),
            expires_at: Utc::now() + ttl,
        };

        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), session);
        token
    }

    /// Look up a live session. An expired one is removed.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<Session> {
        let session = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()?;

        if session.is_expired(Utc::now()) {
            self.remove(token);
            return None;
        }
        Some(session)
    }

    pub fn remove(&self, token: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .is_some()
    }

    /// Drop every expired session, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        before - sessions.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `Set-Cookie` value starting a session.
#[must_use]
pub fn session_cookie(token: &str, ttl: Duration, secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        ttl.as_secs()
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value ending a session.
#[must_use]
pub fn clear_session_cookie(secure: bool) -> String {
    let mut cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> SessionUser {
        SessionUser {
            id: 5,
            name: "Sarah Mitchell".to_string(),
            slug: "sarah".to_string(),
            roles: vec!["author".to_string()],
        }
    }

    #[test]
    fn test_generate_session_token() {
        let token1 = generate_session_token();
        let token2 = generate_session_token();

        assert_eq!(token1.len(), 64);
        assert_eq!(token2.len(), 64);
        assert_ne!(token1, token2); // Should be unique
        assert!(token1.chars().all(|c| c.is_alphanumeric()));
    }

    #[test]
    fn test_create_get_remove() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.create(author(), "jwt".to_string());

        let session = store.get(&token).unwrap();
        assert_eq!(session.user.id, 5);
        assert_eq!(session.cms_token, "jwt");
        assert_eq!(session.csrf_token.len(), 32);

        assert!(store.remove(&token));
        assert!(store.get(&token).is_none());
        assert!(!store.remove(&token));
    }

    #[test]
    fn test_expired_session_is_dropped_on_access() {
        let store = SessionStore::new(Duration::ZERO);
        let token = store.create(author(), "jwt".to_string());

        assert!(store.get(&token).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_purge_expired() {
        let expired = SessionStore::new(Duration::ZERO);
        expired.create(author(), "a".to_string());
        expired.create(author(), "b".to_string());
        assert_eq!(expired.purge_expired(), 2);

        let live = SessionStore::new(Duration::from_secs(60));
        live.create(author(), "c".to_string());
        assert_eq!(live.purge_expired(), 0);
        assert_eq!(live.len(), 1);
    }

    #[test]
    fn test_user_without_roles_is_subscriber() {
        let user = SessionUser::from(WpUser {
            id: 9,
            name: String::new(),
            slug: "reader".to_string(),
            email: String::new(),
            roles: vec![],
        });
        assert_eq!(user.roles, vec!["subscriber".to_string()]);
        assert_eq!(user.name, "reader");
        assert!(!user.has_role("author"));
    }

    #[test]
    fn test_cookies() {
        let cookie = session_cookie("abc", Duration::from_secs(60), false);
        assert_eq!(cookie, "session=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=60");
        assert!(session_cookie("abc", Duration::from_secs(60), true).ends_with("; Secure"));
        assert!(clear_session_cookie(false).contains("Max-Age=0"));
    }
}
