pub mod cleanup;
pub mod csrf;
pub mod middleware;
pub mod session;
pub mod wordpress;

pub use csrf::{generate_csrf_token, verify_csrf_token};
pub use middleware::{session_token, MaybeSession, RequireAuthor, RequireSession};
pub use session::{
    clear_session_cookie, generate_session_token, session_cookie, Session, SessionStore,
    SessionUser,
};
pub use wordpress::{Login, WordPressAuthenticator};
