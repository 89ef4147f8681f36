//! Session cookie construction.

use cookie::time::Duration;
use cookie::{Cookie, SameSite};

use notebin_core::config::session::SessionConfig;

/// Cookie carrying a freshly issued session token.
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .http_only(true)
        .secure(config.secure_cookie)
        .path("/")
        .max_age(Duration::seconds(config.max_age_seconds))
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie that clears the session on the client.
pub fn clear_session_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), ""))
        .http_only(true)
        .secure(config.secure_cookie)
        .path("/")
        .max_age(Duration::ZERO)
        .same_site(SameSite::Lax)
        .build()
}
