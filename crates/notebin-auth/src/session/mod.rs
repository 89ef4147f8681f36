//! Admin session handling.

pub mod cookie;
pub mod token;

pub use token::SessionToken;

/// Pick the session token from a request: the cookie when present,
/// otherwise the access-token header. Empty values count as absent.
pub fn presented_token<'a>(cookie: Option<&'a str>, header: Option<&'a str>) -> Option<&'a str> {
    cookie
        .filter(|value| !value.is_empty())
        .or_else(|| header.filter(|value| !value.is_empty()))
}
