//! # notebin-auth
//!
//! Admin authentication for Notebin.
//!
//! ## Modules
//!
//! - `credentials` — constant-time comparison of presented credentials
//! - `session` — session token codec, cookie construction, and token lookup

pub mod credentials;
pub mod session;

pub use credentials::credentials_match;
pub use session::{SessionToken, presented_token};
