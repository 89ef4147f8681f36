//! Custom Axum extractors.

pub mod auth;
pub mod origin;

pub use auth::{AdminSession, MaybeAdmin};
pub use origin::RequestOrigin;
