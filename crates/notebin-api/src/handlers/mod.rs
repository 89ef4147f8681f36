//! Route handlers organized by domain.

pub mod auth;
pub mod content;
pub mod health;
pub mod public;
pub mod share;
