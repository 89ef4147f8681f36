//! # notebin-api
//!
//! HTTP API layer for Notebin built on Axum.
//!
//! Provides the admin JSON endpoints, the public `/share` pages, middleware
//! (CORS, compression, request logging), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
