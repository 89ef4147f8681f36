//! # notebin-core
//!
//! Core crate for Notebin. Contains the blob store trait, configuration
//! schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Notebin crates.

pub mod config;
pub mod error;
pub mod http;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
