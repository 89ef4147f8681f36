//! # notebin-service
//!
//! Business logic for Notebin. Services are constructed once at startup with
//! their dependencies injected as `Arc`s and shared across handlers.
//!
//! - `share` — share link creation, resolution, listing and deletion
//! - `content` — the admin content store (save, get, delete, list)
//! - `admin` — one-time setup, login and session authentication

pub mod admin;
pub mod content;
pub mod context;
pub mod share;

pub use admin::AdminService;
pub use content::ContentService;
pub use context::RequestContext;
pub use share::{AccessService, LinkService, ShareService};
