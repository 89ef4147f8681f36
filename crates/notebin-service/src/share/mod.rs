//! Share management: create, resolve, list and revoke share links.

pub mod access;
pub mod link;
pub mod service;

pub use access::{AccessService, ShareAccess, SharedContent};
pub use link::LinkService;
pub use service::{CreateShareRequest, ShareService};
