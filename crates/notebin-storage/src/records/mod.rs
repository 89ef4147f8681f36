//! System records persisted inside the blob namespace.

pub mod admin;
pub mod share;

pub use admin::AdminConfigStore;
pub use share::ShareIndex;
