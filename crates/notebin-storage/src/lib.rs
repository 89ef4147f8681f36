//! # notebin-storage
//!
//! Blob store implementations for Notebin (local filesystem, in-memory and
//! S3-compatible object stores) plus the two system records kept inside the
//! blob namespace: the share index and the admin config.

pub mod providers;
pub mod records;

pub use providers::{LocalBlobStore, MemoryBlobStore, open_blob_store};
pub use records::{AdminConfigStore, ShareIndex};
