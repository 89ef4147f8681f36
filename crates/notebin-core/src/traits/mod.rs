//! Core traits defined in `notebin-core` and implemented by other crates.

pub mod blob;

pub use blob::{BlobMeta, BlobStore};
