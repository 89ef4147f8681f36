//! # notebin-entity
//!
//! Domain entity models for Notebin. Every struct in this crate is either a
//! record persisted in the blob store (share descriptors, the admin config)
//! or a value object handed back to callers.

pub mod admin;
pub mod keys;
pub mod share;
